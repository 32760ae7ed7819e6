use crate::codec::{Text, layout};

layout! {
    /// Level of a facility and the turns left on any construction in progress.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Works {
        pub level: u8,
        pub time: u8,
    }
}

layout! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct StandCapacity {
        pub seating: u16,
        /// Non-zero when the stand is terracing rather than seats.
        pub terraces: u8,
    }
}

layout! {
    /// The ground of a manager's club, four stands and the shared facilities.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Stadium {
        pub stands: [Text<20>; 4],
        pub seating_build: [Works; 4],
        pub conversion: [Works; 4],
        pub area_covering: [Works; 4],
        pub ground_facilities: Works,
        pub supporters_club: Works,
        pub flood_lights: Works,
        pub scoreboard: Works,
        pub undersoil_heating: Works,
        pub changing_rooms: Works,
        pub gymnasium: Works,
        pub car_park: Works,
        pub safety_rating: [u8; 4],
        pub capacity: [StandCapacity; 4],
    }
}

impl Stadium {
    pub fn total_capacity(&self) -> u32 {
        self.capacity.iter().map(|stand| u32::from(stand.seating)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Record;

    #[test]
    fn stadium_size() {
        assert_eq!(Stadium::SIZE, 136);
    }

    #[test]
    fn total_capacity_sums_stands() {
        let mut stadium = Stadium::default();
        for (stand, seats) in stadium.capacity.iter_mut().zip([10_000, 5_000, 2_500, 500]) {
            stand.seating = seats;
        }
        assert_eq!(stadium.total_capacity(), 18_000);
    }
}
