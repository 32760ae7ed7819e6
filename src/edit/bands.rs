use crate::world::{Stadium, TicketPrices};
use std::ops::Range;

/// Starting ground and prices for a manager taking over a club of one division.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    pub clubs: Range<usize>,
    pub division: u8,
    pub ground_facilities: u8,
    pub supporters_club: u8,
    pub flood_lights: u8,
    pub scoreboard: u8,
    pub undersoil_heating: u8,
    pub changing_rooms: u8,
    pub gymnasium: u8,
    pub car_park: u8,
    pub safety_rating: u8,
    pub seating: u16,
    pub terraces: u8,
    pub conversion: u8,
    pub area_covering: u8,
    pub prices: TicketPrices,
}

/// Club index ranges of the five English divisions, premier league first.
pub static BANDS: [Band; 5] = [
    Band {
        clubs: 0..22,
        division: 0,
        ground_facilities: 3,
        supporters_club: 3,
        flood_lights: 2,
        scoreboard: 3,
        undersoil_heating: 1,
        changing_rooms: 2,
        gymnasium: 3,
        car_park: 2,
        safety_rating: 4,
        seating: 10_000,
        terraces: 0,
        conversion: 2,
        area_covering: 3,
        prices: TicketPrices {
            league_seating: 15,
            league_terrace: 13,
            cup_seating: 18,
            cup_terrace: 15,
        },
    },
    Band {
        clubs: 22..46,
        division: 1,
        ground_facilities: 2,
        supporters_club: 2,
        flood_lights: 2,
        scoreboard: 2,
        undersoil_heating: 1,
        changing_rooms: 2,
        gymnasium: 2,
        car_park: 2,
        safety_rating: 3,
        seating: 5_000,
        terraces: 0,
        conversion: 2,
        area_covering: 2,
        prices: TicketPrices {
            league_seating: 13,
            league_terrace: 11,
            cup_seating: 16,
            cup_terrace: 13,
        },
    },
    Band {
        clubs: 46..70,
        division: 2,
        ground_facilities: 2,
        supporters_club: 2,
        flood_lights: 1,
        scoreboard: 2,
        undersoil_heating: 0,
        changing_rooms: 1,
        gymnasium: 2,
        car_park: 1,
        safety_rating: 2,
        seating: 2_500,
        terraces: 0,
        conversion: 1,
        area_covering: 1,
        prices: TicketPrices {
            league_seating: 11,
            league_terrace: 9,
            cup_seating: 14,
            cup_terrace: 11,
        },
    },
    Band {
        clubs: 70..92,
        division: 3,
        ground_facilities: 1,
        supporters_club: 1,
        flood_lights: 1,
        scoreboard: 1,
        undersoil_heating: 0,
        changing_rooms: 1,
        gymnasium: 1,
        car_park: 1,
        safety_rating: 1,
        seating: 1_000,
        terraces: 1,
        conversion: 0,
        area_covering: 0,
        prices: TicketPrices {
            league_seating: 9,
            league_terrace: 7,
            cup_seating: 12,
            cup_terrace: 9,
        },
    },
    Band {
        clubs: 92..114,
        division: 4,
        ground_facilities: 1,
        supporters_club: 1,
        flood_lights: 0,
        scoreboard: 1,
        undersoil_heating: 0,
        changing_rooms: 0,
        gymnasium: 1,
        car_park: 0,
        safety_rating: 0,
        seating: 500,
        terraces: 1,
        conversion: 0,
        area_covering: 0,
        prices: TicketPrices {
            league_seating: 7,
            league_terrace: 5,
            cup_seating: 10,
            cup_terrace: 7,
        },
    },
];

impl Band {
    pub fn for_club(idx: usize) -> Option<&'static Band> {
        BANDS.iter().find(|band| band.clubs.contains(&idx))
    }

    /// Overwrites facility levels, safety ratings and stand capacities.
    /// Construction timers and stand names are left alone.
    pub fn apply_to(&self, stadium: &mut Stadium) {
        stadium.ground_facilities.level = self.ground_facilities;
        stadium.supporters_club.level = self.supporters_club;
        stadium.flood_lights.level = self.flood_lights;
        stadium.scoreboard.level = self.scoreboard;
        stadium.undersoil_heating.level = self.undersoil_heating;
        stadium.changing_rooms.level = self.changing_rooms;
        stadium.gymnasium.level = self.gymnasium;
        stadium.car_park.level = self.car_park;

        stadium.safety_rating = [self.safety_rating; 4];
        for stand in &mut stadium.capacity {
            stand.seating = self.seating;
            stand.terraces = self.terraces;
        }
        for works in &mut stadium.conversion {
            works.level = self.conversion;
        }
        for works in &mut stadium.area_covering {
            works.level = self.area_covering;
        }
    }
}
