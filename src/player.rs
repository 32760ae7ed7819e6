use crate::codec::{DecodeError, EncodeError, Reader, Record, Text, Writer, layout};
use crate::consts::*;
use crate::error::{Error, Result};
use std::io::Write;

layout! {
    /// One entry of the player table (`GAME<N>C`).
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Player {
        pub name: Text<12>,
        pub age: u8,
        pub wage: u16,
        pub insured: u8,
        pub insurance_cost: u16,
        pub handling: u8,
        pub tackling: u8,
        pub passing: u8,
        pub shooting: u8,
        pub heading: u8,
        pub control: u8,
        pub fitness: u8,
        pub aggression: u8,
        pub morale: u8,
        /// 0 = left, 1 = right, 2 = both.
        pub foot: u8,
        pub played: u8,
        pub scored: u8,
        pub disciplinary_points: u8,
        pub training: u8,
        pub intensity: u8,
        /// Remaining contract length in years; 0 means the player is free to leave.
        pub contract: u8,
        /// Injury or suspension kind, see [`Player::unavailable_for`].
        pub period_type: u8,
        pub period: u8,
        pub reserved: [u8; 4],
    }
}

const _: () = assert!(Player::SIZE == PLAYER_SIZE);

/// Position inferred from the strongest of the four outfield/keeping skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
}

impl Player {
    /// A skill that strictly beats the other three decides the position.
    /// Without a strict maximum the player counts as an attacker.
    pub fn kind(&self) -> PlayerKind {
        let (hn, tk, ps, sh) = (self.handling, self.tackling, self.passing, self.shooting);
        if hn > tk && hn > ps && hn > sh {
            PlayerKind::Goalkeeper
        } else if tk > hn && tk > ps && tk > sh {
            PlayerKind::Defender
        } else if ps > hn && ps > tk && ps > sh {
            PlayerKind::Midfielder
        } else {
            PlayerKind::Attacker
        }
    }

    /// The skill matching [`Player::kind`].
    pub fn rating(&self) -> u8 {
        match self.kind() {
            PlayerKind::Goalkeeper => self.handling,
            PlayerKind::Defender => self.tackling,
            PlayerKind::Midfielder => self.passing,
            PlayerKind::Attacker => self.shooting,
        }
    }

    /// Remaining injury or suspension length; the stored value counts days
    /// and is rounded up to whole weeks (or matches).
    pub fn unavailable_for(&self) -> u8 {
        self.period.div_ceil(DAYS_PER_WEEK as u8)
    }

    pub fn is_free_agent(&self) -> bool {
        self.contract == 0
    }
}

/// The whole player table, exactly [`PLAYER_COUNT`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDatabase {
    players: Vec<Player>,
}

impl PlayerDatabase {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Resolves a stored player index. Anything outside `[0, PLAYER_COUNT)`,
    /// the `-1` sentinel included, is rejected.
    pub fn get(&self, idx: i32) -> Result<&Player> {
        checked(idx)
            .map(|i| &self.players[i])
            .ok_or(Error::PlayerIndexOutOfRange(idx))
    }

    pub fn get_mut(&mut self, idx: i32) -> Result<&mut Player> {
        checked(idx)
            .map(|i| &mut self.players[i])
            .ok_or(Error::PlayerIndexOutOfRange(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }
}

fn checked(idx: i32) -> Option<usize> {
    usize::try_from(idx).ok().filter(|&i| i < PLAYER_COUNT)
}

impl Record for PlayerDatabase {
    const SIZE: usize = Player::SIZE * PLAYER_COUNT;

    fn read_from(r: &mut Reader<'_>) -> std::result::Result<Self, DecodeError> {
        let players = (0..PLAYER_COUNT)
            .map(|_| Player::read_from(r))
            .collect::<std::result::Result<_, _>>()?;
        Ok(Self { players })
    }

    fn write_to<W: Write>(&self, w: &mut Writer<W>) -> std::result::Result<(), EncodeError> {
        for player in &self.players {
            player.write_to(w)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::tests::noise;
    use crate::codec::{decode, encode};
    use insta::assert_debug_snapshot;

    fn make_player(hn: u8, tk: u8, ps: u8, sh: u8) -> Player {
        Player {
            handling: hn,
            tackling: tk,
            passing: ps,
            shooting: sh,
            ..Player::default()
        }
    }

    #[test]
    fn player_record_is_forty_bytes() {
        assert_eq!(Player::SIZE, 0x28);
        assert_eq!(PlayerDatabase::SIZE, 0x28 * 3932);
    }

    #[test]
    fn decoding_reads_known_offsets() {
        let mut data = [0u8; PLAYER_SIZE];
        data[..7].copy_from_slice(b"SHEARER");
        data[12] = 24; // age
        data[13..15].copy_from_slice(&1250u16.to_le_bytes());
        data[18] = 40; // handling
        data[21] = 91; // shooting
        data[25] = 7; // aggression
        data[33] = 3; // contract

        let player: Player = decode(&data).unwrap();
        assert_eq!(player.name.to_string_lossy(), "SHEARER");
        assert_eq!(player.age, 24);
        assert_eq!(player.wage, 1250);
        assert_eq!(player.handling, 40);
        assert_eq!(player.shooting, 91);
        assert_eq!(player.aggression, 7);
        assert_eq!(player.contract, 3);
    }

    #[test]
    fn player_round_trips() {
        let data = noise(PLAYER_SIZE, 3);
        let player: Player = decode(&data).unwrap();
        assert_eq!(encode(&player).unwrap(), data);
    }

    #[test]
    fn database_round_trips() {
        let data = noise(PlayerDatabase::SIZE, 4);
        let players: PlayerDatabase = decode(&data).unwrap();
        assert_eq!(players.len(), PLAYER_COUNT);
        assert_eq!(encode(&players).unwrap(), data);
    }

    #[test]
    fn database_resolution_checks_bounds() {
        let players: PlayerDatabase = decode(&vec![0; PlayerDatabase::SIZE]).unwrap();
        assert!(players.get(0).is_ok());
        assert!(players.get(3931).is_ok());
        assert_debug_snapshot!(players.get(3932).unwrap_err(), @r###"
        PlayerIndexOutOfRange(
            3932,
        )
        "###);
        assert_debug_snapshot!(players.get(-1).unwrap_err(), @r###"
        PlayerIndexOutOfRange(
            -1,
        )
        "###);
    }

    #[test]
    fn kind_follows_strict_maximum() {
        assert_eq!(make_player(90, 10, 10, 10).kind(), PlayerKind::Goalkeeper);
        assert_eq!(make_player(10, 90, 10, 10).kind(), PlayerKind::Defender);
        assert_eq!(make_player(10, 10, 90, 10).kind(), PlayerKind::Midfielder);
        assert_eq!(make_player(10, 10, 10, 90).kind(), PlayerKind::Attacker);
        assert_eq!(make_player(80, 80, 10, 10).kind(), PlayerKind::Attacker);
    }

    #[test]
    fn rating_matches_kind() {
        assert_eq!(make_player(90, 10, 20, 30).rating(), 90);
        assert_eq!(make_player(10, 77, 20, 30).rating(), 77);
        assert_eq!(make_player(50, 50, 20, 30).rating(), 30);
    }

    #[test]
    fn unavailability_rounds_up() {
        let player = Player {
            period: 4,
            ..Player::default()
        };
        assert_eq!(player.unavailable_for(), 2);
    }
}
