//! Frequently reached positions served by `GET /api/positions`.
//!
//! Static data; nothing here calls into the engine.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Rating {
    pub standard: u32,
    pub rapid: u32,
    pub blitz: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Player {
    pub firstname: &'static str,
    pub lastname: &'static str,
    pub rating: Rating,
    /// Portrait file name, relative to the static image directory.
    pub image: &'static str,
}

/// A position and how often it was reached.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PositionRecord {
    pub count: u32,
    pub fen: &'static str,
    pub frequent_player: Player,
}

const POSITIONS: [PositionRecord; 2] = [
    PositionRecord {
        count: 22,
        fen: "rnbqkbnr/pppppppp/8/8/8/4P3/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
        frequent_player: Player {
            firstname: "Magnus",
            lastname: "Carlsen",
            rating: Rating {
                standard: 2882,
                rapid: 2895,
                blitz: 2920,
            },
            image: "magnus_carlsen.jpeg",
        },
    },
    PositionRecord {
        count: 13,
        fen: "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq - 0 1",
        frequent_player: Player {
            firstname: "Fabiano",
            lastname: "Caruana",
            rating: Rating {
                standard: 2818,
                rapid: 2807,
                blitz: 2772,
            },
            image: "fabiano_caruana.jpeg",
        },
    },
];

/// Every known position, most frequent first.
pub fn all() -> &'static [PositionRecord] {
    &POSITIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fen;

    #[test]
    fn every_record_has_a_valid_fen() {
        for record in all() {
            assert!(fen::validate(record.fen), "{}", record.fen);
        }
    }

    #[test]
    fn sorted_by_count() {
        let counts: Vec<u32> = all().iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![22, 13]);
    }

    #[test]
    fn serializes_with_snake_case_field_names() {
        let json = serde_json::to_value(all()[0]).unwrap();
        assert_eq!(json["count"], 22);
        assert_eq!(json["frequent_player"]["lastname"], "Carlsen");
        assert_eq!(json["frequent_player"]["rating"]["blitz"], 2920);
        assert_eq!(json["frequent_player"]["image"], "magnus_carlsen.jpeg");
    }
}
