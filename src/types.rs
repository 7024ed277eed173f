//! Common types used throughout the rating crate

use serde::{Deserialize, Serialize};

/// Identifier of a rated entity (player, agent, algorithm)
pub type EntityId = String;

/// Rating change produced by a single update of one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub name: EntityId,
    pub opponent: EntityId,
    pub old_rating: f64,
    pub new_rating: f64,
    /// Expected single-game win rate under the pre-update ratings
    pub expected_score: f64,
    pub n_wins: f64,
    pub n_games: f64,
}

impl RatingChange {
    /// How much the rating moved (+/-)
    pub fn delta(&self) -> f64 {
        self.new_rating - self.old_rating
    }
}

/// Win/draw/loss tally of one entity against one opponent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl MatchTally {
    pub fn new(wins: u32, draws: u32, losses: u32) -> Self {
        Self {
            wins,
            draws,
            losses,
        }
    }

    /// Wins with half credit for each draw
    pub fn score(&self) -> f64 {
        f64::from(self.wins) + 0.5 * f64::from(self.draws)
    }

    pub fn games(&self) -> f64 {
        f64::from(self.wins) + f64::from(self.draws) + f64::from(self.losses)
    }

    /// The same tally seen from the opponent's side
    pub fn reversed(&self) -> Self {
        Self {
            wins: self.losses,
            draws: self.draws,
            losses: self.wins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_change_delta() {
        let change = RatingChange {
            name: "a".to_string(),
            opponent: "b".to_string(),
            old_rating: 1500.0,
            new_rating: 1484.0,
            expected_score: 0.5,
            n_wins: 0.0,
            n_games: 1.0,
        };
        assert_eq!(change.delta(), -16.0);
    }

    #[test]
    fn test_match_tally_scoring() {
        let tally = MatchTally::new(3, 2, 1);
        assert_eq!(tally.score(), 4.0);
        assert_eq!(tally.games(), 6.0);

        let reversed = tally.reversed();
        assert_eq!(reversed, MatchTally::new(1, 2, 3));
        assert_eq!(tally.score() + reversed.score(), tally.games());
    }

    #[test]
    fn test_rating_change_serialization() {
        let change = RatingChange {
            name: "a".to_string(),
            opponent: "b".to_string(),
            old_rating: 1500.0,
            new_rating: 1516.0,
            expected_score: 0.5,
            n_wins: 1.0,
            n_games: 1.0,
        };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["name"], "a");
        assert_eq!(json["new_rating"], 1516.0);
    }
}
