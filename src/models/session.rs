use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::game::{Multiplier, Team, TeamNames, TeamScores};

pub const DRAW_LABEL: &str = "تعادل";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Main,
    Speed,
    Final,
}

/// Everything a player-facing screen needs to render one moment of a game.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameSessionState {
    pub phase: GamePhase,
    /// 1-based, meaningful only in the main phase.
    pub round_index: usize,
    pub revealed_answers: BTreeSet<usize>,
    pub multiplier: Multiplier,
    pub scores: TeamScores,
    /// 0-based, meaningful only in the speed phase.
    pub speed_question_index: usize,
    /// Never credited by the regular flow.
    pub speed_bonus: TeamScores,
}

impl GameSessionState {
    pub fn new() -> Self {
        GameSessionState {
            phase: GamePhase::Main,
            round_index: 1,
            revealed_answers: BTreeSet::new(),
            multiplier: Multiplier::Single,
            scores: TeamScores::default(),
            speed_question_index: 0,
            speed_bonus: TeamScores::default(),
        }
    }
}

impl Default for GameSessionState {
    fn default() -> Self {
        GameSessionState::new()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "kind", content = "team", rename_all = "lowercase")]
pub enum Outcome {
    Winner(Team),
    Draw,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinalResult {
    pub outcome: Outcome,
    /// The winner's total, or the shared total on a draw.
    pub score: u32,
    pub totals: TeamScores,
}

impl FinalResult {
    pub fn from_totals(totals: TeamScores) -> Self {
        let outcome = if totals.team1 > totals.team2 {
            Outcome::Winner(Team::Team1)
        } else if totals.team2 > totals.team1 {
            Outcome::Winner(Team::Team2)
        } else {
            Outcome::Draw
        };

        let score = match outcome {
            Outcome::Winner(team) => totals.get(team),
            Outcome::Draw => totals.team1,
        };

        FinalResult {
            outcome,
            score,
            totals,
        }
    }

    pub fn winner_label<'a>(&self, names: &'a TeamNames) -> &'a str {
        match self.outcome {
            Outcome::Winner(team) => names.name(team),
            Outcome::Draw => DRAW_LABEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_totals_are_a_draw() {
        let result = FinalResult::from_totals(TeamScores {
            team1: 100,
            team2: 100,
        });
        assert_eq!(result.outcome, Outcome::Draw);
        assert_eq!(result.score, 100);
        assert_eq!(result.winner_label(&TeamNames::default()), DRAW_LABEL);
    }

    #[test]
    fn higher_total_wins() {
        let names = TeamNames::new("الصقور", "النمور");
        let result = FinalResult::from_totals(TeamScores {
            team1: 40,
            team2: 95,
        });
        assert_eq!(result.outcome, Outcome::Winner(Team::Team2));
        assert_eq!(result.score, 95);
        assert_eq!(result.winner_label(&names), "النمور");
    }
}
