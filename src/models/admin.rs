use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::game::{Multiplier, TeamScores};

/// Moderator-side view state. Shares nothing with a running `GameSessionState`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminRevealState {
    pub revealed_answers: BTreeSet<usize>,
    pub multiplier: Multiplier,
    pub scores: TeamScores,
}
