use log::{info, warn};
use thiserror::Error;

use crate::{
    models::{
        admin::AdminRevealState,
        game::{sum_points, Multiplier, Question, Team, TeamNames},
    },
    storage::{kv::KeyValueStore, session_store::SessionStore},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// No team chosen or no amount typed.
    #[error("يرجى اختيار الفريق وإدخال النقاط")]
    MissingInput,
    /// The amount is not a positive whole number.
    #[error("قيمة النقاط غير صالحة: {0}")]
    InvalidAmount(String),
}

/// The moderator's panel. It loads the same selection and team names the
/// players' screen does but keeps its own reveals and scores; nothing here
/// reaches a running `GameSession`.
pub struct AdminReveal {
    question: Option<Question>,
    team_names: TeamNames,
    state: AdminRevealState,
}

impl AdminReveal {
    pub fn new(question: Option<Question>, team_names: TeamNames) -> Self {
        AdminReveal {
            question,
            team_names,
            state: AdminRevealState::default(),
        }
    }

    pub fn load<S: KeyValueStore>(session_store: &SessionStore<S>) -> Self {
        let question = session_store.get_selected_questions().into_iter().next();
        AdminReveal::new(question, session_store.get_team_names())
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn team_names(&self) -> &TeamNames {
        &self.team_names
    }

    pub fn state(&self) -> &AdminRevealState {
        &self.state
    }

    pub fn reveal_all(&mut self) {
        if let Some(question) = &self.question {
            self.state.revealed_answers = (0..question.answers.len()).collect();
        }
    }

    pub fn hide_all(&mut self) {
        self.state.revealed_answers.clear();
    }

    /// Flips one answer. Returns whether it is now revealed.
    pub fn toggle(&mut self, index: usize) -> bool {
        let answer_count = self
            .question
            .as_ref()
            .map(|question| question.answers.len())
            .unwrap_or(0);
        if index >= answer_count {
            warn!("Admin: answer {} out of range", index);
            return false;
        }

        if !self.state.revealed_answers.remove(&index) {
            self.state.revealed_answers.insert(index);
            true
        } else {
            false
        }
    }

    pub fn sum_revealed_points(&self) -> u32 {
        match &self.question {
            Some(question) => sum_points(question, self.state.revealed_answers.iter().copied()),
            None => 0,
        }
    }

    /// The revealed sum with the panel's multiplier, for display only.
    pub fn display_points(&self) -> u32 {
        self.state.multiplier.apply(self.sum_revealed_points())
    }

    pub fn set_multiplier(&mut self, multiplier: Multiplier) {
        self.state.multiplier = multiplier;
    }

    /// Adds a typed amount times the multiplier to a team. Returns the points added.
    pub fn add_manual_points(
        &mut self,
        team: Option<Team>,
        amount: &str,
    ) -> Result<u32, AdminError> {
        let amount = amount.trim();
        let team = match team {
            Some(team) if !amount.is_empty() => team,
            _ => return Err(AdminError::MissingInput),
        };
        let base = match amount.parse::<u32>() {
            Ok(base) if base > 0 => base,
            _ => return Err(AdminError::InvalidAmount(amount.to_string())),
        };

        let points = self.state.multiplier.apply(base);
        self.state.scores.add(team, points);
        info!(
            "Admin: added {} points to {}",
            points,
            self.team_names.name(team)
        );
        Ok(points)
    }

    /// Zeroes both scores, only once the moderator confirmed.
    pub fn reset_scores(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        self.state.scores = Default::default();
        info!("Admin: scores reset");
        true
    }
}
