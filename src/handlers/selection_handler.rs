use log::{info, warn};
use thiserror::Error;

use crate::{
    config::SELECTION_SIZE,
    error::StorageError,
    models::game::{Question, QuestionId},
    storage::{kv::KeyValueStore, session_store::SessionStore},
};

#[derive(Debug, Error)]
pub enum SelectionError {
    /// Five questions are already picked.
    #[error("يمكن اختيار 5 أسئلة فقط للعبة")]
    SelectionFull,
    /// Saving needs exactly five picks.
    #[error("يجب اختيار 5 أسئلة بالضبط")]
    WrongSize(usize),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSelection {
    picked: Vec<Question>,
}

impl QuestionSelection {
    pub fn new() -> Self {
        QuestionSelection::default()
    }

    pub fn picked(&self) -> &[Question] {
        &self.picked
    }

    pub fn is_picked(&self, id: QuestionId) -> bool {
        self.picked.iter().any(|question| question.id == id)
    }

    pub fn is_complete(&self) -> bool {
        self.picked.len() == SELECTION_SIZE
    }

    /// Unpicks a picked question, otherwise picks it while there is room.
    /// Returns whether the question is picked afterwards.
    pub fn toggle(&mut self, question: &Question) -> Result<bool, SelectionError> {
        if self.is_picked(question.id) {
            self.picked.retain(|picked| picked.id != question.id);
            return Ok(false);
        }
        if self.picked.len() >= SELECTION_SIZE {
            warn!("Selection full, ignoring question: {}", question.id);
            return Err(SelectionError::SelectionFull);
        }
        self.picked.push(question.clone());
        Ok(true)
    }

    pub fn save<S: KeyValueStore>(
        &self,
        session_store: &SessionStore<S>,
    ) -> Result<(), SelectionError> {
        if !self.is_complete() {
            return Err(SelectionError::WrongSize(self.picked.len()));
        }
        session_store.try_set_selected_questions(&self.picked)?;
        info!("Saved question selection");
        Ok(())
    }
}
