use log::info;
use thiserror::Error;

use crate::{
    config::SELECTION_SIZE,
    error::StorageError,
    helpers::is_blank,
    models::game::{CategoryFilter, Question},
    storage::{kv::KeyValueStore, session_store::SessionStore},
};

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("يجب اختيار 5 أسئلة على الأقل للبدء")]
    NotEnoughQuestions(usize),
    #[error("يرجى إدخال أسماء الفريقين")]
    MissingTeamNames,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Seeds the catalog if needed and proposes its first questions for the next game.
pub fn prepare_selection<S: KeyValueStore>(session_store: &SessionStore<S>) -> Vec<Question> {
    let questions = session_store.questions();
    questions.initialize();
    let mut selection = questions.list(&CategoryFilter::All);
    selection.truncate(SELECTION_SIZE);
    selection
}

/// Stores the selection the game will read, then both team names. A failed
/// selection write leaves the previous team names in place.
pub fn setup_teams<S: KeyValueStore>(
    session_store: &SessionStore<S>,
    team1: &str,
    team2: &str,
    selection: &[Question],
) -> Result<(), SetupError> {
    if selection.len() < SELECTION_SIZE {
        return Err(SetupError::NotEnoughQuestions(selection.len()));
    }
    if is_blank(team1) || is_blank(team2) {
        return Err(SetupError::MissingTeamNames);
    }

    session_store.try_set_selected_questions(selection)?;
    session_store.try_set_team_names(team1, team2)?;
    info!("Teams ready: {} vs {}", team1, team2);
    Ok(())
}
