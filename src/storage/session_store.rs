use log::{error, info};
use std::sync::Arc;

use super::{kv::KeyValueStore, question_store::QuestionStore};
use crate::{
    config::{SELECTED_QUESTIONS_KEY, SELECTION_SIZE, TEAM_NAMES_KEY},
    error::Result,
    helpers::{read_json, write_json},
    models::game::{CategoryFilter, Question, TeamNames},
};

/// The selected-questions and team-names slots shared by every screen.
pub struct SessionStore<S: KeyValueStore> {
    store: Arc<S>,
    questions: QuestionStore<S>,
}

impl<S: KeyValueStore> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        SessionStore {
            store: self.store.clone(),
            questions: self.questions.clone(),
        }
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        SessionStore {
            questions: QuestionStore::new(store.clone()),
            store,
        }
    }

    pub fn questions(&self) -> &QuestionStore<S> {
        &self.questions
    }

    /// Stores a copy of `questions`; later catalog edits do not reach it.
    pub fn try_set_selected_questions(&self, questions: &[Question]) -> Result<()> {
        write_json(self.store.as_ref(), SELECTED_QUESTIONS_KEY, questions)?;
        info!("Saved {} selected questions", questions.len());
        Ok(())
    }

    pub fn set_selected_questions(&self, questions: &[Question]) {
        if let Err(err) = self.try_set_selected_questions(questions) {
            error!("Error setting selected questions: {}", err);
        }
    }

    /// Falls back to the head of the catalog when nothing was selected yet.
    pub fn try_get_selected_questions(&self) -> Result<Vec<Question>> {
        match read_json(self.store.as_ref(), SELECTED_QUESTIONS_KEY)? {
            Some(selected) => Ok(selected),
            None => {
                let mut all = self.questions.try_list(&CategoryFilter::All)?;
                all.truncate(SELECTION_SIZE);
                Ok(all)
            }
        }
    }

    pub fn get_selected_questions(&self) -> Vec<Question> {
        match self.try_get_selected_questions() {
            Ok(questions) => questions,
            Err(err) => {
                error!("Error getting selected questions: {}", err);
                Vec::new()
            }
        }
    }

    pub fn try_set_team_names(&self, team1: &str, team2: &str) -> Result<()> {
        write_json(
            self.store.as_ref(),
            TEAM_NAMES_KEY,
            &TeamNames::new(team1, team2),
        )?;
        info!("Saved team names: {} / {}", team1, team2);
        Ok(())
    }

    pub fn set_team_names(&self, team1: &str, team2: &str) {
        if let Err(err) = self.try_set_team_names(team1, team2) {
            error!("Error setting team names: {}", err);
        }
    }

    pub fn try_get_team_names(&self) -> Result<TeamNames> {
        Ok(read_json(self.store.as_ref(), TEAM_NAMES_KEY)?.unwrap_or_default())
    }

    pub fn get_team_names(&self) -> TeamNames {
        self.try_get_team_names().unwrap_or_else(|err| {
            error!("Error getting team names: {}", err);
            TeamNames::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{
            game::{QuestionId, DEFAULT_TEAM1_NAME},
            seed::default_catalog,
        },
        storage::kv::{FailingStore, MemoryStore},
    };

    fn session_store() -> SessionStore<MemoryStore> {
        SessionStore::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn selection_falls_back_to_first_five() {
        let session = session_store();
        session.questions().initialize();
        let selected = session.get_selected_questions();
        assert_eq!(selected, default_catalog()[..5].to_vec());
    }

    #[test]
    fn fallback_returns_what_a_short_catalog_has() {
        let session = session_store();
        assert!(session.get_selected_questions().is_empty());

        session.questions().initialize();
        for id in 4..=15 {
            session.questions().delete(QuestionId::Int(id));
        }
        let selected = session.get_selected_questions();
        let ids: Vec<i64> = selected.iter().map(|q| q.id.floor()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn saved_selection_is_a_snapshot() {
        let session = session_store();
        session.questions().initialize();
        let picked: Vec<Question> = default_catalog()[5..10].to_vec();
        session.set_selected_questions(&picked);

        let mut edited = picked[0].clone();
        edited.question = "سؤال معدل".to_string();
        assert!(session.questions().update(edited));
        assert!(session.questions().delete(picked[1].id));

        assert_eq!(session.get_selected_questions(), picked);
    }

    #[test]
    fn team_names_default_until_set() {
        let session = session_store();
        assert_eq!(session.get_team_names(), TeamNames::default());
        assert_eq!(session.get_team_names().team1, DEFAULT_TEAM1_NAME);

        session.set_team_names("الصقور", "النمور");
        assert_eq!(session.get_team_names(), TeamNames::new("الصقور", "النمور"));
    }

    #[test]
    fn failing_store_degrades_to_defaults() {
        let session = SessionStore::new(Arc::new(FailingStore));
        session.set_team_names("a", "b");
        assert_eq!(session.get_team_names(), TeamNames::default());
        assert!(session.get_selected_questions().is_empty());
        assert!(session.try_get_team_names().is_err());
    }
}
