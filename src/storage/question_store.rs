use chrono::Utc;
use log::{error, info, warn};
use std::sync::Arc;

use super::kv::KeyValueStore;
use crate::{
    config::{MIN_ANSWERS, QUESTIONS_KEY},
    error::{Result, StorageError},
    helpers::{is_blank, read_json, write_json},
    models::{
        game::{Answer, Category, CategoryFilter, NewQuestion, Question, QuestionId},
        seed::default_catalog,
    },
};

/// The persisted question catalog.
///
/// Every operation has a `try_` form that reports storage failures and a
/// plain form that logs them and degrades to an empty result or a no-op.
pub struct QuestionStore<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> Clone for QuestionStore<S> {
    fn clone(&self) -> Self {
        QuestionStore {
            store: self.store.clone(),
        }
    }
}

impl<S: KeyValueStore> QuestionStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        QuestionStore { store }
    }

    /// Writes the seed catalog unless one already exists. Returns whether it seeded.
    pub fn try_initialize(&self) -> Result<bool> {
        if self.store.get_item(QUESTIONS_KEY)?.is_some() {
            return Ok(false);
        }
        write_json(self.store.as_ref(), QUESTIONS_KEY, &default_catalog())?;
        info!("Seeded question catalog");
        Ok(true)
    }

    pub fn initialize(&self) {
        if let Err(err) = self.try_initialize() {
            error!("Error initializing questions: {}", err);
        }
    }

    pub fn try_list(&self, filter: &CategoryFilter) -> Result<Vec<Question>> {
        let questions: Vec<Question> =
            read_json(self.store.as_ref(), QUESTIONS_KEY)?.unwrap_or_default();
        Ok(questions
            .into_iter()
            .filter(|question| filter.matches(question))
            .collect())
    }

    pub fn list(&self, filter: &CategoryFilter) -> Vec<Question> {
        match self.try_list(filter) {
            Ok(questions) => questions,
            Err(err) => {
                error!("Error getting questions: {}", err);
                Vec::new()
            }
        }
    }

    pub fn try_add(&self, new_question: NewQuestion) -> Result<Question> {
        validate(&new_question.question, &new_question.category, &new_question.answers)?;

        let mut questions = self.try_list(&CategoryFilter::All)?;
        let question = new_question.with_id(next_id(&questions)?);
        questions.push(question.clone());
        write_json(self.store.as_ref(), QUESTIONS_KEY, &questions)?;

        info!("Added question: {}", question.id);
        Ok(question)
    }

    pub fn add(&self, new_question: NewQuestion) -> Option<Question> {
        match self.try_add(new_question) {
            Ok(question) => Some(question),
            Err(err) => {
                error!("Error adding question: {}", err);
                None
            }
        }
    }

    /// Replaces the question with the same id in place. Returns whether one matched.
    pub fn try_update(&self, question: Question) -> Result<bool> {
        validate(&question.question, &question.category, &question.answers)?;

        let mut questions = self.try_list(&CategoryFilter::All)?;
        let id = question.id;
        match questions.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => *existing = question,
            None => {
                warn!("No question to update with id: {}", id);
                return Ok(false);
            }
        }
        write_json(self.store.as_ref(), QUESTIONS_KEY, &questions)?;

        info!("Updated question: {}", id);
        Ok(true)
    }

    pub fn update(&self, question: Question) -> bool {
        self.try_update(question).unwrap_or_else(|err| {
            error!("Error updating question: {}", err);
            false
        })
    }

    pub fn try_delete(&self, id: QuestionId) -> Result<bool> {
        let mut questions = self.try_list(&CategoryFilter::All)?;
        let before = questions.len();
        questions.retain(|question| question.id != id);
        if questions.len() == before {
            warn!("No question to delete with id: {}", id);
            return Ok(false);
        }
        write_json(self.store.as_ref(), QUESTIONS_KEY, &questions)?;

        info!("Deleted question: {}", id);
        Ok(true)
    }

    pub fn delete(&self, id: QuestionId) -> bool {
        self.try_delete(id).unwrap_or_else(|err| {
            error!("Error deleting question: {}", err);
            false
        })
    }
}

fn validate(text: &str, category: &Category, answers: &[Answer]) -> Result<()> {
    if is_blank(text) {
        return Err(StorageError::Invalid("question text is empty".to_string()));
    }
    if !category.is_known() {
        return Err(StorageError::Invalid(format!(
            "unknown category: {}",
            category
        )));
    }
    if answers.len() < MIN_ANSWERS {
        return Err(StorageError::Invalid(format!(
            "expected at least {} answers, got {}",
            MIN_ANSWERS,
            answers.len()
        )));
    }
    Ok(())
}

/// Millisecond timestamp, bumped past the largest id already in use.
fn next_id(existing: &[Question]) -> Result<QuestionId> {
    let now = Utc::now().timestamp_millis();
    let max = existing
        .iter()
        .map(|question| question.id.floor())
        .max()
        .unwrap_or(0);
    let bumped = max
        .checked_add(1)
        .ok_or_else(|| StorageError::Invalid(format!("no id left after {}", max)))?;
    Ok(QuestionId::Int(now.max(bumped)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::{FailingStore, MemoryStore, SqliteStore};
    use serde_json::json;
    use std::collections::HashSet;

    fn new_question(text: &str, category: Category) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            category,
            answers: vec![
                Answer::new("أ", 40),
                Answer::new("ب", 30),
                Answer::new("ج", 20),
                Answer::new("د", 10),
            ],
        }
    }

    fn seeded() -> QuestionStore<MemoryStore> {
        let questions = QuestionStore::new(Arc::new(MemoryStore::new()));
        questions.initialize();
        questions
    }

    #[test]
    fn list_is_empty_before_initialize() {
        let questions = QuestionStore::new(Arc::new(MemoryStore::new()));
        assert!(questions.list(&CategoryFilter::All).is_empty());
    }

    #[test]
    fn initialize_is_idempotent() {
        let questions = QuestionStore::new(Arc::new(MemoryStore::new()));
        assert!(questions.try_initialize().unwrap());
        questions.delete(QuestionId::Int(1));
        let after_delete = questions.list(&CategoryFilter::All);

        assert!(!questions.try_initialize().unwrap());
        assert_eq!(questions.list(&CategoryFilter::All), after_delete);
        assert_eq!(after_delete.len(), 14);
    }

    #[test]
    fn filter_keeps_catalog_order() {
        let questions = seeded();
        let general = questions.list(&CategoryFilter::Only(Category::GeneralKnowledge));
        let ids: Vec<i64> = general.iter().map(|q| q.id.floor()).collect();
        assert_eq!(ids, vec![7, 15]);

        let none = questions.list(&CategoryFilter::Only(Category::FamousPeople));
        assert!(none.is_empty());
    }

    #[test]
    fn add_appends_with_unique_ids() {
        let questions = seeded();
        let first = questions
            .add(new_question("ألعاب أطفال", Category::Entertainment))
            .unwrap();
        let second = questions
            .add(new_question("فواكه", Category::FoodAndDrink))
            .unwrap();
        assert!(second.id.floor() > first.id.floor());

        let all = questions.list(&CategoryFilter::All);
        assert_eq!(all.len(), 17);
        assert_eq!(all[15], first);
        assert_eq!(all[16], second);

        let ids: HashSet<QuestionId> = all.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn add_rejects_invalid_questions() {
        let questions = seeded();

        let mut short = new_question("قصير", Category::Sports);
        short.answers.truncate(3);
        assert!(matches!(questions.try_add(short), Err(StorageError::Invalid(_))));

        let blank = new_question("   ", Category::Sports);
        assert!(questions.add(blank).is_none());

        let unknown = new_question("فضاء", Category::Unknown("فضاء".to_string()));
        assert!(questions.add(unknown).is_none());

        assert_eq!(questions.list(&CategoryFilter::All).len(), 15);
    }

    #[test]
    fn update_replaces_in_place() {
        let questions = seeded();
        let mut third = questions.list(&CategoryFilter::All)[2].clone();
        third.question = "رياضات جماعية".to_string();
        assert!(questions.update(third.clone()));

        let all = questions.list(&CategoryFilter::All);
        assert_eq!(all.len(), 15);
        assert_eq!(all[2], third);
    }

    #[test]
    fn update_and_delete_of_missing_id_are_no_ops() {
        let questions = seeded();
        let mut ghost = questions.list(&CategoryFilter::All)[0].clone();
        ghost.id = QuestionId::Int(999);
        assert!(!questions.update(ghost));
        assert!(!questions.delete(QuestionId::Int(999)));
        assert_eq!(questions.list(&CategoryFilter::All), default_catalog());
    }

    #[test]
    fn delete_removes_the_question() {
        let questions = seeded();
        let added = questions
            .add(new_question("أشياء حمراء", Category::GeneralKnowledge))
            .unwrap();
        assert!(questions.delete(added.id));
        assert!(questions
            .list(&CategoryFilter::All)
            .iter()
            .all(|q| q.id != added.id));
    }

    fn store_catalog_with_first_id(store: &MemoryStore, id: serde_json::Value) {
        let mut catalog = serde_json::to_value(default_catalog()).unwrap();
        catalog[0]["id"] = id;
        store.set_item(QUESTIONS_KEY, &catalog.to_string()).unwrap();
    }

    #[test]
    fn legacy_fractional_ids_still_load() {
        let store = Arc::new(MemoryStore::new());
        store_catalog_with_first_id(&store, json!(1712345678901.45));
        let questions = QuestionStore::new(store);

        assert_eq!(questions.try_list(&CategoryFilter::All).unwrap().len(), 15);
        let legacy = questions.list(&CategoryFilter::All)[0].id;
        assert!(matches!(legacy, QuestionId::Fractional(_)));
        assert_eq!(legacy.floor(), 1712345678901);

        let added = questions
            .add(new_question("أشياء في الحديقة", Category::HouseholdItems))
            .unwrap();
        assert!(added.id.floor() > 1712345678901);
        assert_eq!(questions.list(&CategoryFilter::All)[0].id, legacy);

        assert!(questions.delete(legacy));
        assert_eq!(questions.list(&CategoryFilter::All).len(), 15);
    }

    #[test]
    fn add_fails_when_ids_run_out() {
        let store = Arc::new(MemoryStore::new());
        store_catalog_with_first_id(&store, json!(i64::MAX));
        let questions = QuestionStore::new(store);

        assert!(matches!(
            questions.try_add(new_question("سؤال أخير", Category::Sports)),
            Err(StorageError::Invalid(_))
        ));
        assert!(questions
            .add(new_question("سؤال أخير", Category::Sports))
            .is_none());
        assert_eq!(questions.list(&CategoryFilter::All).len(), 15);
    }

    #[test]
    fn failing_store_degrades_to_empty_results() {
        let questions = QuestionStore::new(Arc::new(FailingStore));
        questions.initialize();
        assert!(questions.list(&CategoryFilter::All).is_empty());
        assert!(questions.try_list(&CategoryFilter::All).is_err());
        assert!(questions
            .add(new_question("سؤال", Category::History))
            .is_none());
        assert!(!questions.delete(QuestionId::Int(1)));
    }

    #[test]
    fn works_over_sqlite() {
        let questions = QuestionStore::new(Arc::new(SqliteStore::open_in_memory().unwrap()));
        questions.initialize();
        assert_eq!(questions.list(&CategoryFilter::All).len(), 15);
        assert!(questions.delete(QuestionId::Int(15)));
        assert_eq!(questions.list(&CategoryFilter::All).len(), 14);
    }
}
