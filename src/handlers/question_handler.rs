use thiserror::Error;

use crate::{
    config::{ANSWER_SLOTS, MIN_ANSWERS},
    helpers::is_blank,
    models::game::{Answer, Category, NewQuestion, Question},
};

pub const EMPTY_ANSWER_TEXT: &str = "إجابة فارغة";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("يرجى إدخال نص السؤال")]
    MissingQuestion,
    #[error("يجب إدخال 4 إجابات على الأقل")]
    NotEnoughAnswers,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSlot {
    pub text: String,
    /// As typed; anything unparsable counts as zero.
    pub points: String,
}

/// The add/edit form's contents before they become a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: String,
    pub category: Category,
    pub answers: Vec<AnswerSlot>,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        QuestionDraft {
            question: String::new(),
            category: Category::GeneralKnowledge,
            answers: vec![AnswerSlot::default(); ANSWER_SLOTS],
        }
    }
}

impl QuestionDraft {
    pub fn set_answer(&mut self, slot: usize, text: &str, points: &str) {
        if let Some(answer) = self.answers.get_mut(slot) {
            answer.text = text.to_string();
            answer.points = points.to_string();
        }
    }
}

pub fn draft_from_question(question: &Question) -> QuestionDraft {
    QuestionDraft {
        question: question.question.clone(),
        category: question.category.clone(),
        answers: question
            .answers
            .iter()
            .map(|answer| AnswerSlot {
                text: answer.text.clone(),
                points: answer.points.to_string(),
            })
            .collect(),
    }
}

/// Checks the form and turns it into a question. Every slot is kept in order;
/// blank texts get a placeholder.
pub fn validate_draft(draft: &QuestionDraft) -> Result<NewQuestion, DraftError> {
    if is_blank(&draft.question) {
        return Err(DraftError::MissingQuestion);
    }

    let filled = draft
        .answers
        .iter()
        .filter(|answer| !is_blank(&answer.text))
        .count();
    if filled < MIN_ANSWERS {
        return Err(DraftError::NotEnoughAnswers);
    }

    Ok(build(draft))
}

/// Applies an edited form to an existing question, keeping its id.
/// Edits only require question text; the catalog still enforces the answer minimum.
pub fn apply_draft(question: &Question, draft: &QuestionDraft) -> Result<Question, DraftError> {
    if is_blank(&draft.question) {
        return Err(DraftError::MissingQuestion);
    }
    Ok(build(draft).with_id(question.id))
}

fn build(draft: &QuestionDraft) -> NewQuestion {
    let answers = draft
        .answers
        .iter()
        .map(|slot| Answer {
            text: if slot.text.is_empty() {
                EMPTY_ANSWER_TEXT.to_string()
            } else {
                slot.text.clone()
            },
            points: slot.points.trim().parse().unwrap_or(0),
        })
        .collect();

    NewQuestion {
        question: draft.question.clone(),
        category: draft.category.clone(),
        answers,
    }
}
