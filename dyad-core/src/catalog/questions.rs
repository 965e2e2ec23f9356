use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;
use crate::quiz::{Axis, QuestionSetSize, Score};

/// One selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub score: Score,
}

/// One quiz question with its axis tag and answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u16,
    pub axis: Axis,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// The ordered question battery for one question-set size.
///
/// The contract for injected data: ids are contiguous 1..=N, the three
/// axis blocks are equal-sized and concatenated in the order
/// communication, decision, relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    pub size: QuestionSetSize,
    pub questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Parse and validate a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: QuestionCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the block contract without consuming the catalog.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let expected = self.size.total();
        if self.questions.len() != usize::from(expected) {
            return Err(CatalogError::QuestionCountMismatch {
                expected,
                found: self.questions.len(),
            });
        }
        for (position, question) in self.questions.iter().enumerate() {
            let id = position as u16 + 1;
            if question.id != id {
                return Err(CatalogError::QuestionOutOfOrder {
                    position,
                    id: question.id,
                });
            }
            // Contiguity was just checked, so the id always has an owner.
            if let Some(expected_axis) = self.size.axis_of(question.id) {
                if question.axis != expected_axis {
                    return Err(CatalogError::AxisMismatch {
                        id: question.id,
                        expected: expected_axis,
                        found: question.axis,
                    });
                }
            }
            if question.options.is_empty() {
                return Err(CatalogError::EmptyOptions { id: question.id });
            }
        }
        Ok(())
    }

    pub fn question(&self, id: u16) -> Option<&Question> {
        // Ids are contiguous from 1, so index directly.
        self.questions.get(usize::from(id).checked_sub(1)?)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
