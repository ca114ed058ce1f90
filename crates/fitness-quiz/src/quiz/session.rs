//! Answer collection as an explicit, caller-owned state object.
//!
//! A session walks the ordered question list one step at a time. Single-select
//! questions advance as soon as an option is picked; multi-select questions
//! collect toggles until the respondent continues.

use super::answers::{AnswerSet, AnswerValue};
use super::questions::{question_set, QuestionDefinition, QuestionKey, QuizVariant, SelectionMode};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum SessionPosition {
    Welcome,
    Question(usize),
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Added,
    Removed,
    LimitReached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEffect {
    Advanced(SessionPosition),
    Toggled(ToggleOutcome),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    pub position: SessionPosition,
    pub total: usize,
    pub percent: f32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no question is active")]
    NotInProgress,
    #[error("'{value}' is not an option for {question}")]
    UnknownOption { question: QuestionKey, value: String },
    #[error("{question} does not accept this kind of selection")]
    WrongSelectionMode { question: QuestionKey },
    #[error("select at least one option for {question} before continuing")]
    NoSelection { question: QuestionKey },
    #[error("{question} has no option number {index}")]
    OptionIndexOutOfRange { question: QuestionKey, index: usize },
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    variant: QuizVariant,
    questions: Vec<QuestionDefinition>,
    position: SessionPosition,
    answers: AnswerSet,
}

impl QuizSession {
    pub fn new(variant: QuizVariant) -> Self {
        Self {
            variant,
            questions: question_set(variant),
            position: SessionPosition::Welcome,
            answers: AnswerSet::new(),
        }
    }

    pub fn variant(&self) -> QuizVariant {
        self.variant
    }

    pub fn position(&self) -> SessionPosition {
        self.position
    }

    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn into_answers(self) -> AnswerSet {
        self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.position == SessionPosition::Complete
    }

    pub fn start(&mut self) -> SessionPosition {
        self.answers.clear();
        self.position = SessionPosition::Question(0);
        self.position
    }

    pub fn restart(&mut self) {
        self.answers.clear();
        self.position = SessionPosition::Welcome;
    }

    pub fn current_question(&self) -> Option<&QuestionDefinition> {
        match self.position {
            SessionPosition::Question(index) => self.questions.get(index),
            _ => None,
        }
    }

    /// Records a single-select answer and moves on.
    pub fn select(&mut self, value: &str) -> Result<SessionPosition, SessionError> {
        let question = *self.active_question()?;
        if question.mode != SelectionMode::Single {
            return Err(SessionError::WrongSelectionMode {
                question: question.key,
            });
        }
        Self::ensure_option(&question, value)?;

        self.answers.set(question.key, AnswerValue::single(value));
        Ok(self.advance())
    }

    /// Adds or removes a multi-select option. Additions beyond the cap are
    /// ignored and reported as `LimitReached`.
    pub fn toggle(&mut self, value: &str) -> Result<ToggleOutcome, SessionError> {
        let question = *self.active_question()?;
        let SelectionMode::Multiple { max } = question.mode else {
            return Err(SessionError::WrongSelectionMode {
                question: question.key,
            });
        };
        Self::ensure_option(&question, value)?;

        let mut selections = match self.answers.remove(question.key) {
            Some(AnswerValue::Multiple(values)) => values,
            _ => Vec::new(),
        };

        let outcome = if let Some(index) = selections.iter().position(|chosen| chosen == value) {
            selections.remove(index);
            ToggleOutcome::Removed
        } else if selections.len() < max {
            selections.push(value.to_string());
            ToggleOutcome::Added
        } else {
            ToggleOutcome::LimitReached
        };

        if !selections.is_empty() {
            self.answers.set(question.key, AnswerValue::Multiple(selections));
        }
        Ok(outcome)
    }

    /// Leaves a multi-select question once something is selected.
    pub fn continue_multi(&mut self) -> Result<SessionPosition, SessionError> {
        let question = *self.active_question()?;
        if question.mode == SelectionMode::Single {
            return Err(SessionError::WrongSelectionMode {
                question: question.key,
            });
        }
        if self.answers.get(question.key).is_none() {
            return Err(SessionError::NoSelection {
                question: question.key,
            });
        }
        Ok(self.advance())
    }

    /// Keyboard shortcut: `index` is the 1-based option number.
    pub fn select_index(&mut self, index: usize) -> Result<SelectionEffect, SessionError> {
        let question = *self.active_question()?;
        let option = index
            .checked_sub(1)
            .and_then(|offset| question.options.get(offset))
            .ok_or(SessionError::OptionIndexOutOfRange {
                question: question.key,
                index,
            })?;

        match question.mode {
            SelectionMode::Single => self.select(option.value).map(SelectionEffect::Advanced),
            SelectionMode::Multiple { .. } => {
                self.toggle(option.value).map(SelectionEffect::Toggled)
            }
        }
    }

    pub fn progress(&self) -> Progress {
        let total = self.questions.len();
        let (step, label) = match self.position {
            SessionPosition::Welcome => (0, "Ready to start!".to_string()),
            SessionPosition::Question(index) => {
                (index + 1, format!("Question {} of {}", index + 1, total))
            }
            SessionPosition::Complete => (total, format!("Question {total} of {total}")),
        };

        Progress {
            position: self.position,
            total,
            percent: step as f32 / total as f32 * 100.0,
            label,
        }
    }

    fn active_question(&self) -> Result<&QuestionDefinition, SessionError> {
        self.current_question().ok_or(SessionError::NotInProgress)
    }

    fn ensure_option(question: &QuestionDefinition, value: &str) -> Result<(), SessionError> {
        if question.accepts(value) {
            Ok(())
        } else {
            Err(SessionError::UnknownOption {
                question: question.key,
                value: value.to_string(),
            })
        }
    }

    fn advance(&mut self) -> SessionPosition {
        self.position = match self.position {
            SessionPosition::Question(index) if index + 1 < self.questions.len() => {
                SessionPosition::Question(index + 1)
            }
            SessionPosition::Question(_) | SessionPosition::Complete => SessionPosition::Complete,
            SessionPosition::Welcome => SessionPosition::Welcome,
        };
        self.position
    }
}
