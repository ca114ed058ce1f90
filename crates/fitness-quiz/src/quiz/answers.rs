use super::questions::{question, QuestionKey, QuizVariant, SelectionMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One recorded answer. Values are kept verbatim so unrecognized options
/// survive until the engine falls back to its defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multiple(Vec<String>),
}

impl AnswerValue {
    pub fn single(value: impl Into<String>) -> Self {
        Self::Single(value.into())
    }

    pub fn multiple<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Multiple(values.into_iter().map(Into::into).collect())
    }

    /// The value when exactly one option was recorded as a plain string.
    /// A multi-select answer never collapses, even with a single element.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(_) => None,
        }
    }

    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Flat rendering used by the plan export, matching how a list echoes
    /// when interpolated as text.
    pub fn echo(&self) -> String {
        match self {
            Self::Single(value) => value.clone(),
            Self::Multiple(values) => values.join(","),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),
    #[error("expected an answer in the form key=value, found '{0}'")]
    MalformedAssignment(String),
    #[error("'{value}' is not an option for {question}")]
    UnknownOption { question: QuestionKey, value: String },
    #[error("{question} accepts a single selection")]
    MultipleNotAllowed { question: QuestionKey },
    #[error("{question} accepts at most {max} selections, found {found}")]
    TooManySelections {
        question: QuestionKey,
        max: usize,
        found: usize,
    },
    #[error("'{value}' was selected more than once for {question}")]
    DuplicateSelection { question: QuestionKey, value: String },
    #[error("{question} was answered with an empty selection")]
    EmptySelection { question: QuestionKey },
}

/// Collected questionnaire responses keyed by question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionKey, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: QuestionKey, value: impl Into<String>) -> Self {
        self.set(key, AnswerValue::single(value));
        self
    }

    pub fn with_multiple<I, S>(mut self, key: QuestionKey, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(key, AnswerValue::multiple(values));
        self
    }

    pub fn set(&mut self, key: QuestionKey, value: AnswerValue) -> Option<AnswerValue> {
        self.answers.insert(key, value)
    }

    pub fn remove(&mut self, key: QuestionKey) -> Option<AnswerValue> {
        self.answers.remove(&key)
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn get(&self, key: QuestionKey) -> Option<&AnswerValue> {
        self.answers.get(&key)
    }

    pub fn single(&self, key: QuestionKey) -> Option<&str> {
        self.get(key).and_then(AnswerValue::as_single)
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionKey, &AnswerValue)> {
        self.answers.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Parses a `key=value` or `key=first,second` assignment.
    pub fn parse_assignment(raw: &str) -> Result<(QuestionKey, AnswerValue), AnswerError> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| AnswerError::MalformedAssignment(raw.to_string()))?;
        let key = key
            .parse::<QuestionKey>()
            .map_err(AnswerError::UnknownQuestion)?;

        let value = value.trim();
        if value.is_empty() {
            return Err(AnswerError::MalformedAssignment(raw.to_string()));
        }

        let answer = if value.contains(',') {
            AnswerValue::multiple(value.split(',').map(str::trim))
        } else {
            AnswerValue::single(value)
        };

        Ok((key, answer))
    }

    /// Strict check against the variant's option lists. The engine never calls
    /// this; callers opt in when they want bad input rejected instead of
    /// silently defaulted.
    pub fn validate(&self, variant: QuizVariant) -> Result<(), AnswerError> {
        for (key, value) in self.iter() {
            let definition = question(variant, key);
            let values = match value {
                AnswerValue::Single(value) => vec![value.as_str()],
                AnswerValue::Multiple(values) => {
                    let SelectionMode::Multiple { max } = definition.mode else {
                        return Err(AnswerError::MultipleNotAllowed { question: key });
                    };
                    if values.is_empty() {
                        return Err(AnswerError::EmptySelection { question: key });
                    }
                    if values.len() > max {
                        return Err(AnswerError::TooManySelections {
                            question: key,
                            max,
                            found: values.len(),
                        });
                    }
                    for (index, value) in values.iter().enumerate() {
                        if values[..index].contains(value) {
                            return Err(AnswerError::DuplicateSelection {
                                question: key,
                                value: value.clone(),
                            });
                        }
                    }
                    values.iter().map(String::as_str).collect()
                }
            };

            if let Some(unknown) = values.into_iter().find(|value| !definition.accepts(value)) {
                return Err(AnswerError::UnknownOption {
                    question: key,
                    value: unknown.to_string(),
                });
            }
        }

        Ok(())
    }
}

impl FromIterator<(QuestionKey, AnswerValue)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionKey, AnswerValue)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
