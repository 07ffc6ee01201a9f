use crate::catalog::QuestionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single submitted answer. Client payloads are loosely typed: scale answers
/// arrive as integers or numeric strings, forced-choice answers as letters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(i64),
    Text(String),
}

impl AnswerValue {
    /// Coerce to an integer scale value, parsing numeric strings.
    pub fn scale_value(&self) -> Option<i64> {
        match self {
            AnswerValue::Number(value) => Some(*value),
            AnswerValue::Text(raw) => raw.trim().parse::<i64>().ok(),
        }
    }

    /// Interpret as a forced-choice answer, case-insensitively.
    pub fn choice(&self) -> Option<ForcedChoice> {
        match self {
            AnswerValue::Text(raw) => match raw.trim() {
                "A" | "a" => Some(ForcedChoice::A),
                "B" | "b" => Some(ForcedChoice::B),
                _ => None,
            },
            AnswerValue::Number(_) => None,
        }
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForcedChoice {
    A,
    B,
}

/// Sparse mapping of question id to submitted answer. Items a respondent
/// skipped are simply absent; they never count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(BTreeMap<QuestionId, AnswerValue>);

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: QuestionId, value: impl Into<AnswerValue>) {
        self.0.insert(id, value.into());
    }

    pub fn get(&self, id: QuestionId) -> Option<&AnswerValue> {
        self.0.get(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V: Into<AnswerValue>> FromIterator<(QuestionId, V)> for ResponseSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, value)| (id, value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_strings_coerce_to_scale_values() {
        assert_eq!(AnswerValue::from(" 4 ").scale_value(), Some(4));
        assert_eq!(AnswerValue::from(3).scale_value(), Some(3));
        assert_eq!(AnswerValue::from("four").scale_value(), None);
    }

    #[test]
    fn choices_parse_case_insensitively() {
        assert_eq!(AnswerValue::from("A").choice(), Some(ForcedChoice::A));
        assert_eq!(AnswerValue::from("b").choice(), Some(ForcedChoice::B));
        assert_eq!(AnswerValue::from("C").choice(), None);
        assert_eq!(AnswerValue::from(1).choice(), None);
    }

    #[test]
    fn deserializes_js_shaped_payloads() {
        let responses: ResponseSet =
            serde_json::from_str(r#"{"1": "5", "2": 3, "10": "A"}"#).expect("valid payload");
        assert_eq!(responses.len(), 3);
        assert_eq!(responses.get(1).and_then(AnswerValue::scale_value), Some(5));
        assert_eq!(responses.get(2).and_then(AnswerValue::scale_value), Some(3));
        assert_eq!(
            responses.get(10).and_then(AnswerValue::choice),
            Some(ForcedChoice::A)
        );
    }
}
