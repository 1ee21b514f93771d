//! Typed shape of the language-model response accepted by the ingest endpoint.
//!
//! Only the path `candidates[0].content.parts[0].text` matters; any sibling
//! keys the model emits (`role`, `finishReason`, safety ratings...) are ignored.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("payload contains no candidates")]
    NoCandidates,

    #[error("first candidate has no content parts")]
    NoParts,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePayload {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Part {
    pub text: String,
}

impl CandidatePayload {
    /// Text of the first part of the first candidate.
    pub fn text(&self) -> Result<&str, PayloadError> {
        let candidate = self.candidates.first().ok_or(PayloadError::NoCandidates)?;
        let part = candidate.content.parts.first().ok_or(PayloadError::NoParts)?;
        Ok(&part.text)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn picks_first_part_of_first_candidate() {
        let payload: CandidatePayload = serde_json::from_value(json!({
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [{"text": "first"}, {"text": "second"}]
                    },
                    "finishReason": "STOP"
                },
                {"content": {"parts": [{"text": "other"}]}}
            ],
            "modelVersion": "x"
        }))
        .unwrap();
        assert_eq!(payload.text().unwrap(), "first");
    }

    #[test]
    fn empty_candidates_is_shape_error() {
        let payload: CandidatePayload =
            serde_json::from_value(json!({"candidates": []})).unwrap();
        assert_eq!(payload.text(), Err(PayloadError::NoCandidates));
    }

    #[test]
    fn empty_parts_is_shape_error() {
        let payload: CandidatePayload =
            serde_json::from_value(json!({"candidates": [{"content": {"parts": []}}]})).unwrap();
        assert_eq!(payload.text(), Err(PayloadError::NoParts));
    }

    #[test]
    fn missing_text_fails_to_deserialize() {
        let res = serde_json::from_value::<CandidatePayload>(
            json!({"candidates": [{"content": {"parts": [{"inlineData": {}}]}}]}),
        );
        assert!(res.is_err());
    }
}
