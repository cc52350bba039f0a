//! Word pair records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a word pair; the join key with usage history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordPairId(pub u32);

impl fmt::Display for WordPairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for WordPairId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Two related words: the majority sees `civilian_term`, the spies see
/// `spy_term`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    /// Unique identifier.
    pub id: WordPairId,
    /// Word shown to civilians.
    #[serde(rename = "civilian")]
    pub civilian_term: String,
    /// Word shown to spies.
    #[serde(rename = "spy")]
    pub spy_term: String,
    /// Optional illustration for the civilian word.
    #[serde(
        rename = "civilianImage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub civilian_image: Option<String>,
    /// Optional illustration for the spy word.
    #[serde(rename = "spyImage", default, skip_serializing_if = "Option::is_none")]
    pub spy_image: Option<String>,
}

impl WordPair {
    /// Creates a pair without images.
    #[must_use]
    pub fn new(id: u32, civilian_term: &str, spy_term: &str) -> Self {
        Self {
            id: WordPairId(id),
            civilian_term: civilian_term.to_owned(),
            spy_term: spy_term.to_owned(),
            civilian_image: None,
            spy_image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_dataset_field_names() {
        let json = r#"{
            "id": 12,
            "civilian": "牛奶",
            "spy": "豆浆",
            "civilianImage": "/images/vocab/12_civilian.jpg"
        }"#;

        let pair: WordPair = serde_json::from_str(json).unwrap();

        assert_eq!(pair.id, WordPairId(12));
        assert_eq!(pair.civilian_term, "牛奶");
        assert_eq!(pair.spy_term, "豆浆");
        assert_eq!(
            pair.civilian_image.as_deref(),
            Some("/images/vocab/12_civilian.jpg")
        );
        assert_eq!(pair.spy_image, None);
    }

    #[test]
    fn test_null_image_is_treated_as_absent() {
        let json = r#"{"id": 1, "civilian": "a", "spy": "b", "spyImage": null}"#;
        let pair: WordPair = serde_json::from_str(json).unwrap();
        assert_eq!(pair.spy_image, None);
    }

    #[test]
    fn test_id_serializes_as_plain_number() {
        let ids = vec![WordPairId(3), WordPairId(1)];
        assert_eq!(serde_json::to_string(&ids).unwrap(), "[3,1]");
    }
}
