//! JSON review returned by the upload endpoint.

use std::collections::BTreeMap;

use serde_json::Value;

use super::UploadError;

/// Named text fields of a review, e.g. `malfar`, `stafsetning`, `radleggingar`.
///
/// Top-level string fields land in `fields`; string fields of a nested
/// `properties` object land in `properties`. All text is unescaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Review {
    pub fields: BTreeMap<String, String>,
    pub properties: BTreeMap<String, String>,
}

impl Review {
    pub fn from_json(json: Value) -> Result<Self, UploadError> {
        let Value::Object(map) = json else {
            return Err(UploadError::Parse("review is not a JSON object".into()));
        };

        let mut review = Review::default();
        for (key, value) in map {
            match value {
                Value::String(text) => {
                    review.fields.insert(key, unescape_review_text(&text));
                }
                Value::Object(props) if key == "properties" => {
                    for (name, value) in props {
                        if let Value::String(text) = value {
                            review.properties.insert(name, unescape_review_text(&text));
                        }
                    }
                }
                _ => {}
            }
        }
        Ok(review)
    }

    /// Look a field up in `properties` first, then at top level.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .get(name)
            .or_else(|| self.fields.get(name))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.properties.is_empty()
    }
}

/// Turn literal `\n` and `\"` sequences left by double encoding into real characters.
pub fn unescape_review_text(text: &str) -> String {
    text.replace("\\n", "\n").replace("\\\"", "\"")
}
