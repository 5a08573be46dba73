use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Difficulty rating of an instruction, kept in stringified form.
///
/// Payloads carry difficulty as either a bare number or a string; both decode
/// to the same textual value so that numeric `3` and text `"3"` compare equal
/// everywhere downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Difficulty(String);

impl Difficulty {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self(n.to_string())),
            Value::String(s) if !s.is_empty() => Some(Self(s)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Difficulty {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value)
            .ok_or_else(|| serde::de::Error::custom("difficulty must be a number or string"))
    }
}

/// A single instruction document in the catalog.
///
/// Every field is optional in the payload. Empty strings are normalized to
/// `None` on decode; consumers substitute placeholders when they render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Items without a category are excluded from the category index but
    /// still match the "any category" filter.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_difficulty",
        skip_serializing_if = "Option::is_none"
    )]
    pub difficulty: Option<Difficulty>,

    /// Ordered tag list; decodes to empty when absent or malformed.
    #[serde(
        default,
        deserialize_with = "lenient_tags",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,

    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,

    /// Link to the instruction document. Without it the card's link and
    /// preview targets are empty and opening a preview is a no-op.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub pdf_url: Option<String>,
}

impl CatalogItem {
    /// Lowercased text the search term is matched against: title, description,
    /// and tags joined with spaces.
    pub fn search_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(2 + self.tags.len());
        parts.push(self.title.as_deref().unwrap_or(""));
        parts.push(self.description.as_deref().unwrap_or(""));
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }

    /// Stringified difficulty, for text-equality comparison against a
    /// selected filter value.
    pub fn difficulty_text(&self) -> Option<&str> {
        self.difficulty.as_ref().map(Difficulty::as_str)
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

fn lenient_difficulty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Difficulty>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(Difficulty::from_value))
}

fn lenient_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
