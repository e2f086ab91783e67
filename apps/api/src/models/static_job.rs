use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A curated job from the static jobs file shown on the index page.
/// Every field is optional in the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticJob {
    #[serde(deserialize_with = "text_or_number")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "text_or_number")]
    pub budget: String,
    pub posted: String,
    pub job_type: String,
    pub location: String,
    pub skills: Vec<String>,
    pub link: String,
}

impl StaticJob {
    pub fn load_all(json: &str) -> serde_json::Result<Vec<StaticJob>> {
        serde_json::from_str(json)
    }
}

/// Accepts `"$500"`, `500`, or `null`.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
