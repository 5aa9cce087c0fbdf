use serde::{Deserialize, Deserializer};

/// One story from the news feed.
///
/// Every field falls back to an empty string when the feed omits it or sends `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NewsItem {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub summary: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub details: String,
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

const SUBJECTS: [&str; 5] = [
    "World",
    "Politics",
    "Business",
    "Science",
    "Sport",
];

pub fn subject_names() -> &'static [&'static str] {
    &SUBJECTS
}
