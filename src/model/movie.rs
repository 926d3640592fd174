//! Movie records and the remote search response shape

use serde::{Deserialize, Deserializer, Serialize};

/// A single movie as returned by the search endpoint
///
/// Fields are opaque strings; nothing is parsed beyond presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

/// One page of a remote search
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<Movie>,
    #[serde(
        rename = "totalResults",
        default,
        deserialize_with = "count_from_text_or_number"
    )]
    pub total_results: u64,
    #[serde(rename = "Response", deserialize_with = "flag_from_text_or_bool")]
    pub response: bool,
    /// Present when `Response` is "False" (e.g. "Movie not found!")
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountRepr {
    Number(u64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Text(String),
}

/// OMDb sends the total as a string ("256"); accept a plain number too.
fn count_from_text_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match CountRepr::deserialize(deserializer)? {
        CountRepr::Number(n) => Ok(n),
        CountRepr::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid totalResults: {:?}", s))),
    }
}

fn flag_from_text_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match FlagRepr::deserialize(deserializer)? {
        FlagRepr::Bool(b) => Ok(b),
        FlagRepr::Text(s) => match s.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(serde::de::Error::custom(format!("invalid Response flag: {:?}", s))),
        },
    }
}
