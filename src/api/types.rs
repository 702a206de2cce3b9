use serde::{Deserialize, Serialize};

/// One movie record, verbatim from the search endpoint.
///
/// Field names follow the API's PascalCase wire format; nothing is derived
/// locally. `imdb_id` is unique within one result set and doubles as the
/// render key for the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    /// Poster URL. The API sends the literal string "N/A" when it has none.
    #[serde(rename = "Poster")]
    pub poster: String,
}

/// Response body of the search endpoint.
///
/// `response` is the string "True" or "False". Only a "True" body carries
/// `search` and `total_results`; only a "False" body carries `error`.
#[derive(Deserialize, Debug, Clone)]
pub struct SearchResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<Movie>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}
