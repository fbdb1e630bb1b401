// src/app/types.rs
use serde::Deserialize;

// ---- records from the directory API ----

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Character {
    pub name: String,
    pub birth_year: String,
    /// Absolute URLs of the films this character appears in.
    #[serde(default)]
    pub films: Vec<String>,
}

/// Envelope of the character-list endpoint. Other fields (count, next, ...)
/// are ignored; only `results` matters here.
#[derive(Debug, Deserialize)]
pub struct CharacterPage {
    pub results: Vec<Character>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Film {
    pub title: String,
    pub producer: String,
    pub release_date: String,
    pub opening_crawl: String,
}

// ---- request parameters ----

/// Filter parameters for one character-list request. Built fresh per request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pub search: Option<String>,
    pub page: Option<u32>,
}

impl Query {
    /// Encode as a URL query string (`search=...&page=...`), percent-encoding
    /// the search value. Empty query encodes to an empty string.
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(s) = &self.search {
            parts.push(format!("search={}", urlencoding::encode(s)));
        }
        if let Some(p) = self.page {
            parts.push(format!("page={p}"));
        }
        parts.join("&")
    }
}

// ---- cross-thread messages ----

/// Completion of one character-list fetch. `result` is `None` on any network
/// or decode failure; the generation lets the UI thread drop superseded
/// completions.
pub struct CharactersDone {
    pub generation: u64,
    pub result: Option<Vec<Character>>,
}

/// Completion of one whole film pass: every fetch of the pass has finished
/// and the collected films are committed in one message.
pub struct FilmsDone {
    pub pass: u64,
    pub films: Vec<Film>,
    pub failed: usize,
}
