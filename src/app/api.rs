// src/app/api.rs
use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::blocking::Client;

use crate::app::types::{CharacterPage, Film, Query};
use crate::config::load_config;

// One shared client (connection pooling + keep-alive across fetches).
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    let cfg = load_config();
    Client::builder()
        .user_agent("holodex/0.1")
        .timeout(Duration::from_secs(cfg.request_timeout_secs))
        .pool_max_idle_per_host(8)
        .build()
        .expect("failed to build http client")
});

pub fn http_client() -> &'static Client {
    &HTTP_CLIENT
}

/// URL of the character-list endpoint for the given query.
pub fn characters_url(api_base: &str, query: &Query) -> String {
    let qs = query.to_query_string();
    if qs.is_empty() {
        format!("{api_base}/people/")
    } else {
        format!("{api_base}/people/?{qs}")
    }
}

pub fn fetch_character_page(
    client: &Client,
    api_base: &str,
    query: &Query,
) -> Result<CharacterPage, String> {
    let url = characters_url(api_base, query);
    let resp = client
        .get(&url)
        .send()
        .map_err(|e| format!("GET {url}: {e}"))?
        .error_for_status()
        .map_err(|e| format!("GET {url}: {e}"))?;
    resp.json::<CharacterPage>()
        .map_err(|e| format!("decode {url}: {e}"))
}

/// Fetch one film record. `url` is used literally (the directory hands out
/// absolute film URLs inside character records).
pub fn fetch_film(client: &Client, url: &str) -> Result<Film, String> {
    let resp = client
        .get(url)
        .send()
        .map_err(|e| format!("GET {url}: {e}"))?
        .error_for_status()
        .map_err(|e| format!("GET {url}: {e}"))?;
    resp.json::<Film>().map_err(|e| format!("decode {url}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_url_without_params() {
        let url = characters_url("https://swapi.dev/api", &Query::default());
        assert_eq!(url, "https://swapi.dev/api/people/");
    }

    #[test]
    fn characters_url_with_search() {
        let q = Query {
            search: Some("leia".into()),
            page: None,
        };
        let url = characters_url("https://swapi.dev/api", &q);
        assert_eq!(url, "https://swapi.dev/api/people/?search=leia");
    }

    #[test]
    fn characters_url_passes_page_through() {
        let q = Query {
            search: Some("sky".into()),
            page: Some(3),
        };
        let url = characters_url("http://127.0.0.1:9999/api", &q);
        assert_eq!(url, "http://127.0.0.1:9999/api/people/?search=sky&page=3");
    }
}
