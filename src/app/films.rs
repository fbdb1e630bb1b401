// src/app/films.rs — derived film loader: recompute references, fetch all
// concurrently, commit the collected list in one message.
use std::collections::HashSet;

use tracing::{debug, warn};

use crate::app::api;
use crate::app::types::{Character, Film, FilmsDone};

/// Distinct film references across the character list, in first-seen order.
/// Deterministic ordering keeps the committed film list stable across
/// recomputes of the same character list.
pub(crate) fn film_refs(characters: &[Character]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut refs = Vec::new();
    for character in characters {
        for url in &character.films {
            if seen.insert(url.clone()) {
                refs.push(url.clone());
            }
        }
    }
    refs
}

/// Fold per-film results into (films kept, fetches failed). Failures are
/// skipped rather than aborting the pass; successes keep their fetch order.
pub(crate) fn collect_pass(results: Vec<Result<Film, String>>) -> (Vec<Film>, usize) {
    let mut films = Vec::new();
    let mut failed = 0usize;
    for result in results {
        match result {
            Ok(film) => films.push(film),
            Err(e) => {
                warn!("film fetch failed: {e}");
                failed += 1;
            }
        }
    }
    (films, failed)
}

impl crate::app::HolodexApp {
    /// One recompute pass: derive the reference set from the current
    /// characters, fetch every film concurrently, and hand the whole
    /// collection back in a single `FilmsDone` so the list is never shown
    /// partially updated. A later pass supersedes an unfinished earlier one
    /// (same policy as the character fetch).
    pub(crate) fn start_film_pass(&mut self) {
        self.film_pass += 1;
        let pass = self.film_pass;

        let refs = film_refs(&self.characters);
        if refs.is_empty() {
            self.films.clear();
            self.films_in_flight = false;
            return;
        }
        self.films_in_flight = true;
        debug!("film pass #{pass}: {} distinct references", refs.len());

        let tx = self.films_tx.clone();
        std::thread::spawn(move || {
            let handles: Vec<_> = refs
                .into_iter()
                .map(|url| std::thread::spawn(move || api::fetch_film(api::http_client(), &url)))
                .collect();

            // Join in spawn order so the collected list is deterministic.
            let results: Vec<Result<Film, String>> = handles
                .into_iter()
                .map(|h| {
                    h.join()
                        .unwrap_or_else(|_| Err("film fetch worker panicked".into()))
                })
                .collect();

            let (films, failed) = collect_pass(results);
            let _ = tx.send(FilmsDone { pass, films, failed });
        });
    }

    /// Drain completed film passes. Returns true if the list changed.
    pub(crate) fn drain_film_results(&mut self) -> bool {
        use std::sync::mpsc::TryRecvError;

        let mut changed = false;
        loop {
            match self.films_rx.try_recv() {
                Ok(msg) => changed |= self.apply_films(msg),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    /// Commit one finished pass; stale passes are dropped.
    pub(crate) fn apply_films(&mut self, msg: FilmsDone) -> bool {
        if msg.pass != self.film_pass {
            debug!("dropping superseded film pass #{}", msg.pass);
            return false;
        }
        self.films_in_flight = false;
        if msg.failed > 0 {
            warn!(
                "film pass #{}: {} fetches failed, showing {} films",
                msg.pass,
                msg.failed,
                msg.films.len()
            );
        }
        self.films = msg.films;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::HolodexApp;

    fn ch(name: &str, films: &[&str]) -> Character {
        Character {
            name: name.into(),
            birth_year: "unknown".into(),
            films: films.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn film(title: &str) -> Film {
        Film {
            title: title.into(),
            producer: "Gary Kurtz".into(),
            release_date: "1977-05-25".into(),
            opening_crawl: "...".into(),
        }
    }

    #[test]
    fn refs_deduplicate_across_characters() {
        // {F1, F2, F2, F3} across the list -> exactly 3 references.
        let characters = vec![
            ch("Luke", &["/films/1/", "/films/2/"]),
            ch("Leia", &["/films/2/", "/films/3/"]),
        ];
        assert_eq!(
            film_refs(&characters),
            vec!["/films/1/", "/films/2/", "/films/3/"]
        );
    }

    #[test]
    fn refs_keep_first_seen_order() {
        let characters = vec![ch("Han", &["/films/5/", "/films/1/", "/films/5/"])];
        assert_eq!(film_refs(&characters), vec!["/films/5/", "/films/1/"]);
    }

    #[test]
    fn refs_are_idempotent_on_unchanged_list() {
        let characters = vec![
            ch("Luke", &["/films/1/", "/films/2/"]),
            ch("Leia", &["/films/2/"]),
        ];
        assert_eq!(film_refs(&characters), film_refs(&characters));
    }

    #[test]
    fn refs_empty_for_empty_list() {
        assert!(film_refs(&[]).is_empty());
    }

    #[test]
    fn collect_pass_skips_failures_and_keeps_order() {
        let (films, failed) = collect_pass(vec![
            Ok(film("A New Hope")),
            Err("GET /films/9/: timed out".into()),
            Ok(film("The Empire Strikes Back")),
        ]);
        assert_eq!(failed, 1);
        assert_eq!(films.len(), 2);
        assert_eq!(films[0].title, "A New Hope");
        assert_eq!(films[1].title, "The Empire Strikes Back");
    }

    #[test]
    fn current_pass_commits_wholesale() {
        let mut app = HolodexApp::default();
        app.film_pass = 1;
        app.films_in_flight = true;

        let applied = app.apply_films(FilmsDone {
            pass: 1,
            films: vec![film("A New Hope")],
            failed: 0,
        });

        assert!(applied);
        assert!(!app.films_in_flight);
        assert_eq!(app.films.len(), 1);
        assert_eq!(app.films[0].title, "A New Hope");
    }

    #[test]
    fn stale_pass_is_discarded() {
        let mut app = HolodexApp::default();
        app.film_pass = 2;
        app.films = vec![film("Return of the Jedi")];

        let applied = app.apply_films(FilmsDone {
            pass: 1,
            films: vec![film("A New Hope")],
            failed: 0,
        });

        assert!(!applied);
        assert_eq!(app.films[0].title, "Return of the Jedi");
    }

    #[test]
    fn empty_reference_set_clears_the_film_list() {
        let mut app = HolodexApp::default();
        app.films = vec![film("A New Hope")];
        app.characters = vec![ch("Droid with no films", &[])];

        app.start_film_pass();

        assert!(app.films.is_empty());
        assert!(!app.films_in_flight);
        assert_eq!(app.film_pass, 1, "pass still counts, so older passes stay stale");
    }
}
