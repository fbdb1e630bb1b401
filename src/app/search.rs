// src/app/search.rs — character query controller: debounce + supersede.
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::app::api;
use crate::app::types::{CharactersDone, Query};

/// Re-armable trailing-edge timer. Arming replaces any earlier deadline, so
/// only the most recently armed one can ever fire.
#[derive(Debug, Default)]
pub struct Debounce {
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once when the armed deadline has elapsed; clears it.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(due) if now >= due => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl crate::app::HolodexApp {
    /// The text edit already shows the new text (zero-latency echo); here we
    /// only re-arm the trailing debounce so rapid keystrokes collapse into a
    /// single fetch with the last value.
    pub(crate) fn on_search_changed(&mut self) {
        self.search_debounce.arm(
            Instant::now(),
            Duration::from_millis(super::SEARCH_DEBOUNCE_MS),
        );
        self.mark_dirty();
    }

    /// Frame-loop tick: fetch with the *current* text once the quiet period
    /// has elapsed.
    pub(crate) fn tick_search_debounce(&mut self) {
        if self.search_debounce.fire(Instant::now()) {
            let query = Query {
                search: Some(self.search_query.clone()),
                page: None,
            };
            self.start_character_fetch(query);
        }
    }

    /// Kick off a character-list fetch on a worker thread. Bumping the
    /// generation supersedes any fetch still in flight: its completion will
    /// carry a stale number and be dropped in `apply_characters`, so an
    /// obsolete response can never land.
    pub(crate) fn start_character_fetch(&mut self, query: Query) {
        self.character_generation += 1;
        let generation = self.character_generation;
        self.is_fetching = true;

        let tx = self.characters_tx.clone();
        let api_base = self.api_base.clone();
        debug!("characters fetch #{generation}: {query:?}");

        std::thread::spawn(move || {
            let result = match api::fetch_character_page(api::http_client(), &api_base, &query) {
                Ok(page) => Some(page.results),
                Err(e) => {
                    warn!("characters fetch #{generation} failed: {e}");
                    None
                }
            };
            let _ = tx.send(CharactersDone { generation, result });
        });
    }

    /// Drain completed character fetches. Returns true if the list changed.
    pub(crate) fn drain_character_results(&mut self) -> bool {
        use std::sync::mpsc::TryRecvError;

        let mut changed = false;
        loop {
            match self.characters_rx.try_recv() {
                Ok(msg) => changed |= self.apply_characters(msg),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    /// Commit one completion. Stale generations never touch state, regardless
    /// of arrival order; a failed fetch leaves the current list in place.
    pub(crate) fn apply_characters(&mut self, msg: CharactersDone) -> bool {
        if msg.generation != self.character_generation {
            debug!("dropping superseded characters fetch #{}", msg.generation);
            return false;
        }
        self.is_fetching = false;

        let Some(list) = msg.result else {
            return false;
        };
        self.characters = list;
        self.start_film_pass();
        true
    }
}
