// src/app/mod.rs — debounced search, cancel-on-supersede character fetch,
// derived film pass, all polled from the frame loop.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

use eframe::egui as eg;

pub mod api;
pub mod films;
pub mod prefs;
pub mod search;
pub mod types;
pub mod ui;

use crate::config::DEFAULT_API_BASE;
use search::Debounce;
use types::{Character, CharactersDone, Film, FilmsDone, Query};

// ---- Tunables ----
pub(crate) const SEARCH_DEBOUNCE_MS: u64 = 1000;
pub(crate) const PREFS_SAVE_DEBOUNCE_MS: u64 = 300;

pub struct HolodexApp {
    // reactive values read by the rendering layer
    pub(crate) search_query: String,
    pub(crate) characters: Vec<Character>,
    pub(crate) films: Vec<Film>,
    pub(crate) is_fetching: bool,
    pub(crate) films_in_flight: bool,

    // endpoint base, resolved from config on first frame
    pub(crate) api_base: String,

    // debounce + supersede bookkeeping (owned here, never process-wide)
    pub(crate) search_debounce: Debounce,
    pub(crate) character_generation: u64,
    pub(crate) film_pass: u64,

    // worker plumbing
    pub(crate) characters_tx: Sender<CharactersDone>,
    pub(crate) characters_rx: Receiver<CharactersDone>,
    pub(crate) films_tx: Sender<FilmsDone>,
    pub(crate) films_rx: Receiver<FilmsDone>,

    // one-time init guard
    did_init: bool,

    // prefs autosave
    pub(crate) prefs_dirty: bool,
    pub(crate) prefs_last_write: Instant,
}

impl Default for HolodexApp {
    fn default() -> Self {
        let (characters_tx, characters_rx) = mpsc::channel::<CharactersDone>();
        let (films_tx, films_rx) = mpsc::channel::<FilmsDone>();

        Self {
            search_query: String::new(),
            characters: Vec::new(),
            films: Vec::new(),
            is_fetching: false,
            films_in_flight: false,

            api_base: DEFAULT_API_BASE.to_string(),

            search_debounce: Debounce::default(),
            character_generation: 0,
            film_pass: 0,

            characters_tx,
            characters_rx,
            films_tx,
            films_rx,

            did_init: false,

            prefs_dirty: false,
            prefs_last_write: Instant::now(),
        }
    }
}

impl eframe::App for HolodexApp {
    fn update(&mut self, ctx: &eg::Context, _frame: &mut eframe::Frame) {
        // Keep frames moving so the debounce deadline and channel polls tick
        ctx.request_repaint();

        // First frame
        if !self.did_init {
            self.did_init = true;
            let cfg = crate::config::load_config();
            self.api_base = cfg.api_base;
            self.load_prefs();

            // Populate the view before any input: one fetch with the empty
            // query, independent of the debounce path.
            self.start_character_fetch(Query::default());
        }

        self.drain_character_results();
        self.drain_film_results();
        self.tick_search_debounce();
        self.maybe_save_prefs();

        self.render(ctx);
    }
}
