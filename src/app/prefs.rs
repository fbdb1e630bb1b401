// src/app/prefs.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

impl crate::app::HolodexApp {
    // ---- tiny flags ----
    pub(crate) fn mark_dirty(&mut self) {
        self.prefs_dirty = true;
    }

    pub(crate) fn maybe_save_prefs(&mut self) {
        // debounce a bit to avoid writing every frame
        if self.prefs_dirty
            && self.prefs_last_write.elapsed()
                >= Duration::from_millis(super::PREFS_SAVE_DEBOUNCE_MS)
        {
            self.save_prefs_to(&prefs_path());
            self.prefs_dirty = false;
            self.prefs_last_write = Instant::now();
        }
    }

    // ---- load/save prefs ----
    pub(crate) fn load_prefs(&mut self) {
        self.load_prefs_from(&prefs_path());
    }

    /// Restores the input prefill only; the initial load still goes out with
    /// the empty query and the restored text does not arm the debounce.
    pub(crate) fn load_prefs_from(&mut self, path: &Path) {
        let Ok(txt) = fs::read_to_string(path) else {
            return;
        };

        for line in txt.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((k, v)) = line.split_once('=') else {
                continue;
            };
            match k.trim() {
                "search" => self.search_query = v.trim().to_string(),
                _ => {}
            }
        }
    }

    pub(crate) fn save_prefs_to(&self, path: &Path) {
        let txt = format!("# holodex ui prefs\nsearch={}\n", self.search_query);
        let _ = fs::write(path, txt);
    }
}

pub fn prefs_path() -> PathBuf {
    PathBuf::from("ui_prefs.txt")
}
