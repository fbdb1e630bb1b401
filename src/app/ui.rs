// src/app/ui.rs
use eframe::egui as eg;

use crate::app::types::{Character, Film};

// ===== Helpers =====

pub(crate) fn character_line(character: &Character) -> String {
    format!("{} ({})", character.name, character.birth_year)
}

pub(crate) fn film_caption(film: &Film) -> String {
    format!("{} {}", film.release_date, film.producer)
}

// ===== UI =====

impl crate::app::HolodexApp {
    pub(crate) fn render(&mut self, ctx: &eg::Context) {
        eg::CentralPanel::default().show(ctx, |ui| {
            // ---- top bar: search ----
            ui.horizontal(|ui| {
                ui.heading("Characters");
                ui.separator();

                ui.label("Search:");
                let resp = ui.add(
                    eg::TextEdit::singleline(&mut self.search_query)
                        .hint_text("Name…")
                        .desired_width(200.0),
                );
                if resp.changed() {
                    self.on_search_changed();
                }

                if self.is_fetching {
                    ui.add(eg::Spinner::new().size(14.0));
                }

                ui.with_layout(eg::Layout::right_to_left(eg::Align::Center), |ui| {
                    ui.label(
                        eg::RichText::new(format!(
                            "{} characters · {} films",
                            self.characters.len(),
                            self.films.len()
                        ))
                        .weak(),
                    );
                });
            });
            ui.separator();

            eg::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    // ---- character list ----
                    if self.characters.is_empty() {
                        let msg = if self.is_fetching {
                            "Loading characters…"
                        } else {
                            "No matching characters."
                        };
                        ui.label(eg::RichText::new(msg).weak());
                    }
                    for character in &self.characters {
                        ui.label(character_line(character));
                    }

                    // ---- film list ----
                    ui.add_space(12.0);
                    ui.heading("Movies");
                    ui.separator();

                    if self.films_in_flight {
                        ui.horizontal(|ui| {
                            ui.add(eg::Spinner::new().size(12.0));
                            ui.label(eg::RichText::new("Loading films…").weak());
                        });
                    } else if self.films.is_empty() {
                        ui.label(eg::RichText::new("No films.").weak());
                    }

                    for film in &self.films {
                        ui.label(eg::RichText::new(&film.title).strong());
                        ui.label(&film.opening_crawl);
                        ui.label(eg::RichText::new(film_caption(film)).weak());
                        ui.add_space(8.0);
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_line_shows_name_and_birth_year() {
        let c = Character {
            name: "Luke Skywalker".into(),
            birth_year: "19BBY".into(),
            films: vec!["/films/1/".into()],
        };
        assert_eq!(character_line(&c), "Luke Skywalker (19BBY)");
    }

    #[test]
    fn film_caption_shows_release_date_then_producer() {
        let f = Film {
            title: "A New Hope".into(),
            producer: "Gary Kurtz".into(),
            release_date: "1977-05-25".into(),
            opening_crawl: "...".into(),
        };
        assert_eq!(film_caption(&f), "1977-05-25 Gary Kurtz");
    }
}
