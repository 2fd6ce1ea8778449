use eframe::egui;

use crate::client::state::AppState;
use crate::client::theme;
use crate::shared::types::{Movie, Review};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.movies.is_empty() && !state.catalog_loading && state.catalog_error.is_none() {
        state.refresh_catalog();
    }

    if let Some(ref error) = state.catalog_error {
        ui.label(egui::RichText::new(error).color(theme::ERROR));
        ui.add_space(8.0);
    }

    if state.catalog_loading {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Loading catalog...").color(theme::TEXT_SECONDARY));
            ui.spinner();
        });
        ui.add_space(8.0);
    }

    let movies = state.movies.clone();
    let current_user_id = state.auth_state.user.as_ref().map(|u| u.id);

    egui::ScrollArea::vertical().show(ui, |ui| {
        for movie in &movies {
            render_movie_card(ui, state, movie, current_user_id);
            ui.add_space(12.0);
        }
    });
}

fn render_movie_card(
    ui: &mut egui::Ui,
    state: &mut AppState,
    movie: &Movie,
    current_user_id: Option<i64>,
) {
    egui::Frame::default()
        .fill(theme::CARD_BG)
        .corner_radius(6)
        .inner_margin(egui::Margin::symmetric(14, 10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&movie.title)
                        .size(20.0)
                        .strong()
                        .color(theme::TEXT_LIGHT),
                );
                if let Some(year) = movie.year {
                    ui.label(
                        egui::RichText::new(format!("({})", year)).color(theme::TEXT_SECONDARY),
                    );
                }
            });

            if let Some(ref genre) = movie.genre {
                ui.label(egui::RichText::new(genre).color(theme::ACCENT).size(13.0));
            }
            if let Some(ref summary) = movie.summary {
                ui.label(egui::RichText::new(summary).color(theme::TEXT_SECONDARY));
            }

            let reviews: Vec<Review> = state
                .reviews
                .iter()
                .filter(|r| r.movie_id == movie.id)
                .cloned()
                .collect();

            if !reviews.is_empty() {
                ui.add_space(6.0);
                ui.separator();
                for review in &reviews {
                    render_review_row(ui, state, review, current_user_id);
                }
            }

            ui.add_space(6.0);
            if state.composing_for == Some(movie.id) {
                render_composer(ui, state);
            } else if ui.button("Write a review").clicked() {
                state.composing_for = Some(movie.id);
                state.review_error = None;
            }
        });
}

fn render_review_row(
    ui: &mut egui::Ui,
    state: &mut AppState,
    review: &Review,
    current_user_id: Option<i64>,
) {
    ui.horizontal(|ui| {
        let stars: String = "★".repeat(review.rating as usize);
        ui.label(egui::RichText::new(stars).color(theme::STAR));

        if let Some(ref comment) = review.comment {
            ui.label(egui::RichText::new(comment).color(theme::TEXT_LIGHT));
        }

        if current_user_id == Some(review.user_id) {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(egui::RichText::new("Delete").color(theme::ERROR).size(12.0))
                    .clicked()
                {
                    state.delete_review(review.id);
                }
            });
        }
    });
}

fn render_composer(ui: &mut egui::Ui, state: &mut AppState) {
    if let Some(ref error) = state.review_error {
        ui.label(egui::RichText::new(error).color(theme::ERROR));
    }

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Rating:").color(theme::TEXT_SECONDARY));
        ui.add(egui::Slider::new(&mut state.review_rating, 1..=5));
    });

    ui.add(
        egui::TextEdit::multiline(&mut state.review_comment)
            .hint_text("What did you think?")
            .desired_rows(2),
    );

    ui.horizontal(|ui| {
        if ui
            .add(
                egui::Button::new(egui::RichText::new("Post").color(theme::TEXT_LIGHT))
                    .fill(theme::ACCENT),
            )
            .clicked()
        {
            state.submit_review();
        }
        if ui.button("Cancel").clicked() {
            state.composing_for = None;
            state.review_comment.clear();
            state.review_error = None;
        }
    });
}
