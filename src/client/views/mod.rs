use eframe::egui;

use crate::client::state::{AppState, View};
use crate::client::theme;

pub mod auth_view;
pub mod movies_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(theme::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("🎬 Reelview")
                        .size(18.0)
                        .strong()
                        .color(theme::ACCENT),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.current_view == View::Browse {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }

                        if ui.button("Refresh").clicked() {
                            state.refresh_catalog();
                        }

                        if let Some(user) = &state.auth_state.user {
                            ui.label(
                                egui::RichText::new(&user.username)
                                    .color(theme::TEXT_SECONDARY),
                            );
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(theme::BG_DARK)
        .inner_margin(egui::Margin::symmetric(16, 12));

    egui::CentralPanel::default()
        .frame(frame_style)
        .show(ctx, |ui| match state.current_view {
            View::Auth => auth_view::render(ui, state),
            View::Browse => movies_view::render(ui, state),
        });
}
