use eframe::egui;

use crate::client::state::AppState;
use crate::client::theme;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.vertical_centered(|ui| {
        let total_height = if state.is_signup_mode { 320.0 } else { 260.0 };
        let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
        ui.add_space(top_space);

        ui.label(
            egui::RichText::new("🎬 Reelview")
                .size(32.0)
                .strong()
                .color(theme::TEXT_LIGHT),
        );
        ui.add_space(20.0);

        ui.label(
            egui::RichText::new(if state.is_signup_mode {
                "Create Account"
            } else {
                "Welcome Back"
            })
            .size(22.0)
            .color(theme::TEXT_LIGHT),
        );
        ui.add_space(16.0);

        if let Some(ref error) = state.auth_state.error {
            ui.label(egui::RichText::new(error).color(theme::ERROR));
            ui.add_space(10.0);
        }

        let input_width = 280.0;
        let label_width = 80.0;
        let row_indent = (available_rect.width() - input_width - label_width - 20.0) / 2.0;

        if state.is_signup_mode {
            labeled_input(ui, row_indent, label_width, input_width, "Username:", |ui, w| {
                ui.add_sized(
                    [w, 28.0],
                    egui::TextEdit::singleline(&mut state.username_input),
                );
            });
            labeled_input(ui, row_indent, label_width, input_width, "Email:", |ui, w| {
                ui.add_sized(
                    [w, 28.0],
                    egui::TextEdit::singleline(&mut state.email_input),
                );
            });
        } else {
            // Login accepts either a username or an email address
            labeled_input(ui, row_indent, label_width, input_width, "User/Email:", |ui, w| {
                ui.add_sized(
                    [w, 28.0],
                    egui::TextEdit::singleline(&mut state.identifier_input),
                );
            });
        }

        labeled_input(ui, row_indent, label_width, input_width, "Password:", |ui, w| {
            ui.add_sized(
                [w, 28.0],
                egui::TextEdit::singleline(&mut state.password_input).password(true),
            );
        });

        ui.add_space(20.0);

        ui.horizontal(|ui| {
            let button_width = 130.0;
            let total_buttons_width = button_width * 2.0 + 10.0;
            ui.add_space((available_rect.width() - total_buttons_width) / 2.0);

            let submit_label = if state.is_signup_mode { "Sign Up" } else { "Login" };
            if ui
                .add_sized(
                    [button_width, 32.0],
                    egui::Button::new(
                        egui::RichText::new(submit_label).color(theme::TEXT_LIGHT),
                    )
                    .fill(theme::ACCENT),
                )
                .clicked()
            {
                state.auth_state.clear_error();
                if state.is_signup_mode {
                    state.handle_signup();
                } else {
                    state.handle_login();
                }
            }

            ui.add_space(10.0);

            let toggle_label = if state.is_signup_mode {
                "Back to Login"
            } else {
                "Create Account"
            };
            if ui
                .add_sized(
                    [button_width, 32.0],
                    egui::Button::new(
                        egui::RichText::new(toggle_label).color(theme::TEXT_SECONDARY),
                    ),
                )
                .clicked()
            {
                state.toggle_auth_mode();
            }
        });

        if state.auth_state.loading {
            ui.add_space(15.0);
            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - 100.0) / 2.0);
                ui.label(egui::RichText::new("Loading...").color(theme::TEXT_LIGHT));
                ui.spinner();
            });
        }
    });
}

fn labeled_input(
    ui: &mut egui::Ui,
    indent: f32,
    label_width: f32,
    input_width: f32,
    label: &str,
    add_input: impl FnOnce(&mut egui::Ui, f32),
) {
    ui.horizontal(|ui| {
        ui.add_space(indent);
        ui.add_sized(
            [label_width, 24.0],
            egui::Label::new(egui::RichText::new(label).color(theme::TEXT_SECONDARY)),
        );
        add_input(ui, input_width);
    });
    ui.add_space(8.0);
}
