use crate::QuizApp;
use crate::model::{AppState, OptionLetter};
use crate::ui::layout::{scroll_panel, wide_button};
use egui::{Context, RichText};
use std::time::Instant;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context, now: Instant) {
    if app.session.is_none() {
        app.state = AppState::Setup;
        return;
    }

    let mut picked: Option<(usize, OptionLetter)> = None;
    let mut submit = false;

    scroll_panel(ctx, 760.0, |ui| {
        let Some(session) = app.session.as_ref() else {
            return;
        };
        let locked = session.is_submitted();

        ui.horizontal(|ui| {
            ui.heading("📖 Answer the following UPSC-level questions:");
        });
        ui.label(
            RichText::new(format!("⏳ Time Remaining: {}", session.countdown.progress_label(now)))
                .monospace()
                .strong(),
        );
        ui.label(format!(
            "Answered {} of {}",
            session.answered_count(),
            session.questions.len()
        ));
        ui.separator();

        for (idx, question) in session.questions.iter().enumerate() {
            ui.add_space(8.0);
            ui.label(RichText::new(format!("{}. {}", idx + 1, question.question)).strong());
            let selected = session.selected(idx);
            // Ninguna opción marcada al principio
            ui.add_enabled_ui(!locked, |ui| {
                for (letter, label) in question.labelled_options() {
                    if ui.radio(selected == Some(letter), label).clicked() {
                        picked = Some((idx, letter));
                    }
                }
            });
        }

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            submit = wide_button(ui, "✅ Submit Quiz", 220.0, !locked);
        });
    });

    if let Some((idx, letter)) = picked {
        app.select_answer(idx, letter);
    }
    if submit {
        app.submit_quiz();
    }
}
