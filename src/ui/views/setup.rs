use crate::QuizApp;
use crate::app::{MAX_QUESTIONS, MIN_QUESTIONS};
use crate::model::SourceKind;
use crate::quota;
use crate::ui::layout::{centered_panel, wide_button};
use egui::{ComboBox, Context, RichText, Slider};

pub fn ui_setup(app: &mut QuizApp, ctx: &Context) {
    let today = quota::today();

    centered_panel(ctx, 420.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🏛️ UPSC Quiz");
            ui.add_space(6.0);
            ui.label(match app.source {
                SourceKind::LocalBank => "Test your UPSC preparation with curated MCQs!",
                _ => "Test your UPSC preparation with AI-generated MCQs!",
            });
        });
        ui.add_space(16.0);

        ui.label("👤 Enter your name:");
        ui.text_edit_singleline(&mut app.player_name);
        ui.add_space(8.0);

        if app.source == SourceKind::LocalBank {
            bank_pickers(app, ui);
        } else {
            ui.label("📚 Enter your UPSC topic (e.g., History, Polity, Economy, Geography, Science & Tech, Current Affairs):");
            ui.text_edit_singleline(&mut app.topic);
        }
        ui.add_space(8.0);

        ui.label("🔢 Select the number of questions:");
        ui.add(Slider::new(&mut app.question_count, MIN_QUESTIONS..=MAX_QUESTIONS));
        ui.add_space(8.0);

        if app.source.uses_quota() {
            ui.label(app.quota_line(today));
        }
        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            let can_start = app.can_start();
            if wide_button(ui, "🎯 Start Quiz", 220.0, can_start) {
                app.start_quiz(today);
            }
        });

        // Mensaje de error / info
        if !app.message.is_empty() {
            ui.add_space(12.0);
            ui.label(
                RichText::new(&app.message)
                    .color(egui::Color32::YELLOW)
                    .strong(),
            );
        }
    });
}

fn bank_pickers(app: &mut QuizApp, ui: &mut egui::Ui) {
    if app.subjects.is_empty() {
        ui.label(
            RichText::new(format!(
                "⚠️ No question banks found in {}",
                app.settings.bank_dir.display()
            ))
            .color(egui::Color32::YELLOW),
        );
        if ui.button("🔄 Reload").clicked() {
            app.refresh_catalog();
        }
        return;
    }

    let mut picked_subject = None;
    ComboBox::from_label("📚 Subject")
        .selected_text(app.subject.as_deref().unwrap_or("Choose…"))
        .show_ui(ui, |ui| {
            for subject in &app.subjects {
                let selected = app.subject.as_ref() == Some(subject);
                if ui.selectable_label(selected, subject).clicked() {
                    picked_subject = Some(subject.clone());
                }
            }
        });
    if let Some(subject) = picked_subject {
        app.select_subject(subject);
    }

    ui.add_enabled_ui(app.subject.is_some(), |ui| {
        ComboBox::from_label("📖 Subsection")
            .selected_text(app.subsection.as_deref().unwrap_or("Choose…"))
            .show_ui(ui, |ui| {
                for subsection in &app.subsections {
                    ui.selectable_value(&mut app.subsection, Some(subsection.clone()), subsection);
                }
            });
    });
}
