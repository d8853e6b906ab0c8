use crate::QuizApp;
use crate::model::AppState;
use crate::scoring::Outcome;
use crate::ui::layout::{scroll_panel, wide_button};
use egui::{Color32, Context, RichText};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    // Sin sesión puntuada no hay nada que mostrar
    if app.session.as_ref().and_then(|s| s.results.as_ref()).is_none() {
        app.state = AppState::Setup;
        return;
    }

    let mut again = false;

    scroll_panel(ctx, 760.0, |ui| {
        let Some(session) = app.session.as_ref() else {
            return;
        };
        let Some(results) = session.results.as_ref() else {
            return;
        };

        if !app.message.is_empty() {
            ui.label(RichText::new(&app.message).color(Color32::YELLOW).strong());
            ui.add_space(8.0);
        }

        ui.heading("📊 Quiz Results");
        ui.add_space(8.0);

        for (idx, (question, outcome)) in session.questions.iter().zip(&results.outcomes).enumerate() {
            let n = idx + 1;
            match outcome {
                Outcome::Correct => {
                    ui.label(
                        RichText::new(format!("✅ {n}. {} (Correct!)", question.question))
                            .color(Color32::GREEN),
                    );
                }
                Outcome::Wrong { chosen, correct } => {
                    ui.label(
                        RichText::new(format!("❌ {n}. {} (Wrong!)", question.question))
                            .color(Color32::LIGHT_RED),
                    );
                    ui.label(format!("   You chose: {chosen}"));
                    ui.label(format!("✔️ Correct Answer: {correct}. {}", question.correct_text()));
                }
                Outcome::Unanswered { correct } => {
                    ui.label(
                        RichText::new(format!("⚠️ {n}. {} (Unanswered)", question.question))
                            .color(Color32::YELLOW),
                    );
                    ui.label(format!("✔️ Correct Answer: {correct}. {}", question.correct_text()));
                }
            }
            ui.add_space(4.0);
        }

        ui.separator();
        ui.label(format!(
            "Correct: {} · Wrong: {} · Unanswered: {}",
            results.correct_count(),
            results.wrong_count(),
            results.unanswered_count()
        ));
        ui.heading(format!(
            "🎯 {}, your final score is: {}",
            session.player_name,
            results.score_line()
        ));

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            again = wide_button(ui, "🔄 New Quiz", 220.0, true);
        });
    });

    if again {
        app.new_quiz();
    }
}
