use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::Context;

pub fn ui_generating(app: &mut QuizApp, ctx: &Context) {
    let what = app
        .pending
        .as_ref()
        .map(|p| match &p.request.subsection {
            Some(sub) => format!("Loading {} / {}…", p.request.topic, sub),
            None => format!(
                "Generating {} questions on {} with {}…",
                p.request.count,
                p.request.topic,
                p.kind.label()
            ),
        })
        .unwrap_or_default();

    centered_panel(ctx, 120.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.add_space(10.0);
            ui.label(what);
        });
    });
}
