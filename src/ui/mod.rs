pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use crate::quota;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::{Duration, Instant};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Instant::now();

        // La cuenta atrás y la generación se comprueban en cada frame
        match self.state {
            AppState::Generating => {
                self.poll_generation(now, quota::today());
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            AppState::Quiz => {
                self.tick(now);
                ctx.request_repaint_after(Duration::from_secs(1));
            }
            _ => {}
        }

        if !self.locked_source {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        match self.state {
            AppState::Setup => views::setup::ui_setup(self, ctx),
            AppState::Generating => views::generating::ui_generating(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx, now),
            AppState::Results => views::results::ui_results(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
