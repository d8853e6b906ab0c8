use crate::config::Settings;
use crate::error::Result;
use crate::model::{AppState, Question, SourceKind};
use crate::quota::DailyQuota;
use crate::source::QuizRequest;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod catalog;
pub mod session;

pub use session::{QuizSession, SubmitReason};

pub const MIN_QUESTIONS: usize = 10;
pub const MAX_QUESTIONS: usize = 50;
pub const DEFAULT_QUESTIONS: usize = 10;

/// Generación en curso en un hilo aparte
pub struct PendingGeneration {
    pub kind: SourceKind,
    pub request: QuizRequest,
    pub rx: Receiver<Result<Vec<Question>>>,
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct QuizApp {
    pub player_name: String,
    pub topic: String,
    pub subject: Option<String>,
    pub subsection: Option<String>,
    pub question_count: usize,
    pub source: SourceKind,
    pub quota: DailyQuota,
    #[serde(skip)]
    pub locked_source: bool,
    #[serde(skip)]
    pub settings: Settings,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub session: Option<QuizSession>,
    #[serde(skip)]
    pub pending: Option<PendingGeneration>,
    #[serde(skip)]
    pub subjects: Vec<String>,
    #[serde(skip)]
    pub subsections: Vec<String>,
    #[serde(skip)]
    pub message: String,
}

impl Default for QuizApp {
    fn default() -> Self {
        Self {
            player_name: String::new(),
            topic: String::new(),
            subject: None,
            subsection: None,
            question_count: DEFAULT_QUESTIONS,
            source: SourceKind::default(),
            quota: DailyQuota::default(),
            locked_source: false,
            settings: Settings::default(),
            state: AppState::Setup,
            session: None,
            pending: None,
            subjects: vec![],
            subsections: vec![],
            message: String::new(),
        }
    }
}

impl QuizApp {
    pub fn new(settings: Settings) -> Self {
        Self::restore(Self::default(), settings, None)
    }

    /// Reconstruye la app a partir de lo guardado por eframe.
    /// `pinned` fija la fuente (binarios de una sola fuente).
    pub fn restore(mut saved: QuizApp, settings: Settings, pinned: Option<SourceKind>) -> Self {
        saved.settings = settings;
        saved.question_count = saved.question_count.clamp(MIN_QUESTIONS, MAX_QUESTIONS);
        if let Some(kind) = pinned {
            saved.source = kind;
            saved.locked_source = true;
        }
        saved.refresh_catalog();
        saved
    }
}
