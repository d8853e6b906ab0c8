// src/source/mod.rs

pub mod bank;
pub mod groq;
pub mod huggingface;
pub mod parse;

use crate::config::Settings;
use crate::error::Result;
use crate::model::{Question, SourceKind};
use std::time::Duration;

pub use bank::DirectoryBank;
pub use groq::GroqSource;
pub use huggingface::HuggingFaceSource;

pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    /// Tema libre (API) o materia del banco
    pub topic: String,
    pub subsection: Option<String>,
    pub count: usize,
}

impl QuizRequest {
    pub fn topic(topic: impl Into<String>, count: usize) -> Self {
        Self { topic: topic.into(), subsection: None, count }
    }

    pub fn bank(subject: impl Into<String>, subsection: impl Into<String>, count: usize) -> Self {
        Self {
            topic: subject.into(),
            subsection: Some(subsection.into()),
            count,
        }
    }
}

/// Origen de las preguntas de un quiz.
///
/// `fetch` nunca devuelve una lista vacía con `Ok`.
pub trait QuestionSource: Send {
    fn kind(&self) -> SourceKind;
    fn fetch(&self, request: &QuizRequest) -> Result<Vec<Question>>;
}

pub fn prompt_for(request: &QuizRequest) -> String {
    format!(
        "Generate {} UPSC-level multiple-choice questions on {}. The questions should have 4 options and one correct answer. Format the output as JSON with fields: question, options, answer (A/B/C/D).",
        request.count, request.topic
    )
}

pub fn build_source(kind: SourceKind, settings: &Settings) -> Box<dyn QuestionSource> {
    match kind {
        SourceKind::HuggingFace => Box::new(HuggingFaceSource::new(
            settings.huggingface_api_key.clone(),
            settings.huggingface_endpoint.clone(),
            settings.huggingface_model.clone(),
        )),
        SourceKind::LocalBank => Box::new(DirectoryBank::new(settings.bank_dir.clone())),
        SourceKind::Groq => Box::new(GroqSource::new(
            settings.groq_api_key.clone(),
            settings.groq_endpoint.clone(),
            settings.groq_model.clone(),
        )),
    }
}
