// src/source/bank.rs

use super::{parse, QuestionSource, QuizRequest};
use crate::error::{QuizError, Result};
use crate::model::{Question, SourceKind};
use std::fs;
use std::path::{Path, PathBuf};

/// Banco de preguntas en disco: `<raíz>/<materia>/<subsección>.json`,
/// cada fichero es un array JSON de preguntas.
pub struct DirectoryBank {
    root: PathBuf,
}

impl DirectoryBank {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Materias disponibles, ordenadas
    pub fn subjects(&self) -> Vec<String> {
        list_sorted(&self.root, |path| path.is_dir().then(|| file_name(path)).flatten())
    }

    /// Subsecciones de una materia, ordenadas
    pub fn subsections(&self, subject: &str) -> Vec<String> {
        if !is_plain_name(subject) {
            return vec![];
        }
        list_sorted(&self.root.join(subject), |path| {
            let is_json = path.extension().is_some_and(|ext| ext == "json");
            if path.is_file() && is_json {
                path.file_stem().and_then(|s| s.to_str()).map(str::to_string)
            } else {
                None
            }
        })
    }

    pub fn path_for(&self, subject: &str, subsection: &str) -> Option<PathBuf> {
        if !is_plain_name(subject) || !is_plain_name(subsection) {
            return None;
        }
        Some(self.root.join(subject).join(format!("{subsection}.json")))
    }

    pub fn load(&self, subject: &str, subsection: &str) -> Result<Vec<Question>> {
        let missing = || QuizError::BankMissing {
            subject: subject.to_string(),
            subsection: subsection.to_string(),
        };
        let path = self.path_for(subject, subsection).ok_or_else(missing)?;
        if !path.is_file() {
            log::warn!("question bank not found: {}", path.display());
            return Err(missing());
        }

        log::debug!("reading question bank {}", path.display());
        let content = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content)?;
        parse::questions_from_value(value)
    }
}

impl QuestionSource for DirectoryBank {
    fn kind(&self) -> SourceKind {
        SourceKind::LocalBank
    }

    fn fetch(&self, request: &QuizRequest) -> Result<Vec<Question>> {
        let subsection = request.subsection.as_deref().unwrap_or_default();
        let mut questions = self.load(&request.topic, subsection)?;
        questions.truncate(request.count);
        log::info!(
            "loaded {} questions from bank {}/{}",
            questions.len(),
            request.topic,
            subsection
        );
        Ok(questions)
    }
}

// Evita rutas tipo "../secrets"
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|s| s.to_str()).map(str::to_string)
}

fn list_sorted(dir: &Path, pick: impl Fn(&Path) -> Option<String>) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return vec![];
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| pick(entry.path().as_path()))
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();
    names
}
