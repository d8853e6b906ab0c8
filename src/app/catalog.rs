use super::*;
use crate::source::DirectoryBank;

impl QuizApp {
    pub fn bank(&self) -> DirectoryBank {
        DirectoryBank::new(self.settings.bank_dir.clone())
    }

    /// Relee materias y subsecciones del banco en disco
    pub fn refresh_catalog(&mut self) {
        if self.source != SourceKind::LocalBank {
            return;
        }
        let bank = self.bank();
        self.subjects = bank.subjects();
        if self.subjects.is_empty() {
            log::warn!("no subjects under {}", bank.root().display());
        }

        // Descarta selecciones que ya no existen
        if self.subject.as_ref().is_some_and(|s| !self.subjects.contains(s)) {
            self.subject = None;
        }
        self.subsections = match &self.subject {
            Some(subject) => bank.subsections(subject),
            None => vec![],
        };
        if self
            .subsection
            .as_ref()
            .is_some_and(|s| !self.subsections.contains(s))
        {
            self.subsection = None;
        }
    }

    pub fn select_subject(&mut self, subject: String) {
        if self.subject.as_ref() == Some(&subject) {
            return;
        }
        self.subject = Some(subject);
        self.subsection = None;
        self.refresh_catalog();
    }

    pub fn select_source(&mut self, kind: SourceKind) {
        if self.locked_source || self.source == kind {
            return;
        }
        log::debug!("source changed to {kind:?}");
        self.source = kind;
        self.message.clear();
        self.refresh_catalog();
    }
}
