use crate::model::{OptionLetter, Question};
use crate::scoring::{score_attempt, QuizResults};
use crate::timer::Countdown;
use std::collections::HashMap;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitReason {
    Manual,
    TimeUp,
}

/// Un intento de quiz: preguntas, respuestas marcadas y cuenta atrás
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub player_name: String,
    pub questions: Vec<Question>,
    pub responses: HashMap<usize, OptionLetter>,
    pub countdown: Countdown,
    pub submitted: Option<SubmitReason>,
    pub results: Option<QuizResults>,
}

impl QuizSession {
    pub fn new(player_name: impl Into<String>, questions: Vec<Question>, started: Instant) -> Self {
        let countdown = Countdown::for_questions(started, questions.len());
        Self {
            player_name: player_name.into(),
            questions,
            responses: HashMap::new(),
            countdown,
            submitted: None,
            results: None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }

    pub fn selected(&self, idx: usize) -> Option<OptionLetter> {
        self.responses.get(&idx).copied()
    }

    /// Marca una respuesta. Tras enviar, ya no se puede cambiar.
    pub fn select(&mut self, idx: usize, letter: OptionLetter) -> bool {
        if self.is_submitted() || idx >= self.questions.len() {
            return false;
        }
        self.responses.insert(idx, letter);
        true
    }

    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    /// Cierra el intento y puntúa. Solo la primera llamada cuenta.
    pub fn submit(&mut self, reason: SubmitReason) -> bool {
        if self.is_submitted() {
            return false;
        }
        let results = score_attempt(&self.questions, &self.responses);
        log::info!(
            "quiz submitted ({reason:?}) by {:?}: {} answered of {}, score {}",
            self.player_name,
            self.answered_count(),
            self.questions.len(),
            results.score_line()
        );
        self.results = Some(results);
        self.submitted = Some(reason);
        true
    }

    /// Devuelve true si se ha enviado por tiempo agotado
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_submitted() && self.countdown.is_expired(now) {
            return self.submit(SubmitReason::TimeUp);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{Outcome, Points};
    use std::time::Duration;

    fn questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                question: format!("Question {i}"),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                answer: OptionLetter::B,
            })
            .collect()
    }

    #[test]
    fn manual_submit_scores_and_freezes_answers() {
        let start = Instant::now();
        let mut session = QuizSession::new("Asha", questions(3), start);
        assert!(session.select(0, OptionLetter::B));
        assert!(session.select(1, OptionLetter::D));
        assert!(!session.select(7, OptionLetter::A));

        assert!(session.submit(SubmitReason::Manual));
        assert!(!session.submit(SubmitReason::TimeUp));
        assert_eq!(session.submitted, Some(SubmitReason::Manual));

        assert!(!session.select(2, OptionLetter::B));
        assert_eq!(session.selected(2), None);

        let results = session.results.as_ref().unwrap();
        assert_eq!(results.total, Points(200 - 66));
        assert_eq!(results.outcomes[2], Outcome::Unanswered { correct: OptionLetter::B });
    }

    #[test]
    fn tick_auto_submits_only_after_deadline() {
        let start = Instant::now();
        let mut session = QuizSession::new("Ravi", questions(2), start);
        assert_eq!(session.countdown.total(), Duration::from_secs(30));

        assert!(!session.tick(start + Duration::from_secs(29)));
        assert!(!session.is_submitted());

        session.select(0, OptionLetter::B);
        assert!(session.tick(start + Duration::from_secs(30)));
        assert_eq!(session.submitted, Some(SubmitReason::TimeUp));
        assert!(!session.tick(start + Duration::from_secs(40)));
        assert_eq!(session.results.as_ref().unwrap().total, Points(200));
    }

    #[test]
    fn tick_after_manual_submit_is_noop() {
        let start = Instant::now();
        let mut session = QuizSession::new("Meera", questions(1), start);
        session.submit(SubmitReason::Manual);
        assert!(!session.tick(start + Duration::from_secs(60)));
        assert_eq!(session.submitted, Some(SubmitReason::Manual));
    }
}
