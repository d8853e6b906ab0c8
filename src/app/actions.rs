use super::*;
use crate::error::QuizError;
use crate::source::{build_source, QuestionSource};
use chrono::NaiveDate;
use std::sync::mpsc::{self, TryRecvError};
use std::time::Instant;

pub const TIME_UP_MESSAGE: &str = "⏳ Time's Up! Auto-submitting your answers.";
pub const GENERATION_FAILED: &str = "⚠️ Unable to generate questions at this time. Please try again later.";

impl QuizApp {
    /// Petición según la fuente activa, o None si falta algún dato
    pub fn current_request(&self) -> Option<QuizRequest> {
        match self.source {
            SourceKind::LocalBank => {
                let subject = self.subject.clone()?;
                let subsection = self.subsection.clone()?;
                Some(QuizRequest::bank(subject, subsection, self.question_count))
            }
            _ => {
                let topic = self.topic.trim();
                (!topic.is_empty()).then(|| QuizRequest::topic(topic, self.question_count))
            }
        }
    }

    pub fn can_start(&self) -> bool {
        self.pending.is_none()
            && !self.player_name.trim().is_empty()
            && self.current_request().is_some()
    }

    pub fn start_quiz(&mut self, today: NaiveDate) {
        let source = build_source(self.source, &self.settings);
        self.start_with_source(source, today);
    }

    /// Comprueba la cuota y lanza la generación en otro hilo
    pub fn start_with_source(&mut self, source: Box<dyn QuestionSource>, today: NaiveDate) {
        if !self.can_start() {
            return;
        }
        let Some(request) = self.current_request() else {
            return;
        };
        let kind = source.kind();

        if kind.uses_quota() {
            if let Err(e) = self.quota.check(request.count as u32, today) {
                log::warn!("generation refused: {e}");
                self.message = e.to_string();
                return;
            }
        }

        self.message.clear();
        self.session = None;
        self.state = AppState::Generating;

        let (tx, rx) = mpsc::channel();
        let job = request.clone();
        std::thread::spawn(move || {
            let result = source.fetch(&job);
            // Si la app ya no escucha no hay nada que hacer
            let _ = tx.send(result);
        });
        self.pending = Some(PendingGeneration { kind, request, rx });
    }

    /// Recoge el resultado del hilo, si ya llegó
    pub fn poll_generation(&mut self, now: Instant, today: NaiveDate) {
        let Some(pending) = &self.pending else {
            return;
        };
        let result = match pending.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                Err(QuizError::Transport("generation worker stopped".into()))
            }
        };
        if let Some(pending) = self.pending.take() {
            self.apply_generation(pending.kind, result, now, today);
        }
    }

    fn apply_generation(
        &mut self,
        kind: SourceKind,
        result: Result<Vec<Question>>,
        now: Instant,
        today: NaiveDate,
    ) {
        match result {
            Ok(questions) if !questions.is_empty() => {
                if kind.uses_quota() {
                    self.quota.record(questions.len() as u32, today);
                }
                log::info!("quiz ready with {} questions from {kind:?}", questions.len());
                self.session = Some(QuizSession::new(self.player_name.trim(), questions, now));
                self.state = AppState::Quiz;
            }
            Ok(_) => self.fail_generation(QuizError::NoQuestions),
            Err(e) => self.fail_generation(e),
        }
    }

    fn fail_generation(&mut self, err: QuizError) {
        log::warn!("generation failed: {err}");
        self.message = format!("{err}\n{GENERATION_FAILED}");
        self.session = None;
        self.state = AppState::Setup;
    }

    pub fn select_answer(&mut self, idx: usize, letter: crate::model::OptionLetter) {
        if let Some(session) = self.session.as_mut() {
            session.select(idx, letter);
        }
    }

    pub fn submit_quiz(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.submit(SubmitReason::Manual) {
                self.state = AppState::Results;
            }
        }
    }

    /// Llamado en cada frame del quiz
    pub fn tick(&mut self, now: Instant) {
        if self.state != AppState::Quiz {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.tick(now) {
            self.message = TIME_UP_MESSAGE.to_string();
            self.state = AppState::Results;
        }
    }

    pub fn new_quiz(&mut self) {
        self.session = None;
        self.message.clear();
        self.state = AppState::Setup;
        self.refresh_catalog();
    }

    /// "📊 Questions generated today: N/300"
    pub fn quota_line(&mut self, today: NaiveDate) -> String {
        format!(
            "📊 Questions generated today: {}/{}",
            self.quota.used(today),
            crate::quota::DAILY_LIMIT
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OptionLetter;
    use crate::quota::DAILY_LIMIT;
    use crate::scoring::Points;
    use std::time::Duration;

    struct FakeSource {
        kind: SourceKind,
        outcome: fn(&QuizRequest) -> Result<Vec<Question>>,
    }

    impl QuestionSource for FakeSource {
        fn kind(&self) -> SourceKind {
            self.kind
        }

        fn fetch(&self, request: &QuizRequest) -> Result<Vec<Question>> {
            (self.outcome)(request)
        }
    }

    fn generated(request: &QuizRequest) -> Result<Vec<Question>> {
        Ok((0..request.count)
            .map(|i| Question {
                question: format!("{} #{i}", request.topic),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                answer: OptionLetter::A,
            })
            .collect())
    }

    fn broken(_: &QuizRequest) -> Result<Vec<Question>> {
        Err(QuizError::Http { provider: "Fake", status: 503 })
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn ready_app() -> QuizApp {
        let mut app = QuizApp::new(Settings::default());
        app.player_name = "Asha".into();
        app.topic = "Polity".into();
        app
    }

    fn fake(outcome: fn(&QuizRequest) -> Result<Vec<Question>>) -> Box<dyn QuestionSource> {
        Box::new(FakeSource { kind: SourceKind::HuggingFace, outcome })
    }

    fn wait(app: &mut QuizApp, now: Instant) {
        for _ in 0..200 {
            app.poll_generation(now, today());
            if app.pending.is_none() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("generation never finished");
    }

    #[test]
    fn full_attempt_with_manual_submit() {
        let mut app = ready_app();
        app.start_with_source(fake(generated), today());
        assert_eq!(app.state, AppState::Generating);
        assert!(!app.can_start());

        let start = Instant::now();
        wait(&mut app, start);
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.quota.used(today()), 10);

        app.select_answer(0, OptionLetter::A);
        app.select_answer(1, OptionLetter::C);
        app.submit_quiz();

        assert_eq!(app.state, AppState::Results);
        let results = app.session.as_ref().unwrap().results.as_ref().unwrap();
        assert_eq!(results.total, Points(200 - 66));
        assert_eq!(results.score_line(), "1.34/20");
    }

    #[test]
    fn timer_expiry_auto_submits() {
        let mut app = ready_app();
        app.start_with_source(fake(generated), today());
        let start = Instant::now();
        wait(&mut app, start);

        app.tick(start + Duration::from_secs(149));
        assert_eq!(app.state, AppState::Quiz);

        app.tick(start + Duration::from_secs(150));
        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.message, TIME_UP_MESSAGE);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.submitted, Some(SubmitReason::TimeUp));
    }

    #[test]
    fn failed_generation_returns_to_setup_without_quota() {
        let mut app = ready_app();
        app.start_with_source(fake(broken), today());
        wait(&mut app, Instant::now());

        assert_eq!(app.state, AppState::Setup);
        assert!(app.session.is_none());
        assert!(app.message.contains("Status code: 503"));
        assert_eq!(app.quota.used(today()), 0);
    }

    #[test]
    fn quota_ceiling_blocks_before_any_request() {
        let mut app = ready_app();
        app.quota.count = DAILY_LIMIT - 5;
        app.quota.last_reset = today();

        app.start_with_source(fake(generated), today());
        assert!(app.pending.is_none());
        assert_eq!(app.state, AppState::Setup);
        assert!(app.message.contains("Daily limit reached"));
    }

    #[test]
    fn local_bank_ignores_quota() {
        let mut app = ready_app();
        app.source = SourceKind::LocalBank;
        app.subject = Some("polity".into());
        app.subsection = Some("fundamental_rights".into());
        app.quota.count = DAILY_LIMIT;
        app.quota.last_reset = today();

        let bank = Box::new(FakeSource { kind: SourceKind::LocalBank, outcome: generated });
        app.start_with_source(bank, today());
        wait(&mut app, Instant::now());
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.quota.used(today()), DAILY_LIMIT);
    }

    #[test]
    fn start_needs_name_and_topic() {
        let mut app = QuizApp::new(Settings::default());
        assert!(!app.can_start());
        app.player_name = "  ".into();
        app.topic = "Economy".into();
        assert!(!app.can_start());
        app.player_name = "Kiran".into();
        assert!(app.can_start());

        app.source = SourceKind::LocalBank;
        assert!(!app.can_start());
    }

    #[test]
    fn new_quiz_resets_to_setup() {
        let mut app = ready_app();
        app.start_with_source(fake(generated), today());
        wait(&mut app, Instant::now());
        app.submit_quiz();
        app.new_quiz();
        assert_eq!(app.state, AppState::Setup);
        assert!(app.session.is_none());
        assert_eq!(app.quota_line(today()), "📊 Questions generated today: 10/300");
    }
}
