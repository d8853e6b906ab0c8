use std::time::{Duration, Instant};

/// Segundos por pregunta
pub const SECONDS_PER_QUESTION: u64 = 15;

/// Cuenta atrás del quiz. No bloquea: la UI pregunta cada frame.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    started: Instant,
    total: Duration,
}

impl Countdown {
    pub fn new(started: Instant, total: Duration) -> Self {
        Self { started, total }
    }

    pub fn for_questions(started: Instant, questions: usize) -> Self {
        Self::new(started, Duration::from_secs(SECONDS_PER_QUESTION * questions as u64))
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn deadline(&self) -> Instant {
        self.started + self.total
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline().saturating_duration_since(now)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline()
    }

    /// "MM:SS", truncando los segundos parciales
    pub fn label(&self, now: Instant) -> String {
        mm_ss(self.remaining(now))
    }

    /// "02:10 of 02:30"
    pub fn progress_label(&self, now: Instant) -> String {
        format!("{} of {}", self.label(now), mm_ss(self.total()))
    }
}

fn mm_ss(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
