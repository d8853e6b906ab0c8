use crate::error::{QuizError, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Máximo de preguntas generadas por API al día
pub const DAILY_LIMIT: u32 = 300;

/// Contador diario de preguntas generadas.
///
/// Se pone a cero cuando la fecha guardada deja de ser la de hoy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DailyQuota {
    pub count: u32,
    pub last_reset: NaiveDate,
}

impl Default for DailyQuota {
    fn default() -> Self {
        Self::new(today())
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl DailyQuota {
    pub fn new(today: NaiveDate) -> Self {
        Self { count: 0, last_reset: today }
    }

    /// Devuelve true si ha habido reinicio
    pub fn reset_if_new_day(&mut self, today: NaiveDate) -> bool {
        if self.last_reset == today {
            return false;
        }
        log::info!(
            "quota reset: {} questions on {}, new day {}",
            self.count,
            self.last_reset,
            today
        );
        self.count = 0;
        self.last_reset = today;
        true
    }

    pub fn check(&mut self, requested: u32, today: NaiveDate) -> Result<()> {
        self.reset_if_new_day(today);
        if self.count.saturating_add(requested) > DAILY_LIMIT {
            return Err(QuizError::QuotaExceeded { limit: DAILY_LIMIT });
        }
        Ok(())
    }

    /// Solo se cuenta lo que realmente se generó
    pub fn record(&mut self, generated: u32, today: NaiveDate) {
        self.reset_if_new_day(today);
        self.count = self.count.saturating_add(generated).min(DAILY_LIMIT);
    }

    pub fn used(&mut self, today: NaiveDate) -> u32 {
        self.reset_if_new_day(today);
        self.count
    }

    pub fn remaining(&mut self, today: NaiveDate) -> u32 {
        DAILY_LIMIT.saturating_sub(self.used(today))
    }
}
