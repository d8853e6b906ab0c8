use crate::model::{OptionLetter, Question};
use std::collections::HashMap;
use std::fmt;

/// Puntos por acierto, en centésimas
pub const CORRECT_POINTS: i32 = 200;
/// Penalización por fallo, en centésimas
pub const WRONG_PENALTY: i32 = 66;

/// Puntuación en punto fijo (centésimas), para no arrastrar errores de f64.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Points(pub i32);

impl std::ops::Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        Points(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Points {
        iter.fold(Points::default(), |acc, p| acc + p)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Wrong { chosen: OptionLetter, correct: OptionLetter },
    Unanswered { correct: OptionLetter },
}

impl Outcome {
    pub fn points(self) -> Points {
        match self {
            Outcome::Correct => Points(CORRECT_POINTS),
            Outcome::Wrong { .. } => Points(-WRONG_PENALTY),
            Outcome::Unanswered { .. } => Points(0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizResults {
    pub outcomes: Vec<Outcome>,
    pub total: Points,
    pub max: Points,
}

impl QuizResults {
    pub fn correct_count(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, Outcome::Correct)).count()
    }

    pub fn wrong_count(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, Outcome::Wrong { .. })).count()
    }

    pub fn unanswered_count(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, Outcome::Unanswered { .. })).count()
    }

    /// "3.34/20"
    pub fn score_line(&self) -> String {
        format!("{}/{}", self.total, self.max.0 / 100)
    }
}

pub fn grade(question: &Question, chosen: Option<OptionLetter>) -> Outcome {
    match chosen {
        Some(letter) if letter == question.answer => Outcome::Correct,
        Some(letter) => Outcome::Wrong { chosen: letter, correct: question.answer },
        None => Outcome::Unanswered { correct: question.answer },
    }
}

/// +2 por acierto, -0.66 por fallo, 0 si queda sin responder
pub fn score_attempt(questions: &[Question], responses: &HashMap<usize, OptionLetter>) -> QuizResults {
    let outcomes: Vec<Outcome> = questions
        .iter()
        .enumerate()
        .map(|(idx, q)| grade(q, responses.get(&idx).copied()))
        .collect();
    let total = outcomes.iter().map(|o| o.points()).sum();
    let max = Points(CORRECT_POINTS * questions.len() as i32);

    QuizResults { outcomes, total, max }
}
