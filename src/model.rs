use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Número de opciones de cada pregunta (A-D)
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; OPTIONS_PER_QUESTION] =
        [OptionLetter::A, OptionLetter::B, OptionLetter::C, OptionLetter::D];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Interpreta la letra tal y como la escriben los modelos:
    /// "A", "a", "A. texto", "(B)", "C)".
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim().trim_start_matches('(');
        let mut chars = trimmed.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        // "Apple" no es una letra de opción
        if chars.next().is_some_and(|c| c.is_alphanumeric()) {
            return None;
        }
        match letter {
            'A' => Some(OptionLetter::A),
            'B' => Some(OptionLetter::B),
            'C' => Some(OptionLetter::C),
            'D' => Some(OptionLetter::D),
            _ => None,
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub answer: OptionLetter,
}

impl Question {
    /// Texto de la opción correcta
    pub fn correct_text(&self) -> &str {
        self.options
            .get(self.answer.index())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Etiquetas "A. opción" para los radio buttons
    pub fn labelled_options(&self) -> Vec<(OptionLetter, String)> {
        OptionLetter::ALL
            .iter()
            .zip(&self.options)
            .map(|(letter, text)| (*letter, format!("{letter}. {text}")))
            .collect()
    }
}

// Formato tal cual llega del modelo o del banco JSON
#[derive(Deserialize)]
struct RawQuestion {
    question: String,
    options: RawOptions,
    answer: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOptions {
    List(Vec<String>),
    Keyed(BTreeMap<String, String>),
}

impl TryFrom<RawQuestion> for Question {
    type Error = String;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let question = raw.question.trim().to_string();
        if question.is_empty() {
            return Err("question text is empty".into());
        }

        let options = match raw.options {
            RawOptions::List(list) => list,
            RawOptions::Keyed(map) => {
                let mut by_letter = BTreeMap::new();
                for (key, text) in map {
                    let letter = OptionLetter::parse(&key)
                        .ok_or_else(|| format!("unknown option key `{key}`"))?;
                    by_letter.insert(letter, text);
                }
                by_letter.into_values().collect()
            }
        };
        if options.len() != OPTIONS_PER_QUESTION {
            return Err(format!(
                "expected {OPTIONS_PER_QUESTION} options, got {}",
                options.len()
            ));
        }

        let options: Vec<String> = options.into_iter().map(|o| o.trim().to_string()).collect();

        // Primero el texto de la opción ("B. R. Ambedkar" no es la letra B)
        let wanted = raw.answer.trim().to_lowercase();
        let answer = options
            .iter()
            .position(|o| o.to_lowercase() == wanted)
            .and_then(|idx| OptionLetter::ALL.get(idx).copied())
            .or_else(|| OptionLetter::parse(&raw.answer))
            .ok_or_else(|| format!("answer `{}` is not one of A/B/C/D", raw.answer))?;

        Ok(Question {
            question,
            options,
            answer,
        })
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SourceKind {
    HuggingFace,
    LocalBank,
    Groq,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::HuggingFace, SourceKind::LocalBank, SourceKind::Groq];

    pub fn label(self) -> &'static str {
        match self {
            SourceKind::HuggingFace => "🤗 Hugging Face",
            SourceKind::LocalBank => "📚 Question bank",
            SourceKind::Groq => "⚡ Groq",
        }
    }

    /// Las fuentes remotas consumen cuota diaria
    pub fn uses_quota(self) -> bool {
        !matches!(self, SourceKind::LocalBank)
    }
}

impl Default for SourceKind {
    fn default() -> Self {
        SourceKind::HuggingFace
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Setup,
    Generating,
    Quiz,
    Results,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Setup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_answer_letters_written_by_models() {
        assert_eq!(OptionLetter::parse("A"), Some(OptionLetter::A));
        assert_eq!(OptionLetter::parse(" b "), Some(OptionLetter::B));
        assert_eq!(OptionLetter::parse("C. Article 21"), Some(OptionLetter::C));
        assert_eq!(OptionLetter::parse("(D)"), Some(OptionLetter::D));
        assert_eq!(OptionLetter::parse("E"), None);
        assert_eq!(OptionLetter::parse("Apple"), None);
        assert_eq!(OptionLetter::parse(""), None);
    }

    #[test]
    fn question_accepts_list_or_keyed_options() {
        let list: Question = serde_json::from_str(
            r#"{"question":"Capital of India?","options":["Delhi","Mumbai","Pune","Agra"],"answer":"a"}"#,
        )
        .unwrap();
        assert_eq!(list.answer, OptionLetter::A);
        assert_eq!(list.correct_text(), "Delhi");

        let keyed: Question = serde_json::from_str(
            r#"{"question":"Q","options":{"B":"two","A":"one","D":"four","C":"three"},"answer":"C"}"#,
        )
        .unwrap();
        assert_eq!(keyed.options, vec!["one", "two", "three", "four"]);
        assert_eq!(keyed.correct_text(), "three");
    }

    #[test]
    fn answer_written_as_option_text_wins_over_leading_letter() {
        let q: Question = serde_json::from_str(
            r#"{"question":"Who chaired the Drafting Committee?","options":["B. R. Ambedkar","Jawaharlal Nehru","C. Rajagopalachari","Rajendra Prasad"],"answer":"B. R. Ambedkar"}"#,
        )
        .unwrap();
        assert_eq!(q.answer, OptionLetter::A);
        assert_eq!(q.correct_text(), "B. R. Ambedkar");

        let q: Question = serde_json::from_str(
            r#"{"question":"First Indian Governor-General?","options":["Lord Mountbatten","B. R. Ambedkar","Rajendra Prasad","c. rajagopalachari"],"answer":" C. Rajagopalachari "}"#,
        )
        .unwrap();
        assert_eq!(q.answer, OptionLetter::D);

        // Sin coincidencia de texto se lee como letra
        let q: Question = serde_json::from_str(
            r#"{"question":"Q","options":["B. R. Ambedkar","x","y","z"],"answer":"B. x"}"#,
        )
        .unwrap();
        assert_eq!(q.answer, OptionLetter::B);
    }

    #[test]
    fn question_rejects_wrong_option_count_and_bad_answer() {
        let three = serde_json::from_str::<Question>(
            r#"{"question":"Q","options":["a","b","c"],"answer":"A"}"#,
        );
        assert!(three.is_err());

        let bad_answer = serde_json::from_str::<Question>(
            r#"{"question":"Q","options":["a","b","c","d"],"answer":"Z"}"#,
        );
        assert!(bad_answer.is_err());
    }

    #[test]
    fn labelled_options_prefix_letters() {
        let q = Question {
            question: "Q".into(),
            options: vec!["w".into(), "x".into(), "y".into(), "z".into()],
            answer: OptionLetter::B,
        };
        let labels: Vec<String> = q.labelled_options().into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["A. w", "B. x", "C. y", "D. z"]);
    }
}
