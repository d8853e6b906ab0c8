// src/source/parse.rs
//
// Extrae las preguntas del texto que devuelve un modelo.

use crate::error::{QuizError, Result};
use crate::model::Question;
use serde_json::Value;

/// Convierte el texto generado en preguntas.
///
/// Los modelos suelen repetir el prompt o envolver el JSON en ```json,
/// así que si el texto completo no es JSON se prueba con cada `[` o `{`
/// del texto, leyendo el primer valor JSON que empiece ahí.
pub fn questions_from_text(text: &str) -> Result<Vec<Question>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(QuizError::NoQuestions);
    }

    let mut first_error = None;
    for value in candidates(text) {
        match questions_from_value(value) {
            Ok(questions) => return Ok(questions),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }
    Err(first_error
        .unwrap_or_else(|| QuizError::Decode("generated text contains no JSON payload".into())))
}

pub fn questions_from_value(value: Value) -> Result<Vec<Question>> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("questions") {
            Some(Value::Array(items)) => items,
            _ => match serde_json::from_value::<Question>(Value::Object(map)) {
                // Un único objeto pregunta
                Ok(q) => return Ok(vec![q]),
                Err(e) => return Err(QuizError::Decode(e.to_string())),
            },
        },
        other => {
            return Err(QuizError::Decode(format!(
                "expected a list of questions, got {}",
                kind_of(&other)
            )));
        }
    };

    if items.is_empty() {
        return Err(QuizError::NoQuestions);
    }

    let total = items.len();
    let mut questions = Vec::with_capacity(total);
    let mut last_error = None;
    for (i, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Question>(item) {
            Ok(q) => questions.push(q),
            Err(e) => {
                log::warn!("skipping malformed question #{}: {e}", i + 1);
                last_error = Some(e.to_string());
            }
        }
    }

    if questions.is_empty() {
        return Err(QuizError::Decode(
            last_error.unwrap_or_else(|| "no valid questions".into()),
        ));
    }
    if questions.len() < total {
        log::info!("kept {} of {} generated questions", questions.len(), total);
    }
    Ok(questions)
}

fn candidates(text: &str) -> impl Iterator<Item = Value> + '_ {
    let unfenced = strip_code_fence(text);
    let whole = std::iter::once(text)
        .chain((unfenced != text).then_some(unfenced))
        .filter_map(|t| serde_json::from_str::<Value>(t).ok());
    let embedded = text
        .char_indices()
        .filter(|&(_, c)| c == '[' || c == '{')
        .filter_map(move |(start, _)| first_value_at(&text[start..]));
    whole.chain(embedded)
}

/// Primer valor JSON al inicio de `text`; lo que siga se ignora
fn first_value_at(text: &str) -> Option<Value> {
    serde_json::Deserializer::from_str(text)
        .into_iter::<Value>()
        .next()?
        .ok()
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // quita la etiqueta de lenguaje ("json")
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

/// JSON "vacío" a efectos de respuesta: null, false, 0, "", [] o {}
pub fn is_empty_json(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OptionLetter;
    use serde_json::json;

    const TWO: &str = r#"[
        {"question": "Who wrote the Arthashastra?", "options": ["Kautilya", "Kalidasa", "Banabhatta", "Megasthenes"], "answer": "A"},
        {"question": "Which river is called Dakshin Ganga?", "options": ["Krishna", "Kaveri", "Godavari", "Narmada"], "answer": "C"}
    ]"#;

    #[test]
    fn parses_plain_array() {
        let qs = questions_from_text(TWO).unwrap();
        assert_eq!(qs.len(), 2);
        assert_eq!(qs[1].answer, OptionLetter::C);
    }

    #[test]
    fn finds_payload_after_echoed_prompt() {
        let text = format!(
            "Generate 2 UPSC-level multiple-choice questions on History. Format the output as JSON.\n{TWO}\nThanks!"
        );
        assert_eq!(questions_from_text(&text).unwrap().len(), 2);
    }

    #[test]
    fn brackets_in_surrounding_prose_do_not_hide_the_payload() {
        let text = format!("Here are the questions [JSON]:\n{TWO}\n(see [notes] above)");
        let qs = questions_from_text(&text).unwrap();
        assert_eq!(qs.len(), 2);
        assert_eq!(qs[0].options[0], "Kautilya");

        let single = r#"Answer key {A-D} follows: {"question": "Capital of Assam?", "options": ["Dispur", "Shillong", "Imphal", "Kohima"], "answer": "A"} [end]"#;
        assert_eq!(questions_from_text(single).unwrap().len(), 1);
    }

    #[test]
    fn accepts_fenced_object_with_questions_key() {
        let text = format!("```json\n{{\"questions\": {TWO}}}\n```");
        assert_eq!(questions_from_text(&text).unwrap().len(), 2);
    }

    #[test]
    fn skips_malformed_items_but_keeps_good_ones() {
        let value = json!([
            {"question": "ok", "options": ["a", "b", "c", "d"], "answer": "B"},
            {"question": "only two", "options": ["a", "b"], "answer": "A"},
        ]);
        let qs = questions_from_value(value).unwrap();
        assert_eq!(qs.len(), 1);
        assert_eq!(qs[0].question, "ok");
    }

    #[test]
    fn garbage_and_empty_never_yield_questions() {
        assert!(matches!(questions_from_text(""), Err(QuizError::NoQuestions)));
        assert!(matches!(questions_from_text("   "), Err(QuizError::NoQuestions)));
        assert!(matches!(questions_from_text("I cannot help"), Err(QuizError::Decode(_))));
        assert!(matches!(questions_from_text("[]"), Err(QuizError::NoQuestions)));
        assert!(matches!(questions_from_text("42"), Err(QuizError::Decode(_))));
        assert!(matches!(
            questions_from_text(r#"[{"question": "x"}]"#),
            Err(QuizError::Decode(_))
        ));
    }

    #[test]
    fn empty_json_values() {
        assert!(is_empty_json(&json!(null)));
        assert!(is_empty_json(&json!([])));
        assert!(is_empty_json(&json!({})));
        assert!(is_empty_json(&json!("")));
        assert!(!is_empty_json(&json!([{}])));
        assert!(!is_empty_json(&json!({"generated_text": ""})));
    }
}
