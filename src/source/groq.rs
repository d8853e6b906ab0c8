use super::{parse, prompt_for, QuestionSource, QuizRequest, REQUEST_TIMEOUT};
use crate::error::{QuizError, Result};
use crate::model::{Question, SourceKind};
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

const PROVIDER: &str = "Groq";
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

/// Chat completions compatible con OpenAI
pub struct GroqSource {
    api_key: Option<String>,
    endpoint: String,
    model: String,
}

impl GroqSource {
    pub fn new(api_key: Option<String>, endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }
}

impl QuestionSource for GroqSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Groq
    }

    fn fetch(&self, request: &QuizRequest) -> Result<Vec<Question>> {
        let api_key = self.api_key.as_deref().ok_or(QuizError::MissingApiKey {
            provider: PROVIDER,
            var: "GROQ_API_KEY",
        })?;

        let prompt = prompt_for(request);
        let payload = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage { role: "user", content: &prompt }],
            temperature: TEMPERATURE,
        };
        log::info!(
            "requesting {} questions on {:?} from {PROVIDER} ({})",
            request.count,
            request.topic,
            self.model
        );

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let response = client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&payload)
            .send()?;

        let status = response.status();
        if status.as_u16() != 200 {
            log::warn!("{PROVIDER} answered HTTP {status}");
            return Err(QuizError::Http { provider: PROVIDER, status: status.as_u16() });
        }

        let body: Value = response.json()?;
        let text = message_content(&body)?;
        let mut questions = parse::questions_from_text(&text)?;
        questions.truncate(request.count);
        Ok(questions)
    }
}

/// `choices[0].message.content`
fn message_content(body: &Value) -> Result<String> {
    if parse::is_empty_json(body) {
        return Err(QuizError::EmptyResponse { provider: PROVIDER });
    }

    let choices = body
        .get("choices")
        .and_then(Value::as_array)
        .ok_or(QuizError::UnexpectedFormat { provider: PROVIDER })?;
    let Some(first) = choices.first() else {
        return Err(QuizError::EmptyResponse { provider: PROVIDER });
    };

    let content = first
        .pointer("/message/content")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim();
    if content.is_empty() {
        return Err(QuizError::NoQuestions);
    }
    Ok(content.to_string())
}
