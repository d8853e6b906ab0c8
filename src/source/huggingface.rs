use super::{parse, prompt_for, QuestionSource, QuizRequest, REQUEST_TIMEOUT};
use crate::error::{QuizError, Result};
use crate::model::{Question, SourceKind};
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

const PROVIDER: &str = "Hugging Face";

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

pub struct HuggingFaceSource {
    api_key: Option<String>,
    endpoint: String,
    model: String,
}

impl HuggingFaceSource {
    pub fn new(api_key: Option<String>, endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    fn url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), self.model)
    }
}

impl QuestionSource for HuggingFaceSource {
    fn kind(&self) -> SourceKind {
        SourceKind::HuggingFace
    }

    fn fetch(&self, request: &QuizRequest) -> Result<Vec<Question>> {
        let api_key = self.api_key.as_deref().ok_or(QuizError::MissingApiKey {
            provider: PROVIDER,
            var: "HUGGINGFACE_API_KEY",
        })?;

        let url = self.url();
        let prompt = prompt_for(request);
        log::info!("requesting {} questions on {:?} from {url}", request.count, request.topic);

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let response = client
            .post(&url)
            .bearer_auth(api_key)
            .json(&InferenceRequest { inputs: &prompt })
            .send()?;

        let status = response.status();
        if status.as_u16() != 200 {
            log::warn!("{PROVIDER} answered HTTP {status}");
            return Err(QuizError::Http { provider: PROVIDER, status: status.as_u16() });
        }

        let body: Value = response.json()?;
        let text = generated_text(&body)?;
        let mut questions = parse::questions_from_text(&text)?;
        questions.truncate(request.count);
        Ok(questions)
    }
}

/// Saca `generated_text` de la respuesta, que puede ser lista u objeto
fn generated_text(body: &Value) -> Result<String> {
    if parse::is_empty_json(body) {
        return Err(QuizError::EmptyResponse { provider: PROVIDER });
    }

    let entry = match body {
        Value::Array(items) => &items[0],
        Value::Object(_) => body,
        _ => return Err(QuizError::UnexpectedFormat { provider: PROVIDER }),
    };

    let text = entry
        .get("generated_text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim();
    if text.is_empty() {
        return Err(QuizError::NoQuestions);
    }
    Ok(text.to_string())
}
