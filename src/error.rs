use thiserror::Error;

/// Errores de generación y carga de preguntas.
///
/// El texto de cada variante es el aviso que ve el usuario.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("⚠️ {provider} API key is missing! Set {var} in the environment, .env or secrets.yaml.")]
    MissingApiKey { provider: &'static str, var: &'static str },

    #[error("⚠️ Daily limit reached! You can generate only {limit} questions per day. Try again tomorrow.")]
    QuotaExceeded { limit: u32 },

    #[error("⚠️ {provider} API request failed. Status code: {status}")]
    Http { provider: &'static str, status: u16 },

    #[error("⚠️ API request error: {0}")]
    Transport(String),

    #[error("⚠️ Received an empty response from {provider} API. Please try again later.")]
    EmptyResponse { provider: &'static str },

    #[error("⚠️ Unexpected response format from {provider} API.")]
    UnexpectedFormat { provider: &'static str },

    #[error("⚠️ No questions generated. Please try again later.")]
    NoQuestions,

    #[error("⚠️ Error decoding JSON response. The API may not have returned structured data. ({0})")]
    Decode(String),

    #[error("⚠️ No question bank found for {subject} / {subsection}.")]
    BankMissing { subject: String, subsection: String },

    #[error("⚠️ Could not read question bank: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for QuizError {
    fn from(err: reqwest::Error) -> Self {
        QuizError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
