// src/config.rs

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_HF_MODEL: &str = "bigscience/bloom-1b7";
pub const DEFAULT_HF_ENDPOINT: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_BANK_DIR: &str = "data/questions";
pub const SECRETS_FILE: &str = "secrets.yaml";

/// Claves y rutas. Cada clave se busca en el entorno y, si no está,
/// en `secrets.yaml`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub huggingface_api_key: Option<String>,
    pub huggingface_model: String,
    pub huggingface_endpoint: String,
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    pub groq_endpoint: String,
    pub bank_dir: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
struct Secrets(HashMap<String, String>);

impl Settings {
    /// Carga `.env` (si existe) y luego resuelve cada clave
    pub fn load() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("no .env loaded: {e}");
        }
        let secrets = read_secrets(Path::new(SECRETS_FILE));
        Self::resolve(|key| std::env::var(key).ok(), &secrets)
    }

    fn resolve(env: impl Fn(&str) -> Option<String>, secrets: &Secrets) -> Self {
        let lookup = |key: &str| {
            env(key)
                .or_else(|| secrets.0.get(key).cloned())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            huggingface_api_key: lookup("HUGGINGFACE_API_KEY"),
            huggingface_model: lookup("HUGGINGFACE_MODEL")
                .unwrap_or_else(|| DEFAULT_HF_MODEL.to_string()),
            huggingface_endpoint: lookup("HUGGINGFACE_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_HF_ENDPOINT.to_string()),
            groq_api_key: lookup("GROQ_API_KEY"),
            groq_model: lookup("GROQ_MODEL").unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string()),
            groq_endpoint: lookup("GROQ_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_GROQ_ENDPOINT.to_string()),
            bank_dir: lookup("UPSC_QUIZ_BANK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BANK_DIR)),
        }
    }
}

fn read_secrets(path: &Path) -> Secrets {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Secrets::default();
    };
    match serde_yaml::from_str(&content) {
        Ok(secrets) => secrets,
        Err(e) => {
            log::warn!("ignoring malformed {}: {e}", path.display());
            Secrets::default()
        }
    }
}
