use std::env;
use std::time::Duration;

use log::info;

const MIN_MAX_TOKENS: usize = 100;
const MAX_MAX_TOKENS: usize = 4096;

/// Runtime settings read from the environment (and `.env`, once `dotenv`
/// has been loaded by the binary).
#[derive(Debug, Clone)]
pub struct Settings {
    pub server_url: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: usize,
    pub bind_addr: String,
    pub port: u16,
    pub timeout: Duration,
    pub chatbot_url: String,
}

impl Settings {
    pub fn from_env() -> Self {
        let settings = Self {
            server_url: env::var("ASSISTANT_SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            temperature: parse_var("TEMPERATURE").unwrap_or(0.7),
            top_p: parse_var("TOP_P").unwrap_or(0.95),
            max_tokens: clamp_max_tokens(parse_var("MAX_TOKENS").unwrap_or(512)),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            timeout: Duration::from_secs(parse_var("ASSISTANT_TIMEOUT_SECS").unwrap_or(30)),
            chatbot_url: env::var("CHATBOT_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080/api/chatbot".to_string()),
        };
        info!("Loaded settings: {:?}", settings);
        settings
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}

// Some LLM servers cap generation internally regardless of what we send.
pub fn clamp_max_tokens(max_tokens: usize) -> usize {
    if max_tokens < MIN_MAX_TOKENS {
        info!("Increasing max_tokens from {} to minimum of {}", max_tokens, MIN_MAX_TOKENS);
        MIN_MAX_TOKENS
    } else if max_tokens > MAX_MAX_TOKENS {
        info!("Capping max_tokens from {} to maximum of {}", max_tokens, MAX_MAX_TOKENS);
        MAX_MAX_TOKENS
    } else {
        max_tokens
    }
}
