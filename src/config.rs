//! Run configuration sourced from the environment

use log::debug;

/// Variable holding the credential
pub const API_KEY_VAR: &str = "GLM_API_KEY";
pub const BASE_URL_VAR: &str = "PROMPTRUN_BASE_URL";
pub const MODEL_VAR: &str = "PROMPTRUN_MODEL";
pub const MAX_TOKENS_VAR: &str = "PROMPTRUN_MAX_TOKENS";
pub const PROMPT_VAR: &str = "PROMPTRUN_PROMPT";
pub const TIMEOUT_VAR: &str = "PROMPTRUN_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8045";
pub const DEFAULT_MODEL: &str = "glm-4.7";
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_PROMPT: &str = "Hello! Who are you?";

/// Everything one run needs
#[derive(Clone, PartialEq)]
pub struct RunnerConfig
{   /// Proxy endpoint, without the `/v1/messages` suffix
    pub base_url: String
  , /// Credential, sent as-is even when empty
    pub api_key: String
  , /// Model name
    pub model: String
  , /// Max tokens to generate
    pub max_tokens: u32
  , /// Single user turn
    pub prompt: String
  , /// Request timeout in seconds; transport default when unset
    pub timeout_secs: Option<u64>
}

impl std::fmt::Debug for RunnerConfig
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   f.debug_struct("RunnerConfig")
          .field("base_url", &self.base_url)
          .field("api_key", &"[REDACTED]")
          .field("model", &self.model)
          .field("max_tokens", &self.max_tokens)
          .field("prompt", &self.prompt)
          .field("timeout_secs", &self.timeout_secs)
          .finish()
    }
}

impl RunnerConfig
{   /// Build from the process environment
    pub fn from_env()
      -> Result<Self, crate::error::Error>
    {   Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where
      F: Fn(&str) -> Option<String>
    {   let api_key = lookup(API_KEY_VAR)
          .ok_or_else(|| {
            crate::error::Error::MissingApiKey(
              API_KEY_VAR.to_string()
            )
          })?;

        let base_url = lookup(BASE_URL_VAR)
          .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("http://")
          || base_url.starts_with("https://"))
        {   return Err(crate::error::Error::InvalidConfiguration(
              format!("{} must be an http(s) URL, got {:?}",
                BASE_URL_VAR, base_url)
            ));
        }

        let max_tokens = match lookup(MAX_TOKENS_VAR)
        {   Some(raw) => parse_positive(MAX_TOKENS_VAR, &raw)?
          , None => DEFAULT_MAX_TOKENS
        };

        let timeout_secs = match lookup(TIMEOUT_VAR)
        {   Some(raw) => Some(u64::from(
              parse_positive(TIMEOUT_VAR, &raw)?
            ))
          , None => None
        };

        let config = RunnerConfig
        {   base_url
          , api_key
          , model: lookup(MODEL_VAR)
              .unwrap_or_else(|| DEFAULT_MODEL.to_string())
          , max_tokens
          , prompt: lookup(PROMPT_VAR)
              .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
          , timeout_secs
        };
        debug!("Loaded {:?}", config);
        Ok(config)
    }

    /// The one-turn request this config describes
    pub fn to_request(&self) -> crate::request::MessagesRequest
    {   crate::request::MessagesRequest
        {   model: self.model.clone()
          , max_tokens: self.max_tokens
          , messages: vec![
              crate::request::ChatMessage::user(self.prompt.clone())
            ]
        }
    }
}

fn parse_positive(var: &str, raw: &str)
  -> Result<u32, crate::error::Error>
{   match raw.trim().parse::<u32>()
    {   Ok(n) if n > 0 => Ok(n)
      , _ => Err(crate::error::Error::InvalidConfiguration(
          format!("{} must be a positive integer, got {:?}", var, raw)
        ))
    }
}
