use log::{debug, trace, error};

/// Protocol version sent with every call
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

const MESSAGES_PATH: &str = "/v1/messages";

/// HTTP client for an Anthropic-style messages endpoint
pub struct MessagesClient
{   http_client: reqwest::Client
  , endpoint: String
  , api_key: String
}

impl MessagesClient
{   /// Bind a client to the configured endpoint and credential
    pub fn new(config: &crate::config::RunnerConfig)
      -> Result<Self, crate::error::Error>
    {   debug!("Creating MessagesClient for {}", config.base_url);

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs
        {   builder = builder.timeout(
              std::time::Duration::from_secs(secs)
            );
        }
        let http_client = builder.build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            crate::error::Error::InvalidConfiguration(e.to_string())
          })?;

        Ok(MessagesClient
        {   http_client
          , endpoint: format!(
              "{}{}",
              config.base_url.trim_end_matches('/'),
              MESSAGES_PATH
            )
          , api_key: config.api_key.clone()
        })
    }

    /// Full URL requests are posted to
    pub fn endpoint(&self) -> &str
    {   &self.endpoint
    }

    /// Send one request and wait for the decoded reply
    pub async fn create_message(
      &self
    , request: &crate::request::MessagesRequest
    ) -> Result<crate::request::MessagesResponse, crate::error::Error>
    {   debug!(
          "Posting {} message(s) to {} for model {}",
          request.messages.len(),
          self.endpoint,
          request.model
        );
        trace!("Messages request: {:?}", request);

        let response = self.http_client
          .post(&self.endpoint)
          .header("x-api-key", &self.api_key)
          .header("anthropic-version", ANTHROPIC_VERSION)
          .header("content-type", "application/json")
          .json(request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::from(e)
          })?;

        let status = response.status();
        trace!("Messages response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("API error {}: {}", status, error_text);
            return Err(crate::error::Error::RequestFailed(
              format!("API returned {}: {}", status, one_line(&error_text))
            ));
        }

        response.json().await.map_err(|e| {
          error!("Parse error: {}", e);
          crate::error::Error::RequestFailed(
            format!("malformed response: {}", e)
          )
        })
    }
}

/// Error pages may span many lines; the console gets one
fn one_line(text: &str) -> String
{   text.split_whitespace().collect::<Vec<_>>().join(" ")
}
