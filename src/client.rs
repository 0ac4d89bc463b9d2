use std::io::Write;
use log::{debug, info};

/// Printed before the call is attempted
pub const PROGRESS_LINE: &str = "Sending request via proxy...";

/// Result of one run: the reply text or what went wrong
pub type Outcome = Result<String, crate::error::Error>;

/// Runs a single prompt: configure, call, report
pub struct PromptRunner;

impl PromptRunner
{   /// Build a client, send the request, pull out the reply text
    pub async fn run(config: &crate::config::RunnerConfig) -> Outcome
    {   let client
          = crate::providers::MessagesClient::new(config)?;
        let request = config.to_request();
        let response = client.create_message(&request).await?;
        debug!(
          "Received {} content block(s), stop_reason: {:?}",
          response.content.len(),
          response.stop_reason
        );
        response.first_text()
    }

    /// Print the progress line, run, print the outcome line
    ///
    /// Configuration failures are reported the same way as request
    /// failures. Only an error writing to `out` is returned as `Err`.
    pub async fn execute<W: Write>(
      config: Result<crate::config::RunnerConfig, crate::error::Error>
    , out: &mut W
    ) -> std::io::Result<Outcome>
    {   writeln!(out, "{}", PROGRESS_LINE)?;
        out.flush()?;

        let outcome = match config
        {   Ok(config) => Self::run(&config).await
          , Err(e) => Err(e)
        };

        match &outcome
        {   Ok(_) => info!("Request succeeded")
          , Err(e) => info!("Request failed: {}", e)
        }

        writeln!(out, "{}", format_outcome(&outcome))?;
        out.flush()?;
        Ok(outcome)
    }
}

/// Console rendering of an outcome
pub fn format_outcome(outcome: &Outcome) -> String
{   match outcome
    {   Ok(text) => text.clone()
      , Err(e) => format!("Error: {}", e)
    }
}
