use std::fmt;

/// Error type for a prompt run
/// Kept coarse: config problems vs. a failed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Credential variable is not set
    MissingApiKey(String)
  , /// Configuration value is unusable or the client could not be built
    InvalidConfiguration(String)
  , /// Transport, status, or response decoding failure
    RequestFailed(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey(var) => {
              write!(f, "Missing API key: {} is not set", var)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::RequestFailed(msg) => {
              write!(f, "Request failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   if e.is_builder()
        {   Error::InvalidConfiguration(e.to_string())
        } else
        {   Error::RequestFailed(e.to_string())
        }
    }
}
