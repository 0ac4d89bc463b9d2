//! Request and response types for the messages endpoint

use serde::{Deserialize, Serialize};

/// Speaker of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role
{   User
  , Assistant
  , System
}

/// One turn of the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: Role
  , pub content: String
}

impl ChatMessage
{   pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: Role::User
          , content: content.into()
        }
    }
}

/// Body of a `POST /v1/messages` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesRequest
{   /// Model identifier
    pub model: String
  , /// Upper bound on generated tokens
    pub max_tokens: u32
  , /// Ordered conversation turns
    pub messages: Vec<ChatMessage>
}

/// A unit of the model's reply
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentBlock
{   #[serde(rename = "type", default)]
    pub kind: Option<String>
  , #[serde(default)]
    pub text: Option<String>
}

/// Decoded reply from the messages endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessagesResponse
{   pub content: Vec<ContentBlock>
  , #[serde(default)]
    pub id: Option<String>
  , #[serde(default)]
    pub model: Option<String>
  , #[serde(default)]
    pub stop_reason: Option<String>
  , #[serde(default)]
    pub usage: Option<Usage>
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Usage
{   #[serde(default)]
    pub input_tokens: Option<u64>
  , #[serde(default)]
    pub output_tokens: Option<u64>
}

impl MessagesResponse
{   /// Text of the first content block
    pub fn first_text(&self)
      -> Result<String, crate::error::Error>
    {   let block = self.content.first()
          .ok_or_else(|| {
            crate::error::Error::RequestFailed(
              "response contained no content blocks".to_string()
            )
          })?;

        block.text.clone()
          .ok_or_else(|| {
            crate::error::Error::RequestFailed(format!(
              "first content block has no text (type: {})",
              block.kind.as_deref().unwrap_or("unknown")
            ))
          })
    }
}

#[cfg(test)]
mod tests
{   use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_wire_fields()
    {   let request = MessagesRequest
        {   model: "glm-4.7".to_string()
          , max_tokens: 1024
          , messages: vec![ChatMessage::user("Hello! Who are you?")]
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
          value,
          json!({
            "model": "glm-4.7",
            "max_tokens": 1024,
            "messages": [
              {"role": "user", "content": "Hello! Who are you?"}
            ]
          })
        );
    }

    #[test]
    fn first_text_reads_first_block()
    {   let response: MessagesResponse = serde_json::from_value(json!({
          "id": "msg_01",
          "type": "message",
          "role": "assistant",
          "model": "glm-4.7",
          "content": [
            {"type": "text", "text": "I am GLM."},
            {"type": "text", "text": "ignored"}
          ],
          "stop_reason": "end_turn",
          "usage": {"input_tokens": 12, "output_tokens": 5}
        })).unwrap();

        assert_eq!(response.first_text().unwrap(), "I am GLM.");
        assert_eq!(
          response.usage.and_then(|u| u.output_tokens),
          Some(5)
        );
    }

    #[test]
    fn minimal_response_decodes()
    {   let response: MessagesResponse = serde_json::from_str(
          r#"{"content":[{"text":"hi"}]}"#
        ).unwrap();
        assert_eq!(response.first_text().unwrap(), "hi");
        assert!(response.id.is_none());
    }

    #[test]
    fn empty_content_is_a_request_failure()
    {   let response: MessagesResponse
          = serde_json::from_str(r#"{"content":[]}"#).unwrap();
        assert!(matches!(
          response.first_text(),
          Err(crate::error::Error::RequestFailed(_))
        ));
    }

    #[test]
    fn non_text_first_block_is_reported()
    {   let response: MessagesResponse = serde_json::from_str(
          r#"{"content":[{"type":"thinking","thinking":"..."}]}"#
        ).unwrap();
        let err = response.first_text().unwrap_err();
        assert!(err.to_string().contains("thinking"));
    }
}
