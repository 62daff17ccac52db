use serde::{Deserialize, Serialize};

/// Model used when the caller does not pick one
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Sampling temperature used when the caller does not pick one
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Role in the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Message in the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Request body for the chat completions endpoint.
///
/// Messages are sent in the order given. Temperature is passed through
/// unchecked; the server decides what range it accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    /// Completion length cap; `None` and `Some(0)` are both left out of the body
    #[serde(skip_serializing_if = "is_unbounded")]
    pub max_tokens: Option<u32>,
}

fn is_unbounded(max_tokens: &Option<u32>) -> bool {
    matches!(max_tokens, None | Some(0))
}

impl ChatRequest {
    /// Request with the default model and temperature and no token bound
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            model: DEFAULT_CHAT_MODEL.to_string(),
            messages,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Cap the completion length. Zero leaves the bound unset.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = (max_tokens > 0).then_some(max_tokens);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_request_body() {
        let request = ChatRequest::new(vec![Message::user("Hi")]);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "model": "gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "Hi"}],
                "temperature": 0.7
            })
        );
    }

    #[test]
    fn test_max_tokens_omitted_when_unset() {
        let request = ChatRequest::new(vec![Message::user("Hi")]).max_tokens(0);
        let body = serde_json::to_value(&request).unwrap();

        assert!(body.get("max_tokens").is_none());
        assert!(!serde_json::to_string(&request).unwrap().contains("max_tokens"));
    }

    #[test]
    fn test_zero_max_tokens_field_omitted() {
        let mut request = ChatRequest::new(vec![Message::user("Hi")]);
        request.max_tokens = Some(0);
        let body = serde_json::to_value(&request).unwrap();

        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn test_max_tokens_included_when_set() {
        let request = ChatRequest::new(vec![Message::user("Hi")]).max_tokens(150);
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["max_tokens"], json!(150));
    }

    #[test]
    fn test_message_order_preserved() {
        let request = ChatRequest::new(vec![
            Message::system("You are a helpful assistant."),
            Message::user("What is the capital of France?"),
            Message::assistant("Paris."),
            Message::user("And of Italy?"),
        ])
        .model("gpt-4")
        .temperature(0.2);
        let body = serde_json::to_value(&request).unwrap();

        let roles: Vec<&str> = body["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["role"].as_str().unwrap())
            .collect();
        assert_eq!(roles, vec!["system", "user", "assistant", "user"]);
        assert_eq!(body["messages"][3]["content"], "And of Italy?");
        assert_eq!(body["model"], "gpt-4");
        assert_eq!(body["temperature"], json!(0.2));
    }

    #[test]
    fn test_parse_message() {
        let message: Message =
            serde_json::from_str(r#"{"role": "assistant", "content": "Generated text"}"#).unwrap();
        assert_eq!(message, Message::assistant("Generated text"));
    }
}
