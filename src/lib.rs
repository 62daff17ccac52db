//! Minimal client for an OpenAI-compatible HTTP API.
//!
//! Two operations are exposed: chat completion and image generation. Both
//! send one blocking request and hand back the decoded JSON body untouched.
//!
//! ```no_run
//! use openai_wrapper::{ChatRequest, ImageRequest, Message, OpenAIClient};
//!
//! fn main() -> openai_wrapper::Result<()> {
//!     // Falls back to OPENAI_API_KEY when no key is passed
//!     let client = OpenAIClient::new(None)?;
//!
//!     let chat = ChatRequest::new(vec![
//!         Message::system("You are a helpful assistant."),
//!         Message::user("What is the capital of France?"),
//!     ]);
//!     let response = client.chat_completion(&chat)?;
//!     println!("{}", response["choices"][0]["message"]["content"]);
//!
//!     let image = client.create_image(&ImageRequest::new("A beautiful sunset over Paris"))?;
//!     println!("{}", image["data"][0]["url"]);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod image;
pub mod llm;

pub use crate::client::{OpenAIClient, RequestError};
pub use crate::config::{Config, ConfigError, EnvSource, ProcessEnv};
pub use crate::core::{Error, Result};
pub use crate::image::{ImageRequest, ImageSize, ResponseFormat};
pub use crate::llm::{ChatRequest, Message, Role};
