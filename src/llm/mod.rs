pub mod types;

pub use types::{ChatRequest, Message, Role, DEFAULT_CHAT_MODEL, DEFAULT_TEMPERATURE};
