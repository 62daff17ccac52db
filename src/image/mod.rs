pub mod types;

pub use types::{ImageRequest, ImageSize, ResponseFormat};
