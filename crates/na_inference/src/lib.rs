pub mod models;
pub mod prompt;
pub mod response;

pub use models::{create_model, Config};
