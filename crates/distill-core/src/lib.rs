pub mod config;
pub mod error;
pub mod types;

pub use config::DistillConfig;
pub use error::{DistillError, Result};
pub use types::{LengthTier, QuestionCount};
