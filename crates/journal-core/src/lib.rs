pub mod config;
pub mod error;
pub mod input;
pub mod result;

pub use config::AppConfig;
pub use error::JournalError;
pub use input::{trim_entry_text, TextField};
pub use result::JournalResult;
