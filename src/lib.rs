pub mod cli;
pub mod domain;
pub mod error;
pub mod infra;
pub mod llm;
pub mod processor;

pub use error::{Error, Result};
