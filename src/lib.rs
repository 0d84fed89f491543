pub mod cli;
pub mod compress;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod source;

pub use error::{Error, Result};
