//! Infrastructure adapters for terminal input and logging.

pub mod logging;
pub mod prompt;
