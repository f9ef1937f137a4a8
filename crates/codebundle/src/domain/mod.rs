//! Core domain types independent of IO.

pub mod errors;
pub mod languages;
pub mod model;
