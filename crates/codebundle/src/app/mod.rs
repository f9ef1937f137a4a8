//! Application layer orchestrating domain logic and infrastructure.

pub mod bundle;
pub mod resolve;
pub mod rsp;
pub mod scan;
