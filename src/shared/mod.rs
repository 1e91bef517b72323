/// Shared utilities used across layers
pub mod error;
pub mod result;
pub mod security;

#[cfg(test)]
pub(crate) mod log_capture;

pub use result::Result;
