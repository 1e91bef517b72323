/// Data Transfer Objects for application layer
mod visualize_request;
mod visualize_response;

pub use visualize_request::VisualizeRequest;
pub use visualize_response::{RenderOutcome, VisualizeResponse};
