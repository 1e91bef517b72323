/// Application layer - Use cases and DTOs
///
/// This layer wires the domain services to the outbound ports.
pub mod dto;
pub mod use_cases;
