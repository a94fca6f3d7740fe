/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the inventory domain services and coordinates
/// with infrastructure through ports.
pub mod collectors;
pub mod dto;
pub mod factories;
pub mod use_cases;
