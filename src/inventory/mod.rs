/// Inventory domain - value objects, policies and pure services
///
/// Nothing in this module performs I/O. Collection against the cloud tools
/// happens in the application layer through the outbound ports.
pub mod domain;
pub mod policies;
pub mod services;
