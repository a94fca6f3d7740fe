/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: child processes for the
/// cloud tools, the on-disk cache, artifact files and console progress.
pub mod outbound;
