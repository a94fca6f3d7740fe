/// Crate-wide result type; typed `InventoryError`s travel inside the
/// `anyhow::Error` and are recovered by downcast where the variant matters.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
