use crate::shared::Result;

/// OutputPresenter port for the rendered document of a run
///
/// Implementations decide the destination (stdout or a file); the document
/// itself is already rendered JSON.
pub trait OutputPresenter {
    /// Writes `content` to the destination
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
