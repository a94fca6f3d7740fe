use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One external invocation: program name followed by its arguments
///
/// The token sequence is the cache identity of the call. Two commands share
/// a cache entry only when every token matches in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryCommand(Vec<String>);

impl InventoryCommand {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    pub fn program(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or_default()
    }

    pub fn args(&self) -> &[String] {
        self.0.get(1..).unwrap_or_default()
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// SHA-256 hex digest of the token sequence
    ///
    /// Each token is length-prefixed so that `["a b"]` and `["a", "b"]`
    /// hash differently.
    pub fn cache_key(&self) -> String {
        let mut hasher = Sha256::new();
        for token in &self.0 {
            hasher.update((token.len() as u64).to_le_bytes());
            hasher.update(token.as_bytes());
        }
        format!("{:x}", hasher.finalize())
    }
}

impl std::fmt::Display for InventoryCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_and_args() {
        let command = InventoryCommand::new(["gcloud", "pubsub", "topics", "list"]);
        assert_eq!(command.program(), "gcloud");
        assert_eq!(command.args(), &["pubsub", "topics", "list"]);
        assert_eq!(format!("{}", command), "gcloud pubsub topics list");
    }

    #[test]
    fn test_empty_command() {
        let command = InventoryCommand::new(Vec::<String>::new());
        assert_eq!(command.program(), "");
        assert!(command.args().is_empty());
    }

    #[test]
    fn test_cache_key_is_stable() {
        let a = InventoryCommand::new(["gcloud", "run", "services", "list"]);
        let b = InventoryCommand::new(["gcloud", "run", "services", "list"]);
        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key().len(), 64);
    }

    #[test]
    fn test_cache_key_is_order_sensitive() {
        let a = InventoryCommand::new(["bq", "ls", "--project_id", "p"]);
        let b = InventoryCommand::new(["bq", "--project_id", "ls", "p"]);
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_cache_key_respects_token_boundaries() {
        let joined = InventoryCommand::new(["gcloud", "a b"]);
        let split = InventoryCommand::new(["gcloud", "a", "b"]);
        assert_ne!(joined.cache_key(), split.cache_key());
    }

    #[test]
    fn test_serializes_as_token_array() {
        let command = InventoryCommand::new(["gcloud", "services", "list"]);
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(json, r#"["gcloud","services","list"]"#);
    }
}
