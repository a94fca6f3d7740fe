/// InventoryRequest - Request DTO for the inventory use case
///
/// Carries the unvalidated project id; validation happens in the use case
/// before any command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRequest {
    /// Project id as given on the command line, environment or config file
    pub project_id: String,
}

impl InventoryRequest {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }
}
