/// Data Transfer Objects for application layer
///
/// DTOs carry data between the use case and the adapters, keeping the
/// inventory domain isolated from presentation concerns.
mod inventory_request;
mod inventory_response;
mod output_document;

pub use inventory_request::InventoryRequest;
pub use inventory_response::InventoryResponse;
pub use output_document::OutputDocument;
