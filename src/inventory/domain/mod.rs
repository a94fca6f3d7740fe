pub mod inventory_command;
pub mod raw_inventory;
pub mod resource_category;
pub mod scope;
pub mod summary;

pub use inventory_command::InventoryCommand;
pub use raw_inventory::RawInventory;
pub use resource_category::ResourceCategory;
pub use scope::ProjectScope;
pub use summary::{
    BucketSummary, DatasetSummary, FunctionSummary, FunctionTrigger, IamPolicySummary,
    InstanceSummary, InventorySummary, RunServiceSummary, TopicSummary,
};
