//! Top-level and nested key names of a workflow document.

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const TYPE: &str = "type";
pub const NODE: &str = "node";
pub const ACTIVE: &str = "active";
pub const IS_ARCHIVED: &str = "isArchived";
pub const CREATED_AT: &str = "createdAt";
pub const UPDATED_AT: &str = "updatedAt";
pub const VERSION_ID: &str = "versionId";
pub const TRIGGER_COUNT: &str = "triggerCount";
pub const TAGS: &str = "tags";
pub const PIN_DATA: &str = "pinData";
pub const SETTINGS: &str = "settings";
pub const META: &str = "meta";
pub const STATIC_DATA: &str = "staticData";
pub const NODES: &str = "nodes";
pub const CONNECTIONS: &str = "connections";
