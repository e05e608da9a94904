pub mod fields;
mod node_types;
mod tag;

pub use node_types::{NodeTypeCatalog, KNOWN_NODE_TYPES};
pub use tag::Tag;
