//! Configuration tree for registry files
//!
//! ## Modules
//!
//! - `container` - Ordered append-only child lists with last-item addressing
//! - `node` - Node types: SimpleAttr, PosAttribute, Attribute, Struct
//! - `conf` - The root RegistryConf
//! - `lookup` - Read-only queries over a finished tree
//! - `traits` - Uniform node type / label access used by the formatters

pub mod conf;
pub mod container;
pub mod lookup;
pub mod node;
pub mod traits;

pub use conf::RegistryConf;
pub use container::Children;
pub use node::{Attribute, PosAttribute, RegistryItem, SimpleAttr, Struct, StructItem};
pub use traits::RegistryNode;
