//! Testing utilities for configuration trees
//!
//! # Tree Assertions
//!
//! Checking a nested tree by hand means a `match` per level and a panic arm per wrong
//! variant. [assert_registry] replaces that with a fluent API that reports the path of the
//! failing node:
//!
//! ```rust,ignore
//! use registry_parser::registry::testing::assert_registry;
//!
//! assert_registry(&conf)
//!     .item_count(1)
//!     .item(0, |item| {
//!         item.assert_struct()
//!             .name("doc")
//!             .child_count(1)
//!             .child(0, |child| {
//!                 child.assert_attribute()
//!                     .name("id")
//!                     .child(0, |sub| {
//!                         sub.name("DYNTYPE").value("plain");
//!                     });
//!             });
//!     });
//! ```

mod assertions;

pub use assertions::{
    assert_registry, AttributeAssertion, ItemAssertion, PosAttributeAssertion,
    RegistryAssertion, SimpleAttrAssertion, StructAssertion, StructItemAssertion,
};
