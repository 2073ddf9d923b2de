//! Style map and naming errors.
//!
//! This module provides the data model backing class resolution:
//!
//! - [`StyleMap`]: The mapping from logical style keys to generated class strings
//! - [`NamingError`]: Errors from class-name resolution
//!
//! Keys follow the Block-Element-Modifier convention: a plain key names a
//! block (`"btn"`), `block__element` names an element, and `base--modifier`
//! names a modifier of a block or element.

mod error;
mod map;

pub use error::NamingError;
pub use map::{element_key, modifier_key, StyleMap, ELEMENT_SEPARATOR, MODIFIER_SEPARATOR};
