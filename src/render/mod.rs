//! MiniJinja integration for resolving classes inside templates.

mod filters;

pub use filters::register_class_filters;
