//! Convenient re-exports for common usage patterns.
//!
//! A parser core built on this crate can pull in everything it
//! typically needs with a single use statement:
//!
//! ```rust
//! use argbase::prelude::*;
//! ```

// Core functionality
pub use crate::{copy_items, display_name};

// Essential types
pub use crate::{
    ArgumentError, ArgumentMeta, ArgumentSpec, AttributeHolder, ConversionError, NameHint,
    Namespace,
};

// Macros
pub use crate::namespace;

// Commonly used external types
pub use serde_json::{json, Value};
