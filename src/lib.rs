//! Support layer for command-line argument parsers
//! ----------------------------------------------------------------------
//! The parsing state machine itself (tokenizing argv, matching options
//! and positionals, consuming nargs) lives in a separate parser core.
//! This crate provides what that core leans on: the error taxonomy for
//! argument-definition and conversion failures, the [`AttributeHolder`]
//! representation capability, the [`Namespace`] result container, and a
//! couple of helpers for naming arguments and copying accumulated
//! defaults.
//!
//! #### Example
//!
//! ```rust
//! use argbase::{namespace, ArgumentError, ArgumentSpec, Namespace};
//!
//! let count = ArgumentSpec::from_flags(["-c", "--count"]);
//! let err = ArgumentError::new(Some(&count), "invalid int value: 'x'");
//! assert_eq!(err.to_string(), "argument -c/--count: invalid int value: 'x'");
//!
//! let mut ns = Namespace::new();
//! ns.set("count", 3);
//! assert_eq!(ns, namespace!(count = 3));
//! ```
//! ----------------------------------------------------------------------

#![deny(unsafe_code)]

pub mod argument;
pub mod error;
pub mod holder;
pub mod namespace;
pub mod prelude;
pub mod util;

pub use argument::{display_name, ArgumentMeta, ArgumentSpec, NameHint};
pub use error::{ArgumentError, ConversionError, Result};
pub use holder::AttributeHolder;
pub use namespace::Namespace;
pub use util::copy_items;
