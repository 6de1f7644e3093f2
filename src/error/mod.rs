//! Error types raised during argument declaration and value conversion.

use thiserror::Error;

use crate::argument::{display_name, ArgumentMeta};

/// A type alias for a `Result` with the associated `ArgumentError`.
pub type Result<T, E = ArgumentError> = std::result::Result<T, E>;

/// An error from creating or using an argument, optional or positional.
///
/// The rendered form is the message, prefixed with the argument's
/// display name when one could be derived:
/// `argument -c/--count: invalid int value: 'x'`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", qualified(.argument_name, .message))]
pub struct ArgumentError {
    /// Best-effort display name, derived once at construction.
    pub argument_name: Option<String>,
    pub message: String,
}

impl ArgumentError {
    pub fn new(argument: Option<&dyn ArgumentMeta>, message: impl Into<String>) -> Self {
        Self {
            argument_name: display_name(argument),
            message: message.into(),
        }
    }
}

fn qualified(argument_name: &Option<String>, message: &str) -> String {
    match argument_name {
        Some(name) => format!("argument {name}: {message}"),
        None => message.to_owned(),
    }
}

/// A command-line string could not be converted to the argument's
/// target type.
///
/// Raised by user-supplied conversion functions, which have no access
/// to the argument's identity; the parser core is expected to catch it
/// and re-raise an [`ArgumentError`] naming the offending argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ConversionError(pub String);

impl ConversionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{ArgumentSpec, NameHint};

    #[test]
    fn test_named_rendering() {
        let arg = ArgumentSpec::from_flags(["-c", "--count"]);
        let err = ArgumentError::new(Some(&arg), "invalid int value: 'x'");
        assert_eq!(
            err.to_string(),
            "argument -c/--count: invalid int value: 'x'"
        );
    }

    #[test]
    fn test_unnamed_rendering_is_message_only() {
        let err = ArgumentError::new(None, "bad value");
        assert_eq!(err.argument_name, None);
        assert_eq!(err.to_string(), "bad value");
    }

    #[test]
    fn test_dest_only_rendering() {
        let arg = ArgumentSpec::positional("count").with_metavar(NameHint::Suppressed);
        let err = ArgumentError::new(Some(&arg), "invalid int");
        assert_eq!(err.to_string(), "argument count: invalid int");
    }

    #[test]
    fn test_conversion_error_is_bare_message() {
        let err = ConversionError::new("not a float: 'abc'");
        assert_eq!(err.to_string(), "not a float: 'abc'");
    }

    #[test]
    fn test_error_trait_objects() {
        // Both kinds box into the std error trait for callers that
        // propagate without inspecting.
        let errs: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(ArgumentError::new(None, "a")),
            Box::new(ConversionError::new("b")),
        ];
        assert_eq!(errs[0].to_string(), "a");
        assert_eq!(errs[1].to_string(), "b");
    }
}
