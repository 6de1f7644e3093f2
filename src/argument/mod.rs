//! Read-only views of argument definitions.
//!
//! The parser core owns its argument definitions; this module only
//! specifies how the support layer reads them. Any definition type can
//! implement [`ArgumentMeta`] to gain display-name derivation, or use
//! the ready-made [`ArgumentSpec`] carrier.

/// How an argument wants a particular name rendered, if at all.
///
/// Replaces the shared "suppress" sentinel value some parsers use: an
/// explicitly hidden name is a distinct state, not a magic string that
/// legitimate data could collide with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NameHint {
    /// No name was declared.
    #[default]
    Unset,
    /// A name was declared but must never be shown to the user.
    Suppressed,
    /// The name to show.
    Named(String),
}

impl NameHint {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// The name, unless it is unset or suppressed.
    pub fn visible(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Unset | Self::Suppressed => None,
        }
    }
}

/// Trait for reading the identity of an argument definition.
pub trait ArgumentMeta {
    /// Flags the argument was declared with, e.g. `-c`, `--count`.
    /// Empty for positionals.
    fn option_strings(&self) -> &[String];

    /// The name to use in usage and error messages.
    fn metavar(&self) -> &NameHint;

    /// The attribute name the parsed value is stored under.
    fn dest(&self) -> &NameHint;
}

/// Minimal concrete [`ArgumentMeta`] carrier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub option_strings: Vec<String>,
    pub metavar: NameHint,
    pub dest: NameHint,
}

impl ArgumentSpec {
    /// A positional argument stored under `dest`.
    pub fn positional(dest: impl Into<String>) -> Self {
        Self {
            dest: NameHint::named(dest),
            ..Self::default()
        }
    }

    /// An optional argument declared with the given flags.
    pub fn from_flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            option_strings: flags.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_metavar(mut self, metavar: NameHint) -> Self {
        self.metavar = metavar;
        self
    }

    pub fn with_dest(mut self, dest: NameHint) -> Self {
        self.dest = dest;
        self
    }
}

impl ArgumentMeta for ArgumentSpec {
    fn option_strings(&self) -> &[String] {
        &self.option_strings
    }

    fn metavar(&self) -> &NameHint {
        &self.metavar
    }

    fn dest(&self) -> &NameHint {
        &self.dest
    }
}

/// Derives the human-readable name an error message should use for
/// `argument`.
///
/// Prefers the flags the user typed, then the declared `metavar`, then
/// the internal `dest` key. Returns `None` when nothing presentable is
/// left, in which case callers render their message without an
/// "argument ...:" prefix.
pub fn display_name(argument: Option<&dyn ArgumentMeta>) -> Option<String> {
    let argument = argument?;
    let flags = argument.option_strings();
    if !flags.is_empty() {
        return Some(flags.join("/"));
    }
    if let Some(metavar) = argument.metavar().visible() {
        return Some(metavar.to_owned());
    }
    if let Some(dest) = argument.dest().visible() {
        return Some(dest.to_owned());
    }
    None
}
