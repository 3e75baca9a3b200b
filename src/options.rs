//! Configuration options for TOON encoding and decoding.
//!
//! This module provides the option records passed to the codec entry points:
//!
//! - [`EncodeOptions`]: indentation, delimiter, key folding, string quoting
//! - [`DecodeOptions`]: indentation, strict validation, path expansion
//! - [`Delimiter`]: choice of delimiter for arrays and tables (comma, tab, or pipe)
//!
//! Options are plain values with pure defaults; there is no process-wide
//! mutable state. Pass them by reference to the `_with_options` entry points.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{encode_with_options, Delimiter, EncodeOptions, KeyFolding, Value};
//!
//! let value = Value::from("hello, world");
//!
//! // Pipe delimiter: the comma no longer needs quoting
//! let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
//! let toon = encode_with_options(&value, &options).unwrap();
//! assert_eq!(toon, "hello, world");
//!
//! // Key folding collapses single-key wrapper chains
//! let options = EncodeOptions::new().with_key_folding(KeyFolding::Safe);
//! ```

/// Delimiter choice for TOON inline arrays and tabular rows.
///
/// The delimiter set is closed: comma (default), tab, and pipe are the only
/// valid delimiters, both as an encoder option and as a header declaration.
///
/// # Examples
///
/// ```rust
/// use toon_codec::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Tab.as_char(), '\t');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the delimiter as a character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Returns the string representation of this delimiter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }

    /// Returns the marker written in array headers between the length and
    /// the closing bracket. Comma is the default and carries no marker;
    /// tab and pipe declare themselves: `[3\t]`, `[3|]`.
    #[must_use]
    pub const fn header_marker(&self) -> &'static str {
        match self {
            Delimiter::Comma => "",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }

    /// Maps a header-declared delimiter character back to a `Delimiter`.
    /// Returns `None` for characters outside the closed set.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Delimiter> {
        match ch {
            ',' => Some(Delimiter::Comma),
            '\t' => Some(Delimiter::Tab),
            '|' => Some(Delimiter::Pipe),
            _ => None,
        }
    }
}

/// Controls whether chains of single-key wrapper objects are collapsed into
/// dotted composite keys during encoding.
///
/// # Examples
///
/// ```text
/// // KeyFolding::Off (default)
/// user:
///   profile:
///     name: Ada
///
/// // KeyFolding::Safe
/// user.profile.name: Ada
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyFolding {
    /// No key folding (default).
    #[default]
    Off,
    /// Fold single-key identifier chains when the result decodes losslessly.
    Safe,
}

/// Controls whether dotted keys are re-nested into nested objects during
/// decoding. The inverse of [`KeyFolding`].
///
/// # Examples
///
/// ```text
/// // With PathExpansion::Safe, this:
/// user.name: Ada
///
/// // Becomes:
/// user:
///   name: Ada
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PathExpansion {
    /// No path expansion (default).
    #[default]
    Off,
    /// Expand dotted keys whose every segment is a valid identifier.
    Safe,
}

/// Configuration options for TOON encoding.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{Delimiter, EncodeOptions, KeyFolding};
///
/// // Defaults: 2-space indent, comma delimiter, no folding
/// let options = EncodeOptions::new();
/// assert_eq!(options.indent, 2);
///
/// // Custom configuration
/// let options = EncodeOptions::new()
///     .with_delimiter(Delimiter::Pipe)
///     .with_key_folding(KeyFolding::Safe)
///     .with_flatten_depth(3)
///     .with_indent(4);
/// ```
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    /// Number of spaces per indentation level. Default: 2.
    pub indent: usize,
    /// Delimiter for inline arrays and tabular rows. Default: comma.
    pub delimiter: Delimiter,
    /// Whether to collapse single-key wrapper chains. Default: off.
    pub key_folding: KeyFolding,
    /// Maximum number of segments a folded key may carry.
    /// Default: `usize::MAX` (unbounded).
    pub flatten_depth: usize,
    /// Quote every string value unconditionally (keys keep the normal
    /// unquoted-key rules). Default: false.
    pub quote_strings: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 2,
            delimiter: Delimiter::default(),
            key_folding: KeyFolding::default(),
            flatten_depth: usize::MAX,
            quote_strings: false,
        }
    }
}

impl EncodeOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation width (spaces per level). Values below 1 are
    /// treated as 1.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent.max(1);
        self
    }

    /// Sets the delimiter for inline arrays and tabular rows.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the key folding mode.
    #[must_use]
    pub fn with_key_folding(mut self, key_folding: KeyFolding) -> Self {
        self.key_folding = key_folding;
        self
    }

    /// Bounds the number of segments a folded key may carry. Values below 1
    /// are treated as 1.
    #[must_use]
    pub fn with_flatten_depth(mut self, flatten_depth: usize) -> Self {
        self.flatten_depth = flatten_depth.max(1);
        self
    }

    /// Quote every string value unconditionally.
    #[must_use]
    pub fn with_quote_strings(mut self, quote_strings: bool) -> Self {
        self.quote_strings = quote_strings;
        self
    }
}

/// Configuration options for TOON decoding.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{DecodeOptions, PathExpansion};
///
/// // Defaults: 2-space indent, strict validation, no expansion
/// let options = DecodeOptions::new();
/// assert!(options.strict);
///
/// // Lenient decoding with path expansion
/// let options = DecodeOptions::new()
///     .with_strict(false)
///     .with_expand_paths(PathExpansion::Safe);
/// ```
#[derive(Clone, Debug)]
pub struct DecodeOptions {
    /// Expected number of spaces per indentation level. Default: 2.
    pub indent: usize,
    /// Strict validation: declared lengths, row arity, exact indentation
    /// and duplicate keys are enforced. Default: true.
    pub strict: bool,
    /// Whether to re-nest dotted keys after parsing. Default: off.
    pub expand_paths: PathExpansion,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            indent: 2,
            strict: true,
            expand_paths: PathExpansion::default(),
        }
    }
}

impl DecodeOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the expected indentation width (spaces per level). Values below
    /// 1 are treated as 1.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent.max(1);
        self
    }

    /// Enables or disables strict validation.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the path expansion mode.
    #[must_use]
    pub fn with_expand_paths(mut self, expand_paths: PathExpansion) -> Self {
        self.expand_paths = expand_paths;
        self
    }
}
