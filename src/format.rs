//! TOON text format reference
//!
//! This module documents the TOON (Token-Oriented Object Notation) text
//! format as implemented by this crate. It contains no code; it is the
//! format's reference card.
//!
//! # Overview
//!
//! TOON is a textual encoding of the JSON data model designed to minimize
//! the number of tokens a large language model consumes while remaining
//! human-readable and deterministically round-trippable. Structure comes
//! from indentation rather than braces; arrays declare their length up
//! front; arrays of uniform objects declare their schema once and then emit
//! one row per element.
//!
//! # Objects
//!
//! Objects are newline-delimited `key: value` entries. Nested objects
//! indent one level (default 2 spaces):
//!
//! ```text
//! name: Ada
//! age: 30
//! address:
//!   city: London
//!   zip: "00100"
//! empty: {}
//! ```
//!
//! **Keys.** A key is emitted unquoted iff it matches
//! `[A-Za-z_][A-Za-z0-9_.]*`; anything else (spaces, leading digits,
//! punctuation) is double-quoted with the same escapes as string values.
//! The empty object is spelled `{}`, both as a value and as a whole
//! document.
//!
//! # Arrays
//!
//! Every array declares its element count in the header. The body form
//! depends on the elements:
//!
//! | Shape | Form | Example |
//! |-------|------|---------|
//! | all primitives | inline | `tags[3]: a,b,c` |
//! | uniform objects, primitive values | tabular | `items[2]{id,qty}:` + one row per line |
//! | anything else | list | `mix[2]:` + `- ` items |
//! | empty | bare header | `none[0]:` |
//!
//! Tabular form is the dominant token saving: the field list appears once
//! in the header and each element collapses to one delimiter-joined row.
//! All elements must share the same key set, and every value must be a
//! primitive.
//!
//! ```text
//! items[2]{id,name,qty,price}:
//!   A1,Widget,2,9.99
//!   B2,Gadget,1,14.5
//! ```
//!
//! List form handles heterogeneous and nested arrays. An object item puts
//! its first entry on the marker line; further entries sit one level past
//! the marker:
//!
//! ```text
//! mix[3]:
//!   - 1
//!   - two
//!   - k: 3
//! ```
//!
//! # Delimiters
//!
//! Inline values, tabular field lists and rows are joined by the active
//! delimiter: comma (default), tab, or pipe — a closed set. Non-comma
//! delimiters declare themselves in the header between the length and the
//! closing bracket, so a document is always self-describing:
//!
//! ```text
//! items[2|]{sku|qty}:
//!   A1|2
//!   B2|1
//! ```
//!
//! # Strings
//!
//! Strings are unquoted by default. A string value is double-quoted when it:
//!
//! - is empty, or has leading/trailing whitespace
//! - reads as `true`, `false`, `null`, or a number (including `007`-style
//!   leading-zero forms)
//! - contains `:`, `"`, `\`, `[`, `]`, `{`, `}`, a newline, a carriage
//!   return, a tab, or the active delimiter
//! - starts with the list-item marker `- `
//!
//! Quoted strings use JSON-style escapes (`\"`, `\\`, `\n`, `\r`, `\t`)
//! plus `\uXXXX` for other control characters; surrogate pairs are
//! combined on decode.
//!
//! # Key folding and path expansion
//!
//! With key folding enabled, chains of single-key wrapper objects collapse
//! into one dotted key: `{"a":{"b":{"c":1}}}` emits as `a.b.c: 1`. Every
//! segment must be a bare identifier (`[A-Za-z_][A-Za-z0-9_]*`). Path
//! expansion reverses the transformation on decode.
//!
//! # Strict and lenient decoding
//!
//! Strict mode (the default) enforces:
//!
//! - declared `[N]` equals the actual element or row count
//! - tabular row arity equals the declared field count
//! - indentation is spaces only and a whole multiple of the indent width
//! - no duplicate keys within an object
//!
//! Lenient mode recovers: actual counts win, depth is floored, the last
//! duplicate key wins, short rows fill with null.
//!
//! # Documents
//!
//! The encoder terminates lines with `\n`; the decoder also accepts
//! `\r\n`. A top-level map emits its entries at depth 0 with no wrapping;
//! a top-level array emits its header at depth 0; a primitive document is
//! a single line. The `---` document separator used by external batching
//! helpers is not interpreted by this codec.
