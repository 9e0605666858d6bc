//! # auric-json
//!
//! Single-pass, recursive-descent **JSON parser** producing an ordered value tree.
//!
//! The parser reads the input front-to-back with a single cursor and one character
//! of lookahead, dispatching on the leading character of each value. There is no
//! tokenizer and no backtracking, so parse time is linear in the input length.
//!
//! ## Quick start
//!
//! ```rust
//! use auric_json::parse;
//!
//! let root = parse(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//! let obj = root.to_object().unwrap();
//! assert_eq!(obj.get("name").unwrap(), "Alice");
//! assert_eq!(obj.get("scores").unwrap().to_array().unwrap().len(), 3);
//! ```
//!
//! ## Permissive extensions
//!
//! - One trailing comma before `]` or `}` is accepted.
//! - Object keys need not be unique; lookups return the first match.
//! - Leading zeros in numbers are read as decimal (`0123` is `123`).
//! - `1.` and `-.5` are read as doubles. A bare `.5` is still rejected.
//! - Content after the first complete value is ignored by [`parse`]. Use
//!   [`parse_prefix`] to learn where the value ended.
//!
//! ## Modules
//!
//! - [`parser`]: text → [`Value`] (`parse`, `parse_with_options`, `parse_prefix`)
//! - [`types`]: `Value`, `Array`, `Object` and their accessors
//! - [`options`]: `ParseOptions` (nesting depth limit)
//! - [`error`]: Error type shared by the parser and the accessors

pub mod error;
pub mod options;
pub mod parser;
pub mod types;

pub use error::JsonError;
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH};
pub use parser::{parse, parse_prefix, parse_with_options, Parser};
pub use types::{Array, Object, Value};
