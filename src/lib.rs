//! Resub - regex search-and-replace with backreference templates.
//!
//! This library provides the core functionality for resub, including:
//! - A single-slot compiled-pattern cache
//! - Global replacement with `\1`..`\9` backreference templates
//! - Match selection (one expanded template per match)
//! - Named preset files with directory cascade discovery
//!
//! # Example
//!
//! ```
//! use resub_cli::engine::{PatternCache, replace, select};
//!
//! let mut cache = PatternCache::new();
//!
//! let out = replace(&mut cache, "(a)(b)", br"\2\1", b"ab", false).unwrap();
//! assert_eq!(out, b"ba");
//!
//! let hits = select(&mut cache, "a", b"X", b"aaa", false).unwrap();
//! assert_eq!(hits, vec![b"X".to_vec(), b"X".to_vec(), b"X".to_vec()]);
//! ```

pub mod config;
pub mod engine;
pub mod error;

pub use engine::{PatternCache, replace, select};
pub use error::{ResubError, Result};
