//! A stateful lexical scanner for hand-written parsers.
//!
//! [`Scanner`] owns a text buffer and a cursor and offers fine-grained
//! lookahead ([`Scanner::check`], [`Scanner::check_until`],
//! [`Scanner::exists`]), consumption ([`Scanner::scan`],
//! [`Scanner::scan_until`], [`Scanner::skip`]) and backtracking
//! ([`Scanner::set_pointer`], [`Scanner::reset`]). Every attempt records its
//! outcome in a [`MatchState`] that later queries read from.
//!
//! Patterns are anything implementing [`Pattern`]. With the default `regex`
//! feature that includes [`regex::Regex`], regex source strings and the
//! precompiled [`RegexPattern`].
//!
//! All positions and lengths are counted in Unicode scalar values.
//!
//! ```rust
//! # #[cfg(feature = "regex")] {
//! use strscan::Scanner;
//!
//! let mut s = Scanner::new("hello world");
//! assert_eq!(s.scan("hello").unwrap().as_deref(), Some("hello"));
//! assert_eq!(s.pointer(), 5);
//! assert_eq!(s.scan("xyz").unwrap(), None);
//! assert!(!s.matched());
//! assert_eq!(s.skip(r"\s+").unwrap(), Some(1));
//! assert_eq!(s.rest(), "world");
//! # }
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod match_state;
mod options;
mod pattern;
mod scanner;
mod trace;

#[cfg(test)]
mod tests;

pub use error::ScanError;
pub use match_state::MatchState;
pub use options::PatternOptions;
#[cfg(feature = "regex")]
pub use pattern::RegexPattern;
pub use pattern::{Literal, Pattern, PatternMatch};
pub use scanner::Scanner;
