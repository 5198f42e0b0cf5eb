//! The pattern-matching capability the scanner drives.
//!
//! The scanner never interprets patterns itself. It hands the unread part of
//! its buffer to a [`Pattern`] and asks for one of two things:
//!
//! - an *anchored* match: the leftmost match, accepted only when it begins at
//!   offset 0 of the haystack;
//! - a *search*: the leftmost match anywhere in the haystack.
//!
//! Offsets inside a [`PatternMatch`] are byte offsets into the haystack the
//! pattern was given. The scanner converts them to character offsets.
//!
//! Implementations are provided for [`regex::Regex`], for regex source text
//! (`str`, compiled on every call), for the precompiled [`RegexPattern`], and
//! for the plain matchers [`Literal`] and `char`.

use alloc::vec::Vec;

use crate::ScanError;

/// One successful pattern match within a haystack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch<'h> {
    /// Byte offset in the haystack where the match begins.
    pub start: usize,
    /// The full matched text.
    pub text: &'h str,
    /// Capture groups in order, group 0 excluded. Groups that did not
    /// participate are `None`.
    pub captures: Vec<Option<&'h str>>,
}

impl<'h> PatternMatch<'h> {
    /// A match without capture groups.
    #[must_use]
    pub fn new(start: usize, text: &'h str) -> Self {
        Self {
            start,
            text,
            captures: Vec::new(),
        }
    }

    /// Byte offset one past the end of the match.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Something the scanner can match against the unread text.
///
/// A returned match must be a slice of `haystack` at `start`. The scanner
/// re-slices the haystack by the reported offsets and treats a match that
/// does not line up with it as no match.
pub trait Pattern {
    /// Returns the leftmost match in `haystack` if it starts at offset 0.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidPattern`] if the pattern cannot be
    /// evaluated.
    fn anchored<'h>(&self, haystack: &'h str) -> Result<Option<PatternMatch<'h>>, ScanError>;

    /// Returns the leftmost match anywhere in `haystack`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidPattern`] if the pattern cannot be
    /// evaluated.
    fn search<'h>(&self, haystack: &'h str) -> Result<Option<PatternMatch<'h>>, ScanError>;
}

/// Matches a fixed piece of text verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a>(pub &'a str);

impl Pattern for Literal<'_> {
    fn anchored<'h>(&self, haystack: &'h str) -> Result<Option<PatternMatch<'h>>, ScanError> {
        Ok(haystack
            .starts_with(self.0)
            .then(|| PatternMatch::new(0, &haystack[..self.0.len()])))
    }

    fn search<'h>(&self, haystack: &'h str) -> Result<Option<PatternMatch<'h>>, ScanError> {
        Ok(haystack
            .find(self.0)
            .map(|start| PatternMatch::new(start, &haystack[start..start + self.0.len()])))
    }
}

impl Pattern for char {
    fn anchored<'h>(&self, haystack: &'h str) -> Result<Option<PatternMatch<'h>>, ScanError> {
        Ok(haystack
            .starts_with(*self)
            .then(|| PatternMatch::new(0, &haystack[..self.len_utf8()])))
    }

    fn search<'h>(&self, haystack: &'h str) -> Result<Option<PatternMatch<'h>>, ScanError> {
        Ok(haystack
            .find(*self)
            .map(|start| PatternMatch::new(start, &haystack[start..start + self.len_utf8()])))
    }
}

/// Matches exactly one character of any kind, line breaks included.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AnyChar;

impl Pattern for AnyChar {
    fn anchored<'h>(&self, haystack: &'h str) -> Result<Option<PatternMatch<'h>>, ScanError> {
        Ok(haystack
            .chars()
            .next()
            .map(|ch| PatternMatch::new(0, &haystack[..ch.len_utf8()])))
    }

    fn search<'h>(&self, haystack: &'h str) -> Result<Option<PatternMatch<'h>>, ScanError> {
        self.anchored(haystack)
    }
}

#[cfg(feature = "regex")]
mod regex_impl {
    use alloc::string::String;

    use regex::{Captures, Regex};
    use regex_automata::{Anchored, Input, meta, util::syntax};

    use super::{Pattern, PatternMatch};
    use crate::{PatternOptions, ScanError};

    fn to_match<'h>(caps: &Captures<'h>) -> Option<PatternMatch<'h>> {
        let whole = caps.get(0)?;
        Some(PatternMatch {
            start: whole.start(),
            text: whole.as_str(),
            captures: caps
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str()))
                .collect(),
        })
    }

    fn leftmost<'h>(re: &Regex, haystack: &'h str) -> Option<PatternMatch<'h>> {
        re.captures(haystack).as_ref().and_then(to_match)
    }

    impl Pattern for Regex {
        fn anchored<'h>(
            &self,
            haystack: &'h str,
        ) -> Result<Option<PatternMatch<'h>>, ScanError> {
            Ok(leftmost(self, haystack).filter(|m| m.start == 0))
        }

        fn search<'h>(&self, haystack: &'h str) -> Result<Option<PatternMatch<'h>>, ScanError> {
            Ok(leftmost(self, haystack))
        }
    }

    /// Regex source text, compiled on every call.
    impl Pattern for str {
        fn anchored<'h>(
            &self,
            haystack: &'h str,
        ) -> Result<Option<PatternMatch<'h>>, ScanError> {
            Regex::new(self)?.anchored(haystack)
        }

        fn search<'h>(&self, haystack: &'h str) -> Result<Option<PatternMatch<'h>>, ScanError> {
            Regex::new(self)?.search(haystack)
        }
    }

    /// A compiled regular expression that can run anchored or unanchored.
    ///
    /// Anchored attempts tell the engine to match only at the start of the
    /// haystack, so a failing `check` or `scan` gives up at the first
    /// character instead of searching the whole rest of the buffer. The
    /// source is compiled as given and never rewritten.
    #[derive(Debug, Clone)]
    pub struct RegexPattern {
        source: String,
        regex: meta::Regex,
    }

    impl RegexPattern {
        /// Compiles `source` with default options.
        ///
        /// # Errors
        ///
        /// Returns [`ScanError::InvalidPattern`] if `source` is not a valid
        /// regular expression.
        pub fn new(source: &str) -> Result<Self, ScanError> {
            Self::with_options(source, PatternOptions::default())
        }

        /// Compiles `source` with the given options.
        ///
        /// # Errors
        ///
        /// Returns [`ScanError::InvalidPattern`] if `source` is not a valid
        /// regular expression or exceeds the configured size limit.
        pub fn with_options(source: &str, options: PatternOptions) -> Result<Self, ScanError> {
            let mut config = meta::Config::new();
            if let Some(limit) = options.size_limit {
                config = config.nfa_size_limit(Some(limit));
            }
            let regex = meta::Regex::builder()
                .syntax(
                    syntax::Config::new()
                        .case_insensitive(options.case_insensitive)
                        .multi_line(options.multi_line)
                        .dot_matches_new_line(options.dot_matches_new_line)
                        .ignore_whitespace(options.ignore_whitespace)
                        .unicode(options.unicode),
                )
                .configure(config)
                .build(source)?;
            Ok(Self {
                source: String::from(source),
                regex,
            })
        }

        /// The source text this pattern was compiled from.
        #[must_use]
        pub fn as_str(&self) -> &str {
            &self.source
        }

        fn find<'h>(&self, haystack: &'h str, anchored: Anchored) -> Option<PatternMatch<'h>> {
            let mut caps = self.regex.create_captures();
            self.regex
                .search_captures(&Input::new(haystack).anchored(anchored), &mut caps);
            let whole = caps.get_group(0)?;
            Some(PatternMatch {
                start: whole.start,
                text: haystack.get(whole.range())?,
                captures: (1..caps.group_len())
                    .map(|group| {
                        caps.get_group(group)
                            .and_then(|span| haystack.get(span.range()))
                    })
                    .collect(),
            })
        }
    }

    impl Pattern for RegexPattern {
        fn anchored<'h>(
            &self,
            haystack: &'h str,
        ) -> Result<Option<PatternMatch<'h>>, ScanError> {
            Ok(self.find(haystack, Anchored::Yes))
        }

        fn search<'h>(&self, haystack: &'h str) -> Result<Option<PatternMatch<'h>>, ScanError> {
            Ok(self.find(haystack, Anchored::No))
        }
    }
}

#[cfg(feature = "regex")]
pub use regex_impl::RegexPattern;
