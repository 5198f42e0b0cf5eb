#![allow(clippy::struct_excessive_bools)]

/// Compilation options for regular-expression patterns.
///
/// These map onto the flags of the underlying regex engine and are applied
/// when a [`RegexPattern`](crate::RegexPattern) is built.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "regex")] {
/// use strscan::{PatternOptions, RegexPattern, Scanner};
///
/// let options = PatternOptions {
///     case_insensitive: true,
///     ..Default::default()
/// };
/// let keyword = RegexPattern::with_options("select", options).unwrap();
/// let mut scanner = Scanner::new("SELECT *");
/// assert_eq!(scanner.scan(&keyword).unwrap().as_deref(), Some("SELECT"));
/// # }
/// ```
///
/// # Default
///
/// All flags are off except `unicode`; there is no size limit beyond the
/// engine's own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternOptions {
    /// Letters match regardless of case.
    ///
    /// # Default
    ///
    /// `false`
    pub case_insensitive: bool,

    /// `^` and `$` match at line boundaries instead of only at the ends of
    /// the haystack.
    ///
    /// The haystack is always the unread rest of the buffer, so with this
    /// off `^` means "at the cursor".
    ///
    /// # Default
    ///
    /// `false`
    pub multi_line: bool,

    /// `.` also matches `\n`.
    ///
    /// # Default
    ///
    /// `false`
    pub dot_matches_new_line: bool,

    /// Whitespace in the pattern is ignored and `#` starts a comment.
    ///
    /// # Default
    ///
    /// `false`
    pub ignore_whitespace: bool,

    /// Character classes and `.` operate on Unicode scalar values.
    ///
    /// # Default
    ///
    /// `true`
    pub unicode: bool,

    /// Upper bound, in bytes, on the size of a compiled pattern.
    ///
    /// # Default
    ///
    /// `None` (engine default)
    pub size_limit: Option<usize>,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            unicode: true,
            size_limit: None,
        }
    }
}
