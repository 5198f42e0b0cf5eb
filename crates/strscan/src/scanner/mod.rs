//! Scanner: a text buffer, a cursor, and the outcome of the last match.
//!
//! What it does
//! - Hands the unread rest of the buffer to a [`Pattern`] and records the
//!   outcome in a [`MatchState`]. The check family only looks; the scan
//!   family also moves the cursor past what matched.
//! - The `_until` variants search ahead instead of matching at the cursor.
//!   Their matched text covers everything from the cursor to the end of the
//!   match, skipped prefix included.
//!
//! Invariants
//! - `pos` (chars) and `byte` (UTF-8 offset) always name the same place, a
//!   char boundary within `0..=text.len()`.
//! - Every pattern attempt replaces the match state wholesale before the
//!   cursor moves. A failed attempt, including one that errors, leaves it
//!   unset.
//! - The buffer only grows, and only at the end, so `byte` never needs
//!   adjusting after [`Scanner::concat`].
//!
//! Sharing
//! - The match state lives in a shared slot. [`Clone`] hands the clone the
//!   same slot, so a scan on either scanner is visible through both.
//!   [`Scanner::clone_detached`] and [`Scanner::detach`] give a scanner its
//!   own slot.

use alloc::{rc::Rc, string::String, vec::Vec};
use core::{cell::RefCell, fmt::Display};

use crate::{
    MatchState, ScanError,
    pattern::{AnyChar, Pattern, PatternMatch},
    trace::trace,
};

/// A stateful lexical scanner over an owned string.
///
/// ```rust
/// # #[cfg(feature = "regex")] {
/// use strscan::Scanner;
///
/// let mut s = Scanner::new("foo123bar");
/// assert_eq!(s.scan_until(r"\d+").unwrap().as_deref(), Some("foo123"));
/// assert_eq!(s.pointer(), 6);
/// assert_eq!(s.rest(), "bar");
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    text: String,
    char_len: usize,
    pos: usize,
    byte: usize,
    last_match: Rc<RefCell<MatchState>>,
}

impl Scanner {
    /// Creates a scanner at position 0 over `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            char_len: text.chars().count(),
            text,
            pos: 0,
            byte: 0,
            last_match: Rc::default(),
        }
    }

    /// Creates a scanner over the textual form of `value`.
    pub fn from_display(value: &impl Display) -> Self {
        use alloc::string::ToString;

        Self::new(value.to_string())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Match state
    // ─────────────────────────────────────────────────────────────────────

    /// Assigns `state` over the shared slot and returns its text.
    fn replace_match(&self, state: MatchState) -> Option<Rc<str>> {
        trace!(pos = self.pos, matched = ?state.text(), "match state replaced");
        let text = state.shared_text();
        *self.last_match.borrow_mut() = state;
        text
    }

    fn clear_match(&self) {
        self.replace_match(MatchState::unset());
    }

    /// Records the outcome of one pattern attempt. `until` extends the
    /// matched text back to the cursor.
    ///
    /// The recorded text is sliced out of the rest by the match offsets, so
    /// a match that does not line up with char boundaries of the buffer
    /// counts as no match.
    fn record(&self, found: Option<PatternMatch<'_>>, until: bool) -> Option<Rc<str>> {
        let rest = self.rest();
        let state = found
            .filter(|m| rest.get(m.start..m.end()) == Some(m.text))
            .and_then(|m| {
                let from = if until { 0 } else { m.start };
                Some(MatchState::matched(rest.get(from..m.end())?, &m.captures))
            })
            .unwrap_or_default();
        self.replace_match(state)
    }

    /// Moves the cursor past `consumed`, which must be a prefix of the rest.
    fn advance(&mut self, consumed: &str) {
        debug_assert!(self.rest().starts_with(consumed));
        self.byte += consumed.len();
        self.pos += consumed.chars().count();
        trace!(pos = self.pos, "cursor advanced");
    }

    // ─────────────────────────────────────────────────────────────────────
    // Pattern application
    // ─────────────────────────────────────────────────────────────────────

    /// Matches `pattern` at the cursor without moving it.
    ///
    /// Returns the matched text, or `None` if the pattern does not match
    /// exactly at the cursor.
    ///
    /// # Errors
    ///
    /// Propagates [`ScanError::InvalidPattern`] from the pattern. The match
    /// state is reset in that case.
    pub fn check<P: Pattern + ?Sized>(
        &mut self,
        pattern: &P,
    ) -> Result<Option<Rc<str>>, ScanError> {
        let found = pattern
            .anchored(self.rest())
            .inspect_err(|_| self.clear_match())?;
        debug_assert!(found.as_ref().is_none_or(|m| m.start == 0));
        Ok(self.record(found.filter(|m| m.start == 0), false))
    }

    /// Matches `pattern` at the cursor and moves past the match.
    ///
    /// # Errors
    ///
    /// See [`Scanner::check`].
    pub fn scan<P: Pattern + ?Sized>(&mut self, pattern: &P) -> Result<Option<Rc<str>>, ScanError> {
        let matched = self.check(pattern)?;
        if let Some(text) = &matched {
            self.advance(text);
        }
        Ok(matched)
    }

    /// Searches ahead for `pattern` without moving the cursor.
    ///
    /// Returns the text from the cursor through the end of the first match;
    /// the captures are those of the match itself.
    ///
    /// # Errors
    ///
    /// See [`Scanner::check`].
    pub fn check_until<P: Pattern + ?Sized>(
        &mut self,
        pattern: &P,
    ) -> Result<Option<Rc<str>>, ScanError> {
        let found = pattern
            .search(self.rest())
            .inspect_err(|_| self.clear_match())?;
        Ok(self.record(found, true))
    }

    /// Searches ahead for `pattern` and moves to the end of the match.
    ///
    /// # Errors
    ///
    /// See [`Scanner::check`].
    pub fn scan_until<P: Pattern + ?Sized>(
        &mut self,
        pattern: &P,
    ) -> Result<Option<Rc<str>>, ScanError> {
        let matched = self.check_until(pattern)?;
        if let Some(text) = &matched {
            self.advance(text);
        }
        Ok(matched)
    }

    /// Searches ahead for `pattern` without moving the cursor and returns
    /// how many characters lie between the cursor and the match.
    ///
    /// Unlike [`Scanner::check_until`], the recorded match text excludes the
    /// skipped characters.
    ///
    /// # Errors
    ///
    /// See [`Scanner::check`].
    pub fn exists<P: Pattern + ?Sized>(&mut self, pattern: &P) -> Result<Option<usize>, ScanError> {
        let rest = self.rest();
        let found = pattern.search(rest).inspect_err(|_| self.clear_match())?;
        let offset = found
            .as_ref()
            .and_then(|m| rest.get(..m.start))
            .map(|skipped| skipped.chars().count());
        Ok(self.record(found, false).and(offset))
    }

    /// Scans `pattern` and returns the length of the match in characters.
    ///
    /// # Errors
    ///
    /// See [`Scanner::check`].
    pub fn skip<P: Pattern + ?Sized>(&mut self, pattern: &P) -> Result<Option<usize>, ScanError> {
        self.scan(pattern)?;
        Ok(self.match_size())
    }

    /// Scans until `pattern` and returns the number of characters consumed.
    ///
    /// # Errors
    ///
    /// See [`Scanner::check`].
    pub fn skip_until<P: Pattern + ?Sized>(
        &mut self,
        pattern: &P,
    ) -> Result<Option<usize>, ScanError> {
        self.scan_until(pattern)?;
        Ok(self.match_size())
    }

    /// Checks `pattern` at the cursor and returns the length of the match
    /// in characters.
    ///
    /// # Errors
    ///
    /// See [`Scanner::check`].
    pub fn matches<P: Pattern + ?Sized>(&mut self, pattern: &P) -> Result<Option<usize>, ScanError> {
        self.check(pattern)?;
        Ok(self.match_size())
    }

    /// Consumes and returns the next character, line breaks included.
    pub fn get_char(&mut self) -> Option<Rc<str>> {
        // `AnyChar` never reports an error.
        self.scan(&AnyChar).ok().flatten()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Cursor and queries
    // ─────────────────────────────────────────────────────────────────────

    /// Up to `len` characters from the cursor, clipped at the end.
    #[must_use]
    pub fn peek(&self, len: usize) -> &str {
        let rest = self.rest();
        match rest.char_indices().nth(len) {
            Some((end, _)) => &rest[..end],
            None => rest,
        }
    }

    /// Everything from the cursor to the end.
    #[must_use]
    pub fn rest(&self) -> &str {
        &self.text[self.byte..]
    }

    /// Whether the cursor is at the end of the text.
    #[must_use]
    pub fn eos(&self) -> bool {
        self.byte == self.text.len()
    }

    /// Whether the cursor is at the start of a line.
    #[must_use]
    pub fn bol(&self) -> bool {
        self.byte == 0 || self.text[..self.byte].ends_with('\n')
    }

    /// The cursor position in characters.
    #[must_use]
    pub fn pointer(&self) -> usize {
        self.pos
    }

    /// Moves the cursor to `pos`, clamped into `0..=len`, and returns the
    /// resulting position. The match state is left alone.
    pub fn set_pointer(&mut self, pos: isize) -> usize {
        let pos = usize::try_from(pos).unwrap_or(0).min(self.char_len);
        self.byte = self
            .text
            .char_indices()
            .nth(pos)
            .map_or(self.text.len(), |(byte, _)| byte);
        self.pos = pos;
        trace!(pos = self.pos, "cursor moved");
        self.pos
    }

    /// Whether the last pattern attempt succeeded.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.last_match.borrow().is_matched()
    }

    /// The text of the last match.
    #[must_use]
    pub fn matched_text(&self) -> Option<Rc<str>> {
        self.last_match.borrow().shared_text()
    }

    /// Length in characters of the last match.
    #[must_use]
    pub fn match_size(&self) -> Option<usize> {
        self.last_match.borrow().len()
    }

    /// Capture groups of the last match.
    #[must_use]
    pub fn captures(&self) -> Vec<Option<String>> {
        self.last_match.borrow().captures().to_vec()
    }

    /// A snapshot of the current match state.
    #[must_use]
    pub fn last_match(&self) -> MatchState {
        self.last_match.borrow().clone()
    }

    /// The whole buffer.
    #[must_use]
    pub fn string(&self) -> &str {
        &self.text
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Appends `text` to the buffer. The cursor and match state are left
    /// alone.
    pub fn concat(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self.char_len += text.chars().count();
        self
    }

    /// Moves the cursor to the start and clears the match state.
    pub fn reset(&mut self) -> &mut Self {
        self.pos = 0;
        self.byte = 0;
        self.clear_match();
        self
    }

    /// Moves the cursor to the end and clears the match state.
    pub fn terminate(&mut self) -> &mut Self {
        self.pos = self.char_len;
        self.byte = self.text.len();
        self.clear_match();
        self
    }

    /// A copy of this scanner with its own match state slot, seeded with the
    /// current state.
    #[must_use]
    pub fn clone_detached(&self) -> Self {
        let mut clone = self.clone();
        clone.detach();
        clone
    }

    /// Gives this scanner its own match state slot, seeded with the current
    /// state. Scanners it was cloned from or into no longer see its matches.
    pub fn detach(&mut self) -> &mut Self {
        self.last_match = Rc::new(RefCell::new(self.last_match()));
        self
    }

    /// Whether `self` and `other` record matches into the same slot.
    #[must_use]
    pub fn shares_match_state(&self, other: &Scanner) -> bool {
        Rc::ptr_eq(&self.last_match, &other.last_match)
    }
}

impl From<String> for Scanner {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Scanner {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
