//! Outcome of the most recent pattern attempt.
//!
//! A `MatchState` is an immutable value. Scanner operations never edit one in
//! place: every check- or scan-family call builds a fresh state and assigns it
//! over the old one, whether the attempt succeeded or not.

use alloc::{
    rc::Rc,
    string::{String, ToString},
    vec::Vec,
};

/// The matched text and capture groups of the last pattern attempt.
///
/// `text` is unset exactly when the last attempt failed, when no attempt has
/// been made, or after the owning scanner was reset or terminated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    text: Option<Rc<str>>,
    captures: Vec<Option<String>>,
}

impl MatchState {
    /// A state describing no match.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            text: None,
            captures: Vec::new(),
        }
    }

    /// A state describing a successful match of `text` with the given
    /// capture groups (group 0 excluded).
    #[must_use]
    pub fn matched(text: &str, captures: &[Option<&str>]) -> Self {
        Self {
            text: Some(Rc::from(text)),
            captures: captures
                .iter()
                .map(|group| group.map(ToString::to_string))
                .collect(),
        }
    }

    /// Discards this state and returns a cleared one.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::unset()
    }

    /// The matched text, if the last attempt succeeded.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Shared handle to the matched text.
    pub(crate) fn shared_text(&self) -> Option<Rc<str>> {
        self.text.clone()
    }

    /// Capture groups of the last match; empty when unset or when the pattern
    /// has no groups.
    #[must_use]
    pub fn captures(&self) -> &[Option<String>] {
        &self.captures
    }

    /// Whether the last attempt succeeded.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.text.is_some()
    }

    /// Length of the matched text in characters.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        self.text.as_deref().map(|text| text.chars().count())
    }
}
