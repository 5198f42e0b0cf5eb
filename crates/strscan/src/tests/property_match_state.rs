//! Properties of the check/scan state machine.

use alloc::{string::String, vec::Vec};

use quickcheck::{QuickCheck, Testable};

use crate::{Literal, Scanner};

#[cfg(feature = "regex")]
const SOURCES: &[&str] = &[
    r"\w+",
    r"\d*",
    r"\s+",
    r"[a-c]",
    r"(a)(b)?",
    r"",
    r".",
    r"\p{L}+",
    r"x|y|z",
];

fn run<T: Testable>(prop: T) {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new().tests(tests).quickcheck(prop);
}

/// Places the cursor somewhere inside `text` derived from `at`.
fn scanner_at(text: &str, at: usize) -> Scanner {
    let mut s = Scanner::new(text);
    let len = text.chars().count();
    s.set_pointer(isize::try_from(at % (len + 1)).unwrap_or(0));
    s
}

/// A failed check clears the match state and leaves the cursor.
#[test]
fn failed_check_clears_state() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, at: usize, needle: String) -> bool {
        let mut s = scanner_at(&text, at);
        s.scan(&Literal("")).unwrap();
        let before = s.pointer();
        match s.check(&Literal(&needle)).unwrap() {
            Some(m) => s.matched() && *m == *needle && s.pointer() == before,
            None => !s.matched() && s.captures().is_empty() && s.pointer() == before,
        }
    }
    run(prop as fn(String, usize, String) -> bool);
}

/// A successful scan advances by exactly the match length and records it.
#[test]
fn scan_advances_by_match_length() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, at: usize, take: usize) -> bool {
        let mut s = scanner_at(&text, at);
        let before = s.pointer();
        let needle: String = s.rest().chars().take(take % 4).collect();
        let Some(m) = s.scan(&Literal(&needle)).unwrap() else {
            return false;
        };
        s.pointer() == before + m.chars().count()
            && s.matched_text().as_deref() == Some(&*m)
            && s.match_size() == Some(m.chars().count())
    }
    run(prop as fn(String, usize, usize) -> bool);
}

/// `scan_until` consumes exactly what it returns, ending on the match.
#[test]
fn scan_until_consumes_returned_text() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, at: usize, ch: char) -> bool {
        let mut s = scanner_at(&text, at);
        let rest: String = s.rest().into();
        let before = s.pointer();
        match s.scan_until(&ch).unwrap() {
            Some(m) => {
                rest.starts_with(&*m)
                    && m.ends_with(ch)
                    && !m[..m.len() - ch.len_utf8()].contains(ch)
                    && s.pointer() == before + m.chars().count()
            }
            None => !rest.contains(ch) && s.pointer() == before && !s.matched(),
        }
    }
    run(prop as fn(String, usize, char) -> bool);
}

/// `exists` agrees with `check_until` on where the match is.
#[test]
fn exists_agrees_with_check_until() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, at: usize, ch: char) -> bool {
        let mut buf = [0u8; 4];
        let needle: &str = ch.encode_utf8(&mut buf);
        let mut s = scanner_at(&text, at);
        let offset = s.exists(&ch).unwrap();
        let exists_text = s.matched_text();
        let until = s.check_until(&ch).unwrap();
        match (offset, until) {
            (Some(k), Some(u)) => {
                exists_text.as_deref() == Some(needle) && u.chars().count() == k + 1
            }
            (None, None) => true,
            _ => false,
        }
    }
    run(prop as fn(String, usize, char) -> bool);
}

/// Checking twice in a row records the same state and never moves.
#[cfg(feature = "regex")]
#[test]
fn check_is_idempotent() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, at: usize, which: u8) -> bool {
        let source = SOURCES[usize::from(which) % SOURCES.len()];
        let mut s = scanner_at(&text, at);
        let before = s.pointer();
        let first = s.check(source).unwrap();
        let first_state = s.last_match();
        let second = s.check(source).unwrap();
        first == second && first_state == s.last_match() && s.pointer() == before
    }
    run(prop as fn(String, usize, u8) -> bool);
}

/// Every regex operation keeps `matched()` in step with its return value.
#[cfg(feature = "regex")]
#[test]
fn regex_results_match_recorded_state() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String, at: usize, ops: Vec<(u8, u8)>) -> bool {
        let mut s = scanner_at(&text, at);
        for (op, which) in ops {
            let source = SOURCES[usize::from(which) % SOURCES.len()];
            let before = s.pointer();
            let ok = match op % 6 {
                0 => {
                    let r = s.check(source).unwrap();
                    r.is_some() == s.matched() && s.pointer() == before
                }
                1 => {
                    let r = s.scan(source).unwrap();
                    r.is_some() == s.matched()
                        && s.pointer() == before + r.map_or(0, |m| m.chars().count())
                }
                2 => {
                    let r = s.check_until(source).unwrap();
                    r == s.matched_text() && s.pointer() == before
                }
                3 => {
                    let r = s.scan_until(source).unwrap();
                    r == s.matched_text()
                        && s.pointer() == before + r.map_or(0, |m| m.chars().count())
                }
                4 => {
                    let r = s.exists(source).unwrap();
                    r.is_some() == s.matched() && s.pointer() == before
                }
                _ => {
                    let r = s.skip_until(source).unwrap();
                    r == s.match_size() && s.pointer() == before + r.unwrap_or(0)
                }
            };
            if !ok || s.pointer() > text.chars().count() {
                return false;
            }
        }
        true
    }
    run(prop as fn(String, usize, Vec<(u8, u8)>) -> bool);
}
