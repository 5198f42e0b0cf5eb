#![no_main]
use std::sync::LazyLock;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use regex::Regex;
use strscan::{Literal, Scanner};

// A fixed pattern table keeps the fuzzer on scanner logic rather than on
// regex compilation.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\w+", r"\d*", r"\s+", r"[a-c]", r"(a)(b)?", r"", r".", r"\p{L}+", r"x|y|z", r"\n",
        r"$", r"^",
    ]
    .iter()
    .map(|src| Regex::new(src).unwrap())
    .collect()
});

#[derive(Debug, Arbitrary)]
enum Op<'a> {
    Check(u8),
    Scan(u8),
    CheckUntil(u8),
    ScanUntil(u8),
    Exists(u8),
    Skip(u8),
    SkipUntil(u8),
    Matches(u8),
    ScanLiteral(&'a str),
    GetChar,
    Peek(u8),
    SetPointer(isize),
    Concat(&'a str),
    Reset,
    Terminate,
    CloneShared,
    CloneDetached,
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a str,
    ops: Vec<Op<'a>>,
}

fn pattern(which: u8) -> &'static Regex {
    &PATTERNS[usize::from(which) % PATTERNS.len()]
}

fuzz_target!(|input: Input<'_>| {
    let mut s = Scanner::new(input.text);
    let mut text = input.text.to_string();
    // Scanners cloned along the way; every one must keep its own invariants.
    let mut others: Vec<Scanner> = Vec::new();

    for op in input.ops {
        let before = s.pointer();
        match op {
            Op::Check(p) => {
                let r = s.check(pattern(p)).unwrap();
                assert_eq!(r, s.matched_text());
                assert_eq!(s.pointer(), before);
            }
            Op::Scan(p) => {
                let r = s.scan(pattern(p)).unwrap();
                assert_eq!(r, s.matched_text());
                assert_eq!(s.pointer(), before + r.map_or(0, |m| m.chars().count()));
            }
            Op::CheckUntil(p) => {
                let r = s.check_until(pattern(p)).unwrap();
                assert_eq!(r, s.matched_text());
                assert_eq!(s.pointer(), before);
                if let Some(m) = r {
                    assert!(s.rest().starts_with(&*m));
                }
            }
            Op::ScanUntil(p) => {
                let rest = s.rest().to_string();
                let r = s.scan_until(pattern(p)).unwrap();
                assert_eq!(r, s.matched_text());
                if let Some(m) = r {
                    assert!(rest.starts_with(&*m));
                    assert_eq!(s.pointer(), before + m.chars().count());
                } else {
                    assert_eq!(s.pointer(), before);
                }
            }
            Op::Exists(p) => {
                let r = s.exists(pattern(p)).unwrap();
                assert_eq!(r.is_some(), s.matched());
                assert_eq!(s.pointer(), before);
            }
            Op::Skip(p) => {
                let r = s.skip(pattern(p)).unwrap();
                assert_eq!(s.pointer(), before + r.unwrap_or(0));
            }
            Op::SkipUntil(p) => {
                let r = s.skip_until(pattern(p)).unwrap();
                assert_eq!(s.pointer(), before + r.unwrap_or(0));
            }
            Op::Matches(p) => {
                let r = s.matches(pattern(p)).unwrap();
                assert_eq!(r, s.match_size());
                assert_eq!(s.pointer(), before);
            }
            Op::ScanLiteral(lit) => {
                let expected = s.rest().starts_with(lit);
                let r = s.scan(&Literal(lit)).unwrap();
                assert_eq!(r.is_some(), expected);
            }
            Op::GetChar => {
                let eos = s.eos();
                assert_eq!(s.get_char().is_none(), eos);
            }
            Op::Peek(n) => {
                let peeked = s.peek(usize::from(n));
                assert!(s.rest().starts_with(peeked));
                assert!(peeked.chars().count() <= usize::from(n));
            }
            Op::SetPointer(pos) => {
                let state = s.last_match();
                let len = text.chars().count();
                let expected = usize::try_from(pos).map_or(0, |p| p.min(len));
                assert_eq!(s.set_pointer(pos), expected);
                assert_eq!(s.last_match(), state);
            }
            Op::Concat(extra) => {
                s.concat(extra);
                text.push_str(extra);
                assert_eq!(s.string(), text);
                assert_eq!(s.pointer(), before);
            }
            Op::Reset => {
                s.reset();
                assert_eq!(s.pointer(), 0);
                assert!(!s.matched());
            }
            Op::Terminate => {
                s.terminate();
                assert!(s.eos());
                assert!(!s.matched());
            }
            Op::CloneShared => {
                let clone = s.clone();
                assert!(clone.shares_match_state(&s));
                others.push(clone);
            }
            Op::CloneDetached => {
                let clone = s.clone_detached();
                assert!(!clone.shares_match_state(&s));
                assert_eq!(clone.last_match(), s.last_match());
                others.push(clone);
            }
        }
        assert!(s.pointer() <= text.chars().count());
        assert_eq!(s.eos(), s.pointer() == text.chars().count());
        assert_eq!(s.matched(), s.match_size().is_some());
    }

    for other in &others {
        assert!(other.pointer() <= other.string().chars().count());
        if other.shares_match_state(&s) {
            assert_eq!(other.last_match(), s.last_match());
        }
    }
});
