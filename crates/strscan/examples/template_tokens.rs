//! Renders a tiny template language with a hand-written recursive parser on
//! top of [`strscan::Scanner`].
//!
//! The grammar is deliberately small:
//!
//! ```text
//! template := (text | "{{" expr "}}")*
//! expr     := term (("+" | "-") term)*
//! term     := number | name | "(" expr ")"
//! ```
//!
//! Names are looked up in a fixed environment. The parser uses every kind of
//! scanner primitive:
//!
//! 1. `exists` to find where literal text ends without consuming it;
//! 2. `scan`/`skip` to consume tokens at the cursor;
//! 3. `check` for one-token lookahead before committing to a branch;
//! 4. `pointer`/`set_pointer` to report and rewind positions.
//!
//! Run with `cargo run --example template_tokens`.

use std::{collections::HashMap, fmt, process::ExitCode};

use strscan::{RegexPattern, ScanError, Scanner};

#[derive(Debug)]
enum RenderError {
    Scan(ScanError),
    Syntax { at: usize, expected: &'static str },
    Unknown { at: usize, name: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Scan(err) => err.fmt(f),
            RenderError::Syntax { at, expected } => write!(f, "expected {expected} at {at}"),
            RenderError::Unknown { at, name } => write!(f, "unknown name `{name}` at {at}"),
        }
    }
}

impl From<ScanError> for RenderError {
    fn from(err: ScanError) -> Self {
        RenderError::Scan(err)
    }
}

struct Renderer<'env> {
    env: &'env HashMap<&'static str, i64>,
    open: RegexPattern,
    close: RegexPattern,
    space: RegexPattern,
    number: RegexPattern,
    name: RegexPattern,
    op: RegexPattern,
}

impl<'env> Renderer<'env> {
    fn new(env: &'env HashMap<&'static str, i64>) -> Result<Self, ScanError> {
        Ok(Self {
            env,
            open: RegexPattern::new(r"\{\{")?,
            close: RegexPattern::new(r"\}\}")?,
            space: RegexPattern::new(r"\s+")?,
            number: RegexPattern::new(r"-?\d+")?,
            name: RegexPattern::new(r"[a-z_]+")?,
            op: RegexPattern::new(r"[+-]")?,
        })
    }

    fn render(&self, template: &str) -> Result<String, RenderError> {
        let mut s = Scanner::new(template);
        let mut out = String::new();
        while !s.eos() {
            if s.scan(&self.open)?.is_some() {
                let value = self.expr(&mut s)?;
                self.ws(&mut s)?;
                if s.scan(&self.close)?.is_none() {
                    return Err(syntax(&s, "`}}`"));
                }
                out.push_str(&value.to_string());
            } else if let Some(k) = s.exists(&self.open)? {
                out.push_str(s.peek(k));
                let to = s.pointer() + k;
                s.set_pointer(isize::try_from(to).unwrap_or(isize::MAX));
            } else {
                out.push_str(s.rest());
                s.terminate();
            }
        }
        Ok(out)
    }

    fn ws(&self, s: &mut Scanner) -> Result<(), ScanError> {
        s.skip(&self.space).map(|_| ())
    }

    fn expr(&self, s: &mut Scanner) -> Result<i64, RenderError> {
        let mut acc = self.term(s)?;
        loop {
            self.ws(s)?;
            // Peek at the operator first so a failed term reports its own
            // position rather than the operator's.
            if s.check(&self.op)?.is_none() {
                return Ok(acc);
            }
            let op = s.scan(&self.op)?;
            let rhs = self.term(s)?;
            match op.as_deref() {
                Some("+") => acc += rhs,
                _ => acc -= rhs,
            }
        }
    }

    fn term(&self, s: &mut Scanner) -> Result<i64, RenderError> {
        self.ws(s)?;
        let at = s.pointer();
        if let Some(digits) = s.scan(&self.number)? {
            return digits
                .parse()
                .map_err(|_| RenderError::Syntax { at, expected: "a number that fits in i64" });
        }
        if let Some(name) = s.scan(&self.name)? {
            return self.env.get(&*name).copied().ok_or(RenderError::Unknown {
                at,
                name: name.to_string(),
            });
        }
        if s.scan(&'(')?.is_some() {
            let value = self.expr(s)?;
            self.ws(s)?;
            if s.scan(&')')?.is_none() {
                return Err(syntax(s, "`)`"));
            }
            return Ok(value);
        }
        Err(syntax(s, "a number, a name or `(`"))
    }
}

fn syntax(s: &Scanner, expected: &'static str) -> RenderError {
    RenderError::Syntax {
        at: s.pointer(),
        expected,
    }
}

fn main() -> ExitCode {
    let env = HashMap::from([("apples", 3), ("pears", 4), ("eaten", 2)]);
    let renderer = match Renderer::new(&env) {
        Ok(renderer) => renderer,
        Err(err) => {
            eprintln!("bad pattern: {err}");
            return ExitCode::FAILURE;
        }
    };

    let templates = [
        "You have {{ apples + pears }} pieces of fruit.",
        "After lunch: {{ (apples + pears) - eaten }} left.",
        "Broken: {{ apples + }}",
        "Unknown: {{ plums }}",
    ];

    for template in templates {
        match renderer.render(template) {
            Ok(text) => println!("{text}"),
            Err(err) => println!("{template:?}: {err}"),
        }
    }
    ExitCode::SUCCESS
}
