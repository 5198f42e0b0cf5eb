//! Trace events for scanner state changes.
//!
//! With the `tracing` feature on, `trace!` forwards to [`tracing::trace!`];
//! otherwise it expands to nothing and its arguments are not evaluated.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

pub(crate) use trace;
