//! Opt-in parser tracing.
//!
//! With the `trace` feature the `trace!` macro forwards to `tracing::trace!`;
//! without it the macro expands to nothing and its arguments are not
//! evaluated.

#[cfg(feature = "trace")]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: "ferroblock", $($arg)*)
    };
}

#[cfg(not(feature = "trace"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

pub(crate) use trace;
