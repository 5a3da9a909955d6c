// Conditional tracing support
//
// With the `tracing` feature disabled these expand to nothing and the
// compiler eliminates them.

/// Emit a tracing event at the given level.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}

/// Enter a debug-level span for the rest of the enclosing block.
macro_rules! trace_run {
    ($name:expr, $($field:tt)*) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!($name, $($field)*).entered();
    };
}
