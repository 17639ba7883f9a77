//! Macros for command timing and logging

/// Trace a command phase with its elapsed time
///
/// Usage:
/// ```ignore
/// trace_command_always!(start, "load_graph");
/// ```
macro_rules! trace_command_always {
    ($start:expr, $label:expr) => {
        ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
    };
}

pub(crate) use trace_command_always;
