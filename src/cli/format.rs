//! Format output dispatch helpers
//!
//! Provides a macro to eliminate repetitive format match blocks.

/// Dispatch output by format with minimal boilerplate.
///
/// # Examples
///
/// ```rust,ignore
/// output_by_format!(cli.format,
///     json => { print_json(&result)? },
///     human => { print_human(&result) },
///     records => { print_records(&result) }
/// );
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:block, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => $human,
            $crate::cli::OutputFormat::Records => $records,
        }
    };
}
