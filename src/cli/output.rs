pub use netlab_core::format::OutputFormat;

/// Parse `--format`; clap's value enums cannot be derived for the library type
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
