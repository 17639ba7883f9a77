//! Error types and exit codes for netlab
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown node, invalid graph file, etc.)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the netlab binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, invalid graph (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during netlab operations
#[derive(Error, Debug)]
pub enum NetlabError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    #[error("node already exists: {id}")]
    DuplicateNode { id: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("graph file not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),

    #[error("interrupted before the routing tables stabilised")]
    Interrupted,
}

impl NetlabError {
    /// Create an error for a node identity that is not part of the graph
    pub fn unknown_node(id: impl std::fmt::Display) -> Self {
        NetlabError::UnknownNode { id: id.to_string() }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NetlabError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        NetlabError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        NetlabError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a graph that cannot be interpreted
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        NetlabError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NetlabError::UnknownFormat(_)
            | NetlabError::UsageError(_)
            | NetlabError::InvalidValue { .. }
            | NetlabError::Unsupported { .. } => ExitCode::Usage,

            NetlabError::UnknownNode { .. }
            | NetlabError::DuplicateNode { .. }
            | NetlabError::InvalidGraph { .. }
            | NetlabError::GraphNotFound { .. }
            | NetlabError::NotFound { .. } => ExitCode::Data,

            NetlabError::Io(_)
            | NetlabError::Yaml(_)
            | NetlabError::Json(_)
            | NetlabError::Toml(_)
            | NetlabError::Other(_)
            | NetlabError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            NetlabError::UnknownFormat(_) => "unknown_format",
            NetlabError::UsageError(_) => "usage_error",
            NetlabError::InvalidValue { .. } => "invalid_value",
            NetlabError::Unsupported { .. } => "unsupported",
            NetlabError::UnknownNode { .. } => "unknown_node",
            NetlabError::DuplicateNode { .. } => "duplicate_node",
            NetlabError::InvalidGraph { .. } => "invalid_graph",
            NetlabError::GraphNotFound { .. } => "graph_not_found",
            NetlabError::NotFound { .. } => "not_found",
            NetlabError::Io(_) => "io_error",
            NetlabError::Yaml(_) => "yaml_error",
            NetlabError::Json(_) => "json_error",
            NetlabError::Toml(_) => "toml_error",
            NetlabError::Other(_) => "other",
            NetlabError::Interrupted => "interrupted",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for netlab operations
pub type Result<T> = std::result::Result<T, NetlabError>;
