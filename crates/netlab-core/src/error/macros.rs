//! Error macros for netlab

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::NetlabError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::NetlabError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a node identity that is not in the graph
#[macro_export]
macro_rules! bail_unknown_node {
    ($id:expr) => {
        return Err($crate::error::NetlabError::unknown_node($id))
    };
}
