use thiserror::Error;

/// Errors surfaced by traversal operations.
///
/// Disconnected graphs, self-loops, parallel edges and isolated start
/// vertices are normal inputs and never produce an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BfsError {
    /// A vertex argument is not part of the graph, or the graph reported a
    /// neighbor outside its own vertex set.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl BfsError {
    pub(crate) fn not_in_graph<V: std::fmt::Debug>(role: &str, vertex: &V) -> Self {
        BfsError::InvalidArgument(format!("{role} vertex {vertex:?} is not in the graph"))
    }
}

pub type Result<T> = std::result::Result<T, BfsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_in_graph_message() {
        let err = BfsError::not_in_graph("start", &42u64);
        assert_eq!(
            err.to_string(),
            "invalid argument: start vertex 42 is not in the graph"
        );
    }
}
