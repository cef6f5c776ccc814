//! Process exit codes.

use slot_graph::GraphError;

/// Exit codes returned by every command handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    /// Command completed.
    Success = 0,
    /// Bad input, unreadable file or rejected graph.
    Error = 1,
    /// The graph loaded but the goal is unreachable.
    NoPath = 2,
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

/// Exit code for a failed command.
///
/// Every [`GraphError`] is a hard failure; an unreachable goal is reported
/// through [`CliExitCode::NoPath`] by the handlers, not as an error.
pub fn exit_code_for_error(err: &GraphError) -> i32 {
    tracing::error!("{}", err);
    CliExitCode::Error.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(CliExitCode::Success as i32, 0, "Success must be 0");
        assert_eq!(CliExitCode::Error as i32, 1, "Error must be 1");
        assert_eq!(CliExitCode::NoPath as i32, 2, "NoPath must be 2");
    }

    #[test]
    fn test_graph_errors_map_to_error() {
        let errors = [
            GraphError::NodeNotFound("Z".to_string()),
            GraphError::EmptySlot(3),
            GraphError::InvalidConfig("bad".to_string()),
        ];
        for err in &errors {
            assert_eq!(exit_code_for_error(err), 1, "{} should exit with 1", err);
        }
    }
}
