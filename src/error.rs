use std::fmt;

/** errors raised while loading an instance.

Infeasibility is *not* an error: an instance with no valid coloring is a
normal solver outcome (`None`), these variants all abort before solving. */
#[derive(Debug)]
pub enum InstanceError {
    /// malformed edge line (non-integer token, wrong arity)
    Parse {
        /// 1-based line number of the offending line
        line_no: usize,
        /// the offending line
        line: String,
    },
    /// missing, duplicate or non-positive `colors=K` directive
    Config(String),
    /// instance file unreadable
    Io(std::io::Error),
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceError::Parse { line_no, line } =>
                write!(f, "parse error line {}: '{}'", line_no, line),
            InstanceError::Config(msg) =>
                write!(f, "configuration error: {}", msg),
            InstanceError::Io(e) =>
                write!(f, "unable to read the instance: {}", e),
        }
    }
}

impl std::error::Error for InstanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InstanceError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InstanceError {
    fn from(e: std::io::Error) -> Self { InstanceError::Io(e) }
}
