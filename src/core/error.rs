pub type Result<T> = std::result::Result<T, FakeInputError>;

#[derive(Debug)]
pub enum FakeInputError {
    /// A method name the plugin does not know.
    UnknownMethod(String),
    InvalidOption { name: String, message: String },
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for FakeInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FakeInputError::UnknownMethod(name) => write!(f, "Unknown method: {}", name),
            FakeInputError::InvalidOption { name, message } => {
                write!(f, "Invalid option {}: {}", name, message)
            }
            FakeInputError::Io(e) => write!(f, "Options file unreadable: {}", e),
            FakeInputError::Parse(e) => write!(f, "Options file malformed: {}", e),
        }
    }
}

impl std::error::Error for FakeInputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FakeInputError::Io(e) => Some(e),
            FakeInputError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FakeInputError {
    fn from(e: std::io::Error) -> Self {
        FakeInputError::Io(e)
    }
}

impl From<serde_json::Error> for FakeInputError {
    fn from(e: serde_json::Error) -> Self {
        FakeInputError::Parse(e)
    }
}
