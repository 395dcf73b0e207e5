use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    InvalidInput(String),
    InvalidData(String),
    Io(String),
    Remote { status: u16, body: String },
}

impl AppError {
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_input<M: Into<String>>(message: M) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_data<M: Into<String>>(message: M) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    pub fn remote<B: Into<String>>(status: u16, body: B) -> Self {
        Self::Remote {
            status,
            body: body.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidData(_) => "invalid_data",
            Self::Io(_) => "io_error",
            Self::Remote { .. } => "remote_rejected",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Config(message) => message,
            Self::InvalidInput(message) => message,
            Self::InvalidData(message) => message,
            Self::Io(message) => message,
            Self::Remote { body, .. } => body,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote { status, .. } => {
                write!(f, "{} - sync request failed with status {}", self.code(), status)
            }
            _ => write!(f, "{} - {}", self.code(), self.message()),
        }
    }
}

impl std::error::Error for AppError {}
