use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    UnknownMenuItem(String),
    UnknownEvent(String),
    InvalidArgument(String),
    ConfigDirNotFound,
    JsonError(Box<dyn error::Error + Send + Sync>),
    IoError(io::Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMenuItem(id) => write!(f, "Unknown menu item: {id}"),
            Self::UnknownEvent(name) => write!(f, "Unknown event: {name}"),
            Self::InvalidArgument(msg) => f.write_str(msg),
            Self::ConfigDirNotFound => write!(f, "Config directory not found"),
            Self::JsonError(err) => err.fmt(f),
            Self::IoError(err) => err.fmt(f),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(Box::new(err))
    }
}
