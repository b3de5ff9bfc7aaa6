use serde_json::Error as JsonError;
use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    io::Error as IoError,
};

#[derive(Debug)]
pub enum BTAError {
    Io(IoError),
    Json(JsonError),
    AnyHow(anyhow::Error),
    Common(String),
}

impl Error for BTAError {}

impl Display for BTAError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "BTAError: ")?;
        match self {
            Self::Io(e) => Display::fmt(e, f),
            Self::Json(e) => Display::fmt(e, f),
            Self::AnyHow(e) => Display::fmt(e, f),
            Self::Common(e) => Display::fmt(e, f),
        }
    }
}

impl From<IoError> for BTAError {
    fn from(value: IoError) -> Self {
        Self::Io(value)
    }
}

impl From<JsonError> for BTAError {
    fn from(value: JsonError) -> Self {
        Self::Json(value)
    }
}

impl From<anyhow::Error> for BTAError {
    fn from(value: anyhow::Error) -> Self {
        Self::AnyHow(value)
    }
}

impl From<String> for BTAError {
    fn from(value: String) -> Self {
        Self::Common(value)
    }
}

impl From<&str> for BTAError {
    fn from(value: &str) -> Self {
        Self::Common(value.into())
    }
}
