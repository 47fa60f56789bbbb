//! Read-only property surface for host script bridges.
//!
//! A host bridge cannot see Rust enum variants, only named properties. This
//! module maps a [`DatabaseError`] onto exactly thirteen names: `code`,
//! `message`, and one constant per [`ErrorCode`]. Nothing else is reachable.

use std::fmt;

use crate::code::ErrorCode;
use crate::error::DatabaseError;

/// Name → code table for the constants exposed on every error object.
pub const CONSTANTS: [(&str, ErrorCode); 11] = [
    ("UNKNOWN_ERR", ErrorCode::Unknown),
    ("NON_TRANSIENT_ERR", ErrorCode::NonTransient),
    ("NOT_FOUND_ERR", ErrorCode::NotFound),
    ("CONSTRAINT_ERR", ErrorCode::Constraint),
    ("DATA_ERR", ErrorCode::Data),
    ("NOT_ALLOWED_ERR", ErrorCode::NotAllowed),
    ("SERIAL_ERR", ErrorCode::Serial),
    ("RECOVERABLE_ERR", ErrorCode::Recoverable),
    ("TRANSIENT_ERR", ErrorCode::Transient),
    ("TIMEOUT_ERR", ErrorCode::Timeout),
    ("DEADLOCK_ERR", ErrorCode::Deadlock),
];

const CODE: &str = "code";
const MESSAGE: &str = "message";

/// Looks up a named constant.
pub fn constant(name: &str) -> Option<ErrorCode> {
    CONSTANTS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

/// Value of a host-visible property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostValue {
    Int(i32),
    Str(String),
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// Which of an error's two messages the host sees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HostMessage {
    /// The text the base script error was built with. For overridden errors
    /// this is the implementation's own message.
    #[default]
    Internal,
    /// Always the full API message, including any override annotation.
    Combined,
}

impl HostMessage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::Combined => "combined",
        }
    }
}

impl std::str::FromStr for HostMessage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "internal" => Ok(Self::Internal),
            "combined" => Ok(Self::Combined),
            other => Err(format!("unknown host message policy: {other}")),
        }
    }
}

/// A [`DatabaseError`] as a host bridge sees it.
#[derive(Debug, Clone, Copy)]
pub struct HostView<'a> {
    error: &'a DatabaseError,
    policy: HostMessage,
}

impl<'a> HostView<'a> {
    pub fn new(error: &'a DatabaseError, policy: HostMessage) -> Self {
        Self { error, policy }
    }

    pub fn code(&self) -> ErrorCode {
        self.error.code()
    }

    /// The message under the view's policy.
    pub fn message(&self) -> &'a str {
        match self.policy {
            HostMessage::Internal => self.error.host_message(),
            HostMessage::Combined => self.error.message(),
        }
    }

    /// Reads a property by name. Unknown names yield `None`.
    pub fn property(&self, name: &str) -> Option<HostValue> {
        match name {
            CODE => Some(HostValue::Int(self.code().value())),
            MESSAGE => Some(HostValue::Str(self.message().to_string())),
            _ => constant(name).map(|code| HostValue::Int(code.value())),
        }
    }

    /// Every property name the bridge may read.
    pub fn property_names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(2 + CONSTANTS.len());
        names.push(CODE);
        names.push(MESSAGE);
        names.extend(CONSTANTS.iter().map(|(name, _)| *name));
        names
    }
}

impl DatabaseError {
    /// Host view under the given message policy.
    pub fn host_view(&self, policy: HostMessage) -> HostView<'_> {
        HostView::new(self, policy)
    }
}
