//! WFS-T transaction construction.
//!
//! A transaction is assembled in three steps:
//!
//! 1. [`FragmentBuilder`] turns each eligible feature into one `wfs:Insert`
//!    or `wfs:Update` element tree. Ineligible features yield nothing.
//! 2. [`transaction_envelope`] wraps the fragments in a `wfs:Transaction`
//!    root that declares the protocol namespaces and the workspace binding.
//! 3. [`TransactionBuilder`] drives both and serializes the result into a
//!    [`TransactionDocument`] ready to be submitted.
//!
//! Only Point features can be written. Delete is accepted as an operation
//! but produces no fragments.

mod builder;
mod envelope;
mod fragment;
mod xml;

pub use builder::{TransactionBuilder, TransactionDocument};
pub use envelope::{
    transaction_envelope, GML_NAMESPACE, OGC_NAMESPACE, TRANSACTION_VERSION, WFS_NAMESPACE,
};
pub use fragment::{FragmentBuilder, INSERT_ATTRIBUTES, POINT_SRS_NAME, UPDATE_PROPERTIES};
pub use xml::{XmlElement, XmlNode};

use std::fmt;
use std::str::FromStr;

/// Kind of edit carried by a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionOperation {
    /// Create new features
    Insert,
    /// Change attributes of existing features
    Update,
    /// Remove features (no fragments are produced)
    Delete,
}

impl fmt::Display for TransactionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionOperation::Insert => write!(f, "insert"),
            TransactionOperation::Update => write!(f, "update"),
            TransactionOperation::Delete => write!(f, "delete"),
        }
    }
}

impl FromStr for TransactionOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "insert" | "add" | "addfeature" => Ok(TransactionOperation::Insert),
            "update" => Ok(TransactionOperation::Update),
            "delete" => Ok(TransactionOperation::Delete),
            _ => Err(format!(
                "Unknown operation '{}'. Must be one of: insert, update, delete",
                s
            )),
        }
    }
}

/// How a feature property that is absent (or JSON `null`) is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingPropertyPolicy {
    /// Leave the element out entirely
    #[default]
    Omit,
    /// Write the element with empty text
    Empty,
    /// Write the literal text `undefined`
    Undefined,
}

impl MissingPropertyPolicy {
    /// Literal written for absent properties under [`MissingPropertyPolicy::Undefined`].
    pub const UNDEFINED_LITERAL: &'static str = "undefined";

    /// Renders a property value as element text.
    ///
    /// Returns `None` when the element should not be written at all.
    /// Strings are used verbatim; other scalars use their JSON rendering.
    pub fn render(self, value: Option<&serde_json::Value>) -> Option<String> {
        match value {
            None | Some(serde_json::Value::Null) => match self {
                MissingPropertyPolicy::Omit => None,
                MissingPropertyPolicy::Empty => Some(String::new()),
                MissingPropertyPolicy::Undefined => Some(Self::UNDEFINED_LITERAL.to_string()),
            },
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

impl fmt::Display for MissingPropertyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingPropertyPolicy::Omit => write!(f, "omit"),
            MissingPropertyPolicy::Empty => write!(f, "empty"),
            MissingPropertyPolicy::Undefined => write!(f, "undefined"),
        }
    }
}

impl FromStr for MissingPropertyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "omit" => Ok(MissingPropertyPolicy::Omit),
            "empty" => Ok(MissingPropertyPolicy::Empty),
            "undefined" => Ok(MissingPropertyPolicy::Undefined),
            _ => Err(format!(
                "Unknown missing property policy '{}'. Must be one of: omit, empty, undefined",
                s
            )),
        }
    }
}
