use thiserror::Error;

use crate::types::Consumer;

/// Errors raised by the registry and the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested member is neither an own member of the consumer nor
    /// registered.
    #[error("undefined member '{name}' for {consumer}")]
    NoSuchMember { consumer: Consumer, name: String },

    /// `Registry` is only reachable through its associated functions.
    #[error("cannot instantiate Registry")]
    Instantiation,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn no_such_member(consumer: Consumer, name: impl Into<String>) -> Self {
        Error::NoSuchMember {
            consumer,
            name: name.into(),
        }
    }
}
