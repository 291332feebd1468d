//! Fallback resolution of consumer members against the global registry.
//!
//! Rust cannot intercept an access to a member that does not exist, so the
//! fallback is an explicit call. Consumers attach the capability by
//! implementing [`InstanceResolver`] (lookups on values), [`TypeResolver`]
//! (lookups on the type itself), or both. Each mode checks its own member set
//! first and reaches the registry only on a miss:
//!
//! ```text
//! service.member("logger")
//!      ↓
//! 1. own_member("logger")  → defined? return it
//! 2. Registry::get("logger") → registered? return it
//! 3. Error::NoSuchMember
//! ```
//!
//! Nothing is cached on the consumer. A later `set` or `clear` is visible on
//! the very next lookup.
//!
//! ## Example
//!
//! ```
//! use injector::{own_members, downcast, InstanceResolver, Registry, Value};
//!
//! struct Service {
//!     title: String,
//! }
//!
//! impl InstanceResolver for Service {
//!     fn own_member(&self, name: &str) -> Option<Value> {
//!         own_members!(name; title => self.title.clone())
//!     }
//! }
//!
//! Registry::register("logger", "stdout");
//! let service = Service { title: "billing".to_string() };
//!
//! let logger = downcast::<&str>(service.member("logger").unwrap()).unwrap();
//! assert_eq!(*logger, "stdout");
//! assert!(service.member("missing").is_err());
//! ```

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::types::{Consumer, Value};

/// Resolve `name` for `consumer` from the registry.
///
/// Call this only after the consumer's own members missed. Performs one
/// registry read; the lock is released before any error is built.
pub fn resolve(consumer: &Consumer, name: &str) -> Result<Value> {
    match Registry::get(name) {
        Some(found) => {
            trace!(consumer = %consumer, name, "resolved member from registry");
            Ok(found)
        }
        None => {
            debug!(consumer = %consumer, name, "no registry entry for undefined member");
            Err(Error::no_such_member(consumer.clone(), name))
        }
    }
}

/// Registry fallback for members accessed on consumer instances.
pub trait InstanceResolver {
    /// The instance's own member called `name`, if it defines one.
    ///
    /// Own members always shadow registry entries with the same name.
    fn own_member(&self, _name: &str) -> Option<Value> {
        None
    }

    /// Identity reported in [`Error::NoSuchMember`].
    fn consumer(&self) -> Consumer {
        Consumer::instance(self)
    }

    /// Look up `name`: own members first, then the registry.
    fn member(&self, name: &str) -> Result<Value> {
        match self.own_member(name) {
            Some(own) => Ok(own),
            None => resolve(&self.consumer(), name),
        }
    }

    /// Would [`member`](Self::member) succeed for `name` right now?
    fn responds_to(&self, name: &str) -> bool {
        self.own_member(name).is_some() || Registry::has(name)
    }
}

/// Registry fallback for members accessed on the consumer type itself.
///
/// Independent of [`InstanceResolver`]: a name defined only on instances is
/// not an own member here, and vice versa.
pub trait TypeResolver {
    /// The type's own member called `name`, if it defines one.
    fn own_type_member(_name: &str) -> Option<Value> {
        None
    }

    /// Look up `name` on the type: own type members first, then the registry.
    fn type_member(name: &str) -> Result<Value> {
        match Self::own_type_member(name) {
            Some(own) => Ok(own),
            None => resolve(&Consumer::of_type::<Self>(), name),
        }
    }

    fn type_responds_to(name: &str) -> bool {
        Self::own_type_member(name).is_some() || Registry::has(name)
    }
}

/// Build an own-member table for [`InstanceResolver::own_member`] or
/// [`TypeResolver::own_type_member`].
///
/// Each arm maps a member name to the expression producing it; only the
/// matched arm is evaluated.
///
/// ```
/// use injector::{own_members, Value};
///
/// fn lookup(name: &str) -> Option<Value> {
///     own_members!(name; version => 3u32, label => "primary")
/// }
///
/// assert!(lookup("version").is_some());
/// assert!(lookup("other").is_none());
/// ```
#[macro_export]
macro_rules! own_members {
    ($name:expr; $($member:ident => $value:expr),* $(,)?) => {
        match $name {
            $(stringify!($member) => ::std::option::Option::Some($crate::value($value)),)*
            _ => ::std::option::Option::None,
        }
    };
}
