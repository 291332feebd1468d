//! # injector - process-wide dependency injection
//!
//! A tiny injection utility built from two pieces:
//! - a global [`Registry`] mapping names to shared values
//! - a resolver capability that lets consumer types fall back to that registry
//!   for members they do not define themselves
//!
//! ## Quick Start
//!
//! ```
//! use injector::{downcast, InstanceResolver, Registry};
//!
//! struct Handler;
//!
//! impl InstanceResolver for Handler {}
//!
//! Registry::register("greeting", String::from("hello"));
//!
//! let handler = Handler;
//! let greeting = downcast::<String>(handler.member("greeting").unwrap()).unwrap();
//! assert_eq!(greeting.as_str(), "hello");
//! ```
//!
//! ## Resolution Order
//!
//! ```text
//! Member Lookup Order:
//! 1. Own members of the consumer (instance or type, per mode)
//! 2. Global registry            ← injected values live here
//! 3. Error::NoSuchMember
//! ```
//!
//! A consumer can attach the capability to its instances
//! ([`InstanceResolver`]), to the type itself ([`TypeResolver`]), or both.
//! The two modes keep separate own-member sets and share the one registry.
//!
//! ## Architecture
//!
//! - **[`registry`]** - the global store and its lock
//! - **[`resolver`]** - fallback dispatch and the `own_members!` helper
//! - **[`types`]** - shared value handles and consumer identity
//! - **[`error`]** - error type

#[macro_use]
extern crate lazy_static;

pub mod error;
pub mod registry;
pub mod resolver;
pub mod types;

pub use error::{Error, Result};
pub use registry::Registry;
pub use resolver::{resolve, InstanceResolver, TypeResolver};
pub use types::{downcast, value, Consumer, Value};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
