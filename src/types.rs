//! Core types shared by the registry and the resolver.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A registered value.
///
/// The registry stores handles, not copies: every `get` hands out a clone of
/// the same `Arc`, so all consumers observe one underlying value.
pub type Value = Arc<dyn Any + Send + Sync>;

/// Wrap a concrete value into a shareable [`Value`].
pub fn value<T: Any + Send + Sync>(v: T) -> Value {
    Arc::new(v)
}

/// Recover the concrete type behind a [`Value`].
///
/// Returns `None` if the value holds some other type.
pub fn downcast<T: Any + Send + Sync>(value: Value) -> Option<Arc<T>> {
    value.downcast::<T>().ok()
}

/// Identity of whoever asked for a member, used in error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Consumer {
    /// A consumer instance, identified by type and address.
    ///
    /// Zero-sized values have no meaningful address, so `address` is `None`
    /// for them and all their instances share one identity.
    Instance {
        type_name: &'static str,
        address: Option<usize>,
    },
    /// A consumer type acting as a namespace of its own.
    Type { type_name: &'static str },
}

impl Consumer {
    /// Identify a consumer instance.
    pub fn instance<T: ?Sized>(consumer: &T) -> Self {
        let address = if std::mem::size_of_val(consumer) == 0 {
            None
        } else {
            Some(consumer as *const T as *const () as usize)
        };
        Consumer::Instance {
            type_name: short_type_name(std::any::type_name::<T>()),
            address,
        }
    }

    /// Identify a consumer type.
    pub fn of_type<T: ?Sized>() -> Self {
        Consumer::Type {
            type_name: short_type_name(std::any::type_name::<T>()),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Consumer::Instance { type_name, .. } => type_name,
            Consumer::Type { type_name } => type_name,
        }
    }
}

impl fmt::Display for Consumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Consumer::Instance {
                type_name,
                address: Some(address),
            } => write!(f, "#<{}:{:#x}>", type_name, address),
            Consumer::Instance {
                type_name,
                address: None,
            } => write!(f, "#<{}>", type_name),
            Consumer::Type { type_name } => write!(f, "{}", type_name),
        }
    }
}

/// Strip the module path off a type name, leaving generic arguments alone.
///
/// Names that do not start with a path (tuples, references, slices, trait
/// objects) are returned unchanged.
fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    let is_path =
        base.starts_with(|c: char| c.is_alphabetic() || c == '_') && !base.contains(' ');
    if !is_path {
        return full;
    }
    let start = base.rfind("::").map_or(0, |i| i + 2);
    &full[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    struct Gadget {
        _id: u32,
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("Widget"), "Widget");
        assert_eq!(short_type_name("a::b::Widget"), "Widget");
        assert_eq!(
            short_type_name("a::Holder<alloc::string::String>"),
            "Holder<alloc::string::String>"
        );
    }

    #[test]
    fn test_short_type_name_leaves_non_paths_alone() {
        assert_eq!(short_type_name("(a::A, b::B)"), "(a::A, b::B)");
        assert_eq!(short_type_name("&a::Foo"), "&a::Foo");
        assert_eq!(short_type_name("[a::Foo]"), "[a::Foo]");
        assert_eq!(short_type_name("dyn a::Trait"), "dyn a::Trait");
        assert_eq!(short_type_name("_private::Foo"), "Foo");
    }

    #[test]
    fn test_consumer_display() {
        assert_eq!(Consumer::of_type::<Widget>().to_string(), "Widget");

        let g = Gadget { _id: 7 };
        let shown = Consumer::instance(&g).to_string();
        assert!(shown.starts_with("#<Gadget:0x"), "got {}", shown);
        assert!(shown.ends_with('>'));
    }

    #[test]
    fn test_zero_sized_instances_share_identity() {
        let first = Widget;
        let second = Widget;
        assert_eq!(Consumer::instance(&first), Consumer::instance(&second));
        assert_eq!(Consumer::instance(&first).to_string(), "#<Widget>");
    }

    #[test]
    fn test_distinct_instances_have_distinct_identity() {
        let a = vec![1u8];
        let b = vec![2u8];
        assert_ne!(Consumer::instance(&a), Consumer::instance(&b));
        assert_eq!(Consumer::instance(&a).type_name(), "Vec<u8>");
    }

    #[test]
    fn test_downcast() {
        let v = value(String::from("thing"));
        assert_eq!(downcast::<String>(v.clone()).as_deref().map(String::as_str), Some("thing"));
        assert!(downcast::<i32>(v).is_none());
    }
}
