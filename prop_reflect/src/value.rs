//! Type-erased property payloads.
//!
//! A [`Value`] carries an arbitrary `'static` payload behind an [`Arc`], so
//! cloning a value (and therefore a pending-property map) never copies the
//! payload itself. Reads are exact: a value stored as `i32` is not visible
//! as `i64`.

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

/// An opaque, cheaply clonable property value.
///
/// # Examples
///
/// ```
/// use prop_reflect::Value;
///
/// let value = Value::new(42_u8);
/// assert_eq!(value.downcast_ref::<u8>(), Some(&42));
/// assert!(value.downcast_ref::<u16>().is_none());
/// ```
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Value {
    /// Wraps `payload` into a new value.
    #[must_use]
    pub fn new<V>(payload: V) -> Self
    where
        V: Any + Send + Sync,
    {
        Self {
            inner: Arc::new(payload),
            type_name: type_name::<V>(),
        }
    }

    /// Name of the stored Rust type, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` when the payload is exactly a `V`.
    #[must_use]
    pub fn is<V: Any>(&self) -> bool {
        self.inner.is::<V>()
    }

    /// Borrows the payload as `V` when the stored type matches.
    #[must_use]
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.inner.downcast_ref::<V>()
    }

    /// Clones the payload out as `V` when the stored type matches.
    #[must_use]
    pub fn downcast<V: Any + Clone>(&self) -> Option<V> {
        self.downcast_ref::<V>().cloned()
    }

    /// Returns `true` when both values share the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Value").field(&self.type_name).finish()
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::new(text.to_owned())
    }
}

macro_rules! value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(payload: $ty) -> Self {
                    Self::new(payload)
                }
            }
        )*
    };
}

value_from!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);
