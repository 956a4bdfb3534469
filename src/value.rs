use std::{
    any::{Any, TypeId},
    fmt,
    sync::Arc,
};

use crate::overload::{Function, Overload};

/// Anything that can be stored in a record field.
pub trait FieldValue: Any + fmt::Debug + Send + Sync {
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

impl<T> FieldValue for T
where
    T: Any + fmt::Debug + Send + Sync,
{
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An immutable, type-erased field value.
///
/// Cloning a `Value` shares the underlying storage. Since values are never
/// mutated after construction this is indistinguishable from a deep copy.
#[derive(Clone)]
pub struct Value(Arc<dyn FieldValue>);

impl Value {
    /// Erase `value`. A [`Function`] is stored as an [`Overload`] with one
    /// alternative, so every callable field can be upgraded and invoked.
    pub fn new<T: FieldValue>(value: T) -> Self {
        let any = &value as &dyn Any;
        // Re-wrapping an existing value must not add a layer of indirection.
        if let Some(inner) = any.downcast_ref::<Value>() {
            return inner.clone();
        }
        if let Some(function) = any.downcast_ref::<Function>() {
            return Self(Arc::new(Overload::from(function.clone())));
        }
        Self(Arc::new(value))
    }

    /// The stored value. `Arc<dyn FieldValue>` is itself a `FieldValue`, so
    /// trait methods must go through this rather than through `self.0`.
    fn inner(&self) -> &dyn FieldValue {
        &*self.0
    }

    pub fn type_name(&self) -> &'static str {
        self.inner().type_name()
    }

    /// The [`TypeId`] of the stored value, not of `Value` itself.
    pub fn type_id(&self) -> TypeId {
        self.inner().as_any().type_id()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.inner().as_any().is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner().as_any().downcast_ref::<T>()
    }

    /// Returns `true` if both values share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.inner(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_do_not_nest() {
        let inner = Value::new(3.0f32);
        let outer = Value::new(inner.clone());
        assert!(outer.ptr_eq(&inner));
        assert!(outer.is::<f32>());
    }

    #[test]
    fn downcasting() {
        let v = Value::new(String::from("hello"));
        assert_eq!(v.downcast_ref::<String>().map(String::as_str), Some("hello"));
        assert!(v.downcast_ref::<&str>().is_none());
        assert_eq!(v.type_id(), TypeId::of::<String>());
        assert_eq!(v.type_name(), "alloc::string::String");
        assert_eq!(format!("{v:?}"), "\"hello\"");
    }

    #[test]
    fn functions_are_stored_as_overloads() {
        let v = Value::new(Function::new(|i: &i32| *i + 1));
        assert!(!v.is::<Function>());
        let overload = v.downcast_ref::<Overload>().unwrap();
        assert_eq!(overload.alternatives().len(), 1);
        assert_eq!(overload.call_as::<i32, i32>(&1), Ok(2));
    }
}
