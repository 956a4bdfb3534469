use std::any::Any;

use crate::{
    tag::Tag,
    value::{FieldValue, Value},
};

/// A single tagged field.
#[derive(Clone, Debug)]
pub struct Member {
    tag: Tag,
    value: Value,
}

impl Member {
    pub fn new(tag: impl Into<Tag>, value: impl FieldValue) -> Self {
        Self {
            tag: tag.into(),
            value: Value::new(value),
        }
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }

    /// A member with the same tag and a different value, possibly of a
    /// different type.
    pub fn with_value(&self, value: impl FieldValue) -> Self {
        Self::new(self.tag.clone(), value)
    }
}

/// Shorthand for [`Member::new`].
pub fn member(tag: impl Into<Tag>, value: impl FieldValue) -> Member {
    Member::new(tag, value)
}
