use crate::tag::Tag;

/// Failures reported by the record algebra and by overloaded calls.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A read named a tag that no member carries.
    #[error("field `{tag}` is not defined in the record")]
    AbsentField { tag: Tag },
    /// The field exists but holds a value of another type.
    #[error("field `{tag}` holds a value of type {found}, expected {expected}")]
    TypeMismatch {
        tag: Tag,
        expected: &'static str,
        found: &'static str,
    },
    /// An upgrade targeted a field that does not hold an overload.
    #[error("field `{tag}` holds a value of type {found}, which is not callable")]
    NotCallable { tag: Tag, found: &'static str },
    /// No alternative of an overload accepts the argument's type.
    #[error("no alternative accepts an argument of type {argument} (accepted: {})", .accepted.join(", "))]
    NoCapability {
        argument: &'static str,
        accepted: Vec<&'static str>,
    },
    /// A call succeeded but returned a value of another type.
    #[error("call returned a value of type {found}, expected {expected}")]
    UnexpectedOutput {
        expected: &'static str,
        found: &'static str,
    },
}

impl RecordError {
    pub fn absent_field(tag: &Tag) -> Self {
        Self::AbsentField { tag: tag.clone() }
    }

    pub fn type_mismatch(tag: &Tag, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            tag: tag.clone(),
            expected,
            found,
        }
    }

    pub fn not_callable(tag: &Tag, found: &'static str) -> Self {
        Self::NotCallable {
            tag: tag.clone(),
            found,
        }
    }
}
