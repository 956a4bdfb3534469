//! Field keys

use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::Deref,
    sync::Arc,
};

/// The name of a field in a [`Record`](crate::record::Record).
///
/// Tags are compared by value. Two tags are only equal if they have the same
/// length and the same content, so tags of differing lengths are never equal.
#[derive(Clone)]
pub struct Tag(Repr);

#[derive(Clone)]
enum Repr {
    Static(&'static str),
    Shared(Arc<str>),
}

impl Tag {
    /// Create a tag from a string literal. Usable in `const` items.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Repr::Static(name))
    }

    /// Create a tag by copying a borrowed string, such as one built at run
    /// time. Literals should use [`Tag::from_static`] or `From<&'static str>`,
    /// which do not allocate.
    pub fn new(name: &str) -> Self {
        Self(Repr::Shared(Arc::from(name)))
    }

    pub fn as_str(&self) -> &str {
        match &self.0 {
            Repr::Static(s) => s,
            Repr::Shared(s) => s,
        }
    }
}

impl PartialEq for Tag {
    fn eq(&self, rhs: &Self) -> bool {
        let (lhs, rhs) = (self.as_str(), rhs.as_str());
        lhs.len() == rhs.len() && lhs == rhs
    }
}

impl Eq for Tag {}

impl PartialEq<str> for Tag {
    fn eq(&self, rhs: &str) -> bool {
        self.as_str().len() == rhs.len() && self.as_str() == rhs
    }
}

impl PartialEq<&'_ str> for Tag {
    fn eq(&self, rhs: &&str) -> bool {
        *self == **rhs
    }
}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl Deref for Tag {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for Tag {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Self(Repr::Shared(Arc::from(name)))
    }
}

impl From<&Tag> for Tag {
    fn from(tag: &Tag) -> Self {
        tag.clone()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

/// A [`Tag`] whose value type is fixed at the declaration site.
///
/// ```
/// use structural_records::{Key, record};
///
/// const ONE: Key<i32> = Key::new("one");
/// let s = record! { "one" => 1i32 };
/// assert_eq!(s.read_key(&ONE), Ok(1));
/// ```
pub struct Key<T> {
    tag: Tag,
    _value: PhantomData<fn() -> T>,
}

impl<T> Key<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            tag: Tag::from_static(name),
            _value: PhantomData,
        }
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }
}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            _value: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key<{}>({:?})", std::any::type_name::<T>(), self.tag)
    }
}

impl<T> From<&Key<T>> for Tag {
    fn from(key: &Key<T>) -> Self {
        key.tag.clone()
    }
}
