//! Immutable structural records.

use std::{fmt, sync::Arc};

use crate::{
    algebra,
    error::RecordError,
    member::Member,
    overload::Overload,
    tag::{Key, Tag},
    value::{FieldValue, Value},
};

/// An ordered, immutable sequence of [`Member`]s.
///
/// A record never hands out its members directly. They are observed by
/// passing a visitor to [`Record::visit`], which every operation in
/// [`algebra`] is built on. Tags need not be unique; lookups resolve to the
/// leftmost matching member.
#[derive(Clone, Default)]
pub struct Record {
    members: Arc<[Member]>,
}

impl Record {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_members(members: Vec<Member>) -> Self {
        Self {
            members: Arc::from(members),
        }
    }

    /// Invoke `visitor` with every member of the record, in order.
    pub fn visit<R>(&self, visitor: impl FnOnce(&[Member]) -> R) -> R {
        visitor(&self.members)
    }

    pub fn len(&self) -> usize {
        self.visit(<[Member]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.visit(<[Member]>::is_empty)
    }

    pub fn concatenate(&self, other: &Record) -> Record {
        algebra::concatenate(self, other)
    }

    pub fn read<T: FieldValue + Clone>(&self, tag: impl Into<Tag>) -> Result<T, RecordError> {
        algebra::read(tag, self)
    }

    pub fn read_value(&self, tag: impl Into<Tag>) -> Result<Value, RecordError> {
        algebra::read_value(tag, self)
    }

    pub fn read_key<T: FieldValue + Clone>(&self, key: &Key<T>) -> Result<T, RecordError> {
        algebra::read_key(key, self)
    }

    pub fn update(&self, tag: impl Into<Tag>, value: impl FieldValue) -> Record {
        algebra::update(tag, self, value)
    }

    pub fn delete(&self, tag: impl Into<Tag>) -> Record {
        algebra::delete(tag, self)
    }

    pub fn has(&self, tag: impl Into<Tag>) -> bool {
        algebra::has(tag, self)
    }

    pub fn map(&self, transform: impl FnMut(&Member) -> Value) -> Record {
        algebra::map(self, transform)
    }

    pub fn upgrade(
        &self,
        tag: impl Into<Tag>,
        callable: impl Into<Overload>,
    ) -> Result<Record, RecordError> {
        algebra::upgrade(tag, self, callable)
    }
}

impl FromIterator<Member> for Record {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        algebra::create(iter)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.visit(|members| {
            f.debug_map()
                .entries(members.iter().map(|m| (m.tag(), m.value())))
                .finish()
        })
    }
}

/// A Rust type with a fixed set of fields that round-trips through a
/// [`Record`].
///
/// Usually derived with `#[derive(Structure)]`. Converting a record into the
/// type checks every field once, so reads on the resulting value cannot fail.
pub trait Structure: Sized + Into<Record> + for<'a> TryFrom<&'a Record, Error = RecordError> {
    /// The tags of the fields, in declaration order.
    const TAGS: &'static [Tag];

    /// Reports the first tag of `Self` that `record` lacks.
    fn validate(record: &Record) -> Result<(), RecordError> {
        match Self::TAGS.iter().find(|tag| !algebra::has(*tag, record)) {
            Some(tag) => Err(RecordError::absent_field(tag)),
            None => Ok(()),
        }
    }
}
