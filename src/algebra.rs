//! The record algebra.
//!
//! Every operation obtains the members of its input through
//! [`Record::visit`] and packages any new member sequence into a fresh
//! record. Inputs are never modified. Where tags repeat, `read`, `update`,
//! `delete` and `upgrade` act on the first (leftmost) match only.

use std::any::Any;

use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::{
    error::RecordError,
    member::Member,
    overload::Overload,
    record::Record,
    tag::{Key, Tag},
    value::{FieldValue, Value},
};

/// Position of the first member carrying `tag`.
fn position(tag: &Tag, members: &[Member]) -> Option<usize> {
    members.iter().position(|m| m.tag() == tag)
}

/// Rebuild `members` with the member at `index` replaced.
fn replace_at(members: &[Member], index: usize, replacement: Member) -> Record {
    let mut out = Vec::with_capacity(members.len());
    out.extend_from_slice(&members[..index]);
    out.push(replacement);
    out.extend_from_slice(&members[index + 1..]);
    Record::from_members(out)
}

/// Rebuild `members` with `extra` appended.
fn append(members: &[Member], extra: Member) -> Record {
    let mut out = Vec::with_capacity(members.len() + 1);
    out.extend_from_slice(members);
    out.push(extra);
    Record::from_members(out)
}

/// Create a record holding `members` in the given order. Duplicate tags are
/// kept.
pub fn create(members: impl IntoIterator<Item = Member>) -> Record {
    let record = Record::from_members(members.into_iter().collect());
    trace!(len = record.len(), "record create");
    record
}

/// The members of `lhs` followed by the members of `rhs`.
pub fn concatenate(lhs: &Record, rhs: &Record) -> Record {
    lhs.visit(|lhs| {
        rhs.visit(|rhs| {
            trace!(lhs = lhs.len(), rhs = rhs.len(), "record concatenate");
            create(lhs.iter().chain(rhs).cloned())
        })
    })
}

/// Concatenate any number of records, folding from the right.
pub fn concatenate_all(records: &[Record]) -> Record {
    match records {
        [] => Record::empty(),
        [only] => only.clone(),
        [first, rest @ ..] => concatenate(first, &concatenate_all(rest)),
    }
}

/// The value of the first member tagged `tag`.
pub fn read_value(tag: impl Into<Tag>, record: &Record) -> Result<Value, RecordError> {
    let tag = tag.into();
    record.visit(|members| match position(&tag, members) {
        Some(i) => {
            trace!(%tag, position = i, "record read");
            Ok(members[i].value().clone())
        }
        None => {
            debug!(%tag, len = members.len(), "record read of absent field");
            Err(RecordError::absent_field(&tag))
        }
    })
}

/// The value of the first member tagged `tag`, which must be a `T`.
pub fn read<T: FieldValue + Clone>(tag: impl Into<Tag>, record: &Record) -> Result<T, RecordError> {
    let tag = tag.into();
    let value = read_value(&tag, record)?;
    value.downcast_ref::<T>().cloned().ok_or_else(|| {
        debug!(%tag, found = value.type_name(), "record read of mistyped field");
        RecordError::type_mismatch(&tag, std::any::type_name::<T>(), value.type_name())
    })
}

pub fn read_key<T: FieldValue + Clone>(key: &Key<T>, record: &Record) -> Result<T, RecordError> {
    read(key, record)
}

/// Replace the value of the first member tagged `tag`, or append a new member
/// if there is none. The new value may be of any type.
pub fn update(tag: impl Into<Tag>, record: &Record, value: impl FieldValue) -> Record {
    update_value(tag, record, Value::new(value))
}

pub fn update_value(tag: impl Into<Tag>, record: &Record, value: Value) -> Record {
    let tag = tag.into();
    record.visit(|members| match position(&tag, members) {
        Some(i) => {
            trace!(%tag, position = i, "record update");
            replace_at(members, i, Member::new(tag, value))
        }
        None => {
            trace!(%tag, position = members.len(), "record update appends");
            append(members, Member::new(tag, value))
        }
    })
}

/// Remove the first member tagged `tag`. A record without such a member is
/// returned unchanged.
pub fn delete(tag: impl Into<Tag>, record: &Record) -> Record {
    let tag = tag.into();
    record.visit(|members| match position(&tag, members) {
        Some(i) => {
            trace!(%tag, position = i, "record delete");
            let mut out = members.to_vec();
            out.remove(i);
            Record::from_members(out)
        }
        None => {
            trace!(%tag, "record delete of absent field");
            record.clone()
        }
    })
}

pub fn has(tag: impl Into<Tag>, record: &Record) -> bool {
    let tag = tag.into();
    record.visit(|members| members.iter().any(|m| *m.tag() == tag))
}

/// Replace every value with `transform` applied to its member. Tags and their
/// order are preserved.
pub fn map(record: &Record, mut transform: impl FnMut(&Member) -> Value) -> Record {
    record.visit(|members| {
        trace!(len = members.len(), "record map");
        create(members.iter().map(|m| Member::new(m.tag().clone(), transform(m))))
    })
}

/// Broaden the field tagged `tag` so that it also answers to the argument
/// types of `callable`.
///
/// The field must hold an [`Overload`]. Alternatives of `callable` take
/// precedence over existing ones with the same argument type, so upgrading
/// with an overload of the same shape simply replaces the field. A missing
/// field is appended, as with [`update`].
pub fn upgrade(
    tag: impl Into<Tag>,
    record: &Record,
    callable: impl Into<Overload>,
) -> Result<Record, RecordError> {
    let tag = tag.into();
    let callable = callable.into();
    record.visit(|members| {
        let Some(i) = position(&tag, members) else {
            trace!(%tag, position = members.len(), "record upgrade appends");
            return Ok(append(members, Member::new(tag, callable)));
        };
        let existing = members[i].value();
        let Some(existing) = existing.downcast_ref::<Overload>() else {
            debug!(%tag, found = existing.type_name(), "record upgrade of non-callable field");
            return Err(RecordError::not_callable(&tag, existing.type_name()));
        };
        let merged = if existing.same_shape(&callable) {
            trace!(%tag, position = i, "record upgrade replaces");
            callable
        } else {
            trace!(%tag, position = i, "record upgrade merges");
            existing.clone().merge(callable)
        };
        Ok(replace_at(members, i, Member::new(tag, merged)))
    })
}

/// Call the overload stored under `tag` with `arg`, expecting an `R` back.
pub fn invoke<A: Any, R: FieldValue + Clone>(
    tag: impl Into<Tag>,
    record: &Record,
    arg: &A,
) -> Result<R, RecordError> {
    read::<Overload>(tag, record)?.call_as(arg)
}

/// The distinct tags of `record`, in order of first occurrence.
pub fn tags(record: &Record) -> IndexSet<Tag> {
    record.visit(|members| members.iter().map(|m| m.tag().clone()).collect())
}
