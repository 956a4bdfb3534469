//! Immutable, tag-indexed structural records.
//!
//! A [`Record`] is an ordered sequence of tagged [`Member`]s. Records are
//! never modified: [`create`], [`concatenate`], [`read`], [`update`],
//! [`delete`], [`map`], [`has`] and [`upgrade`] each return a new record (or
//! a value read from one).
//!
//! ```
//! use structural_records::{Function, record};
//!
//! let s = record! { "one" => 1, "two" => 2u64, "three" => 3.0f32 };
//! assert_eq!(s.read::<i32>("one"), Ok(1));
//!
//! let t = s.update("one", 1.5f64);
//! assert_eq!(t.read::<f64>("one"), Ok(1.5));
//! assert!(!t.delete("two").has("two"));
//!
//! let f = record! { "f" => Function::new(|i: &i32| i * 2) };
//! let f = f.upgrade("f", Function::new(|d: &f64| d * 0.5)).unwrap();
//! assert_eq!(structural_records::invoke::<i32, i32>("f", &f, &4), Ok(8));
//! assert_eq!(structural_records::invoke::<f64, f64>("f", &f, &4.0), Ok(2.0));
//! ```

extern crate self as structural_records;

pub mod algebra;
pub mod error;
pub mod member;
pub mod overload;
pub mod record;
pub mod tag;
pub mod value;

pub use algebra::{
    concatenate, concatenate_all, create, delete, has, invoke, map, read, read_key, read_value,
    tags, update, update_value, upgrade,
};
pub use error::RecordError;
pub use member::{Member, member};
pub use overload::{Function, Overload, Signature};
pub use record::{Record, Structure};
pub use structural_records_macros::Structure;
pub use tag::{Key, Tag};
pub use value::{FieldValue, Value};

/// Build a [`Record`] from `tag => value` pairs.
#[macro_export]
macro_rules! record {
    () => {
        $crate::record::Record::empty()
    };
    ( $( $tag:expr => $value:expr ),+ $(,)? ) => {
        $crate::algebra::create([ $( $crate::member::Member::new($tag, $value) ),+ ])
    };
}

/// Concatenate two or more records, left to right.
#[macro_export]
macro_rules! concatenate {
    ( $( $record:expr ),+ $(,)? ) => {
        $crate::algebra::concatenate_all(&[ $( $crate::record::Record::clone(&$record) ),+ ])
    };
}

/// Build an [`Overload`] from single-argument closures.
#[macro_export]
macro_rules! overload {
    ( $( $function:expr ),+ $(,)? ) => {
        [ $( $crate::overload::Function::new($function) ),+ ]
            .into_iter()
            .collect::<$crate::overload::Overload>()
    };
}
