//! Scaffolding shared by the integration tests

#![allow(dead_code)]

use rand::{Rng, seq::SliceRandom};
use structural_records::{Member, Record, Value, create, member};

pub const TAGS: [&str; 5] = ["one", "two", "three", "f", "one "];

/// The record used throughout the scenarios: `one: 1, two: 2, three: 3.0`.
pub fn sample() -> Record {
    create([member("one", 1i32), member("two", 2u64), member("three", 3.0f32)])
}

/// The tags of `record`, in order.
pub fn shape(record: &Record) -> Vec<String> {
    record.visit(|members| members.iter().map(|m| m.tag().to_string()).collect())
}

/// Returns `true` if both records hold the same tags bound to the same
/// values, in the same order.
pub fn same_members(lhs: &Record, rhs: &Record) -> bool {
    lhs.visit(|lhs| {
        rhs.visit(|rhs| {
            lhs.len() == rhs.len()
                && lhs
                    .iter()
                    .zip(rhs)
                    .all(|(l, r)| l.tag() == r.tag() && l.value().ptr_eq(r.value()))
        })
    })
}

/// A record of up to eight members drawn from [`TAGS`], duplicates included.
pub fn random_record(rng: &mut impl Rng) -> Record {
    let len = rng.gen_range(0..=8);
    create((0..len).map(|_| random_member(rng)))
}

pub fn random_member(rng: &mut impl Rng) -> Member {
    let tag = *TAGS.choose(rng).unwrap();
    if rng.gen_bool(0.5) {
        Member::new(tag, rng.gen_range(0..100i64))
    } else {
        Member::new(tag, format!("v{}", rng.gen_range(0..100)))
    }
}

/// Renders every value with its `Debug` output, tagged.
pub fn print_func(m: &Member) -> Value {
    println!("{}: {:?}", m.tag(), m.value());
    m.value().clone()
}
