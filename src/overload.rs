//! Callables that dispatch on the type of their argument.
//!
//! A plain callable stored in a record is an [`Overload`] with a single
//! alternative. [`Overload::merge`] grows the set of argument types a field
//! answers to; it is what [`upgrade`](crate::algebra::upgrade) is built on.

use std::{
    any::{Any, TypeId},
    fmt,
    sync::Arc,
};

use tracing::debug;

use crate::{
    error::RecordError,
    value::{FieldValue, Value},
};

/// The argument and output types of a [`Function`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub argument: TypeId,
    pub argument_name: &'static str,
    pub output_name: &'static str,
}

impl Signature {
    pub fn of<A: Any, R: Any>() -> Self {
        Self {
            argument: TypeId::of::<A>(),
            argument_name: std::any::type_name::<A>(),
            output_name: std::any::type_name::<R>(),
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn({}) -> {}", self.argument_name, self.output_name)
    }
}

type Body = Arc<dyn Fn(&dyn Any) -> Option<Value> + Send + Sync>;

/// A single-argument callable with a known signature.
#[derive(Clone, derive_more::Debug)]
pub struct Function {
    signature: Signature,
    #[debug(skip)]
    body: Body,
}

impl Function {
    pub fn new<A, R, F>(f: F) -> Self
    where
        A: Any,
        R: FieldValue,
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        Self {
            signature: Signature::of::<A, R>(),
            body: Arc::new(move |arg: &dyn Any| {
                arg.downcast_ref::<A>().map(|arg| Value::new(f(arg)))
            }),
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn accepts<A: Any>(&self) -> bool {
        self.signature.argument == TypeId::of::<A>()
    }

    /// Returns `None` if `arg` is not of the argument type.
    fn apply(&self, arg: &dyn Any) -> Option<Value> {
        (self.body)(arg)
    }
}

/// An ordered set of [`Function`]s, at most one per argument type.
///
/// Calling an overload selects the alternative whose argument type is the
/// static type of the argument.
#[derive(Clone, Default)]
pub struct Overload {
    alternatives: Vec<Function>,
}

impl Overload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alternative. It replaces any alternative with the same
    /// argument type.
    pub fn with(self, alternative: impl Into<Overload>) -> Self {
        self.merge(alternative.into())
    }

    /// Combine `self` with a `newer` overload. The newer alternatives come
    /// first and shadow any of ours that take the same argument type.
    pub fn merge(self, newer: Overload) -> Self {
        let mut alternatives = newer.alternatives;
        for older in self.alternatives {
            if !alternatives
                .iter()
                .any(|alt| alt.signature.argument == older.signature.argument)
            {
                alternatives.push(older);
            }
        }
        Self { alternatives }
    }

    pub fn alternatives(&self) -> &[Function] {
        &self.alternatives
    }

    pub fn signatures(&self) -> impl Iterator<Item = &Signature> {
        self.alternatives.iter().map(Function::signature)
    }

    /// Returns `true` if both overloads accept exactly the same argument
    /// types.
    pub fn same_shape(&self, other: &Overload) -> bool {
        self.alternatives.len() == other.alternatives.len()
            && self
                .signatures()
                .all(|sig| other.signatures().any(|o| o.argument == sig.argument))
    }

    pub fn accepts<A: Any>(&self) -> bool {
        self.alternatives.iter().any(Function::accepts::<A>)
    }

    pub fn call<A: Any>(&self, arg: &A) -> Result<Value, RecordError> {
        self.alternatives
            .iter()
            .find_map(|alt| alt.apply(arg))
            .ok_or_else(|| {
                let argument = std::any::type_name::<A>();
                debug!(argument, alternatives = self.alternatives.len(), "overload dispatch miss");
                RecordError::NoCapability {
                    argument,
                    accepted: self.signatures().map(|sig| sig.argument_name).collect(),
                }
            })
    }

    /// Call and downcast the result.
    pub fn call_as<A: Any, R: FieldValue + Clone>(&self, arg: &A) -> Result<R, RecordError> {
        let output = self.call(arg)?;
        output
            .downcast_ref::<R>()
            .cloned()
            .ok_or_else(|| RecordError::UnexpectedOutput {
                expected: std::any::type_name::<R>(),
                found: output.type_name(),
            })
    }
}

impl From<Function> for Overload {
    fn from(function: Function) -> Self {
        Self {
            alternatives: vec![function],
        }
    }
}

impl FromIterator<Function> for Overload {
    fn from_iter<I: IntoIterator<Item = Function>>(iter: I) -> Self {
        iter.into_iter().fold(Overload::new(), |acc, alt| acc.with(alt))
    }
}

impl fmt::Debug for Overload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for sig in self.signatures() {
            list.entry(&format_args!("{sig}"));
        }
        list.finish()
    }
}
