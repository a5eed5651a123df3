//! Positional records produced by line decoders.

use std::ops::{Deref, DerefMut};

use crate::value::Value;

/// One decoded row: one [`Value`] per schema column, in schema order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record(pub Vec<Value>);

impl Record {
    /// A record of `arity` nulls.
    pub fn nulls(arity: usize) -> Self {
        Self(vec![Value::Null; arity])
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Reset to `arity` nulls, reusing the allocation.
    pub fn reset(&mut self, arity: usize) {
        self.0.clear();
        self.0.resize(arity, Value::Null);
    }
}

impl From<Vec<Value>> for Record {
    fn from(value: Vec<Value>) -> Self {
        Self(value)
    }
}

impl Deref for Record {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Record {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
