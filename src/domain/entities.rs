// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Domain Entities
//!
//! The "Nouns" a backup pipeline moves around: a `Row` read out of a Spanner
//! table, and the `Mutation` that writes it back during a restore.
//!
//! We use `serde` so fixtures can be dumped to JSON and compared
//! structurally instead of through an opaque byte stream.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed column value. `None` is a SQL NULL that still carries its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Value {
    String(Option<String>),
    Int64(Option<i64>),
}

impl Value {
    pub fn string(v: impl Into<String>) -> Self {
        Value::String(Some(v.into()))
    }

    pub fn int64(v: i64) -> Self {
        Value::Int64(Some(v))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::String(None) | Value::Int64(None))
    }

    /// Spanner type code, as it appears in a table schema.
    pub fn type_code(&self) -> &'static str {
        match self {
            Value::String(_) => "STRING",
            Value::Int64(_) => "INT64",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(Some(s)) => write!(f, "{}", s),
            Value::Int64(Some(n)) => write!(f, "{}", n),
            _ => write!(f, "NULL"),
        }
    }
}

/// One named column of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

/// An ordered set of fields, the shape of a row read from Spanner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Row {
    fields: Vec<Field>,
}

impl Row {
    /// Builds a row from `(column, value)` pairs, keeping their order.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, value)| Field {
                    name: name.into(),
                    value,
                })
                .collect(),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.name == column)
            .map(|f| &f.value)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Write operations a restore can issue. Only upserts are used today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MutationOp {
    InsertOrUpdate,
}

impl fmt::Display for MutationOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationOp::InsertOrUpdate => write!(f, "INSERT_OR_UPDATE"),
        }
    }
}

/// A write against a single table. `columns[i]` is written with `values[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mutation {
    op: MutationOp,
    table: String,
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Mutation {
    /// Builds an upsert from `(column, value)` pairs.
    pub fn insert_or_update<I, S>(table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        let (columns, values) = columns
            .into_iter()
            .map(|(c, v)| (c.into(), v))
            .unzip();
        Self {
            op: MutationOp::InsertOrUpdate,
            table: table.into(),
            columns,
            values,
        }
    }

    /// Converts a backed-up row into the upsert that restores it.
    ///
    /// NULL columns are left out, so the restored row keeps whatever
    /// default the table defines for them.
    pub fn from_row(table: impl Into<String>, row: &Row) -> Self {
        Self::insert_or_update(
            table,
            row.fields()
                .iter()
                .filter(|f| !f.value.is_null())
                .map(|f| (f.name.clone(), f.value.clone())),
        )
    }

    pub fn op(&self) -> MutationOp {
        self.op
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.values[i])
    }
}
