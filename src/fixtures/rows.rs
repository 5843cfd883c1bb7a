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

//! Canned rows and the upserts that restore them.

use crate::domain::entities::{Mutation, Row, Value};

pub const TABLE_NAME: &str = "tableName";

const PROPERTY_A1: &str = "propertyA1";
const PROPERTY_B1: &str = "propertyB1";
const PROPERTY_C1: i64 = 111;

const PROPERTY_A2: &str = "propertyA2";
const PROPERTY_B2: &str = "propertyB2";
const PROPERTY_C2: i64 = 222;

const PROPERTY_A3: i64 = 10;

pub fn struct_1() -> Row {
    Row::new([
        ("property_a", Value::string(PROPERTY_A1)),
        ("property_b", Value::string(PROPERTY_B1)),
        ("property_c", Value::int64(PROPERTY_C1)),
    ])
}

pub fn struct_2() -> Row {
    Row::new([
        ("property_a", Value::string(PROPERTY_A2)),
        ("property_b", Value::string(PROPERTY_B2)),
        ("property_c", Value::int64(PROPERTY_C2)),
    ])
}

/// Row with a typed NULL in `property_b`.
pub fn struct_3() -> Row {
    Row::new([
        ("property_a", Value::int64(PROPERTY_A3)),
        ("property_b", Value::String(None)),
    ])
}

pub fn mutation_1() -> Mutation {
    Mutation::from_row(TABLE_NAME, &struct_1())
}

pub fn mutation_2() -> Mutation {
    Mutation::from_row(TABLE_NAME, &struct_2())
}

/// Only `property_a`: the NULL column of `struct_3` is not written.
pub fn mutation_3() -> Mutation {
    Mutation::from_row(TABLE_NAME, &struct_3())
}

pub fn all_rows() -> Vec<Row> {
    vec![struct_1(), struct_2(), struct_3()]
}

pub fn all_mutations() -> Vec<Mutation> {
    vec![mutation_1(), mutation_2(), mutation_3()]
}
