//! Grouping transform for project environment variables.
//!
//! The API stores one row per (key, environment); tables render one row
//! per key with a column per environment. This module reshapes the flat
//! records into that keyed form.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A flat variable record as stored: one value of one key in one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableRecord {
    pub key: String,
    pub environment_id: DbId,
    pub value: String,
}

/// One value of a grouped variable, tied to its environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentValue {
    pub environment_id: DbId,
    pub value: String,
}

/// A variable key with its per-environment values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedVariable {
    pub key: String,
    pub values: Vec<EnvironmentValue>,
}

/// Group flat records by key, keeping only values whose environment is in
/// `known_environments`.
///
/// Key order follows first appearance in `records`; values keep record
/// order within each key. A key whose values are all filtered out still
/// appears, with an empty value list, so renames/deletes of environments
/// do not silently drop the variable row.
pub fn group_by_key(
    records: &[VariableRecord],
    known_environments: &[DbId],
) -> IndexMap<String, GroupedVariable> {
    let mut grouped: IndexMap<String, GroupedVariable> = IndexMap::new();

    for record in records {
        let entry = grouped
            .entry(record.key.clone())
            .or_insert_with(|| GroupedVariable {
                key: record.key.clone(),
                values: Vec::new(),
            });

        if known_environments.contains(&record.environment_id) {
            entry.values.push(EnvironmentValue {
                environment_id: record.environment_id,
                value: record.value.clone(),
            });
        }
    }

    grouped
}
