//! Code → label substitution.

use std::collections::BTreeMap;

use polars::prelude::{DataFrame, NamedFrom, PolarsResult, Series};
use tracing::warn;

use crate::value::code_key;

/// Per-table label maps: formatted column name → {code → label}.
pub type TableLabelMap = BTreeMap<String, BTreeMap<String, String>>;

/// Replace categorical codes with their labels, column by column.
///
/// Only columns with an entry in `labels` are touched. A code absent from
/// its map becomes null rather than surviving as a raw code. A column whose
/// replacement fails is skipped with a warning; the pass never aborts.
pub fn convert_code_to_label(df: &mut DataFrame, labels: &TableLabelMap) {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    for name in names {
        let Some(mapping) = labels.get(&name) else {
            continue;
        };
        if let Err(error) = relabel_column(df, &name, mapping) {
            warn!(column = %name, %error, "cannot convert column, skipped");
        }
    }
}

fn relabel_column(
    df: &mut DataFrame,
    name: &str,
    mapping: &BTreeMap<String, String>,
) -> PolarsResult<()> {
    let column = df.column(name)?;
    let mut relabeled: Vec<Option<String>> = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        let value = column.get(idx)?;
        relabeled.push(code_key(&value).and_then(|key| mapping.get(&key).cloned()));
    }
    df.with_column(Series::new(name.into(), relabeled))?;
    Ok(())
}
