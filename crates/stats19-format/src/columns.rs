//! Column-name normalization.

use polars::prelude::DataFrame;
use tracing::warn;

/// Normalize a raw column name to the formatted convention.
///
/// Lowercase; spaces and hyphens become underscores; parentheses and
/// question marks are removed; the ordinal abbreviations `1st` and `2nd`
/// expand to words. The transform is total and idempotent.
pub fn normalize_column_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            ' ' | '-' => out.push('_'),
            '(' | ')' | '?' => {}
            _ => out.extend(ch.to_lowercase()),
        }
    }
    out.replace("1st", "first").replace("2nd", "second")
}

/// Apply [`normalize_column_name`] to every column of `df`.
///
/// A normalized name that collides with an existing column cannot be
/// applied; that column keeps its raw name and a warning is logged.
pub fn normalize_columns(df: &mut DataFrame) {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    for name in names {
        let formatted = normalize_column_name(&name);
        if formatted == name {
            continue;
        }
        if let Err(error) = df.rename(&name, formatted.as_str().into()) {
            warn!(column = %name, %error, "cannot rename column, skipped");
        }
    }
}
