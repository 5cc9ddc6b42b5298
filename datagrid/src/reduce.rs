//! Column reduction: strip hidden columns from headings and rows.

use std::collections::BTreeSet;

use crate::config::ColumnSpec;
use crate::model::Value;

/// Resolve hidden-column specifiers to heading indices.
///
/// Out-of-range indices and names that match no heading are ignored.
pub fn resolve_hidden(headings: &[String], specs: &[ColumnSpec]) -> BTreeSet<usize> {
    let mut resolved = BTreeSet::new();
    for spec in specs {
        match spec {
            ColumnSpec::Index(i) if *i < headings.len() => {
                resolved.insert(*i);
            }
            ColumnSpec::Name(name) => {
                if let Some(i) = headings.iter().position(|h| h == name) {
                    resolved.insert(i);
                }
            }
            _ => {}
        }
    }
    resolved
}

/// Remove the hidden columns from headings and from every row, preserving
/// the relative order of what remains.
///
/// Rows are first aligned to the heading count (ragged rows are truncated or
/// padded with [`Value::Null`]), so every output row has exactly as many
/// cells as there are output headings.
pub fn reduce(
    headings: &[String],
    rows: &[Vec<Value>],
    specs: &[ColumnSpec],
) -> (Vec<String>, Vec<Vec<Value>>) {
    let hidden = resolve_hidden(headings, specs);

    let kept_headings = headings
        .iter()
        .enumerate()
        .filter(|(i, _)| !hidden.contains(i))
        .map(|(_, h)| h.clone())
        .collect();

    let kept_rows = rows
        .iter()
        .map(|row| {
            (0..headings.len())
                .filter(|i| !hidden.contains(i))
                .map(|i| row.get(i).cloned().unwrap_or(Value::Null))
                .collect()
        })
        .collect();

    (kept_headings, kept_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headings() -> Vec<String> {
        vec!["Name".into(), "Age".into(), "Active".into()]
    }

    #[test]
    fn name_and_index_resolve_identically() {
        let by_name = resolve_hidden(&headings(), &[ColumnSpec::Name("Active".into())]);
        let by_index = resolve_hidden(&headings(), &[ColumnSpec::Index(2)]);
        assert_eq!(by_name, by_index);
    }

    #[test]
    fn unmatched_specifiers_are_ignored() {
        let resolved = resolve_hidden(
            &headings(),
            &[
                ColumnSpec::Index(99),
                ColumnSpec::Name("Nope".into()),
                ColumnSpec::Index(0),
            ],
        );
        assert_eq!(resolved.into_iter().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn ragged_rows_come_out_aligned() {
        let rows = vec![
            vec![Value::from("short")],
            vec![
                Value::from("long"),
                Value::from(1i64),
                Value::from(true),
                Value::from("extra"),
            ],
        ];
        let (kept, reduced) = reduce(&headings(), &rows, &[ColumnSpec::Index(1)]);
        assert_eq!(kept, vec!["Name".to_string(), "Active".to_string()]);
        for row in &reduced {
            assert_eq!(row.len(), kept.len());
        }
        assert_eq!(reduced[0][1], Value::Null);
        assert_eq!(reduced[1][1], Value::Bool(true));
    }
}
