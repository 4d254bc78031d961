use std::cmp::Ordering;
use std::sync::Arc;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{Error, Result};
use crate::types::{DataType, Value};
use crate::{Column, Field, Schema, Table};

/// One key from either input's join column, tagged with where it came from
/// and which row held it.
struct KeyEntry {
    key: Value,
    from_right: bool,
    row: usize,
}

/// Approximate as-of left join.
///
/// Joins each row of `left` to the row of `right` holding the greatest
/// `right_key` value strictly less than the row's `left_key` value. A right
/// key equal to the left key is not taken; the match is always the nearest
/// preceding right key. Left rows with no preceding right key are emitted
/// with every right-side column null.
///
/// The output has exactly one row per left row, in the left table's
/// original order, holding all of `left`'s columns followed by all of
/// `right`'s columns (right column names that collide with an
/// already-emitted name get an `_right` suffix). Right-side fields are
/// re-marked nullable. Neither input is modified.
///
/// Null join keys never participate in matching: a left row with a null key
/// is emitted unmatched, and a right row with a null key is never a match
/// candidate.
///
/// Fails with [`Error::ColumnNotFound`] if either key column is absent, and
/// with [`Error::TypeMismatch`] if the two key columns cannot be compared
/// (the numeric types are mutually comparable; every other type only with
/// itself).
///
/// Runs in O((n+m) log(n+m)): one sort of the combined key space, one sort
/// of the right keys, and a linear pass.
pub fn asof_left_join(
    left: &Table,
    right: &Table,
    left_key: &str,
    right_key: &str,
) -> Result<Table> {
    let left_col = left
        .column_by_name(left_key)
        .ok_or_else(|| Error::column_not_found(left_key))?;
    let right_col = right
        .column_by_name(right_key)
        .ok_or_else(|| Error::column_not_found(right_key))?;
    ensure_comparable(&left_col.data_type(), &right_col.data_type())?;

    let left_n = left.row_count();
    let right_n = right.row_count();

    let mut entries: Vec<KeyEntry> = Vec::with_capacity(left_n + right_n);
    for row in 0..left_n {
        let key = left_col.get_value(row);
        if !key.is_null() {
            entries.push(KeyEntry {
                key,
                from_right: false,
                row,
            });
        }
    }
    for row in 0..right_n {
        let key = right_col.get_value(row);
        if !key.is_null() {
            entries.push(KeyEntry {
                key,
                from_right: true,
                row,
            });
        }
    }

    // On equal keys the left entry sorts ahead of the right entry, so an
    // equal right key has not been counted yet when the left entry is
    // scanned: the match is strictly preceding.
    entries.sort_by(|a, b| compare_values(&a.key, &b.key).then(a.from_right.cmp(&b.from_right)));

    // One pass over the sorted key space. The running count of right
    // entries seen so far, minus one, is the rank (in ascending right-key
    // order) of the right row each left row should take.
    let mut seen_right = 0usize;
    let mut match_rank: Vec<Option<usize>> = vec![None; left_n];
    for entry in &entries {
        if entry.from_right {
            seen_right += 1;
        } else if seen_right > 0 {
            match_rank[entry.row] = Some(seen_right - 1);
        }
    }

    // Right rows with non-null keys in ascending key order; ranks index
    // into this. The sort is stable, so within an equal-key group the rank
    // resolves to the last row in input order.
    let mut right_order: Vec<usize> = (0..right_n)
        .filter(|&row| !right_col.is_null(row))
        .collect();
    right_order
        .sort_by(|&a, &b| compare_values(&right_col.get_value(a), &right_col.get_value(b)));

    let right_rows: Vec<Option<usize>> = match_rank
        .iter()
        .map(|rank| rank.map(|r| right_order[r]))
        .collect();

    log::debug!(
        "as-of join: {} left rows, {} right candidates, {} matched",
        left_n,
        right_order.len(),
        right_rows.iter().filter(|r| r.is_some()).count()
    );

    let mut fields: Vec<Field> = left.schema().fields().to_vec();
    let mut columns: IndexMap<String, Arc<Column>> = left.columns().clone();
    for (field, column) in right.schema().fields().iter().zip(right.columns().values()) {
        let name = disambiguate(&columns, &field.name);
        fields.push(Field::nullable(name.clone(), field.data_type));
        columns.insert(name, Arc::new(column.gather_or_null(&right_rows)?));
    }

    Ok(Table::from_arc_columns(Schema::from_fields(fields), columns))
}

/// Whether two key column types share a total order. The numeric types form
/// one comparable family; everything else compares only against itself.
fn ensure_comparable(left: &DataType, right: &DataType) -> Result<()> {
    let comparable = if left.is_numeric() && right.is_numeric() {
        true
    } else {
        left == right
    };
    if comparable {
        Ok(())
    } else {
        Err(Error::type_mismatch(left.to_string(), right.to_string()))
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
        (Value::Float64(a), Value::Float64(b)) => a.cmp(b),
        // In the mixed arms partial_cmp returns None only for NaN, which
        // sorts after every key (like null); mapping it to Equal would make
        // the comparator intransitive.
        (Value::Int64(a), Value::Float64(b)) => {
            (*a as f64).partial_cmp(&b.0).unwrap_or(Ordering::Less)
        }
        (Value::Float64(a), Value::Int64(b)) => {
            a.0.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Greater)
        }
        (Value::Numeric(a), Value::Numeric(b)) => a.cmp(b),
        (Value::Numeric(a), Value::Int64(b)) => a.cmp(&Decimal::from(*b)),
        (Value::Int64(a), Value::Numeric(b)) => Decimal::from(*a).cmp(b),
        (Value::Numeric(a), Value::Float64(b)) => a
            .to_f64()
            .and_then(|a| a.partial_cmp(&b.0))
            .unwrap_or(Ordering::Less),
        (Value::Float64(a), Value::Numeric(b)) => b
            .to_f64()
            .and_then(|b| a.0.partial_cmp(&b))
            .unwrap_or(Ordering::Greater),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
        (Value::Date(a), Value::Date(b)) => a.cmp(b),
        (Value::Time(a), Value::Time(b)) => a.cmp(b),
        (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

fn disambiguate(columns: &IndexMap<String, Arc<Column>>, name: &str) -> String {
    if !columns.contains_key(name) {
        return name.to_string();
    }
    let mut candidate = format!("{}_right", name);
    let mut n = 1;
    while columns.contains_key(&candidate) {
        n += 1;
        candidate = format!("{}_right{}", name, n);
    }
    candidate
}
