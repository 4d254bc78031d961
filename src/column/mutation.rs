use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::types::Value;

use super::Column;

impl Column {
    pub fn push(&mut self, value: Value) -> Result<()> {
        match (self, value) {
            (Column::Bool { data, nulls }, Value::Null) => {
                data.push(false);
                nulls.push(true);
            }
            (Column::Bool { data, nulls }, Value::Bool(v)) => {
                data.push(v);
                nulls.push(false);
            }
            (Column::Int64 { data, nulls }, Value::Null) => {
                data.push(0);
                nulls.push(true);
            }
            (Column::Int64 { data, nulls }, Value::Int64(v)) => {
                data.push(v);
                nulls.push(false);
            }
            (Column::Float64 { data, nulls }, Value::Null) => {
                data.push(0.0);
                nulls.push(true);
            }
            (Column::Float64 { data, nulls }, Value::Float64(v)) => {
                data.push(v.0);
                nulls.push(false);
            }
            (Column::Float64 { data, nulls }, Value::Int64(v)) => {
                data.push(v as f64);
                nulls.push(false);
            }
            (Column::Numeric { data, nulls }, Value::Null) => {
                data.push(Decimal::ZERO);
                nulls.push(true);
            }
            (Column::Numeric { data, nulls }, Value::Numeric(v)) => {
                data.push(v);
                nulls.push(false);
            }
            (Column::Numeric { data, nulls }, Value::Int64(v)) => {
                data.push(Decimal::from(v));
                nulls.push(false);
            }
            (Column::Numeric { data, nulls }, Value::Float64(v)) => {
                let d = Decimal::from_f64_retain(v.0)
                    .ok_or_else(|| Error::type_mismatch("NUMERIC", format!("FLOAT64 {}", v.0)))?;
                data.push(d);
                nulls.push(false);
            }
            (Column::String { data, nulls }, Value::Null) => {
                data.push(String::new());
                nulls.push(true);
            }
            (Column::String { data, nulls }, Value::String(v)) => {
                data.push(v);
                nulls.push(false);
            }
            (Column::Bytes { data, nulls }, Value::Null) => {
                data.push(Vec::new());
                nulls.push(true);
            }
            (Column::Bytes { data, nulls }, Value::Bytes(v)) => {
                data.push(v);
                nulls.push(false);
            }
            (Column::Date { data, nulls }, Value::Null) => {
                data.push(chrono::NaiveDate::default());
                nulls.push(true);
            }
            (Column::Date { data, nulls }, Value::Date(v)) => {
                data.push(v);
                nulls.push(false);
            }
            (Column::Time { data, nulls }, Value::Null) => {
                data.push(chrono::NaiveTime::default());
                nulls.push(true);
            }
            (Column::Time { data, nulls }, Value::Time(v)) => {
                data.push(v);
                nulls.push(false);
            }
            (Column::DateTime { data, nulls }, Value::Null) => {
                data.push(chrono::NaiveDateTime::default());
                nulls.push(true);
            }
            (Column::DateTime { data, nulls }, Value::DateTime(v)) => {
                data.push(v);
                nulls.push(false);
            }
            (Column::Timestamp { data, nulls }, Value::Null) => {
                data.push(chrono::DateTime::<chrono::Utc>::default());
                nulls.push(true);
            }
            (Column::Timestamp { data, nulls }, Value::Timestamp(v)) => {
                data.push(v);
                nulls.push(false);
            }
            (col, value) => {
                return Err(Error::type_mismatch(
                    col.data_type().to_string(),
                    value.data_type().to_string(),
                ));
            }
        }
        Ok(())
    }
}
