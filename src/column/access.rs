use crate::error::{Error, Result};
use crate::types::Value;

use super::Column;

impl Column {
    pub fn is_null(&self, index: usize) -> bool {
        with_nulls!(self, |nulls| nulls.is_null(index))
    }

    pub fn is_all_null(&self) -> bool {
        with_nulls!(self, |nulls| nulls.is_all_null())
    }

    pub fn get(&self, index: usize) -> Result<Value> {
        if index >= self.len() {
            return Err(Error::invalid_argument(format!(
                "Column index {} out of bounds (len: {})",
                index,
                self.len()
            )));
        }
        Ok(self.get_value(index))
    }

    pub fn get_value(&self, index: usize) -> Value {
        if index >= self.len() || self.is_null(index) {
            return Value::Null;
        }

        match self {
            Column::Bool { data, .. } => Value::Bool(data[index]),
            Column::Int64 { data, .. } => Value::Int64(data[index]),
            Column::Float64 { data, .. } => Value::float64(data[index]),
            Column::Numeric { data, .. } => Value::Numeric(data[index]),
            Column::String { data, .. } => Value::String(data[index].clone()),
            Column::Bytes { data, .. } => Value::Bytes(data[index].clone()),
            Column::Date { data, .. } => Value::Date(data[index]),
            Column::Time { data, .. } => Value::Time(data[index]),
            Column::DateTime { data, .. } => Value::DateTime(data[index]),
            Column::Timestamp { data, .. } => Value::Timestamp(data[index]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DataType;

    #[tokio::test(flavor = "current_thread")]
    async fn test_get_value_with_nulls() {
        let mut col = Column::new(&DataType::String);
        col.push(Value::string("a")).unwrap();
        col.push(Value::Null).unwrap();
        assert_eq!(col.get_value(0), Value::string("a"));
        assert_eq!(col.get_value(1), Value::Null);
        assert_eq!(col.get_value(2), Value::Null);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_get_out_of_bounds() {
        let col = Column::new(&DataType::Int64);
        let err = col.get(0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_is_all_null() {
        let mut col = Column::new(&DataType::Date);
        col.push(Value::Null).unwrap();
        col.push(Value::Null).unwrap();
        assert!(col.is_all_null());
    }
}
