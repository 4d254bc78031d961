use crate::types::Value;
use crate::{Column, Schema};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Record {
    values: Vec<Value>,
}

impl Record {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn from_values(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn from_columns(columns: &[&Column], row_index: usize) -> Self {
        let mut values = Vec::with_capacity(columns.len());
        for col in columns {
            values.push(col.get_value(row_index));
        }
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn get_by_name<'a>(&'a self, schema: &Schema, column: &str) -> Option<&'a Value> {
        schema
            .field_index(column)
            .and_then(|idx| self.values.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DataType;
    use crate::Field;

    #[tokio::test(flavor = "current_thread")]
    async fn test_from_values() {
        let record = Record::from_values(vec![Value::Int64(1), Value::string("a")]);
        assert_eq!(record.len(), 2);
        assert_eq!(record.get(0), Some(&Value::Int64(1)));
        assert_eq!(record.get(2), None);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_get_by_name() {
        let schema = Schema::from_fields(vec![
            Field::required("id", DataType::Int64),
            Field::nullable("name", DataType::String),
        ]);
        let record = Record::from_values(vec![Value::Int64(7), Value::string("ada")]);
        assert_eq!(record.get_by_name(&schema, "name"), Some(&Value::string("ada")));
        assert_eq!(record.get_by_name(&schema, "missing"), None);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_push() {
        let mut record = Record::new();
        assert!(record.is_empty());
        record.push(Value::Null);
        assert_eq!(record.values(), &[Value::Null]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_from_columns() {
        let mut col = Column::new(&DataType::Int64);
        col.push(Value::Int64(10)).unwrap();
        col.push(Value::Null).unwrap();
        let record = Record::from_columns(&[&col], 1);
        assert_eq!(record.values(), &[Value::Null]);
    }
}
