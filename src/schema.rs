use serde::{Deserialize, Serialize};

use crate::types::DataType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FieldMode {
    #[default]
    Nullable,
    Required,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub data_type: DataType,
    pub mode: FieldMode,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType, mode: FieldMode) -> Self {
        Self {
            name: name.into(),
            data_type,
            mode,
        }
    }

    pub fn nullable(name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(name, data_type, FieldMode::Nullable)
    }

    pub fn required(name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(name, data_type, FieldMode::Required)
    }

    pub fn is_nullable(&self) -> bool {
        self.mode == FieldMode::Nullable
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn from_fields(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Schema {
        Schema::from_fields(vec![
            Field::required("id", DataType::Int64),
            Field::nullable("name", DataType::String),
            Field::nullable("score", DataType::Float64),
        ])
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_field_lookup() {
        let schema = sample_schema();
        assert_eq!(schema.field("name").unwrap().data_type, DataType::String);
        assert!(schema.field("missing").is_none());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_field_lookup_is_case_sensitive() {
        let schema = sample_schema();
        assert!(schema.field("Name").is_none());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_field_index() {
        let schema = sample_schema();
        assert_eq!(schema.field_index("id"), Some(0));
        assert_eq!(schema.field_index("score"), Some(2));
        assert_eq!(schema.field_index("missing"), None);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_modes() {
        let schema = sample_schema();
        assert!(!schema.field("id").unwrap().is_nullable());
        assert!(schema.field("name").unwrap().is_nullable());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_add_field() {
        let mut schema = Schema::new();
        assert!(schema.is_empty());
        schema.add_field(Field::nullable("a", DataType::Date));
        assert_eq!(schema.num_fields(), 1);
        assert_eq!(schema.fields()[0].name, "a");
    }
}
