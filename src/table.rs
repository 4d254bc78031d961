use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Value;
use crate::{Column, Record, Schema};

/// An in-memory table: a schema plus one typed column per field, in
/// insertion order. Columns are `Arc`-shared, so cloning a table (or
/// passing its columns through a join untouched) copies no row data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    schema: Schema,
    columns: IndexMap<String, Arc<Column>>,
    row_count: usize,
}

impl Table {
    pub fn new(schema: Schema) -> Self {
        let columns = schema
            .fields()
            .iter()
            .map(|f| (f.name.clone(), Arc::new(Column::new(&f.data_type))))
            .collect();
        Self {
            schema,
            columns,
            row_count: 0,
        }
    }

    pub fn empty(schema: Schema) -> Self {
        Self::new(schema)
    }

    pub fn from_columns(schema: Schema, columns: IndexMap<String, Column>) -> Self {
        let row_count = columns.values().next().map(|c| c.len()).unwrap_or(0);
        let arc_columns = columns.into_iter().map(|(k, v)| (k, Arc::new(v))).collect();
        Self {
            schema,
            columns: arc_columns,
            row_count,
        }
    }

    pub fn from_arc_columns(schema: Schema, columns: IndexMap<String, Arc<Column>>) -> Self {
        let row_count = columns.values().next().map(|c| c.len()).unwrap_or(0);
        Self {
            schema,
            columns,
            row_count,
        }
    }

    pub fn from_values(schema: Schema, values: Vec<Vec<Value>>) -> Result<Self> {
        let mut table = Self::new(schema);
        table.push_rows(values)?;
        Ok(table)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.get(name).map(|arc| arc.as_ref())
    }

    pub fn get_column(&self, name: &str) -> Option<Arc<Column>> {
        self.columns.get(name).map(Arc::clone)
    }

    pub fn columns(&self) -> &IndexMap<String, Arc<Column>> {
        &self.columns
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn push_row(&mut self, values: Vec<Value>) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(Error::invalid_argument(format!(
                "Row width {} does not match table width {}",
                values.len(),
                self.columns.len()
            )));
        }
        for (col, value) in self.columns.values_mut().zip(values.into_iter()) {
            Arc::make_mut(col).push(value)?;
        }
        self.row_count += 1;
        Ok(())
    }

    pub fn push_rows(&mut self, rows: Vec<Vec<Value>>) -> Result<()> {
        for row in rows {
            self.push_row(row)?;
        }
        Ok(())
    }

    pub fn get_row(&self, index: usize) -> Result<Record> {
        if index >= self.row_count {
            return Err(Error::invalid_argument(format!(
                "Row index {} out of bounds (count: {})",
                index, self.row_count
            )));
        }
        let values: Vec<Value> = self.columns.values().map(|c| c.get_value(index)).collect();
        Ok(Record::from_values(values))
    }

    pub fn to_records(&self) -> Result<Vec<Record>> {
        let mut records = Vec::with_capacity(self.row_count);
        for i in 0..self.row_count {
            records.push(self.get_row(i)?);
        }
        Ok(records)
    }

    /// Builds a new table holding rows `indices[0], indices[1], …` of this
    /// one, in that order. Indices may repeat.
    pub fn gather_rows(&self, indices: &[usize]) -> Result<Self> {
        let mut new_columns: IndexMap<String, Arc<Column>> =
            IndexMap::with_capacity(self.columns.len());
        for (name, col) in &self.columns {
            new_columns.insert(name.clone(), Arc::new(col.gather(indices)?));
        }
        Ok(Self {
            schema: self.schema.clone(),
            columns: new_columns,
            row_count: indices.len(),
        })
    }
}
