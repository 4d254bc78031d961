use aligned_vec::AVec;

use crate::NullBitmap;
use crate::error::{Error, Result};

use super::Column;

macro_rules! gather_into {
    ($data:expr, $nulls:expr, $indices:expr, $new_data:expr, $variant:ident) => {{
        let mut new_data = $new_data;
        let mut new_nulls = NullBitmap::new();
        for &idx in $indices {
            new_data.push($data[idx].clone());
            new_nulls.push($nulls.is_null(idx));
        }
        Column::$variant {
            data: new_data,
            nulls: new_nulls,
        }
    }};
}

macro_rules! gather_or_null_into {
    ($data:expr, $nulls:expr, $indices:expr, $new_data:expr, $variant:ident) => {{
        let mut new_data = $new_data;
        let mut new_nulls = NullBitmap::new();
        for idx in $indices {
            match idx {
                Some(idx) => {
                    new_data.push($data[*idx].clone());
                    new_nulls.push($nulls.is_null(*idx));
                }
                None => {
                    new_data.push(Default::default());
                    new_nulls.push(true);
                }
            }
        }
        Column::$variant {
            data: new_data,
            nulls: new_nulls,
        }
    }};
}

impl Column {
    /// Builds a new column holding `data[indices[0]], data[indices[1]], …`.
    pub fn gather(&self, indices: &[usize]) -> Result<Self> {
        let len = self.len();
        if let Some(&max_idx) = indices.iter().max()
            && max_idx >= len
        {
            return Err(Error::internal(format!(
                "gather: index {} out of bounds for column of length {}",
                max_idx, len
            )));
        }
        Ok(match self {
            Column::Bool { data, nulls } => {
                gather_into!(data, nulls, indices, Vec::with_capacity(indices.len()), Bool)
            }
            Column::Int64 { data, nulls } => gather_into!(data, nulls, indices, AVec::new(64), Int64),
            Column::Float64 { data, nulls } => {
                gather_into!(data, nulls, indices, AVec::new(64), Float64)
            }
            Column::Numeric { data, nulls } => {
                gather_into!(data, nulls, indices, Vec::with_capacity(indices.len()), Numeric)
            }
            Column::String { data, nulls } => {
                gather_into!(data, nulls, indices, Vec::with_capacity(indices.len()), String)
            }
            Column::Bytes { data, nulls } => {
                gather_into!(data, nulls, indices, Vec::with_capacity(indices.len()), Bytes)
            }
            Column::Date { data, nulls } => {
                gather_into!(data, nulls, indices, Vec::with_capacity(indices.len()), Date)
            }
            Column::Time { data, nulls } => {
                gather_into!(data, nulls, indices, Vec::with_capacity(indices.len()), Time)
            }
            Column::DateTime { data, nulls } => {
                gather_into!(data, nulls, indices, Vec::with_capacity(indices.len()), DateTime)
            }
            Column::Timestamp { data, nulls } => {
                gather_into!(data, nulls, indices, Vec::with_capacity(indices.len()), Timestamp)
            }
        })
    }

    /// Like [`Column::gather`], but an absent index produces a null slot.
    /// This is how unmatched rows of a left join pick up their right-side
    /// columns.
    pub fn gather_or_null(&self, indices: &[Option<usize>]) -> Result<Self> {
        let len = self.len();
        if let Some(max_idx) = indices.iter().filter_map(|idx| *idx).max()
            && max_idx >= len
        {
            return Err(Error::internal(format!(
                "gather_or_null: index {} out of bounds for column of length {}",
                max_idx, len
            )));
        }
        Ok(match self {
            Column::Bool { data, nulls } => {
                gather_or_null_into!(data, nulls, indices, Vec::with_capacity(indices.len()), Bool)
            }
            Column::Int64 { data, nulls } => {
                gather_or_null_into!(data, nulls, indices, AVec::new(64), Int64)
            }
            Column::Float64 { data, nulls } => {
                gather_or_null_into!(data, nulls, indices, AVec::new(64), Float64)
            }
            Column::Numeric { data, nulls } => {
                gather_or_null_into!(data, nulls, indices, Vec::with_capacity(indices.len()), Numeric)
            }
            Column::String { data, nulls } => {
                gather_or_null_into!(data, nulls, indices, Vec::with_capacity(indices.len()), String)
            }
            Column::Bytes { data, nulls } => {
                gather_or_null_into!(data, nulls, indices, Vec::with_capacity(indices.len()), Bytes)
            }
            Column::Date { data, nulls } => {
                gather_or_null_into!(data, nulls, indices, Vec::with_capacity(indices.len()), Date)
            }
            Column::Time { data, nulls } => {
                gather_or_null_into!(data, nulls, indices, Vec::with_capacity(indices.len()), Time)
            }
            Column::DateTime { data, nulls } => {
                gather_or_null_into!(data, nulls, indices, Vec::with_capacity(indices.len()), DateTime)
            }
            Column::Timestamp { data, nulls } => {
                gather_or_null_into!(data, nulls, indices, Vec::with_capacity(indices.len()), Timestamp)
            }
        })
    }
}
