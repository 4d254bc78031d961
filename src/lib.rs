//! Lightweight in-memory columnar tables with an approximate as-of left join.
//!
//! The one nontrivial operation here is [`asof_left_join`]: each row of a
//! left table is matched to the row of a right table holding the greatest
//! join-key value strictly less than the left row's key, and the right
//! row's columns are attached. Left rows with no preceding right key get
//! nulls for every right-side column. The output always has exactly one row
//! per left row, in the left table's original order.
//!
//! ```
//! use skiff::{asof_left_join, DataType, Field, Schema, Table, Value};
//!
//! let trades = Table::from_values(
//!     Schema::from_fields(vec![
//!         Field::required("ts", DataType::Int64),
//!         Field::nullable("symbol", DataType::String),
//!     ]),
//!     vec![
//!         vec![Value::Int64(7), Value::string("AAA")],
//!         vec![Value::Int64(2), Value::string("BBB")],
//!     ],
//! )
//! .unwrap();
//!
//! let quotes = Table::from_values(
//!     Schema::from_fields(vec![
//!         Field::required("quoted_at", DataType::Int64),
//!         Field::nullable("bid", DataType::Float64),
//!     ]),
//!     vec![
//!         vec![Value::Int64(4), Value::float64(1.25)],
//!         vec![Value::Int64(9), Value::float64(1.5)],
//!     ],
//! )
//! .unwrap();
//!
//! let joined = asof_left_join(&trades, &quotes, "ts", "quoted_at").unwrap();
//! assert_eq!(joined.row_count(), 2);
//! // ts=7 takes the quote at 4; ts=2 has no preceding quote.
//! assert_eq!(joined.get_row(0).unwrap().get_by_name(joined.schema(), "bid"),
//!            Some(&Value::float64(1.25)));
//! assert_eq!(joined.get_row(1).unwrap().get_by_name(joined.schema(), "bid"),
//!            Some(&Value::Null));
//! ```

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

mod bitmap;
mod column;
pub mod error;
mod join;
mod record;
mod schema;
mod table;
mod types;

pub use bitmap::NullBitmap;
pub use column::{A64, Column};
pub use error::{Error, Result};
pub use join::asof_left_join;
pub use record::Record;
pub use schema::{Field, FieldMode, Schema};
pub use table::Table;
pub use types::{DataType, Value};
