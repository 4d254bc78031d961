macro_rules! with_nulls {
    ($col:expr, | $nulls:ident | $body:expr) => {
        match $col {
            Column::Bool { nulls: $nulls, .. }
            | Column::Int64 { nulls: $nulls, .. }
            | Column::Float64 { nulls: $nulls, .. }
            | Column::Numeric { nulls: $nulls, .. }
            | Column::String { nulls: $nulls, .. }
            | Column::Bytes { nulls: $nulls, .. }
            | Column::Date { nulls: $nulls, .. }
            | Column::Time { nulls: $nulls, .. }
            | Column::DateTime { nulls: $nulls, .. }
            | Column::Timestamp { nulls: $nulls, .. } => $body,
        }
    };
}

macro_rules! for_each_variant {
    ($col:expr, | $data:ident | $body:expr) => {
        match $col {
            Column::Bool { data: $data, .. } => $body,
            Column::Int64 { data: $data, .. } => $body,
            Column::Float64 { data: $data, .. } => $body,
            Column::Numeric { data: $data, .. } => $body,
            Column::String { data: $data, .. } => $body,
            Column::Bytes { data: $data, .. } => $body,
            Column::Date { data: $data, .. } => $body,
            Column::Time { data: $data, .. } => $body,
            Column::DateTime { data: $data, .. } => $body,
            Column::Timestamp { data: $data, .. } => $body,
        }
    };
}
