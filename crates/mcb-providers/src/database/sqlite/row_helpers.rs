use std::str::FromStr;

use mcb_domain::error::{Error, Result};
use mcb_domain::ports::infrastructure::database::{SqlParam, SqlRow};
use serde::de::DeserializeOwned;

/// Helper to get a required string field.
pub fn req_str(row: &dyn SqlRow, col: &str) -> Result<String> {
    row.try_get_string(col)?
        .ok_or_else(|| Error::memory(format!("Missing {col}")))
}

/// Helper to get a required i64 field.
pub fn req_i64(row: &dyn SqlRow, col: &str) -> Result<i64> {
    row.try_get_i64(col)?
        .ok_or_else(|| Error::memory(format!("Missing {col}")))
}

/// Helper to get a required f64 field.
pub fn req_f64(row: &dyn SqlRow, col: &str) -> Result<f64> {
    row.try_get_f64(col)?
        .ok_or_else(|| Error::memory(format!("Missing {col}")))
}

/// Helper to get a required boolean field (stored as `0`/`1`).
pub fn req_bool(row: &dyn SqlRow, col: &str) -> Result<bool> {
    Ok(req_i64(row, col)? != 0)
}

/// Helper to get a required field that parses via `FromStr` (e.g. a
/// `define_string_enum!` type).
pub fn req_parsed<T>(row: &dyn SqlRow, col: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    req_str(row, col)?
        .parse()
        .map_err(|e| Error::memory(format!("Invalid {col}: {e}")))
}

/// Helper to get an optional string field.
pub fn opt_str(row: &dyn SqlRow, col: &str) -> Result<Option<String>> {
    row.try_get_string(col)
}

/// Helper to get an optional i64 field.
pub fn opt_i64(row: &dyn SqlRow, col: &str) -> Result<Option<i64>> {
    row.try_get_i64(col)
}

/// Helper to get an optional f64 field.
pub fn opt_f64(row: &dyn SqlRow, col: &str) -> Result<Option<f64>> {
    row.try_get_f64(col)
}

/// Helper to get an optional boolean field.
pub fn opt_bool(row: &dyn SqlRow, col: &str) -> Result<Option<bool>> {
    Ok(opt_i64(row, col)?.map(|v| v != 0))
}

/// Helper to deserialize a required JSON column into `T`.
pub fn json_opt<T: DeserializeOwned>(row: &dyn SqlRow, col: &str, err_msg: &str) -> Result<Option<T>> {
    match row.try_get_string(col)? {
        Some(s) => serde_json::from_str(&s)
            .map(Some)
            .map_err(|e| Error::memory(format!("{err_msg}: {e}"))),
        None => Ok(None),
    }
}

/// Helper to deserialize a JSON array column into `Vec<T>`, defaulting to an
/// empty vec when the column is null or missing.
pub fn json_vec<T: DeserializeOwned>(row: &dyn SqlRow, col: &str, err_msg: &str) -> Result<Vec<T>> {
    Ok(json_opt(row, col, err_msg)?.unwrap_or_default())
}

/// Helper to convert `Option<String>` to `SqlParam`.
pub fn opt_str_param(value: &Option<String>) -> SqlParam {
    match value {
        Some(v) => SqlParam::String(v.clone()),
        None => SqlParam::Null,
    }
}

/// Helper to convert `Option<i64>` to `SqlParam`.
pub fn opt_i64_param(value: Option<i64>) -> SqlParam {
    match value {
        Some(v) => SqlParam::I64(v),
        None => SqlParam::Null,
    }
}

/// Helper to convert `Option<f64>` to `SqlParam`.
pub fn opt_f64_param(value: Option<f64>) -> SqlParam {
    match value {
        Some(v) => SqlParam::F64(v),
        None => SqlParam::Null,
    }
}

/// Helper to serialize a value to a JSON `SqlParam`.
pub fn json_param<T: serde::Serialize>(value: &T) -> Result<SqlParam> {
    Ok(SqlParam::String(serde_json::to_string(value).map_err(
        |e| Error::memory(format!("failed to serialize JSON param: {e}")),
    )?))
}
