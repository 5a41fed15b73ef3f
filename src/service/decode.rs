use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::types::Uuid;
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::core::{FnProxyError, Record};

pub(super) fn row_to_record(row: &PgRow) -> Result<Record, FnProxyError> {
    row.columns()
        .iter()
        .map(|column| {
            let value = column_value(row, column.ordinal(), column.name())?;
            Ok((column.name().to_string(), value))
        })
        .collect()
}

fn column_value(row: &PgRow, idx: usize, name: &str) -> Result<Value, FnProxyError> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let type_name = raw.type_info().name().to_string();
    drop(raw);

    let value = match type_name.as_str() {
        "BOOL" => Value::from(row.try_get::<bool, _>(idx)?),
        "INT2" => Value::from(row.try_get::<i16, _>(idx)?),
        "INT4" => Value::from(row.try_get::<i32, _>(idx)?),
        "INT8" => Value::from(row.try_get::<i64, _>(idx)?),
        "FLOAT4" => float_value(f64::from(row.try_get::<f32, _>(idx)?), name)?,
        "FLOAT8" => float_value(row.try_get::<f64, _>(idx)?, name)?,
        "NUMERIC" => numeric_value(&row.try_get::<BigDecimal, _>(idx)?, name)?,
        "UUID" => Value::from(row.try_get::<Uuid, _>(idx)?.to_string()),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => Value::from(row.try_get::<String, _>(idx)?),
        "TIMESTAMP" => Value::from(format_timestamp(&row.try_get::<NaiveDateTime, _>(idx)?)),
        "TIMESTAMPTZ" => Value::from(format_timestamptz(&row.try_get::<DateTime<Utc>, _>(idx)?)),
        "DATE" => Value::from(format_date(&row.try_get::<NaiveDate, _>(idx)?)),
        "TIME" => Value::from(format_time(&row.try_get::<NaiveTime, _>(idx)?)),
        "JSON" | "JSONB" => row.try_get::<Value, _>(idx)?,
        other => {
            return Err(FnProxyError::DecodeError(format!(
                "unsupported type {other} for column \"{name}\""
            )));
        }
    };
    Ok(value)
}

/// NaN and infinities have no JSON form and fail the row.
fn float_value(v: f64, name: &str) -> Result<Value, FnProxyError> {
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .ok_or_else(|| {
            FnProxyError::DecodeError(format!(
                "out of range float value {v} in column \"{name}\" is not JSON compliant"
            ))
        })
}

/// Whole numerics (no digits after the point) become integers, anything
/// else a float. Integers beyond 64 bits fall back to a float.
fn numeric_value(v: &BigDecimal, name: &str) -> Result<Value, FnProxyError> {
    let (_, scale) = v.as_bigint_and_exponent();
    if scale <= 0 {
        if let Some(i) = v.to_i64() {
            return Ok(Value::from(i));
        }
        if let Some(u) = v.to_u64() {
            return Ok(Value::from(u));
        }
    }
    let f = v.to_f64().unwrap_or(f64::NAN);
    float_value(f, name)
}

/// Microseconds are printed only when non-zero, six digits wide.
fn time_format(nanos: u32) -> &'static str {
    if nanos == 0 { "%H:%M:%S" } else { "%H:%M:%S%.6f" }
}

pub(super) fn format_timestamp(ts: &NaiveDateTime) -> String {
    format!(
        "{}T{}",
        ts.format("%Y-%m-%d"),
        ts.format(time_format(ts.nanosecond()))
    )
}

pub(super) fn format_timestamptz(ts: &DateTime<Utc>) -> String {
    format!("{}+00:00", format_timestamp(&ts.naive_utc()))
}

pub(super) fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(super) fn format_time(time: &NaiveTime) -> String {
    time.format(time_format(time.nanosecond())).to_string()
}
