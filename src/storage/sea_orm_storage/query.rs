//! 生成语句的执行
//!
//! 每次调用单独打开一条连接，语句原样交给 SQLite，取完全部行后无论成败都关闭连接。

use std::str::FromStr;
use std::time::Duration;

use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteRow};
use sea_orm::sqlx::{Column, ConnectOptions, Connection, Executor, Row, Statement, TypeInfo, ValueRef};
use serde_json::Value;
use tracing::{debug, warn};

use super::SeaOrmStorage;
use crate::errors::{Nl2SqlError, Result};
use crate::storage::QueryRows;

impl SeaOrmStorage {
    pub async fn read_sql_query_impl(&self, sql: &str) -> Result<QueryRows> {
        let options = SqliteConnectOptions::from_str(&self.db_url)
            .map_err(|e| Nl2SqlError::database_config(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(false)
            .read_only(self.read_only)
            .busy_timeout(Duration::from_secs(5));

        let mut conn = options
            .connect()
            .await
            .map_err(|e| Nl2SqlError::database_connection(e.to_string()))?;

        debug!("Executing SQL: {}", sql);
        let fetched = fetch_rows(&mut conn, sql).await;

        if let Err(e) = conn.close().await {
            warn!("Failed to close query connection: {}", e);
        }

        fetched
    }
}

async fn fetch_rows(
    conn: &mut sea_orm::sqlx::SqliteConnection,
    sql: &str,
) -> Result<QueryRows> {
    let statement = Executor::prepare(&mut *conn, sql).await?;
    let columns = statement
        .columns()
        .iter()
        .map(|c| c.name().to_string())
        .collect::<Vec<_>>();

    let rows = statement.query().fetch_all(&mut *conn).await?;

    let rows = rows
        .iter()
        .map(decode_row)
        .collect::<Result<Vec<_>>>()?;

    Ok(QueryRows { columns, rows })
}

fn decode_row(row: &SqliteRow) -> Result<Vec<Value>> {
    (0..row.len()).map(|index| decode_cell(row, index)).collect()
}

/// 按单元格实际存储类型转换，不依赖列的声明类型
fn decode_cell(row: &SqliteRow, index: usize) -> Result<Value> {
    let type_name = {
        let raw = row.try_get_raw(index)?;
        if raw.is_null() {
            return Ok(Value::Null);
        }
        raw.type_info().name().to_ascii_uppercase()
    };

    let value = match type_name.as_str() {
        "INTEGER" | "INT" | "INT4" | "INT8" | "BIGINT" | "BOOLEAN" => {
            Value::from(row.try_get_unchecked::<i64, _>(index)?)
        }
        "REAL" | "FLOAT" | "DOUBLE" | "NUMERIC" => {
            let number = row.try_get_unchecked::<f64, _>(index)?;
            serde_json::Number::from_f64(number)
                .map(Value::Number)
                .unwrap_or(Value::Null)
        }
        "BLOB" => Value::String(to_hex(&row.try_get_unchecked::<Vec<u8>, _>(index)?)),
        _ => Value::String(row.try_get_unchecked::<String, _>(index)?),
    };

    Ok(value)
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
