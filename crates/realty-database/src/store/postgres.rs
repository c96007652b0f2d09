//! PostgreSQL record store.
//!
//! Rows travel as JSON in both directions: reads project each row with
//! `to_jsonb`, writes go through `jsonb_populate_record` so only the keys
//! present in the record are written and the database keeps its column
//! defaults for the rest.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::{Postgres, QueryBuilder, Row};

use realty_core::error::{AppError, ErrorKind};
use realty_core::result::AppResult;
use realty_core::traits::{Record, RecordStore};
use realty_core::types::{EntityId, FilterField, FilterOp, FilterValue, Predicate, QueryWindow};

/// Record store backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Create a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn select(
        &self,
        table: &str,
        predicate: &Predicate,
        window: QueryWindow,
    ) -> AppResult<Vec<Record>> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT to_jsonb(t) AS record FROM ");
        qb.push(quote_ident(table));
        qb.push(" AS t WHERE ");
        push_predicate(&mut qb, predicate);
        qb.push(" ORDER BY t.\"id\" ASC LIMIT ");
        qb.push_bind(to_i64(window.limit));
        qb.push(" OFFSET ");
        qb.push_bind(to_i64(window.offset));

        let rows = qb
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("select from", table, e))?;
        rows.iter().map(|row| decode_record(row, table)).collect()
    }

    async fn insert(&self, table: &str, values: Record) -> AppResult<Record> {
        let table_ident = quote_ident(table);
        let mut qb = QueryBuilder::<Postgres>::new("INSERT INTO ");
        qb.push(&table_ident);
        qb.push(" AS t ");

        if values.is_empty() {
            qb.push("DEFAULT VALUES");
        } else {
            let columns = column_list(&values, None);
            qb.push("(");
            qb.push(&columns);
            qb.push(") SELECT ");
            qb.push(column_list(&values, Some("r")));
            qb.push(" FROM jsonb_populate_record(NULL::");
            qb.push(&table_ident);
            qb.push(", ");
            qb.push_bind(Value::Object(values));
            qb.push(") AS r");
        }
        qb.push(" RETURNING to_jsonb(t) AS record");

        let row = qb
            .build()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("insert into", table, e))?;
        decode_record(&row, table)
    }

    async fn update(
        &self,
        table: &str,
        id: EntityId,
        mut values: Record,
    ) -> AppResult<Option<Record>> {
        values.remove("id");
        if values.is_empty() {
            return self
                .select(
                    table,
                    &FilterField::eq("id", id).into(),
                    QueryWindow {
                        limit: 1,
                        offset: 0,
                    },
                )
                .await
                .map(|rows| rows.into_iter().next());
        }

        let table_ident = quote_ident(table);
        let mut qb = QueryBuilder::<Postgres>::new("UPDATE ");
        qb.push(&table_ident);
        qb.push(" AS t SET ");
        for (i, column) in values.keys().enumerate() {
            if i > 0 {
                qb.push(", ");
            }
            let column = quote_ident(column);
            qb.push(format!("{column} = r.{column}"));
        }
        qb.push(" FROM jsonb_populate_record(NULL::");
        qb.push(&table_ident);
        qb.push(", ");
        qb.push_bind(Value::Object(values));
        qb.push(") AS r WHERE t.\"id\" = ");
        qb.push_bind(id);
        qb.push(" RETURNING to_jsonb(t) AS record");

        let row = qb
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("update", table, e))?;
        row.map(|row| decode_record(&row, table)).transpose()
    }

    async fn delete(&self, table: &str, id: EntityId) -> AppResult<bool> {
        let mut qb = QueryBuilder::<Postgres>::new("DELETE FROM ");
        qb.push(quote_ident(table));
        qb.push(" WHERE \"id\" = ");
        qb.push_bind(id);

        let result = qb
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete from", table, e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self, table: &str, predicate: &Predicate) -> AppResult<u64> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM ");
        qb.push(quote_ident(table));
        qb.push(" AS t WHERE ");
        push_predicate(&mut qb, predicate);

        let total = qb
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("count", table, e))?;
        Ok(u64::try_from(total).unwrap_or(0))
    }
}

fn db_error(operation: &str, table: &str, e: sqlx::Error) -> AppError {
    AppError::with_source(
        ErrorKind::Database,
        format!("Failed to {operation} {table}: {e}"),
        e,
    )
}

fn decode_record(row: &PgRow, table: &str) -> AppResult<Record> {
    let value: Value = row
        .try_get("record")
        .map_err(|e| db_error("decode row of", table, e))?;
    match value {
        Value::Object(record) => Ok(record),
        other => Err(AppError::database(format!(
            "Expected a JSON object row from {table}, got {other}"
        ))),
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Double-quote an identifier, escaping embedded quotes.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn column_list(values: &Record, qualifier: Option<&str>) -> String {
    values
        .keys()
        .map(|key| match qualifier {
            Some(q) => format!("{q}.{}", quote_ident(key)),
            None => quote_ident(key),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_predicate(qb: &mut QueryBuilder<'_, Postgres>, predicate: &Predicate) {
    match predicate {
        Predicate::All => {
            qb.push("TRUE");
        }
        Predicate::Condition(condition) => push_condition(qb, condition),
        Predicate::And(items) => push_group(qb, items, " AND ", "TRUE"),
        Predicate::Or(items) => push_group(qb, items, " OR ", "FALSE"),
    }
}

fn push_group(
    qb: &mut QueryBuilder<'_, Postgres>,
    items: &[Predicate],
    separator: &str,
    empty: &str,
) {
    if items.is_empty() {
        qb.push(empty);
        return;
    }
    qb.push("(");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            qb.push(separator);
        }
        push_predicate(qb, item);
    }
    qb.push(")");
}

fn push_condition(qb: &mut QueryBuilder<'_, Postgres>, condition: &FilterField) {
    qb.push("t.");
    qb.push(quote_ident(&condition.field));

    let op = match condition.op {
        FilterOp::IsNull => {
            qb.push(" IS NULL");
            return;
        }
        FilterOp::IsNotNull => {
            qb.push(" IS NOT NULL");
            return;
        }
        FilterOp::In => {
            qb.push(" = ANY(");
            push_value(qb, &condition.value);
            qb.push(")");
            return;
        }
        FilterOp::Eq => " = ",
        FilterOp::Ne => " <> ",
        FilterOp::Gt => " > ",
        FilterOp::Gte => " >= ",
        FilterOp::Lt => " < ",
        FilterOp::Lte => " <= ",
        FilterOp::Like => " LIKE ",
        FilterOp::ILike => " ILIKE ",
    };
    qb.push(op);
    push_value(qb, &condition.value);
    if matches!(condition.op, FilterOp::Like | FilterOp::ILike) {
        qb.push(" ESCAPE '\\'");
    }
}

fn push_value(qb: &mut QueryBuilder<'_, Postgres>, value: &FilterValue) {
    match value {
        FilterValue::String(s) => {
            qb.push_bind(s.clone());
        }
        FilterValue::Integer(i) => {
            qb.push_bind(*i);
        }
        FilterValue::Float(f) => {
            qb.push_bind(*f);
        }
        FilterValue::Boolean(b) => {
            qb.push_bind(*b);
        }
        FilterValue::StringList(list) => {
            qb.push_bind(list.clone());
        }
        FilterValue::Null => {
            qb.push("NULL");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(predicate: &Predicate) -> String {
        let mut qb = QueryBuilder::<Postgres>::new("");
        push_predicate(&mut qb, predicate);
        qb.sql().to_string()
    }

    #[test]
    fn test_quote_ident_escapes() {
        assert_eq!(quote_ident("properties"), "\"properties\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_renders_soft_delete_and_filters() {
        let predicate = Predicate::All
            .and(FilterField::eq("city", "Porto"))
            .and(FilterField::gte("price", 100.0))
            .and(FilterField::is_null("deleted_at"));
        assert_eq!(
            render(&predicate),
            "(t.\"city\" = $1 AND t.\"price\" >= $2 AND t.\"deleted_at\" IS NULL)"
        );
    }

    #[test]
    fn test_renders_or_and_all() {
        assert_eq!(render(&Predicate::All), "TRUE");
        let search = Predicate::any_of([
            FilterField::contains("first_name", "an"),
            FilterField::contains("last_name", "an"),
        ]);
        assert_eq!(
            render(&search),
            "(t.\"first_name\" ILIKE $1 ESCAPE '\\' OR t.\"last_name\" ILIKE $2 ESCAPE '\\')"
        );
    }

    #[test]
    fn test_column_list() {
        let mut values = Record::new();
        values.insert("city".into(), Value::from("Porto"));
        assert_eq!(column_list(&values, None), "\"city\"");
        assert_eq!(column_list(&values, Some("r")), "r.\"city\"");
    }
}
