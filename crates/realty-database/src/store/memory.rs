//! In-process record store.
//!
//! Used by tests and by the `memory` storage backend. Predicates are
//! evaluated directly against the JSON values of each row, with SQL-like
//! semantics: comparisons against a missing or `null` column are false.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use realty_core::result::AppResult;
use realty_core::traits::{Record, RecordStore};
use realty_core::types::{EntityId, FilterField, FilterOp, FilterValue, Predicate, QueryWindow};

use super::timestamp_now;

#[derive(Debug, Default)]
struct Table {
    last_id: EntityId,
    rows: BTreeMap<EntityId, Record>,
}

/// Record store keeping every table in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Table>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw row access, including soft-deleted rows.
    pub async fn raw(&self, table: &str, id: EntityId) -> Option<Record> {
        let tables = self.tables.read().await;
        tables.get(table).and_then(|t| t.rows.get(&id)).cloned()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn select(
        &self,
        table: &str,
        predicate: &Predicate,
        window: QueryWindow,
    ) -> AppResult<Vec<Record>> {
        let tables = self.tables.read().await;
        let Some(rows) = tables.get(table).map(|t| &t.rows) else {
            return Ok(Vec::new());
        };
        Ok(rows
            .values()
            .filter(|row| matches(predicate, row))
            .skip(usize::try_from(window.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(window.limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn insert(&self, table: &str, mut values: Record) -> AppResult<Record> {
        let mut tables = self.tables.write().await;
        let table_rows = tables.entry(table.to_string()).or_default();
        table_rows.last_id += 1;
        let id = table_rows.last_id;

        let now = timestamp_now();
        values.insert("id".to_string(), Value::from(id));
        values.entry("created_at").or_insert_with(|| now.clone());
        values.entry("updated_at").or_insert(now);

        table_rows.rows.insert(id, values.clone());
        debug!(table, id, "Inserted row");
        Ok(values)
    }

    async fn update(
        &self,
        table: &str,
        id: EntityId,
        mut values: Record,
    ) -> AppResult<Option<Record>> {
        values.remove("id");
        let mut tables = self.tables.write().await;
        let Some(row) = tables.get_mut(table).and_then(|t| t.rows.get_mut(&id)) else {
            return Ok(None);
        };
        row.extend(values);
        Ok(Some(row.clone()))
    }

    async fn delete(&self, table: &str, id: EntityId) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .get_mut(table)
            .is_some_and(|t| t.rows.remove(&id).is_some()))
    }

    async fn count(&self, table: &str, predicate: &Predicate) -> AppResult<u64> {
        let tables = self.tables.read().await;
        let count = tables
            .get(table)
            .map(|t| t.rows.values().filter(|row| matches(predicate, row)).count())
            .unwrap_or(0);
        Ok(count as u64)
    }
}

fn matches(predicate: &Predicate, row: &Record) -> bool {
    match predicate {
        Predicate::All => true,
        Predicate::Condition(field) => condition_holds(field, row),
        Predicate::And(items) => items.iter().all(|p| matches(p, row)),
        Predicate::Or(items) => items.iter().any(|p| matches(p, row)),
    }
}

fn condition_holds(condition: &FilterField, row: &Record) -> bool {
    let actual = row.get(&condition.field).unwrap_or(&Value::Null);
    match condition.op {
        FilterOp::IsNull => actual.is_null(),
        FilterOp::IsNotNull => !actual.is_null(),
        _ if actual.is_null() => false,
        FilterOp::Eq => equals(actual, &condition.value),
        FilterOp::Ne => !equals(actual, &condition.value),
        FilterOp::Gt => compare(actual, &condition.value) == Some(Ordering::Greater),
        FilterOp::Gte => matches!(
            compare(actual, &condition.value),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        FilterOp::Lt => compare(actual, &condition.value) == Some(Ordering::Less),
        FilterOp::Lte => matches!(
            compare(actual, &condition.value),
            Some(Ordering::Less | Ordering::Equal)
        ),
        FilterOp::Like | FilterOp::ILike => match (actual.as_str(), &condition.value) {
            (Some(text), FilterValue::String(pattern)) => {
                like(text, pattern, condition.op == FilterOp::ILike)
            }
            _ => false,
        },
        FilterOp::In => match &condition.value {
            FilterValue::StringList(options) => actual
                .as_str()
                .is_some_and(|text| options.iter().any(|o| o == text)),
            other => equals(actual, other),
        },
    }
}

fn equals(actual: &Value, expected: &FilterValue) -> bool {
    match expected {
        FilterValue::String(s) => actual.as_str() == Some(s.as_str()),
        FilterValue::Integer(i) => {
            actual.as_i64() == Some(*i) || actual.as_f64() == Some(*i as f64)
        }
        FilterValue::Float(f) => actual.as_f64() == Some(*f),
        FilterValue::Boolean(b) => actual.as_bool() == Some(*b),
        FilterValue::StringList(_) => false,
        FilterValue::Null => actual.is_null(),
    }
}

fn compare(actual: &Value, expected: &FilterValue) -> Option<Ordering> {
    match expected {
        FilterValue::Integer(i) => actual.as_f64()?.partial_cmp(&(*i as f64)),
        FilterValue::Float(f) => actual.as_f64()?.partial_cmp(f),
        FilterValue::String(s) => actual.as_str().map(|a| a.cmp(s.as_str())),
        _ => None,
    }
}

/// SQL `LIKE` matching: `%` is any run of characters, `_` exactly one,
/// and a backslash makes the next character literal.
fn like(text: &str, pattern: &str, case_insensitive: bool) -> bool {
    enum Token {
        Any,
        One,
        Char(char),
    }

    let fold = |s: &str| -> Vec<char> {
        if case_insensitive {
            s.to_lowercase().chars().collect()
        } else {
            s.chars().collect()
        }
    };
    let text = fold(text);
    let mut tokens = Vec::new();
    let mut chars = fold(pattern).into_iter();
    while let Some(c) = chars.next() {
        tokens.push(match c {
            '\\' => Token::Char(chars.next().unwrap_or('\\')),
            '%' => Token::Any,
            '_' => Token::One,
            c => Token::Char(c),
        });
    }
    let pattern = tokens;

    // matched[j]: pattern[..j] matches the text consumed so far.
    let mut matched = vec![false; pattern.len() + 1];
    matched[0] = true;
    for j in 1..=pattern.len() {
        matched[j] = matched[j - 1] && matches!(pattern[j - 1], Token::Any);
    }
    for c in text {
        let mut next = vec![false; pattern.len() + 1];
        for j in 1..=pattern.len() {
            next[j] = match pattern[j - 1] {
                Token::Any => next[j - 1] || matched[j],
                Token::One => matched[j - 1],
                Token::Char(p) => matched[j - 1] && p == c,
            };
        }
        matched = next;
    }
    matched[pattern.len()]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn all_rows() -> QueryWindow {
        QueryWindow {
            limit: 100,
            offset: 0,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_ids_and_timestamps() {
        let store = MemoryStore::new();
        let first = store
            .insert("properties", record(json!({"title": "Loft"})))
            .await
            .unwrap();
        let second = store
            .insert("properties", record(json!({"title": "Barn"})))
            .await
            .unwrap();
        assert_eq!(first["id"], 1);
        assert_eq!(second["id"], 2);
        assert!(first["created_at"].is_string());
        assert_eq!(first["created_at"], first["updated_at"]);
    }

    #[tokio::test]
    async fn test_ids_never_reused_after_delete() {
        let store = MemoryStore::new();
        store.insert("t", Record::new()).await.unwrap();
        assert!(store.delete("t", 1).await.unwrap());
        assert!(!store.delete("t", 1).await.unwrap());
        let next = store.insert("t", Record::new()).await.unwrap();
        assert_eq!(next["id"], 2);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_unique_ids() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..50)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.insert("t", Record::new()).await.unwrap() })
            })
            .collect();
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap()["id"].as_i64().unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[tokio::test]
    async fn test_update_merges_only_supplied_columns() {
        let store = MemoryStore::new();
        store
            .insert("t", record(json!({"title": "Loft", "city": "Porto"})))
            .await
            .unwrap();
        let updated = store
            .update("t", 1, record(json!({"city": "Braga", "id": 99})))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated["title"], "Loft");
        assert_eq!(updated["city"], "Braga");
        assert_eq!(updated["id"], 1);
        assert!(store.update("t", 42, Record::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_select_filters_windows_and_counts() {
        let store = MemoryStore::new();
        for price in [100.0, 250.0, 400.0, 900.0] {
            store
                .insert("t", record(json!({"price": price, "deleted_at": null})))
                .await
                .unwrap();
        }
        let predicate = Predicate::All
            .and(FilterField::gte("price", 200.0))
            .and(FilterField::lte("price", 900i64))
            .and(FilterField::is_null("deleted_at"));

        assert_eq!(store.count("t", &predicate).await.unwrap(), 3);
        let page = store
            .select("t", &predicate, QueryWindow { limit: 2, offset: 1 })
            .await
            .unwrap();
        let ids: Vec<_> = page.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[tokio::test]
    async fn test_missing_column_counts_as_null() {
        let store = MemoryStore::new();
        store.insert("t", Record::new()).await.unwrap();
        let visible = FilterField::is_null("deleted_at").into();
        assert_eq!(store.count("t", &visible).await.unwrap(), 1);
        let eq = FilterField::eq("city", "Porto").into();
        assert_eq!(store.count("t", &eq).await.unwrap(), 0);
        assert!(store.select("missing", &visible, all_rows()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_or_predicate() {
        let store = MemoryStore::new();
        for (first, last) in [("Ana", "Silva"), ("Rui", "Anaya"), ("Joao", "Costa")] {
            store
                .insert("c", record(json!({"first_name": first, "last_name": last})))
                .await
                .unwrap();
        }
        let search = Predicate::any_of([
            FilterField::contains("first_name", "ana"),
            FilterField::contains("last_name", "ana"),
        ]);
        assert_eq!(store.count("c", &search).await.unwrap(), 2);
    }

    #[test]
    fn test_like_patterns() {
        assert!(like("Sunny Loft", "%loft%", true));
        assert!(!like("Sunny Loft", "%loft%", false));
        assert!(like("abc", "a_c", false));
        assert!(like("", "%", false));
        assert!(!like("abc", "ab", false));
        assert!(like("50% off", "%50\\%%", true));
        assert!(!like("500 off", "%50\\%%", true));
        assert!(!like("abc", "a\\_c", false));
        assert!(like("a_c", "a\\_c", false));
    }

    #[tokio::test]
    async fn test_search_wildcards_are_literal() {
        let store = MemoryStore::new();
        for title in ["Sunny Loft", "50% off"] {
            store.insert("p", record(json!({ "title": title }))).await.unwrap();
        }
        let percent = Predicate::from(FilterField::contains("title", "%"));
        let underscore = Predicate::from(FilterField::contains("title", "_"));
        let plain = Predicate::from(FilterField::contains("title", "LOFT"));
        assert_eq!(store.count("p", &percent).await.unwrap(), 1);
        assert_eq!(store.count("p", &underscore).await.unwrap(), 0);
        assert_eq!(store.count("p", &plain).await.unwrap(), 1);
    }
}
