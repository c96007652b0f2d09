//! [`RecordStore`](realty_core::traits::RecordStore) backends.
//!
//! Both backends agree on the observable contract: ids are assigned by the
//! store and never reused, `created_at`/`updated_at` are stamped on insert,
//! `update` writes only the supplied columns, and rows come back in
//! ascending `id` order.

pub mod memory;
pub mod postgres;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Current time as a JSON timestamp, the way records carry them.
pub fn timestamp_now() -> Value {
    Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
}
