//! Query-string builders for the REST table surface.
//!
//! Filter values are URL-encoded; timestamps use RFC 3339 so the
//! `updated_at` equality filter matches what the backend stores.

use chrono::{DateTime, SecondsFormat, Utc};

/// Filter for one owner's rows, newest created first, optionally capped.
pub(crate) fn owner_list(owner_id: &str, limit: Option<i64>) -> String {
    let mut query = format!(
        "select=*&user_id=eq.{}&order=created_at.desc",
        urlencoding::encode(owner_id)
    );
    if let Some(n) = limit {
        query.push_str(&format!("&limit={}", n));
    }
    query
}

/// Filter addressing a single row, with an optional `updated_at`
/// concurrency token. Under a token, a write that matches no rows means
/// the row changed since it was read.
pub(crate) fn row_match(id: &str, expected_updated_at: Option<DateTime<Utc>>) -> String {
    let mut query = format!("id=eq.{}", urlencoding::encode(id));
    if let Some(ts) = expected_updated_at {
        let stamp = ts.to_rfc3339_opts(SecondsFormat::Micros, true);
        query.push_str(&format!("&updated_at=eq.{}", urlencoding::encode(&stamp)));
    }
    query
}

/// Filter selecting one column from one owner's profile row.
pub(crate) fn profile_column(owner_id: &str, column: &str) -> String {
    format!("select={}&id=eq.{}", column, urlencoding::encode(owner_id))
}
