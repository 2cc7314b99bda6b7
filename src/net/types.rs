//! Wire schema shared with the submissions backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend response wraps its payload in a `{ "result": ... }`
//! envelope. Submission records are backend-owned: only `id` is interpreted
//! client-side, everything else is carried opaquely for display.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Application metadata returned by `GET /api/info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppInfo {
    pub title: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            title: "Administration".to_owned(),
            extra: serde_json::Map::new(),
        }
    }
}

/// A single submission record mirrored read-only from the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: u64,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Standard `{ "result": ... }` response envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub result: T,
}

/// Envelope payload for submission list responses.
#[derive(Debug, Deserialize)]
pub struct SubmissionList {
    pub submissions: Vec<Submission>,
}
