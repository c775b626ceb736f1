//! Domain DTOs for the leads API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. Update
//! payloads and query filters use `Option` fields with `skip_serializing_if`
//! so omitted values never reach the wire — the server treats an absent
//! field as "leave unchanged" / "no filter".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single sales lead returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lead {
    pub id: i64,
    /// When the lead came in (distinct from the record's `created_at`).
    pub time: DateTime<Utc>,
    pub phone: String,
    pub wechat: String,
    pub remark: Option<String>,
    /// Purchase intention score, 1 (cold) through 5 (hot).
    pub intention_level: u8,
    pub is_read: bool,
    pub assigned_user_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request payload for creating a new lead. The server allocates the id and
/// initializes `is_read` to false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadCreate {
    pub time: DateTime<Utc>,
    pub phone: String,
    pub wechat: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub intention_level: u8,
    pub assigned_user_id: i64,
}

/// Request payload for updating an existing lead. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadUpdate {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wechat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intention_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<i64>,
}

/// Request payload for creating several leads in one call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadBatchCreate {
    pub leads: Vec<LeadCreate>,
}

/// Request payload for reassigning a set of leads to one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadBatchAssign {
    pub lead_ids: Vec<i64>,
    pub assigned_user_id: i64,
}

/// Body for mark_read / mark_unread — the server expects the id embedded as
/// `{"lead_id": N}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadId {
    pub lead_id: i64,
}

/// Query parameters for the lead list endpoint. `None` filters are omitted
/// from the query string entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadListQuery {
    pub page: u64,
    pub page_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wechat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<i64>,
}

impl Default for LeadListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            phone: None,
            wechat: None,
            is_read: None,
            assigned_user_id: None,
        }
    }
}

/// Query parameters for the "my leads" endpoint. No assignee filter — the
/// server scopes results to the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyLeadsQuery {
    pub page: u64,
    pub page_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wechat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
}

impl Default for MyLeadsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            phone: None,
            wechat: None,
            is_read: None,
        }
    }
}

/// One page of leads as returned by the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadPage {
    pub leads: Vec<Lead>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

/// The backend's uniform response envelope. Business failures arrive as
/// `code != 200` inside an HTTP 200; paged endpoints add `total`, `page`
/// and `page_size` alongside `data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub page_size: u64,
}
