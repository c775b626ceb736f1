//! In-memory implementation of the leads backend for tests and local dev.
//!
//! # Design
//! Replicates the real backend's surface: every JSON response is wrapped in
//! the `{code, msg, data}` envelope, list endpoints add `total`/`page`/
//! `page_size`, and business failures (e.g. marking a deleted lead) come
//! back as `code: 400` inside an HTTP 200. Missing leads on update/delete
//! and an unknown assignee on batch_assign are transport-level 404s, same
//! as the production service.
//!
//! Auth is simplified: the current user is always user 1 with superuser
//! rights, and users 1–3 are the only known assignees.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

/// The user every request is authenticated as.
pub const CURRENT_USER_ID: i64 = 1;

/// User ids batch_assign will accept as assignees.
pub const KNOWN_USER_IDS: [i64; 3] = [1, 2, 3];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub time: DateTime<Utc>,
    pub phone: String,
    pub wechat: String,
    pub remark: Option<String>,
    pub intention_level: u8,
    pub is_read: bool,
    pub assigned_user_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct LeadCreate {
    pub time: DateTime<Utc>,
    pub phone: String,
    pub wechat: String,
    #[serde(default)]
    pub remark: Option<String>,
    pub intention_level: u8,
    pub assigned_user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct LeadUpdate {
    pub id: i64,
    pub time: Option<DateTime<Utc>>,
    pub phone: Option<String>,
    pub wechat: Option<String>,
    pub remark: Option<String>,
    pub intention_level: Option<u8>,
    pub is_read: Option<bool>,
    pub assigned_user_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct LeadBatchCreate {
    pub leads: Vec<LeadCreate>,
}

#[derive(Debug, Deserialize)]
pub struct LeadBatchAssign {
    pub lead_ids: Vec<i64>,
    pub assigned_user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct LeadIdBody {
    pub lead_id: i64,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    10
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    pub phone: Option<String>,
    pub wechat: Option<String>,
    pub is_read: Option<bool>,
    pub assigned_user_id: Option<i64>,
}

#[derive(Debug, Default)]
pub struct Store {
    leads: HashMap<i64, Lead>,
    next_id: i64,
}

impl Store {
    fn insert(&mut self, input: LeadCreate) -> Lead {
        self.next_id += 1;
        let now = Utc::now();
        let lead = Lead {
            id: self.next_id,
            time: input.time,
            phone: input.phone,
            wechat: input.wechat,
            remark: input.remark,
            intention_level: input.intention_level,
            is_read: false,
            assigned_user_id: input.assigned_user_id,
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.leads.insert(lead.id, lead.clone());
        lead
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/v1/leads/list", get(list_leads))
        .route("/api/v1/leads/my", get(my_leads))
        .route("/api/v1/leads/create", post(create_lead))
        .route("/api/v1/leads/batch_create", post(batch_create_leads))
        .route("/api/v1/leads/batch_assign", post(batch_assign_leads))
        .route("/api/v1/leads/update", post(update_lead))
        .route("/api/v1/leads/delete", delete(delete_lead))
        .route("/api/v1/leads/mark_read", post(mark_read))
        .route("/api/v1/leads/mark_unread", post(mark_unread))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// -- envelope helpers -------------------------------------------------------

fn success(msg: &str) -> Json<Value> {
    Json(json!({ "code": 200, "msg": msg, "data": Value::Null }))
}

fn fail(msg: &str) -> Json<Value> {
    Json(json!({ "code": 400, "msg": msg }))
}

fn success_page(leads: &[Lead], total: u64, page: u64, page_size: u64) -> Json<Value> {
    Json(json!({
        "code": 200,
        "msg": "OK",
        "data": leads,
        "total": total,
        "page": page,
        "page_size": page_size,
    }))
}

// -- handlers ---------------------------------------------------------------

fn matches_filters(lead: &Lead, params: &ListParams) -> bool {
    if let Some(phone) = &params.phone {
        if !lead.phone.contains(phone.as_str()) {
            return false;
        }
    }
    if let Some(wechat) = &params.wechat {
        if !lead.wechat.contains(wechat.as_str()) {
            return false;
        }
    }
    if let Some(is_read) = params.is_read {
        if lead.is_read != is_read {
            return false;
        }
    }
    if let Some(user_id) = params.assigned_user_id {
        if lead.assigned_user_id != user_id {
            return false;
        }
    }
    true
}

/// Filter, sort by id, and slice out the requested page.
fn page_of(store: &Store, params: &ListParams) -> Json<Value> {
    let mut matched: Vec<Lead> = store
        .leads
        .values()
        .filter(|lead| matches_filters(lead, params))
        .cloned()
        .collect();
    matched.sort_by_key(|lead| lead.id);

    let total = matched.len() as u64;
    let page = params.page.max(1);
    let start = ((page - 1) * params.page_size) as usize;
    let leads: Vec<Lead> = matched
        .into_iter()
        .skip(start)
        .take(params.page_size as usize)
        .collect();
    success_page(&leads, total, page, params.page_size)
}

async fn list_leads(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Value> {
    let store = db.read().await;
    page_of(&store, &params)
}

async fn my_leads(State(db): State<Db>, Query(mut params): Query<ListParams>) -> Json<Value> {
    // /my is always scoped to the authenticated user.
    params.assigned_user_id = Some(CURRENT_USER_ID);
    let store = db.read().await;
    page_of(&store, &params)
}

async fn create_lead(State(db): State<Db>, Json(input): Json<LeadCreate>) -> Json<Value> {
    db.write().await.insert(input);
    success("Created Successfully")
}

async fn batch_create_leads(
    State(db): State<Db>,
    Json(input): Json<LeadBatchCreate>,
) -> Json<Value> {
    let mut store = db.write().await;
    for lead in input.leads {
        store.insert(lead);
    }
    success("Created Successfully")
}

async fn batch_assign_leads(
    State(db): State<Db>,
    Json(input): Json<LeadBatchAssign>,
) -> Result<Json<Value>, StatusCode> {
    if !KNOWN_USER_IDS.contains(&input.assigned_user_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let mut store = db.write().await;
    for id in &input.lead_ids {
        if let Some(lead) = store.leads.get_mut(id) {
            lead.assigned_user_id = input.assigned_user_id;
            lead.updated_at = Some(Utc::now());
        }
    }
    Ok(success("Assigned Successfully"))
}

async fn update_lead(
    State(db): State<Db>,
    Json(input): Json<LeadUpdate>,
) -> Result<Json<Value>, StatusCode> {
    let mut store = db.write().await;
    let lead = store.leads.get_mut(&input.id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(time) = input.time {
        lead.time = time;
    }
    if let Some(phone) = input.phone {
        lead.phone = phone;
    }
    if let Some(wechat) = input.wechat {
        lead.wechat = wechat;
    }
    if let Some(remark) = input.remark {
        lead.remark = Some(remark);
    }
    if let Some(level) = input.intention_level {
        lead.intention_level = level;
    }
    if let Some(is_read) = input.is_read {
        lead.is_read = is_read;
    }
    if let Some(user_id) = input.assigned_user_id {
        lead.assigned_user_id = user_id;
    }
    lead.updated_at = Some(Utc::now());
    Ok(success("Updated Successfully"))
}

#[derive(Debug, Deserialize)]
struct DeleteParams {
    lead_id: i64,
}

async fn delete_lead(
    State(db): State<Db>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<Value>, StatusCode> {
    let mut store = db.write().await;
    store
        .leads
        .remove(&params.lead_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(success("Deleted Successfully"))
}

async fn mark_read(State(db): State<Db>, Json(body): Json<LeadIdBody>) -> Json<Value> {
    let mut store = db.write().await;
    match store.leads.get_mut(&body.lead_id) {
        Some(lead) => {
            lead.is_read = true;
            success("Marked as read")
        }
        None => fail("lead not found"),
    }
}

async fn mark_unread(State(db): State<Db>, Json(body): Json<LeadIdBody>) -> Json<Value> {
    let mut store = db.write().await;
    match store.leads.get_mut(&body.lead_id) {
        Some(lead) => {
            lead.is_read = false;
            success("Marked as unread")
        }
        None => fail("lead not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_input() -> LeadCreate {
        LeadCreate {
            time: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
            phone: "13800138000".to_string(),
            wechat: "acme_sales".to_string(),
            remark: None,
            intention_level: 4,
            assigned_user_id: 2,
        }
    }

    #[test]
    fn lead_serializes_to_json() {
        let lead = Lead {
            id: 1,
            time: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
            phone: "13800138000".to_string(),
            wechat: "acme_sales".to_string(),
            remark: None,
            intention_level: 4,
            is_read: false,
            assigned_user_id: 2,
            created_at: None,
            updated_at: None,
        };
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["phone"], "13800138000");
        assert_eq!(json["is_read"], false);
        assert_eq!(json["time"], "2024-05-01T09:30:00Z");
    }

    #[test]
    fn lead_create_defaults_remark_to_none() {
        let input: LeadCreate = serde_json::from_str(
            r#"{"time":"2024-05-01T09:30:00Z","phone":"138","wechat":"w","intention_level":3,"assigned_user_id":1}"#,
        )
        .unwrap();
        assert!(input.remark.is_none());
    }

    #[test]
    fn lead_create_rejects_missing_phone() {
        let result: Result<LeadCreate, _> = serde_json::from_str(
            r#"{"time":"2024-05-01T09:30:00Z","wechat":"w","intention_level":3,"assigned_user_id":1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn lead_update_only_requires_id() {
        let input: LeadUpdate = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert_eq!(input.id, 7);
        assert!(input.phone.is_none());
        assert!(input.is_read.is_none());
    }

    #[test]
    fn store_allocates_sequential_ids() {
        let mut store = Store::default();
        let first = store.insert(sample_input());
        let second = store.insert(sample_input());
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(!first.is_read);
        assert!(first.created_at.is_some());
    }

    #[test]
    fn list_params_default_pagination() {
        let params: ListParams = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 10);
        assert!(params.phone.is_none());
    }
}
