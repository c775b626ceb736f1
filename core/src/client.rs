//! Stateless HTTP request builder and response parser for the leads API.
//!
//! # Design
//! `LeadClient` holds only a `base_url` and carries no mutable state between
//! calls. Each backend operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies.
//!
//! List endpoints put their arguments in the query string; mutations send a
//! JSON body, except delete which identifies its target via `?lead_id=`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    Envelope, Lead, LeadBatchAssign, LeadBatchCreate, LeadCreate, LeadId, LeadListQuery, LeadPage,
    LeadUpdate, MyLeadsQuery,
};

/// Synchronous, stateless client for the leads API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct LeadClient {
    base_url: String,
}

impl LeadClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // -- request builders ---------------------------------------------------

    pub fn build_list_leads(&self, query: &LeadListQuery) -> Result<HttpRequest, ApiError> {
        self.get("/api/v1/leads/list", query)
    }

    pub fn build_my_leads(&self, query: &MyLeadsQuery) -> Result<HttpRequest, ApiError> {
        self.get("/api/v1/leads/my", query)
    }

    pub fn build_create_lead(&self, input: &LeadCreate) -> Result<HttpRequest, ApiError> {
        self.post("/api/v1/leads/create", input)
    }

    pub fn build_batch_create_leads(
        &self,
        input: &LeadBatchCreate,
    ) -> Result<HttpRequest, ApiError> {
        self.post("/api/v1/leads/batch_create", input)
    }

    pub fn build_batch_assign_leads(
        &self,
        input: &LeadBatchAssign,
    ) -> Result<HttpRequest, ApiError> {
        self.post("/api/v1/leads/batch_assign", input)
    }

    pub fn build_update_lead(&self, input: &LeadUpdate) -> Result<HttpRequest, ApiError> {
        self.post("/api/v1/leads/update", input)
    }

    /// Delete identifies its target through the query string, not a body.
    pub fn build_delete_lead(&self, lead_id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/api/v1/leads/delete?lead_id={lead_id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_mark_read(&self, lead_id: i64) -> Result<HttpRequest, ApiError> {
        self.post("/api/v1/leads/mark_read", &LeadId { lead_id })
    }

    pub fn build_mark_unread(&self, lead_id: i64) -> Result<HttpRequest, ApiError> {
        self.post("/api/v1/leads/mark_unread", &LeadId { lead_id })
    }

    // -- response parsers ---------------------------------------------------

    pub fn parse_list_leads(&self, response: HttpResponse) -> Result<LeadPage, ApiError> {
        parse_page(response)
    }

    pub fn parse_my_leads(&self, response: HttpResponse) -> Result<LeadPage, ApiError> {
        parse_page(response)
    }

    pub fn parse_create_lead(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_ack(response)
    }

    pub fn parse_batch_create_leads(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_ack(response)
    }

    pub fn parse_batch_assign_leads(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_ack(response)
    }

    pub fn parse_update_lead(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_ack(response)
    }

    pub fn parse_delete_lead(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_ack(response)
    }

    pub fn parse_mark_read(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_ack(response)
    }

    pub fn parse_mark_unread(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_ack(response)
    }

    // -- internals ----------------------------------------------------------

    fn get<Q: Serialize>(&self, path: &str, query: &Q) -> Result<HttpRequest, ApiError> {
        let qs = serde_urlencoded::to_string(query)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let url = if qs.is_empty() {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}{path}?{qs}", self.base_url)
        };
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
        })
    }

    fn post<B: Serialize>(&self, path: &str, input: &B) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Decode a paged envelope into a `LeadPage`.
fn parse_page(response: HttpResponse) -> Result<LeadPage, ApiError> {
    let env: Envelope<Vec<Lead>> = decode(response)?;
    Ok(LeadPage {
        leads: env.data.unwrap_or_default(),
        total: env.total,
        page: env.page,
        page_size: env.page_size,
    })
}

/// Decode a plain acknowledgment envelope, discarding any `data`.
fn parse_ack(response: HttpResponse) -> Result<(), ApiError> {
    decode::<serde_json::Value>(response).map(|_| ())
}

/// Map the transport status and envelope code to `ApiError` variants, then
/// hand back the decoded envelope.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<Envelope<T>, ApiError> {
    match response.status {
        200 => {}
        404 => return Err(ApiError::NotFound),
        status => {
            return Err(ApiError::HttpError {
                status,
                body: response.body,
            })
        }
    }
    let env: Envelope<T> = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
    if env.code != 200 {
        return Err(ApiError::Api {
            code: env.code,
            msg: env.msg,
        });
    }
    Ok(env)
}
