//! Synchronous API client core for the leads service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `LeadClient` is stateless — it holds only `base_url`.
//! - Each backend operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - List endpoints carry their arguments in the query string; mutations
//!   send JSON bodies, except delete which uses `?lead_id=`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.
//! - `routes` declares the static navigation metadata for the two lead
//!   screens, consumed by an external router/menu system.

pub mod client;
pub mod error;
pub mod http;
pub mod routes;
pub mod types;

pub use client::LeadClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use routes::{RouteDescriptor, LEAD_ADMIN, MY_LEADS};
pub use types::{
    Lead, LeadBatchAssign, LeadBatchCreate, LeadCreate, LeadId, LeadListQuery, LeadPage,
    LeadUpdate, MyLeadsQuery,
};
