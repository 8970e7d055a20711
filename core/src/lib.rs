//! Data-access layer and router for the Novoe Konakovo site.
//!
//! # Overview
//! `SiteClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). Parsing normalizes
//! every payload into records whose fields are always present, so views can
//! render them without null checks. `SiteApi` glues the client to a
//! `Transport`; with the default `ureq` feature, `UreqTransport` does
//! blocking I/O.
//!
//! `router` holds the route table and the navigation side effects: document
//! metadata written to an injected `DocumentHead`, and the scroll target.
//!
//! # Design
//! - `SiteClient` is stateless; it holds only the API origin.
//! - Every read is `build_*` + `parse_*`, so the I/O boundary is explicit.
//! - Records are built from `serde_json::Value` field by field rather than
//!   derived, since the backend's shapes drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
mod normalize;
pub mod router;
pub mod transport;
pub mod types;

pub use client::{field_error_message, SiteClient};
pub use config::ApiConfig;
pub use error::{ApiError, Resource};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use router::head::{DocumentHead, MemoryHead};
pub use router::meta::{MetaValue, ResolvedMeta, RouteMeta, SiteMeta};
pub use router::scroll::{ScrollPosition, ScrollTarget};
pub use router::site::{site_router, View};
pub use router::{NavigationKind, Navigated, Navigator, RouteInfo, RouteMatch, Router, RouterError};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use transport::{SiteApi, Transport};
pub use types::{
    Article, DayScenario, HeroBlock, Lead, NewsItem, Page, ResourceId, Review, ScenarioItem,
    Schedule, ServiceRequest, Services,
};
