//! Stateless HTTP request builder and response parser for the site API.
//!
//! # Design
//! `SiteClient` holds only an `ApiConfig` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; the caller executes the round-trip in between.
//!
//! Reads are forgiving about shape and strict about status: a non-2xx
//! response is an error, but a 2xx body of the wrong shape normalizes to
//! defaults (an empty list, an empty record). Submissions surface the first
//! validation message from the backend, or a fixed message per operation.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{ApiError, Resource};
use crate::http::{HttpRequest, HttpResponse};
use crate::normalize;
use crate::types::{
    Article, DayScenario, HeroBlock, Lead, NewsItem, Page, Review, Schedule, ServiceRequest,
    Services,
};

const ARTICLES_PATH: &str = "/api/articles/";
const NEWS_PATH: &str = "/api/news/";
const PAGES_PATH: &str = "/api/pages/";
const REVIEWS_PATH: &str = "/api/reviews/";
const SCHEDULE_PATH: &str = "/api/schedule/";
const SERVICES_PATH: &str = "/api/services/";
const HERO_PATH: &str = "/api/hero/";
const DAY_SCENARIOS_PATH: &str = "/api/day-scenarios/";
const SERVICE_REQUESTS_PATH: &str = "/api/service-requests/";
const LEADS_PATH: &str = "/api/leads/";

pub const DAY_SCENARIO_FALLBACK: &str = "Не удалось отправить сценарий. Попробуйте снова.";
pub const SERVICE_REQUEST_FALLBACK: &str = "Не удалось отправить заявку. Попробуйте снова.";
pub const LEAD_FALLBACK: &str = "Не удалось отправить сообщение. Попробуйте снова.";

/// Synchronous, stateless client for the site API.
#[derive(Debug, Clone, Default)]
pub struct SiteClient {
    config: ApiConfig,
}

impl SiteClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Shorthand for `SiteClient::new(ApiConfig::new(origin))`.
    pub fn with_origin(origin: &str) -> Self {
        Self::new(ApiConfig::new(origin))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // --- articles ---

    pub fn build_list_articles(&self) -> HttpRequest {
        self.get(ARTICLES_PATH)
    }

    pub fn build_get_article(&self, slug: &str) -> Result<HttpRequest, ApiError> {
        self.get_detail(Resource::ArticleDetail, ARTICLES_PATH, slug)
    }

    pub fn parse_list_articles(&self, response: HttpResponse) -> Result<Vec<Article>, ApiError> {
        self.parse_list(Resource::Articles, response, |_, item| {
            Article::from_json(item, &self.config)
        })
    }

    pub fn parse_get_article(&self, response: HttpResponse) -> Result<Article, ApiError> {
        let payload = read_json(Resource::ArticleDetail, &response)?;
        Ok(Article::from_json(&payload, &self.config))
    }

    // --- news ---

    pub fn build_list_news(&self) -> HttpRequest {
        self.get(NEWS_PATH)
    }

    pub fn build_get_news(&self, slug: &str) -> Result<HttpRequest, ApiError> {
        self.get_detail(Resource::NewsDetail, NEWS_PATH, slug)
    }

    pub fn parse_list_news(&self, response: HttpResponse) -> Result<Vec<NewsItem>, ApiError> {
        self.parse_list(Resource::NewsList, response, |_, item| {
            NewsItem::from_json(item, &self.config)
        })
    }

    pub fn parse_get_news(&self, response: HttpResponse) -> Result<NewsItem, ApiError> {
        let payload = read_json(Resource::NewsDetail, &response)?;
        Ok(NewsItem::from_json(&payload, &self.config))
    }

    // --- pages ---

    pub fn build_get_page(&self, slug: &str) -> Result<HttpRequest, ApiError> {
        self.get_detail(Resource::Page, PAGES_PATH, slug)
    }

    pub fn parse_get_page(&self, response: HttpResponse) -> Result<Page, ApiError> {
        let payload = read_json(Resource::Page, &response)?;
        Ok(Page::from_json(&payload, &self.config))
    }

    // --- reviews ---

    pub fn build_list_reviews(&self) -> HttpRequest {
        self.get(REVIEWS_PATH)
    }

    pub fn parse_list_reviews(&self, response: HttpResponse) -> Result<Vec<Review>, ApiError> {
        self.parse_list(Resource::Reviews, response, |index, item| {
            Review::from_json(item, index, &self.config)
        })
    }

    // --- passthrough resources ---

    pub fn build_get_schedule(&self) -> HttpRequest {
        self.get(SCHEDULE_PATH)
    }

    pub fn parse_get_schedule(&self, response: HttpResponse) -> Result<Schedule, ApiError> {
        read_json(Resource::Schedule, &response)
    }

    pub fn build_list_services(&self) -> HttpRequest {
        self.get(SERVICES_PATH)
    }

    pub fn parse_list_services(&self, response: HttpResponse) -> Result<Services, ApiError> {
        read_json(Resource::Services, &response)
    }

    // --- hero ---

    pub fn build_get_hero(&self) -> HttpRequest {
        self.get(HERO_PATH)
    }

    /// `Ok(None)` when no hero block is active (the backend answers 404).
    pub fn parse_get_hero(&self, response: HttpResponse) -> Result<Option<HeroBlock>, ApiError> {
        if response.status == 404 {
            return Ok(None);
        }
        let payload = read_json(Resource::Hero, &response)?;
        Ok(Some(HeroBlock::from_json(&payload, &self.config)))
    }

    // --- submissions ---

    pub fn build_create_day_scenario(&self, input: &DayScenario) -> Result<HttpRequest, ApiError> {
        self.post(Resource::DayScenario, DAY_SCENARIOS_PATH, input)
    }

    pub fn parse_create_day_scenario(&self, response: HttpResponse) -> Result<Value, ApiError> {
        parse_submission(Resource::DayScenario, &response, DAY_SCENARIO_FALLBACK)
    }

    pub fn build_create_service_request(
        &self,
        input: &ServiceRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.post(Resource::ServiceRequest, SERVICE_REQUESTS_PATH, input)
    }

    pub fn parse_create_service_request(&self, response: HttpResponse) -> Result<Value, ApiError> {
        parse_submission(Resource::ServiceRequest, &response, SERVICE_REQUEST_FALLBACK)
    }

    pub fn build_create_lead(&self, input: &Lead) -> Result<HttpRequest, ApiError> {
        self.post(Resource::Lead, LEADS_PATH, input)
    }

    pub fn parse_create_lead(&self, response: HttpResponse) -> Result<Value, ApiError> {
        parse_submission(Resource::Lead, &response, LEAD_FALLBACK)
    }

    // --- shared plumbing ---

    fn get(&self, path: &str) -> HttpRequest {
        let request = HttpRequest::get(self.config.endpoint(path));
        debug!(url = %request.url, "built GET request");
        request
    }

    /// Fails before building anything when the slug is blank.
    fn get_detail(
        &self,
        resource: Resource,
        collection: &str,
        slug: &str,
    ) -> Result<HttpRequest, ApiError> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(ApiError::MissingSlug(resource));
        }
        Ok(self.get(&format!("{collection}{}/", urlencoding::encode(slug))))
    }

    fn post<T: Serialize>(
        &self,
        resource: Resource,
        path: &str,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|source| ApiError::Serialization { resource, source })?;
        let request = HttpRequest::post_json(self.config.endpoint(path), body);
        debug!(url = %request.url, %resource, "built POST request");
        Ok(request)
    }

    fn parse_list<T>(
        &self,
        resource: Resource,
        response: HttpResponse,
        normalize_item: impl Fn(usize, &Value) -> T,
    ) -> Result<Vec<T>, ApiError> {
        let payload = read_json(resource, &response)?;
        let Some(items) = normalize::list_items(&payload) else {
            warn!(%resource, "list response is neither an array nor a results envelope");
            return Ok(Vec::new());
        };
        Ok(items
            .iter()
            .enumerate()
            .map(|(index, item)| normalize_item(index, item))
            .collect())
    }
}

/// Check the status, then parse the body as JSON.
fn read_json(resource: Resource, response: &HttpResponse) -> Result<Value, ApiError> {
    check_status(resource, response)?;
    serde_json::from_str(&response.body)
        .map_err(|source| ApiError::Deserialization { resource, source })
}

fn check_status(resource: Resource, response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        resource,
        status: response.status,
        body: response.body.clone(),
    })
}

fn parse_submission(
    resource: Resource,
    response: &HttpResponse,
    fallback: &str,
) -> Result<Value, ApiError> {
    if !response.is_success() {
        let message = field_error_message(&response.body).unwrap_or_else(|| {
            warn!(%resource, status = response.status, "no field error in rejection body");
            fallback.to_string()
        });
        return Err(ApiError::Rejected {
            resource,
            status: response.status,
            message,
        });
    }
    serde_json::from_str(&response.body)
        .map_err(|source| ApiError::Deserialization { resource, source })
}

/// Pull the first message out of a validation error body shaped like
/// `{"field": ["message", ...], ...}`.
///
/// Fields are scanned in body order; the first one holding a non-empty list
/// wins. Returns `None` for non-JSON bodies, non-objects, and bodies with no
/// such field.
pub fn field_error_message(body: &str) -> Option<String> {
    let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) else {
        return None;
    };
    fields.values().find_map(|value| match value {
        Value::Array(messages) => messages.first().map(|first| match first {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }),
        _ => None,
    })
}
