//! Executing built requests.
//!
//! `Transport` is the seam between the pure client and whatever owns the
//! network. `SiteApi` pairs a `SiteClient` with a transport so callers get
//! one call per operation: build, execute, parse.

use serde_json::Value;

use crate::client::SiteClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{
    Article, DayScenario, HeroBlock, Lead, NewsItem, Page, Review, Schedule, ServiceRequest,
    Services,
};

/// Executes one HTTP round-trip.
///
/// Implementations must return non-2xx responses as `Ok`; status
/// interpretation belongs to the client.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).execute(request)
    }
}

/// One call per site API operation. Every call issues at most one request.
#[derive(Debug, Clone)]
pub struct SiteApi<T> {
    client: SiteClient,
    transport: T,
}

impl<T: Transport> SiteApi<T> {
    pub fn new(client: SiteClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &SiteClient {
        &self.client
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport
            .execute(request)
            .map_err(|e| ApiError::Transport(Box::new(e)))
    }

    pub fn articles(&self) -> Result<Vec<Article>, ApiError> {
        let response = self.send(self.client.build_list_articles())?;
        self.client.parse_list_articles(response)
    }

    pub fn article(&self, slug: &str) -> Result<Article, ApiError> {
        let response = self.send(self.client.build_get_article(slug)?)?;
        self.client.parse_get_article(response)
    }

    pub fn news(&self) -> Result<Vec<NewsItem>, ApiError> {
        let response = self.send(self.client.build_list_news())?;
        self.client.parse_list_news(response)
    }

    pub fn news_item(&self, slug: &str) -> Result<NewsItem, ApiError> {
        let response = self.send(self.client.build_get_news(slug)?)?;
        self.client.parse_get_news(response)
    }

    pub fn page(&self, slug: &str) -> Result<Page, ApiError> {
        let response = self.send(self.client.build_get_page(slug)?)?;
        self.client.parse_get_page(response)
    }

    pub fn reviews(&self) -> Result<Vec<Review>, ApiError> {
        let response = self.send(self.client.build_list_reviews())?;
        self.client.parse_list_reviews(response)
    }

    pub fn schedule(&self) -> Result<Schedule, ApiError> {
        let response = self.send(self.client.build_get_schedule())?;
        self.client.parse_get_schedule(response)
    }

    pub fn services(&self) -> Result<Services, ApiError> {
        let response = self.send(self.client.build_list_services())?;
        self.client.parse_list_services(response)
    }

    pub fn hero(&self) -> Result<Option<HeroBlock>, ApiError> {
        let response = self.send(self.client.build_get_hero())?;
        self.client.parse_get_hero(response)
    }

    pub fn create_day_scenario(&self, input: &DayScenario) -> Result<Value, ApiError> {
        let response = self.send(self.client.build_create_day_scenario(input)?)?;
        self.client.parse_create_day_scenario(response)
    }

    pub fn create_service_request(&self, input: &ServiceRequest) -> Result<Value, ApiError> {
        let response = self.send(self.client.build_create_service_request(input)?)?;
        self.client.parse_create_service_request(response)
    }

    pub fn create_lead(&self, input: &Lead) -> Result<Value, ApiError> {
        let response = self.send(self.client.build_create_lead(input)?)?;
        self.client.parse_create_lead(response)
    }
}

#[cfg(feature = "ureq")]
pub use self::blocking::UreqTransport;

#[cfg(feature = "ureq")]
mod blocking {
    use super::Transport;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Blocking transport on a shared `ureq` agent.
    ///
    /// 4xx/5xx are returned as data rather than `Err`, so the client can
    /// read validation bodies.
    #[derive(Clone)]
    pub struct UreqTransport {
        agent: ureq::Agent,
    }

    impl std::fmt::Debug for UreqTransport {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("UreqTransport").finish_non_exhaustive()
        }
    }

    impl UreqTransport {
        pub fn new() -> Self {
            let agent = ureq::Agent::config_builder()
                .http_status_as_error(false)
                .build()
                .new_agent();
            Self { agent }
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Transport for UreqTransport {
        type Error = ureq::Error;

        fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ureq::Error> {
            let mut response = match (req.method, req.body) {
                (HttpMethod::Get, _) => {
                    let mut builder = self.agent.get(&req.url);
                    for (name, value) in &req.headers {
                        builder = builder.header(name, value);
                    }
                    builder.call()?
                }
                (HttpMethod::Post, body) => {
                    let mut builder = self.agent.post(&req.url);
                    for (name, value) in &req.headers {
                        builder = builder.header(name, value);
                    }
                    match body {
                        Some(body) => builder.send(body.as_bytes())?,
                        None => builder.send_empty()?,
                    }
                }
            };

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.as_str().to_string(), value.to_string()))
                })
                .collect();
            let body = response.body_mut().read_to_string()?;

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fmt;

    use super::*;
    use crate::error::Resource;

    #[derive(Debug)]
    struct Offline;

    impl fmt::Display for Offline {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("network unreachable")
        }
    }

    impl std::error::Error for Offline {}

    /// Replays canned responses and records every request it was handed.
    struct Scripted {
        responses: RefCell<Vec<HttpResponse>>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl Scripted {
        fn new(responses: Vec<HttpResponse>) -> Self {
            Self {
                responses: RefCell::new(responses),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for Scripted {
        type Error = Offline;

        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Offline> {
            self.seen.borrow_mut().push(request);
            let mut responses = self.responses.borrow_mut();
            if responses.is_empty() {
                return Err(Offline);
            }
            Ok(responses.remove(0))
        }
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn blank_slug_issues_no_request() {
        let transport = Scripted::new(vec![ok("{}")]);
        let api = SiteApi::new(SiteClient::default(), &transport);
        let err = api.article("  ").unwrap_err();
        assert!(matches!(err, ApiError::MissingSlug(Resource::ArticleDetail)));
        assert!(transport.seen.borrow().is_empty());
    }

    #[test]
    fn transport_failure_propagates_unchanged() {
        let transport = Scripted::new(Vec::new());
        let api = SiteApi::new(SiteClient::default(), &transport);
        let err = api.reviews().unwrap_err();
        assert_eq!(err.to_string(), "network unreachable");
        let ApiError::Transport(inner) = err else {
            panic!("expected transport error");
        };
        assert!(inner.downcast_ref::<Offline>().is_some());
    }

    #[test]
    fn each_call_issues_exactly_one_request() {
        let transport = Scripted::new(vec![ok("[]"), ok(r#"{"results":[{"title":"N"}]}"#)]);
        let api = SiteApi::new(SiteClient::with_origin("http://x"), &transport);
        assert!(api.articles().unwrap().is_empty());
        assert_eq!(api.news().unwrap()[0].title, "N");
        let urls: Vec<_> = transport.seen.borrow().iter().map(|r| r.url.clone()).collect();
        assert_eq!(urls, vec!["http://x/api/articles/", "http://x/api/news/"]);
    }
}
