//! In-memory stand-in for the site's REST API.
//!
//! Serves fixture content on the read endpoints and validates submissions
//! the way the production backend does: a `400` whose body maps each field
//! to a list of messages.

pub mod fixtures;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

const REQUIRED: &str = "Обязательное поле.";
const BLANK: &str = "Это поле не может быть пустым.";

/// Accepted submissions, newest last.
#[derive(Debug, Default)]
pub struct Submissions {
    pub day_scenarios: Vec<Value>,
    pub service_requests: Vec<Value>,
    pub leads: Vec<Value>,
}

pub type Db = Arc<RwLock<Submissions>>;

type ApiResult = Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)>;

pub fn app() -> Router {
    app_with_db(Db::default())
}

/// Same as [`app`], sharing `db` so tests can inspect submissions.
pub fn app_with_db(db: Db) -> Router {
    Router::new()
        .route("/api/articles/", get(list_articles))
        .route("/api/articles/{slug}/", get(get_article))
        .route("/api/news/", get(list_news))
        .route("/api/news/{slug}/", get(get_news))
        .route("/api/pages/{slug}/", get(get_page))
        .route("/api/reviews/", get(list_reviews))
        .route("/api/schedule/", get(get_schedule))
        .route("/api/services/", get(list_services))
        .route("/api/hero/", get(get_hero))
        .route("/api/day-scenarios/", post(create_day_scenario))
        .route("/api/service-requests/", post(create_service_request))
        .route("/api/leads/", post(create_lead))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock site API listening");
    }
    axum::serve(listener, app()).await
}

fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Страница не найдена."})))
}

fn find_by_slug(items: Vec<Value>, slug: &str) -> Option<Value> {
    items.into_iter().find(|item| item["slug"] == slug)
}

// --- reads ---

/// Bare array, like a non-paginated `ListAPIView`.
async fn list_articles() -> Json<Value> {
    let list: Vec<Value> = fixtures::articles()
        .into_iter()
        .map(|mut article| {
            if let Some(map) = article.as_object_mut() {
                map.remove("content");
                map.remove("video_url");
            }
            article
        })
        .collect();
    Json(Value::Array(list))
}

async fn get_article(Path(slug): Path<String>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    find_by_slug(fixtures::articles(), &slug).map(Json).ok_or_else(not_found)
}

/// Paginated envelope.
async fn list_news() -> Json<Value> {
    let list: Vec<Value> = fixtures::news()
        .into_iter()
        .map(|mut item| {
            if let Some(map) = item.as_object_mut() {
                map.remove("content");
            }
            item
        })
        .collect();
    Json(json!({
        "count": list.len(),
        "next": null,
        "previous": null,
        "results": list,
    }))
}

async fn get_news(Path(slug): Path<String>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    find_by_slug(fixtures::news(), &slug).map(Json).ok_or_else(not_found)
}

async fn get_page(Path(slug): Path<String>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    find_by_slug(fixtures::pages(), &slug).map(Json).ok_or_else(not_found)
}

async fn list_reviews() -> Json<Value> {
    Json(Value::Array(fixtures::reviews()))
}

async fn get_schedule() -> Json<Value> {
    Json(fixtures::schedule())
}

async fn list_services() -> Json<Value> {
    Json(Value::Array(fixtures::services()))
}

async fn get_hero() -> Json<Value> {
    Json(fixtures::hero())
}

// --- submissions ---

/// Collects DRF-style field errors.
#[derive(Default)]
struct FieldErrors(Map<String, Value>);

impl FieldErrors {
    fn add(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), json!([message]));
    }

    fn require_text(&mut self, body: &Value, field: &str) {
        match body.get(field) {
            None | Some(Value::Null) => self.add(field, REQUIRED),
            Some(Value::String(s)) if s.trim().is_empty() => self.add(field, BLANK),
            _ => {}
        }
    }

    fn into_result(self) -> Result<(), (StatusCode, Json<Value>)> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err((StatusCode::BAD_REQUEST, Json(Value::Object(self.0))))
        }
    }
}

/// A single-field rejection raised after field validation passed.
fn reject(field: &str, message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ field: [message] })))
}

fn decimal(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn money(amount: f64) -> Value {
    Value::String(format!("{amount:.2}"))
}

async fn create_day_scenario(State(db): State<Db>, Json(body): Json<Value>) -> ApiResult {
    let mut errors = FieldErrors::default();
    for field in ["name", "contact", "date"] {
        errors.require_text(&body, field);
    }
    if body.get("guests_count").and_then(Value::as_u64).is_none() {
        errors.add("guests_count", REQUIRED);
    }
    match body.get("items").and_then(Value::as_array) {
        Some(items) if !items.is_empty() => {}
        Some(_) => errors.add("items", "Добавьте хотя бы один элемент сценария."),
        None => errors.add("items", REQUIRED),
    }
    errors.into_result()?;

    db.write().await.day_scenarios.push(body.clone());
    Ok((StatusCode::CREATED, Json(body)))
}

async fn create_service_request(State(db): State<Db>, Json(body): Json<Value>) -> ApiResult {
    let mut errors = FieldErrors::default();
    for field in ["name", "contact", "service_slug"] {
        errors.require_text(&body, field);
    }
    let quantity = match body.get("quantity") {
        None | Some(Value::Null) => 1,
        Some(value) => match value.as_u64() {
            Some(q) if q >= 1 => q,
            _ => {
                errors.add("quantity", "Убедитесь, что это значение больше либо равно 1.");
                1
            }
        },
    };
    errors.into_result()?;

    let slug = body["service_slug"].as_str().unwrap_or_default();
    let Some(service) = find_by_slug(fixtures::services(), slug) else {
        return Err(reject("service_slug", "Услуга не найдена."));
    };
    let price = decimal(&service["price"]).or_else(|| {
        service["tariffs"]
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|tariff| decimal(&tariff["price"]))
            .reduce(f64::min)
    });
    let Some(price) = price else {
        return Err(reject("service_slug", "Для услуги не задана стоимость."));
    };

    let created = json!({
        "name": body["name"],
        "contact": body["contact"],
        "service_title": service["title"],
        "service_slug": service["slug"],
        "price": money(price),
        "total_price": money(price * quantity as f64),
        "message": body.get("message").cloned().unwrap_or_else(|| json!("")),
        "preferred_date": body.get("preferred_date").cloned().unwrap_or(Value::Null),
    });
    db.write().await.service_requests.push(created.clone());
    Ok((StatusCode::CREATED, Json(created)))
}

async fn create_lead(State(db): State<Db>, Json(body): Json<Value>) -> ApiResult {
    let mut errors = FieldErrors::default();
    for field in ["name", "contact", "message"] {
        errors.require_text(&body, field);
    }
    errors.into_result()?;

    let created = json!({
        "name": body["name"],
        "contact": body["contact"],
        "message": body["message"],
    });
    db.write().await.leads.push(created.clone());
    Ok((StatusCode::CREATED, Json(created)))
}
