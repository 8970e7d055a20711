//! Normalized records and submission payloads for the site API.
//!
//! # Design
//! Read-side records are never deserialized directly from the wire. Each one
//! is built by a `from_json` constructor that walks a `serde_json::Value` and
//! coerces every field with the helpers in `normalize`, so a missing or
//! mistyped field becomes a default instead of a parse failure. The records
//! still derive `Serialize` so a host can hand them to its view layer as JSON.
//!
//! Write-side payloads mirror the backend serializers and are plain serde
//! structs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::ApiConfig;
use crate::normalize;

/// Identifier as the backend sends it: any JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(serde_json::Number),
    Text(String),
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        ResourceId::Number(id.into())
    }
}

/// An article or video post. `content_type` is `"article"` unless the
/// backend says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub slug: String,
    pub preview_image: String,
    pub preview_description: String,
    pub content: String,
    pub content_type: String,
    pub video_url: String,
    pub created_at: Option<String>,
}

impl Article {
    pub const DEFAULT_CONTENT_TYPE: &'static str = "article";

    pub fn from_json(item: &Value, config: &ApiConfig) -> Self {
        Self {
            title: normalize::text(item.get("title")),
            slug: normalize::text(item.get("slug")),
            preview_image: config.absolute_url(&normalize::text(item.get("preview_image"))),
            preview_description: normalize::text(item.get("preview_description")),
            content: normalize::text(item.get("content")),
            content_type: normalize::text_or(item.get("content_type"), Self::DEFAULT_CONTENT_TYPE),
            video_url: normalize::text(item.get("video_url")),
            created_at: normalize::optional_text(item.get("created_at")),
        }
    }

    pub fn is_video(&self) -> bool {
        self.content_type == "video"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: Option<ResourceId>,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image: String,
    pub published_date: Option<String>,
    /// Body paragraphs; the list endpoint omits them, so it is often empty.
    pub content: Vec<String>,
}

impl NewsItem {
    pub fn from_json(item: &Value, config: &ApiConfig) -> Self {
        Self {
            id: normalize::id(item.get("id")),
            title: normalize::text(item.get("title")),
            slug: normalize::text(item.get("slug")),
            description: normalize::text(item.get("description")),
            image: config.absolute_url(&normalize::text(item.get("image"))),
            published_date: normalize::optional_text(item.get("published_date")),
            content: normalize::paragraphs(item.get("content")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ResourceId,
    pub name: String,
    pub event_name: String,
    pub rating: f64,
    pub text: String,
    pub date: Option<String>,
    pub avatar: String,
}

impl Review {
    /// `index` is the position in the response list and seeds `review-{index}`
    /// when the backend sent no id.
    pub fn from_json(item: &Value, index: usize, config: &ApiConfig) -> Self {
        Self {
            id: normalize::id(item.get("id"))
                .unwrap_or_else(|| ResourceId::Text(format!("review-{index}"))),
            name: normalize::text(item.get("name")),
            event_name: normalize::text(item.get("event_name")),
            rating: normalize::number(item.get("rating")),
            text: normalize::text(item.get("text")),
            date: normalize::optional_text(item.get("date")),
            avatar: config.absolute_url(&normalize::text(item.get("avatar"))),
        }
    }
}

/// A CMS page. Everything the backend sends besides `sections` and `gallery`
/// is kept in `fields` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub sections: Vec<Value>,
    /// Image URLs from the gallery entries; entries without an image are dropped.
    pub gallery: Vec<String>,
}

impl Page {
    pub fn from_json(data: &Value, config: &ApiConfig) -> Self {
        let mut fields = match data {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        let sections = match fields.remove("sections") {
            Some(Value::Array(sections)) => sections,
            _ => Vec::new(),
        };
        let gallery = match fields.remove("gallery") {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| normalize::text(entry.get("image")))
                .filter(|image| !image.is_empty())
                .map(|image| config.absolute_url(&image))
                .collect(),
            _ => Vec::new(),
        };
        Self {
            fields,
            sections,
            gallery,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// The active hero banner of the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroBlock {
    pub id: Option<ResourceId>,
    pub title: String,
    pub description: String,
    pub background_image: String,
    pub avatar: String,
}

impl HeroBlock {
    pub fn from_json(item: &Value, config: &ApiConfig) -> Self {
        Self {
            id: normalize::id(item.get("id")),
            title: normalize::text(item.get("title")),
            description: normalize::text(item.get("description")),
            background_image: config.absolute_url(&normalize::text(item.get("background_image"))),
            avatar: config.absolute_url(&normalize::text(item.get("avatar"))),
        }
    }
}

/// Schedule payload (months grouping days and events), passed through as-is.
pub type Schedule = Value;

/// Service catalogue payload (services with children and tariffs), passed through as-is.
pub type Services = Value;

/// One line of a day scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioItem {
    pub title: String,
    pub price: f64,
    #[serde(default = "one")]
    pub quantity: u32,
}

/// A visitor-assembled plan for a day, submitted for a callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayScenario {
    pub name: String,
    pub contact: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub guests_count: u32,
    #[serde(default)]
    pub comment: String,
    pub total_price: f64,
    pub items: Vec<ScenarioItem>,
}

/// A booking request for a single service. Price is computed server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub name: String,
    pub contact: String,
    pub service_slug: String,
    #[serde(default = "one")]
    pub quantity: u32,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<String>,
}

/// A free-form contact request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub contact: String,
    pub message: String,
}

fn one() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::new("http://x")
    }

    #[test]
    fn article_fills_defaults_for_empty_object() {
        let article = Article::from_json(&json!({}), &config());
        assert_eq!(article.title, "");
        assert_eq!(article.preview_image, "");
        assert_eq!(article.content_type, "article");
        assert!(article.created_at.is_none());
        assert!(!article.is_video());
    }

    #[test]
    fn article_absolutizes_preview_image() {
        let article = Article::from_json(
            &json!({"title": "T", "preview_image": "/media/a.jpg", "content_type": "video"}),
            &config(),
        );
        assert_eq!(article.preview_image, "http://x/media/a.jpg");
        assert!(article.is_video());
    }

    #[test]
    fn news_keeps_numeric_id_and_filters_paragraphs() {
        let item = NewsItem::from_json(
            &json!({"id": 3, "image": "news/1.png", "content": ["a", "", "b"]}),
            &config(),
        );
        assert_eq!(item.id, Some(ResourceId::from(3)));
        assert_eq!(item.image, "http://x/news/1.png");
        assert_eq!(item.content, vec!["a", "b"]);
    }

    #[test]
    fn review_synthesizes_id_from_index() {
        let review = Review::from_json(&json!({"name": "Anna", "rating": "5"}), 2, &config());
        assert_eq!(review.id, ResourceId::Text("review-2".into()));
        assert_eq!(review.rating, 5.0);
        assert_eq!(review.avatar, "");
    }

    #[test]
    fn page_splits_sections_and_gallery() {
        let page = Page::from_json(
            &json!({
                "title": "About",
                "slug": "about",
                "sections": [{"title": "One"}],
                "gallery": [{"image": "/g/1.jpg"}, {"image": null}, {"order": 3}]
            }),
            &config(),
        );
        assert_eq!(page.field("title"), Some(&json!("About")));
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.gallery, vec!["http://x/g/1.jpg"]);
        assert!(page.field("gallery").is_none());
    }

    #[test]
    fn page_from_non_object_is_empty() {
        let page = Page::from_json(&json!(null), &config());
        assert_eq!(page, Page::default());
    }

    #[test]
    fn page_serializes_flat() {
        let page = Page::from_json(&json!({"title": "About"}), &config());
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value, json!({"title": "About", "sections": [], "gallery": []}));
    }

    #[test]
    fn service_request_defaults_quantity() {
        let request: ServiceRequest = serde_json::from_value(json!({
            "name": "Ivan",
            "contact": "+7",
            "service_slug": "moose"
        }))
        .unwrap();
        assert_eq!(request.quantity, 1);
        assert!(request.preferred_date.is_none());
    }
}
