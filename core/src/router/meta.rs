//! Per-route document metadata.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::RouteInfo;

/// Computes a metadata string from the matched route.
pub type MetaResolver = Arc<dyn Fn(&RouteInfo) -> String + Send + Sync>;

/// A metadata field: either fixed text or computed per navigation.
#[derive(Clone)]
pub enum MetaValue {
    Literal(String),
    Resolver(MetaResolver),
}

impl MetaValue {
    pub fn literal(text: impl Into<String>) -> Self {
        MetaValue::Literal(text.into())
    }

    pub fn resolver<F>(f: F) -> Self
    where
        F: Fn(&RouteInfo) -> String + Send + Sync + 'static,
    {
        MetaValue::Resolver(Arc::new(f))
    }

    pub fn resolve(&self, route: &RouteInfo) -> String {
        match self {
            MetaValue::Literal(text) => text.clone(),
            MetaValue::Resolver(f) => f(route),
        }
    }
}

impl fmt::Debug for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            MetaValue::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(text: &str) -> Self {
        MetaValue::literal(text)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteMeta {
    pub title: Option<MetaValue>,
    pub description: Option<MetaValue>,
    pub keywords: Option<MetaValue>,
}

impl RouteMeta {
    pub fn new(
        title: impl Into<MetaValue>,
        description: impl Into<MetaValue>,
        keywords: impl Into<MetaValue>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            keywords: Some(keywords.into()),
        }
    }

    /// Evaluate every field for `route`. Missing or blank values take the
    /// site default; the canonical link is `base_url` + full path.
    pub fn resolve(&self, route: &RouteInfo, site: &SiteMeta) -> ResolvedMeta {
        let pick = |value: &Option<MetaValue>, default: &str| {
            value
                .as_ref()
                .map(|v| v.resolve(route))
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        ResolvedMeta {
            title: pick(&self.title, &site.default_title),
            description: pick(&self.description, &site.default_description),
            keywords: pick(&self.keywords, &site.default_keywords),
            canonical: format!("{}{}", site.base_url, route.full_path),
        }
    }
}

/// Site-wide constants used for canonical links and fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMeta {
    pub base_url: String,
    pub default_title: String,
    pub default_description: String,
    pub default_keywords: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            base_url: "https://novoe-konakovo.ru".to_string(),
            default_title: "Новое Конаково — отдых на природе".to_string(),
            default_description: "Новое Конаково — отдых на природе.".to_string(),
            default_keywords: "Новое Конаково, отдых, природа".to_string(),
        }
    }
}

/// Metadata ready to be written to the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: String,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn route(full_path: &str) -> RouteInfo {
        RouteInfo {
            name: "test".to_string(),
            path: full_path.to_string(),
            full_path: full_path.to_string(),
            params: HashMap::from([("slug".to_string(), "winter".to_string())]),
            query: String::new(),
            hash: String::new(),
            redirected_from: None,
        }
    }

    #[test]
    fn literal_and_resolver_values() {
        let meta = RouteMeta {
            title: Some(MetaValue::resolver(|r| format!("News {}", r.params["slug"]))),
            description: Some("Fixed".into()),
            keywords: None,
        };
        let resolved = meta.resolve(&route("/news/winter"), &SiteMeta::default());
        assert_eq!(resolved.title, "News winter");
        assert_eq!(resolved.description, "Fixed");
        assert_eq!(resolved.keywords, "Новое Конаково, отдых, природа");
        assert_eq!(resolved.canonical, "https://novoe-konakovo.ru/news/winter");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let meta = RouteMeta::new("", MetaValue::resolver(|_| String::new()), " ");
        let site = SiteMeta::default();
        let resolved = meta.resolve(&route("/"), &site);
        assert_eq!(resolved.title, site.default_title);
        assert_eq!(resolved.description, site.default_description);
        assert_eq!(resolved.keywords, site.default_keywords);
    }

    #[test]
    fn resolver_debug_is_opaque() {
        let value = MetaValue::resolver(|_| "x".to_string());
        assert_eq!(format!("{value:?}"), "Resolver(..)");
    }
}
