//! Path → view routing with per-route document metadata.
//!
//! # Design
//! `Router<V>` is a static, ordered route table: the first matching entry
//! wins. An entry either names a view (any host type `V`, typically a
//! handle the host loads lazily) with its metadata, or redirects to another
//! path. `Navigator` owns a router plus an injected `DocumentHead`; each
//! completed navigation resolves the route's metadata and applies it to the
//! head, then reports where to scroll.

pub mod head;
pub mod meta;
pub mod pattern;
pub mod scroll;
pub mod site;

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use self::head::DocumentHead;
use self::meta::{ResolvedMeta, RouteMeta, SiteMeta};
use self::pattern::PathPattern;
use self::scroll::{scroll_target, ScrollPosition, ScrollTarget};

/// Longest redirect chain followed before giving up.
const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("route not found: {0}")]
    NotFound(String),
    #[error("redirect loop while resolving {0}")]
    RedirectLoop(String),
}

/// The matched location, as seen by metadata resolvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    pub name: String,
    /// Normalized path: leading slash, no trailing slash (except `/`).
    pub path: String,
    /// `path` plus query and hash, as used in the canonical link.
    pub full_path: String,
    pub params: HashMap<String, String>,
    /// Includes the leading `?` when present.
    pub query: String,
    /// Includes the leading `#` when present.
    pub hash: String,
    /// Path originally requested when a redirect rule was followed.
    pub redirected_from: Option<String>,
}

#[derive(Debug, Clone)]
enum Target<V> {
    View { name: String, view: V, meta: RouteMeta },
    Redirect(String),
}

#[derive(Debug, Clone)]
struct Route<V> {
    pattern: PathPattern,
    target: Target<V>,
}

#[derive(Debug, Clone)]
pub struct RouteMatch<V> {
    pub info: RouteInfo,
    pub view: V,
    pub meta: RouteMeta,
}

#[derive(Debug, Clone)]
pub struct Router<V> {
    routes: Vec<Route<V>>,
}

impl<V> Default for Router<V> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<V: Clone> Router<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, name: &str, pattern: &str, view: V, meta: RouteMeta) -> Self {
        self.routes.push(Route {
            pattern: PathPattern::new(pattern),
            target: Target::View {
                name: name.to_string(),
                view,
                meta,
            },
        });
        self
    }

    /// Query and hash of the original location survive the redirect.
    pub fn redirect(mut self, pattern: &str, to: &str) -> Self {
        self.routes.push(Route {
            pattern: PathPattern::new(pattern),
            target: Target::Redirect(to.to_string()),
        });
        self
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn has_route(&self, name: &str) -> bool {
        self.routes
            .iter()
            .any(|r| matches!(&r.target, Target::View { name: n, .. } if n == name))
    }

    /// Resolve `location` (`/path?query#hash`), following redirects.
    pub fn resolve(&self, location: &str) -> Result<RouteMatch<V>, RouterError> {
        let (mut path, query, hash) = split_location(location);
        let mut redirected_from = None;

        for _ in 0..=MAX_REDIRECTS {
            let (route, params) = self
                .routes
                .iter()
                .find_map(|route| route.pattern.matches(&path).map(|params| (route, params)))
                .ok_or_else(|| RouterError::NotFound(path.clone()))?;

            match &route.target {
                Target::Redirect(to) => {
                    debug!(from = %path, to = %to, "following redirect");
                    redirected_from.get_or_insert_with(|| path.clone());
                    path = normalize_path(to);
                }
                Target::View { name, view, meta } => {
                    let full_path = format!("{path}{query}{hash}");
                    return Ok(RouteMatch {
                        info: RouteInfo {
                            name: name.clone(),
                            path,
                            full_path,
                            params,
                            query,
                            hash,
                            redirected_from,
                        },
                        view: view.clone(),
                        meta: meta.clone(),
                    });
                }
            }
        }
        Err(RouterError::RedirectLoop(location.to_string()))
    }
}

/// How a navigation was triggered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationKind {
    Push,
    Replace,
    /// Back/forward; carries the position saved with the history entry.
    Pop { saved: Option<ScrollPosition> },
}

/// Result of a completed navigation.
#[derive(Debug, Clone)]
pub struct Navigated<V> {
    pub route: RouteMatch<V>,
    pub meta: ResolvedMeta,
    pub scroll: ScrollTarget,
}

/// A router bound to a document head.
#[derive(Debug)]
pub struct Navigator<V, H> {
    router: Router<V>,
    site: SiteMeta,
    head: H,
    current: Option<RouteMatch<V>>,
}

impl<V: Clone, H: DocumentHead> Navigator<V, H> {
    pub fn new(router: Router<V>, site: SiteMeta, head: H) -> Self {
        Self {
            router,
            site,
            head,
            current: None,
        }
    }

    pub fn head(&self) -> &H {
        &self.head
    }

    pub fn current(&self) -> Option<&RouteMatch<V>> {
        self.current.as_ref()
    }

    /// Resolve `location`, write its metadata to the head, and pick a scroll target.
    ///
    /// On error nothing changes: the head and current route stay as they were.
    pub fn navigate(
        &mut self,
        location: &str,
        kind: NavigationKind,
    ) -> Result<Navigated<V>, RouterError> {
        let route = self.router.resolve(location)?;
        let meta = route.meta.resolve(&route.info, &self.site);
        self.head.apply(&meta);

        let saved = match kind {
            NavigationKind::Pop { saved } => saved,
            NavigationKind::Push | NavigationKind::Replace => None,
        };
        let scroll = scroll_target(&route.info.hash, saved);
        debug!(
            path = %route.info.full_path,
            route = %route.info.name,
            ?kind,
            "navigation complete"
        );

        self.current = Some(route.clone());
        Ok(Navigated {
            route,
            meta,
            scroll,
        })
    }
}

/// Split `/a/b?x=1#top` into normalized path, `?x=1` and `#top`.
fn split_location(location: &str) -> (String, String, String) {
    let (rest, hash) = match location.find('#') {
        Some(i) => (&location[..i], &location[i..]),
        None => (location, ""),
    };
    let (path, query) = match rest.find('?') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };
    (normalize_path(path), query.to_string(), hash.to_string())
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    format!("/{trimmed}")
}

#[cfg(test)]
mod tests {
    use super::head::MemoryHead;
    use super::*;

    fn router() -> Router<&'static str> {
        Router::new()
            .route("home", "/", "Home", RouteMeta::new("Home", "Home page", "home"))
            .route("news-single", "/news/:slug", "News", RouteMeta::default())
            .redirect("/old", "/news/moved")
            .redirect("/a", "/b")
            .redirect("/b", "/a")
    }

    #[test]
    fn split_location_parts() {
        assert_eq!(
            split_location("/news/x/?page=2#top"),
            ("/news/x".to_string(), "?page=2".to_string(), "#top".to_string())
        );
        assert_eq!(split_location(""), ("/".to_string(), String::new(), String::new()));
    }

    #[test]
    fn resolve_captures_params() {
        let matched = router().resolve("/news/winter-fest").unwrap();
        assert_eq!(matched.view, "News");
        assert_eq!(matched.info.params["slug"], "winter-fest");
        assert!(matched.info.redirected_from.is_none());
    }

    #[test]
    fn redirect_keeps_query_and_hash() {
        let matched = router().resolve("/old?ref=mail#body").unwrap();
        assert_eq!(matched.info.path, "/news/moved");
        assert_eq!(matched.info.full_path, "/news/moved?ref=mail#body");
        assert_eq!(matched.info.redirected_from.as_deref(), Some("/old"));
    }

    #[test]
    fn unmatched_without_catch_all_is_not_found() {
        let err = router().resolve("/missing").unwrap_err();
        assert_eq!(err, RouterError::NotFound("/missing".to_string()));
    }

    #[test]
    fn redirect_loop_is_detected() {
        assert!(matches!(router().resolve("/a"), Err(RouterError::RedirectLoop(_))));
    }

    #[test]
    fn has_route_by_name() {
        let r = router();
        assert!(r.has_route("home"));
        assert!(!r.has_route("old"));
        assert_eq!(r.route_count(), 5);
    }

    #[test]
    fn navigate_applies_meta_and_falls_back() {
        let mut nav = Navigator::new(router(), SiteMeta::default(), MemoryHead::default());
        let done = nav.navigate("/news/x", NavigationKind::Push).unwrap();
        assert_eq!(done.meta.title, SiteMeta::default().default_title);
        assert_eq!(nav.head().canonical, "https://novoe-konakovo.ru/news/x");
        assert_eq!(done.scroll, ScrollTarget::TopLeft);
        assert_eq!(nav.current().map(|m| m.info.name.as_str()), Some("news-single"));
    }

    #[test]
    fn failed_navigation_leaves_head_untouched() {
        let mut nav = Navigator::new(router(), SiteMeta::default(), MemoryHead::default());
        nav.navigate("/", NavigationKind::Push).unwrap();
        assert!(nav.navigate("/missing", NavigationKind::Push).is_err());
        assert_eq!(nav.head().title, "Home");
        assert_eq!(nav.head().updates, 1);
    }

    #[test]
    fn pop_restores_saved_position() {
        let mut nav = Navigator::new(router(), SiteMeta::default(), MemoryHead::default());
        let saved = ScrollPosition {
            left: 0.0,
            top: 300.0,
        };
        let done = nav
            .navigate("/#top", NavigationKind::Pop { saved: Some(saved) })
            .unwrap();
        assert_eq!(done.scroll, ScrollTarget::Restore(saved));
    }
}
