//! The site's route table.

use serde::Serialize;

use super::meta::{MetaValue, RouteMeta};
use super::{RouteInfo, Router};

/// Views the host renders. Each maps to one lazily loaded page component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    Home,
    About,
    Volunteer,
    RunningClub,
    Schedule,
    Articles,
    ArticleSingle,
    News,
    NewsSingle,
    ServiceDetail,
    Contacts,
    Privacy,
    Terms,
    Brotherhood,
}

const SITE_SUFFIX: &str = "Новое Конаково";
const SERVICES_TITLE: &str = "Услуги";
const SERVICES_DESCRIPTION: &str = "Форматы отдыха и экскурсии в Новом Конаково";
const SERVICES_KEYWORDS: &str = "услуги, экскурсии, Новое Конаково";

/// Known service slugs and their display titles.
pub const SERVICE_TITLES: &[(&str, &str)] = &[
    ("moose", "Экскурсия в Братство Лосей"),
    ("author", "Авторские программы"),
    ("master", "Мастер-классы"),
    ("running", "Беговые встречи"),
];

/// Title for a `/services/...` page, from the last path segment.
pub fn service_title(slug_path: &str) -> String {
    let Some(key) = slug_path.split('/').rfind(|s| !s.is_empty()) else {
        return SERVICES_TITLE.to_string();
    };
    SERVICE_TITLES
        .iter()
        .find(|(slug, _)| *slug == key)
        .map(|(_, title)| (*title).to_string())
        .unwrap_or_else(|| humanize_slug(key))
}

/// `unknown-thing` → `Unknown Thing`.
///
/// Percent-decodes, turns runs of `-`, `_` and `/` into single spaces, and
/// upper-cases the first letter of each word.
pub fn humanize_slug(slug: &str) -> String {
    let decoded = urlencoding::decode(slug)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| slug.to_string());
    decoded
        .split(|c: char| c == '-' || c == '_' || c == '/' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn page(title: &str, description: &str, keywords: &str) -> RouteMeta {
    RouteMeta::new(title, description, keywords)
}

/// Every public page, the legacy aliases, and a catch-all back to `/`.
pub fn site_router() -> Router<View> {
    let service_detail = RouteMeta {
        title: Some(MetaValue::resolver(|route: &RouteInfo| {
            let slug_path = route.params.get("slugPath").map(String::as_str).unwrap_or_default();
            format!("{} — {SITE_SUFFIX}", service_title(slug_path))
        })),
        description: Some(SERVICES_DESCRIPTION.into()),
        keywords: Some(SERVICES_KEYWORDS.into()),
    };

    Router::new()
        .route(
            "home",
            "/",
            View::Home,
            page(
                "Новое Конаково — отдых на природе",
                "Природный отдых, экскурсии, мероприятия",
                "Новое Конаково, отдых, природа, экскурсии, мероприятия",
            ),
        )
        .route(
            "about",
            "/about",
            View::About,
            page(
                "О проекте — Новое Конаково",
                "О проекте, формате отдыха и мероприятиях в Новом Конаково",
                "о проекте, Новое Конаково",
            ),
        )
        .redirect("/moose", "/brotherhood")
        .route(
            "volunteer",
            "/volunteer",
            View::Volunteer,
            page(
                "Волонтерские программы — Новое Конаково",
                "Волонтерские программы и участие в жизни проекта",
                "волонтерские программы, Новое Конаково",
            ),
        )
        .route(
            "running-club",
            "/running-club",
            View::RunningClub,
            page(
                "Беговой клуб — Новое Конаково",
                "Беговые встречи и тренировки в природной среде",
                "беговой клуб, Новое Конаково",
            ),
        )
        .redirect("/bronze-club", "/running-club")
        .route(
            "schedule",
            "/schedule",
            View::Schedule,
            page(
                "Расписание — Новое Конаково",
                "Актуальное расписание мероприятий и активностей",
                "расписание, мероприятия, Новое Конаково",
            ),
        )
        .route(
            "articles",
            "/articles",
            View::Articles,
            page(
                "Статьи — Новое Конаково",
                "Статьи и материалы о проекте, отдыхе и экскурсиях",
                "статьи, Новое Конаково",
            ),
        )
        .route(
            "video",
            "/video",
            View::Articles,
            page(
                "Видео — Новое Конаково",
                "Видео о природном отдыхе, экскурсиях и мероприятиях",
                "видео, Новое Конаково",
            ),
        )
        .route(
            "article-single",
            "/articles/:slug",
            View::ArticleSingle,
            page(
                "Статья — Новое Конаково",
                "Материал в разделе статей и видео",
                "статья, Новое Конаково",
            ),
        )
        .route(
            "news",
            "/news",
            View::News,
            page(
                "Новости — Новое Конаково",
                "Новости и анонсы проекта Новое Конаково",
                "новости, Новое Конаково",
            ),
        )
        .route(
            "news-single",
            "/news/:slug",
            View::NewsSingle,
            page(
                "Новость — Новое Конаково",
                "Детальная страница новости проекта",
                "новость, Новое Конаково",
            ),
        )
        .route(
            "services",
            "/services",
            View::Home,
            page("Услуги — Новое Конаково", SERVICES_DESCRIPTION, SERVICES_KEYWORDS),
        )
        .route(
            "service-detail",
            "/services/:slugPath(.*)",
            View::ServiceDetail,
            service_detail,
        )
        .route(
            "contacts",
            "/contacts",
            View::Contacts,
            page(
                "Контакты — Новое Конаково",
                "Контакты и способы связи с проектом Новое Конаково",
                "контакты, Новое Конаково",
            ),
        )
        .route(
            "privacy",
            "/privacy",
            View::Privacy,
            page(
                "Политика конфиденциальности — Новое Конаково",
                "Политика конфиденциальности проекта",
                "политика конфиденциальности, Новое Конаково",
            ),
        )
        .route(
            "terms",
            "/terms",
            View::Terms,
            page(
                "Условия использования — Новое Конаково",
                "Условия использования сайта",
                "условия использования, Новое Конаково",
            ),
        )
        .route(
            "brotherhood",
            "/brotherhood",
            View::Brotherhood,
            page(
                "Братство Лосей — Новое Конаково",
                "Экскурсионное направление Братство Лосей",
                "Братство Лосей, Новое Конаково",
            ),
        )
        .redirect("/:pathMatch(.*)*", "/")
}
