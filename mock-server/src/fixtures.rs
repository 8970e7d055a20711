//! Seed content served by the mock API. Shapes follow the production
//! serializers, including their quirks: relative media paths, a paginated
//! news list, decimal prices as strings.

use serde_json::{json, Value};

pub fn articles() -> Vec<Value> {
    vec![
        json!({
            "title": "Как добраться до Нового Конакова",
            "slug": "how-to-get-here",
            "preview_image": "/media/articles/road.jpg",
            "preview_description": "Маршруты на машине и электричке.",
            "content": "<p>От Москвы около двух часов.</p>",
            "content_type": "article",
            "video_url": "",
            "published_date": "2026-05-02",
            "created_at": "2026-05-01T09:00:00Z"
        }),
        json!({
            "title": "Лоси зимой",
            "slug": "moose-in-winter",
            "preview_image": "https://cdn.novoe-konakovo.ru/moose.jpg",
            "preview_description": "Короткое видео с фермы.",
            "content": "",
            "content_type": "video",
            "video_url": "https://video.example/moose",
            "published_date": null,
            "created_at": "2026-01-15T12:30:00Z"
        }),
    ]
}

pub fn news() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "title": "Открытие летнего сезона",
            "slug": "season-opening",
            "description": "Ждём всех на открытии.",
            "image": "media/news/opening.jpg",
            "published_date": "2026-05-20",
            "content": ["Программа на весь день.", "", "Вход свободный."]
        }),
        json!({
            "id": 2,
            "title": "Новый беговой маршрут",
            "slug": "new-trail",
            "description": "Десять километров вдоль Волги.",
            "image": null,
            "published_date": "2026-06-03",
            "content": ["Старт у главного входа."]
        }),
    ]
}

pub fn pages() -> Vec<Value> {
    vec![json!({
        "title": "Братство Лосей",
        "slug": "brotherhood",
        "subtitle": "Экскурсия на лосиную ферму",
        "hero_image": "/media/pages/moose-hero.jpg",
        "sections": [
            {"title": "Что вас ждёт", "text": "Знакомство с лосями.", "image": null, "order": 1}
        ],
        "gallery": [
            {"image": "/media/pages/g1.jpg", "order": 1},
            {"image": null, "order": 2},
            {"image": "https://cdn.novoe-konakovo.ru/g3.jpg", "order": 3}
        ]
    })]
}

pub fn reviews() -> Vec<Value> {
    vec![
        json!({
            "id": 11,
            "avatar": "/media/reviews/anna.jpg",
            "name": "Анна",
            "event_name": "Братство Лосей",
            "rating": 5,
            "text": "Дети в восторге.",
            "date": "2026-04-12"
        }),
        json!({
            "id": 12,
            "avatar": null,
            "name": "Игорь",
            "event_name": "Беговой клуб",
            "rating": 4,
            "text": "Отличная трасса.",
            "date": "2026-05-30"
        }),
    ]
}

pub fn schedule() -> Value {
    json!([
        {
            "month": "Июнь 2026",
            "year": 2026,
            "month_number": 6,
            "days": [
                {"date": "2026-06-06", "events": [{"time": "10:00", "title": "Пробежка"}]}
            ]
        }
    ])
}

pub fn services() -> Vec<Value> {
    vec![
        json!({
            "title": "Экскурсия в Братство Лосей",
            "slug": "moose",
            "price": "1500.00",
            "children": [],
            "tariffs": []
        }),
        json!({
            "title": "Мастер-классы",
            "slug": "master",
            "price": null,
            "children": [],
            "tariffs": [{"title": "Взрослый", "price": "900.00"}, {"title": "Детский", "price": "600.00"}]
        }),
        json!({
            "title": "Беговые встречи",
            "slug": "running",
            "price": null,
            "children": [],
            "tariffs": []
        }),
    ]
}

pub fn hero() -> Value {
    json!({
        "id": 1,
        "title": "Новое Конаково",
        "description": "Отдых на природе в двух часах от Москвы",
        "background_image": "/media/hero/bg.jpg",
        "avatar": null
    })
}
