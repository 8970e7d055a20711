//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes the expected request, a simulated response,
//! and either the normalized result or the error message. Results are
//! compared as typed records, so field order in the vectors is irrelevant.

use konakovo_core::{
    Article, HttpMethod, HttpRequest, HttpResponse, NewsItem, Review, SiteClient,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn check_request(name: &str, origin: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{origin}{}", expected["path"].as_str().unwrap()), "{name}: url");
    assert_eq!(req.header("accept"), Some("application/json"), "{name}: accept");
    assert!(req.body.is_none(), "{name}: body should be None");
}

fn check_outcome<T, E>(name: &str, case: &Value, result: Result<Vec<T>, E>)
where
    T: DeserializeOwned + PartialEq + std::fmt::Debug,
    E: std::fmt::Display + std::fmt::Debug,
{
    if let Some(expected_error) = case.get("expected_error") {
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), expected_error.as_str().unwrap(), "{name}: error");
    } else {
        let items = result.unwrap();
        let expected: Vec<T> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(items, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/lists.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let origin = vectors["origin"].as_str().unwrap();

    let c = SiteClient::with_origin(origin);
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];
        let response = simulated(case);

        match case["resource"].as_str().unwrap() {
            "articles" => {
                check_request(name, origin, &c.build_list_articles(), expected_req);
                check_outcome::<Article, _>(name, case, c.parse_list_articles(response));
            }
            "news" => {
                check_request(name, origin, &c.build_list_news(), expected_req);
                check_outcome::<NewsItem, _>(name, case, c.parse_list_news(response));
            }
            "reviews" => {
                check_request(name, origin, &c.build_list_reviews(), expected_req);
                check_outcome::<Review, _>(name, case, c.parse_list_reviews(response));
            }
            other => panic!("{name}: unknown resource: {other}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Submissions
// ---------------------------------------------------------------------------

#[test]
fn submission_test_vectors() {
    let raw = include_str!("../../test-vectors/submissions.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = SiteClient::with_origin(vectors["origin"].as_str().unwrap());
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let response = simulated(case);

        let result = match case["operation"].as_str().unwrap() {
            "day_scenario" => c.parse_create_day_scenario(response),
            "service_request" => c.parse_create_service_request(response),
            "lead" => c.parse_create_lead(response),
            other => panic!("{name}: unknown operation: {other}"),
        };

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            assert_eq!(err.to_string(), expected_error.as_str().unwrap(), "{name}: message");
        } else {
            assert_eq!(result.unwrap(), case["expected_result"], "{name}: body");
        }
    }
}
