mod common;

use axum::body::Bytes;
use axum_test::TestServer;
use serde_json::{Value, json};
use string_analyzer::domain::analyzer::compute_properties;

fn server() -> TestServer {
    TestServer::new(common::create_test_app()).unwrap()
}

async fn seed(server: &TestServer, values: &[&str]) {
    for value in values {
        server
            .post("/strings")
            .json(&json!({ "value": value }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }
}

fn values(json: &Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["value"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_create_string_success() {
    let server = server();

    let response = server
        .post("/strings")
        .json(&json!({ "value": "hello world" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["value"], "hello world");
    assert_eq!(json["id"], json["properties"]["sha256_hash"]);
    assert_eq!(json["properties"]["length"], 11);
    assert_eq!(json["properties"]["is_palindrome"], false);
    assert_eq!(json["properties"]["unique_characters"], 8);
    assert_eq!(json["properties"]["word_count"], 2);
    assert_eq!(json["properties"]["character_frequency_map"]["l"], 3);
    assert_eq!(json["properties"]["character_frequency_map"][" "], 1);
    assert!(json["created_at"].is_string());
}

#[tokio::test]
async fn test_create_string_matches_analyzer() {
    let server = server();
    let value = "A man, a plan, a canal: Panama";

    let response = server.post("/strings").json(&json!({ "value": value })).await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let expected = compute_properties(value);
    let json = response.json::<Value>();
    assert_eq!(json["id"], expected.sha256_hash);
    assert_eq!(json["properties"]["length"], expected.length);
    assert_eq!(json["properties"]["is_palindrome"], true);
    assert_eq!(
        json["properties"]["unique_characters"],
        expected.unique_characters
    );
    assert_eq!(json["properties"]["word_count"], expected.word_count);
    assert_eq!(
        json["properties"]["character_frequency_map"],
        serde_json::to_value(&expected.character_frequency_map).unwrap()
    );
}

#[tokio::test]
async fn test_create_duplicate_string_conflict() {
    let server = server();
    seed(&server, &["racecar"]).await;

    let response = server
        .post("/strings")
        .json(&json!({ "value": "racecar" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_create_blank_string_rejected() {
    let server = server();

    for value in ["", "   ", "\t\n"] {
        let response = server.post("/strings").json(&json!({ "value": value })).await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }
}

#[tokio::test]
async fn test_create_non_string_value_unprocessable() {
    let server = server();

    for body in [json!({ "value": 42 }), json!({ "value": null }), json!({})] {
        let response = server.post("/strings").json(&body).await;

        response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "unprocessable_entity");
    }
}

#[tokio::test]
async fn test_create_malformed_json_bad_request() {
    let server = server();

    let response = server
        .post("/strings")
        .bytes(Bytes::from_static(b"{not json"))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_get_string_success() {
    let server = server();
    seed(&server, &["level"]).await;

    let response = server.get("/strings/level").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["value"], "level");
    assert_eq!(json["properties"]["is_palindrome"], true);
}

#[tokio::test]
async fn test_get_string_percent_encoded() {
    let server = server();
    seed(&server, &["hello world"]).await;

    let response = server.get("/strings/hello%20world").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["value"], "hello world");
}

#[tokio::test]
async fn test_get_string_not_found() {
    let server = server();

    let response = server.get("/strings/missing").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_delete_string() {
    let server = server();
    seed(&server, &["to delete"]).await;

    let response = server.delete("/strings/to%20delete").await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    server
        .get("/strings/to%20delete")
        .await
        .assert_status_not_found();
    server
        .delete("/strings/to%20delete")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_value_can_be_stored_again_after_delete() {
    let server = server();
    seed(&server, &["again"]).await;

    server
        .delete("/strings/again")
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    seed(&server, &["again"]).await;
}

#[tokio::test]
async fn test_list_strings_without_filters() {
    let server = server();
    seed(&server, &["one", "two", "three"]).await;

    let response = server.get("/strings").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["count"], 3);
    assert_eq!(values(&json), vec!["one", "two", "three"]);
    assert_eq!(json["filters_applied"], json!({}));
}

#[tokio::test]
async fn test_list_strings_with_filters() {
    let server = server();
    seed(&server, &["racecar", "level", "hello world", "noon"]).await;

    let response = server
        .get("/strings?is_palindrome=true&min_length=5&max_length=7&word_count=1&contains_character=e")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["count"], 2);
    assert_eq!(values(&json), vec!["racecar", "level"]);
    assert_eq!(
        json["filters_applied"],
        json!({
            "is_palindrome": true,
            "min_length": 5,
            "max_length": 7,
            "word_count": 1,
            "contains_character": "e"
        })
    );
}

#[tokio::test]
async fn test_list_strings_not_palindrome() {
    let server = server();
    seed(&server, &["racecar", "hello"]).await;

    let response = server.get("/strings?is_palindrome=false").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(values(&json), vec!["hello"]);
}

#[tokio::test]
async fn test_list_strings_invalid_params() {
    let server = server();

    for query in [
        "is_palindrome=maybe",
        "min_length=abc",
        "min_length=-1",
        "word_count=1.5",
    ] {
        let response = server.get(&format!("/strings?{query}")).await;

        response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn test_list_strings_contains_character_must_be_single() {
    let server = server();

    let response = server.get("/strings?contains_character=ab").await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "unprocessable_entity");
}

#[tokio::test]
async fn test_list_strings_conflicting_length_bounds() {
    let server = server();

    let response = server.get("/strings?min_length=10&max_length=2").await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["details"]["min_length"], 10);
    assert_eq!(json["error"]["details"]["max_length"], 2);
}

#[tokio::test]
async fn test_natural_language_single_word_palindromes() {
    let server = server();
    seed(&server, &["racecar", "never odd or even", "hello"]).await;

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "all single word palindromic strings")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["count"], 1);
    assert_eq!(values(&json), vec!["racecar"]);
    assert_eq!(
        json["interpreted_query"]["original"],
        "all single word palindromic strings"
    );
    assert_eq!(
        json["interpreted_query"]["parsed_filters"],
        json!({ "is_palindrome": true, "word_count": 1 })
    );
}

#[tokio::test]
async fn test_natural_language_longer_than() {
    let server = server();
    seed(&server, &["short", "a much longer string"]).await;

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "strings longer than 10 characters")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(values(&json), vec!["a much longer string"]);
    assert_eq!(
        json["interpreted_query"]["parsed_filters"],
        json!({ "min_length": 11 })
    );
}

#[tokio::test]
async fn test_natural_language_containing_letter() {
    let server = server();
    seed(&server, &["zebra", "apple"]).await;

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "strings containing the letter z")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(values(&json), vec!["zebra"]);
    assert_eq!(
        json["interpreted_query"]["parsed_filters"],
        json!({ "contains_character": "z" })
    );
}

#[tokio::test]
async fn test_natural_language_no_rules_matches_everything() {
    let server = server();
    seed(&server, &["first", "second"]).await;

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "show me everything")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["count"], 2);
    assert_eq!(json["interpreted_query"]["parsed_filters"], json!({}));
}

#[tokio::test]
async fn test_natural_language_conflicting_filters() {
    let server = server();

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "strings between 10 and 3 characters")
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "unprocessable_entity");
}

#[tokio::test]
async fn test_natural_language_unparseable_number() {
    let server = server();

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "longer than 99999999999999999999 characters")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_natural_language_missing_query() {
    let server = server();

    let response = server.get("/strings/filter-by-natural-language").await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_nul_value_unprocessable() {
    let server = server();

    let response = server
        .post("/strings")
        .json(&json!({ "value": "a\u{0}b" }))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "unprocessable_entity");

    server
        .get("/strings")
        .await
        .assert_json_contains(&json!({ "count": 0 }));
}

#[tokio::test]
async fn test_list_strings_nul_character_unprocessable() {
    let server = server();

    let response = server.get("/strings?contains_character=%00").await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_strings_flexible_booleans() {
    let server = server();
    seed(&server, &["racecar", "hello"]).await;

    for (raw, expected) in [("1", "racecar"), ("yes", "racecar"), ("0", "hello"), ("off", "hello")] {
        let response = server.get(&format!("/strings?is_palindrome={raw}")).await;

        response.assert_status_ok();
        assert_eq!(values(&response.json::<Value>()), vec![expected]);
    }
}

#[tokio::test]
async fn test_list_strings_large_bounds() {
    let server = server();
    seed(&server, &["short"]).await;

    let response = server.get("/strings?max_length=5000000000").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(values(&json), vec!["short"]);
    assert_eq!(json["filters_applied"]["max_length"], 5_000_000_000i64);
}

#[tokio::test]
async fn test_natural_language_non_ascii_digits_ignored() {
    let server = server();
    seed(&server, &["abc"]).await;

    let response = server
        .get("/strings/filter-by-natural-language")
        .add_query_param("query", "strings longer than ٣ characters")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(values(&json), vec!["abc"]);
    assert_eq!(json["interpreted_query"]["parsed_filters"], json!({}));
}
