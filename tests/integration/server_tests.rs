//! Playground API tests.
//!
//! Tests verify:
//! - URL, srcset and widths endpoints return the library's output
//! - Source overrides keep the configured secret
//! - Invalid input maps to 400 JSON errors
//! - The HTML playground renders

use axum::http::StatusCode;

use imageboss::{Operation, SrcsetConfig, DEFAULT_WIDTHS};

use super::test_utils::{builder, get, get_json, router, signed_builder};

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (status, json) = get_json(router(builder()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// URL Endpoint
// =============================================================================

#[tokio::test]
async fn test_url_endpoint_defaults_to_configured_image() {
    let (status, json) = get_json(router(builder()), "/api/url").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["url"],
        "https://img.imageboss.me/mywebsite-images/cdn/examples/02.jpg"
    );
}

#[tokio::test]
async fn test_url_endpoint_width_with_options() {
    let (status, json) = get_json(
        router(builder()),
        "/api/url?path=photos/a.jpg&op=width&width=700&options=blur:4/format:auto",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["url"],
        "https://img.imageboss.me/mywebsite-images/width/700/blur:4/format:auto/photos/a.jpg"
    );
}

#[tokio::test]
async fn test_url_endpoint_signed_source_override() {
    let (status, json) = get_json(
        router(signed_builder()),
        "/api/url?source=mysecureimages&path=01.jpg&op=width&width=500",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["url"],
        "https://img.imageboss.me/mysecureimages/width/500/01.jpg?bossToken=721fb4de4d58e0570789e12dc4319a2f5c63ffdff18a3c2dec6d90163a694c2c"
    );
}

#[tokio::test]
async fn test_url_endpoint_errors() {
    let cases = [
        ("/api/url?op=width", "invalid_config"),
        ("/api/url?op=width&width=0", "invalid_config"),
        ("/api/url?op=rotate", "invalid_config"),
        ("/api/url?source=not%20valid", "invalid_config"),
    ];

    for (uri, error_type) in cases {
        let (status, json) = get_json(router(builder()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(json["error"], error_type, "{}", uri);
        assert_eq!(json["status"], 400);
    }
}

// =============================================================================
// Srcset Endpoint
// =============================================================================

#[tokio::test]
async fn test_srcset_endpoint_matches_library() {
    let (status, json) = get_json(
        router(builder()),
        "/api/srcset?path=a.jpg&op=cover&width=300&height=300&mode=center",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let expected = builder()
        .create_srcset(
            "a.jpg",
            &Operation::cover_mode(300, 300, "center").unwrap(),
            &[],
            &SrcsetConfig::default(),
        )
        .unwrap();
    assert_eq!(json["srcset"], expected);
    assert_eq!(json["entries"].as_array().unwrap().len(), 5);
    assert!(json["entries"][4]
        .as_str()
        .unwrap()
        .ends_with("/quality:20/a.jpg 5x"));
}

#[tokio::test]
async fn test_srcset_endpoint_fluid_range() {
    let (status, json) = get_json(
        router(builder()),
        "/api/srcset?path=a.jpg&min_width=100&max_width=380",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["entries"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_srcset_endpoint_explicit_widths() {
    let (status, json) = get_json(
        router(builder()),
        "/api/srcset?path=a.jpg&op=height&height=10&widths=200,400",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["entries"][1],
        "https://img.imageboss.me/mywebsite-images/height/400/a.jpg 400w"
    );
}

#[tokio::test]
async fn test_srcset_endpoint_empty_widths() {
    let (status, json) = get_json(router(builder()), "/api/srcset?path=a.jpg&widths=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["srcset"], "");
    assert_eq!(json["entries"], serde_json::json!([]));
}

#[tokio::test]
async fn test_srcset_endpoint_errors() {
    let (status, json) = get_json(
        router(builder()),
        "/api/srcset?min_width=500&max_width=100",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_range");

    let (status, json) = get_json(router(builder()), "/api/srcset?widths=100,wide").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_request");
}

// =============================================================================
// Widths Endpoint
// =============================================================================

#[tokio::test]
async fn test_widths_endpoint() {
    let (status, json) = get_json(router(builder()), "/api/widths").await;
    assert_eq!(status, StatusCode::OK);
    let widths: Vec<u32> = serde_json::from_value(json["widths"].clone()).unwrap();
    assert_eq!(widths, DEFAULT_WIDTHS.to_vec());

    let (status, json) = get_json(router(builder()), "/api/widths?tolerance=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_range");
}

// =============================================================================
// Playground Page
// =============================================================================

#[tokio::test]
async fn test_playground_page() {
    let (status, body) = get(router(builder()), "/?source=demo-images").await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("ImageBoss Playground"));
    assert!(html.contains("https://img.imageboss.me/demo-images/width/400/examples/02.jpg"));
    assert!(html.contains("srcset=\""));
}

#[tokio::test]
async fn test_playground_invalid_source() {
    let (status, json) = get_json(router(builder()), "/?source=%2Fetc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_config");
}
