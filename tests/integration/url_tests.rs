//! URL assembly and signing tests.
//!
//! Tests verify:
//! - Every operation renders its segment and dimensions
//! - Options keep their order
//! - Signed URLs carry the expected `bossToken`
//! - Base URL and scheme overrides

use imageboss::{
    blur, format_auto, sign, verify, ConfigError, Operation, PathOption, UrlBuilder,
    DEFAULT_BASE_URL, TOKEN_PARAM,
};

use super::test_utils::{builder, signed_builder, SECRET, SECURE_SOURCE};

// =============================================================================
// Operations
// =============================================================================

#[test]
fn test_cdn_url() {
    assert_eq!(
        builder().create_url("examples/02.jpg", &Operation::cdn(), &[]),
        "https://img.imageboss.me/mywebsite-images/cdn/examples/02.jpg"
    );
}

#[test]
fn test_width_url_with_blur() {
    let url = builder().create_url(
        "examples/02.jpg",
        &Operation::width(700).unwrap(),
        &[blur(4)],
    );
    assert_eq!(
        url,
        "https://img.imageboss.me/mywebsite-images/width/700/blur:4/examples/02.jpg"
    );
}

#[test]
fn test_height_url() {
    assert_eq!(
        builder().create_url("/examples/02.jpg", &Operation::height(500).unwrap(), &[]),
        "https://img.imageboss.me/mywebsite-images/height/500/examples/02.jpg"
    );
}

#[test]
fn test_cover_mode_url_with_options_in_order() {
    let options = [
        format_auto(),
        PathOption::pair("grayscale", "true"),
        PathOption::new("fill-color", ["ffffff", "cccccc"]),
    ];
    let url = builder().create_url(
        "examples/02.jpg",
        &Operation::cover_mode(300, 300, "center").unwrap(),
        &options,
    );
    assert_eq!(
        url,
        "https://img.imageboss.me/mywebsite-images/cover:center/300x300/format:auto/grayscale:true/fill-color:ffffff,cccccc/examples/02.jpg"
    );
}

#[test]
fn test_create_url_with_params() {
    let url = builder().create_url_with_params("a.png", &[PathOption::flag("download")]);
    assert_eq!(
        url,
        "https://img.imageboss.me/mywebsite-images/cdn/download/a.png"
    );
}

#[test]
fn test_zero_dimension_is_rejected() {
    assert_eq!(
        Operation::width(0),
        Err(ConfigError::ZeroDimension { dimension: "width" })
    );
    assert!(Operation::cover(300, 0).is_err());
}

#[test]
fn test_path_with_special_characters_is_escaped() {
    let url = builder().create_url("my photos/café #1.jpg", &Operation::cdn(), &[]);
    assert_eq!(
        url,
        "https://img.imageboss.me/mywebsite-images/cdn/my%20photos/caf%C3%A9%20%231.jpg"
    );
}

#[test]
fn test_path_sub_delimiters_kept() {
    let url = builder().create_url("icons/logo@2x+dark.png", &Operation::cdn(), &[]);
    assert_eq!(
        url,
        "https://img.imageboss.me/mywebsite-images/cdn/icons/logo@2x+dark.png"
    );
}

// =============================================================================
// Signing
// =============================================================================

#[test]
fn test_signed_width_url() {
    let url = signed_builder().create_url("01.jpg", &Operation::width(500).unwrap(), &[]);
    assert_eq!(
        url,
        "https://img.imageboss.me/mysecureimages/width/500/01.jpg?bossToken=721fb4de4d58e0570789e12dc4319a2f5c63ffdff18a3c2dec6d90163a694c2c"
    );
}

#[test]
fn test_signed_cover_url_with_options() {
    let url = signed_builder().create_url(
        "01.jpg",
        &Operation::cover_mode(300, 300, "center").unwrap(),
        &[format_auto()],
    );
    assert!(url.ends_with(
        "?bossToken=512e8583ecbcdb487e4a780846206dc79a7dae91b13e34a1e3696f7315e2a435"
    ));
}

#[test]
fn test_signature_ignores_base_url() {
    let default = signed_builder().create_url("01.jpg", &Operation::cdn(), &[]);
    let custom = signed_builder()
        .with_base_url("https://images.example.com")
        .create_url("01.jpg", &Operation::cdn(), &[]);

    let token = |url: &str| url.split_once('=').map(|(_, t)| t.to_string()).unwrap();
    assert_eq!(token(&default), token(&custom));
    assert_eq!(
        token(&default),
        "d12d2616849036f7c937f1b8929001735c357602300cf168348f8a7c744e13a4"
    );
}

#[test]
fn test_signed_url_token_verifies() {
    let url = signed_builder().create_url("01.jpg", &Operation::height(200).unwrap(), &[]);
    let (path, query) = url
        .strip_prefix(DEFAULT_BASE_URL)
        .and_then(|rest| rest.split_once('?'))
        .unwrap();
    let token = query.strip_prefix(&format!("{}=", TOKEN_PARAM)).unwrap();

    assert_eq!(path, format!("/{}/height/200/01.jpg", SECURE_SOURCE));
    assert!(verify(SECRET, path, token));
    assert_eq!(sign(SECRET, path), token);
    assert!(!verify("other", path, token));
}

#[test]
fn test_empty_secret_disables_signing() {
    let builder = UrlBuilder::new("mysecureimages").unwrap().with_secret("");
    let url = builder.create_url("01.jpg", &Operation::cdn(), &[]);
    assert!(!url.contains(TOKEN_PARAM));
}

// =============================================================================
// Builder Settings
// =============================================================================

#[test]
fn test_http_and_custom_base_url() {
    let builder = builder()
        .with_base_url("https://img.example.com/")
        .with_https(false);
    assert_eq!(
        builder.create_url("a.jpg", &Operation::cdn(), &[]),
        "http://img.example.com/mywebsite-images/cdn/a.jpg"
    );
}

#[test]
fn test_uppercase_scheme_base_url() {
    let url = builder()
        .with_base_url("HTTPS://img.example.com")
        .create_url("a.jpg", &Operation::cdn(), &[]);
    assert_eq!(url, "https://img.example.com/mywebsite-images/cdn/a.jpg");
}

#[test]
fn test_invalid_sources() {
    assert_eq!(UrlBuilder::new("  "), Err(ConfigError::EmptySource));
    assert!(matches!(
        UrlBuilder::new("my source"),
        Err(ConfigError::InvalidSource(_))
    ));
    assert!(matches!(
        UrlBuilder::new("a/b"),
        Err(ConfigError::InvalidSource(_))
    ));
}

#[test]
fn test_builder_is_shareable_across_threads() {
    let builder = std::sync::Arc::new(signed_builder());
    let handles: Vec<_> = (1..=4)
        .map(|i| {
            let builder = builder.clone();
            std::thread::spawn(move || {
                builder.create_url("01.jpg", &Operation::width(100 * i).unwrap(), &[])
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let url = handle.join().unwrap();
        assert!(url.contains(&format!("/width/{}/", 100 * (i + 1))));
    }
}
