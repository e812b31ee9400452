use super::*;

#[test]
fn build_url_joins_without_double_slashes() {
    let url = build_url("http://localhost:5000/", "/recipes/cuisines", &[]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:5000/recipes/cuisines");
}

#[test]
fn build_url_repeats_params_and_encodes() {
    let query = vec![
        ("query", "butter chicken".to_string()),
        ("cuisine", "North Indian".to_string()),
        ("cuisine", "Mughlai".to_string()),
    ];
    let url = build_url("http://api.test", "recipes/search", &query).unwrap();
    assert_eq!(
        url.as_str(),
        "http://api.test/recipes/search?query=butter+chicken&cuisine=North+Indian&cuisine=Mughlai"
    );
}

#[test]
fn build_url_rejects_garbage_base() {
    let err = build_url("not a url", "x", &[]).unwrap_err();
    assert!(matches!(ApiError::of(&err), Some(ApiError::InvalidUrl(_))));
}

#[test]
fn error_message_prefers_error_key() {
    assert_eq!(extract_error_message(r#"{"error": "Recipe not found"}"#), "Recipe not found");
    assert_eq!(extract_error_message(r#"{"status": false, "message": "nope"}"#), "nope");
    assert_eq!(extract_error_message("<html>502</html>"), "");
    assert_eq!(extract_error_message(r#"{"error": 5}"#), "");
}

#[test]
fn api_error_classification() {
    let network: anyhow::Error = ApiError::Network("offline".into()).into();
    assert!(ApiError::is_network(&network));
    assert_eq!(ApiError::status(&network), None);

    let status: anyhow::Error = ApiError::Status { status: 404, message: "Recipe not found".into() }.into();
    assert_eq!(ApiError::status(&status), Some(404));
    assert_eq!(ApiError::server_message(&status), Some("Recipe not found"));

    let empty: anyhow::Error = ApiError::Status { status: 500, message: String::new() }.into();
    assert_eq!(ApiError::server_message(&empty), None);

    let other = anyhow::anyhow!("boom");
    assert!(ApiError::of(&other).is_none());
}
