use super::*;

#[test]
fn urls_join_base_and_endpoint() {
    let client = AtsClient::new(ApiConfig::new("http://127.0.0.1:9/api/"));
    assert_eq!(client.config().url(endpoints::JOBS), "http://127.0.0.1:9/api/Jobs");
}

#[test]
fn bearer_token_is_attached() {
    let client = AtsClient::new(ApiConfig::new("http://127.0.0.1:9/api"));
    let req = client.builder(Method::GET, endpoints::JOBS, Some("t1")).build().unwrap();
    assert_eq!(req.headers()[reqwest::header::AUTHORIZATION], "Bearer t1");
    assert_eq!(req.url().as_str(), "http://127.0.0.1:9/api/Jobs");
}

#[test]
fn anonymous_requests_have_no_authorization() {
    let client = AtsClient::new(ApiConfig::default());
    let req = client.builder(Method::POST, endpoints::LOGIN, None).build().unwrap();
    assert!(req.headers().get(reqwest::header::AUTHORIZATION).is_none());
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Port 9 (discard) is closed on test machines.
    let client = AtsClient::new(ApiConfig::new("http://127.0.0.1:9/api"));
    let err = client.request::<serde_json::Value>(Method::GET, endpoints::JOBS, None, None::<&()>).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn missing_upload_file_is_reported_before_sending() {
    let client = AtsClient::new(ApiConfig::default());
    let err = client
        .upload_document("t1", "u1", "Resume", Path::new("/definitely/not/here.pdf"))
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::ReadFile { .. }), "{err:?}");
}
