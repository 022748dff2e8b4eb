//! HTTP transport tests against a local server.
//!
//! Each test starts a throwaway HTTP/1 server on 127.0.0.1 that answers
//! search requests from a closure and records what it received.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use adsearch_lib::api::query::build_keyword_query;
use adsearch_lib::auth::StaticTokenProvider;
use adsearch_lib::config::ClientConfig;
use adsearch_lib::error::{ApiError, Error};
use adsearch_lib::model::CustomerId;
use adsearch_lib::AdsClient;
use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use serde_json::{json, Value};
use tokio::net::TcpListener;

const CUSTOMER_ID: i64 = 1234567890;

#[derive(Debug, Clone)]
struct Seen {
    path: String,
    authorization: Option<String>,
    developer_token: Option<String>,
    login_customer_id: Option<String>,
    body: Value,
}

struct Reply {
    status: u16,
    body: String,
    delay: Option<Duration>,
}

impl Reply {
    fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: None,
        }
    }

    fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: None,
        }
    }
}

fn header(req: &Request<Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Starts a server answering every request with `respond(request_body)`.
///
/// Responses carry a `request-id` header of `rid-<n>`, counting from 1.
async fn serve<F>(respond: F) -> (String, Arc<Mutex<Vec<Seen>>>)
where
    F: Fn(&Value) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let respond = Arc::new(respond);

    let server_seen = seen.clone();
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let seen = server_seen.clone();
            let respond = respond.clone();
            tokio::spawn(async move {
                let service = service_fn(move |req: Request<Incoming>| {
                    let seen = seen.clone();
                    let respond = respond.clone();
                    async move {
                        let path = req.uri().path().to_string();
                        let authorization = header(&req, "authorization");
                        let developer_token = header(&req, "developer-token");
                        let login_customer_id = header(&req, "login-customer-id");
                        let bytes = req
                            .into_body()
                            .collect()
                            .await
                            .map(|b| b.to_bytes())
                            .unwrap_or_default();
                        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

                        let reply = (*respond)(&body);
                        let request_number = {
                            let mut seen = seen.lock().unwrap();
                            seen.push(Seen {
                                path,
                                authorization,
                                developer_token,
                                login_customer_id,
                                body,
                            });
                            seen.len()
                        };

                        if let Some(delay) = reply.delay {
                            tokio::time::sleep(delay).await;
                        }

                        Ok::<_, Infallible>(
                            Response::builder()
                                .status(reply.status)
                                .header("content-type", "application/json")
                                .header("request-id", format!("rid-{}", request_number))
                                .body(Full::new(Bytes::from(reply.body)))
                                .unwrap(),
                        )
                    }
                });
                let _ = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service)
                    .await;
            });
        }
    });

    (format!("http://{}", addr), seen)
}

fn client(endpoint: &str) -> AdsClient {
    AdsClient::builder()
        .endpoint(endpoint)
        .token_provider(StaticTokenProvider::new("test-token"))
        .developer_token("dev-token")
        .login_customer_id(CustomerId::new(999).unwrap())
        .build()
        .unwrap()
}

fn keyword_row(ad_group_id: &str, criterion_id: &str, text: &str) -> Value {
    json!({
        "adGroup": { "resourceName": format!("customers/1/adGroups/{}", ad_group_id), "id": ad_group_id },
        "adGroupCriterion": {
            "type": "KEYWORD",
            "criterionId": criterion_id,
            "keyword": { "text": text, "matchType": "PHRASE" }
        }
    })
}

#[tokio::test]
async fn test_follows_page_tokens() {
    let (endpoint, seen) = serve(|body| match body.get("pageToken").and_then(Value::as_str) {
        None => Reply::ok(json!({
            "results": [keyword_row("10", "1", "red shoes"), keyword_row("10", "2", "blue shoes")],
            "nextPageToken": "page-2",
            "totalResultsCount": "3"
        })),
        Some("page-2") => Reply::ok(json!({
            "results": [keyword_row("11", "3", "green shoes")]
        })),
        Some(other) => Reply::status(400, format!("unexpected token {}", other)),
    })
    .await;

    let client = client(&endpoint);
    let query = build_keyword_query(CUSTOMER_ID, None).unwrap();
    let text = query.text().to_string();

    let rows = client.search(query).collect().await.unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].text(), "red shoes");
    assert_eq!(rows[2].ad_group_id(), 11);
    assert_eq!(rows[2].match_type().to_string(), "PHRASE");

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].path, "/v17/customers/1234567890/googleAds:search");
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer test-token"));
    assert_eq!(seen[0].developer_token.as_deref(), Some("dev-token"));
    assert_eq!(seen[0].login_customer_id.as_deref(), Some("999"));
    assert_eq!(seen[0].body["query"], Value::String(text));
    assert_eq!(seen[0].body["pageSize"], json!(1000));
    assert!(seen[0].body.get("pageToken").is_none());
    assert_eq!(seen[1].body["pageToken"], json!("page-2"));
}

#[tokio::test]
async fn test_total_results_count_reported() {
    let (endpoint, _seen) = serve(|_| {
        Reply::ok(json!({
            "results": [keyword_row("10", "1", "a")],
            "totalResultsCount": "1"
        }))
    })
    .await;

    let client = client(&endpoint);
    let mut pages = client.search_pages(build_keyword_query(CUSTOMER_ID, None).unwrap());
    let page = pages.next().await.unwrap().unwrap();

    assert_eq!(page.total_results_count(), Some(1));
    assert!(!page.has_more());
}

#[tokio::test]
async fn test_service_failure_keeps_request_id_and_errors() {
    let (endpoint, _seen) = serve(|_| {
        Reply::status(
            400,
            json!({
                "error": {
                    "code": 400,
                    "message": "Request contains an invalid argument.",
                    "status": "INVALID_ARGUMENT",
                    "details": [{
                        "@type": "type.googleapis.com/google.ads.googleads.v17.errors.GoogleAdsFailure",
                        "errors": [
                            { "errorCode": { "queryError": "UNRECOGNIZED_FIELD" }, "message": "Unrecognized field in the query." },
                            { "errorCode": { "queryError": "PROHIBITED_FIELD_IN_SELECT_CLAUSE" }, "message": "Field not allowed." }
                        ],
                        "requestId": "from-body"
                    }]
                }
            })
            .to_string(),
        )
    })
    .await;

    let client = client(&endpoint);
    let err = client
        .search(build_keyword_query(CUSTOMER_ID, Some(5)).unwrap())
        .collect()
        .await
        .unwrap_err();

    let remote = err.as_remote().expect("expected a remote service error");
    assert_eq!(remote.request_id(), Some("rid-1"));
    assert_eq!(remote.status(), Some(400));
    assert_eq!(
        remote.messages().collect::<Vec<_>>(),
        ["Unrecognized field in the query.", "Field not allowed."]
    );
    assert_eq!(remote.errors()[0].code, "queryError: UNRECOGNIZED_FIELD");
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_unparsable_success_body() {
    let (endpoint, _seen) = serve(|_| Reply::status(200, "not json")).await;

    let client = client(&endpoint);
    let err = client
        .search(build_keyword_query(CUSTOMER_ID, None).unwrap())
        .collect()
        .await
        .unwrap_err();

    let remote = err.as_remote().expect("expected a remote service error");
    assert_eq!(remote.request_id(), Some("rid-1"));
    assert!(matches!(
        remote.transport(),
        Some(ApiError::Parse { body: Some(body), .. }) if body == "not json"
    ));
}

#[tokio::test]
async fn test_timeout_is_per_page() {
    let (endpoint, _seen) = serve(|_| Reply {
        delay: Some(Duration::from_secs(5)),
        ..Reply::ok(json!({ "results": [] }))
    })
    .await;

    let client = AdsClient::builder()
        .endpoint(endpoint)
        .token_provider(StaticTokenProvider::new("test-token"))
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client
        .search(build_keyword_query(CUSTOMER_ID, None).unwrap())
        .collect()
        .await
        .unwrap_err();

    let remote = err.as_remote().expect("expected a remote service error");
    assert!(matches!(remote.transport(), Some(ApiError::Timeout(_))));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client(&format!("http://{}", addr));
    let err = client
        .search(build_keyword_query(CUSTOMER_ID, None).unwrap())
        .collect()
        .await
        .unwrap_err();

    let remote = err.as_remote().expect("expected a remote service error");
    assert_eq!(remote.request_id(), None);
    assert_eq!(remote.errors().len(), 1);
    assert!(matches!(remote.transport(), Some(ApiError::Network(_))));
}

#[tokio::test]
async fn test_missing_token_fails_before_request() {
    let (endpoint, seen) = serve(|_| Reply::ok(json!({ "results": [] }))).await;

    let client = AdsClient::builder()
        .endpoint(endpoint)
        .token_provider(StaticTokenProvider::new(""))
        .build()
        .unwrap();

    let err = client
        .search(build_keyword_query(CUSTOMER_ID, None).unwrap())
        .collect()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Auth(_)));
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_from_config() {
    let (endpoint, seen) =
        serve(|_| Reply::ok(json!({ "results": [keyword_row("1", "2", "x")] }))).await;

    let config = ClientConfig::default()
        .with_endpoint(endpoint)
        .with_api_version("v18")
        .with_developer_token("cfg-dev")
        .with_access_token("cfg-token");
    let client = AdsClient::from_config(&config).unwrap();

    let rows = client
        .search(build_keyword_query(CUSTOMER_ID, None).unwrap())
        .collect()
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen[0].path, "/v18/customers/1234567890/googleAds:search");
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer cfg-token"));
    assert_eq!(seen[0].developer_token.as_deref(), Some("cfg-dev"));
    assert_eq!(seen[0].login_customer_id, None);
}
