use super::*;
use axum::{http::StatusCode as HttpStatus, routing::get, Router};
use tokio::net::TcpListener;

const ONE_ITEM: &str = r#"[{"id":"1","title":"T","summary":"S","details":"D"}]"#;

async fn spawn_feed_server() -> anyhow::Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route("/news", get(|| async { ONE_ITEM }))
        .route("/empty", get(|| async { "[]" }))
        .route("/object", get(|| async { r#"{"a":1}"# }))
        .route(
            "/created",
            get(|| async { (HttpStatus::CREATED, ONE_ITEM) }),
        )
        .route(
            "/broken",
            get(|| async { (HttpStatus::INTERNAL_SERVER_ERROR, "boom") }),
        );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

#[test]
fn decodes_single_item() {
    let items = decode(ONE_ITEM).expect("decode");
    assert_eq!(
        items,
        vec![NewsItem {
            id: "1".into(),
            title: "T".into(),
            summary: "S".into(),
            details: "D".into(),
        }]
    );
}

#[test]
fn keeps_length_and_order() {
    let body = r#"[
        {"id":"a","title":"first","summary":"s1","details":"d1"},
        {"id":"b","title":"second","summary":"s2","details":"d2"},
        {"id":"c","title":"third","summary":"s3","details":"d3"}
    ]"#;
    let items = decode(body).expect("decode");
    let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["first", "second", "third"]);
    assert_eq!(items[2].details, "d3");
}

#[test]
fn missing_fields_default_to_empty() {
    let items = decode(r#"[{"title":"only a title"},{}]"#).expect("decode");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "only a title");
    assert_eq!(items[0].id, "");
    assert_eq!(items[0].summary, "");
    assert_eq!(items[0].details, "");
    assert_eq!(items[1], NewsItem::default());
}

#[test]
fn empty_array_is_not_an_error() {
    assert!(decode("[]").expect("decode").is_empty());
}

#[test]
fn non_array_is_unexpected_shape() {
    for body in [r#"{"a":1}"#, "null", "42", r#""text""#, "true"] {
        assert!(
            matches!(decode(body), Err(DecodeError::UnexpectedShape(_))),
            "{body} should be rejected as the wrong shape"
        );
    }
}

#[test]
fn non_object_element_is_unexpected_shape() {
    match decode(r#"[{"title":"ok"}, 3]"#) {
        Err(DecodeError::UnexpectedShape(msg)) => assert!(msg.contains("item 1"), "{msg}"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn malformed_text_is_malformed() {
    for body in ["", "[", r#"[{"title":}]"#, "not json"] {
        assert!(
            matches!(decode(body), Err(DecodeError::Malformed(_))),
            "{body:?} should be malformed"
        );
    }
}

#[tokio::test]
async fn fetch_returns_body_unchanged() {
    let base = spawn_feed_server().await.expect("spawn server");
    let client = Client::new();
    let body = fetch(&client, &format!("{base}/news")).await.expect("fetch");
    assert_eq!(body, ONE_ITEM);
}

#[tokio::test]
async fn fetch_rejects_404() {
    let base = spawn_feed_server().await.expect("spawn server");
    let client = Client::new();
    match fetch(&client, &format!("{base}/missing")).await {
        Err(FetchError::Status(code)) => assert_eq!(code.as_u16(), 404),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_rejects_other_success_codes() {
    let base = spawn_feed_server().await.expect("spawn server");
    let client = Client::new();
    match fetch(&client, &format!("{base}/created")).await {
        Err(FetchError::Status(code)) => assert_eq!(code.as_u16(), 201),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_reports_transport_failure() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = Client::new();
    let result = fetch(&client, &format!("http://{addr}/news")).await;
    assert!(matches!(result, Err(FetchError::Transport(_))), "{result:?}");
}

#[tokio::test]
async fn fetch_rejects_malformed_url() {
    let client = Client::new();
    let result = fetch(&client, "not a url").await;
    assert!(matches!(result, Err(FetchError::Transport(_))), "{result:?}");
}

#[tokio::test]
async fn load_news_chains_fetch_and_decode() {
    let base = spawn_feed_server().await.expect("spawn server");
    let client = Client::new();

    let items = load_news(&client, &format!("{base}/news")).await.expect("load");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].summary, "S");

    let empty = load_news(&client, &format!("{base}/empty")).await.expect("load");
    assert!(empty.is_empty());

    let shape = load_news(&client, &format!("{base}/object")).await;
    assert!(matches!(
        shape,
        Err(LoadError::Decode(DecodeError::UnexpectedShape(_)))
    ));

    let err = load_news(&client, &format!("{base}/broken"))
        .await
        .expect_err("500 must fail");
    assert!(err.to_string().contains("500"), "{err}");
}
