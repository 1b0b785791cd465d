use serde::Deserialize;
use std::error::Error;

use loader_response::http::{Body, BodyExt, BodyUsed, StatusCode};
use loader_response::{Response, make_response};

#[derive(Debug, Deserialize)]
struct Tile {
    zoom: u8,
    layers: Vec<String>,
}

#[loader_response::test]
async fn typed_json_body() -> Result<(), Box<dyn Error>> {
    let body = Body::from_json(&serde_json::json!({ "zoom": 12, "layers": ["roads", "water"] }))?;
    let mut response = make_response(body).await;

    let Tile { zoom, layers } = response.json::<Tile>().await?;
    assert_eq!(zoom, 12);
    assert_eq!(layers, ["roads", "water"]);
    Ok(())
}

#[loader_response::test]
async fn body_reads_once() -> Result<(), Box<dyn Error>> {
    let mut response = make_response("once").await;
    assert!(!response.body_used());
    assert_eq!(response.text().await?, "once");
    assert!(response.body_used());

    let err = response.bytes().await.unwrap_err();
    assert!(err.downcast_ref::<BodyUsed>().is_some());
    assert_eq!(err.to_string(), "Response body has already been read");
    Ok(())
}

#[loader_response::test]
async fn adopted_host_response_keeps_url() -> Result<(), Box<dyn Error>> {
    let host = http::Response::builder()
        .status(StatusCode::PARTIAL_CONTENT)
        .header("content-length", "4")
        .body(Body::from("abcd"))?;
    let mut response = Response::from_http(host, "https://example.com/range.bin");

    assert!(response.ok());
    assert_eq!(response.status_text(), "Partial Content");
    assert_eq!(response.url(), "https://example.com/range.bin");
    assert_eq!(response.content_length(), Some(4));
    assert_eq!(response.text().await?, "abcd");
    Ok(())
}

#[test]
fn builder_defaults() {
    let response = Response::builder().body(());
    assert!(response.ok());
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.status_text(), "OK");
    assert_eq!(response.url(), "");
    assert_eq!(response.content_length(), Some(0));

    let unknown = Response::builder()
        .status(StatusCode::from_u16(599).unwrap())
        .body(());
    assert!(!unknown.ok());
    assert_eq!(unknown.status_text(), "");
}

#[loader_response::test]
async fn into_http_yields_host_body() -> Result<(), Box<dyn Error>> {
    let response = make_response(vec![1u8, 2, 3]).await;
    let host = response.into_http();
    assert_eq!(host.headers()["content-length"], "3");

    let collected = host.into_body().into_boxed_body().collect().await?;
    assert_eq!(collected.to_bytes().as_ref(), &[1, 2, 3]);
    Ok(())
}

#[loader_response::test]
async fn body_readers_collect_streams() -> Result<(), Box<dyn Error>> {
    let chunks = vec![r#"{"zoom": 3, "#, r#""layers": []}"#];
    let mut body = Body::from_stream(futures_lite::stream::iter(chunks));
    assert_eq!(body.str_contents().await?, r#"{"zoom": 3, "layers": []}"#);

    let Tile { zoom, layers } = body.json::<Tile>().await?;
    assert_eq!(zoom, 3);
    assert!(layers.is_empty());
    Ok(())
}

#[loader_response::test]
async fn text_rejects_invalid_utf8() -> Result<(), Box<dyn Error>> {
    let mut response = make_response(vec![0xffu8, 0xfe, b'a']).await;
    let err = response.text().await.unwrap_err();
    assert!(
        format!("{err:#}").contains("decoding body contents as string"),
        "{err:#}"
    );
    assert!(response.body_used());
    Ok(())
}

#[loader_response::test]
async fn json_reads_streamed_response() -> Result<(), Box<dyn Error>> {
    let chunks = vec![r#"{"zoom": 7, "layers": ["#, r#""water"]}"#];
    let mut response = make_response(Body::from_stream(futures_lite::stream::iter(chunks))).await;

    let tile = response.json::<Tile>().await?;
    assert_eq!(tile.zoom, 7);
    assert_eq!(tile.layers, ["water"]);

    let err = response.json::<Tile>().await.unwrap_err();
    assert!(err.downcast_ref::<BodyUsed>().is_some());
    Ok(())
}
