use std::error::Error;

use loader_response::http::{Body, HeaderValue, StatusCode};
use loader_response::{Blob, FIRST_BYTES_HEADER, Resource, Response, initial_data_url, make_response};

#[loader_response::test]
async fn text_becomes_body_with_preview() -> Result<(), Box<dyn Error>> {
    let mut response = make_response("https://example.com/not-a-fetch").await;

    assert!(response.ok());
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.url(), "");
    assert_eq!(response.headers()["content-length"], "31");
    assert_eq!(response.headers()[FIRST_BYTES_HEADER], "data:,https");
    assert!(response.headers().get("content-type").is_none());

    // the text is the content, it is never loaded
    assert_eq!(response.text().await?, "https://example.com/not-a-fetch");
    Ok(())
}

#[loader_response::test]
async fn text_preview_is_first_five_chars_unencoded() -> Result<(), Box<dyn Error>> {
    let preview = initial_data_url(&Resource::from("héllo wörld")).await;
    assert_eq!(preview.as_deref(), Some("data:,héllo"));

    let preview = initial_data_url(&Resource::from("abc")).await;
    assert_eq!(preview.as_deref(), Some("data:,abc"));
    Ok(())
}

#[loader_response::test]
async fn data_url_text_sets_content_type() -> Result<(), Box<dyn Error>> {
    let response = make_response("data:text/csv,a,b").await;
    assert_eq!(response.headers()["content-type"], "text/csv");
    assert_eq!(response.headers()[FIRST_BYTES_HEADER], "data:,data:");
    Ok(())
}

#[loader_response::test]
async fn bytes_preview_is_base64_of_first_five() -> Result<(), Box<dyn Error>> {
    let mut response = make_response(vec![0u8, 0, 0, 1, 2, 3, 4, 5]).await;
    assert_eq!(response.headers()["content-length"], "8");
    assert_eq!(response.headers()[FIRST_BYTES_HEADER], "data:base64,AAAAAQI=");
    assert_eq!(response.bytes().await?.as_ref(), &[0, 0, 0, 1, 2, 3, 4, 5]);

    let response = make_response(&b"foo"[..]).await;
    assert_eq!(response.headers()[FIRST_BYTES_HEADER], "data:base64,Zm9v");

    let response = make_response(Vec::<u8>::new()).await;
    assert_eq!(response.headers()["content-length"], "0");
    assert_eq!(response.headers()[FIRST_BYTES_HEADER], "data:base64,");
    Ok(())
}

#[loader_response::test]
async fn blob_gets_type_url_and_preview() -> Result<(), Box<dyn Error>> {
    let blob = Blob::new(&b"\x89PNG\r\n\x1a\n"[..], "image/png").with_name("tiles/0/0/0.png");
    let mut response = make_response(blob).await;

    assert_eq!(response.url(), "tiles/0/0/0.png");
    assert_eq!(response.headers()["content-type"], "image/png");
    assert_eq!(response.headers()["content-length"], "8");
    assert_eq!(
        response.headers()[FIRST_BYTES_HEADER],
        "data:image/png;base64,iVBORw0="
    );
    assert_eq!(response.bytes().await?.len(), 8);
    Ok(())
}

#[loader_response::test]
async fn untyped_blob_preview_is_octet_stream() -> Result<(), Box<dyn Error>> {
    let response = make_response(Blob::new(&b"abc"[..], "")).await;
    assert!(response.headers().get("content-type").is_none());
    assert_eq!(
        response.headers()[FIRST_BYTES_HEADER],
        "data:application/octet-stream;base64,YWJj"
    );
    Ok(())
}

#[loader_response::test]
async fn response_passes_through_unchanged() -> Result<(), Box<dyn Error>> {
    let original = Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header(
            loader_response::http::HeaderName::from_static("x-origin"),
            HeaderValue::from_static("cache"),
        )
        .url("https://example.com/missing.json")
        .body("gone");

    let once = make_response(original).await;
    let mut twice = make_response(once).await;

    assert_eq!(twice.status(), StatusCode::NOT_FOUND);
    assert_eq!(twice.url(), "https://example.com/missing.json");
    assert_eq!(twice.headers()["x-origin"], "cache");
    assert!(twice.headers().get(FIRST_BYTES_HEADER).is_none());
    assert!(twice.headers().get("content-length").is_none());
    assert_eq!(twice.text().await?, "gone");
    Ok(())
}

#[loader_response::test]
async fn url_survives_repeated_reads() -> Result<(), Box<dyn Error>> {
    let blob = Blob::new(vec![1, 2, 3], "application/octet-stream").with_name("file:///data/a.bin");
    let mut response = make_response(blob).await;

    assert_eq!(response.url(), "file:///data/a.bin");
    response.bytes().await?;
    assert_eq!(response.url(), "file:///data/a.bin");
    assert_eq!(response.url(), "file:///data/a.bin");
    Ok(())
}

#[loader_response::test]
async fn stream_body_has_no_preview() -> Result<(), Box<dyn Error>> {
    let chunks = vec!["hello ", "stream"];
    let mut response = make_response(Body::from_stream(futures_lite::stream::iter(chunks))).await;

    assert!(response.headers().get(FIRST_BYTES_HEADER).is_none());
    assert!(response.headers().get("content-type").is_none());
    assert_eq!(response.text().await?, "hello stream");
    Ok(())
}

#[loader_response::test]
async fn unprintable_text_preview_is_omitted() -> Result<(), Box<dyn Error>> {
    let mut response = make_response("a\nb\nc\n").await;
    assert!(response.headers().get(FIRST_BYTES_HEADER).is_none());
    assert_eq!(response.headers()["content-length"], "6");
    assert_eq!(response.text().await?, "a\nb\nc\n");
    Ok(())
}
