use crate::http::{Error, error::Context as _};

pub use ::http_body::{Body as HttpBody, Frame, SizeHint};
pub use bytes::Bytes;

use http_body_util::{BodyExt, combinators::UnsyncBoxBody};

/// A HTTP Body.
///
/// Construct this HTTP body using:
/// * `Body::empty` for the empty body, or `impl From<()> for Body`
/// * `From<&[u8]>` (which will make a clone) or `From<Vec<u8>>` or
///   `From<Bytes>` for a `Body` from bytes.
/// * `From<&str>` (which will make a clone) or `From<String>` for a `Body`
///   from strings. The text is always treated as content, never as a
///   location to load from.
/// * `Body::from_json` for a `Body` from a `Serialize` (requires feature
///   `json`)
/// * `Body::from_stream` or `Body::from_try_stream` for a `Body` from a
///   `Stream` of `Into<Bytes>`
/// * `Body::from_http_body` for any `http_body::Body` impl.
///
/// Consume this HTTP body using:
/// * `Body::into_boxed_body` converts it to an `UnsyncBoxBody<Bytes, Error>`.
/// * `async fn Body::contents(&mut self) -> Result<&[u8], Error>` is ready
///   when all contents of the body have been collected, and gives them as a
///   byte slice.
/// * `async fn Body::str_contents(&mut self) -> Result<&str, Error>` is ready
///   when all contents of the body have been collected, and gives them as a str
///   slice.
/// * `async fn Body::json(&mut self) -> Result<T, Error>` gathers body
///   contents and then uses `T: serde::Deserialize` to deserialize to json
///   (requires feature `json`).
#[derive(Debug)]
pub struct Body(BodyInner);

#[derive(Debug)]
enum BodyInner {
    // a boxed http_body::Body impl
    Boxed(UnsyncBoxBody<Bytes, Error>),
    // a body in memory
    Complete(Bytes),
}

impl Body {
    /// Convert this `Body` into an `UnsyncBoxBody<Bytes, Error>`, which
    /// exists to implement the `http_body::Body` trait. Consume the contents
    /// using `http_body_util::BodyExt`, or anywhere else an impl of
    /// `http_body::Body` is accepted.
    pub fn into_boxed_body(self) -> UnsyncBoxBody<Bytes, Error> {
        fn map_e(_: std::convert::Infallible) -> Error {
            unreachable!()
        }
        match self.0 {
            BodyInner::Complete(data) => http_body_util::Full::new(data)
                .map_err(map_e)
                .boxed_unsync(),
            BodyInner::Boxed(b) => b,
        }
    }

    /// Collect the entire contents of this `Body`, and expose them as a
    /// byte slice. This async fn will be pending until the entire `Body` is
    /// copied into memory, or an error occurs.
    pub async fn contents(&mut self) -> Result<&[u8], Error> {
        if let BodyInner::Boxed(_) = &self.0 {
            let prev = std::mem::replace(&mut self.0, BodyInner::Complete(Bytes::new()));
            let BodyInner::Boxed(boxed_body) = prev else {
                unreachable!()
            };
            let collected = boxed_body.collect().await?;
            self.0 = BodyInner::Complete(collected.to_bytes());
        }
        match &self.0 {
            BodyInner::Complete(data) => Ok(&data[..]),
            BodyInner::Boxed(_) => unreachable!(),
        }
    }

    /// Collect the entire contents of this `Body` and take ownership of
    /// them.
    pub async fn into_bytes(mut self) -> Result<Bytes, Error> {
        self.contents().await?;
        match self.0 {
            BodyInner::Complete(data) => Ok(data),
            BodyInner::Boxed(_) => unreachable!(),
        }
    }

    /// Get a value for the length of this `Body`'s content, in bytes, if
    /// known. In-memory bodies always know their length; bodies built from
    /// an `http_body::Body` impl report it only when its `size_hint` is
    /// exact.
    pub fn content_length(&self) -> Option<u64> {
        match &self.0 {
            BodyInner::Boxed(b) => b.size_hint().exact(),
            BodyInner::Complete(data) => Some(data.len() as u64),
        }
    }

    /// Construct an empty Body
    pub fn empty() -> Self {
        Body(BodyInner::Complete(Bytes::new()))
    }

    /// Collect the entire contents of this `Body`, and expose them as a
    /// string slice. This async fn will be pending until the entire `Body` is
    /// copied into memory, or an error occurs. Additonally errors if the
    /// contents of the `Body` were not a utf-8 encoded string.
    pub async fn str_contents(&mut self) -> Result<&str, Error> {
        let bs = self.contents().await?;
        std::str::from_utf8(bs).context("decoding body contents as string")
    }

    /// Construct a `Body` by serializing a type to json. Can fail with a
    /// `serde_json::Error` if serilization fails.
    #[cfg(feature = "json")]
    pub fn from_json<T: serde::Serialize>(data: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::from(serde_json::to_vec(data)?))
    }

    /// Collect the entire contents of this `Body`, and deserialize them from
    /// json. Can fail if the body contents are not utf-8 encoded, are not
    /// valid json, or the json is not accepted by the `serde::Deserialize` impl.
    #[cfg(feature = "json")]
    pub async fn json<T: for<'a> serde::Deserialize<'a>>(&mut self) -> Result<T, Error> {
        let str = self.str_contents().await?;
        serde_json::from_str(str).context("decoding body contents as json")
    }

    /// Construct a `Body` backed by a `futures_lite::Stream` impl. The stream
    /// is polled when the body contents are read.
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: futures_lite::Stream + Send + 'static,
        <S as futures_lite::Stream>::Item: Into<Bytes>,
    {
        use futures_lite::StreamExt;
        Self::from_http_body(http_body_util::StreamBody::new(
            stream.map(|bs| Ok::<_, Error>(Frame::data(bs.into()))),
        ))
    }

    /// Construct a `Body` backed by a `futures_lite::Stream` impl. If the
    /// stream gives an error, reading the body fails with that error.
    pub fn from_try_stream<S, D, E>(stream: S) -> Self
    where
        S: futures_lite::Stream<Item = Result<D, E>> + Send + 'static,
        D: Into<Bytes>,
        E: std::error::Error + Send + Sync + 'static,
    {
        use futures_lite::StreamExt;
        Self::from_http_body(http_body_util::StreamBody::new(
            stream.map(|bs| Ok::<_, Error>(Frame::data(bs?.into()))),
        ))
    }

    /// Construct a `Body` backed by a `http_body::Body`. Trailers, if the
    /// body produces any, are discarded when the contents are collected.
    pub fn from_http_body<B>(http_body: B) -> Self
    where
        B: HttpBody + Send + 'static,
        <B as HttpBody>::Data: Into<Bytes>,
        <B as HttpBody>::Error: Into<Error>,
    {
        Body(BodyInner::Boxed(
            http_body
                .map_frame(|f| f.map_data(Into::into))
                .map_err(Into::into)
                .boxed_unsync(),
        ))
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::empty()
    }
}

impl From<()> for Body {
    fn from(_: ()) -> Body {
        Body::empty()
    }
}
impl From<&[u8]> for Body {
    fn from(bytes: &[u8]) -> Body {
        Body::from(bytes.to_owned())
    }
}
impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Body {
        Body::from(Bytes::from(bytes))
    }
}
impl From<Bytes> for Body {
    fn from(data: Bytes) -> Body {
        Body(BodyInner::Complete(data))
    }
}
impl From<&str> for Body {
    fn from(data: &str) -> Body {
        Body::from(data.as_bytes())
    }
}
impl From<String> for Body {
    fn from(data: String) -> Body {
        Body::from(data.into_bytes())
    }
}
