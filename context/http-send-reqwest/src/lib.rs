//! [`HttpSend`] implementation backed by reqwest.
//!
//! The default client follows redirects, keeps HTTP error statuses as
//! ordinary responses and hands back bodies exactly as received, without
//! decoding any content encoding.

use std::error::Error as _;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use reqwest::redirect::Policy;
use reqwest::{Client, Request};
use rgwadmin_core::{Error, HttpSend, Result, TransportError, TransportErrorCode};

/// Maximum number of redirects followed by the default client.
const MAX_REDIRECTS: usize = 10;

/// HttpSend over a [`reqwest::Client`].
#[derive(Debug)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl Default for ReqwestHttpSend {
    fn default() -> Self {
        Self::try_default().expect("reqwest client with default admin options must build")
    }
}

impl ReqwestHttpSend {
    /// Build the default client: follows redirects, never decodes bodies.
    ///
    /// Fails if the TLS backend can not be initialized.
    pub fn try_default() -> Result<Self> {
        let client = Client::builder()
            .redirect(Policy::limited(MAX_REDIRECTS))
            .no_gzip()
            .no_brotli()
            .no_deflate()
            .build()
            .map_err(|err| {
                Error::unexpected(format!("failed to build reqwest client: {err}"))
                    .with_source(err)
            })?;

        Ok(Self { client })
    }

    /// Create a new ReqwestHttpSend with a reqwest::Client.
    ///
    /// The caller is responsible for configuring the client so that it
    /// does not decode response bodies.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(transport_error)?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(transport_error)?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(transport_error)?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

/// Classify a reqwest failure.
fn transport_error(err: reqwest::Error) -> Error {
    let code = if err.is_connect() {
        TransportErrorCode::Connect
    } else if err.is_timeout() {
        TransportErrorCode::Timeout
    } else if err.is_redirect() {
        TransportErrorCode::Redirect
    } else if err.is_body() || err.is_decode() {
        TransportErrorCode::Body
    } else if err.is_request() || err.is_builder() {
        TransportErrorCode::Request
    } else {
        TransportErrorCode::Other
    };

    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    debug!("reqwest failed ({code}): {message}");
    Error::transport(TransportError::new(code, message))
}
