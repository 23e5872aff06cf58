use std::collections::BTreeMap;
use std::fmt::Write;

use http::header::AUTHORIZATION;
use http::header::CONTENT_TYPE;
use http::header::DATE;
use http::HeaderMap;
use http::HeaderValue;
use log::debug;
use rgwadmin_core::hash::base64_hmac_sha1;
use rgwadmin_core::time::{format_http_date, now, DateTime};
use rgwadmin_core::{Context, Error, Result, SignRequest};

use crate::constants::*;
use crate::Credential;

/// RequestSigner implements AWS signature version 2 as verified by the
/// gateway for admin requests.
///
/// - [Signing and Authenticating REST Requests](https://docs.aws.amazon.com/AmazonS3/latest/userguide/RESTAuthentication.html)
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a signer using the current time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid(
                "missing credential for signing admin request",
            ));
        };

        if !parts.headers.contains_key(DATE) && !parts.headers.contains_key(X_AMZ_DATE) {
            let now = self.time.unwrap_or_else(now);
            parts
                .headers
                .insert(DATE, format_http_date(now).parse::<HeaderValue>()?);
        }

        let string_to_sign = string_to_sign(parts)?;
        let signature = base64_hmac_sha1(
            cred.secret_access_key.as_bytes(),
            string_to_sign.as_bytes(),
        );

        let mut value: HeaderValue = format!("AWS {}:{}", cred.access_key_id, signature).parse()?;
        value.set_sensitive(true);
        parts.headers.insert(AUTHORIZATION, value);

        Ok(())
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// VERB + "\n" +
/// Content-MD5 + "\n" +
/// Content-Type + "\n" +
/// (x-amz-date or Date) + "\n" +
/// CanonicalizedAmzHeaders +
/// CanonicalizedResource;
/// ```
fn string_to_sign(parts: &http::request::Parts) -> Result<String> {
    let date = match parts.headers.get(X_AMZ_DATE) {
        Some(v) => v,
        None => parts
            .headers
            .get(DATE)
            .ok_or_else(|| Error::request_invalid("request has no date to sign"))?,
    };

    let mut s = String::new();
    writeln!(&mut s, "{}", parts.method.as_str())?;
    writeln!(
        &mut s,
        "{}",
        header_or_default(&parts.headers, CONTENT_MD5)?
    )?;
    writeln!(
        &mut s,
        "{}",
        header_or_default(&parts.headers, CONTENT_TYPE.as_str())?
    )?;
    writeln!(&mut s, "{}", date.to_str()?)?;
    s.write_str(&canonicalize_amz_headers(&parts.headers)?)?;
    s.write_str(&canonicalize_resource(&parts.uri))?;

    debug!("string to sign: {}", &s);
    Ok(s)
}

fn header_or_default<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str> {
    match headers.get(name) {
        Some(v) => Ok(v.to_str()?),
        None => Ok(""),
    }
}

/// Every `x-amz-*` header as `name:value\n`, sorted by name, multiple
/// values trimmed and joined by `,`.
fn canonicalize_amz_headers(headers: &HeaderMap) -> Result<String> {
    let mut amz: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (name, value) in headers {
        if name.as_str().starts_with(X_AMZ_PREFIX) {
            amz.entry(name.as_str())
                .or_default()
                .push(value.to_str()?.trim());
        }
    }

    let mut s = String::new();
    for (name, values) in amz {
        writeln!(&mut s, "{}:{}", name, values.join(","))?;
    }
    Ok(s)
}

/// Path plus sorted sub-resources, e.g. `/admin/bucket?policy`.
fn canonicalize_resource(uri: &http::Uri) -> String {
    let mut params: Vec<(String, String)> =
        form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes())
            .filter(|(k, _)| SUBRESOURCES.contains(k.as_ref()))
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
    params.sort();

    let mut s = uri.path().to_string();
    for (idx, (k, v)) in params.iter().enumerate() {
        s.push(if idx == 0 { '?' } else { '&' });
        s.push_str(k);
        if !v.is_empty() {
            s.push('=');
            s.push_str(v);
        }
    }
    s
}
