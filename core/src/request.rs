use bytes::Bytes;
use http::header::HeaderName;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

use crate::link::chain;
use crate::{Error, Link, Location, ParameterValue, Result};

/// Everything except unreserved characters is encoded in query keys,
/// query values and path parameters.
static URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Request compiled from a link chain.
///
/// Produced only by [`Request::compile`] on a fully valid chain.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    query: Vec<(String, Option<String>)>,
    headers: HeaderMap,
    body: Bytes,
    authenticated: bool,
}

impl Request {
    /// Compile the chain ending at `leaf` into a request.
    ///
    /// Parameters are validated first, root to leaf in declaration order,
    /// and the first failure is returned as
    /// [`ErrorKind::ParameterInvalid`](crate::ErrorKind::ParameterInvalid).
    ///
    /// # Panics
    ///
    /// Panics if the chain does not contain exactly one [`MethodLink`](crate::MethodLink),
    /// which is a wiring bug of the chain itself.
    pub fn compile(leaf: &dyn Link) -> Result<Request> {
        let links = chain(leaf);

        for param in links
            .iter()
            .filter_map(|l| l.as_parameter_link())
            .flat_map(|l| l.parameters())
        {
            param.validate().map_err(Error::parameter_invalid)?;
        }

        let methods: Vec<Method> = links
            .iter()
            .filter_map(|l| l.as_method_link())
            .map(|l| l.request_method())
            .collect();
        let method = match methods.as_slice() {
            [method] => method.clone(),
            _ => panic!(
                "link chain must contain exactly one method link, found {}: {:?}",
                methods.len(),
                leaf
            ),
        };

        let mut path = String::new();
        let mut query = Vec::new();
        let mut headers = HeaderMap::new();
        let mut path_params = Vec::new();
        let mut body = Bytes::new();

        for link in &links {
            if let Some(l) = link.as_uri_link() {
                path.push_str(l.uri_part());
            }
            if let Some(l) = link.as_header_link() {
                merge_headers(&mut headers, l.request_headers());
            }
            if let Some(l) = link.as_parameter_link() {
                let mut param_headers = HeaderMap::new();

                for param in l.parameters() {
                    let value = param.value();
                    match (param.location(), value) {
                        (Location::Path, None) => path_params.push((param.name(), String::new())),
                        (_, None) => {}
                        (Location::Query, Some(ParameterValue::Flag)) => {
                            query.push((param.name().to_string(), None))
                        }
                        (Location::Query, Some(v)) => query.extend(
                            v.values()
                                .map(|v| (param.name().to_string(), Some(v.to_string()))),
                        ),
                        (Location::Header, Some(v)) => {
                            let name = HeaderName::from_bytes(param.name().as_bytes())?;
                            for v in v.values() {
                                param_headers.append(name.clone(), HeaderValue::from_str(v)?);
                            }
                        }
                        (Location::Path, Some(v)) => {
                            path_params.push((param.name(), v.to_string()))
                        }
                    }
                }

                merge_headers(&mut headers, &param_headers);
            }
            if let Some(l) = link.as_body_link() {
                body = l.body();
            }
        }

        for (name, value) in path_params {
            let encoded = utf8_percent_encode(&value, &URI_ENCODE_SET).to_string();
            path = path.replace(&format!("{{{name}}}"), &encoded);
        }

        Ok(Request {
            method,
            path,
            query,
            headers,
            body,
            authenticated: true,
        })
    }

    /// Mark the request as not requiring a signature.
    pub fn anonymous(mut self) -> Self {
        self.authenticated = false;
        self
    }

    /// Request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request path relative to the admin endpoint, e.g. `/user`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query pairs in chain declaration order, `None` for bare keys.
    pub fn query(&self) -> &[(String, Option<String>)] {
        &self.query
    }

    /// Merged headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Request body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Does the request need to be signed?
    pub fn authenticated(&self) -> bool {
        self.authenticated
    }

    /// Render the query string.
    ///
    /// ```shell
    /// [(quota, None), (uid, Some(alice))] => "quota&uid=alice"
    /// ```
    pub fn query_string(&self) -> String {
        let mut s = String::with_capacity(16);

        for (idx, (k, v)) in self.query.iter().enumerate() {
            if idx != 0 {
                s.push('&');
            }

            s.extend(utf8_percent_encode(k, &URI_ENCODE_SET));
            if let Some(v) = v {
                s.push('=');
                s.extend(utf8_percent_encode(v, &URI_ENCODE_SET));
            }
        }

        s
    }

    /// Convert into an http request against `base`, e.g.
    /// `https://rgw.example.com/admin`.
    pub fn into_http_request(self, base: &str) -> Result<http::Request<Bytes>> {
        let mut uri = format!("{base}{}", self.path);
        if !self.query.is_empty() {
            uri.push('?');
            uri.push_str(&self.query_string());
        }

        let mut req = http::Request::builder()
            .method(self.method)
            .uri(uri)
            .body(self.body)?;
        *req.headers_mut() = self.headers;

        Ok(req)
    }
}

/// Merge `src` into `dst`, values of `src` replace all values of the same
/// name in `dst`.
fn merge_headers(dst: &mut HeaderMap, src: &HeaderMap) {
    for name in src.keys() {
        dst.remove(name);
        for value in src.get_all(name) {
            dst.append(name.clone(), value.clone());
        }
    }
}
