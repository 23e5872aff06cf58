//! Root and leaf links of the admin API.
//!
//! Every operation is a two level chain: a root link owned by the
//! [`Client`](crate::Client) contributes the resource path and the default
//! headers, the leaf contributes the method, the parameters and sometimes
//! an extra path segment or a body.

use bytes::Bytes;
use rgwadmin_core::{Error, Result};
use serde::de::DeserializeOwned;

/// Declare a root link for the resource at `$uri`.
macro_rules! root_link {
    ($(#[$meta:meta])* $name:ident => $uri:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'c> {
            client: &'c $crate::Client,
        }

        impl<'c> $name<'c> {
            pub(crate) fn new(client: &'c $crate::Client) -> Self {
                Self { client }
            }

            pub(crate) fn client(&self) -> &'c $crate::Client {
                self.client
            }
        }

        impl rgwadmin_core::Link for $name<'_> {
            fn parent(&self) -> Option<&dyn rgwadmin_core::Link> {
                None
            }

            fn as_uri_link(&self) -> Option<&dyn rgwadmin_core::UriLink> {
                Some(self)
            }

            fn as_header_link(&self) -> Option<&dyn rgwadmin_core::HeaderLink> {
                Some(self)
            }
        }

        impl rgwadmin_core::UriLink for $name<'_> {
            fn uri_part(&self) -> &str {
                $uri
            }
        }

        impl rgwadmin_core::HeaderLink for $name<'_> {
            fn request_headers(&self) -> &http::HeaderMap {
                &self.client.config().default_headers
            }
        }
    };
}

/// Declare an executable leaf below `$root`, sent with `$method` and
/// decoded into `$output` by `$decode`.
macro_rules! leaf_link {
    ($(#[$meta:meta])* $name:ident: $root:ident, $method:ident => $output:ty, $decode:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<'c> {
            parent: $root<'c>,
            uri: Option<&'static str>,
            parameters: Vec<rgwadmin_core::Parameter>,
            body: Option<bytes::Bytes>,
        }

        impl<'c> $name<'c> {
            pub(crate) fn new(
                parent: $root<'c>,
                parameters: Vec<rgwadmin_core::Parameter>,
            ) -> Self {
                Self {
                    parent,
                    uri: None,
                    parameters,
                    body: None,
                }
            }

            #[allow(dead_code)]
            pub(crate) fn with_uri(mut self, uri: &'static str) -> Self {
                self.uri = Some(uri);
                self
            }

            #[allow(dead_code)]
            pub(crate) fn with_body(mut self, body: bytes::Bytes) -> Self {
                self.body = Some(body);
                self
            }
        }

        impl rgwadmin_core::Link for $name<'_> {
            fn parent(&self) -> Option<&dyn rgwadmin_core::Link> {
                Some(&self.parent)
            }

            fn as_uri_link(&self) -> Option<&dyn rgwadmin_core::UriLink> {
                self.uri.map(|_| self as &dyn rgwadmin_core::UriLink)
            }

            fn as_method_link(&self) -> Option<&dyn rgwadmin_core::MethodLink> {
                Some(self)
            }

            fn as_parameter_link(&self) -> Option<&dyn rgwadmin_core::ParameterLink> {
                Some(self)
            }

            fn as_body_link(&self) -> Option<&dyn rgwadmin_core::BodyLink> {
                self.body.as_ref().map(|_| self as &dyn rgwadmin_core::BodyLink)
            }
        }

        impl rgwadmin_core::UriLink for $name<'_> {
            fn uri_part(&self) -> &str {
                self.uri.unwrap_or_default()
            }
        }

        impl rgwadmin_core::MethodLink for $name<'_> {
            fn request_method(&self) -> http::Method {
                http::Method::$method
            }
        }

        impl rgwadmin_core::ParameterLink for $name<'_> {
            fn parameters(&self) -> &[rgwadmin_core::Parameter] {
                &self.parameters
            }
        }

        impl rgwadmin_core::BodyLink for $name<'_> {
            fn body(&self) -> bytes::Bytes {
                self.body.clone().unwrap_or_default()
            }
        }

        #[async_trait::async_trait]
        impl<'c> rgwadmin_core::ExecutableLink for $name<'c> {
            type Output = $output;

            async fn execute(&self) -> rgwadmin_core::Result<$output> {
                let resp = self.parent.client().execute(self).await?;
                $decode(resp)
            }
        }
    };
}

mod bucket;
pub use bucket::*;

mod metadata;
pub use metadata::*;

mod usage;
pub use usage::*;

mod user;
pub use user::*;

/// Decode a JSON document.
pub(crate) fn decode_json<T: DeserializeOwned>(resp: http::Response<Bytes>) -> Result<T> {
    serde_json::from_slice(resp.body()).map_err(|err| {
        Error::response_invalid(format!("failed to decode response body: {err}")).with_source(err)
    })
}

/// Discard the body of an operation that answers with nothing useful.
pub(crate) fn decode_empty(_: http::Response<Bytes>) -> Result<()> {
    Ok(())
}
