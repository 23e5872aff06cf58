//! Link chain used to compose one admin request.
//!
//! A chain is built by the caller one fluent call at a time. Every link owns
//! its parent, so the leaf holds the whole chain and walking `parent()`
//! reaches the root. Each link contributes any subset of:
//!
//! - a uri segment ([`UriLink`])
//! - the http method ([`MethodLink`])
//! - static headers ([`HeaderLink`])
//! - parameters ([`ParameterLink`])
//! - a request body ([`BodyLink`])
//!
//! Leaves that can be sent implement [`ExecutableLink`].

use std::fmt::Debug;

use bytes::Bytes;
use http::HeaderMap;
use http::Method;

use crate::{Parameter, Result};

/// A node of the request chain.
///
/// Capability checks default to "absent", implementors override the ones
/// they provide by returning `Some(self)`.
pub trait Link: Debug + Send + Sync {
    /// Parent of this link, `None` for a root link.
    fn parent(&self) -> Option<&dyn Link>;

    /// Uri segment capability.
    fn as_uri_link(&self) -> Option<&dyn UriLink> {
        None
    }

    /// Method capability.
    fn as_method_link(&self) -> Option<&dyn MethodLink> {
        None
    }

    /// Header capability.
    fn as_header_link(&self) -> Option<&dyn HeaderLink> {
        None
    }

    /// Parameter capability.
    fn as_parameter_link(&self) -> Option<&dyn ParameterLink> {
        None
    }

    /// Body capability.
    fn as_body_link(&self) -> Option<&dyn BodyLink> {
        None
    }
}

/// Contributes a uri segment, e.g. `/user`.
///
/// Segments are concatenated from root to leaf without separators, so a
/// segment usually starts with `/`. Path parameters are referenced as
/// `{name}`.
pub trait UriLink {
    /// The uri segment.
    fn uri_part(&self) -> &str;
}

/// Contributes the http method. Exactly one link of a chain does.
pub trait MethodLink {
    /// The request method.
    fn request_method(&self) -> Method;
}

/// Contributes static headers.
pub trait HeaderLink {
    /// Headers to merge, links closer to the leaf win on conflicts.
    fn request_headers(&self) -> &HeaderMap;
}

/// Contributes parameters with their bound values.
pub trait ParameterLink {
    /// Parameters in declaration order.
    fn parameters(&self) -> &[Parameter];
}

/// Contributes the request body.
pub trait BodyLink {
    /// Body bytes.
    fn body(&self) -> Bytes;
}

/// A leaf that can be compiled, sent and decoded.
#[async_trait::async_trait]
pub trait ExecutableLink: Link {
    /// Decoded response.
    type Output;

    /// Compile, sign, send and decode.
    async fn execute(&self) -> Result<Self::Output>;
}

/// Collect the chain ending at `leaf`, ordered root first.
pub fn chain(leaf: &dyn Link) -> Vec<&dyn Link> {
    let mut links = Vec::with_capacity(4);
    let mut cur = Some(leaf);
    while let Some(link) = cur {
        links.push(link);
        cur = link.parent();
    }
    links.reverse();
    links
}
