//! Core components for composing and signing RADOS Gateway admin requests.
//!
//! This crate provides the foundational types and traits for the rgwadmin
//! ecosystem. Service crates plug signing schemes into it, context crates
//! plug transports into it.
//!
//! ## Overview
//!
//! - **Link**: a node of the chain a caller builds one fluent call at a
//!   time, contributing a uri segment, the method, headers, parameters or a
//!   body.
//! - **Parameter**: a named, placement-aware input checked by validators.
//! - **Request**: the immutable result of compiling a valid chain.
//! - **Context**: the transport and environment a client is allowed to use.
//! - **Signer**: loads a credential and signs the compiled request.
//!
//! ## Example
//!
//! ```
//! use http::Method;
//! use rgwadmin_core::{validators, Link, MethodLink, Parameter, ParameterLink, Request, UriLink};
//!
//! #[derive(Debug)]
//! struct UserInfo {
//!     params: Vec<Parameter>,
//! }
//!
//! impl Link for UserInfo {
//!     fn parent(&self) -> Option<&dyn Link> {
//!         None
//!     }
//!     fn as_uri_link(&self) -> Option<&dyn UriLink> {
//!         Some(self)
//!     }
//!     fn as_method_link(&self) -> Option<&dyn MethodLink> {
//!         Some(self)
//!     }
//!     fn as_parameter_link(&self) -> Option<&dyn ParameterLink> {
//!         Some(self)
//!     }
//! }
//!
//! impl UriLink for UserInfo {
//!     fn uri_part(&self) -> &str {
//!         "/user"
//!     }
//! }
//!
//! impl MethodLink for UserInfo {
//!     fn request_method(&self) -> Method {
//!         Method::GET
//!     }
//! }
//!
//! impl ParameterLink for UserInfo {
//!     fn parameters(&self) -> &[Parameter] {
//!         &self.params
//!     }
//! }
//!
//! # fn main() -> rgwadmin_core::Result<()> {
//! let link = UserInfo {
//!     params: vec![Parameter::query("uid")
//!         .require_value()
//!         .require_not_empty()
//!         .with_validator(validators::string())
//!         .bind("alice")],
//! };
//! let req = Request::compile(&link)?;
//! assert_eq!(req.query_string(), "uid=alice");
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC-SHA1 and base64 helpers
//! - [`time`]: http and admin date formats
//! - [`utils`]: redaction of secrets in debug output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};
mod error;
pub use error::{
    ApiError, Error, ErrorKind, Result, TransportError, TransportErrorCode, ValidationError,
    ValidationReason,
};

mod validator;
pub use validator::{
    validators, BooleanValidator, BucketNameValidator, DateTimeValidator, IntegerValidator,
    OneOfValidator, SharedValidator, StringValidator, Validator, CANNED_ACLS, KEY_TYPES,
    METADATA_SECTIONS, QUOTA_TYPES, SUBUSER_ACCESS,
};
mod parameter;
pub use parameter::{Location, Parameter, ParameterValue};
mod link;
pub use link::{
    chain, BodyLink, ExecutableLink, HeaderLink, Link, MethodLink, ParameterLink, UriLink,
};
mod request;
pub use request::Request;

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod signer;
pub use signer::Signer;
