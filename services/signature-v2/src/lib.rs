//! AWS signature version 2 for the RADOS Gateway admin API.
//!
//! The gateway authenticates admin requests exactly like S3 requests, with
//! an `Authorization: AWS <access_key_id>:<signature>` header.
//!
//! ## Example
//!
//! ```no_run
//! use rgwadmin_core::{Context, OsEnv, Signer};
//! use rgwadmin_signature_v2::{EnvCredentialProvider, RequestSigner};
//!
//! # async fn example() -> rgwadmin_core::Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let signer = Signer::new(ctx, EnvCredentialProvider::new(), RequestSigner::new());
//!
//! let (mut parts, _) = http::Request::get("https://rgw.example.com/admin/user?uid=alice")
//!     .body(())?
//!     .into_parts();
//! signer.sign(&mut parts).await?;
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{RGW_ADMIN_ACCESS_KEY_ID, RGW_ADMIN_SECRET_ACCESS_KEY};

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::{EnvCredentialProvider, StaticCredentialProvider};
