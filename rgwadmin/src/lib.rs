//! Client for the RADOS Gateway admin API.
//!
//! Every admin operation is a chain of links: a root link chosen on the
//! [`Client`] and a leaf link carrying the parameters. Executing the leaf
//! compiles the chain, validates every parameter, signs the request with
//! AWS signature version 2 and decodes the response.
//!
//! ```no_run
//! use rgwadmin::{Client, Config, ExecutableLink, ErrorKind};
//!
//! # async fn example() -> rgwadmin::Result<()> {
//! let ctx = rgwadmin::default_context();
//! let config = Config::default()
//!     .with_address("rgw.example.com:8080")
//!     .with_no_ssl(true)
//!     .with_credential("0555b35654ad1656d804", "h7GhxuBLTrlhVUyxSPUKUV8r");
//! let client = Client::new(ctx, config);
//!
//! client.bucket().create("my-bucket").execute().await?;
//!
//! match client.user().info("alice", Some(true)).execute().await {
//!     Ok(user) => println!("{user:?}"),
//!     Err(err) if err.kind() == ErrorKind::Api => {
//!         let code = err.api_error().map(|e| e.code.as_str()).unwrap_or_default();
//!         println!("gateway said {code}")
//!     }
//!     Err(err) => return Err(err),
//! }
//! # Ok(())
//! # }
//! ```

pub use rgwadmin_core::*;

/// AWS signature version 2 signer.
pub mod v2 {
    pub use rgwadmin_signature_v2::*;
}

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

mod constants;
pub use constants::*;

mod config;
pub use config::Config;

mod client;
pub use client::{Client, DefaultSigner};

pub mod chain;
pub mod models;
