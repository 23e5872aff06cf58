use bytes::Bytes;
use log::{debug, error};
use rgwadmin_core::{ApiError, Context, Error, Link, Request, Result, Signer};
use rgwadmin_signature_v2::{
    Credential, EnvCredentialProvider, RequestSigner, StaticCredentialProvider,
};

use crate::chain::{BucketRootLink, MetadataRootLink, UsageRootLink, UserRootLink};
use crate::Config;

/// Signer used by [`Client`].
pub type DefaultSigner = Signer<Credential>;

/// Client for the gateway admin API.
///
/// Operations start from one of the root links:
///
/// ```no_run
/// # async fn example() -> rgwadmin::Result<()> {
/// use rgwadmin::{Client, ExecutableLink};
///
/// let client = Client::from_env();
/// let user = client.user().info("alice", Some(true)).execute().await?;
/// println!("{} owns {} keys", user.display_name, user.keys.len());
/// # Ok(())
/// # }
/// ```
///
/// The client holds no mutable state and can be shared across tasks.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    config: Config,
    signer: DefaultSigner,
}

impl Client {
    /// Create a client.
    ///
    /// Requests are signed with the credentials of `config` when both keys
    /// are set, and with credentials from the environment otherwise.
    pub fn new(ctx: Context, config: Config) -> Self {
        let signer = match (&config.access_key_id, &config.secret_access_key) {
            (Some(ak), Some(sk)) => Signer::new(
                ctx.clone(),
                StaticCredentialProvider::new(ak, sk),
                RequestSigner::new(),
            ),
            _ => Signer::new(
                ctx.clone(),
                EnvCredentialProvider::new(),
                RequestSigner::new(),
            ),
        };

        Self {
            ctx,
            config,
            signer,
        }
    }

    /// Create a client over [`default_context`](crate::default_context)
    /// configured from the environment.
    #[cfg(feature = "default-context")]
    pub fn from_env() -> Self {
        let ctx = crate::default_context();
        let config = Config::default().from_env(&ctx);
        Self::new(ctx, config)
    }

    /// Replace the signer.
    pub fn with_signer(mut self, signer: DefaultSigner) -> Self {
        self.signer = signer;
        self
    }

    /// Config of this client.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bucket operations under `/bucket`.
    pub fn bucket(&self) -> BucketRootLink<'_> {
        BucketRootLink::new(self)
    }

    /// User operations under `/user`.
    pub fn user(&self) -> UserRootLink<'_> {
        UserRootLink::new(self)
    }

    /// Usage operations under `/usage`.
    pub fn usage(&self) -> UsageRootLink<'_> {
        UsageRootLink::new(self)
    }

    /// Metadata operations under `/metadata`.
    pub fn metadata(&self) -> MetadataRootLink<'_> {
        MetadataRootLink::new(self)
    }

    /// Compile the chain ending at `leaf` and send it.
    ///
    /// Nothing is sent if a parameter of the chain is invalid.
    pub async fn execute(&self, leaf: &dyn Link) -> Result<http::Response<Bytes>> {
        let req = Request::compile(leaf)?;
        self.send(req).await
    }

    /// Sign and send a compiled request.
    ///
    /// Responses with a status of 400 or above are returned as
    /// [`ErrorKind::Api`](crate::ErrorKind::Api).
    pub async fn send(&self, req: Request) -> Result<http::Response<Bytes>> {
        let silent = self.config.is_silent();
        let base = self.config.service_address()?;

        let authenticated = req.authenticated();
        let req = req.into_http_request(&base)?;
        if !silent && req.uri().query().is_some() {
            debug!("Compiled URL: {}", req.uri());
        }

        let (mut parts, body) = req.into_parts();
        if authenticated {
            self.signer.sign(&mut parts).await?;
        }

        if !silent {
            debug!("Executing {} {}", parts.method, parts.uri.path());
        }

        let resp = match self
            .ctx
            .http_send(http::Request::from_parts(parts, body))
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                if !silent {
                    error!("Query failed: {err}");
                }
                return Err(err);
            }
        };

        let status = resp.status();
        if !silent {
            debug!(
                "Query returned {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            );
        }

        if status.as_u16() >= 400 {
            return Err(Error::api(ApiError::from_response(&resp)));
        }

        Ok(resp)
    }
}
