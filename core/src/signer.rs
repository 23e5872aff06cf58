use std::sync::Arc;

use crate::{Context, ProvideCredential, Result, SignRequest, SigningCredential};

/// Signer is the main struct used to sign the request.
///
/// The credential is loaded on every call, so rotated credentials are
/// picked up by the next request.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,
            loader: Arc::new(loader),
            builder: Arc::new(builder),
        }
    }

    /// Sign the request.
    pub async fn sign(&self, req: &mut http::request::Parts) -> Result<()> {
        let credential = self.loader.provide_credential(&self.ctx).await?;
        let credential = credential.filter(|c| c.is_valid());

        self.builder
            .sign_request(&self.ctx, req, credential.as_ref())
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use http::HeaderValue;

    use super::*;
    use crate::{Error, ErrorKind};

    #[derive(Clone, Debug)]
    struct Token(String);

    impl SigningCredential for Token {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[derive(Debug, Default)]
    struct CountingLoader {
        token: &'static str,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl ProvideCredential for CountingLoader {
        type Credential = Token;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Token>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(Token(self.token.to_string())))
        }
    }

    #[derive(Debug)]
    struct BearerSigner;

    #[async_trait::async_trait]
    impl SignRequest for BearerSigner {
        type Credential = Token;

        async fn sign_request(
            &self,
            _: &Context,
            req: &mut http::request::Parts,
            credential: Option<&Token>,
        ) -> Result<()> {
            let Some(token) = credential else {
                return Err(Error::credential_invalid("missing token"));
            };
            req.headers.insert(
                http::header::AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token.0))?,
            );
            Ok(())
        }
    }

    fn parts() -> http::request::Parts {
        http::Request::new(()).into_parts().0
    }

    #[tokio::test]
    async fn test_credential_loaded_per_sign() -> Result<()> {
        let calls = Arc::new(AtomicUsize::new(0));
        let signer = Signer::new(
            Context::new(),
            CountingLoader {
                token: "abc",
                calls: calls.clone(),
            },
            BearerSigner,
        );

        let mut req = parts();
        signer.sign(&mut req).await?;
        signer.sign(&mut req).await?;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(req.headers[http::header::AUTHORIZATION], "Bearer abc");
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_credential_is_dropped() {
        let signer = Signer::new(Context::new(), CountingLoader::default(), BearerSigner);

        let err = signer.sign(&mut parts()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }
}
