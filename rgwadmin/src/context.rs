use rgwadmin_core::{Context, OsEnv};
use rgwadmin_http_send_reqwest::ReqwestHttpSend;

/// Create a context with the reqwest transport and the OS environment.
///
/// The transport follows redirects and never decodes response bodies.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}
