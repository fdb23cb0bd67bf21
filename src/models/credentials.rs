use secrecy::SecretString;

/// One backend endpoint the client can talk to.
///
/// The base url is injected configuration, never a hardcoded constant. The
/// api key is optional (local deployments run open) and is kept as a secret
/// so it cannot leak through Debug output or logs.
#[derive(Clone)]
pub struct Credentials {
    pub base_url: String,
    pub api_key: Option<SecretString>,
}

impl Credentials {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            api_key: None,
        }
    }

    pub fn with_api_key(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key: Some(SecretString::from(api_key)),
        }
    }
}
