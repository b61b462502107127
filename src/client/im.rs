use std::sync::Arc;
use std::time::Duration;

use failure::Error;
use serde::Serialize;
use tracing::{debug, error};

use crate::client::config::Config;
use crate::client::endpoint::Endpoint;
use crate::client::transport::{HttpTransport, RawResponse, Transport};
use crate::common::constants::DEFAULT_USER_SIG_EXPIRY;
use crate::session::{Clock, SessionManager, Signer, SystemClock, TlsSigV2};

/// Outcome of one REST call once a token was obtained.
///
/// `Received` covers every answer the transport produced, whatever its HTTP
/// status or embedded `ActionStatus`. `Failed` means no answer arrived.
#[derive(Debug)]
pub enum Reply {
    Received(RawResponse),
    Failed(Error),
}

impl Reply {
    pub fn response(&self) -> Option<&RawResponse> {
        match *self {
            Reply::Received(ref resp) => Some(resp),
            Reply::Failed(_) => None,
        }
    }

    pub fn into_response(self) -> Option<RawResponse> {
        match self {
            Reply::Received(resp) => Some(resp),
            Reply::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        match *self {
            Reply::Failed(_) => true,
            Reply::Received(_) => false,
        }
    }
}

pub struct ImClientBuilder {
    config: Config,
    transport: Option<Box<dyn Transport>>,
    signer: Option<Arc<dyn Signer>>,
    clock: Option<Arc<dyn Clock>>,
}

impl ImClientBuilder {
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    pub fn signer<S: Signer + 'static>(mut self, signer: S) -> Self {
        self.signer = Some(Arc::new(signer));
        self
    }

    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn build(self) -> Result<ImClient, Error> {
        let config = self.config;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::new(&config.http)?),
        };
        let signer = self.signer.unwrap_or_else(|| {
            Arc::new(TlsSigV2::new(
                config.credentials.sdk_app_id,
                config.credentials.secret_key.clone(),
            ))
        });
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let session = SessionManager::new(
            config.credentials.sdk_app_id,
            config.credentials.admin.clone(),
            config.validity_window,
            signer,
            clock,
        );
        Ok(ImClient {
            config,
            session,
            transport,
        })
    }
}

/// Blocking client for the IM REST API. Each instance owns its own admin
/// session, so clients for different apps or identities never interfere.
pub struct ImClient {
    config: Config,
    session: SessionManager,
    transport: Box<dyn Transport>,
}

impl ImClient {
    pub fn new(config: Config) -> Result<Self, Error> {
        Self::builder(config).build()
    }

    pub fn builder(config: Config) -> ImClientBuilder {
        ImClientBuilder {
            config,
            transport: None,
            signer: None,
            clock: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Mints a token for an end user with the default 180 day lifetime.
    pub fn user_sig(&self, user_id: &str) -> Result<String, Error> {
        self.user_sig_with_expiry(user_id, DEFAULT_USER_SIG_EXPIRY)
    }

    pub fn user_sig_with_expiry(&self, user_id: &str, expiry: Duration) -> Result<String, Error> {
        self.session.signer().sign(user_id, expiry)
    }

    /// Signs, encodes and posts one request. Only signing errors surface as
    /// `Err`; encoding and transport failures are logged and become
    /// `Reply::Failed`.
    pub(crate) fn dispatch<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> Result<Reply, Error> {
        let query = self.session.query_parameters()?;
        let url = self.config.endpoint_url(endpoint.path());

        let payload = match serde_json::to_vec(body) {
            Ok(payload) => payload,
            Err(err) => {
                error!(operation = endpoint.name(), error = %err, "could not encode request body");
                return Ok(Reply::Failed(err.into()));
            }
        };

        match self.transport.post(&url, &query.to_pairs(), payload) {
            Ok(resp) => {
                debug!(operation = endpoint.name(), status = resp.status, "request completed");
                Ok(Reply::Received(resp))
            }
            Err(err) => {
                error!(operation = endpoint.name(), error = %err, "request failed");
                Ok(Reply::Failed(err))
            }
        }
    }
}
