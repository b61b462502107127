use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use failure::Error;
use parking_lot::Mutex;
use tracing::info;

use crate::common::constants::CONTENT_TYPE;
use crate::session::clock::Clock;
use crate::session::signer::Signer;

/// A signed token for one identity, valid for `validity_window` after
/// `issued_at`. Replaced wholesale on refresh.
#[derive(Clone)]
pub struct SessionCredential {
    subject_identity: String,
    token_value: String,
    issued_at: Instant,
    validity_window: Duration,
}

impl SessionCredential {
    pub fn subject_identity(&self) -> &str {
        &self.subject_identity
    }

    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    pub fn issued_at(&self) -> Instant {
        self.issued_at
    }

    pub fn validity_window(&self) -> Duration {
        self.validity_window
    }

    /// The instant `issued_at + validity_window` itself counts as stale.
    pub fn is_stale(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.issued_at) >= self.validity_window
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SessionCredential")
            .field("subject_identity", &self.subject_identity)
            .field("issued_at", &self.issued_at)
            .field("validity_window", &self.validity_window)
            .finish()
    }
}

/// Query string attached to every REST call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryParameters {
    pub sdkappid: u64,
    pub identifier: String,
    pub usersig: String,
    pub random: u32,
    pub contenttype: &'static str,
}

impl QueryParameters {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("sdkappid", self.sdkappid.to_string()),
            ("identifier", self.identifier.clone()),
            ("usersig", self.usersig.clone()),
            ("random", self.random.to_string()),
            ("contenttype", self.contenttype.to_owned()),
        ]
    }
}

/// Owns the admin session token and re-signs it once it goes stale.
///
/// The check-and-refresh runs under a lock, so callers sharing one manager
/// across threads trigger at most one signing call per expiry.
pub struct SessionManager {
    sdk_app_id: u64,
    admin: String,
    validity_window: Duration,
    signer: Arc<dyn Signer>,
    clock: Arc<dyn Clock>,
    credential: Mutex<Option<SessionCredential>>,
}

impl SessionManager {
    pub fn new<A: Into<String>>(
        sdk_app_id: u64,
        admin: A,
        validity_window: Duration,
        signer: Arc<dyn Signer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sdk_app_id,
            admin: admin.into(),
            validity_window,
            signer,
            clock,
            credential: Mutex::new(None),
        }
    }

    pub fn admin(&self) -> &str {
        &self.admin
    }

    pub fn signer(&self) -> &Arc<dyn Signer> {
        &self.signer
    }

    /// Snapshot of the credential currently held, if any was issued.
    pub fn credential(&self) -> Option<SessionCredential> {
        self.credential.lock().clone()
    }

    /// Fresh query parameters for one outbound call. Signing errors are
    /// returned as-is; a failed refresh leaves the previous state untouched.
    pub fn query_parameters(&self) -> Result<QueryParameters, Error> {
        let usersig = self.current_token()?;
        Ok(QueryParameters {
            sdkappid: self.sdk_app_id,
            identifier: self.admin.clone(),
            usersig,
            random: rand::random::<u32>(),
            contenttype: CONTENT_TYPE,
        })
    }

    fn current_token(&self) -> Result<String, Error> {
        let mut slot = self.credential.lock();
        let now = self.clock.now();

        if let Some(ref credential) = *slot {
            if !credential.is_stale(now) {
                return Ok(credential.token_value.clone());
            }
        }

        let token_value = self.signer.sign(&self.admin, self.validity_window)?;
        info!(identity = %self.admin, validity_secs = self.validity_window.as_secs(), "issued admin session token");
        *slot = Some(SessionCredential {
            subject_identity: self.admin.clone(),
            token_value: token_value.clone(),
            issued_at: now,
            validity_window: self.validity_window,
        });
        Ok(token_value)
    }
}
