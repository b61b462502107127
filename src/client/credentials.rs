use std::env;
use std::fmt;

use failure::Error;

use crate::common::error::ImError;

pub const ENV_SDK_APP_ID: &str = "TCIM_SDK_APP_ID";
pub const ENV_SECRET_KEY: &str = "TCIM_SECRET_KEY";
pub const ENV_ADMIN: &str = "TCIM_ADMIN";

/// Application credentials plus the administrative account that server-side
/// calls are made on behalf of.
#[derive(Clone)]
pub struct Credentials {
    pub sdk_app_id: u64,
    pub secret_key: String,
    pub admin: String,
}

impl Credentials {
    pub fn new<K, A>(sdk_app_id: u64, secret_key: K, admin: A) -> Self
    where
        K: Into<String>,
        A: Into<String>,
    {
        Self {
            sdk_app_id,
            secret_key: secret_key.into(),
            admin: admin.into(),
        }
    }

    pub fn from_env() -> Result<Self, Error> {
        let raw_id = require_env(ENV_SDK_APP_ID)?;
        let sdk_app_id = raw_id.trim().parse::<u64>().map_err(|_| ImError::InvalidEnv {
            name: ENV_SDK_APP_ID,
            value: raw_id.clone(),
        })?;
        let secret_key = require_env(ENV_SECRET_KEY)?;
        let admin = require_env(ENV_ADMIN)?;
        Ok(Self::new(sdk_app_id, secret_key, admin))
    }
}

// Keeps the secret key out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("sdk_app_id", &self.sdk_app_id)
            .field("secret_key", &"<redacted>")
            .field("admin", &self.admin)
            .finish()
    }
}

pub(crate) fn require_env(name: &'static str) -> Result<String, ImError> {
    env::var(name).map_err(|_| ImError::MissingEnv(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::with_env;

    fn env_error(err: Error) -> ImError {
        match err.downcast::<ImError>() {
            Ok(err) => err,
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn reads_all_three_variables() {
        let vars = [
            (ENV_SDK_APP_ID, " 1400000123 "),
            (ENV_SECRET_KEY, "k3y"),
            (ENV_ADMIN, "administrator"),
        ];
        let credentials = with_env(&vars, Credentials::from_env).unwrap();
        assert_eq!(credentials.sdk_app_id, 1400000123);
        assert_eq!(credentials.secret_key, "k3y");
        assert_eq!(credentials.admin, "administrator");
    }

    #[test]
    fn missing_variable_is_named() {
        let vars = [(ENV_SDK_APP_ID, "1400000123"), (ENV_SECRET_KEY, "k3y")];
        let err = env_error(with_env(&vars, Credentials::from_env).unwrap_err());
        match err {
            ImError::MissingEnv(name) => assert_eq!(name, ENV_ADMIN),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn non_numeric_app_id_is_rejected() {
        let vars = [
            (ENV_SDK_APP_ID, "app-1"),
            (ENV_SECRET_KEY, "k3y"),
            (ENV_ADMIN, "administrator"),
        ];
        let err = env_error(with_env(&vars, Credentials::from_env).unwrap_err());
        match err {
            ImError::InvalidEnv { name, value } => {
                assert_eq!(name, ENV_SDK_APP_ID);
                assert_eq!(value, "app-1");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn debug_output_hides_secret() {
        let credentials = Credentials::new(1400000000, "s3cr3t-key", "administrator");
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("administrator"));
        assert!(rendered.contains("1400000000"));
        assert!(!rendered.contains("s3cr3t-key"));
    }
}
