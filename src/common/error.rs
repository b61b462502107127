use failure::Fail;

/// Conditions raised by this crate itself. Transport and serialization errors
/// from dependencies travel as plain `failure::Error`.
#[derive(Debug, Fail)]
pub enum ImError {
    #[fail(display = "environment variable {} is not set", _0)]
    MissingEnv(&'static str),

    #[fail(display = "environment variable {} has invalid value {:?}", name, value)]
    InvalidEnv { name: &'static str, value: String },

    #[fail(display = "could not sign token for {}: {}", identity, reason)]
    Signing { identity: String, reason: String },
}

impl ImError {
    pub fn signing<S: Into<String>>(identity: &str, reason: S) -> Self {
        ImError::Signing {
            identity: identity.to_string(),
            reason: reason.into(),
        }
    }
}
