//! Blocking client for the Tencent Cloud IM server-side REST API.
//!
//! Every call signs on behalf of the configured admin account, posts one JSON
//! body and hands back whatever the service answered:
//!
//! ```no_run
//! use tcim::{Config, Credentials, ImClient, MsgElement, C2cMessage, Reply};
//!
//! # fn main() -> Result<(), failure::Error> {
//! let config = Config::new(Credentials::new(1400000000, "secret-key", "administrator"));
//! let client = ImClient::new(config)?;
//!
//! let message = C2cMessage::new("alice", "bob", vec![MsgElement::text("hello")]);
//! match client.send_message(&message)? {
//!     Reply::Received(resp) => println!("{}", resp.text()),
//!     Reply::Failed(err) => eprintln!("no answer: {}", err),
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate serde_derive;

pub mod api;
pub mod client;
pub mod common;
pub mod model;
pub mod session;

#[cfg(test)]
mod test_support;

pub use crate::client::config::{Config, HttpConfig};
pub use crate::client::credentials::Credentials;
pub use crate::client::endpoint::Endpoint;
pub use crate::client::im::{ImClient, ImClientBuilder, Reply};
pub use crate::client::transport::{ApiStatus, HttpTransport, RawResponse, Transport};
pub use crate::common::error::ImError;
pub use crate::model::*;
pub use crate::session::{Clock, QueryParameters, SessionCredential, SessionManager, Signer, SystemClock, TlsSigV2};
