pub mod config;
pub mod credentials;
pub mod endpoint;
pub mod im;
pub mod transport;
