pub mod clock;
pub mod manager;
pub mod signer;

pub use self::clock::{Clock, SystemClock};
pub use self::manager::{QueryParameters, SessionCredential, SessionManager};
pub use self::signer::{Signer, TlsSigV2};
