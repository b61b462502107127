use std::time::Duration;

pub const TCIM_API_BASE: &str = "https://console.tim.qq.com/v4";

/// Lifetime of the admin session token before it is re-signed.
pub const DEFAULT_VALIDITY_WINDOW: Duration = Duration::from_secs(300);
/// Default lifetime of tokens minted for end users.
pub const DEFAULT_USER_SIG_EXPIRY: Duration = Duration::from_secs(180 * 86_400);

pub const CONTENT_TYPE: &str = "json";
pub const SIG_VERSION: &str = "2.0";

pub const DEFAULT_GROUP_LIST_LIMIT: u32 = 1_000;
pub const DEFAULT_MEMBER_PAGE_LIMIT: u32 = 100;
pub const DEFAULT_MAX_MEMBER_COUNT: u32 = 500;
