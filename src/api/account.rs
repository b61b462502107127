//! Account import, removal and login-state endpoints.

use failure::Error;

use crate::client::endpoint::Endpoint;
use crate::client::im::{ImClient, Reply};
use crate::model::AccountImport;

#[derive(Serialize)]
struct Accounts<'a> {
    #[serde(rename = "Accounts")]
    accounts: &'a [String],
}

#[derive(Serialize)]
struct UserIdItem<'a> {
    #[serde(rename = "UserID")]
    user_id: &'a str,
}

#[derive(Serialize)]
struct DeleteItems<'a> {
    #[serde(rename = "DeleteItem")]
    items: Vec<UserIdItem<'a>>,
}

#[derive(Serialize)]
struct CheckItems<'a> {
    #[serde(rename = "CheckItem")]
    items: Vec<UserIdItem<'a>>,
}

#[derive(Serialize)]
struct OnlineStatus<'a> {
    #[serde(rename = "IsNeedDetail")]
    is_need_detail: u8,
    #[serde(rename = "To_Account")]
    to_accounts: &'a [String],
}

fn user_items(user_ids: &[String]) -> Vec<UserIdItem> {
    user_ids.iter().map(|id| UserIdItem { user_id: id }).collect()
}

impl ImClient {
    pub fn import_account(&self, account: &AccountImport) -> Result<Reply, Error> {
        self.dispatch(Endpoint::AccountImport, account)
    }

    /// Registers bare ids in one call; failures come back in `FailAccounts`.
    pub fn import_accounts(&self, user_ids: &[String]) -> Result<Reply, Error> {
        self.dispatch(Endpoint::MultiAccountImport, &Accounts { accounts: user_ids })
    }

    pub fn delete_accounts(&self, user_ids: &[String]) -> Result<Reply, Error> {
        let body = DeleteItems {
            items: user_items(user_ids),
        };
        self.dispatch(Endpoint::AccountDelete, &body)
    }

    pub fn check_accounts(&self, user_ids: &[String]) -> Result<Reply, Error> {
        let body = CheckItems {
            items: user_items(user_ids),
        };
        self.dispatch(Endpoint::AccountCheck, &body)
    }

    /// Invalidates the user's login state on every device.
    pub fn kick(&self, user_id: &str) -> Result<Reply, Error> {
        self.dispatch(Endpoint::Kick, &UserIdItem { user_id })
    }

    pub fn query_online_status(&self, user_ids: &[String]) -> Result<Reply, Error> {
        let body = OnlineStatus {
            is_need_detail: 1,
            to_accounts: user_ids,
        };
        self.dispatch(Endpoint::QueryOnlineStatus, &body)
    }
}
