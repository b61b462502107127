//! Friend relationships and friend groups.

use failure::Error;

use crate::client::endpoint::Endpoint;
use crate::client::im::{ImClient, Reply};
use crate::model::{AddFriends, DeleteType, FriendGroupQuery, FriendUpdate};

#[derive(Serialize)]
struct DeleteFriends<'a> {
    #[serde(rename = "From_Account")]
    from_account: &'a str,
    #[serde(rename = "To_Account")]
    to_accounts: &'a [String],
    #[serde(rename = "DeleteType")]
    delete_type: DeleteType,
}

#[derive(Serialize)]
struct UpdateFriends<'a> {
    #[serde(rename = "From_Account")]
    from_account: &'a str,
    #[serde(rename = "UpdateItem")]
    items: &'a [FriendUpdate],
}

#[derive(Serialize)]
struct TargetFriends<'a> {
    #[serde(rename = "From_Account")]
    from_account: &'a str,
    #[serde(rename = "To_Account")]
    to_accounts: &'a [String],
    #[serde(rename = "TagList")]
    tags: &'a [String],
}

#[derive(Serialize)]
struct FriendPage<'a> {
    #[serde(rename = "From_Account")]
    from_account: &'a str,
    #[serde(rename = "StartIndex")]
    start_index: u64,
}

#[derive(Serialize)]
struct FriendGroups<'a> {
    #[serde(rename = "From_Account")]
    from_account: &'a str,
    #[serde(rename = "GroupName")]
    group_names: &'a [String],
    #[serde(rename = "To_Account", skip_serializing_if = "Option::is_none")]
    to_accounts: Option<&'a [String]>,
}

impl ImClient {
    pub fn add_friends(&self, request: &AddFriends) -> Result<Reply, Error> {
        self.dispatch(Endpoint::FriendAdd, request)
    }

    pub fn delete_friends(&self, from_account: &str, to_accounts: &[String], delete_type: DeleteType) -> Result<Reply, Error> {
        let body = DeleteFriends {
            from_account,
            to_accounts,
            delete_type,
        };
        self.dispatch(Endpoint::FriendDelete, &body)
    }

    pub fn update_friends(&self, from_account: &str, updates: &[FriendUpdate]) -> Result<Reply, Error> {
        let body = UpdateFriends {
            from_account,
            items: updates,
        };
        self.dispatch(Endpoint::FriendUpdate, &body)
    }

    /// Reads the `tags` of specific friends.
    pub fn get_target_friends(&self, from_account: &str, to_accounts: &[String], tags: &[String]) -> Result<Reply, Error> {
        let body = TargetFriends {
            from_account,
            to_accounts,
            tags,
        };
        self.dispatch(Endpoint::FriendGetList, &body)
    }

    /// One page of the friend list; pass the previous `NextStartIndex` to continue.
    pub fn get_friends(&self, from_account: &str, start_index: u64) -> Result<Reply, Error> {
        let body = FriendPage {
            from_account,
            start_index,
        };
        self.dispatch(Endpoint::FriendGet, &body)
    }

    /// Creates friend groups and files `to_accounts` into them.
    pub fn add_friend_groups(&self, from_account: &str, group_names: &[String], to_accounts: &[String]) -> Result<Reply, Error> {
        let body = FriendGroups {
            from_account,
            group_names,
            to_accounts: Some(to_accounts),
        };
        self.dispatch(Endpoint::FriendGroupAdd, &body)
    }

    pub fn delete_friend_groups(&self, from_account: &str, group_names: &[String]) -> Result<Reply, Error> {
        let body = FriendGroups {
            from_account,
            group_names,
            to_accounts: None,
        };
        self.dispatch(Endpoint::FriendGroupDelete, &body)
    }

    pub fn get_friend_groups(&self, query: &FriendGroupQuery) -> Result<Reply, Error> {
        self.dispatch(Endpoint::FriendGroupGet, query)
    }
}
