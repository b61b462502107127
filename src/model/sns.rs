use serde::Serializer;
use serde_json::Value;

use super::{int_flag, is_false};

fn add_source<S: Serializer>(source: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("AddSource_Type_{}", source))
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FriendItem {
    #[serde(rename = "To_Account")]
    pub to_account: String,
    #[serde(rename = "Remark", skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    /// Bare source keyword such as `Android`; sent as `AddSource_Type_Android`.
    #[serde(rename = "AddSource", serialize_with = "add_source")]
    pub add_source: String,
}

impl FriendItem {
    pub fn new<T, S>(to_account: T, add_source: S) -> Self
    where
        T: Into<String>,
        S: Into<String>,
    {
        Self {
            to_account: to_account.into(),
            remark: None,
            group_name: None,
            add_source: add_source.into(),
        }
    }

    pub fn remark<S: Into<String>>(mut self, remark: S) -> Self {
        self.remark = Some(remark.into());
        self
    }

    pub fn group_name<S: Into<String>>(mut self, group_name: S) -> Self {
        self.group_name = Some(group_name.into());
        self
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddType {
    #[serde(rename = "Add_Type_Both")]
    Both,
    #[serde(rename = "Add_Type_Single")]
    Single,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AddFriends {
    #[serde(rename = "From_Account")]
    pub from_account: String,
    #[serde(rename = "AddFriendItem")]
    pub items: Vec<FriendItem>,
    #[serde(rename = "AddType")]
    pub add_type: AddType,
    /// Skip the recipient's approval setting.
    #[serde(rename = "ForceAddFlags", serialize_with = "int_flag")]
    pub force_add: bool,
}

impl AddFriends {
    /// Mutual, forced friendship with every item.
    pub fn new<F: Into<String>>(from_account: F, items: Vec<FriendItem>) -> Self {
        Self {
            from_account: from_account.into(),
            items,
            add_type: AddType::Both,
            force_add: true,
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteType {
    #[serde(rename = "Delete_Type_Both")]
    Both,
    #[serde(rename = "Delete_Type_Single")]
    Single,
}

impl Default for DeleteType {
    fn default() -> Self {
        DeleteType::Both
    }
}

/// A relationship field to overwrite, e.g. `Tag_SNS_IM_Remark`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SnsItem {
    #[serde(rename = "Tag")]
    pub tag: String,
    #[serde(rename = "Value")]
    pub value: Value,
}

impl SnsItem {
    pub fn new<T: Into<String>, V: Into<Value>>(tag: T, value: V) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FriendUpdate {
    #[serde(rename = "To_Account")]
    pub to_account: String,
    #[serde(rename = "SnsItem")]
    pub sns_items: Vec<SnsItem>,
}

impl FriendUpdate {
    pub fn new<T: Into<String>>(to_account: T, sns_items: Vec<SnsItem>) -> Self {
        Self {
            to_account: to_account.into(),
            sns_items,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FriendGroupQuery {
    #[serde(rename = "From_Account")]
    pub from_account: String,
    /// `None` lists every group.
    #[serde(rename = "GroupName", skip_serializing_if = "Option::is_none")]
    pub group_names: Option<Vec<String>>,
    #[serde(rename = "NeedFriend", serialize_with = "need_friend", skip_serializing_if = "is_false")]
    pub need_friend: bool,
}

fn need_friend<S: Serializer>(_: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str("Need_Friend_Type_Yes")
}

impl FriendGroupQuery {
    pub fn new<F: Into<String>>(from_account: F) -> Self {
        Self {
            from_account: from_account.into(),
            group_names: None,
            need_friend: true,
        }
    }

    pub fn groups(mut self, group_names: Vec<String>) -> Self {
        self.group_names = Some(group_names);
        self
    }

    pub fn need_friend(mut self, need_friend: bool) -> Self {
        self.need_friend = need_friend;
        self
    }
}
