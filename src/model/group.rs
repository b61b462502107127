use crate::common::constants::{DEFAULT_GROUP_LIST_LIMIT, DEFAULT_MAX_MEMBER_COUNT, DEFAULT_MEMBER_PAGE_LIMIT};
use crate::model::message::MsgElement;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupType {
    Public,
    Private,
    ChatRoom,
    #[serde(rename = "AVChatRoom")]
    AvChatRoom,
    Community,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberRole {
    Owner,
    Admin,
    Member,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyJoinOption {
    FreeAccess,
    NeedPermission,
    DisableApply,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Switch {
    On,
    Off,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MsgPriority {
    High,
    Normal,
    Low,
    Lowest,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GroupMember {
    #[serde(rename = "Member_Account")]
    pub member_account: String,
    #[serde(rename = "Role", skip_serializing_if = "Option::is_none")]
    pub role: Option<MemberRole>,
    #[serde(rename = "JoinTime", skip_serializing_if = "Option::is_none")]
    pub join_time: Option<u64>,
    #[serde(rename = "UnreadMsgNum", skip_serializing_if = "Option::is_none")]
    pub unread_msg_num: Option<u32>,
}

impl GroupMember {
    pub fn new<S: Into<String>>(member_account: S) -> Self {
        Self {
            member_account: member_account.into(),
            role: None,
            join_time: None,
            unread_msg_num: None,
        }
    }

    pub fn role(mut self, role: MemberRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn join_time(mut self, join_time: u64) -> Self {
        self.join_time = Some(join_time);
        self
    }

    pub fn unread_msg_num(mut self, unread_msg_num: u32) -> Self {
        self.unread_msg_num = Some(unread_msg_num);
        self
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AppDefinedData {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl AppDefinedData {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Group attribute; the attribute endpoints use lower-case keys.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GroupAttr {
    pub key: String,
    pub value: String,
}

impl GroupAttr {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NewGroup {
    #[serde(rename = "Owner_Account")]
    pub owner_account: String,
    #[serde(rename = "Type")]
    pub group_type: GroupType,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "MaxMemberCount")]
    pub max_member_count: u32,
    #[serde(rename = "Introduction", skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(rename = "Notification", skip_serializing_if = "Option::is_none")]
    pub notification: Option<String>,
    #[serde(rename = "FaceUrl", skip_serializing_if = "Option::is_none")]
    pub face_url: Option<String>,
    #[serde(rename = "MemberList", skip_serializing_if = "Option::is_none")]
    pub member_list: Option<Vec<GroupMember>>,
    #[serde(rename = "AppDefinedData", skip_serializing_if = "Option::is_none")]
    pub app_defined_data: Option<Vec<AppDefinedData>>,
    /// Custom id; the service assigns one when absent.
    #[serde(rename = "GroupId", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl NewGroup {
    pub fn new<O, N>(owner_account: O, group_type: GroupType, name: N) -> Self
    where
        O: Into<String>,
        N: Into<String>,
    {
        Self {
            owner_account: owner_account.into(),
            group_type,
            name: name.into(),
            max_member_count: DEFAULT_MAX_MEMBER_COUNT,
            introduction: None,
            notification: None,
            face_url: None,
            member_list: None,
            app_defined_data: None,
            group_id: None,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GroupListQuery {
    #[serde(rename = "Limit")]
    pub limit: u32,
    /// Cursor from the previous page's `Next`; 0 starts from the beginning.
    #[serde(rename = "Next")]
    pub next: u64,
    #[serde(rename = "GroupType", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<GroupType>,
}

impl Default for GroupListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_GROUP_LIST_LIMIT,
            next: 0,
            group_type: None,
        }
    }
}

/// Filters left `None` are not sent; when all are `None` the whole
/// `ResponseFilter` object is dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupInfoQuery {
    pub group_ids: Vec<String>,
    pub base_info_filter: Option<Vec<String>>,
    pub member_info_filter: Option<Vec<String>>,
    pub app_defined_group_filter: Option<Vec<String>>,
    pub app_defined_member_filter: Option<Vec<String>>,
}

impl GroupInfoQuery {
    pub fn new(group_ids: Vec<String>) -> Self {
        Self {
            group_ids,
            ..Default::default()
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GroupMemberQuery {
    #[serde(rename = "GroupId")]
    pub group_id: String,
    #[serde(rename = "Limit")]
    pub limit: u32,
    #[serde(rename = "Offset")]
    pub offset: u32,
    #[serde(rename = "MemberInfoFilter", skip_serializing_if = "Option::is_none")]
    pub member_info_filter: Option<Vec<String>>,
    #[serde(rename = "MemberRoleFilter", skip_serializing_if = "Option::is_none")]
    pub member_role_filter: Option<Vec<MemberRole>>,
    #[serde(rename = "AppDefinedDataFilter_GroupMember", skip_serializing_if = "Option::is_none")]
    pub app_defined_member_filter: Option<Vec<String>>,
    /// Paging cursor for large groups.
    #[serde(rename = "Next", skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl GroupMemberQuery {
    pub fn new<S: Into<String>>(group_id: S) -> Self {
        Self {
            group_id: group_id.into(),
            limit: DEFAULT_MEMBER_PAGE_LIMIT,
            offset: 0,
            member_info_filter: None,
            member_role_filter: None,
            app_defined_member_filter: None,
            next: None,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GroupBaseInfoUpdate {
    #[serde(rename = "GroupId")]
    pub group_id: String,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Introduction", skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(rename = "Notification", skip_serializing_if = "Option::is_none")]
    pub notification: Option<String>,
    #[serde(rename = "FaceUrl", skip_serializing_if = "Option::is_none")]
    pub face_url: Option<String>,
    #[serde(rename = "MaxMemberNum", skip_serializing_if = "Option::is_none")]
    pub max_member_num: Option<u32>,
    #[serde(rename = "ApplyJoinOption", skip_serializing_if = "Option::is_none")]
    pub apply_join_option: Option<ApplyJoinOption>,
    #[serde(rename = "ShutUpAllMember", skip_serializing_if = "Option::is_none")]
    pub shut_up_all_member: Option<Switch>,
    #[serde(rename = "AppDefinedData", skip_serializing_if = "Option::is_none")]
    pub app_defined_data: Option<Vec<AppDefinedData>>,
}

impl GroupBaseInfoUpdate {
    pub fn new<S: Into<String>>(group_id: S) -> Self {
        Self {
            group_id: group_id.into(),
            name: None,
            introduction: None,
            notification: None,
            face_url: None,
            max_member_num: None,
            apply_join_option: None,
            shut_up_all_member: None,
            app_defined_data: None,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GroupMemberUpdate {
    #[serde(rename = "GroupId")]
    pub group_id: String,
    #[serde(rename = "Member_Account")]
    pub member_account: String,
    #[serde(rename = "Role", skip_serializing_if = "Option::is_none")]
    pub role: Option<MemberRole>,
    #[serde(rename = "NameCard", skip_serializing_if = "Option::is_none")]
    pub name_card: Option<String>,
    #[serde(rename = "AppMemberDefinedData", skip_serializing_if = "Option::is_none")]
    pub app_member_defined_data: Option<Vec<AppDefinedData>>,
    /// Mute duration in seconds; 0 lifts an existing mute.
    #[serde(rename = "ShutUpTime", skip_serializing_if = "Option::is_none")]
    pub shut_up_time: Option<u32>,
}

impl GroupMemberUpdate {
    pub fn new<G: Into<String>, M: Into<String>>(group_id: G, member_account: M) -> Self {
        Self {
            group_id: group_id.into(),
            member_account: member_account.into(),
            role: None,
            name_card: None,
            app_member_defined_data: None,
            shut_up_time: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct JoinedGroupQuery {
    pub member_account: String,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub group_type: Option<GroupType>,
    pub base_info_filter: Option<Vec<String>>,
    pub self_info_filter: Option<Vec<String>>,
}

impl JoinedGroupQuery {
    pub fn new<S: Into<String>>(member_account: S) -> Self {
        Self {
            member_account: member_account.into(),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GroupMessage {
    #[serde(rename = "GroupId")]
    pub group_id: String,
    #[serde(rename = "Random")]
    pub random: u32,
    /// Restricts delivery to these members.
    #[serde(rename = "To_Account", skip_serializing_if = "Option::is_none")]
    pub to_accounts: Option<Vec<String>>,
    /// Sender shown to members; the admin when absent.
    #[serde(rename = "From_Account", skip_serializing_if = "Option::is_none")]
    pub from_account: Option<String>,
    #[serde(rename = "MsgPriority", skip_serializing_if = "Option::is_none")]
    pub priority: Option<MsgPriority>,
    #[serde(rename = "MsgBody", skip_serializing_if = "Option::is_none")]
    pub msg_body: Option<Vec<MsgElement>>,
}

impl GroupMessage {
    pub fn new<S: Into<String>>(group_id: S, msg_body: Vec<MsgElement>) -> Self {
        Self {
            group_id: group_id.into(),
            random: rand::random(),
            to_accounts: None,
            from_account: None,
            priority: None,
            msg_body: Some(msg_body),
        }
    }

    pub fn from_account<S: Into<String>>(mut self, from_account: S) -> Self {
        self.from_account = Some(from_account.into());
        self
    }

    pub fn priority(mut self, priority: MsgPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn to_accounts(mut self, to_accounts: Vec<String>) -> Self {
        self.to_accounts = Some(to_accounts);
        self
    }
}

/// A historical message for `import_group_msg`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ImportedGroupMessage {
    #[serde(rename = "From_Account")]
    pub from_account: String,
    #[serde(rename = "SendTime")]
    pub send_time: u64,
    #[serde(rename = "Random")]
    pub random: u32,
    #[serde(rename = "MsgBody")]
    pub msg_body: Vec<MsgElement>,
}

impl ImportedGroupMessage {
    pub fn new<S: Into<String>>(from_account: S, send_time: u64, msg_body: Vec<MsgElement>) -> Self {
        Self {
            from_account: from_account.into(),
            send_time,
            random: rand::random(),
            msg_body,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GroupHistoryQuery {
    #[serde(rename = "GroupId")]
    pub group_id: String,
    #[serde(rename = "ReqMsgNumber")]
    pub req_msg_number: u32,
    #[serde(rename = "WithRecalledMsg", serialize_with = "super::int_flag")]
    pub with_recalled_msg: bool,
    /// Newest sequence to return; the latest message when absent.
    #[serde(rename = "ReqMsgSeq", skip_serializing_if = "Option::is_none")]
    pub req_msg_seq: Option<u64>,
}

impl GroupHistoryQuery {
    pub fn new<S: Into<String>>(group_id: S, req_msg_number: u32) -> Self {
        Self {
            group_id: group_id.into(),
            req_msg_number,
            with_recalled_msg: true,
            req_msg_seq: None,
        }
    }
}
