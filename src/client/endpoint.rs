/// Every REST command the client issues. Paths are relative to the configured
/// base URL, which already carries the API version segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    AccountImport,
    MultiAccountImport,
    AccountDelete,
    AccountCheck,
    Kick,
    QueryOnlineStatus,

    FriendAdd,
    FriendDelete,
    FriendUpdate,
    FriendGetList,
    FriendGet,
    FriendGroupAdd,
    FriendGroupDelete,
    FriendGroupGet,

    SendMsg,
    BatchSendMsg,
    ImportMsg,
    AdminGetRoamMsg,
    AdminMsgWithdraw,
    AdminSetMsgRead,
    GetC2cUnreadMsgNum,

    GetAppidGroupList,
    CreateGroup,
    GetGroupInfo,
    GetGroupMemberInfo,
    ModifyGroupBaseInfo,
    AddGroupMember,
    DeleteGroupMember,
    ModifyGroupMemberInfo,
    DestroyGroup,
    GetJoinedGroupList,
    GetRoleInGroup,
    ForbidSendMsg,
    GetGroupShuttedUin,
    SendGroupMsg,
    SendGroupSystemNotification,
    ChangeGroupOwner,
    GroupMsgRecall,
    ImportGroupMsg,
    ImportGroupMember,
    SetUnreadMsgNum,
    DeleteGroupMsgBySender,
    GroupMsgGetSimple,
    GetOnlineMemberNum,
    GetGroupAttr,
    ModifyGroupAttr,
    ClearGroupAttr,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        use self::Endpoint::*;
        match self {
            AccountImport => "im_open_login_svc/account_import",
            MultiAccountImport => "im_open_login_svc/multiaccount_import",
            AccountDelete => "im_open_login_svc/account_delete",
            AccountCheck => "im_open_login_svc/account_check",
            Kick => "im_open_login_svc/kick",
            QueryOnlineStatus => "openim/query_online_status",

            FriendAdd => "sns/friend_add",
            FriendDelete => "sns/friend_delete",
            FriendUpdate => "sns/friend_update",
            FriendGetList => "sns/friend_get_list",
            FriendGet => "sns/friend_get",
            FriendGroupAdd => "sns/group_add",
            FriendGroupDelete => "sns/group_delete",
            FriendGroupGet => "sns/group_get",

            SendMsg => "openim/sendmsg",
            BatchSendMsg => "openim/batchsendmsg",
            ImportMsg => "openim/importmsg",
            AdminGetRoamMsg => "openim/admin_getroammsg",
            AdminMsgWithdraw => "openim/admin_msgwithdraw",
            AdminSetMsgRead => "openim/admin_set_msg_read",
            GetC2cUnreadMsgNum => "openim/get_c2c_unread_msg_num",

            GetAppidGroupList => "group_open_http_svc/get_appid_group_list",
            CreateGroup => "group_open_http_svc/create_group",
            GetGroupInfo => "group_open_http_svc/get_group_info",
            GetGroupMemberInfo => "group_open_http_svc/get_group_member_info",
            ModifyGroupBaseInfo => "group_open_http_svc/modify_group_base_info",
            AddGroupMember => "group_open_http_svc/add_group_member",
            DeleteGroupMember => "group_open_http_svc/delete_group_member",
            ModifyGroupMemberInfo => "group_open_http_svc/modify_group_member_info",
            DestroyGroup => "group_open_http_svc/destroy_group",
            GetJoinedGroupList => "group_open_http_svc/get_joined_group_list",
            GetRoleInGroup => "group_open_http_svc/get_role_in_group",
            ForbidSendMsg => "group_open_http_svc/forbid_send_msg",
            GetGroupShuttedUin => "group_open_http_svc/get_group_shutted_uin",
            SendGroupMsg => "group_open_http_svc/send_group_msg",
            SendGroupSystemNotification => "group_open_http_svc/send_group_system_notification",
            ChangeGroupOwner => "group_open_http_svc/change_group_owner",
            GroupMsgRecall => "group_open_http_svc/group_msg_recall",
            ImportGroupMsg => "group_open_http_svc/import_group_msg",
            ImportGroupMember => "group_open_http_svc/import_group_member",
            SetUnreadMsgNum => "group_open_http_svc/set_unread_msg_num",
            DeleteGroupMsgBySender => "group_open_http_svc/delete_group_msg_by_sender",
            GroupMsgGetSimple => "group_open_http_svc/group_msg_get_simple",
            GetOnlineMemberNum => "group_open_http_svc/get_online_member_num",
            // attribute reads live under a separate service
            GetGroupAttr => "group_open_attr_http_svc/get_group_attr",
            ModifyGroupAttr => "group_open_http_svc/modify_group_attr",
            ClearGroupAttr => "group_open_http_svc/clear_group_attr",
        }
    }

    /// Command name used in logs, e.g. `account_import`.
    pub fn name(self) -> &'static str {
        let path = self.path();
        match path.rfind('/') {
            Some(idx) => &path[idx + 1..],
            None => path,
        }
    }
}
