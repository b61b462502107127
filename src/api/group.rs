//! Group administration, membership and group messaging.

use failure::Error;

use crate::client::endpoint::Endpoint;
use crate::client::im::{ImClient, Reply};
use crate::model::{
    int_flag, GroupAttr, GroupBaseInfoUpdate, GroupHistoryQuery, GroupInfoQuery, GroupListQuery, GroupMember,
    GroupMemberQuery, GroupMemberUpdate, GroupMessage, GroupType, ImportedGroupMessage, JoinedGroupQuery, NewGroup,
};

fn slice(list: &Option<Vec<String>>) -> Option<&[String]> {
    list.as_deref()
}

#[derive(Serialize)]
struct GroupId<'a> {
    #[serde(rename = "GroupId")]
    group_id: &'a str,
}

#[derive(Serialize, Default)]
struct InfoFilter<'a> {
    #[serde(rename = "GroupBaseInfoFilter", skip_serializing_if = "Option::is_none")]
    base_info: Option<&'a [String]>,
    #[serde(rename = "MemberInfoFilter", skip_serializing_if = "Option::is_none")]
    member_info: Option<&'a [String]>,
    #[serde(rename = "AppDefinedDataFilter_Group", skip_serializing_if = "Option::is_none")]
    app_defined_group: Option<&'a [String]>,
    #[serde(rename = "AppDefinedDataFilter_GroupMember", skip_serializing_if = "Option::is_none")]
    app_defined_member: Option<&'a [String]>,
    #[serde(rename = "SelfInfoFilter", skip_serializing_if = "Option::is_none")]
    self_info: Option<&'a [String]>,
}

impl<'a> InfoFilter<'a> {
    /// `None` when no filter is set, so the `ResponseFilter` key disappears too.
    fn non_empty(self) -> Option<Self> {
        let empty = self.base_info.is_none()
            && self.member_info.is_none()
            && self.app_defined_group.is_none()
            && self.app_defined_member.is_none()
            && self.self_info.is_none();
        if empty {
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Serialize)]
struct GroupInfo<'a> {
    #[serde(rename = "GroupIdList")]
    group_ids: &'a [String],
    #[serde(rename = "ResponseFilter", skip_serializing_if = "Option::is_none")]
    filter: Option<InfoFilter<'a>>,
}

#[derive(Serialize)]
struct JoinedGroups<'a> {
    #[serde(rename = "Member_Account")]
    member_account: &'a str,
    #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(rename = "Offset", skip_serializing_if = "Option::is_none")]
    offset: Option<u32>,
    #[serde(rename = "GroupType", skip_serializing_if = "Option::is_none")]
    group_type: Option<GroupType>,
    #[serde(rename = "ResponseFilter", skip_serializing_if = "Option::is_none")]
    filter: Option<InfoFilter<'a>>,
}

#[derive(Serialize)]
struct AddMembers<'a> {
    #[serde(rename = "GroupId")]
    group_id: &'a str,
    #[serde(rename = "Silence", serialize_with = "int_flag")]
    silence: bool,
    #[serde(rename = "MemberList")]
    members: &'a [GroupMember],
}

#[derive(Serialize)]
struct DeleteMembers<'a> {
    #[serde(rename = "GroupId")]
    group_id: &'a str,
    #[serde(rename = "Silence", serialize_with = "int_flag")]
    silence: bool,
    #[serde(rename = "MemberToDel_Account")]
    members: &'a [String],
}

#[derive(Serialize)]
struct RoleInGroup<'a> {
    #[serde(rename = "GroupId")]
    group_id: &'a str,
    #[serde(rename = "User_Account")]
    user_accounts: &'a [String],
}

#[derive(Serialize)]
struct ForbidSend<'a> {
    #[serde(rename = "GroupId")]
    group_id: &'a str,
    #[serde(rename = "Members_Account")]
    members: &'a [String],
    #[serde(rename = "ShutUpTime")]
    shut_up_time: u32,
}

#[derive(Serialize)]
struct SystemNotification<'a> {
    #[serde(rename = "GroupId")]
    group_id: &'a str,
    #[serde(rename = "Content")]
    content: &'a str,
    #[serde(rename = "ToMembers_Account", skip_serializing_if = "Option::is_none")]
    to_members: Option<&'a [String]>,
}

#[derive(Serialize)]
struct ChangeOwner<'a> {
    #[serde(rename = "GroupId")]
    group_id: &'a str,
    #[serde(rename = "NewOwner_Account")]
    new_owner: &'a str,
}

#[derive(Serialize)]
struct MsgSeq {
    #[serde(rename = "MsgSeq")]
    seq: u64,
}

#[derive(Serialize)]
struct Recall<'a> {
    #[serde(rename = "GroupId")]
    group_id: &'a str,
    #[serde(rename = "MsgSeqList")]
    seqs: Vec<MsgSeq>,
}

#[derive(Serialize)]
struct ImportMessages<'a> {
    #[serde(rename = "GroupId")]
    group_id: &'a str,
    #[serde(rename = "RecentContactFlag", serialize_with = "int_flag")]
    recent_contact: bool,
    #[serde(rename = "MsgList", skip_serializing_if = "Option::is_none")]
    messages: Option<&'a [ImportedGroupMessage]>,
}

#[derive(Serialize)]
struct ImportMembers<'a> {
    #[serde(rename = "GroupId")]
    group_id: &'a str,
    #[serde(rename = "MemberList", skip_serializing_if = "Option::is_none")]
    members: Option<&'a [GroupMember]>,
}

#[derive(Serialize)]
struct UnreadNum<'a> {
    #[serde(rename = "GroupId")]
    group_id: &'a str,
    #[serde(rename = "Member_Account")]
    member_account: &'a str,
    #[serde(rename = "UnreadMsgNum")]
    unread: u32,
}

#[derive(Serialize)]
struct BySender<'a> {
    #[serde(rename = "GroupId")]
    group_id: &'a str,
    #[serde(rename = "Sender_Account")]
    sender: &'a str,
}

#[derive(Serialize)]
struct Attrs<'a> {
    #[serde(rename = "GroupId")]
    group_id: &'a str,
    #[serde(rename = "GroupAttr")]
    attrs: &'a [GroupAttr],
}

impl ImClient {
    /// Pages through every group in the app.
    pub fn get_group_list(&self, query: &GroupListQuery) -> Result<Reply, Error> {
        self.dispatch(Endpoint::GetAppidGroupList, query)
    }

    pub fn create_group(&self, group: &NewGroup) -> Result<Reply, Error> {
        self.dispatch(Endpoint::CreateGroup, group)
    }

    pub fn get_group_info(&self, query: &GroupInfoQuery) -> Result<Reply, Error> {
        let filter = InfoFilter {
            base_info: slice(&query.base_info_filter),
            member_info: slice(&query.member_info_filter),
            app_defined_group: slice(&query.app_defined_group_filter),
            app_defined_member: slice(&query.app_defined_member_filter),
            ..Default::default()
        };
        let body = GroupInfo {
            group_ids: &query.group_ids,
            filter: filter.non_empty(),
        };
        self.dispatch(Endpoint::GetGroupInfo, &body)
    }

    pub fn get_group_members(&self, query: &GroupMemberQuery) -> Result<Reply, Error> {
        self.dispatch(Endpoint::GetGroupMemberInfo, query)
    }

    pub fn modify_group_base_info(&self, update: &GroupBaseInfoUpdate) -> Result<Reply, Error> {
        self.dispatch(Endpoint::ModifyGroupBaseInfo, update)
    }

    /// `silence` suppresses the join notification in the group.
    pub fn add_group_members(&self, group_id: &str, members: &[GroupMember], silence: bool) -> Result<Reply, Error> {
        let body = AddMembers {
            group_id,
            silence,
            members,
        };
        self.dispatch(Endpoint::AddGroupMember, &body)
    }

    pub fn delete_group_members(&self, group_id: &str, members: &[String], silence: bool) -> Result<Reply, Error> {
        let body = DeleteMembers {
            group_id,
            silence,
            members,
        };
        self.dispatch(Endpoint::DeleteGroupMember, &body)
    }

    pub fn modify_group_member(&self, update: &GroupMemberUpdate) -> Result<Reply, Error> {
        self.dispatch(Endpoint::ModifyGroupMemberInfo, update)
    }

    pub fn destroy_group(&self, group_id: &str) -> Result<Reply, Error> {
        self.dispatch(Endpoint::DestroyGroup, &GroupId { group_id })
    }

    pub fn get_joined_groups(&self, query: &JoinedGroupQuery) -> Result<Reply, Error> {
        let filter = InfoFilter {
            base_info: slice(&query.base_info_filter),
            self_info: slice(&query.self_info_filter),
            ..Default::default()
        };
        let body = JoinedGroups {
            member_account: &query.member_account,
            limit: query.limit,
            offset: query.offset,
            group_type: query.group_type,
            filter: filter.non_empty(),
        };
        self.dispatch(Endpoint::GetJoinedGroupList, &body)
    }

    pub fn get_role_in_group(&self, group_id: &str, user_accounts: &[String]) -> Result<Reply, Error> {
        let body = RoleInGroup {
            group_id,
            user_accounts,
        };
        self.dispatch(Endpoint::GetRoleInGroup, &body)
    }

    /// Mutes `members` for `shut_up_time` seconds; 0 unmutes.
    pub fn forbid_send_msg(&self, group_id: &str, members: &[String], shut_up_time: u32) -> Result<Reply, Error> {
        let body = ForbidSend {
            group_id,
            members,
            shut_up_time,
        };
        self.dispatch(Endpoint::ForbidSendMsg, &body)
    }

    pub fn get_muted_members(&self, group_id: &str) -> Result<Reply, Error> {
        self.dispatch(Endpoint::GetGroupShuttedUin, &GroupId { group_id })
    }

    pub fn send_group_message(&self, message: &GroupMessage) -> Result<Reply, Error> {
        self.dispatch(Endpoint::SendGroupMsg, message)
    }

    /// A system notice shown to `to_members`, or to everyone when `None`.
    pub fn send_group_system_notification(&self, group_id: &str, content: &str, to_members: Option<&[String]>) -> Result<Reply, Error> {
        let body = SystemNotification {
            group_id,
            content,
            to_members,
        };
        self.dispatch(Endpoint::SendGroupSystemNotification, &body)
    }

    pub fn change_group_owner(&self, group_id: &str, new_owner: &str) -> Result<Reply, Error> {
        let body = ChangeOwner { group_id, new_owner };
        self.dispatch(Endpoint::ChangeGroupOwner, &body)
    }

    pub fn recall_group_messages(&self, group_id: &str, msg_seqs: &[u64]) -> Result<Reply, Error> {
        let body = Recall {
            group_id,
            seqs: msg_seqs.iter().map(|&seq| MsgSeq { seq }).collect(),
        };
        self.dispatch(Endpoint::GroupMsgRecall, &body)
    }

    /// `recent_contact` adds the group to members' conversation lists.
    pub fn import_group_messages(&self, group_id: &str, recent_contact: bool, messages: Option<&[ImportedGroupMessage]>) -> Result<Reply, Error> {
        let body = ImportMessages {
            group_id,
            recent_contact,
            messages,
        };
        self.dispatch(Endpoint::ImportGroupMsg, &body)
    }

    pub fn import_group_members(&self, group_id: &str, members: Option<&[GroupMember]>) -> Result<Reply, Error> {
        let body = ImportMembers { group_id, members };
        self.dispatch(Endpoint::ImportGroupMember, &body)
    }

    pub fn set_unread_msg_num(&self, group_id: &str, member_account: &str, unread: u32) -> Result<Reply, Error> {
        let body = UnreadNum {
            group_id,
            member_account,
            unread,
        };
        self.dispatch(Endpoint::SetUnreadMsgNum, &body)
    }

    pub fn delete_group_msg_by_sender(&self, group_id: &str, sender: &str) -> Result<Reply, Error> {
        let body = BySender { group_id, sender };
        self.dispatch(Endpoint::DeleteGroupMsgBySender, &body)
    }

    pub fn get_group_history(&self, query: &GroupHistoryQuery) -> Result<Reply, Error> {
        self.dispatch(Endpoint::GroupMsgGetSimple, query)
    }

    pub fn get_online_member_num(&self, group_id: &str) -> Result<Reply, Error> {
        self.dispatch(Endpoint::GetOnlineMemberNum, &GroupId { group_id })
    }

    pub fn get_group_attr(&self, group_id: &str) -> Result<Reply, Error> {
        self.dispatch(Endpoint::GetGroupAttr, &GroupId { group_id })
    }

    pub fn modify_group_attr(&self, group_id: &str, attrs: &[GroupAttr]) -> Result<Reply, Error> {
        self.dispatch(Endpoint::ModifyGroupAttr, &Attrs { group_id, attrs })
    }

    pub fn clear_group_attr(&self, group_id: &str) -> Result<Reply, Error> {
        self.dispatch(Endpoint::ClearGroupAttr, &GroupId { group_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ApplyJoinOption, MemberRole, MsgElement, MsgPriority, Switch};
    use crate::test_support::{sent_body, sent_url};
    use serde_json::json;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn group_list_defaults() {
        let body = sent_body(|c| c.get_group_list(&GroupListQuery::default()));
        assert_eq!(body, json!({"Limit": 1000, "Next": 0}));

        let query = GroupListQuery {
            group_type: Some(GroupType::Public),
            ..Default::default()
        };
        assert_eq!(sent_body(|c| c.get_group_list(&query))["GroupType"], "Public");
    }

    #[test]
    fn create_group_with_members() {
        let mut group = NewGroup::new("owner", GroupType::Private, "team");
        group.member_list = Some(vec![GroupMember::new("u1"), GroupMember::new("u2").role(MemberRole::Admin)]);
        group.introduction = Some("intro".to_string());
        let body = sent_body(|c| c.create_group(&group));
        assert_eq!(
            body,
            json!({
                "Owner_Account": "owner",
                "Type": "Private",
                "Name": "team",
                "MaxMemberCount": 500,
                "Introduction": "intro",
                "MemberList": [{"Member_Account": "u1"}, {"Member_Account": "u2", "Role": "Admin"}]
            })
        );
    }

    #[test]
    fn group_info_without_filters_omits_response_filter() {
        let query = GroupInfoQuery::new(strings(&["@TGS#1"]));
        let body = sent_body(|c| c.get_group_info(&query));
        assert_eq!(body, json!({"GroupIdList": ["@TGS#1"]}));
    }

    #[test]
    fn group_info_sends_only_set_filters() {
        let mut query = GroupInfoQuery::new(strings(&["@TGS#1"]));
        query.base_info_filter = Some(strings(&["Name"]));
        query.app_defined_member_filter = Some(vec![]);
        let body = sent_body(|c| c.get_group_info(&query));
        assert_eq!(
            body["ResponseFilter"],
            json!({"GroupBaseInfoFilter": ["Name"], "AppDefinedDataFilter_GroupMember": []})
        );
    }

    #[test]
    fn member_query_paging() {
        let mut query = GroupMemberQuery::new("@TGS#1");
        query.member_role_filter = Some(vec![MemberRole::Owner, MemberRole::Admin]);
        let body = sent_body(|c| c.get_group_members(&query));
        assert_eq!(
            body,
            json!({"GroupId": "@TGS#1", "Limit": 100, "Offset": 0, "MemberRoleFilter": ["Owner", "Admin"]})
        );
    }

    #[test]
    fn base_info_update_sends_only_changes() {
        let mut update = GroupBaseInfoUpdate::new("@TGS#1");
        update.apply_join_option = Some(ApplyJoinOption::NeedPermission);
        update.shut_up_all_member = Some(Switch::On);
        let body = sent_body(|c| c.modify_group_base_info(&update));
        assert_eq!(
            body,
            json!({"GroupId": "@TGS#1", "ApplyJoinOption": "NeedPermission", "ShutUpAllMember": "On"})
        );
    }

    #[test]
    fn membership_changes() {
        let body = sent_body(|c| c.add_group_members("@TGS#1", &[GroupMember::new("u1")], true));
        assert_eq!(body, json!({"GroupId": "@TGS#1", "Silence": 1, "MemberList": [{"Member_Account": "u1"}]}));

        let body = sent_body(|c| c.delete_group_members("@TGS#1", &strings(&["u1"]), false));
        assert_eq!(body, json!({"GroupId": "@TGS#1", "Silence": 0, "MemberToDel_Account": ["u1"]}));

        let mut update = GroupMemberUpdate::new("@TGS#1", "u1");
        update.name_card = Some("card".to_string());
        update.shut_up_time = Some(0);
        let body = sent_body(|c| c.modify_group_member(&update));
        assert_eq!(
            body,
            json!({"GroupId": "@TGS#1", "Member_Account": "u1", "NameCard": "card", "ShutUpTime": 0})
        );
    }

    #[test]
    fn joined_groups_filter_and_paging() {
        let body = sent_body(|c| c.get_joined_groups(&JoinedGroupQuery::new("u1")));
        assert_eq!(body, json!({"Member_Account": "u1"}));

        let mut query = JoinedGroupQuery::new("u1");
        query.limit = Some(10);
        query.self_info_filter = Some(strings(&["Role"]));
        let body = sent_body(|c| c.get_joined_groups(&query));
        assert_eq!(
            body,
            json!({"Member_Account": "u1", "Limit": 10, "ResponseFilter": {"SelfInfoFilter": ["Role"]}})
        );
    }

    #[test]
    fn group_id_only_commands_hit_their_paths() {
        let cases: Vec<(String, &str)> = vec![
            (sent_url(|c| c.destroy_group("g")), "group_open_http_svc/destroy_group"),
            (sent_url(|c| c.get_muted_members("g")), "group_open_http_svc/get_group_shutted_uin"),
            (sent_url(|c| c.get_online_member_num("g")), "group_open_http_svc/get_online_member_num"),
            (sent_url(|c| c.get_group_attr("g")), "group_open_attr_http_svc/get_group_attr"),
            (sent_url(|c| c.clear_group_attr("g")), "group_open_http_svc/clear_group_attr"),
        ];
        for (url, path) in cases {
            assert_eq!(url, format!("http://im.test/v4/{}", path));
        }
        assert_eq!(sent_body(|c| c.destroy_group("g")), json!({"GroupId": "g"}));
    }

    #[test]
    fn group_messaging() {
        let message = GroupMessage::new("g", vec![MsgElement::text("hello")])
            .from_account("u1")
            .priority(MsgPriority::Low);
        let body = sent_body(|c| c.send_group_message(&message));
        assert_eq!(
            body,
            json!({
                "GroupId": "g",
                "Random": message.random,
                "From_Account": "u1",
                "MsgPriority": "Low",
                "MsgBody": [{"MsgType": "TIMTextElem", "MsgContent": {"Text": "hello"}}]
            })
        );

        let body = sent_body(|c| c.send_group_system_notification("g", "maintenance", None));
        assert_eq!(body, json!({"GroupId": "g", "Content": "maintenance"}));

        let body = sent_body(|c| c.recall_group_messages("g", &[12, 13]));
        assert_eq!(body, json!({"GroupId": "g", "MsgSeqList": [{"MsgSeq": 12}, {"MsgSeq": 13}]}));
    }

    #[test]
    fn imports() {
        let messages = vec![ImportedGroupMessage::new("u1", 1_600_000_000, vec![MsgElement::text("old")])];
        let body = sent_body(|c| c.import_group_messages("g", true, Some(messages.as_slice())));
        assert_eq!(body["RecentContactFlag"], 1);
        assert_eq!(body["MsgList"][0]["SendTime"], 1_600_000_000u64);
        assert_eq!(body["MsgList"][0]["Random"], messages[0].random);

        let body = sent_body(|c| c.import_group_messages("g", false, None));
        assert_eq!(body, json!({"GroupId": "g", "RecentContactFlag": 0}));

        let body = sent_body(|c| c.import_group_members("g", None));
        assert_eq!(body, json!({"GroupId": "g"}));
    }

    #[test]
    fn misc_member_commands() {
        assert_eq!(
            sent_body(|c| c.get_role_in_group("g", &strings(&["u1"]))),
            json!({"GroupId": "g", "User_Account": ["u1"]})
        );
        assert_eq!(
            sent_body(|c| c.forbid_send_msg("g", &strings(&["u1"]), 60)),
            json!({"GroupId": "g", "Members_Account": ["u1"], "ShutUpTime": 60})
        );
        assert_eq!(
            sent_body(|c| c.change_group_owner("g", "u2")),
            json!({"GroupId": "g", "NewOwner_Account": "u2"})
        );
        assert_eq!(
            sent_body(|c| c.set_unread_msg_num("g", "u1", 3)),
            json!({"GroupId": "g", "Member_Account": "u1", "UnreadMsgNum": 3})
        );
        assert_eq!(
            sent_body(|c| c.delete_group_msg_by_sender("g", "u1")),
            json!({"GroupId": "g", "Sender_Account": "u1"})
        );
        assert_eq!(
            sent_body(|c| c.get_group_history(&GroupHistoryQuery::new("g", 5))),
            json!({"GroupId": "g", "ReqMsgNumber": 5, "WithRecalledMsg": 1})
        );
        assert_eq!(
            sent_body(|c| c.modify_group_attr("g", &[GroupAttr::new("k", "v")])),
            json!({"GroupId": "g", "GroupAttr": [{"key": "k", "value": "v"}]})
        );
    }
}
