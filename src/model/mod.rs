//! Request records mirroring the service's documented JSON fields. `Option`
//! fields are left out of the body entirely when `None`.

pub mod account;
pub mod group;
pub mod message;
pub mod sns;

use serde::Serializer;

pub use self::account::AccountImport;
pub use self::group::{
    AppDefinedData, ApplyJoinOption, GroupAttr, GroupBaseInfoUpdate, GroupHistoryQuery, GroupInfoQuery,
    GroupListQuery, GroupMember, GroupMemberQuery, GroupMemberUpdate, GroupMessage, GroupType,
    ImportedGroupMessage, JoinedGroupQuery, MemberRole, MsgPriority, NewGroup, Switch,
};
pub use self::message::{BatchMessage, C2cMessage, ImportKind, MsgElement, RoamMessageQuery};
pub use self::sns::{AddFriends, AddType, DeleteType, FriendGroupQuery, FriendItem, FriendUpdate, SnsItem};

/// Booleans the service expects as `0`/`1`.
pub(crate) fn int_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(if *value { 1 } else { 0 })
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
