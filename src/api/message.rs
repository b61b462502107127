//! One-to-one messaging.

use failure::Error;

use crate::client::endpoint::Endpoint;
use crate::client::im::{ImClient, Reply};
use crate::model::{BatchMessage, C2cMessage, ImportKind, RoamMessageQuery};

#[derive(Serialize)]
struct ImportedMessage<'a> {
    #[serde(flatten)]
    message: &'a C2cMessage,
    #[serde(rename = "MsgTimeStamp")]
    timestamp: u64,
    #[serde(rename = "SyncFromOldSystem")]
    kind: ImportKind,
}

#[derive(Serialize)]
struct Withdraw<'a> {
    #[serde(rename = "From_Account")]
    from_account: &'a str,
    #[serde(rename = "To_Account")]
    to_account: &'a str,
    #[serde(rename = "MsgKey")]
    msg_key: &'a str,
}

#[derive(Serialize)]
struct MarkRead<'a> {
    #[serde(rename = "Report_Account")]
    report_account: &'a str,
    #[serde(rename = "Peer_Account")]
    peer_account: &'a str,
    #[serde(rename = "MsgReadTime", skip_serializing_if = "Option::is_none")]
    read_time: Option<u64>,
}

#[derive(Serialize)]
struct UnreadCount<'a> {
    #[serde(rename = "To_Account")]
    to_account: &'a str,
    #[serde(rename = "Peer_Account", skip_serializing_if = "Option::is_none")]
    peers: Option<&'a [String]>,
}

impl ImClient {
    pub fn send_message(&self, message: &C2cMessage) -> Result<Reply, Error> {
        self.dispatch(Endpoint::SendMsg, message)
    }

    pub fn batch_send_message(&self, message: &BatchMessage) -> Result<Reply, Error> {
        self.dispatch(Endpoint::BatchSendMsg, message)
    }

    /// Imports a message sent at `timestamp` (Unix seconds) by another system.
    pub fn import_message(&self, message: &C2cMessage, timestamp: u64, kind: ImportKind) -> Result<Reply, Error> {
        let body = ImportedMessage {
            message,
            timestamp,
            kind,
        };
        self.dispatch(Endpoint::ImportMsg, &body)
    }

    pub fn get_roam_messages(&self, query: &RoamMessageQuery) -> Result<Reply, Error> {
        self.dispatch(Endpoint::AdminGetRoamMsg, query)
    }

    /// Recalls a sent message identified by the `MsgKey` returned from `send_message`.
    pub fn withdraw_message(&self, from_account: &str, to_account: &str, msg_key: &str) -> Result<Reply, Error> {
        let body = Withdraw {
            from_account,
            to_account,
            msg_key,
        };
        self.dispatch(Endpoint::AdminMsgWithdraw, &body)
    }

    /// Marks `peer_account`'s messages to `report_account` as read up to
    /// `read_time`, or up to now when `None`.
    pub fn set_message_read(&self, report_account: &str, peer_account: &str, read_time: Option<u64>) -> Result<Reply, Error> {
        let body = MarkRead {
            report_account,
            peer_account,
            read_time,
        };
        self.dispatch(Endpoint::AdminSetMsgRead, &body)
    }

    /// Unread counts for `to_account`, limited to `peers` when given.
    pub fn get_unread_count(&self, to_account: &str, peers: Option<&[String]>) -> Result<Reply, Error> {
        let body = UnreadCount { to_account, peers };
        self.dispatch(Endpoint::GetC2cUnreadMsgNum, &body)
    }
}
