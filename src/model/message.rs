use serde::{Serialize, Serializer};

/// One element of a `MsgBody` array.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "MsgType", content = "MsgContent")]
pub enum MsgElement {
    #[serde(rename = "TIMTextElem")]
    Text {
        #[serde(rename = "Text")]
        text: String,
    },
    #[serde(rename = "TIMFileElem")]
    File {
        #[serde(rename = "Url")]
        url: String,
        #[serde(rename = "FileSize")]
        file_size: u64,
        #[serde(rename = "FileName")]
        file_name: String,
        #[serde(rename = "Download_Flag")]
        download_flag: u8,
    },
}

impl MsgElement {
    pub fn text<S: Into<String>>(text: S) -> Self {
        MsgElement::Text { text: text.into() }
    }

    /// A file hosted at `url`; download flag 2 means "fetch directly from the URL".
    pub fn file<U, N>(url: U, file_size: u64, file_name: N) -> Self
    where
        U: Into<String>,
        N: Into<String>,
    {
        MsgElement::File {
            url: url.into(),
            file_size,
            file_name: file_name.into(),
            download_flag: 2,
        }
    }
}

// 1 pushes the message to the sender's other devices, 2 does not.
fn sync_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(if *value { 1 } else { 2 })
}

/// A one-to-one message. `msg_random` is drawn at construction and lets the
/// service de-duplicate retries of the same message.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct C2cMessage {
    #[serde(rename = "From_Account")]
    pub from_account: String,
    #[serde(rename = "To_Account")]
    pub to_account: String,
    #[serde(rename = "SyncOtherMachine", serialize_with = "sync_flag")]
    pub sync_other_machine: bool,
    #[serde(rename = "MsgRandom")]
    pub msg_random: u32,
    #[serde(rename = "MsgBody")]
    pub msg_body: Vec<MsgElement>,
    #[serde(rename = "CloudCustomData", skip_serializing_if = "Option::is_none")]
    pub cloud_custom_data: Option<String>,
}

impl C2cMessage {
    pub fn new<F, T>(from_account: F, to_account: T, msg_body: Vec<MsgElement>) -> Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        Self {
            from_account: from_account.into(),
            to_account: to_account.into(),
            sync_other_machine: true,
            msg_random: rand::random(),
            msg_body,
            cloud_custom_data: None,
        }
    }

    pub fn cloud_custom_data<S: Into<String>>(mut self, data: S) -> Self {
        self.cloud_custom_data = Some(data.into());
        self
    }

    pub fn sync_other_machine(mut self, sync: bool) -> Self {
        self.sync_other_machine = sync;
        self
    }
}

/// The same message fanned out to many recipients in one call.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BatchMessage {
    #[serde(rename = "From_Account")]
    pub from_account: String,
    #[serde(rename = "To_Account")]
    pub to_accounts: Vec<String>,
    #[serde(rename = "SyncOtherMachine", serialize_with = "sync_flag")]
    pub sync_other_machine: bool,
    #[serde(rename = "MsgRandom")]
    pub msg_random: u32,
    #[serde(rename = "MsgBody")]
    pub msg_body: Vec<MsgElement>,
}

impl BatchMessage {
    pub fn new<F: Into<String>>(from_account: F, to_accounts: Vec<String>, msg_body: Vec<MsgElement>) -> Self {
        Self {
            from_account: from_account.into(),
            to_accounts,
            sync_other_machine: true,
            msg_random: rand::random(),
            msg_body,
        }
    }
}

/// How an imported message is accounted for on the recipient's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportKind {
    /// Counts toward unread and triggers callbacks.
    Realtime,
    /// Stored as history only.
    History,
}

impl Default for ImportKind {
    fn default() -> Self {
        ImportKind::Realtime
    }
}

impl Serialize for ImportKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(match *self {
            ImportKind::Realtime => 1,
            ImportKind::History => 2,
        })
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RoamMessageQuery {
    #[serde(rename = "From_Account")]
    pub from_account: String,
    #[serde(rename = "To_Account")]
    pub to_account: String,
    #[serde(rename = "MaxCnt")]
    pub max_count: u32,
    #[serde(rename = "MinTime")]
    pub min_time: u64,
    #[serde(rename = "MaxTime")]
    pub max_time: u64,
    /// `LastMsgKey` from the previous page.
    #[serde(rename = "LastMsgKey", skip_serializing_if = "Option::is_none")]
    pub last_msg_key: Option<String>,
}

impl RoamMessageQuery {
    pub fn new<F, T>(from_account: F, to_account: T, max_count: u32, min_time: u64, max_time: u64) -> Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        Self {
            from_account: from_account.into(),
            to_account: to_account.into(),
            max_count,
            min_time,
            max_time,
            last_msg_key: None,
        }
    }

    pub fn after<S: Into<String>>(mut self, last_msg_key: S) -> Self {
        self.last_msg_key = Some(last_msg_key.into());
        self
    }
}
