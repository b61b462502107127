#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AccountImport {
    #[serde(rename = "UserID")]
    pub user_id: String,
    #[serde(rename = "Nick", skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(rename = "FaceUrl", skip_serializing_if = "Option::is_none")]
    pub face_url: Option<String>,
}

impl AccountImport {
    pub fn new<S: Into<String>>(user_id: S) -> Self {
        Self {
            user_id: user_id.into(),
            nick: None,
            face_url: None,
        }
    }

    pub fn nick<S: Into<String>>(mut self, nick: S) -> Self {
        self.nick = Some(nick.into());
        self
    }

    pub fn face_url<S: Into<String>>(mut self, face_url: S) -> Self {
        self.face_url = Some(face_url.into());
        self
    }
}
