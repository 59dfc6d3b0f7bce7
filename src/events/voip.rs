//! Content types for 1:1 call signalling events.

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionDescription {
    #[serde(rename = "type")]
    pub session_type: String,
    pub sdp: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CallInvite {
    pub call_id: String,
    pub offer: SessionDescription,
    pub version: u64,
    /// How long the invite is valid for, in milliseconds.
    pub lifetime: u64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CallAnswer {
    pub call_id: String,
    pub answer: SessionDescription,
    pub version: u64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CallHangUp {
    pub call_id: String,
    pub version: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
