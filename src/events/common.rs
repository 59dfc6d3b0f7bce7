//! Structures shared between several event content types.

use std::collections::BTreeMap;

/// Server-attached annotations that are not part of the signed payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UnsignedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u64>,
    /// Client-supplied identifier echoed back by the server, used to match
    /// a received event against a local send.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

impl UnsignedData {
    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.transaction_id.is_none()
    }
}

/// A key as used for media encryption, in JSON Web Key format.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct JWK {
    pub kty: String,
    pub key_ops: Vec<String>,
    pub alg: String,
    pub k: String,
    pub ext: bool,
}

/// Descriptor for an uploaded file that was encrypted before upload.
///
/// Everything except `url` is opaque to this crate; decryption is the job
/// of whichever layer fetches the payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EncryptedFile {
    pub url: String,
    pub key: JWK,
    pub iv: String,
    pub hashes: BTreeMap<String, String>,
    pub v: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RelationType {
    #[serde(rename = "m.annotation")]
    Annotation,
    #[serde(rename = "m.reference")]
    Reference,
    #[serde(rename = "m.replace")]
    Replace,
    #[serde(rename = "m.in_reply_to")]
    InReplyTo,
}

/// One reply/edit/reaction link from this event to another.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Relation {
    pub rel_type: RelationType,
    pub event_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// The aggregated relations attached to an event's content.
///
/// Aggregation happens in the layer above this crate after an event is
/// received, which is why this is the one structure with a setter in the
/// accessor layer.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Relations {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<Relation>,
    /// Set when the relations were reconstructed locally rather than
    /// reported by the server. Never sent over the wire.
    #[serde(skip)]
    pub synthesized: bool,
}

impl Relations {
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

fn is_zero_u64(v: &u64) -> bool {
    *v == 0
}

fn is_zero_i64(v: &i64) -> bool {
    *v == 0
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ThumbnailInfo {
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub h: u64,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub w: u64,
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub size: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mimetype: String,
}

impl ThumbnailInfo {
    pub fn is_empty(&self) -> bool {
        self == &ThumbnailInfo::default()
    }
}

/// Metadata for an image (or sticker) attachment.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageInfo {
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub h: u64,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub w: u64,
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub size: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mimetype: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub blurhash: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_file: Option<EncryptedFile>,
    #[serde(default, skip_serializing_if = "ThumbnailInfo::is_empty")]
    pub thumbnail_info: ThumbnailInfo,
}

impl ImageInfo {
    pub fn is_empty(&self) -> bool {
        self == &ImageInfo::default()
    }
}

/// Metadata for a video attachment.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoInfo {
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub h: u64,
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub w: u64,
    /// Duration in milliseconds.
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub duration: u64,
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub size: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mimetype: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub blurhash: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_file: Option<EncryptedFile>,
    #[serde(default, skip_serializing_if = "ThumbnailInfo::is_empty")]
    pub thumbnail_info: ThumbnailInfo,
}

impl VideoInfo {
    pub fn is_empty(&self) -> bool {
        self == &VideoInfo::default()
    }
}

/// Metadata for an audio attachment.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AudioInfo {
    /// Duration in milliseconds.
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub duration: u64,
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub size: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mimetype: String,
}

impl AudioInfo {
    pub fn is_empty(&self) -> bool {
        self == &AudioInfo::default()
    }
}

/// Metadata for a generic file attachment.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct FileInfo {
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub size: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mimetype: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_file: Option<EncryptedFile>,
    #[serde(default, skip_serializing_if = "ThumbnailInfo::is_empty")]
    pub thumbnail_info: ThumbnailInfo,
}

impl FileInfo {
    pub fn is_empty(&self) -> bool {
        self == &FileInfo::default()
    }
}
