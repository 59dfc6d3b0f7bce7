//! Content types for `m.room.message`, `m.sticker` and `m.reaction`.

use super::common::{AudioInfo, EncryptedFile, FileInfo, ImageInfo, Relations, VideoInfo};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Text {
    pub body: String,
    pub msgtype: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub formatted_body: String,
    #[serde(rename = "m.relates_to", default, skip_serializing_if = "Relations::is_empty")]
    pub relations: Relations,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Emote {
    pub body: String,
    pub msgtype: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub formatted_body: String,
    #[serde(rename = "m.relates_to", default, skip_serializing_if = "Relations::is_empty")]
    pub relations: Relations,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    pub body: String,
    pub msgtype: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub formatted_body: String,
    #[serde(rename = "m.relates_to", default, skip_serializing_if = "Relations::is_empty")]
    pub relations: Relations,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// The original upload name of the image.
    pub body: String,
    pub msgtype: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Present instead of a plain `url` when the room is encrypted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<EncryptedFile>,
    #[serde(default, skip_serializing_if = "ImageInfo::is_empty")]
    pub info: ImageInfo,
    #[serde(rename = "m.relates_to", default, skip_serializing_if = "Relations::is_empty")]
    pub relations: Relations,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Video {
    /// The original upload name of the video.
    pub body: String,
    pub msgtype: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<EncryptedFile>,
    #[serde(default, skip_serializing_if = "VideoInfo::is_empty")]
    pub info: VideoInfo,
    #[serde(rename = "m.relates_to", default, skip_serializing_if = "Relations::is_empty")]
    pub relations: Relations,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Audio {
    /// The original upload name of the clip.
    pub body: String,
    pub msgtype: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<EncryptedFile>,
    #[serde(default, skip_serializing_if = "AudioInfo::is_empty")]
    pub info: AudioInfo,
    #[serde(rename = "m.relates_to", default, skip_serializing_if = "Relations::is_empty")]
    pub relations: Relations,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct File {
    /// Fallback description, usually the original upload name.
    pub body: String,
    pub msgtype: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filename: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<EncryptedFile>,
    #[serde(default, skip_serializing_if = "FileInfo::is_empty")]
    pub info: FileInfo,
    #[serde(rename = "m.relates_to", default, skip_serializing_if = "Relations::is_empty")]
    pub relations: Relations,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Sticker {
    pub body: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<EncryptedFile>,
    #[serde(default, skip_serializing_if = "ImageInfo::is_empty")]
    pub info: ImageInfo,
    #[serde(rename = "m.relates_to", default, skip_serializing_if = "Relations::is_empty")]
    pub relations: Relations,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Reaction {
    #[serde(rename = "m.relates_to", default, skip_serializing_if = "Relations::is_empty")]
    pub relations: Relations,
}

/// Catch-all for `m.room.message` events with an unrecognized `msgtype`.
///
/// Unlike the concrete message shapes, nothing here is guaranteed to be
/// present.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Unknown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msgtype: Option<String>,
}
