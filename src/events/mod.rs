//! The closed catalog of event shapes and the sum type unifying them.
//!
//! Events arrive from the sync/federation layer already decoded into a
//! [`TimelineEvent`]; this crate never parses raw transport bytes. The serde
//! implementations here are the exact inverse of each other, so an event can
//! be re-encoded for storage or transport without knowing its concrete
//! shape.

pub mod common;
pub mod msg;
pub mod state;
pub mod voip;

use log::debug;
use serde::de::{Deserialize, Deserializer, Error as _};

use self::common::UnsignedData;

const TYPE_MESSAGE: &str = "m.room.message";
const TYPE_STICKER: &str = "m.sticker";
const TYPE_REACTION: &str = "m.reaction";
const TYPE_CALL_INVITE: &str = "m.call.invite";
const TYPE_CALL_ANSWER: &str = "m.call.answer";
const TYPE_CALL_HANGUP: &str = "m.call.hangup";
const TYPE_NAME: &str = "m.room.name";
const TYPE_TOPIC: &str = "m.room.topic";
const TYPE_MEMBER: &str = "m.room.member";
const TYPE_CREATE: &str = "m.room.create";
const TYPE_AVATAR: &str = "m.room.avatar";

const MSGTYPE_AUDIO: &str = "m.audio";
const MSGTYPE_EMOTE: &str = "m.emote";
const MSGTYPE_FILE: &str = "m.file";
const MSGTYPE_IMAGE: &str = "m.image";
const MSGTYPE_NOTICE: &str = "m.notice";
const MSGTYPE_TEXT: &str = "m.text";
const MSGTYPE_VIDEO: &str = "m.video";

/// An ephemeral timeline event.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoomEvent<C> {
    pub event_id: String,
    pub room_id: String,
    pub sender: String,
    /// Milliseconds since the UNIX epoch, as stamped by the origin server.
    pub origin_server_ts: u64,
    #[serde(rename = "type")]
    pub event_type: String,
    pub content: C,
    #[serde(default, skip_serializing_if = "UnsignedData::is_empty")]
    pub unsigned: UnsignedData,
}

impl<C> RoomEvent<C> {
    pub fn state_key(&self) -> Option<&str> {
        None
    }
}

/// A durable, keyed piece of room configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StateEvent<C> {
    pub event_id: String,
    pub room_id: String,
    pub sender: String,
    pub origin_server_ts: u64,
    #[serde(rename = "type")]
    pub event_type: String,
    pub state_key: String,
    pub content: C,
    #[serde(default, skip_serializing_if = "UnsignedData::is_empty")]
    pub unsigned: UnsignedData,
}

impl<C> StateEvent<C> {
    pub fn state_key(&self) -> Option<&str> {
        Some(&self.state_key)
    }
}

/// Any event that can appear in a room timeline.
///
/// Serialization is untagged: each variant re-emits the event object it
/// holds, which is self-describing through its `type` field (and `msgtype`
/// inside `content` for `m.room.message`). Deserialization dispatches on
/// those same fields, so the two are structural inverses.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum TimelineEvent {
    Text(RoomEvent<msg::Text>),
    Emote(RoomEvent<msg::Emote>),
    Notice(RoomEvent<msg::Notice>),
    Image(RoomEvent<msg::Image>),
    Video(RoomEvent<msg::Video>),
    Audio(RoomEvent<msg::Audio>),
    File(RoomEvent<msg::File>),
    Sticker(RoomEvent<msg::Sticker>),
    Reaction(RoomEvent<msg::Reaction>),
    Unknown(RoomEvent<msg::Unknown>),
    CallInvite(RoomEvent<voip::CallInvite>),
    CallAnswer(RoomEvent<voip::CallAnswer>),
    CallHangUp(RoomEvent<voip::CallHangUp>),
    RoomName(StateEvent<state::Name>),
    RoomTopic(StateEvent<state::Topic>),
    Member(StateEvent<state::Member>),
    Create(StateEvent<state::Create>),
    Avatar(StateEvent<state::Avatar>),
}

/// Dispatches `$body` over every variant of a [`TimelineEvent`], binding the
/// inner event to `$e`. The match is exhaustive on purpose: adding a variant
/// fails to compile until this list is extended.
#[macro_export]
macro_rules! for_each_event {
    ($event:expr, $e:ident => $body:expr) => {
        match $event {
            $crate::events::TimelineEvent::Text($e) => $body,
            $crate::events::TimelineEvent::Emote($e) => $body,
            $crate::events::TimelineEvent::Notice($e) => $body,
            $crate::events::TimelineEvent::Image($e) => $body,
            $crate::events::TimelineEvent::Video($e) => $body,
            $crate::events::TimelineEvent::Audio($e) => $body,
            $crate::events::TimelineEvent::File($e) => $body,
            $crate::events::TimelineEvent::Sticker($e) => $body,
            $crate::events::TimelineEvent::Reaction($e) => $body,
            $crate::events::TimelineEvent::Unknown($e) => $body,
            $crate::events::TimelineEvent::CallInvite($e) => $body,
            $crate::events::TimelineEvent::CallAnswer($e) => $body,
            $crate::events::TimelineEvent::CallHangUp($e) => $body,
            $crate::events::TimelineEvent::RoomName($e) => $body,
            $crate::events::TimelineEvent::RoomTopic($e) => $body,
            $crate::events::TimelineEvent::Member($e) => $body,
            $crate::events::TimelineEvent::Create($e) => $body,
            $crate::events::TimelineEvent::Avatar($e) => $body,
        }
    };
}

fn from_value<T, E>(value: serde_json::Value) -> Result<T, E>
where
    T: serde::de::DeserializeOwned,
    E: serde::de::Error,
{
    serde_json::from_value(value).map_err(E::custom)
}

impl<'de> Deserialize<'de> for TimelineEvent {
    fn deserialize<D>(deserializer: D) -> Result<TimelineEvent, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;

        let event_type = match value.get("type").and_then(serde_json::Value::as_str) {
            Some(t) => t.to_string(),
            None => return Err(D::Error::missing_field("type")),
        };

        match &event_type[..] {
            TYPE_MESSAGE => {
                let msgtype = value
                    .pointer("/content/msgtype")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string);

                match msgtype.as_deref() {
                    Some(MSGTYPE_TEXT) => Ok(TimelineEvent::Text(from_value(value)?)),
                    Some(MSGTYPE_EMOTE) => Ok(TimelineEvent::Emote(from_value(value)?)),
                    Some(MSGTYPE_NOTICE) => Ok(TimelineEvent::Notice(from_value(value)?)),
                    Some(MSGTYPE_IMAGE) => Ok(TimelineEvent::Image(from_value(value)?)),
                    Some(MSGTYPE_VIDEO) => Ok(TimelineEvent::Video(from_value(value)?)),
                    Some(MSGTYPE_AUDIO) => Ok(TimelineEvent::Audio(from_value(value)?)),
                    Some(MSGTYPE_FILE) => Ok(TimelineEvent::File(from_value(value)?)),
                    other => {
                        debug!("treating m.room.message with msgtype {:?} as unknown", other);
                        Ok(TimelineEvent::Unknown(from_value(value)?))
                    }
                }
            }
            TYPE_STICKER => Ok(TimelineEvent::Sticker(from_value(value)?)),
            TYPE_REACTION => Ok(TimelineEvent::Reaction(from_value(value)?)),
            TYPE_CALL_INVITE => Ok(TimelineEvent::CallInvite(from_value(value)?)),
            TYPE_CALL_ANSWER => Ok(TimelineEvent::CallAnswer(from_value(value)?)),
            TYPE_CALL_HANGUP => Ok(TimelineEvent::CallHangUp(from_value(value)?)),
            TYPE_NAME => Ok(TimelineEvent::RoomName(from_value(value)?)),
            TYPE_TOPIC => Ok(TimelineEvent::RoomTopic(from_value(value)?)),
            TYPE_MEMBER => Ok(TimelineEvent::Member(from_value(value)?)),
            TYPE_CREATE => Ok(TimelineEvent::Create(from_value(value)?)),
            TYPE_AVATAR => Ok(TimelineEvent::Avatar(from_value(value)?)),
            other => Err(D::Error::custom(format!(
                "unsupported event type `{}`",
                other
            ))),
        }
    }
}

/// The classification of an `m.room.message` derived from its `msgtype`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageType {
    Audio,
    Emote,
    File,
    Image,
    Notice,
    Text,
    Video,
    Unknown,
}

impl From<&str> for MessageType {
    fn from(s: &str) -> MessageType {
        match s {
            MSGTYPE_AUDIO => MessageType::Audio,
            MSGTYPE_EMOTE => MessageType::Emote,
            MSGTYPE_FILE => MessageType::File,
            MSGTYPE_IMAGE => MessageType::Image,
            MSGTYPE_NOTICE => MessageType::Notice,
            MSGTYPE_TEXT => MessageType::Text,
            MSGTYPE_VIDEO => MessageType::Video,
            _ => MessageType::Unknown,
        }
    }
}

impl MessageType {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::Audio => MSGTYPE_AUDIO,
            MessageType::Emote => MSGTYPE_EMOTE,
            MessageType::File => MSGTYPE_FILE,
            MessageType::Image => MSGTYPE_IMAGE,
            MessageType::Notice => MSGTYPE_NOTICE,
            MessageType::Text => MSGTYPE_TEXT,
            MessageType::Video => MSGTYPE_VIDEO,
            MessageType::Unknown => "",
        }
    }
}
