//! Uniform field projections over [`TimelineEvent`].
//!
//! Every function here is total: if the held variant does not carry the
//! requested field, the projection returns that field's documented default
//! instead of failing. Which variants carry which fields is decided at
//! compile time through the [`MessageContent`] and [`MediaContent`] traits;
//! only applicable content types override the provided defaults, and the
//! dispatch itself is a single exhaustive match, so a new variant cannot
//! silently fall into the wrong default.

use std::convert::TryFrom;

use chrono::{DateTime, Utc};

use crate::events::common::{EncryptedFile, Relations};
use crate::events::{msg, state, voip, MessageType, TimelineEvent};
use crate::for_each_event;

/// Sentinel for "this variant carries no media dimensions". Distinct from 0,
/// which is a value a server can legitimately report.
pub const UNKNOWN_DIMENSION: i64 = -1;

const HTML_FORMAT: &str = "org.matrix.custom.html";

static EMPTY_RELATIONS: Relations = Relations {
    relations: Vec::new(),
    synthesized: false,
};

/// Projections out of message-like content.
///
/// Implemented by every content type in the catalog; the provided methods
/// are the defaults for shapes that lack the field.
pub trait MessageContent {
    fn body(&self) -> &str {
        ""
    }
    fn msgtype(&self) -> Option<&str> {
        None
    }
    fn formatted_body(&self) -> &str {
        ""
    }
    fn relations(&self) -> &Relations {
        &EMPTY_RELATIONS
    }
    fn set_relations(&mut self, _new: Relations) {}
}

/// Projections out of content that may reference an uploaded media file.
pub trait MediaContent {
    fn url(&self) -> &str {
        ""
    }
    fn file(&self) -> Option<&EncryptedFile> {
        None
    }
    fn filename(&self) -> &str {
        ""
    }
    fn thumbnail_url(&self) -> &str {
        ""
    }
    fn thumbnail_file(&self) -> Option<&EncryptedFile> {
        None
    }
    fn duration(&self) -> u64 {
        0
    }
    fn blurhash(&self) -> &str {
        ""
    }
    fn mimetype(&self) -> &str {
        ""
    }
    fn filesize(&self) -> i64 {
        0
    }
    fn media_height(&self) -> i64 {
        UNKNOWN_DIMENSION
    }
    fn media_width(&self) -> i64 {
        UNKNOWN_DIMENSION
    }
}

impl MessageContent for msg::Text {
    fn body(&self) -> &str {
        &self.body
    }
    fn msgtype(&self) -> Option<&str> {
        Some(&self.msgtype)
    }
    fn formatted_body(&self) -> &str {
        if self.format == HTML_FORMAT {
            &self.formatted_body
        } else {
            ""
        }
    }
    fn relations(&self) -> &Relations {
        &self.relations
    }
    fn set_relations(&mut self, new: Relations) {
        self.relations = new;
    }
}

impl MessageContent for msg::Emote {
    fn body(&self) -> &str {
        &self.body
    }
    fn msgtype(&self) -> Option<&str> {
        Some(&self.msgtype)
    }
    fn formatted_body(&self) -> &str {
        if self.format == HTML_FORMAT {
            &self.formatted_body
        } else {
            ""
        }
    }
    fn relations(&self) -> &Relations {
        &self.relations
    }
    fn set_relations(&mut self, new: Relations) {
        self.relations = new;
    }
}

impl MessageContent for msg::Notice {
    fn body(&self) -> &str {
        &self.body
    }
    fn msgtype(&self) -> Option<&str> {
        Some(&self.msgtype)
    }
    fn formatted_body(&self) -> &str {
        if self.format == HTML_FORMAT {
            &self.formatted_body
        } else {
            ""
        }
    }
    fn relations(&self) -> &Relations {
        &self.relations
    }
    fn set_relations(&mut self, new: Relations) {
        self.relations = new;
    }
}

impl MessageContent for msg::Image {
    fn body(&self) -> &str {
        &self.body
    }
    fn msgtype(&self) -> Option<&str> {
        Some(&self.msgtype)
    }
    fn relations(&self) -> &Relations {
        &self.relations
    }
    fn set_relations(&mut self, new: Relations) {
        self.relations = new;
    }
}

impl MessageContent for msg::Video {
    fn body(&self) -> &str {
        &self.body
    }
    fn msgtype(&self) -> Option<&str> {
        Some(&self.msgtype)
    }
    fn relations(&self) -> &Relations {
        &self.relations
    }
    fn set_relations(&mut self, new: Relations) {
        self.relations = new;
    }
}

impl MessageContent for msg::Audio {
    fn body(&self) -> &str {
        &self.body
    }
    fn msgtype(&self) -> Option<&str> {
        Some(&self.msgtype)
    }
    fn relations(&self) -> &Relations {
        &self.relations
    }
    fn set_relations(&mut self, new: Relations) {
        self.relations = new;
    }
}

impl MessageContent for msg::File {
    fn body(&self) -> &str {
        &self.body
    }
    fn msgtype(&self) -> Option<&str> {
        Some(&self.msgtype)
    }
    fn relations(&self) -> &Relations {
        &self.relations
    }
    fn set_relations(&mut self, new: Relations) {
        self.relations = new;
    }
}

impl MessageContent for msg::Sticker {
    fn body(&self) -> &str {
        &self.body
    }
    fn relations(&self) -> &Relations {
        &self.relations
    }
    fn set_relations(&mut self, new: Relations) {
        self.relations = new;
    }
}

impl MessageContent for msg::Reaction {
    fn relations(&self) -> &Relations {
        &self.relations
    }
    fn set_relations(&mut self, new: Relations) {
        self.relations = new;
    }
}

impl MessageContent for msg::Unknown {
    fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
    fn msgtype(&self) -> Option<&str> {
        self.msgtype.as_deref()
    }
}

impl MessageContent for voip::CallInvite {}
impl MessageContent for voip::CallAnswer {}
impl MessageContent for voip::CallHangUp {}
impl MessageContent for state::Name {}
impl MessageContent for state::Topic {}
impl MessageContent for state::Member {}
impl MessageContent for state::Create {}
impl MessageContent for state::Avatar {}

impl MediaContent for msg::Image {
    fn url(&self) -> &str {
        // The URL inside the encrypted-file descriptor wins when both exist.
        match &self.file {
            Some(f) => &f.url,
            None => &self.url,
        }
    }
    fn file(&self) -> Option<&EncryptedFile> {
        self.file.as_ref()
    }
    fn filename(&self) -> &str {
        // body carries the original upload name
        &self.body
    }
    fn thumbnail_url(&self) -> &str {
        match &self.info.thumbnail_file {
            Some(f) => &f.url,
            None => &self.info.thumbnail_url,
        }
    }
    fn thumbnail_file(&self) -> Option<&EncryptedFile> {
        self.info.thumbnail_file.as_ref()
    }
    fn blurhash(&self) -> &str {
        &self.info.blurhash
    }
    fn mimetype(&self) -> &str {
        &self.info.mimetype
    }
    fn filesize(&self) -> i64 {
        self.info.size
    }
    fn media_height(&self) -> i64 {
        i64::try_from(self.info.h).unwrap_or(i64::MAX)
    }
    fn media_width(&self) -> i64 {
        i64::try_from(self.info.w).unwrap_or(i64::MAX)
    }
}

impl MediaContent for msg::Video {
    fn url(&self) -> &str {
        match &self.file {
            Some(f) => &f.url,
            None => &self.url,
        }
    }
    fn file(&self) -> Option<&EncryptedFile> {
        self.file.as_ref()
    }
    fn filename(&self) -> &str {
        &self.body
    }
    fn thumbnail_url(&self) -> &str {
        match &self.info.thumbnail_file {
            Some(f) => &f.url,
            None => &self.info.thumbnail_url,
        }
    }
    fn thumbnail_file(&self) -> Option<&EncryptedFile> {
        self.info.thumbnail_file.as_ref()
    }
    fn duration(&self) -> u64 {
        self.info.duration
    }
    fn blurhash(&self) -> &str {
        &self.info.blurhash
    }
    fn mimetype(&self) -> &str {
        &self.info.mimetype
    }
    fn filesize(&self) -> i64 {
        self.info.size
    }
    fn media_height(&self) -> i64 {
        i64::try_from(self.info.h).unwrap_or(i64::MAX)
    }
    fn media_width(&self) -> i64 {
        i64::try_from(self.info.w).unwrap_or(i64::MAX)
    }
}

impl MediaContent for msg::Audio {
    fn url(&self) -> &str {
        match &self.file {
            Some(f) => &f.url,
            None => &self.url,
        }
    }
    fn file(&self) -> Option<&EncryptedFile> {
        self.file.as_ref()
    }
    fn filename(&self) -> &str {
        &self.body
    }
    fn duration(&self) -> u64 {
        self.info.duration
    }
    fn mimetype(&self) -> &str {
        &self.info.mimetype
    }
    fn filesize(&self) -> i64 {
        self.info.size
    }
}

impl MediaContent for msg::File {
    fn url(&self) -> &str {
        match &self.file {
            Some(f) => &f.url,
            None => &self.url,
        }
    }
    fn file(&self) -> Option<&EncryptedFile> {
        self.file.as_ref()
    }
    fn filename(&self) -> &str {
        // An explicit filename beats the body fallback.
        if !self.filename.is_empty() {
            &self.filename
        } else {
            &self.body
        }
    }
    fn thumbnail_url(&self) -> &str {
        match &self.info.thumbnail_file {
            Some(f) => &f.url,
            None => &self.info.thumbnail_url,
        }
    }
    fn thumbnail_file(&self) -> Option<&EncryptedFile> {
        self.info.thumbnail_file.as_ref()
    }
    fn mimetype(&self) -> &str {
        &self.info.mimetype
    }
    fn filesize(&self) -> i64 {
        self.info.size
    }
}

impl MediaContent for msg::Sticker {
    fn url(&self) -> &str {
        match &self.file {
            Some(f) => &f.url,
            None => &self.url,
        }
    }
    fn file(&self) -> Option<&EncryptedFile> {
        self.file.as_ref()
    }
    fn thumbnail_url(&self) -> &str {
        match &self.info.thumbnail_file {
            Some(f) => &f.url,
            None => &self.info.thumbnail_url,
        }
    }
    fn thumbnail_file(&self) -> Option<&EncryptedFile> {
        self.info.thumbnail_file.as_ref()
    }
    fn blurhash(&self) -> &str {
        &self.info.blurhash
    }
    fn mimetype(&self) -> &str {
        &self.info.mimetype
    }
    fn filesize(&self) -> i64 {
        self.info.size
    }
    fn media_height(&self) -> i64 {
        i64::try_from(self.info.h).unwrap_or(i64::MAX)
    }
    fn media_width(&self) -> i64 {
        i64::try_from(self.info.w).unwrap_or(i64::MAX)
    }
}

impl MediaContent for state::Avatar {
    fn url(&self) -> &str {
        &self.url
    }
}

impl MediaContent for msg::Text {}
impl MediaContent for msg::Emote {}
impl MediaContent for msg::Notice {}
impl MediaContent for msg::Reaction {}
impl MediaContent for msg::Unknown {}
impl MediaContent for voip::CallInvite {}
impl MediaContent for voip::CallAnswer {}
impl MediaContent for voip::CallHangUp {}
impl MediaContent for state::Name {}
impl MediaContent for state::Topic {}
impl MediaContent for state::Member {}
impl MediaContent for state::Create {}

pub fn event_id(event: &TimelineEvent) -> &str {
    for_each_event!(event, e => &e.event_id)
}

pub fn room_id(event: &TimelineEvent) -> &str {
    for_each_event!(event, e => &e.room_id)
}

pub fn sender(event: &TimelineEvent) -> &str {
    for_each_event!(event, e => &e.sender)
}

/// The origin server's timestamp as a UTC datetime. The conversion is exact
/// at millisecond precision.
pub fn origin_server_ts(event: &TimelineEvent) -> DateTime<Utc> {
    let ms = for_each_event!(event, e => e.origin_server_ts) as i64;
    DateTime::<Utc>::from_timestamp_millis(ms).unwrap_or_default()
}

pub fn body(event: &TimelineEvent) -> &str {
    for_each_event!(event, e => e.content.body())
}

/// The HTML-formatted body, or `""` unless the content declares the
/// `org.matrix.custom.html` format.
pub fn formatted_body(event: &TimelineEvent) -> &str {
    for_each_event!(event, e => e.content.formatted_body())
}

/// Like [`formatted_body`], but falls back to the plain body with HTML
/// special characters escaped and newlines turned into `<br>`.
pub fn formatted_body_with_fallback(event: &TimelineEvent) -> String {
    let formatted = formatted_body(event);
    if !formatted.is_empty() {
        return formatted.to_string();
    }

    let plain = body(event);
    let mut escaped = String::with_capacity(plain.len());
    for c in plain.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("<br>"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub fn msg_type(event: &TimelineEvent) -> MessageType {
    for_each_event!(event, e => {
        e.content
            .msgtype()
            .map(MessageType::from)
            .unwrap_or(MessageType::Unknown)
    })
}

/// The room name carried by a Name state event, `""` for everything else.
/// Only that exact variant counts; a `name` field on any other content
/// shape is unrelated and must not leak through here.
pub fn room_name(event: &TimelineEvent) -> &str {
    match event {
        TimelineEvent::RoomName(e) => &e.content.name,
        _ => "",
    }
}

/// The room topic carried by a Topic state event, `""` for everything else.
pub fn room_topic(event: &TimelineEvent) -> &str {
    match event {
        TimelineEvent::RoomTopic(e) => &e.content.topic,
        _ => "",
    }
}

/// `"video"` or `"voice"` for a call invite, depending on whether the SDP
/// offer advertises a video track; `""` for every other variant.
pub fn call_type(event: &TimelineEvent) -> &str {
    match event {
        TimelineEvent::CallInvite(e) => {
            let sdp = e.content.offer.sdp.to_ascii_lowercase();
            if sdp.contains("m=video") {
                "video"
            } else {
                "voice"
            }
        }
        _ => "",
    }
}

pub fn file(event: &TimelineEvent) -> Option<EncryptedFile> {
    for_each_event!(event, e => e.content.file().cloned())
}

pub fn thumbnail_file(event: &TimelineEvent) -> Option<EncryptedFile> {
    for_each_event!(event, e => e.content.thumbnail_file().cloned())
}

pub fn url(event: &TimelineEvent) -> &str {
    for_each_event!(event, e => e.content.url())
}

pub fn thumbnail_url(event: &TimelineEvent) -> &str {
    for_each_event!(event, e => e.content.thumbnail_url())
}

pub fn duration(event: &TimelineEvent) -> u64 {
    for_each_event!(event, e => e.content.duration())
}

pub fn blurhash(event: &TimelineEvent) -> &str {
    for_each_event!(event, e => e.content.blurhash())
}

pub fn mimetype(event: &TimelineEvent) -> &str {
    for_each_event!(event, e => e.content.mimetype())
}

pub fn filename(event: &TimelineEvent) -> &str {
    for_each_event!(event, e => e.content.filename())
}

pub fn filesize(event: &TimelineEvent) -> i64 {
    for_each_event!(event, e => e.content.filesize())
}

/// Height of the attached media, or [`UNKNOWN_DIMENSION`] when the variant
/// has no dimensions at all.
pub fn media_height(event: &TimelineEvent) -> i64 {
    for_each_event!(event, e => e.content.media_height())
}

pub fn media_width(event: &TimelineEvent) -> i64 {
    for_each_event!(event, e => e.content.media_width())
}

/// Height-to-width ratio of the attached media, as a presentation hint. A
/// zero width is substituted with 1 and a non-positive result with 1.0, so
/// the ratio is always positive and finite.
pub fn prop_height(event: &TimelineEvent) -> f64 {
    let mut w = media_width(event);
    if w == 0 {
        w = 1;
    }

    let prop = media_height(event) as f64 / w as f64;
    if prop > 0.0 {
        prop
    } else {
        1.0
    }
}

/// The aggregated relations of the event. Shapes without relation support
/// share one immutable empty value.
pub fn relations(event: &TimelineEvent) -> &Relations {
    for_each_event!(event, e => e.content.relations())
}

/// Replaces the event's relations, consuming the new value. A no-op on
/// shapes without relation support.
pub fn set_relations(event: &mut TimelineEvent, relations: Relations) {
    for_each_event!(event, e => e.content.set_relations(relations))
}

pub fn transaction_id(event: &TimelineEvent) -> &str {
    for_each_event!(event, e => {
        e.unsigned.transaction_id.as_deref().unwrap_or("")
    })
}

pub fn is_state_event(event: &TimelineEvent) -> bool {
    for_each_event!(event, e => e.state_key().is_some())
}

/// Re-encodes the held variant into self-describing JSON, the structural
/// inverse of deserializing a [`TimelineEvent`].
pub fn serialize_event(event: &TimelineEvent) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(event)
}
