//! Catalog-wide checks: every projection is total over every variant, and
//! serialization is the exact inverse of decoding.

use mtx_events::accessors;
use mtx_events::events::common::{Relation, RelationType, Relations};
use mtx_events::events::TimelineEvent;
use serde_json::{json, Value};

fn room_event(event_type: &str, content: Value) -> Value {
    json!({
        "content": content,
        "event_id": "$Rk6ptuAGr5qZt7qmRbHdn8OFjwWAcXqL9rUwH576pYE",
        "origin_server_ts": 1554477158528u64,
        "room_id": "!zVpPeWAObqutioiNzB:jki.re",
        "sender": "@erikj:jki.re",
        "type": event_type
    })
}

fn state_event(event_type: &str, state_key: &str, content: Value) -> Value {
    json!({
        "content": content,
        "event_id": "$VnU0XEK6VPvVIF2dYia3VEM4geCQ",
        "origin_server_ts": 1554477158528u64,
        "room_id": "!zVpPeWAObqutioiNzB:jki.re",
        "sender": "@erikj:jki.re",
        "state_key": state_key,
        "type": event_type
    })
}

/// Image sent in an encrypted room: descriptors instead of plaintext URLs,
/// plus a plaintext thumbnail_url the descriptors must take precedence over.
fn encrypted_image() -> Value {
    room_event(
        "m.room.message",
        json!({
            "body": "secret.png",
            "file": {
                "hashes": {"sha256": "fdSLu/YkRx3Wyh3KQabP3rd6+SFiKg5lsJZQHtkSAYA"},
                "iv": "w+sE15fzSc0AAAAA",
                "key": {
                    "alg": "A256CTR",
                    "ext": true,
                    "k": "aWF6-32KGYaC3A_FEUCk1Bt0JA37zP0wr3EixR153Zl",
                    "key_ops": ["encrypt", "decrypt"],
                    "kty": "oct"
                },
                "url": "mxc://jki.re/secret",
                "v": "v2"
            },
            "info": {
                "h": 720u64,
                "thumbnail_file": {
                    "hashes": {"sha256": "kT0bvvtSJETZgLdT5Cvh2G9CzBGs2fYL3L2EYsfDSgk"},
                    "iv": "L2sE15fzSc0AAAAA",
                    "key": {
                        "alg": "A256CTR",
                        "ext": true,
                        "k": "BQ66-32KGYaC3A_FEUCk1Bt0JA37zP0wr3EixR153Zl",
                        "key_ops": ["encrypt", "decrypt"],
                        "kty": "oct"
                    },
                    "url": "mxc://jki.re/secret-thumb",
                    "v": "v2"
                },
                "thumbnail_url": "mxc://jki.re/plain-thumb",
                "w": 1280u64
            },
            "msgtype": "m.image"
        }),
    )
}

/// One wire-format fixture per variant in the catalog.
fn catalog() -> Vec<Value> {
    vec![
        room_event("m.room.message", json!({"body": "hello", "msgtype": "m.text"})),
        room_event(
            "m.room.message",
            json!({
                "body": "waves",
                "format": "org.matrix.custom.html",
                "formatted_body": "<em>waves</em>",
                "msgtype": "m.emote"
            }),
        ),
        room_event("m.room.message", json!({"body": "beep", "msgtype": "m.notice"})),
        room_event(
            "m.room.message",
            json!({
                "body": "selfie.png",
                "info": {"h": 720u64, "mimetype": "image/png", "size": 40_000i64, "w": 1280u64},
                "msgtype": "m.image",
                "url": "mxc://jki.re/selfie"
            }),
        ),
        room_event(
            "m.room.message",
            json!({
                "body": "clip.mp4",
                "info": {
                    "duration": 90_000u64,
                    "h": 720u64,
                    "mimetype": "video/mp4",
                    "size": 1_500_000i64,
                    "thumbnail_info": {"h": 90u64, "w": 160u64},
                    "thumbnail_url": "mxc://jki.re/thumb",
                    "w": 1280u64
                },
                "msgtype": "m.video",
                "url": "mxc://jki.re/clip"
            }),
        ),
        room_event(
            "m.room.message",
            json!({
                "body": "voice.ogg",
                "info": {"duration": 3_000u64, "mimetype": "audio/ogg", "size": 12_000i64},
                "msgtype": "m.audio",
                "url": "mxc://jki.re/voice"
            }),
        ),
        room_event(
            "m.room.message",
            json!({
                "body": "doc.pdf",
                "filename": "quarterly-report.pdf",
                "info": {"mimetype": "application/pdf", "size": 250_000i64},
                "msgtype": "m.file",
                "url": "mxc://jki.re/doc"
            }),
        ),
        encrypted_image(),
        // Media without any info block at all.
        room_event(
            "m.room.message",
            json!({"body": "voice memo", "msgtype": "m.audio", "url": "mxc://jki.re/memo"}),
        ),
        room_event(
            "m.sticker",
            json!({
                "body": "shrug",
                "info": {"h": 128u64, "w": 128u64},
                "url": "mxc://jki.re/shrug"
            }),
        ),
        room_event(
            "m.reaction",
            json!({
                "m.relates_to": {
                    "relations": [
                        {"event_id": "$other", "key": "👍", "rel_type": "m.annotation"}
                    ]
                }
            }),
        ),
        room_event(
            "m.room.message",
            json!({"body": "confetti", "msgtype": "nic.custom.confetti"}),
        ),
        room_event(
            "m.call.invite",
            json!({
                "call_id": "c1",
                "lifetime": 60_000u64,
                "offer": {"sdp": "v=0\r\nm=audio 9 UDP/TLS", "type": "offer"},
                "version": 0u64
            }),
        ),
        room_event(
            "m.call.answer",
            json!({
                "answer": {"sdp": "v=0\r\nm=audio 9 UDP/TLS", "type": "answer"},
                "call_id": "c1",
                "version": 0u64
            }),
        ),
        room_event(
            "m.call.hangup",
            json!({"call_id": "c1", "version": 0u64}),
        ),
        state_event("m.room.name", "", json!({"name": "casual kitchen"})),
        state_event("m.room.topic", "", json!({"topic": "low effort cooking"})),
        state_event(
            "m.room.member",
            "@dave:matrix.org",
            json!({"displayname": "Dave", "membership": "join"}),
        ),
        state_event(
            "m.room.create",
            "",
            json!({"creator": "@erikj:jki.re", "room_version": "6"}),
        ),
        state_event("m.room.avatar", "", json!({"url": "mxc://jki.re/avatar"})),
    ]
}

fn decode(value: &Value) -> TimelineEvent {
    serde_json::from_value(value.clone()).unwrap()
}

#[test]
fn every_projection_is_total() {
    for fixture in catalog() {
        let event = decode(&fixture);

        assert!(!accessors::event_id(&event).is_empty());
        assert!(!accessors::room_id(&event).is_empty());
        assert!(!accessors::sender(&event).is_empty());
        assert_eq!(
            accessors::origin_server_ts(&event).timestamp_millis(),
            1554477158528
        );

        // The rest just must never fail, whatever the shape.
        accessors::body(&event);
        accessors::formatted_body(&event);
        accessors::formatted_body_with_fallback(&event);
        accessors::msg_type(&event);
        accessors::room_name(&event);
        accessors::room_topic(&event);
        accessors::call_type(&event);
        accessors::url(&event);
        accessors::thumbnail_url(&event);
        accessors::file(&event);
        accessors::thumbnail_file(&event);
        accessors::filename(&event);
        accessors::filesize(&event);
        accessors::duration(&event);
        accessors::blurhash(&event);
        accessors::mimetype(&event);
        accessors::media_height(&event);
        accessors::media_width(&event);
        accessors::transaction_id(&event);
        accessors::relations(&event);
        accessors::is_state_event(&event);

        let ratio = accessors::prop_height(&event);
        assert!(ratio.is_finite() && ratio > 0.0, "bad ratio {}", ratio);
    }
}

#[test]
fn serialization_is_inverse_of_decoding() {
    for fixture in catalog() {
        let event = decode(&fixture);
        let serialized = accessors::serialize_event(&event).unwrap();
        assert_eq!(serialized, fixture);

        let reparsed: TimelineEvent = serde_json::from_value(serialized).unwrap();
        assert_eq!(reparsed, event);
    }
}

#[test]
fn state_events_are_exactly_the_keyed_ones() {
    for fixture in catalog() {
        let event = decode(&fixture);
        assert_eq!(
            accessors::is_state_event(&event),
            fixture.get("state_key").is_some(),
            "mismatch for {}",
            fixture["type"]
        );
    }
}

#[test]
fn set_relations_only_touches_supporting_shapes() {
    let new = Relations {
        relations: vec![Relation {
            rel_type: RelationType::Replace,
            event_id: "$edit".to_string(),
            key: None,
        }],
        synthesized: false,
    };

    for fixture in catalog() {
        let mut event = decode(&fixture);
        let before = accessors::serialize_event(&event).unwrap();

        accessors::set_relations(&mut event, new.clone());

        let after = accessors::serialize_event(&event).unwrap();
        if accessors::relations(&event) == &new {
            assert_ne!(after, before, "relations applied but wire form unchanged");
        } else {
            // Unsupporting shape: the event must be untouched.
            assert_eq!(after, before, "no-op mutated {}", fixture["type"]);
        }
    }
}

#[test]
fn encrypted_descriptors_win_over_plaintext_urls() {
    let fixture = encrypted_image();
    let event = decode(&fixture);

    assert_eq!(accessors::url(&event), "mxc://jki.re/secret");
    assert_eq!(accessors::file(&event).unwrap().url, "mxc://jki.re/secret");
    assert_eq!(accessors::thumbnail_url(&event), "mxc://jki.re/secret-thumb");
    assert_eq!(
        accessors::thumbnail_file(&event).unwrap().url,
        "mxc://jki.re/secret-thumb"
    );

    assert_eq!(accessors::serialize_event(&event).unwrap(), fixture);
}

#[test]
fn transaction_id_is_read_from_unsigned() {
    let mut fixture = room_event("m.room.message", json!({"body": "hi", "msgtype": "m.text"}));
    fixture["unsigned"] = json!({"transaction_id": "m1554477158123.1"});

    let event = decode(&fixture);
    assert_eq!(accessors::transaction_id(&event), "m1554477158123.1");
    assert_eq!(accessors::serialize_event(&event).unwrap(), fixture);
}
