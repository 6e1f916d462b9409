//! Integration tests for airpush-payload

use airpush_config::PayloadConfig;
use airpush_payload::*;
use serde_json::{Value, json};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("airpush_payload=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_compact_is_idempotent() {
    let samples: Vec<Vec<(&str, Option<Value>)>> = vec![
        vec![],
        vec![("a", None), ("b", Some(Value::Null))],
        vec![("a", Some(json!(1))), ("b", None), ("c", Some(json!({"x": null})))],
    ];

    for entries in samples {
        let once = compact(entries);
        assert!(once.values().all(|v| !v.is_null()));
        assert_eq!(compact_fragment(once.clone()), once);
    }
}

#[test]
fn test_notification_requires_content() {
    init_tracing();
    assert!(matches!(
        Notification::new().build(),
        Err(PayloadError::EmptyNotification)
    ));
    let payload = Notification::new().sms(Sms::new().alert("hi").build()).build().unwrap();
    assert_eq!(Value::Object(payload), json!({"sms": {"alert": "hi"}}));
}

#[test]
fn test_wns_cardinality() {
    assert!(WnsPayload::new().alert("a").toast("t").build().is_err());
    assert_eq!(
        Value::Object(WnsPayload::new().toast("t").build().unwrap()),
        json!({"toast": "t"})
    );
}

#[test]
fn test_ios_wire_keys() {
    let ios = Ios::new().content_available(true).build();
    assert_eq!(Value::Object(ios.clone()), json!({"content-available": true}));
    assert!(!ios.contains_key("content_available"));
}

#[test]
fn test_style_content_keys() {
    assert_eq!(
        Value::Object(Style::new("big_picture", "c1").build().unwrap()),
        json!({"type": "big_picture", "big_picture": "c1"})
    );
    assert_eq!(
        Value::Object(Style::new("inbox", json!(["a", "b"])).build().unwrap()),
        json!({"type": "inbox", "lines": ["a", "b"]})
    );
    assert!(matches!(
        Style::new("unknown", "x").build(),
        Err(PayloadError::UnknownStyle(_))
    ));
}

#[test]
fn test_live_activity_rules() {
    init_tracing();
    assert!(LiveActivity::new("pause", "n").build().is_err());
    assert!(LiveActivity::new("update", "n").priority(7).build().is_err());
    assert!(LiveActivity::new("end", "n").priority(10).build().is_ok());
    assert!(LiveActivity::new("update", "n").priority(5).build().is_ok());
}

#[test]
fn test_message_from_template_shape() {
    assert_eq!(
        Value::Object(message_from_template("T1").unwrap()),
        json!({"template": {"template_id": "T1"}})
    );
}

#[test]
fn test_email_missing_subject_named() {
    let err = Email::new()
        .message_type("commercial")
        .plaintext_body("b")
        .reply_to("r@example.com")
        .sender_address("s@example.com")
        .sender_name("S")
        .build()
        .unwrap_err();

    assert!(err.to_string().contains("Subject"));
}

#[test]
fn test_full_push_request() {
    init_tracing();

    let attachment = MediaAttachment::new("https://example.com/hero.jpg")
        .content(Content::new().title("Big sale").body("Today only").build())
        .options(json!({"crop": Crop::new().x(0).y(0).width(1).height(0.5).build()}))
        .build()
        .unwrap();

    let buttons = Interactive::new("ua_yes_no_foreground")
        .button_actions(json!({"yes": Actions::new().add_tag("interested").build()}))
        .build()
        .unwrap();

    let notification = Notification::new()
        .alert("Sale starts now")
        .ios(
            Ios::new()
                .badge("+1")
                .mutable_content(true)
                .media_attachment(attachment)
                .interactive(buttons.clone())
                .build(),
        )
        .android(
            Android::new()
                .style(Style::new(StyleType::BigPicture, "https://example.com/hero.jpg").build().unwrap())
                .live_update(LiveUpdate::new("start", "sale").build().unwrap())
                .build(),
        )
        .amazon(Amazon::new().interactive(buttons).build())
        .open_platform("open::signage", OpenPlatform::new().title("Sale").build())
        .build()
        .unwrap();

    let body = PushRequest::new(json!({"tag": "subscribers"}))
        .notification(notification)
        .options(Options::new().expiry(3600).build())
        .message(Message::new("Sale", "<h1>Sale</h1>").content_type("text/html").build().unwrap())
        .in_app(InApp::new().alert("Sale!").display_type("banner").build())
        .global_attributes(global_attributes(json!({"segment": "a"})))
        .build(&PayloadConfig::new().with_default_device_types(["ios", "android", "amazon"]))
        .unwrap();

    assert_eq!(body["device_types"], json!(["ios", "android", "amazon"]));
    assert_eq!(body["notification"]["ios"]["mutable-content"], json!(true));
    assert_eq!(
        body["notification"]["ios"]["media_attachment"]["options"]["crop"]["height"],
        json!(0.5)
    );
    assert_eq!(
        body["notification"]["android"]["style"],
        json!({"type": "big_picture", "big_picture": "https://example.com/hero.jpg"})
    );
    assert_eq!(body["notification"]["open::signage"], json!({"title": "Sale"}));
    assert_eq!(body["message"]["content_type"], json!("text/html"));

    let keys: Vec<&str> = body.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["audience", "notification", "device_types", "options", "message", "in_app", "global_attributes"]
    );
}
