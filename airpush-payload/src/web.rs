//! Web, Windows (WNS) and open-platform fragments.

use serde_json::Value;

use crate::compact::{Fragment, built, compact, optional_setters, reject};
use crate::{PayloadError, Result};

/// Web notify specific portion of a notification.
#[derive(Debug, Clone, Default)]
pub struct Web {
    alert: Option<Value>,
    title: Option<Value>,
    extra: Option<Value>,
    require_interaction: Option<Value>,
    icon: Option<Value>,
}

optional_setters!(Web {
    alert,
    title,
    extra,
    /// Keep the notification on screen until the user acts on it.
    require_interaction,
    /// Icon object, e.g. `{"url": "https://..."}`.
    icon,
});

impl Web {
    /// Create an empty web builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the web fragment.
    pub fn build(self) -> Fragment {
        built(
            "web",
            compact([
                ("alert", self.alert),
                ("title", self.title),
                ("extra", self.extra),
                ("require_interaction", self.require_interaction),
                ("icon", self.icon),
            ]),
        )
    }
}

/// WNS specific portion of a notification.
///
/// Exactly one of `alert`, `toast`, `tile` or `badge` must be set.
#[derive(Debug, Clone, Default)]
pub struct WnsPayload {
    alert: Option<Value>,
    toast: Option<Value>,
    tile: Option<Value>,
    badge: Option<Value>,
}

optional_setters!(WnsPayload { alert, toast, tile, badge });

impl WnsPayload {
    /// Create an empty WNS builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the fragment, failing unless exactly one message type is set.
    pub fn build(self) -> Result<Fragment> {
        let payload = compact([
            ("alert", self.alert),
            ("toast", self.toast),
            ("tile", self.tile),
            ("badge", self.badge),
        ]);

        if payload.len() != 1 {
            return Err(reject("wns", PayloadError::MessageTypeCount(payload.len())));
        }
        Ok(built("wns", payload))
    }
}

/// Override for a platform without a dedicated builder, keyed by platform
/// name in [`Notification::open_platform`](crate::Notification::open_platform).
#[derive(Debug, Clone, Default)]
pub struct OpenPlatform {
    alert: Option<Value>,
    title: Option<Value>,
    summary: Option<Value>,
    extra: Option<Value>,
    media_attachment: Option<Value>,
    interactive: Option<Value>,
}

optional_setters!(OpenPlatform {
    alert,
    title,
    summary,
    extra,
    media_attachment,
    interactive,
});

impl OpenPlatform {
    /// Create an empty open platform builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the open platform fragment.
    pub fn build(self) -> Fragment {
        built(
            "open_platform",
            compact([
                ("alert", self.alert),
                ("title", self.title),
                ("summary", self.summary),
                ("extra", self.extra),
                ("media_attachment", self.media_attachment),
                ("interactive", self.interactive),
            ]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wns_single_type() {
        let wns = WnsPayload::new().toast("t").build().unwrap();
        assert_eq!(Value::Object(wns), json!({"toast": "t"}));
    }

    #[test]
    fn test_wns_two_types() {
        let err = WnsPayload::new().alert("a").toast("t").build().unwrap_err();
        assert_eq!(err, PayloadError::MessageTypeCount(2));
    }

    #[test]
    fn test_wns_none() {
        let err = WnsPayload::new().build().unwrap_err();
        assert_eq!(err, PayloadError::MessageTypeCount(0));
    }

    #[test]
    fn test_wns_null_is_not_a_type() {
        let wns = WnsPayload::new().badge(Value::Null).tile(json!({"binding": {}})).build();
        assert!(wns.is_ok());
    }

    #[test]
    fn test_web() {
        let web = Web::new()
            .alert("hello")
            .require_interaction(true)
            .icon(json!({"url": "https://example.com/icon.png"}))
            .build();

        assert_eq!(
            Value::Object(web),
            json!({
                "alert": "hello",
                "require_interaction": true,
                "icon": {"url": "https://example.com/icon.png"}
            })
        );
    }

    #[test]
    fn test_open_platform() {
        let overrides = OpenPlatform::new().title("T").summary("S").build();
        assert_eq!(Value::Object(overrides), json!({"title": "T", "summary": "S"}));
    }
}
