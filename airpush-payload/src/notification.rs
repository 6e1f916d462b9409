//! The notification object: one fragment per platform plus cross-platform
//! keys, assembled into a single document.

use serde_json::Value;
use tracing::debug;

use crate::compact::{Fragment, compact, optional_setters, reject};
use crate::{PayloadError, Result};

/// Global attributes attached to a push.
///
/// The value passes through unchanged; the function exists so global
/// attributes are supplied the same way as every other fragment.
pub fn global_attributes(attributes: impl Into<Value>) -> Value {
    attributes.into()
}

/// Notification object for a push.
///
/// Platform fragments are embedded as given; they were validated by the
/// builder that produced them.
///
/// ```
/// use airpush_payload::{Ios, Notification, WnsPayload};
/// use serde_json::{json, Value};
///
/// let notification = Notification::new()
///     .alert("Hello")
///     .ios(Ios::new().badge(1).build())
///     .wns(WnsPayload::new().toast("Hi").build().unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     Value::Object(notification),
///     json!({"alert": "Hello", "ios": {"badge": 1}, "wns": {"toast": "Hi"}})
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Notification {
    actions: Option<Value>,
    alert: Option<Value>,
    amazon: Option<Value>,
    android: Option<Value>,
    email: Option<Value>,
    global_attributes: Option<Value>,
    interactive: Option<Value>,
    ios: Option<Value>,
    sms: Option<Value>,
    web: Option<Value>,
    wns: Option<Value>,
    open_platforms: Vec<(String, Value)>,
}

optional_setters!(Notification {
    actions,
    /// Cross-platform alert text.
    alert,
    amazon,
    android,
    email,
    global_attributes,
    interactive,
    ios,
    sms,
    web,
    wns,
});

impl Notification {
    /// Create an empty notification builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add overrides for an open platform, emitted under `platform` as-is.
    ///
    /// Neither the name nor the value is checked, so platforms this crate
    /// does not model can still be addressed. A name that collides with a
    /// built-in key replaces that entry. Unlike every other field, a null
    /// override is not dropped: it is emitted as `null` under its name.
    pub fn open_platform(mut self, platform: impl Into<String>, overrides: impl Into<Value>) -> Self {
        self.open_platforms.push((platform.into(), overrides.into()));
        self
    }

    /// Add several open platform overrides at once.
    pub fn open_platforms<I, K, V>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.open_platforms.extend(
            platforms
                .into_iter()
                .map(|(platform, overrides)| (platform.into(), overrides.into())),
        );
        self
    }

    /// Build the notification, failing when nothing was supplied.
    pub fn build(self) -> Result<Fragment> {
        let mut payload = compact([
            ("actions", self.actions),
            ("alert", self.alert),
            ("amazon", self.amazon),
            ("android", self.android),
            ("email", self.email),
            ("global_attributes", self.global_attributes),
            ("interactive", self.interactive),
            ("ios", self.ios),
            ("sms", self.sms),
            ("web", self.web),
            ("wns", self.wns),
        ]);

        for (platform, overrides) in self.open_platforms {
            payload.insert(platform, overrides);
        }

        if payload.is_empty() {
            return Err(reject("notification", PayloadError::EmptyNotification));
        }

        debug!(
            platforms = ?payload.keys().collect::<Vec<_>>(),
            "notification assembled"
        );
        Ok(payload)
    }
}
