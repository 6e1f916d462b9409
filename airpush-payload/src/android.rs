//! Android and Amazon fragments, plus the style, public notification,
//! wearable and live update objects they embed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::compact::{Fragment, built, compact, optional_setters, reject, require, require_event};
use crate::{PayloadError, Result};

/// Android specific portion of a notification.
#[derive(Debug, Clone, Default)]
pub struct Android {
    title: Option<Value>,
    alert: Option<Value>,
    summary: Option<Value>,
    extra: Option<Value>,
    style: Option<Value>,
    icon: Option<Value>,
    icon_color: Option<Value>,
    notification_tag: Option<Value>,
    notification_channel: Option<Value>,
    category: Option<Value>,
    visibility: Option<Value>,
    public_notification: Option<Value>,
    sound: Option<Value>,
    priority: Option<Value>,
    collapse_key: Option<Value>,
    time_to_live: Option<Value>,
    delivery_priority: Option<Value>,
    delay_while_idle: Option<Value>,
    local_only: Option<Value>,
    wearable: Option<Value>,
    interactive: Option<Value>,
    live_update: Option<Value>,
}

optional_setters!(Android {
    title,
    alert,
    summary,
    extra,
    /// Output of [`Style::build`].
    style,
    icon,
    icon_color,
    notification_tag,
    notification_channel,
    category,
    visibility,
    /// Output of [`PublicNotification::build`].
    public_notification,
    sound,
    priority,
    collapse_key,
    /// Seconds, or an ISO 8601 timestamp.
    time_to_live,
    delivery_priority,
    delay_while_idle,
    local_only,
    /// Output of [`Wearable::build`].
    wearable,
    interactive,
    /// Output of [`LiveUpdate::build`].
    live_update,
});

impl Android {
    /// Create an empty Android builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the Android fragment.
    pub fn build(self) -> Fragment {
        built(
            "android",
            compact([
                ("title", self.title),
                ("alert", self.alert),
                ("summary", self.summary),
                ("extra", self.extra),
                ("style", self.style),
                ("icon", self.icon),
                ("icon_color", self.icon_color),
                ("notification_tag", self.notification_tag),
                ("notification_channel", self.notification_channel),
                ("category", self.category),
                ("visibility", self.visibility),
                ("public_notification", self.public_notification),
                ("sound", self.sound),
                ("priority", self.priority),
                ("collapse_key", self.collapse_key),
                ("time_to_live", self.time_to_live),
                ("delivery_priority", self.delivery_priority),
                ("delay_while_idle", self.delay_while_idle),
                ("local_only", self.local_only),
                ("wearable", self.wearable),
                ("interactive", self.interactive),
                ("live_update", self.live_update),
            ]),
        )
    }
}

/// Amazon specific portion of a notification.
#[derive(Debug, Clone, Default)]
pub struct Amazon {
    alert: Option<Value>,
    consolidation_key: Option<Value>,
    expires_after: Option<Value>,
    extra: Option<Value>,
    title: Option<Value>,
    summary: Option<Value>,
    interactive: Option<Value>,
    style: Option<Value>,
    sound: Option<Value>,
}

optional_setters!(Amazon {
    alert,
    consolidation_key,
    expires_after,
    extra,
    title,
    summary,
    interactive,
    style,
    sound,
});

impl Amazon {
    /// Create an empty Amazon builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the Amazon fragment.
    pub fn build(self) -> Fragment {
        built(
            "amazon",
            compact([
                ("alert", self.alert),
                ("consolidation_key", self.consolidation_key),
                ("expires_after", self.expires_after),
                ("extra", self.extra),
                ("title", self.title),
                ("summary", self.summary),
                ("interactive", self.interactive),
                ("style", self.style),
                ("sound", self.sound),
            ]),
        )
    }
}

/// Android/Amazon notification style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleType {
    /// Large image; content is an image URL.
    BigPicture,
    /// Expanded text; content is a string.
    BigText,
    /// Inbox list; content is a list of lines.
    Inbox,
}

impl StyleType {
    /// Wire name of the style, emitted under `type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigPicture => "big_picture",
            Self::BigText => "big_text",
            Self::Inbox => "inbox",
        }
    }

    /// Wire key that carries the style's content.
    pub fn content_key(&self) -> &'static str {
        match self {
            Self::BigPicture => "big_picture",
            Self::BigText => "big_text",
            Self::Inbox => "lines",
        }
    }
}

impl fmt::Display for StyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleType {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "big_picture" => Ok(Self::BigPicture),
            "big_text" => Ok(Self::BigText),
            "inbox" => Ok(Self::Inbox),
            other => Err(PayloadError::UnknownStyle(other.to_string())),
        }
    }
}

impl From<StyleType> for String {
    fn from(style: StyleType) -> Self {
        style.as_str().to_string()
    }
}

/// Android/Amazon style object.
///
/// The content is emitted under a key chosen by the style type:
///
/// ```
/// use airpush_payload::{Style, StyleType};
/// use serde_json::{json, Value};
///
/// let style = Style::new(StyleType::Inbox, json!(["a", "b"])).build().unwrap();
/// assert_eq!(Value::Object(style), json!({"type": "inbox", "lines": ["a", "b"]}));
/// ```
#[derive(Debug, Clone)]
pub struct Style {
    kind: String,
    content: Value,
    title: Option<Value>,
    summary: Option<Value>,
}

optional_setters!(Style { title, summary });

impl Style {
    /// `kind` is a [`StyleType`] or its wire name; unknown names fail at build.
    pub fn new(kind: impl Into<String>, content: impl Into<Value>) -> Self {
        Self {
            kind: kind.into(),
            content: content.into(),
            title: None,
            summary: None,
        }
    }

    /// Build the fragment, failing on an unknown type or null content.
    pub fn build(self) -> Result<Fragment> {
        let kind = self
            .kind
            .parse::<StyleType>()
            .map_err(|e| reject("style", e))?;
        let content = require("style", "content", self.content)?;

        Ok(built(
            "style",
            compact([
                ("type", Some(Value::from(kind.as_str()))),
                (kind.content_key(), Some(content)),
                ("title", self.title),
                ("summary", self.summary),
            ]),
        ))
    }
}

/// Android L public (lock screen) version of a notification.
#[derive(Debug, Clone, Default)]
pub struct PublicNotification {
    title: Option<Value>,
    alert: Option<Value>,
    summary: Option<Value>,
}

optional_setters!(PublicNotification { title, alert, summary });

impl PublicNotification {
    /// Create an empty public notification builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the public notification fragment.
    pub fn build(self) -> Fragment {
        built(
            "public_notification",
            compact([
                ("title", self.title),
                ("alert", self.alert),
                ("summary", self.summary),
            ]),
        )
    }
}

/// Android wearable extensions.
#[derive(Debug, Clone, Default)]
pub struct Wearable {
    background_image: Option<Value>,
    extra_pages: Option<Value>,
    interactive: Option<Value>,
}

optional_setters!(Wearable {
    background_image,
    extra_pages,
    interactive,
});

impl Wearable {
    /// Create an empty wearable builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the wearable fragment.
    pub fn build(self) -> Fragment {
        built(
            "wearable",
            compact([
                ("background_image", self.background_image),
                ("extra_pages", self.extra_pages),
                ("interactive", self.interactive),
            ]),
        )
    }
}

/// Android Live Update. `event` must be `start`, `update` or `end`.
#[derive(Debug, Clone)]
pub struct LiveUpdate {
    event: String,
    name: Value,
    content_state: Option<Value>,
    kind: Option<Value>,
    dismissal_date: Option<Value>,
    timestamp: Option<Value>,
}

optional_setters!(LiveUpdate {
    content_state,
    /// Emitted as `type`.
    kind,
    dismissal_date,
    timestamp,
});

impl LiveUpdate {
    /// Accepted `event` values.
    pub const EVENTS: &'static [&'static str] = &["start", "update", "end"];

    /// Create a live update builder from its required fields.
    pub fn new(event: impl Into<String>, name: impl Into<Value>) -> Self {
        Self {
            event: event.into(),
            name: name.into(),
            content_state: None,
            kind: None,
            dismissal_date: None,
            timestamp: None,
        }
    }

    /// Build the fragment, failing on an unknown event or null name.
    pub fn build(self) -> Result<Fragment> {
        let event = require_event("live_update", self.event, Self::EVENTS)?;
        let name = require("live_update", "name", self.name)?;

        Ok(built(
            "live_update",
            compact([
                ("event", Some(event)),
                ("name", Some(name)),
                ("content_state", self.content_state),
                ("type", self.kind),
                ("dismissal_date", self.dismissal_date),
                ("timestamp", self.timestamp),
            ]),
        ))
    }
}
