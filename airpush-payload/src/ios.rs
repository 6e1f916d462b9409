//! iOS notification fragments: the `ios` override, media attachments and
//! live activities.

use serde_json::Value;

use crate::compact::{Fragment, built, compact, optional_setters, reject, require, require_event};
use crate::{PayloadError, Result};

/// iOS specific portion of a notification.
///
/// `content_available` and `mutable_content` are emitted under their
/// hyphenated APNs names.
///
/// ```
/// use airpush_payload::Ios;
/// use serde_json::{json, Value};
///
/// let ios = Ios::new().alert("Hello").content_available(true).build();
/// assert_eq!(Value::Object(ios), json!({"alert": "Hello", "content-available": true}));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ios {
    alert: Option<Value>,
    badge: Option<Value>,
    sound: Option<Value>,
    content_available: Option<Value>,
    extra: Option<Value>,
    expiry: Option<Value>,
    priority: Option<Value>,
    category: Option<Value>,
    interactive: Option<Value>,
    mutable_content: Option<Value>,
    media_attachment: Option<Value>,
    title: Option<Value>,
    subtitle: Option<Value>,
    collapse_id: Option<Value>,
    thread_id: Option<Value>,
    live_activity: Option<Value>,
}

optional_setters!(Ios {
    /// Alert text, or an alert dictionary.
    alert,
    /// Badge count, or an increment such as `"+1"`.
    badge,
    sound,
    /// Wake the app for a background refresh.
    content_available,
    extra,
    expiry,
    priority,
    category,
    /// Output of [`Interactive::build`](crate::Interactive::build).
    interactive,
    /// Allow a notification service extension to modify the content.
    mutable_content,
    /// Output of [`MediaAttachment::build`].
    media_attachment,
    title,
    subtitle,
    collapse_id,
    thread_id,
    /// Output of [`LiveActivity::build`].
    live_activity,
});

impl Ios {
    /// Create an empty iOS override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the fragment.
    pub fn build(self) -> Fragment {
        built(
            "ios",
            compact([
                ("alert", self.alert),
                ("badge", self.badge),
                ("sound", self.sound),
                ("content-available", self.content_available),
                ("extra", self.extra),
                ("expiry", self.expiry),
                ("priority", self.priority),
                ("category", self.category),
                ("interactive", self.interactive),
                ("mutable-content", self.mutable_content),
                ("media_attachment", self.media_attachment),
                ("title", self.title),
                ("subtitle", self.subtitle),
                ("collapse_id", self.collapse_id),
                ("thread_id", self.thread_id),
                ("live_activity", self.live_activity),
            ]),
        )
    }
}

/// iOS media attachment. `url` is required.
#[derive(Debug, Clone)]
pub struct MediaAttachment {
    url: Value,
    content: Option<Value>,
    options: Option<Value>,
}

optional_setters!(MediaAttachment {
    /// Output of [`Content::build`].
    content,
    /// Attachment options; may embed a [`Crop`] fragment.
    options,
});

impl MediaAttachment {
    /// Create a media attachment builder from its required fields.
    pub fn new(url: impl Into<Value>) -> Self {
        Self {
            url: url.into(),
            content: None,
            options: None,
        }
    }

    /// Build the fragment, failing when `url` is null.
    pub fn build(self) -> Result<Fragment> {
        let url = require("media_attachment", "url", self.url)?;

        Ok(built(
            "media_attachment",
            compact([
                ("url", Some(url)),
                ("content", self.content),
                ("options", self.options),
            ]),
        ))
    }
}

/// Portions of the notification replaced when the media attachment loads.
#[derive(Debug, Clone, Default)]
pub struct Content {
    title: Option<Value>,
    subtitle: Option<Value>,
    body: Option<Value>,
}

optional_setters!(Content { title, subtitle, body });

impl Content {
    /// Create an empty content builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the content fragment.
    pub fn build(self) -> Fragment {
        built(
            "content",
            compact([
                ("title", self.title),
                ("subtitle", self.subtitle),
                ("body", self.body),
            ]),
        )
    }
}

/// Crop rectangle for a media attachment thumbnail.
#[derive(Debug, Clone, Default)]
pub struct Crop {
    x: Option<Value>,
    y: Option<Value>,
    width: Option<Value>,
    height: Option<Value>,
}

optional_setters!(Crop { x, y, width, height });

impl Crop {
    /// Create an empty crop builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the crop fragment.
    pub fn build(self) -> Fragment {
        built(
            "crop",
            compact([
                ("x", self.x),
                ("y", self.y),
                ("width", self.width),
                ("height", self.height),
            ]),
        )
    }
}

/// iOS Live Activity update. `event` must be `update` or `end`.
#[derive(Debug, Clone)]
pub struct LiveActivity {
    event: String,
    name: Value,
    alert: Option<Value>,
    priority: Option<u8>,
    content_state: Option<Value>,
    relevance_score: Option<Value>,
    stale_date: Option<Value>,
    dismissal_date: Option<Value>,
    timestamp: Option<Value>,
}

optional_setters!(LiveActivity {
    alert,
    content_state,
    relevance_score,
    /// Epoch seconds after which the activity is considered stale.
    stale_date,
    dismissal_date,
    timestamp,
});

impl LiveActivity {
    /// Accepted `event` values.
    pub const EVENTS: &'static [&'static str] = &["update", "end"];
    /// Accepted APNs priorities.
    pub const PRIORITIES: [u8; 2] = [5, 10];

    /// Create a live activity builder from its required fields.
    pub fn new(event: impl Into<String>, name: impl Into<Value>) -> Self {
        Self {
            event: event.into(),
            name: name.into(),
            alert: None,
            priority: None,
            content_state: None,
            relevance_score: None,
            stale_date: None,
            dismissal_date: None,
            timestamp: None,
        }
    }

    /// APNs priority; only 5 and 10 are accepted at build time.
    pub fn priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Build the fragment.
    ///
    /// Checks run in order: event, name, priority.
    pub fn build(self) -> Result<Fragment> {
        let event = require_event("live_activity", self.event, Self::EVENTS)?;
        let name = require("live_activity", "name", self.name)?;
        if let Some(priority) = self.priority {
            if !Self::PRIORITIES.contains(&priority) {
                return Err(reject(
                    "live_activity",
                    PayloadError::InvalidPriority(priority),
                ));
            }
        }

        Ok(built(
            "live_activity",
            compact([
                ("event", Some(event)),
                ("alert", self.alert),
                ("name", Some(name)),
                ("priority", self.priority.map(Value::from)),
                ("content_state", self.content_state),
                ("relevance_score", self.relevance_score),
                ("stale_date", self.stale_date),
                ("dismissal_date", self.dismissal_date),
                ("timestamp", self.timestamp),
            ]),
        ))
    }
}
