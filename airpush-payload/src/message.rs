//! Rich message, in-app, SMS and email fragments, and message options.

use serde_json::{Map, Value};

use crate::compact::{Fragment, built, compact, optional_setters, require};
use crate::Result;

/// Rich (message center) message. `title` and `body` are required.
#[derive(Debug, Clone)]
pub struct Message {
    title: Value,
    body: Value,
    content_type: Option<Value>,
    content_encoding: Option<Value>,
    extra: Option<Value>,
    expiry: Option<Value>,
    icons: Option<Value>,
    options: Option<Value>,
}

optional_setters!(Message {
    /// MIME type of `body`, e.g. `text/html`.
    content_type,
    /// `utf-8` or `base64`.
    content_encoding,
    extra,
    expiry,
    icons,
    options,
});

impl Message {
    /// Create a rich message builder from its required fields.
    pub fn new(title: impl Into<Value>, body: impl Into<Value>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            content_type: None,
            content_encoding: None,
            extra: None,
            expiry: None,
            icons: None,
            options: None,
        }
    }

    /// Build the fragment, failing when `title` or `body` is null.
    pub fn build(self) -> Result<Fragment> {
        let title = require("message", "title", self.title)?;
        let body = require("message", "body", self.body)?;

        Ok(built(
            "message",
            compact([
                ("title", Some(title)),
                ("body", Some(body)),
                ("content_type", self.content_type),
                ("content_encoding", self.content_encoding),
                ("extra", self.extra),
                ("expiry", self.expiry),
                ("icons", self.icons),
                ("options", self.options),
            ]),
        ))
    }
}

/// Message body that references a stored template.
///
/// The id is kept verbatim (an empty string included); only null fails.
///
/// ```
/// use airpush_payload::message_from_template;
/// use serde_json::{json, Value};
///
/// let message = message_from_template("T1").unwrap();
/// assert_eq!(Value::Object(message), json!({"template": {"template_id": "T1"}}));
/// ```
pub fn message_from_template(template_id: impl Into<Value>) -> Result<Fragment> {
    let template_id = require("message_from_template", "template_id", template_id.into())?;

    let mut template = Map::new();
    template.insert("template_id".to_string(), template_id);

    let mut message = Map::new();
    message.insert("template".to_string(), Value::Object(template));
    Ok(built("message_from_template", message))
}

/// In-app message.
#[derive(Debug, Clone, Default)]
pub struct InApp {
    alert: Option<Value>,
    display_type: Option<Value>,
    display: Option<Value>,
    expiry: Option<Value>,
    actions: Option<Value>,
    interactive: Option<Value>,
    extra: Option<Value>,
}

optional_setters!(InApp {
    alert,
    /// Currently only `banner`.
    display_type,
    display,
    expiry,
    /// Output of [`Actions::build`](crate::Actions::build).
    actions,
    interactive,
    extra,
});

impl InApp {
    /// Create an empty in-app message builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the in-app message fragment.
    pub fn build(self) -> Fragment {
        built(
            "in_app",
            compact([
                ("alert", self.alert),
                ("display_type", self.display_type),
                ("display", self.display),
                ("expiry", self.expiry),
                ("actions", self.actions),
                ("interactive", self.interactive),
                ("extra", self.extra),
            ]),
        )
    }
}

/// SMS specific portion of a notification.
#[derive(Debug, Clone, Default)]
pub struct Sms {
    alert: Option<Value>,
    expiry: Option<Value>,
}

optional_setters!(Sms { alert, expiry });

impl Sms {
    /// Create an empty SMS builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the SMS fragment.
    pub fn build(self) -> Fragment {
        built("sms", compact([("alert", self.alert), ("expiry", self.expiry)]))
    }
}

/// Email specific portion of a notification.
///
/// `message_type`, `plaintext_body`, `reply_to`, `sender_address`,
/// `sender_name` and `subject` are required. They are checked in that order
/// and the first one missing is reported.
#[derive(Debug, Clone, Default)]
pub struct Email {
    bypass_opt_in_level: Option<Value>,
    html_body: Option<Value>,
    message_type: Option<Value>,
    plaintext_body: Option<Value>,
    reply_to: Option<Value>,
    sender_address: Option<Value>,
    sender_name: Option<Value>,
    subject: Option<Value>,
}

optional_setters!(Email {
    bypass_opt_in_level,
    html_body,
    /// `commercial` or `transactional`.
    message_type,
    plaintext_body,
    reply_to,
    sender_address,
    sender_name,
    subject,
});

impl Email {
    /// Create an empty email builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the fragment, reporting the first missing required field.
    pub fn build(self) -> Result<Fragment> {
        let required = |label: &'static str, value: Option<Value>| {
            require("email", label, value.unwrap_or(Value::Null))
        };

        let message_type = required("Message type", self.message_type)?;
        let plaintext_body = required("Plaintext Body", self.plaintext_body)?;
        let reply_to = required("Reply To", self.reply_to)?;
        let sender_address = required("Sender address", self.sender_address)?;
        let sender_name = required("Sender name", self.sender_name)?;
        let subject = required("Subject", self.subject)?;

        Ok(built(
            "email",
            compact([
                ("bypass_opt_in_level", self.bypass_opt_in_level),
                ("html_body", self.html_body),
                ("message_type", Some(message_type)),
                ("plaintext_body", Some(plaintext_body)),
                ("reply_to", Some(reply_to)),
                ("sender_address", Some(sender_address)),
                ("sender_name", Some(sender_name)),
                ("subject", Some(subject)),
            ]),
        ))
    }
}

/// Delivery options for a push.
#[derive(Debug, Clone, Default)]
pub struct Options {
    expiry: Option<Value>,
    bypass_frequency_limits: Option<Value>,
    bypass_holdout_groups: Option<Value>,
    no_throttle: Option<Value>,
    omit_from_activity_log: Option<Value>,
    personalization: Option<Value>,
    redact_payload: Option<Value>,
}

optional_setters!(Options {
    expiry,
    bypass_frequency_limits,
    bypass_holdout_groups,
    no_throttle,
    omit_from_activity_log,
    personalization,
    redact_payload,
});

impl Options {
    /// Create an empty options builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the options fragment.
    pub fn build(self) -> Fragment {
        built(
            "options",
            compact([
                ("expiry", self.expiry),
                ("bypass_frequency_limits", self.bypass_frequency_limits),
                ("bypass_holdout_groups", self.bypass_holdout_groups),
                ("no_throttle", self.no_throttle),
                ("omit_from_activity_log", self.omit_from_activity_log),
                ("personalization", self.personalization),
                ("redact_payload", self.redact_payload),
            ]),
        )
    }
}
