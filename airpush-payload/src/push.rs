//! Push request body: audience, device types and the fragments built by the
//! rest of this crate.

use airpush_config::PayloadConfig;
use serde_json::Value;
use tracing::debug;

use crate::compact::{Fragment, compact, optional_setters, reject, require};
use crate::{PayloadError, Result};

/// Selector meaning every audience member or every device type.
pub fn all() -> Value {
    Value::from("all")
}

/// Target specific device types, e.g. `device_types(["ios", "android"])`.
pub fn device_types<I, S>(types: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Value::Array(types.into_iter().map(|t| Value::String(t.into())).collect())
}

/// Body of a push-send request.
///
/// ```
/// use airpush_config::PayloadConfig;
/// use airpush_payload::{all, Notification, PushRequest};
/// use serde_json::{json, Value};
///
/// let body = PushRequest::new(all())
///     .notification(Notification::new().alert("Hi").build().unwrap())
///     .device_types(all())
///     .build(&PayloadConfig::default())
///     .unwrap();
///
/// assert_eq!(
///     Value::Object(body),
///     json!({"audience": "all", "notification": {"alert": "Hi"}, "device_types": "all"})
/// );
/// ```
#[derive(Debug, Clone)]
pub struct PushRequest {
    audience: Value,
    notification: Option<Value>,
    device_types: Option<Value>,
    options: Option<Value>,
    message: Option<Value>,
    in_app: Option<Value>,
    campaigns: Option<Value>,
    localizations: Option<Value>,
    global_attributes: Option<Value>,
}

optional_setters!(PushRequest {
    /// Output of [`Notification::build`](crate::Notification::build).
    notification,
    /// [`all`] or a [`device_types`] list. Falls back to the configured
    /// default device types when unset.
    device_types,
    options,
    message,
    in_app,
    /// `{"categories": [...]}`.
    campaigns,
    localizations,
    global_attributes,
});

impl PushRequest {
    /// Create a push request builder from its required fields.
    pub fn new(audience: impl Into<Value>) -> Self {
        Self {
            audience: audience.into(),
            notification: None,
            device_types: None,
            options: None,
            message: None,
            in_app: None,
            campaigns: None,
            localizations: None,
            global_attributes: None,
        }
    }

    /// Assemble the request body.
    pub fn build(self, config: &PayloadConfig) -> Result<Fragment> {
        let audience = require("push", "audience", self.audience)?;

        let device_types = match self.device_types {
            Some(types) if !types.is_null() => types,
            _ if !config.default_device_types.is_empty() => {
                device_types(config.default_device_types.iter().cloned())
            }
            _ => return Err(reject("push", PayloadError::MissingDeviceTypes)),
        };
        if matches!(&device_types, Value::Array(types) if types.is_empty()) {
            return Err(reject("push", PayloadError::MissingDeviceTypes));
        }

        let body = compact([
            ("audience", Some(audience)),
            ("notification", self.notification),
            ("device_types", Some(device_types)),
            ("options", self.options),
            ("message", self.message),
            ("in_app", self.in_app),
            ("campaigns", self.campaigns),
            ("localizations", self.localizations),
            ("global_attributes", self.global_attributes),
        ]);

        debug!(keys = body.len(), "push request assembled");
        Ok(body)
    }

    /// Assemble and serialize the body, enforcing the configured size limit.
    pub fn to_json(self, config: &PayloadConfig) -> Result<String> {
        let body = serde_json::to_string(&Value::Object(self.build(config)?))?;

        if let Some(limit) = config.max_payload_bytes {
            if body.len() > limit {
                return Err(reject(
                    "push",
                    PayloadError::PayloadTooLarge {
                        size: body.len(),
                        limit,
                    },
                ));
            }
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_and_device_types() {
        assert_eq!(all(), json!("all"));
        assert_eq!(device_types(["ios", "web"]), json!(["ios", "web"]));
    }

    #[test]
    fn test_configured_device_types_fallback() {
        let config = PayloadConfig::new().with_default_device_types(["android"]);
        let body = PushRequest::new(json!({"tag": "vip"}))
            .message(json!({"title": "t", "body": "b"}))
            .build(&config)
            .unwrap();

        assert_eq!(
            Value::Object(body),
            json!({
                "audience": {"tag": "vip"},
                "device_types": ["android"],
                "message": {"title": "t", "body": "b"}
            })
        );
    }

    #[test]
    fn test_explicit_device_types_win() {
        let config = PayloadConfig::new().with_default_device_types(["android"]);
        let body = PushRequest::new(all())
            .device_types(device_types(["ios"]))
            .build(&config)
            .unwrap();

        assert_eq!(body["device_types"], json!(["ios"]));
    }

    #[test]
    fn test_missing_device_types() {
        let err = PushRequest::new(all())
            .build(&PayloadConfig::default())
            .unwrap_err();
        assert_eq!(err, PayloadError::MissingDeviceTypes);

        let err = PushRequest::new(all())
            .device_types(json!([]))
            .build(&PayloadConfig::default())
            .unwrap_err();
        assert_eq!(err, PayloadError::MissingDeviceTypes);
    }

    #[test]
    fn test_null_audience() {
        let err = PushRequest::new(Value::Null)
            .device_types(all())
            .build(&PayloadConfig::default())
            .unwrap_err();
        assert_eq!(err, PayloadError::MissingField { field: "audience" });
    }

    #[test]
    fn test_to_json_size_limit() {
        let request = PushRequest::new(all())
            .device_types(all())
            .notification(json!({"alert": "x".repeat(64)}));

        let err = request
            .clone()
            .to_json(&PayloadConfig::new().with_max_payload_bytes(32))
            .unwrap_err();
        assert!(matches!(err, PayloadError::PayloadTooLarge { limit: 32, .. }));

        let body = request.to_json(&PayloadConfig::default()).unwrap();
        assert!(body.starts_with(r#"{"audience":"all","notification":"#));
    }
}
