//! Interactive notification and action objects, shared by several platforms.

use serde_json::Value;

use crate::compact::{Fragment, built, compact, optional_setters, require};
use crate::Result;

/// Interactive notification. `type` names a predefined or custom button set.
#[derive(Debug, Clone)]
pub struct Interactive {
    kind: Value,
    button_actions: Option<Value>,
}

optional_setters!(Interactive {
    /// Map of button id to [`Actions`] fragment.
    button_actions,
});

impl Interactive {
    /// Create an interactive builder from its required fields.
    pub fn new(kind: impl Into<Value>) -> Self {
        Self {
            kind: kind.into(),
            button_actions: None,
        }
    }

    /// Build the fragment, failing when `type` is null.
    pub fn build(self) -> Result<Fragment> {
        let kind = require("interactive", "type", self.kind)?;

        Ok(built(
            "interactive",
            compact([("type", Some(kind)), ("button_actions", self.button_actions)]),
        ))
    }
}

/// Actions taken when a notification (or one of its buttons) is opened.
#[derive(Debug, Clone, Default)]
pub struct Actions {
    add_tag: Option<Value>,
    remove_tag: Option<Value>,
    open: Option<Value>,
    share: Option<Value>,
    app_defined: Option<Value>,
}

optional_setters!(Actions {
    add_tag,
    remove_tag,
    /// Open action, e.g. `{"type": "url", "content": "https://..."}`.
    open,
    share,
    app_defined,
});

impl Actions {
    /// Create an empty actions builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the actions fragment.
    pub fn build(self) -> Fragment {
        built(
            "actions",
            compact([
                ("add_tag", self.add_tag),
                ("remove_tag", self.remove_tag),
                ("open", self.open),
                ("share", self.share),
                ("app_defined", self.app_defined),
            ]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PayloadError;
    use serde_json::json;

    #[test]
    fn test_interactive_with_buttons() {
        let interactive = Interactive::new("ua_yes_no_foreground")
            .button_actions(json!({
                "yes": Actions::new().add_tag("clicked_yes").build(),
            }))
            .build()
            .unwrap();

        assert_eq!(
            Value::Object(interactive),
            json!({
                "type": "ua_yes_no_foreground",
                "button_actions": {"yes": {"add_tag": "clicked_yes"}}
            })
        );
    }

    #[test]
    fn test_interactive_null_type() {
        let err = Interactive::new(Value::Null).build().unwrap_err();
        assert_eq!(err.to_string(), "type must not be null");
    }

    #[test]
    fn test_actions_open_key() {
        let actions = Actions::new()
            .open(json!({"type": "url", "content": "https://example.com"}))
            .remove_tag(json!(["a", "b"]))
            .build();

        assert_eq!(
            Value::Object(actions),
            json!({
                "remove_tag": ["a", "b"],
                "open": {"type": "url", "content": "https://example.com"}
            })
        );
        assert!(matches!(
            Interactive::new(Value::Null).build(),
            Err(PayloadError::MissingField { .. })
        ));
    }
}
