//! Field compaction and the shared validation helpers every builder uses.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{PayloadError, Result};

/// A compacted JSON object: wire key to value, never holding an absent entry.
///
/// Insertion order is preserved, so fragments serialize with keys in the
/// order their builder declares them.
pub type Fragment = Map<String, Value>;

/// Keep every entry whose value was supplied.
///
/// `None` and `Some(Value::Null)` both count as absent. Keys are used
/// verbatim, so any wire-format renaming happens before this call.
///
/// ```
/// use airpush_payload::compact;
/// use serde_json::json;
///
/// let fragment = compact([
///     ("alert", Some(json!("hi"))),
///     ("badge", None),
///     ("content-available", Some(json!(true))),
/// ]);
///
/// assert_eq!(serde_json::Value::Object(fragment), json!({"alert": "hi", "content-available": true}));
/// ```
pub fn compact<K, I>(entries: I) -> Fragment
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Option<Value>)>,
{
    entries
        .into_iter()
        .filter_map(|(key, value)| match value {
            None | Some(Value::Null) => None,
            Some(value) => Some((key.into(), value)),
        })
        .collect()
}

/// Compact an existing object, dropping null members.
pub fn compact_fragment(fragment: Fragment) -> Fragment {
    compact(fragment.into_iter().map(|(key, value)| (key, Some(value))))
}

/// Fail with a field-named error when a required value is null.
pub(crate) fn require(builder: &'static str, field: &'static str, value: Value) -> Result<Value> {
    if value.is_null() {
        return Err(reject(builder, PayloadError::MissingField { field }));
    }
    Ok(value)
}

/// Closed-set membership test for `event` fields.
pub(crate) fn require_event(
    builder: &'static str,
    event: String,
    allowed: &'static [&'static str],
) -> Result<Value> {
    if !allowed.contains(&event.as_str()) {
        return Err(reject(builder, PayloadError::InvalidEvent { event, allowed }));
    }
    Ok(Value::String(event))
}

pub(crate) fn reject(builder: &'static str, err: PayloadError) -> PayloadError {
    warn!(builder, error = %err, "payload builder rejected input");
    err
}

pub(crate) fn built(builder: &'static str, fragment: Fragment) -> Fragment {
    debug!(builder, keys = fragment.len(), "fragment built");
    fragment
}

/// Generates one chainable setter per optional field. Each setter stores
/// `Some(value.into())`; the field must be declared `Option<Value>`.
macro_rules! optional_setters {
    ($ty:ident { $($(#[$doc:meta])* $field:ident),* $(,)? }) => {
        impl $ty {
            $(
                $(#[$doc])*
                pub fn $field(mut self, value: impl Into<serde_json::Value>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

pub(crate) use optional_setters;
