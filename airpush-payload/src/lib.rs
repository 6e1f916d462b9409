//! # Airpush Payload
//!
//! Declarative builders for push notification payloads.
//!
//! ## Features
//!
//! - **Platform overrides**: iOS, Android, Amazon, Web, WNS, SMS, Email and
//!   open platforms
//! - **Nested objects**: styles, media attachments, interactive buttons,
//!   live activities and live updates
//! - **Compaction**: unset fields never reach the output
//! - **Fail-fast validation**: required fields and closed value sets are
//!   checked when a fragment is built
//!
//! Fragments are built bottom-up: build the leaf objects first, pass the
//! results to the parent builders, and finish with [`Notification`] (or a
//! full [`PushRequest`]). A parent never re-validates a fragment it embeds.
//!
//! ## Quick Start
//!
//! ```rust
//! use airpush_payload::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> airpush_payload::Result<()> {
//! let android = Android::new()
//!     .alert("Your order shipped")
//!     .style(Style::new(StyleType::BigText, "Arriving Tuesday between 9 and 12").build()?)
//!     .build();
//!
//! let ios = Ios::new()
//!     .alert("Your order shipped")
//!     .mutable_content(true)
//!     .media_attachment(MediaAttachment::new("https://example.com/box.png").build()?)
//!     .build();
//!
//! let notification = Notification::new()
//!     .android(android)
//!     .ios(ios)
//!     .open_platform("open::kiosk", OpenPlatform::new().alert("Order ready").build())
//!     .build()?;
//!
//! assert_eq!(notification["ios"]["mutable-content"], json!(true));
//! # Ok(())
//! # }
//! ```

mod android;
mod compact;
mod error;
mod interactive;
mod ios;
mod message;
mod notification;
mod push;
mod web;

pub use android::{Amazon, Android, LiveUpdate, PublicNotification, Style, StyleType, Wearable};
pub use compact::{Fragment, compact, compact_fragment};
pub use error::{PayloadError, Result};
pub use interactive::{Actions, Interactive};
pub use ios::{Content, Crop, Ios, LiveActivity, MediaAttachment};
pub use message::{Email, InApp, Message, Options, Sms, message_from_template};
pub use notification::{Notification, global_attributes};
pub use push::{PushRequest, all, device_types};
pub use web::{OpenPlatform, Web, WnsPayload};

/// Prelude for common imports.
///
/// ```
/// use airpush_payload::prelude::*;
/// ```
pub mod prelude {
    pub use crate::android::{
        Amazon, Android, LiveUpdate, PublicNotification, Style, StyleType, Wearable,
    };
    pub use crate::compact::Fragment;
    pub use crate::error::{PayloadError, Result};
    pub use crate::interactive::{Actions, Interactive};
    pub use crate::ios::{Content, Crop, Ios, LiveActivity, MediaAttachment};
    pub use crate::message::{Email, InApp, Message, Options, Sms, message_from_template};
    pub use crate::notification::{Notification, global_attributes};
    pub use crate::push::{PushRequest, all, device_types};
    pub use crate::web::{OpenPlatform, Web, WnsPayload};
}
