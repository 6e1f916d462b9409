// Airpush - declarative payload construction for push notification APIs
//
// The builders live in `airpush-payload`; this crate re-exports them along
// with the configuration their push requests are assembled against.

// Re-export payload builders
pub use airpush_payload::*;

// Re-export configuration
pub use airpush_config;
pub use airpush_config::PayloadConfig;

// Prelude for common imports
pub mod prelude {
    pub use airpush_config::PayloadConfig;
    pub use airpush_payload::prelude::*;
}
