//! Small shared type aliases.

/// Backend resource identifiers are UUID strings on the wire.
pub type ResourceId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
