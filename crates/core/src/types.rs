/// Record identifiers are UUID v4 strings, opaque to clients.
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Project status code as stored. Unrecognized values are kept as-is.
pub type StatusId = i32;
