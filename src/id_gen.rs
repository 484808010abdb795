use uuid::Uuid;

/// Generate a unique id for a locally saved program copy (UUID v4 hex, 32 chars).
pub fn program_record_id() -> String {
    Uuid::new_v4().simple().to_string()
}
