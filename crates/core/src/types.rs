/// All primary keys are UUIDs. Movie and series ids share one keyspace, so a
/// detail lookup can try both tables with the same id.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a new time-ordered primary key.
pub fn new_id() -> DbId {
    uuid::Uuid::now_v7()
}
