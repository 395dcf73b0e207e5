use time::{Time, Weekday};

/// Project that receives a chore when its entry does not name one.
pub const DEFAULT_PROJECT_ID: i64 = 2210411112;

/// User assigned to a chore when its entry does not name one.
pub const DEFAULT_RESPONSIBLE_UID: i64 = 22636116;

pub const EVERY_DAY: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

/// One recurring chore. The catalog is static data; nothing mutates these
/// at runtime, and `content` doubles as the identity hash input, so it must
/// stay stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    pub content: &'static str,
    /// Free-text schedule forwarded verbatim to Todoist ("today at 5pm").
    /// Cosmetic only; selection never reads it.
    pub due_text: &'static str,
    /// Time of day, in UTC, at which the chore comes due.
    pub schedule_at_utc: Time,
    pub days: &'static [Weekday],
    pub project_id: Option<i64>,
    pub responsible_uid: Option<i64>,
}
