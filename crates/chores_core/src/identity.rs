use sha1::{Digest, Sha1};
use time::OffsetDateTime;

/// Appended to a task id to form the id of its reminder command.
pub const REMINDER_SUFFIX: &str = "r";

/// Deterministic identifier for a chore on a given UTC date: the lowercase
/// hex SHA-1 of the content followed by the date as `YYYYMMDD`. Todoist
/// deduplicates by this value, so re-running within the same day must
/// reproduce it exactly. SHA-1 is kept from the historical scheme; the id
/// only needs determinism and per-content distinctness, not cryptographic
/// strength.
pub fn task_id(content: &str, now: OffsetDateTime) -> String {
    let digest = Sha1::digest(content.as_bytes());
    let date = now.date();
    format!(
        "{:x}{:04}{:02}{:02}",
        digest,
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

pub fn reminder_id(parent_id: &str) -> String {
    format!("{parent_id}{REMINDER_SUFFIX}")
}
