use crate::model::ScheduledTask;
use time::OffsetDateTime;

/// Width of the due window, in hours. A chore fires on the first run whose
/// "now" lands in `[schedule_at_utc, schedule_at_utc + 1h]`; a trigger
/// cadence above one hour can skip chores, which is accepted.
const DUE_WINDOW_HOURS: f64 = 1.0;

/// Select the catalog entries that are due at `now`.
pub fn due_tasks<'a>(catalog: &'a [ScheduledTask], now: OffsetDateTime) -> Vec<&'a ScheduledTask> {
    catalog.iter().filter(|task| is_due(task, now)).collect()
}

/// Wrap policy: a negative offset is shifted by 24 hours, so a chore
/// scheduled just before midnight is still due on the run just after it.
pub fn is_due(task: &ScheduledTask, now: OffsetDateTime) -> bool {
    if !task.days.contains(&now.weekday()) {
        return false;
    }

    let mut diff = (now.time() - task.schedule_at_utc).as_seconds_f64() / 3600.0;
    if diff < 0.0 {
        diff += 24.0;
    }
    diff <= DUE_WINDOW_HOURS
}
