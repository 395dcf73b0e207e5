use crate::model::{EVERY_DAY, ScheduledTask};
use time::Weekday::{Friday, Monday, Sunday, Thursday, Tuesday, Wednesday};
use time::macros::time;

/// The full chore catalog. Plain data so entries can be swapped or tested
/// without touching the selection or command-building logic.
pub static CATALOG: &[ScheduledTask] = &[
    ScheduledTask {
        content: "Check Todoist before wrapping up",
        due_text: "today at 5pm",
        schedule_at_utc: time!(19:00),
        days: &[Monday, Tuesday, Wednesday, Thursday, Friday],
        project_id: Some(2217036134),
        responsible_uid: None,
    },
    ScheduledTask {
        content: "Rellenar botellas de agua",
        due_text: "today at 11pm",
        schedule_at_utc: time!(23:00),
        days: &EVERY_DAY,
        project_id: None,
        responsible_uid: None,
    },
    ScheduledTask {
        content: "Ropa para lavar / colgar",
        due_text: "today at 11pm",
        schedule_at_utc: time!(23:00),
        days: &EVERY_DAY,
        project_id: None,
        responsible_uid: None,
    },
    ScheduledTask {
        content: "Pasar rumba",
        due_text: "today at 11pm",
        schedule_at_utc: time!(23:00),
        days: &[Tuesday, Sunday],
        project_id: None,
        responsible_uid: None,
    },
    ScheduledTask {
        content: "Sacar jabón de la bañera",
        due_text: "today at 7pm",
        schedule_at_utc: time!(21:00),
        days: &[Thursday],
        project_id: None,
        responsible_uid: None,
    },
    ScheduledTask {
        content: "Dar vuelta la ensalada",
        due_text: "today at 8pm",
        schedule_at_utc: time!(22:00),
        days: &[Thursday],
        project_id: None,
        responsible_uid: None,
    },
    ScheduledTask {
        content: "Agua aires acondicionados",
        due_text: "today at 8pm",
        schedule_at_utc: time!(22:00),
        days: &[Thursday],
        project_id: None,
        responsible_uid: None,
    },
];
