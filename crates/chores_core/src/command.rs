use crate::identity;
use crate::model::{DEFAULT_PROJECT_ID, DEFAULT_RESPONSIBLE_UID, ScheduledTask};
use serde::Serialize;
use time::OffsetDateTime;

/// Reminder lead time before the due text's time, in minutes.
pub const REMINDER_MINUTE_OFFSET: u32 = 30;

/// One entry of the sync batch. The tag and field names follow the Todoist
/// sync command vocabulary; `uuid` doubles as the idempotency key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Command {
    #[serde(rename = "item_add")]
    ItemAdd {
        uuid: String,
        temp_id: String,
        args: ItemArgs,
    },
    #[serde(rename = "reminder_add")]
    ReminderAdd {
        uuid: String,
        temp_id: String,
        args: ReminderArgs,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemArgs {
    pub content: String,
    pub project_id: i64,
    pub due: Due,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_uid: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Due {
    pub string: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderArgs {
    pub item_id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub service: &'static str,
    pub minute_offset: u32,
}

/// Map each due chore to an `item_add` plus a `reminder_add`, items first.
/// Pure transformation; an empty due set yields an empty batch.
pub fn build_commands(due: &[&ScheduledTask], now: OffsetDateTime) -> Vec<Command> {
    let mut commands = Vec::with_capacity(due.len() * 2);

    for task in due {
        let id = identity::task_id(task.content, now);
        commands.push(Command::ItemAdd {
            uuid: id.clone(),
            temp_id: id,
            args: ItemArgs {
                content: task.content.to_string(),
                project_id: task.project_id.unwrap_or(DEFAULT_PROJECT_ID),
                due: Due {
                    string: task.due_text.to_string(),
                },
                responsible_uid: Some(task.responsible_uid.unwrap_or(DEFAULT_RESPONSIBLE_UID)),
            },
        });
    }

    for task in due {
        let item_id = identity::task_id(task.content, now);
        let id = identity::reminder_id(&item_id);
        commands.push(Command::ReminderAdd {
            uuid: id.clone(),
            temp_id: id,
            args: ReminderArgs {
                item_id,
                kind: "relative",
                service: "push",
                minute_offset: REMINDER_MINUTE_OFFSET,
            },
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::{Command, Due, ItemArgs, build_commands};
    use crate::model::{DEFAULT_PROJECT_ID, DEFAULT_RESPONSIBLE_UID, EVERY_DAY, ScheduledTask};
    use time::macros::{datetime, time};

    const NOW: time::OffsetDateTime = datetime!(2026-01-01 23:30 UTC);

    fn chore(content: &'static str) -> ScheduledTask {
        ScheduledTask {
            content,
            due_text: "today at 11pm",
            schedule_at_utc: time!(23:00),
            days: &EVERY_DAY,
            project_id: None,
            responsible_uid: None,
        }
    }

    #[test]
    fn two_due_tasks_produce_four_commands() {
        let first = chore("first");
        let second = chore("second");
        let commands = build_commands(&[&first, &second], NOW);

        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[0], Command::ItemAdd { .. }));
        assert!(matches!(commands[1], Command::ItemAdd { .. }));
        assert!(matches!(commands[2], Command::ReminderAdd { .. }));
        assert!(matches!(commands[3], Command::ReminderAdd { .. }));
    }

    #[test]
    fn reminder_references_its_sibling_item() {
        let task = chore("first");
        let commands = build_commands(&[&task], NOW);

        let (item_uuid, item_temp_id) = match &commands[0] {
            Command::ItemAdd { uuid, temp_id, .. } => (uuid.clone(), temp_id.clone()),
            other => panic!("unexpected command: {other:?}"),
        };
        assert_eq!(item_uuid, item_temp_id);

        match &commands[1] {
            Command::ReminderAdd { uuid, temp_id, args } => {
                assert_eq!(args.item_id, item_uuid);
                assert_eq!(uuid, &format!("{item_uuid}r"));
                assert_eq!(temp_id, uuid);
                assert_eq!(args.kind, "relative");
                assert_eq!(args.service, "push");
                assert_eq!(args.minute_offset, 30);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn defaults_apply_when_the_entry_names_none() {
        let task = chore("first");
        let commands = build_commands(&[&task], NOW);

        match &commands[0] {
            Command::ItemAdd { args, .. } => {
                assert_eq!(args.project_id, DEFAULT_PROJECT_ID);
                assert_eq!(args.responsible_uid, Some(DEFAULT_RESPONSIBLE_UID));
                assert_eq!(args.due.string, "today at 11pm");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn entry_overrides_win_over_defaults() {
        let mut task = chore("first");
        task.project_id = Some(42);
        task.responsible_uid = Some(7);
        let commands = build_commands(&[&task], NOW);

        match &commands[0] {
            Command::ItemAdd { args, .. } => {
                assert_eq!(args.project_id, 42);
                assert_eq!(args.responsible_uid, Some(7));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serialized_item_add_uses_wire_field_names() {
        let task = chore("first");
        let commands = build_commands(&[&task], NOW);
        let value = serde_json::to_value(&commands[0]).unwrap();

        assert_eq!(value["type"], "item_add");
        assert_eq!(value["uuid"], value["temp_id"]);
        assert_eq!(value["args"]["content"], "first");
        assert_eq!(value["args"]["project_id"], DEFAULT_PROJECT_ID);
        assert_eq!(value["args"]["due"]["string"], "today at 11pm");
        assert_eq!(value["args"]["responsible_uid"], DEFAULT_RESPONSIBLE_UID);
    }

    #[test]
    fn serialized_reminder_add_uses_wire_field_names() {
        let task = chore("first");
        let commands = build_commands(&[&task], NOW);
        let value = serde_json::to_value(&commands[1]).unwrap();

        assert_eq!(value["type"], "reminder_add");
        assert_eq!(value["args"]["type"], "relative");
        assert_eq!(value["args"]["service"], "push");
        assert_eq!(value["args"]["minute_offset"], 30);
        assert_eq!(value["args"]["item_id"], value["uuid"].as_str().unwrap().trim_end_matches('r'));
    }

    #[test]
    fn absent_responsible_uid_is_omitted_not_null() {
        let args = ItemArgs {
            content: "first".to_string(),
            project_id: DEFAULT_PROJECT_ID,
            due: Due {
                string: "today at 11pm".to_string(),
            },
            responsible_uid: None,
        };

        let encoded = serde_json::to_string(&args).unwrap();
        assert!(!encoded.contains("responsible_uid"));
        assert!(!encoded.contains("null"));
    }

    #[test]
    fn empty_due_set_builds_no_commands() {
        assert!(build_commands(&[], NOW).is_empty());
    }
}
