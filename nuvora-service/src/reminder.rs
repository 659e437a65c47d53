//! Splitting a reminder reply into its two labelled parts.

use serde::Serialize;

pub const REMINDER_MARKER: &str = "-Reminder:";
pub const GOAL_TIP_MARKER: &str = "-Goal Tip:";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReminderParts {
    pub reminder_message: String,
    pub goal_tip: String,
}

/// Text after the first `marker`, up to the next occurrence of the same marker.
fn after_marker<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let (_, rest) = text.split_once(marker)?;
    Some(rest.split_once(marker).map_or(rest, |(segment, _)| segment))
}

/// Split `reply` on the literal `-Reminder:` and `-Goal Tip:` markers.
///
/// A missing marker yields an empty string for its field.
pub fn split_reminder(reply: &str) -> ReminderParts {
    let reminder_message = after_marker(reply, REMINDER_MARKER)
        .map(|segment| {
            segment
                .split_once(GOAL_TIP_MARKER)
                .map_or(segment, |(before, _)| before)
                .trim()
                .to_string()
        })
        .unwrap_or_default();

    let goal_tip = after_marker(reply, GOAL_TIP_MARKER)
        .map(|segment| segment.trim().to_string())
        .unwrap_or_default();

    ReminderParts {
        reminder_message,
        goal_tip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_both_markers() {
        let parts = split_reminder("-Reminder: take a walk-Goal Tip: journal tonight");
        assert_eq!(parts.reminder_message, "take a walk");
        assert_eq!(parts.goal_tip, "journal tonight");
    }

    #[test]
    fn multiline_reply_is_trimmed() {
        let parts = split_reminder(
            "Sure!\n-Reminder: You've got this, start small.\n-Goal Tip: Lay out your running shoes.\n",
        );
        assert_eq!(parts.reminder_message, "You've got this, start small.");
        assert_eq!(parts.goal_tip, "Lay out your running shoes.");
    }

    #[test]
    fn missing_goal_tip_leaves_it_empty() {
        let parts = split_reminder("-Reminder: drink some water");
        assert_eq!(parts.reminder_message, "drink some water");
        assert_eq!(parts.goal_tip, "");
    }

    #[test]
    fn missing_reminder_leaves_it_empty() {
        let parts = split_reminder("Hello -Goal Tip: stretch for five minutes");
        assert_eq!(parts.reminder_message, "");
        assert_eq!(parts.goal_tip, "stretch for five minutes");
    }

    #[test]
    fn no_markers_yields_empty_parts() {
        assert_eq!(
            split_reminder("- Reminder: spaced markers do not match"),
            ReminderParts::default()
        );
    }

    #[test]
    fn repeated_marker_stops_at_second_occurrence() {
        let parts =
            split_reminder("-Reminder: first-Reminder: second-Goal Tip: tip-Goal Tip: extra");
        assert_eq!(parts.reminder_message, "first");
        assert_eq!(parts.goal_tip, "tip");
    }

    #[test]
    fn goal_tip_before_reminder() {
        let parts = split_reminder("-Goal Tip: plan ahead -Reminder: breathe");
        assert_eq!(parts.reminder_message, "breathe");
        assert_eq!(parts.goal_tip, "plan ahead -Reminder: breathe");
    }
}
