//! Chat turn formatting.

use pulse_core::{ChatTurn, TurnRole};

/// One turn as printed in the terminal, with its Jira-call badge.
pub fn format_turn(turn: &ChatTurn) -> String {
    let who = match turn.role {
        TurnRole::User => "You",
        TurnRole::Assistant => "Ask Pulse",
    };
    let time = turn.created_at.with_timezone(&chrono::Local).format("%H:%M");

    match turn.function_call_label() {
        Some(badge) => format!("{who} [{time}] ({badge})\n{}", turn.content),
        None => format!("{who} [{time}]\n{}", turn.content),
    }
}
