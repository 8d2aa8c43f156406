//! Text rendering for engine events.
//!
//! Every function returns the lines to print; the console decides where they go.

use game_core::{GameEvent, SessionSnapshot, ShotOutcome, WeaponId};

/// Turns a catalog id like `"shotgun"` into `"Shotgun"`.
pub fn display_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Numbered (1-based) weapon menu.
pub fn weapon_menu(weapons: &[WeaponId]) -> Vec<String> {
    std::iter::once("Choose your gun:".to_owned())
        .chain(
            weapons
                .iter()
                .enumerate()
                .map(|(i, id)| format!("{}. {}", i + 1, display_name(id.as_str()))),
        )
        .collect()
}

pub fn action_menu() -> Vec<String> {
    vec![
        String::new(),
        "1. Shoot an animal".to_owned(),
        "2. End game".to_owned(),
    ]
}

/// Lines for a selection result. Rejections collapse to one retry message.
pub fn selection_lines(event: &GameEvent) -> Vec<String> {
    match event {
        GameEvent::WeaponSelected { weapon_id } => {
            vec![format!("You have selected {}", display_name(weapon_id.as_str()))]
        }
        GameEvent::WeaponSelectionRejected { .. } => vec![invalid_gun_choice()],
        _ => Vec::new(),
    }
}

pub fn invalid_gun_choice() -> String {
    "Invalid Choice for Gun".to_owned()
}

pub fn invalid_action() -> String {
    "Invalid choice. Please try again.".to_owned()
}

/// Appearance, result and running total for one shot.
pub fn shot_lines(outcome: &ShotOutcome, total: u64) -> Vec<String> {
    let name = display_name(outcome.target.id().as_str());
    let mut lines = vec![format!("A {name} appears!")];
    if let Some(flavour) = outcome.target.appearance() {
        lines.push(flavour.to_owned());
    }

    match outcome.points_earned {
        Some(points) => {
            lines.push(format!("The {name} is hit!"));
            lines.push(format!("Hit! You earned {points} points."));
            lines.push(format!("Total Points: {total}"));
        }
        None => lines.push("Missed! Better luck next time.".to_owned()),
    }
    lines
}

/// Final score, per-hit history, and sign-off.
pub fn final_lines(snapshot: &SessionSnapshot) -> Vec<String> {
    let mut lines = vec![format!("Final Score: {}", snapshot.final_score)];
    if !snapshot.history.is_empty() {
        lines.push("Score History:".to_owned());
        lines.extend(
            snapshot
                .history
                .iter()
                .map(|points| format!("  +{points} points")),
        );
    }
    lines.push(format!(
        "Shots: {}, hits: {}",
        snapshot.shots_fired, snapshot.hits
    ));
    lines.push("Game Over. Thank you for playing!".to_owned());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Target;

    #[test]
    fn display_name_capitalizes() {
        assert_eq!(display_name("rifle"), "Rifle");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn menu_is_one_based() {
        let menu = weapon_menu(&[WeaponId::new("rifle"), WeaponId::new("shotgun")]);
        assert_eq!(menu, ["Choose your gun:", "1. Rifle", "2. Shotgun"]);
    }

    #[test]
    fn hit_lines_include_flavour_and_total() {
        let outcome = ShotOutcome {
            hit: true,
            target: Target::new("bear", 20).with_appearance("The bear growls menacingly."),
            points_earned: Some(20),
        };
        assert_eq!(
            shot_lines(&outcome, 30),
            [
                "A Bear appears!",
                "The bear growls menacingly.",
                "The Bear is hit!",
                "Hit! You earned 20 points.",
                "Total Points: 30",
            ]
        );
    }

    #[test]
    fn miss_lines() {
        let outcome = ShotOutcome {
            hit: false,
            target: Target::new("deer", 10),
            points_earned: None,
        };
        assert_eq!(
            shot_lines(&outcome, 0),
            ["A Deer appears!", "Missed! Better luck next time."]
        );
    }

    #[test]
    fn final_lines_list_history() {
        let snapshot = SessionSnapshot {
            final_score: 30,
            history: vec![10, 20],
            shots_fired: 3,
            hits: 2,
        };
        assert_eq!(
            final_lines(&snapshot),
            [
                "Final Score: 30",
                "Score History:",
                "  +10 points",
                "  +20 points",
                "Shots: 3, hits: 2",
                "Game Over. Thank you for playing!",
            ]
        );
    }
}
