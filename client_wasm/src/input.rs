//! Keyboard and pointer input mapping

/// What a key press asks of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Confirm,
    Cancel,
    CycleDifficulty,
}

/// One-shot commands bound to keys
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        " " | "Enter" => Some(KeyCommand::Confirm),
        "Escape" => Some(KeyCommand::Cancel),
        "d" | "D" => Some(KeyCommand::CycleDifficulty),
        _ => None,
    }
}

/// Handle key down event
pub fn handle_key_down(key: &str, current_dir: i8) -> i8 {
    match key {
        "ArrowUp" | "w" | "W" => -1,
        "ArrowDown" | "s" | "S" => 1,
        _ => current_dir,
    }
}

/// Handle key up event; releasing a key only stops the direction it drives
pub fn handle_key_up(key: &str, current_dir: i8) -> i8 {
    match key {
        "ArrowUp" | "w" | "W" if current_dir == -1 => 0,
        "ArrowDown" | "s" | "S" if current_dir == 1 => 0,
        _ => current_dir,
    }
}

/// Convert an element-relative pointer offset into court units
pub fn pointer_to_court_y(offset_y: f32, element_height: f32, court_height: f32) -> Option<f32> {
    if !(element_height > 0.0) || !offset_y.is_finite() {
        return None;
    }
    Some(court_height * offset_y / element_height)
}
