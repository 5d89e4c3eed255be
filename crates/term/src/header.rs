//! Header banner layout for the top terminal row.
//!
//! This module is pure (no I/O). It can be unit-tested.

pub const PROGRAM_NAME: &str = "TUI Craft";
pub const LEFT_HELP: &str = "TUI Craft - Use WASD to Move, IJKL to Look; Return to Exit";
pub const RIGHT_HELP: &str = "RF to Change Field of View";

/// Minimum gap between the left and right help texts.
const HELP_GAP: usize = 3;

/// Banner text for a terminal `width` columns wide, padded to exactly that width.
///
/// Narrow terminals get the program name only, medium ones the left help
/// text, and wide ones both help texts pushed to opposite edges.
pub fn banner(width: u16) -> String {
    let width = width as usize;
    let mut out = String::with_capacity(width);

    if width < LEFT_HELP.len() {
        out.extend(PROGRAM_NAME.chars().take(width));
    } else if width < LEFT_HELP.len() + RIGHT_HELP.len() + HELP_GAP {
        out.push_str(LEFT_HELP);
    } else {
        out.push_str(LEFT_HELP);
        let gap = width - LEFT_HELP.len() - RIGHT_HELP.len();
        out.extend(std::iter::repeat(' ').take(gap));
        out.push_str(RIGHT_HELP);
    }

    while out.len() < width {
        out.push(' ');
    }
    out
}
