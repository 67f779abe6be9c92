/// Greedy auto-pilot.
///
/// Looks only at the next gap and the player's speed, two ticks ahead.  It
/// never plans past the gap in front of it.

use crate::entities::{Mode, Pipe, Pipes, Player};

/// Ticks of lookahead used to predict the player's height.
const LOOKAHEAD_TICKS: f32 = 2.0;

/// Falling faster than this always triggers a flap.
const MAX_SAFE_DESCENT: f32 = 8.0;

/// First pair in spawn order whose trailing edge is still ahead of the
/// player's leading edge.
pub fn next_pair<'a>(player: &Player, pipes: &'a Pipes) -> Option<(&'a Pipe, &'a Pipe)> {
    pipes
        .pairs()
        .find(|(upper, _)| upper.x + upper.w > player.x)
}

/// Midpoint between the upper pipe's bottom edge and the lower pipe's top edge.
pub fn gap_center(upper: &Pipe, lower: &Pipe) -> f32 {
    let gap_top = upper.y + upper.h;
    gap_top + (lower.y - gap_top) / 2.0
}

pub fn should_flap(player: &Player, pipes: &Pipes) -> bool {
    if !player.auto_play || player.mode != Mode::Normal {
        return false;
    }

    let Some((upper, lower)) = next_pair(player, pipes) else {
        return false;
    };

    let predicted_y = player.y + player.vel_y * LOOKAHEAD_TICKS;
    let falling = player.vel_y > 0.0;

    (predicted_y > gap_center(upper, lower) && falling) || player.vel_y > MAX_SAFE_DESCENT
}
