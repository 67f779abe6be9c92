mod common;

use flappy_game::autopilot::{gap_center, next_pair, should_flap};
use flappy_game::entities::{Mode, Pipes, Player};

use common::{pair, pipes_from, player, Recorder};

fn piloted(y: f32, vel_y: f32) -> Player {
    let mut p = player();
    p.set_mode(Mode::Normal, &mut Recorder::default());
    p.auto_play = true;
    p.y = y;
    p.vel_y = vel_y;
    p
}

// ── gap geometry ──────────────────────────────────────────────────────────────

#[test]
fn gap_center_is_midpoint_of_the_opening() {
    let (upper, lower) = pair(200.0, 100.0, 220.0);
    assert_eq!(gap_center(&upper, &lower), 160.0);
}

#[test]
fn next_pair_skips_pairs_already_behind_the_player() {
    let p = piloted(100.0, 0.0); // x = 57
    let pipes = pipes_from(vec![
        pair(0.0, 50.0, 170.0),   // trailing edge at 52
        pair(5.0, 60.0, 180.0),   // trailing edge exactly at 57
        pair(150.0, 70.0, 190.0), // ahead
    ]);
    let (upper, _) = next_pair(&p, &pipes).expect("a pair ahead");
    assert_eq!(upper.x, 150.0);
}

#[test]
fn next_pair_keeps_a_pair_the_player_is_inside() {
    let p = piloted(100.0, 0.0);
    let pipes = pipes_from(vec![pair(40.0, 50.0, 170.0), pair(200.0, 70.0, 190.0)]);
    let (upper, _) = next_pair(&p, &pipes).expect("a pair ahead");
    assert_eq!(upper.x, 40.0);
}

// ── should_flap ───────────────────────────────────────────────────────────────

#[test]
fn fast_descent_always_flaps() {
    let p = piloted(100.0, 9.0);
    for (top, bottom) in [(0.0, 120.0), (150.0, 270.0), (300.0, 420.0)] {
        let pipes = pipes_from(vec![pair(200.0, top, bottom)]);
        assert!(should_flap(&p, &pipes), "gap {}..{}", top, bottom);
    }
}

#[test]
fn rising_above_the_gap_does_not_flap() {
    // predicted_y = 50 + (-2 * 2) = 46 < 80
    let p = piloted(50.0, -2.0);
    let pipes = pipes_from(vec![pair(200.0, 20.0, 140.0)]);
    assert!(!should_flap(&p, &pipes));
}

#[test]
fn falling_below_the_gap_center_flaps() {
    // predicted_y = 150 + 2 * 2 = 154 > 80
    let p = piloted(150.0, 2.0);
    let pipes = pipes_from(vec![pair(200.0, 20.0, 140.0)]);
    assert!(should_flap(&p, &pipes));
}

#[test]
fn rising_below_the_gap_center_waits() {
    let p = piloted(150.0, -1.0);
    let pipes = pipes_from(vec![pair(200.0, 20.0, 140.0)]);
    assert!(!should_flap(&p, &pipes));
}

#[test]
fn no_pair_ahead_means_no_flap() {
    let p = piloted(100.0, 9.0);
    assert!(!should_flap(&p, &Pipes::default()));

    let behind = pipes_from(vec![pair(-100.0, 20.0, 140.0)]);
    assert!(!should_flap(&p, &behind));
}

#[test]
fn disabled_or_not_flying_never_flaps() {
    let pipes = pipes_from(vec![pair(200.0, 20.0, 140.0)]);

    let mut manual = piloted(300.0, 9.0);
    manual.auto_play = false;
    assert!(!should_flap(&manual, &pipes));

    let mut hovering = player();
    hovering.vel_y = 9.0;
    assert!(!should_flap(&hovering, &pipes));
}
