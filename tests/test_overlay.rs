mod common;

use flappy_game::capabilities::{GameOverNotifier, SpriteId, StaticSprites};
use flappy_game::overlay::Overlay;

use common::Capture;

fn run(ticks: usize) -> Vec<(bool, u8)> {
    let mut overlay = Overlay::new();
    overlay.activate();
    (0..ticks)
        .map(|_| {
            overlay.tick();
            (overlay.active, overlay.alpha)
        })
        .collect()
}

#[test]
fn starts_inactive_and_ignores_ticks() {
    let mut overlay = Overlay::new();
    overlay.tick();
    assert_eq!(overlay, Overlay { active: false, counter: 0, alpha: 0 });
}

#[test]
fn fades_in_holds_and_fades_out() {
    let seq = run(130);
    // seq[k - 1] is the state after tick k

    for k in 1..=25 {
        assert_eq!(seq[k - 1], (true, (10 * k) as u8), "tick {}", k);
    }
    for k in 26..=90 {
        assert_eq!(seq[k - 1], (true, 255), "tick {}", k);
    }
    for k in 91..=115 {
        assert_eq!(seq[k - 1], (true, (255 - 10 * (k - 90)) as u8), "tick {}", k);
    }
    for k in 116..=120 {
        assert_eq!(seq[k - 1], (true, 0), "tick {}", k);
    }
    for k in 121..=130 {
        assert_eq!(seq[k - 1], (false, 0), "tick {}", k);
    }
}

#[test]
fn switches_off_and_resets_after_120_ticks() {
    let mut overlay = Overlay::new();
    overlay.activate();
    for _ in 0..121 {
        overlay.tick();
    }
    assert_eq!(overlay, Overlay { active: false, counter: 0, alpha: 0 });
}

#[test]
fn reactivation_restarts_the_envelope() {
    let mut overlay = Overlay::new();
    overlay.activate();
    for _ in 0..50 {
        overlay.tick();
    }
    GameOverNotifier::activate(&mut overlay);
    assert_eq!(overlay, Overlay { active: true, counter: 0, alpha: 0 });
    overlay.tick();
    assert_eq!(overlay.alpha, 10);
}

#[test]
fn draws_centered_only_while_active() {
    let mut overlay = Overlay::new();
    let mut surface = Capture::default();
    overlay.draw(&mut surface, &StaticSprites, 288, 512);
    assert!(surface.commands.is_empty());

    overlay.activate();
    for _ in 0..5 {
        overlay.tick();
    }
    overlay.draw(&mut surface, &StaticSprites, 288, 512);
    assert_eq!(surface.commands.len(), 1);
    let cmd = &surface.commands[0];
    assert_eq!(cmd.sprite, SpriteId::ScaryFace);
    assert_eq!((cmd.x, cmd.y), (44.0, 156.0));
    assert_eq!((cmd.w, cmd.h), (200.0, 200.0));
    assert_eq!(cmd.alpha, 50);
}
