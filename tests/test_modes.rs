mod common;

use flappy_game::capabilities::SoundEvent;
use flappy_game::entities::{CrashCause, Mode, PipeHalf, PipeRef, Wings};

use common::{flying_player, player, Recorder};

// ── Construction ──────────────────────────────────────────────────────────────

#[test]
fn new_player_hovers_in_shm() {
    let p = player();
    assert_eq!(p.mode, Mode::Shm);
    assert_eq!((p.x, p.y), (57.0, 244.0));
    assert_eq!((p.w, p.h), (34.0, 24.0));
    assert_eq!(p.min_y, -48.0);
    assert_eq!(p.max_y, 386.0);
    assert_eq!(p.vel_y, 1.0);
    assert_eq!(p.acc_y, 0.5);
    assert!(p.auto_play);
    assert!(!p.crashed);
    assert_eq!(p.crash_cause, None);
}

// ── set_mode ──────────────────────────────────────────────────────────────────

#[test]
fn normal_resets_flight_values_and_flaps() {
    let mut p = player();
    let mut sounds = Recorder::default();
    p.set_mode(Mode::Normal, &mut sounds);

    assert_eq!(p.mode, Mode::Normal);
    assert_eq!(p.vel_y, -9.0);
    assert_eq!(p.acc_y, 1.0);
    assert_eq!(p.max_vel_y, 10.0);
    assert_eq!(p.min_vel_y, -8.0);
    assert_eq!(p.rot, 80.0);
    assert_eq!(p.vel_rot, -3.0);
    assert_eq!((p.rot_min, p.rot_max), (-90.0, 20.0));
    assert_eq!(p.flap_acc, -9.0);
    assert_eq!(sounds.events, vec![SoundEvent::Wing]);
}

#[test]
fn shm_resets_hover_values_silently() {
    let mut p = flying_player();
    let mut sounds = Recorder::default();
    p.set_mode(Mode::Shm, &mut sounds);

    assert_eq!(p.vel_y, 1.0);
    assert_eq!(p.acc_y, 0.5);
    assert_eq!((p.min_vel_y, p.max_vel_y), (-4.0, 4.0));
    assert_eq!((p.rot, p.rot_min, p.rot_max), (0.0, 0.0, 0.0));
    assert!(sounds.events.is_empty());
}

#[test]
fn crash_on_obstacle_plays_hit_and_die_once() {
    let mut p = flying_player();
    p.crash_cause = Some(CrashCause::Obstacle);
    let mut sounds = Recorder::default();
    p.set_mode(Mode::Crash, &mut sounds);

    assert_eq!(sounds.count(SoundEvent::Hit), 1);
    assert_eq!(sounds.count(SoundEvent::Die), 1);
    assert_eq!(sounds.events.len(), 2);
}

#[test]
fn crash_on_floor_plays_hit_only() {
    let mut p = flying_player();
    p.crash_cause = Some(CrashCause::Floor);
    let mut sounds = Recorder::default();
    p.set_mode(Mode::Crash, &mut sounds);

    assert_eq!(sounds.events, vec![SoundEvent::Hit]);
}

#[test]
fn crash_resets_fall_values_and_freezes_wings() {
    let mut p = flying_player();
    p.crash_cause = Some(CrashCause::Floor);
    p.set_mode(Mode::Crash, &mut Recorder::default());

    assert_eq!(p.acc_y, 2.0);
    assert_eq!(p.vel_y, 7.0);
    assert_eq!(p.max_vel_y, 15.0);
    assert_eq!(p.vel_rot, -8.0);
    assert_eq!(p.wings, Wings::Stopped);
}

#[test]
fn crash_carries_horizontal_velocity_once() {
    let mut p = flying_player();
    p.vel_x = 3.0;
    p.crash_cause = Some(CrashCause::Obstacle);
    p.set_mode(Mode::Crash, &mut Recorder::default());
    assert_eq!(p.x, 60.0);
}

#[test]
fn pipe_death_zeroes_motion_and_plays_hit_and_die() {
    let mut p = flying_player();
    p.vel_x = 2.0;
    p.pipe_death_progress = 40;
    let mut sounds = Recorder::default();
    let target = PipeRef { pair: 1, half: PipeHalf::Lower };
    p.enter_pipe_death(target, &mut sounds);

    assert_eq!(p.mode, Mode::PipeDeath);
    assert_eq!(p.pipe_death_target, Some(target));
    assert_eq!(p.pipe_death_progress, 0);
    assert_eq!((p.vel_x, p.vel_y, p.acc_y), (0.0, 0.0, 0.0));
    assert_eq!((p.rot, p.vel_rot), (0.0, 0.0));
    assert_eq!(p.wings, Wings::Stopped);
    assert_eq!(sounds.events, vec![SoundEvent::Hit, SoundEvent::Die]);
}

// ── flap ──────────────────────────────────────────────────────────────────────

#[test]
fn flap_sets_impulse_and_snaps_rotation() {
    let mut p = flying_player();
    p.vel_y = 6.0;
    p.rot = -40.0;
    let mut sounds = Recorder::default();
    p.flap(&mut sounds);

    assert_eq!(p.vel_y, -9.0);
    assert_eq!(p.rot, 80.0);
    assert!(p.flapped);
    assert_eq!(sounds.events, vec![SoundEvent::Wing]);
}

#[test]
fn flap_ignored_at_ceiling() {
    let mut p = flying_player();
    p.y = p.min_y;
    p.vel_y = 3.0;
    let mut sounds = Recorder::default();
    p.flap(&mut sounds);

    assert_eq!(p.vel_y, 3.0);
    assert!(!p.flapped);
    assert!(sounds.events.is_empty());
}
