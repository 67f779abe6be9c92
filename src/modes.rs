/// Player construction and the mode state machine.
///
/// `set_mode` is the only place that changes `Player::mode`.  Each mode
/// gets its own reset of the motion parameters plus a fixed set of sound
/// triggers.

use log::{debug, trace};

use crate::capabilities::{SoundEvent, SoundSink, SpriteId, SpriteProvider};
use crate::config::GameConfig;
use crate::entities::{CrashCause, Mode, PipeRef, Player, Wings};

/// Rotation the player snaps to on every flap.
pub const FLAP_ROTATION: f32 = 80.0;

impl Player {
    /// A fresh player hovering in the welcome screen.
    pub fn new(config: &GameConfig, sprites: &impl SpriteProvider) -> Player {
        let (w, h) = sprites.size(SpriteId::Player(0));
        let (w, h) = (w as f32, h as f32);
        let mut player = Player {
            x: (config.window_width as f32 * 0.2).trunc(),
            y: ((config.window_height as f32 - h) / 2.0).trunc(),
            w,
            h,
            min_y: -2.0 * h,
            max_y: config.viewport() - h * 0.75,
            vel_x: 0.0,
            vel_y: 0.0,
            max_vel_y: 0.0,
            min_vel_y: 0.0,
            acc_y: 0.0,
            rot: 0.0,
            vel_rot: 0.0,
            rot_min: 0.0,
            rot_max: 0.0,
            flap_acc: 0.0,
            flapped: false,
            mode: Mode::Shm,
            crashed: false,
            crash_cause: None,
            auto_play: config.auto_play,
            frame: 0,
            img_idx: 0,
            wings: Wings::Flapping { step: 0 },
            pipe_death_progress: 0,
            pipe_death_target: None,
        };
        player.reset_vals_shm();
        player
    }

    pub fn set_mode(&mut self, mode: Mode, sounds: &mut impl SoundSink) {
        debug!("player mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        match mode {
            Mode::Normal => {
                self.reset_vals_normal();
                sounds.play(SoundEvent::Wing);
            }
            Mode::Shm => self.reset_vals_shm(),
            Mode::Crash => {
                self.stop_wings();
                sounds.play(SoundEvent::Hit);
                if self.crash_cause == Some(CrashCause::Obstacle) {
                    sounds.play(SoundEvent::Die);
                }
                self.reset_vals_crash();
            }
            Mode::PipeDeath => {
                self.stop_wings();
                sounds.play(SoundEvent::Hit);
                sounds.play(SoundEvent::Die);
                self.reset_vals_pipe_death();
            }
        }
    }

    /// Remember the pipe that was hit and start the absorb animation.
    pub fn enter_pipe_death(&mut self, target: PipeRef, sounds: &mut impl SoundSink) {
        self.pipe_death_target = Some(target);
        self.set_mode(Mode::PipeDeath, sounds);
    }

    /// Upward impulse.  Ignored once the player is above the ceiling.
    pub fn flap(&mut self, sounds: &mut impl SoundSink) {
        if self.y > self.min_y {
            trace!("flap at y={:.1} vel_y={:.1}", self.y, self.vel_y);
            self.vel_y = self.flap_acc;
            self.flapped = true;
            self.rot = FLAP_ROTATION;
            sounds.play(SoundEvent::Wing);
        }
    }

    /// Freeze the animation on the frame currently shown.
    pub fn stop_wings(&mut self) {
        self.wings = Wings::Stopped;
    }

    // ── Per-mode resets ───────────────────────────────────────────────────────

    fn reset_vals_normal(&mut self) {
        self.vel_x = 0.0;
        self.vel_y = -9.0;
        self.max_vel_y = 10.0;
        self.min_vel_y = -8.0;
        self.acc_y = 1.0;

        self.rot = FLAP_ROTATION;
        self.vel_rot = -3.0;
        self.rot_min = -90.0;
        self.rot_max = 20.0;

        self.flap_acc = -9.0;
        self.flapped = false;
    }

    fn reset_vals_shm(&mut self) {
        self.vel_y = 1.0;
        self.max_vel_y = 4.0;
        self.min_vel_y = -4.0;
        self.acc_y = 0.5;

        self.rot = 0.0;
        self.vel_rot = 0.0;
        self.rot_min = 0.0;
        self.rot_max = 0.0;

        self.flap_acc = 0.0;
        self.flapped = false;
    }

    fn reset_vals_crash(&mut self) {
        self.acc_y = 2.0;
        self.vel_y = 7.0;
        self.max_vel_y = 15.0;
        self.vel_rot = -8.0;
        // Carry the horizontal motion from the moment of impact
        self.x += self.vel_x;
    }

    fn reset_vals_pipe_death(&mut self) {
        self.vel_x = 0.0;
        self.vel_y = 0.0;
        self.acc_y = 0.0;
        self.vel_rot = 0.0;
        self.rot = 0.0;
        self.pipe_death_progress = 0;
    }
}
