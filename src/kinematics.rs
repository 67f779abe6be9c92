/// Per-tick motion of the player.
///
/// `Player::tick` advances the wing animation and then runs exactly one
/// integrator, picked by the current mode.  The game loop calls it once per
/// frame, before drawing.

use crate::autopilot;
use crate::capabilities::{DrawCommand, SoundSink, SpriteId, SpriteProvider, Surface};
use crate::entities::{CrashCause, Mode, Pipes, Player, Wings, FRAME_TICKS, WING_CYCLE};

/// Fraction of the remaining distance to the pipe covered per death tick.
const PIPE_DEATH_PULL: f32 = 0.1;
const PIPE_DEATH_STEP: u32 = 2;
const PIPE_DEATH_DONE: u32 = 100;

impl Player {
    pub fn tick(
        &mut self,
        pipes: &Pipes,
        sprites: &impl SpriteProvider,
        sounds: &mut impl SoundSink,
    ) {
        self.update_image(sprites);
        match self.mode {
            Mode::Shm => self.tick_shm(),
            Mode::Normal => self.tick_normal(pipes, sounds),
            Mode::Crash => self.tick_crash(),
            Mode::PipeDeath => self.tick_pipe_death(pipes, sprites, sounds),
        }
    }

    /// Emit this frame's blit.
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.draw(DrawCommand {
            sprite: SpriteId::Player(self.img_idx),
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
            rotation: self.rot,
            alpha: 255,
        });
    }

    fn update_image(&mut self, sprites: &impl SpriteProvider) {
        self.frame = self.frame.wrapping_add(1);
        if self.frame % FRAME_TICKS != 0 {
            return;
        }
        if let Wings::Flapping { step } = self.wings {
            self.img_idx = WING_CYCLE[step];
            self.wings = Wings::Flapping {
                step: (step + 1) % WING_CYCLE.len(),
            };
            let (w, h) = sprites.size(SpriteId::Player(self.img_idx));
            self.w = w as f32;
            self.h = h as f32;
        }
    }

    // ── Integrators ───────────────────────────────────────────────────────────

    fn tick_shm(&mut self) {
        // Bounce between the two speed limits
        if self.vel_y >= self.max_vel_y || self.vel_y <= self.min_vel_y {
            self.acc_y = -self.acc_y;
        }
        self.vel_y += self.acc_y;
        self.y += self.vel_y;
    }

    fn tick_normal(&mut self, pipes: &Pipes, sounds: &mut impl SoundSink) {
        if self.vel_y < self.max_vel_y && !self.flapped {
            self.vel_y += self.acc_y;
        }
        self.flapped = false;

        if autopilot::should_flap(self, pipes) {
            self.flap(sounds);
        }

        self.y = (self.y + self.vel_y).clamp(self.min_y, self.max_y);
        self.rotate();
    }

    fn tick_crash(&mut self) {
        if self.min_y <= self.y && self.y <= self.max_y {
            self.y = (self.y + self.vel_y).clamp(self.min_y, self.max_y);
            if self.crash_cause == Some(CrashCause::Obstacle) {
                self.x += self.vel_x;
            }
            // Lying flat on the ground does not spin
            if self.crash_cause != Some(CrashCause::Floor) {
                self.rotate();
            }
        }

        if self.vel_y < self.max_vel_y {
            self.vel_y += self.acc_y;
        }
    }

    fn tick_pipe_death(
        &mut self,
        pipes: &Pipes,
        sprites: &impl SpriteProvider,
        sounds: &mut impl SoundSink,
    ) {
        if self.pipe_death_progress >= PIPE_DEATH_DONE {
            self.set_mode(Mode::Crash, sounds);
            return;
        }

        let Some(pipe) = self.pipe_death_target.and_then(|target| pipes.get(target)) else {
            panic!(
                "pipe death without a valid target pipe: {:?}",
                self.pipe_death_target
            );
        };
        let target_x = pipe.x + pipe.w / 2.0;
        let target_y = pipe.y + pipe.h / 2.0;

        self.x += (target_x - self.x) * PIPE_DEATH_PULL;
        self.y += (target_y - self.y) * PIPE_DEATH_PULL;

        let scale = 1.0 - self.pipe_death_progress as f32 / PIPE_DEATH_DONE as f32;
        let (w, h) = sprites.size(SpriteId::Player(self.img_idx));
        self.w = (w as f32 * scale).trunc();
        self.h = (h as f32 * scale).trunc();

        self.pipe_death_progress += PIPE_DEATH_STEP;
    }

    fn rotate(&mut self) {
        self.rot = (self.rot + self.vel_rot).clamp(self.rot_min, self.rot_max);
    }
}
