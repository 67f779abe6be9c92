/// One round of the game: the player, the pipes that scroll past it, the
/// ground, the score and the game-over overlay.
///
/// The round plays the part of the pipe spawner/scroller and game loop
/// glue around the player core.  All randomness comes through the injected
/// `rng`, so a seeded RNG gives a fully deterministic round.

use log::{debug, info};
use rand::Rng;

use crate::capabilities::{DrawCommand, SoundEvent, SoundSink, SpriteId, SpriteProvider, Surface};
use crate::collision::Hit;
use crate::config::GameConfig;
use crate::entities::{Floor, Mode, Pipe, Pipes, Player};
use crate::overlay::Overlay;

/// Ground scroll per tick.  The ground moves a little slower than the pipes.
const FLOOR_VEL_X: f32 = -4.0;

/// Spawn the next pair once the free space after the last pipe exceeds
/// this many pipe widths.
const SPAWN_SPACING: f32 = 2.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Hovering on the welcome screen.
    Waiting,
    Playing,
    /// Crashed or being absorbed into a pipe.
    Over,
}

#[derive(Clone, Debug)]
pub struct Round {
    pub config: GameConfig,
    pub player: Player,
    pub pipes: Pipes,
    pub floor: Floor,
    pub overlay: Overlay,
    pub score: u32,
}

// ── Pipe spawner ──────────────────────────────────────────────────────────────

/// A new pair just off the right edge with a random gap height.
pub fn make_random_pipes(
    config: &GameConfig,
    sprites: &impl SpriteProvider,
    rng: &mut impl Rng,
) -> (Pipe, Pipe) {
    let base_y = config.viewport();
    let span = ((base_y * 0.6 - config.pipe_gap) as i32).max(1);
    let gap_y = (rng.gen_range(0..span) + (base_y * 0.2) as i32) as f32;

    let (w, h) = sprites.size(SpriteId::PipeUpper);
    let (w, h) = (w as f32, h as f32);
    let x = config.window_width as f32 + 10.0;

    let upper = Pipe {
        x,
        y: gap_y - h,
        w,
        h,
        vel_x: config.pipe_vel_x,
    };
    let lower = Pipe {
        y: gap_y + config.pipe_gap,
        ..upper.clone()
    };
    (upper, lower)
}

/// Two pairs waiting off-screen, three and six and a half pipe widths out.
pub fn spawn_initial_pipes(
    config: &GameConfig,
    sprites: &impl SpriteProvider,
    rng: &mut impl Rng,
) -> Pipes {
    let mut pipes = Pipes::default();

    let (mut upper_1, mut lower_1) = make_random_pipes(config, sprites, rng);
    upper_1.x = config.window_width as f32 + upper_1.w * 3.0;
    lower_1.x = upper_1.x;

    let (mut upper_2, mut lower_2) = make_random_pipes(config, sprites, rng);
    upper_2.x = upper_1.x + upper_1.w * 3.5;
    lower_2.x = upper_2.x;

    pipes.upper.extend([upper_1, upper_2]);
    pipes.lower.extend([lower_1, lower_2]);
    pipes
}

/// True when the last pair is far enough in to make room for another.
pub fn can_spawn_pipes(pipes: &Pipes, window_width: u32) -> bool {
    match pipes.upper.last() {
        None => true,
        Some(last) => window_width as f32 - (last.x + last.w) > last.w * SPAWN_SPACING,
    }
}

/// Drop pairs whose upper pipe has scrolled fully off the left edge.
pub fn remove_old_pipes(pipes: &mut Pipes) {
    let gone = pipes.upper.iter().take_while(|pipe| pipe.x < -pipe.w).count();
    if gone > 0 {
        debug!("despawning {} pipe pair(s)", gone);
        pipes.upper.drain(..gone);
        pipes.lower.drain(..gone.min(pipes.lower.len()));
    }
}

pub fn make_floor(config: &GameConfig, sprites: &impl SpriteProvider) -> Floor {
    let (w, h) = sprites.size(SpriteId::Base);
    let w = (w as f32).max(config.window_width as f32);
    Floor {
        x: 0.0,
        y: config.viewport(),
        w,
        h: h as f32,
        vel_x: FLOOR_VEL_X,
        x_extra: w - config.window_width as f32,
    }
}

// ── Round ─────────────────────────────────────────────────────────────────────

impl Round {
    pub fn new(config: GameConfig, sprites: &impl SpriteProvider, rng: &mut impl Rng) -> Round {
        let player = Player::new(&config, sprites);
        let pipes = spawn_initial_pipes(&config, sprites, rng);
        let floor = make_floor(&config, sprites);
        Round {
            config,
            player,
            pipes,
            floor,
            overlay: Overlay::new(),
            score: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.player.mode {
            Mode::Shm => Phase::Waiting,
            Mode::Normal => Phase::Playing,
            Mode::Crash | Mode::PipeDeath => Phase::Over,
        }
    }

    /// Leave the welcome screen.  No effect once the round has started.
    pub fn start(&mut self, sounds: &mut impl SoundSink) {
        if self.phase() == Phase::Waiting {
            info!("round started (auto-play: {})", self.player.auto_play);
            self.player.set_mode(Mode::Normal, sounds);
        }
    }

    /// Player input: starts the round when waiting, flaps while playing.
    pub fn flap(&mut self, sounds: &mut impl SoundSink) {
        match self.phase() {
            Phase::Waiting => self.start(sounds),
            Phase::Playing => self.player.flap(sounds),
            Phase::Over => {}
        }
    }

    pub fn tick(
        &mut self,
        rng: &mut impl Rng,
        sprites: &impl SpriteProvider,
        sounds: &mut impl SoundSink,
    ) {
        if self.phase() == Phase::Playing {
            match self.player.collided(&self.pipes, &self.floor, &mut self.overlay) {
                Some(hit) => self.crash(hit, sounds),
                None => self.score_crossings(sounds),
            }
        }

        // Everything but the player freezes once the round is over, which
        // also keeps the pipe-death target index valid.
        match self.phase() {
            Phase::Waiting => self.scroll_floor(),
            Phase::Playing => {
                self.scroll_floor();
                self.scroll_pipes(rng, sprites);
            }
            Phase::Over => {}
        }

        self.player.tick(&self.pipes, sprites, sounds);
        self.overlay.tick();
    }

    pub fn draw(&self, surface: &mut impl Surface, sprites: &impl SpriteProvider) {
        for (upper, lower) in self.pipes.pairs() {
            surface.draw(DrawCommand::opaque(
                SpriteId::PipeUpper,
                upper.x,
                upper.y,
                upper.w,
                upper.h,
            ));
            surface.draw(DrawCommand::opaque(
                SpriteId::PipeLower,
                lower.x,
                lower.y,
                lower.w,
                lower.h,
            ));
        }

        let floor = &self.floor;
        surface.draw(DrawCommand::opaque(SpriteId::Base, floor.x, floor.y, floor.w, floor.h));

        self.player.draw(surface);

        if self.phase() == Phase::Over {
            let (w, h) = sprites.size(SpriteId::GameOver);
            surface.draw(DrawCommand::opaque(
                SpriteId::GameOver,
                (self.config.window_width.saturating_sub(w) / 2) as f32,
                (self.config.window_height as f32 * 0.2).trunc(),
                w as f32,
                h as f32,
            ));
        }

        self.overlay
            .draw(surface, sprites, self.config.window_width, self.config.window_height);
    }

    fn crash(&mut self, hit: Hit, sounds: &mut impl SoundSink) {
        match hit {
            Hit::Obstacle(pipe) if self.config.pipe_death_animation => {
                self.player.enter_pipe_death(pipe, sounds);
            }
            _ => self.player.set_mode(Mode::Crash, sounds),
        }
        info!("round over with score {}", self.score);
    }

    fn score_crossings(&mut self, sounds: &mut impl SoundSink) {
        let passed = self
            .pipes
            .upper
            .iter()
            .filter(|pipe| self.player.crossed(pipe))
            .count() as u32;
        for _ in 0..passed {
            self.score += 1;
            sounds.play(SoundEvent::Point);
        }
    }

    fn scroll_floor(&mut self) {
        let floor = &mut self.floor;
        if floor.x_extra > 0.0 {
            floor.x = -((-floor.x - floor.vel_x) % floor.x_extra);
        }
    }

    fn scroll_pipes(&mut self, rng: &mut impl Rng, sprites: &impl SpriteProvider) {
        if can_spawn_pipes(&self.pipes, self.config.window_width) {
            let (upper, lower) = make_random_pipes(&self.config, sprites, rng);
            debug!("spawning pipe pair with gap at y={:.0}", upper.y + upper.h);
            self.pipes.upper.push(upper);
            self.pipes.lower.push(lower);
        }
        remove_old_pipes(&mut self.pipes);

        for pipe in self.pipes.upper.iter_mut().chain(self.pipes.lower.iter_mut()) {
            pipe.x += pipe.vel_x;
        }
    }
}
