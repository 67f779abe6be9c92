#![allow(dead_code)]

use flappy_game::capabilities::{DrawCommand, SoundEvent, SoundSink, StaticSprites, Surface};
use flappy_game::config::GameConfig;
use flappy_game::entities::{Mode, Pipe, Pipes, Player};

/// Sound sink that remembers every trigger.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<SoundEvent>,
}

impl Recorder {
    pub fn count(&self, event: SoundEvent) -> usize {
        self.events.iter().filter(|&&e| e == event).count()
    }
}

impl SoundSink for Recorder {
    fn play(&mut self, event: SoundEvent) {
        self.events.push(event);
    }
}

/// Surface that keeps the draw commands of a frame.
#[derive(Debug, Default)]
pub struct Capture {
    pub commands: Vec<DrawCommand>,
}

impl Surface for Capture {
    fn draw(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}

pub fn pipe(x: f32, y: f32) -> Pipe {
    Pipe {
        x,
        y,
        w: 52.0,
        h: 320.0,
        vel_x: -5.0,
    }
}

/// A pair at `x` whose gap spans `gap_top..gap_bottom`.
pub fn pair(x: f32, gap_top: f32, gap_bottom: f32) -> (Pipe, Pipe) {
    (pipe(x, gap_top - 320.0), pipe(x, gap_bottom))
}

pub fn pipes_from(pairs: Vec<(Pipe, Pipe)>) -> Pipes {
    let (upper, lower) = pairs.into_iter().unzip();
    Pipes { upper, lower }
}

/// Player as built for the default 288x512 window: 34x24 at (57, 244),
/// y bounded to [-48, 386].
pub fn player() -> Player {
    Player::new(&GameConfig::default(), &StaticSprites)
}

/// Player in `Normal` mode with the auto-pilot switched off.
pub fn flying_player() -> Player {
    let mut p = player();
    p.auto_play = false;
    p.set_mode(Mode::Normal, &mut Recorder::default());
    p
}
