/// Collaborator interfaces injected into the core.
///
/// The core never owns audio, image or screen resources.  It asks a
/// `SpriteProvider` how big things are, fires `SoundEvent`s at a
/// `SoundSink`, and hands `DrawCommand`s to a `Surface`.

// ── Sound ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    /// Wing beat on flap and on entering flight.
    Wing,
    /// Impact with the floor or a pipe.
    Hit,
    /// Played after `Hit` when the player dies on a pipe.
    Die,
    /// A pipe pair was passed.
    Point,
}

/// Fire-and-forget sound trigger.  Implementations must not block.
pub trait SoundSink {
    fn play(&mut self, event: SoundEvent);
}

/// Sink that drops every event.  Used by headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _event: SoundEvent) {}
}

// ── Sprites ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    /// Player animation frame (0..PLAYER_FRAMES).
    Player(usize),
    PipeUpper,
    PipeLower,
    Base,
    ScaryFace,
    GameOver,
}

/// Number of distinct player frames (wings up, middle, down).
pub const PLAYER_FRAMES: usize = 3;

/// Answers the pixel size of a sprite.  Must be stable for a session.
pub trait SpriteProvider {
    fn size(&self, sprite: SpriteId) -> (u32, u32);
}

/// Sizes of the stock asset pack.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticSprites;

impl SpriteProvider for StaticSprites {
    fn size(&self, sprite: SpriteId) -> (u32, u32) {
        match sprite {
            SpriteId::Player(_) => (34, 24),
            SpriteId::PipeUpper | SpriteId::PipeLower => (52, 320),
            SpriteId::Base => (336, 112),
            SpriteId::ScaryFace => (200, 200),
            SpriteId::GameOver => (192, 42),
        }
    }
}

// ── Screen ────────────────────────────────────────────────────────────────────

/// One blit: a sprite stretched to `w`x`h` at (`x`, `y`), rotated by
/// `rotation` degrees (counter-clockwise, about its center) and drawn at
/// `alpha` opacity.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub sprite: SpriteId,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub rotation: f32,
    pub alpha: u8,
}

impl DrawCommand {
    /// Opaque, unrotated blit.
    pub fn opaque(sprite: SpriteId, x: f32, y: f32, w: f32, h: f32) -> Self {
        DrawCommand {
            sprite,
            x,
            y,
            w,
            h,
            rotation: 0.0,
            alpha: 255,
        }
    }
}

pub trait Surface {
    fn draw(&mut self, cmd: DrawCommand);
}

// ── Game over ─────────────────────────────────────────────────────────────────

/// Whoever shows the game-over effect.  Invoked once per crash.
pub trait GameOverNotifier {
    fn activate(&mut self);
}
