/// All game entity types: plain data plus a few geometry helpers.
///
/// Behaviour lives elsewhere: `modes` and `kinematics` drive the `Player`,
/// `collision` and `autopilot` read it, and `compute` owns the round.

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in screen pixels, y growing downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn cx(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn cy(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Strict overlap.  Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

// ── Modes ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Idle hover on the welcome screen.
    Shm,
    /// Active flight.
    Normal,
    /// Falling after a hit.  Terminal for the round.
    Crash,
    /// Being sucked into the pipe that was hit.
    PipeDeath,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrashCause {
    Floor,
    Obstacle,
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipeHalf {
    Upper,
    Lower,
}

/// Non-owning handle to one pipe inside a `Pipes` collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipeRef {
    pub pair: usize,
    pub half: PipeHalf,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pipe {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Horizontal scroll per tick (negative = leftward).
    pub vel_x: f32,
}

impl Pipe {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub fn cx(&self) -> f32 {
        self.x + self.w / 2.0
    }
}

/// Upper and lower pipes in spawn order; index `i` of both is pair `i`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pipes {
    pub upper: Vec<Pipe>,
    pub lower: Vec<Pipe>,
}

impl Pipes {
    pub fn get(&self, pipe: PipeRef) -> Option<&Pipe> {
        match pipe.half {
            PipeHalf::Upper => self.upper.get(pipe.pair),
            PipeHalf::Lower => self.lower.get(pipe.pair),
        }
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&Pipe, &Pipe)> {
        self.upper.iter().zip(self.lower.iter())
    }

    pub fn len(&self) -> usize {
        self.upper.len().min(self.lower.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Ground ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Floor {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vel_x: f32,
    /// How far the texture may shift before it wraps around.
    pub x_extra: f32,
}

impl Floor {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Wing animation order, indexes into the player frames.
pub const WING_CYCLE: [usize; 4] = [0, 1, 2, 1];

/// Ticks between two animation frames.
pub const FRAME_TICKS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wings {
    /// Cycling through `WING_CYCLE`; `step` is the next position to show.
    Flapping { step: usize },
    /// Frozen on the current frame.
    Stopped,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub min_y: f32,
    pub max_y: f32,

    pub vel_x: f32,
    pub vel_y: f32,
    /// Max descend speed.
    pub max_vel_y: f32,
    /// Max ascend speed.
    pub min_vel_y: f32,
    pub acc_y: f32,

    pub rot: f32,
    pub vel_rot: f32,
    pub rot_min: f32,
    pub rot_max: f32,

    /// Vertical speed set by a flap.
    pub flap_acc: f32,
    /// A flap happened since the last `Normal` tick.
    pub flapped: bool,

    pub mode: Mode,
    pub crashed: bool,
    pub crash_cause: Option<CrashCause>,
    pub auto_play: bool,

    /// Ticks since creation, drives the wing animation.
    pub frame: u32,
    /// Current player frame shown.
    pub img_idx: usize,
    pub wings: Wings,

    /// 0..=100, advanced by 2 per `PipeDeath` tick.
    pub pipe_death_progress: u32,
    /// Pipe being entered.  Only meaningful in `PipeDeath`.
    pub pipe_death_target: Option<PipeRef>,
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub fn cx(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn cy(&self) -> f32 {
        self.y + self.h / 2.0
    }
}
