/// Rendering layer: all terminal I/O lives here.
///
/// The round draws into a `Frame` (the `Surface` the core sees), and
/// `render` translates the collected draw commands from world pixels into
/// terminal cells.  No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use log::debug;

use flappy_game::capabilities::{DrawCommand, SoundEvent, SoundSink, SpriteId, Surface};
use flappy_game::compute::{Phase, Round};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PIPE: Color = Color::Green;
const C_PIPE_CAP: Color = Color::DarkGreen;
const C_GRASS: Color = Color::Green;
const C_DIRT: Color = Color::DarkYellow;
const C_PLAYER: Color = Color::Yellow;
const C_HUD_SCORE: Color = Color::White;
const C_GAME_OVER: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

const SCARY_FACE: [&str; 5] = [
    r"  \\     //  ",
    r"  (@)   (@)  ",
    r"      ^      ",
    r"   .-----.   ",
    r"   ' ' ' '   ",
];

// ── Collaborators ─────────────────────────────────────────────────────────────

/// Draw commands collected during one frame.
#[derive(Debug, Default)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Surface for Frame {
    fn draw(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}

/// A terminal has no mixer, so sounds are logged and a hit can ring the bell.
#[derive(Debug, Default)]
pub struct TerminalSounds {
    pub bell: bool,
    ring: bool,
}

impl TerminalSounds {
    pub fn new(bell: bool) -> Self {
        TerminalSounds { bell, ring: false }
    }

    /// Write a pending bell, if any.
    pub fn flush<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        if self.ring {
            self.ring = false;
            out.write_all(b"\x07")?;
            out.flush()?;
        }
        Ok(())
    }
}

impl SoundSink for TerminalSounds {
    fn play(&mut self, event: SoundEvent) {
        debug!("sound {:?}", event);
        if self.bell && event == SoundEvent::Hit {
            self.ring = true;
        }
    }
}

// ── World → terminal mapping ──────────────────────────────────────────────────

/// Scales world pixels onto the terminal, keeping the bottom row for hints.
struct Viewport {
    cols: u16,
    rows: u16,
    sx: f32,
    sy: f32,
}

impl Viewport {
    fn new(cols: u16, rows: u16, world_w: u32, world_h: u32) -> Self {
        let play_rows = rows.saturating_sub(1);
        Viewport {
            cols,
            rows: play_rows,
            sx: cols as f32 / world_w as f32,
            sy: play_rows as f32 / world_h as f32,
        }
    }

    fn col(&self, x: f32) -> i32 {
        (x * self.sx).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y * self.sy).floor() as i32
    }

    fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && col < self.cols as i32 && row < self.rows as i32
    }

    /// Clipped cell span of a world box: (col0, col1, row0, row1), exclusive ends.
    fn span(&self, cmd: &DrawCommand) -> (i32, i32, i32, i32) {
        let (left, top) = (self.col(cmd.x), self.row(cmd.y));
        let c1 = self.col(cmd.x + cmd.w).max(left + 1).min(self.cols as i32);
        let r1 = self.row(cmd.y + cmd.h).max(top + 1).min(self.rows as i32);
        (left.max(0), c1, top.max(0), r1)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, frame: &Frame, round: &Round) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(cols, rows, round.config.window_width, round.config.window_height);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for cmd in &frame.commands {
        match cmd.sprite {
            SpriteId::PipeUpper => draw_pipe(out, &view, cmd, true)?,
            SpriteId::PipeLower => draw_pipe(out, &view, cmd, false)?,
            SpriteId::Base => draw_floor(out, &view, cmd)?,
            SpriteId::Player(idx) => draw_player(out, &view, cmd, idx)?,
            SpriteId::GameOver => draw_game_over(out, &view, cmd)?,
            SpriteId::ScaryFace => draw_scary_face(out, &view, cmd)?,
        }
    }

    draw_hud(out, cols, round)?;
    draw_controls_hint(out, rows, round)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn fill<W: Write>(
    out: &mut W,
    (c0, c1, r0, r1): (i32, i32, i32, i32),
    glyph: char,
) -> std::io::Result<()> {
    if c0 >= c1 {
        return Ok(());
    }
    let line: String = std::iter::repeat(glyph).take((c1 - c0) as usize).collect();
    for row in r0..r1 {
        out.queue(cursor::MoveTo(c0 as u16, row as u16))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

fn draw_pipe<W: Write>(
    out: &mut W,
    view: &Viewport,
    cmd: &DrawCommand,
    upper: bool,
) -> std::io::Result<()> {
    let (c0, c1, r0, r1) = view.span(cmd);
    if c0 >= c1 || r0 >= r1 {
        return Ok(());
    }

    out.queue(style::SetForegroundColor(C_PIPE))?;
    fill(out, (c0, c1, r0, r1), '█')?;

    // The cap sits on the edge facing the gap
    let cap_row = if upper { r1 - 1 } else { r0 };
    out.queue(style::SetForegroundColor(C_PIPE_CAP))?;
    fill(out, (c0, c1, cap_row, cap_row + 1), '▓')?;
    Ok(())
}

fn draw_floor<W: Write>(out: &mut W, view: &Viewport, cmd: &DrawCommand) -> std::io::Result<()> {
    let top = view.row(cmd.y).max(0);
    if top >= view.rows as i32 {
        return Ok(());
    }

    // Grass stripe scrolls with the floor offset
    let shift = (-cmd.x).max(0.0) as usize;
    let grass: String = (0..view.cols as usize)
        .map(|c| if (c + shift) % 4 < 2 { '▀' } else { '▔' })
        .collect();
    out.queue(cursor::MoveTo(0, top as u16))?;
    out.queue(style::SetForegroundColor(C_GRASS))?;
    out.queue(Print(&grass))?;

    out.queue(style::SetForegroundColor(C_DIRT))?;
    fill(out, (0, view.cols as i32, top + 1, view.rows as i32), '░')
}

fn draw_player<W: Write>(
    out: &mut W,
    view: &Viewport,
    cmd: &DrawCommand,
    frame_idx: usize,
) -> std::io::Result<()> {
    if cmd.w < 1.0 || cmd.h < 1.0 {
        return Ok(());
    }
    let col = view.col(cmd.x + cmd.w / 2.0);
    let row = view.row(cmd.y + cmd.h / 2.0);
    if !view.contains(col, row) {
        return Ok(());
    }

    // Shrinking into a pipe
    let glyph = if cmd.w < 17.0 {
        "·"
    } else if cmd.rotation <= -45.0 {
        "▼"
    } else {
        match frame_idx {
            0 => "ᵔ●",
            1 => "-●",
            _ => "ᵕ●",
        }
    };
    out.queue(cursor::MoveTo(col.max(0) as u16, row as u16))?;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    view: &Viewport,
    cmd: &DrawCommand,
) -> std::io::Result<()> {
    let banner = "╔═══════════╗";
    let text = "║ GAME OVER ║";
    let bottom = "╚═══════════╝";
    let cx = view.col(cmd.x + cmd.w / 2.0);
    let row = view.row(cmd.y).max(0);
    let col = (cx - banner.chars().count() as i32 / 2).max(0) as u16;

    out.queue(style::SetForegroundColor(C_GAME_OVER))?;
    for (i, line) in [banner, text, bottom].iter().enumerate() {
        let r = row + i as i32;
        if r < view.rows as i32 {
            out.queue(cursor::MoveTo(col, r as u16))?;
            out.queue(Print(*line))?;
        }
    }
    Ok(())
}

fn draw_scary_face<W: Write>(
    out: &mut W,
    view: &Viewport,
    cmd: &DrawCommand,
) -> std::io::Result<()> {
    // Three brightness steps stand in for real alpha blending
    let color = match cmd.alpha {
        0 => return Ok(()),
        1..=84 => Color::DarkGrey,
        85..=169 => Color::DarkRed,
        _ => Color::Red,
    };
    let cx = view.col(cmd.x + cmd.w / 2.0);
    let cy = view.row(cmd.y + cmd.h / 2.0);
    let top = (cy - SCARY_FACE.len() as i32 / 2).max(0);

    out.queue(style::SetForegroundColor(color))?;
    for (i, line) in SCARY_FACE.iter().enumerate() {
        let r = top + i as i32;
        if r >= view.rows as i32 {
            break;
        }
        let col = (cx - line.chars().count() as i32 / 2).max(0) as u16;
        out.queue(cursor::MoveTo(col, r as u16))?;
        out.queue(Print(*line))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, cols: u16, round: &Round) -> std::io::Result<()> {
    if round.phase() == Phase::Waiting {
        return Ok(());
    }
    let score = format!("{}", round.score);
    out.queue(cursor::MoveTo(
        (cols / 2).saturating_sub(score.chars().count() as u16 / 2),
        0,
    ))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&score))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, rows: u16, round: &Round) -> std::io::Result<()> {
    let pilot = if round.player.auto_play { "AUTO" } else { "MANUAL" };
    let hint = match round.phase() {
        Phase::Waiting => format!("SPACE : Start   Q : Quit   [{}]", pilot),
        Phase::Playing => format!("SPACE / ↑ : Flap   Q : Quit   [{}]", pilot),
        Phase::Over => format!("R : Play Again   Q : Quit   Score: {}", round.score),
    };
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
