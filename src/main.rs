mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use flappy_game::capabilities::{Silent, StaticSprites};
use flappy_game::compute::{Phase, Round};
use flappy_game::config::GameConfig;
use flappy_game::entities::Mode;

use display::{Frame, TerminalSounds};

/// Frames the headless simulation keeps running after the crash, so the
/// pipe-death animation can finish.
const SIM_SETTLE_TICKS: u64 = 120;

#[derive(Parser, Debug)]
#[command(name = "flappy_game")]
#[command(about = "Side-scrolling flapping game for the terminal", long_about = None)]
struct Args {
    /// TOML file with game tuning. Flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fly yourself instead of letting the auto-pilot flap.
    #[arg(long, default_value_t = false)]
    manual: bool,

    /// Crash straight away on pipe hits, skipping the absorb animation.
    #[arg(long, default_value_t = false)]
    no_pipe_death: bool,

    /// Frame rate cap.
    #[arg(long)]
    fps: Option<u32>,

    /// Seed for pipe placement. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Ring the terminal bell on impact.
    #[arg(long, default_value_t = false)]
    bell: bool,

    /// Run this many ticks headless with the auto-pilot and print the result.
    #[arg(long, value_name = "TICKS")]
    simulate: Option<u64>,
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GameConfig::default(),
        };
        if self.manual {
            config.auto_play = false;
        }
        if self.no_pipe_death {
            config.pipe_death_animation = false;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        config.validate().context("invalid command line overrides")?;
        Ok(config)
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

// ── Headless simulation ───────────────────────────────────────────────────────

fn simulate(config: GameConfig, rng: &mut StdRng, ticks: u64) {
    let sprites = StaticSprites;
    let mut sounds = Silent;
    let mut round = Round::new(config, &sprites, rng);
    round.start(&mut sounds);

    let mut elapsed = 0;
    let mut crashed_at = None;
    while elapsed < ticks {
        round.tick(rng, &sprites, &mut sounds);
        elapsed += 1;

        if round.phase() == Phase::Over && crashed_at.is_none() {
            crashed_at = Some(elapsed);
        }
        if let Some(at) = crashed_at {
            if round.player.mode == Mode::Crash && elapsed - at >= SIM_SETTLE_TICKS {
                break;
            }
        }
    }

    match crashed_at {
        Some(at) => println!(
            "crashed into {:?} after {} ticks, score {}",
            round.player.crash_cause, at, round.score
        ),
        None => println!("survived {} ticks, score {}", elapsed, round.score),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → restart.
fn game_loop<W: Write>(
    out: &mut W,
    round: &mut Round,
    rng: &mut StdRng,
    sounds: &mut TerminalSounds,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    let sprites = StaticSprites;
    let frame_time = Duration::from_secs(1) / round.config.fps;

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
                continue;
            };
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true);
                }
                KeyCode::Char('r') | KeyCode::Char('R') if round.phase() == Phase::Over => {
                    return Ok(false);
                }
                KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W')
                    if kind == KeyEventKind::Press =>
                {
                    round.flap(sounds);
                }
                _ => {}
            }
        }

        round.tick(rng, &sprites, sounds);

        let mut frame = Frame::default();
        round.draw(&mut frame, &sprites);
        display::render(out, &frame, round)?;
        sounds.flush(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; redirect it (2>flappy.log) when using RUST_LOG.
    env_logger::init();

    let args = Args::parse();
    let config = args.game_config()?;
    let mut rng = args.rng();

    if let Some(ticks) = args.simulate {
        simulate(config, &mut rng, ticks);
        return Ok(());
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, config, &mut rng, args.bell);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal game loop failed")
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: GameConfig,
    rng: &mut StdRng,
    bell: bool,
) -> std::io::Result<()> {
    let sprites = StaticSprites;
    let mut sounds = TerminalSounds::new(bell);
    let mut best = 0;

    loop {
        let mut round = Round::new(config.clone(), &sprites, rng);
        let quit = game_loop(out, &mut round, rng, &mut sounds, rx)?;

        best = best.max(round.score);
        info!("round finished: score {}, best {}", round.score, best);

        if quit {
            break;
        }
    }
    Ok(())
}
