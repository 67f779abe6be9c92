/// Collision detection against the ground and the pipes, plus the scoring
/// predicate.

use log::info;

use crate::capabilities::GameOverNotifier;
use crate::entities::{CrashCause, Floor, Pipe, PipeHalf, PipeRef, Pipes, Player, Rect};

/// What the player ran into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    Floor,
    Obstacle(PipeRef),
}

impl Hit {
    pub fn cause(&self) -> CrashCause {
        match self {
            Hit::Floor => CrashCause::Floor,
            Hit::Obstacle(_) => CrashCause::Obstacle,
        }
    }
}

/// First collision of `player` in check order: floor, then every upper
/// pipe, then every lower pipe, each in spawn order.
pub fn detect(player: &Rect, floor: &Floor, pipes: &Pipes) -> Option<Hit> {
    if player.intersects(&floor.rect()) {
        return Some(Hit::Floor);
    }

    let halves = [(PipeHalf::Upper, &pipes.upper), (PipeHalf::Lower, &pipes.lower)];
    for (half, row) in halves {
        if let Some(pair) = row.iter().position(|pipe| player.intersects(&pipe.rect())) {
            return Some(Hit::Obstacle(PipeRef { pair, half }));
        }
    }

    None
}

impl Player {
    /// Check for a crash.  On a hit the player is flagged as crashed, the
    /// cause is recorded and `notifier` starts the game-over effect.  The
    /// caller decides which mode to switch to.
    pub fn collided(
        &mut self,
        pipes: &Pipes,
        floor: &Floor,
        notifier: &mut impl GameOverNotifier,
    ) -> Option<Hit> {
        let hit = detect(&self.rect(), floor, pipes)?;
        info!("player crashed into {:?} at ({:.1}, {:.1})", hit, self.x, self.y);
        self.crashed = true;
        self.crash_cause = Some(hit.cause());
        notifier.activate();
        Some(hit)
    }

    /// True on the one tick in which the player's center passes the pipe's
    /// center, given that the pipe moves `|vel_x|` pixels per tick.
    pub fn crossed(&self, pipe: &Pipe) -> bool {
        let pipe_cx = pipe.cx();
        let step = pipe.vel_x.abs();
        let cx = self.cx();
        pipe_cx <= cx && cx < pipe_cx + step
    }
}
