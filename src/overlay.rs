/// The scary-face flash shown on game over.
///
/// A standalone timer envelope: fades in for 30 ticks, holds, fades out
/// after tick 90 and switches itself off after tick 120.

use crate::capabilities::{DrawCommand, GameOverNotifier, SpriteId, SpriteProvider, Surface};

const FADE_IN_UNTIL: u32 = 30;
const FADE_OUT_AFTER: u32 = 90;
const DONE_AFTER: u32 = 120;
const FADE_STEP: u8 = 10;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overlay {
    pub active: bool,
    pub counter: u32,
    pub alpha: u8,
}

impl Overlay {
    pub fn new() -> Overlay {
        Overlay::default()
    }

    /// Restart the envelope from transparent.
    pub fn activate(&mut self) {
        self.active = true;
        self.counter = 0;
        self.alpha = 0;
    }

    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        self.counter += 1;
        if self.counter < FADE_IN_UNTIL {
            self.alpha = self.alpha.saturating_add(FADE_STEP);
        } else if self.counter > FADE_OUT_AFTER {
            self.alpha = self.alpha.saturating_sub(FADE_STEP);
        }

        if self.counter > DONE_AFTER {
            self.active = false;
            self.counter = 0;
            self.alpha = 0;
        }
    }

    /// Blit the face centered on a `width`x`height` screen.
    pub fn draw(
        &self,
        surface: &mut impl Surface,
        sprites: &impl SpriteProvider,
        width: u32,
        height: u32,
    ) {
        if !self.active {
            return;
        }
        let (w, h) = sprites.size(SpriteId::ScaryFace);
        surface.draw(DrawCommand {
            alpha: self.alpha,
            ..DrawCommand::opaque(
                SpriteId::ScaryFace,
                (width.saturating_sub(w) / 2) as f32,
                (height.saturating_sub(h) / 2) as f32,
                w as f32,
                h as f32,
            )
        });
    }
}

impl GameOverNotifier for Overlay {
    fn activate(&mut self) {
        Overlay::activate(self);
    }
}
