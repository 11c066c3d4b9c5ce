//! What the game needs from the outside world: input, a place to draw and a
//! frame clock. The terminal implementation lives in `terminal.rs`.

use std::{
    collections::VecDeque,
    thread::sleep,
    time::{Duration, Instant},
};

use glam::Vec2;
use ratatui::style::Color;

use crate::player::Direction;

/// Input sampled once per frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub held: Option<Direction>,
    /// Esc, q or Ctrl+C was pressed this frame.
    pub quit: bool,
}

/// Drawing surface in virtual screen coordinates (origin top-left, y down).
pub trait Painter {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// `at` is the top centre of the text.
    fn text(&mut self, at: Vec2, size: f32, text: &str, color: Color);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        min: Vec2,
        size: Vec2,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        at: Vec2,
        size: f32,
        text: String,
        color: Color,
    },
}

/// One frame worth of draw calls, replayed by a backend.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    background: Option<Color>,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[cfg(test)]
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Painter for DrawList {
    fn clear(&mut self, color: Color) {
        self.background = Some(color);
        self.commands.clear();
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect { min, size, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn text(&mut self, at: Vec2, size: f32, text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            at,
            size,
            text: text.to_string(),
            color,
        });
    }
}

const FPS_SAMPLES: usize = 30;

/// Rolling average of recent frame times.
#[derive(Debug, Default)]
pub struct FpsMeter {
    samples: VecDeque<Duration>,
}

impl FpsMeter {
    pub fn record(&mut self, frame_time: Duration) {
        if self.samples.len() == FPS_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back(frame_time);
    }

    pub fn fps(&self) -> u32 {
        let total: Duration = self.samples.iter().sum();
        if total.is_zero() {
            return 0;
        }
        (self.samples.len() as f64 / total.as_secs_f64()).round() as u32
    }
}

/// Caps the loop at a target frame rate.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
    meter: FpsMeter,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / target_fps.max(1),
            last: Instant::now(),
            meter: FpsMeter::default(),
        }
    }

    /// Sleep out whatever is left of the current frame.
    pub fn tick(&mut self) {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame {
            sleep(self.frame - elapsed);
        }
        let now = Instant::now();
        self.meter.record(now - self.last);
        self.last = now;
    }

    /// Block the whole loop until `deadline`.
    pub fn block_until(&mut self, deadline: Instant) {
        let now = Instant::now();
        if deadline > now {
            sleep(deadline - now);
        }
        self.last = Instant::now();
    }

    pub fn fps(&self) -> u32 {
        self.meter.fps()
    }
}
