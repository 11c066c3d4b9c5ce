use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use glam::Vec2;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line as TextLine,
    widgets::{
        canvas::{Canvas, Context, Line},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::{
    backend::{DrawCommand, DrawList, InputState},
    helpers::{centered_rect_with_percentage, pixel_size, row_for, to_canvas},
    player::Direction,
    render::HEADLINE_TEXT_SIZE,
    theme::ThemeColors,
};

pub const MIN_COLS: u16 = 60;
pub const MIN_ROWS: u16 = 20;

/// Without release events a key counts as held for this long after its
/// last press or auto-repeat.
const HOLD_WINDOW: Duration = Duration::from_millis(180);

/// Rows taken by a `PixelSize::Quadrant` headline.
const HEADLINE_ROWS: u16 = 4;

#[derive(Debug, Default, Clone, Copy)]
struct KeyHold {
    pressed: bool,
    last_seen: Option<Instant>,
}

impl KeyHold {
    fn press(&mut self, now: Instant) {
        self.pressed = true;
        self.last_seen = Some(now);
    }

    fn release(&mut self) {
        self.pressed = false;
        self.last_seen = None;
    }

    fn is_held(&self, reports_release: bool, now: Instant) -> bool {
        if reports_release {
            self.pressed
        } else {
            self.last_seen
                .is_some_and(|seen| now.saturating_duration_since(seen) < HOLD_WINDOW)
        }
    }
}

/// Turns crossterm key events into per-frame [`InputState`].
///
/// Terminals with keyboard enhancement report releases, so a key is held
/// from press to release. Elsewhere holds are inferred from auto-repeat.
#[derive(Debug)]
pub struct KeyTracker {
    reports_release: bool,
    up: KeyHold,
    down: KeyHold,
    quit: bool,
}

impl KeyTracker {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            up: KeyHold::default(),
            down: KeyHold::default(),
            quit: false,
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent, now: Instant) {
        let is_ctrl_c = key_event.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('C'));

        let direction = match key_event.code {
            _ if is_ctrl_c => None,
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
            _ => None,
        };

        match key_event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if is_ctrl_c || matches!(key_event.code, KeyCode::Esc | KeyCode::Char('q')) {
                    self.quit = true;
                }
                match direction {
                    Some(Direction::Up) => {
                        self.up.press(now);
                        if !self.reports_release {
                            self.down.release();
                        }
                    }
                    Some(Direction::Down) => {
                        self.down.press(now);
                        if !self.reports_release {
                            self.up.release();
                        }
                    }
                    None => {}
                }
            }
            KeyEventKind::Release => match direction {
                Some(Direction::Up) => self.up.release(),
                Some(Direction::Down) => self.down.release(),
                None => {}
            },
        }
    }

    /// Input for the frame starting at `now`. Clears the quit request.
    pub fn snapshot(&mut self, now: Instant) -> InputState {
        let up = self.up.is_held(self.reports_release, now);
        let down = self.down.is_held(self.reports_release, now);
        let held = match (up, down) {
            (true, false) => Some(Direction::Up),
            (false, true) => Some(Direction::Down),
            _ => None,
        };

        InputState {
            held,
            quit: std::mem::take(&mut self.quit),
        }
    }
}

/// Drain every pending terminal event without blocking.
pub fn poll_keys(tracker: &mut KeyTracker) -> io::Result<()> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key_event) = event::read()? {
            tracker.handle_key_event(key_event, Instant::now());
        }
    }
    Ok(())
}

pub fn fits(cols: u16, rows: u16) -> bool {
    cols >= MIN_COLS && rows >= MIN_ROWS
}

fn fill_rect(
    ctx: &mut Context,
    min: Vec2,
    size: Vec2,
    screen: Vec2,
    step: f64,
    color: Color,
) {
    let (x1, top) = to_canvas(min, screen);
    let (x2, bottom) = to_canvas(min + size, screen);
    let mut y = bottom;
    while y <= top {
        ctx.draw(&Line::new(x1, y, x2, y, color));
        y += step;
    }
    ctx.draw(&Line::new(x1, top, x2, top, color));
}

fn fill_circle(
    ctx: &mut Context,
    center: Vec2,
    radius: f32,
    screen: Vec2,
    step: f64,
    color: Color,
) {
    let (cx, cy) = to_canvas(center, screen);
    let r = radius as f64;
    let mut dy = 0.0;
    while dy <= r {
        let half = (r * r - dy * dy).sqrt();
        ctx.draw(&Line::new(cx - half, cy + dy, cx + half, cy + dy, color));
        ctx.draw(&Line::new(cx - half, cy - dy, cx + half, cy - dy, color));
        dy += step;
    }
}

/// Replay `scene` onto the terminal frame.
pub fn draw_scene(frame: &mut Frame, scene: &DrawList, screen: Vec2, colors: &ThemeColors) {
    let area = frame.area();
    let block = Block::default()
        .title(" turn.pong ")
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .style(Style::default().fg(colors.border).bg(colors.background))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (pixel_w, pixel_h) = pixel_size(screen, inner);
    let background = scene.background().unwrap_or(colors.background);

    let canvas = Canvas::default()
        .marker(Marker::HalfBlock)
        .background_color(background)
        .x_bounds([0.0, screen.x as f64])
        .y_bounds([0.0, screen.y as f64])
        .paint(|ctx| {
            for cmd in scene.commands() {
                match cmd {
                    DrawCommand::Rect { min, size, color } => {
                        fill_rect(ctx, *min, *size, screen, pixel_h, *color)
                    }
                    DrawCommand::Circle {
                        center,
                        radius,
                        color,
                    } => fill_circle(ctx, *center, *radius, screen, pixel_h, *color),
                    DrawCommand::Text {
                        at,
                        size,
                        text,
                        color,
                    } if *size < HEADLINE_TEXT_SIZE => {
                        let half_width = text.chars().count() as f64 * pixel_w / 2.0;
                        let (x, y) = to_canvas(*at, screen);
                        ctx.print(
                            x - half_width,
                            y,
                            TextLine::styled(text.clone(), Style::default().fg(*color)),
                        );
                    }
                    DrawCommand::Text { .. } => {}
                }
            }
        });
    frame.render_widget(canvas, inner);

    for cmd in scene.commands() {
        if let DrawCommand::Text {
            at,
            size,
            text,
            color,
        } = cmd
        {
            if *size < HEADLINE_TEXT_SIZE {
                continue;
            }
            let row = row_for(at.y, screen, inner);
            let banner = Rect::new(inner.x, row, inner.width, HEADLINE_ROWS).intersection(inner);
            let headline = BigText::builder()
                .pixel_size(PixelSize::Quadrant)
                .style(Style::default().fg(*color).bg(background))
                .lines(vec![TextLine::from(text.clone())])
                .alignment(Alignment::Center)
                .build();
            frame.render_widget(Clear, banner);
            frame.render_widget(headline, banner);
        }
    }
}

pub fn draw_resize_warning(frame: &mut Frame, colors: &ThemeColors) {
    let area = frame.area();
    let popup_area = centered_rect_with_percentage(60, 20, area.width, area.height);
    let popup = Paragraph::new(format!(
        "Terminal too small!\nPlease resize to at least {MIN_COLS}x{MIN_ROWS}."
    ))
    .block(
        Block::default()
            .title("Warning")
            .borders(Borders::ALL)
            .border_type(BorderType::Thick),
    )
    .style(Style::default().fg(colors.accent))
    .alignment(Alignment::Center);
    frame.render_widget(popup, popup_area);
}
