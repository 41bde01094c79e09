//! In-memory platform with scripted input and recorded draw calls.
//!
//! Lets whole frames run without a window: tests queue key presses, hold or
//! release keys, fix the frame delta and inspect what was drawn.

use rustc_hash::FxHashSet;

use super::{Clock, Color, Input, KeyCode, Renderer, Window};

/// A recorded draw primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rectangle {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        size: i32,
        color: Color,
    },
}

/// Scripted stand-in for a real window.
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    width: i32,
    height: i32,
    delta: f32,
    pending_presses: Vec<KeyCode>,
    keys_down: FxHashSet<KeyCode>,
    draw_calls: Vec<DrawCall>,
    borderless: bool,
    frames_left: Option<u32>,
}

impl HeadlessPlatform {
    /// Surface of `width`x`height` pixels with a 60 fps frame delta.
    pub fn new(width: i32, height: i32) -> Self {
        HeadlessPlatform {
            width,
            height,
            delta: 1.0 / 60.0,
            pending_presses: Vec::new(),
            keys_down: FxHashSet::default(),
            draw_calls: Vec::new(),
            borderless: false,
            frames_left: None,
        }
    }

    pub fn with_delta(mut self, seconds: f32) -> Self {
        self.delta = seconds;
        self
    }

    pub fn set_delta(&mut self, seconds: f32) {
        self.delta = seconds;
    }

    /// Press and immediately release `key` before the next poll.
    pub fn tap(&mut self, key: KeyCode) {
        self.pending_presses.push(key);
    }

    /// Press `key` and keep it down until [`release`](Self::release).
    pub fn hold(&mut self, key: KeyCode) {
        self.pending_presses.push(key);
        self.keys_down.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    /// Report "should close" once `frames` more frames have ended.
    pub fn close_after(&mut self, frames: u32) {
        self.frames_left = Some(frames);
    }

    pub fn is_borderless(&self) -> bool {
        self.borderless
    }

    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.draw_calls
    }

    /// Text strings drawn since the last clear, in draw order.
    pub fn drawn_texts(&self) -> Vec<&str> {
        self.draw_calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                DrawCall::Rectangle { .. } => None,
            })
            .collect()
    }

    pub fn clear_draw_calls(&mut self) {
        self.draw_calls.clear();
    }
}

impl Window for HeadlessPlatform {
    fn screen_width(&self) -> i32 {
        self.width
    }

    fn screen_height(&self) -> i32 {
        self.height
    }

    fn toggle_borderless(&mut self) {
        self.borderless = !self.borderless;
    }

    fn window_should_close(&self) -> bool {
        self.frames_left == Some(0)
    }
}

impl Input for HeadlessPlatform {
    fn poll_pressed_keys(&mut self) -> Vec<KeyCode> {
        std::mem::take(&mut self.pending_presses)
    }

    fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }
}

impl Clock for HeadlessPlatform {
    fn seconds_since_last_frame(&mut self) -> f32 {
        self.delta
    }
}

impl Renderer for HeadlessPlatform {
    fn begin_frame(&mut self, _clear: Color) {
        self.draw_calls.clear();
    }

    fn end_frame(&mut self) {
        if let Some(n) = self.frames_left.as_mut() {
            *n = n.saturating_sub(1);
        }
    }

    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.draw_calls.push(DrawCall::Rectangle {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color) {
        self.draw_calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }

    fn measure_text_width(&self, text: &str, size: i32) -> i32 {
        // Monospace approximation: half the font size per glyph.
        text.chars().count() as i32 * size / 2
    }
}
