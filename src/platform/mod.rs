//! Host collaborators consumed by the simulation core.
//!
//! The core never talks to a window, keyboard or GPU directly. It goes
//! through four narrow traits bundled as [`Platform`]:
//! - [`Window`] – surface size, borderless toggle and the loop exit condition
//! - [`Input`] – key codes pressed since the last poll, and held-key checks
//! - [`Clock`] – seconds elapsed since the previous frame
//! - [`Renderer`] – rectangles and text at pixel coordinates
//!
//! Implementations:
//! - [`headless::HeadlessPlatform`] – in-memory, scripted; used by tests
//! - `raylib::RaylibPlatform` – real window, behind the `raylib` feature

pub mod headless;
#[cfg(feature = "raylib")]
pub mod raylib;

/// Raw keyboard key code.
///
/// Values follow raylib's `KeyboardKey` numbering so a raylib backend can
/// pass codes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub i32);

impl KeyCode {
    pub const SPACE: KeyCode = KeyCode(32);
    pub const A: KeyCode = KeyCode(65);
    pub const D: KeyCode = KeyCode(68);
    pub const S: KeyCode = KeyCode(83);
    pub const W: KeyCode = KeyCode(87);
    pub const RIGHT: KeyCode = KeyCode(262);
    pub const LEFT: KeyCode = KeyCode(263);
    pub const DOWN: KeyCode = KeyCode(264);
    pub const UP: KeyCode = KeyCode(265);
    pub const F1: KeyCode = KeyCode(290);
    pub const F10: KeyCode = KeyCode(299);
    pub const F11: KeyCode = KeyCode(300);
}

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const GREEN: Color = Color::new(0, 228, 48, 255);
    pub const RED: Color = Color::new(230, 41, 55, 255);
    pub const ORANGE: Color = Color::new(255, 161, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Build from a packed `0xRRGGBBAA` value.
    pub const fn from_hex(rgba: u32) -> Self {
        Color {
            r: (rgba >> 24) as u8,
            g: (rgba >> 16) as u8,
            b: (rgba >> 8) as u8,
            a: rgba as u8,
        }
    }
}

/// Window/surface provider.
pub trait Window {
    fn screen_width(&self) -> i32;
    fn screen_height(&self) -> i32;
    fn toggle_borderless(&mut self);
    /// Exit condition of the host loop.
    fn window_should_close(&self) -> bool;
}

/// Keyboard input capture.
pub trait Input {
    /// Key codes pressed since the previous call, in press order. Drains.
    fn poll_pressed_keys(&mut self) -> Vec<KeyCode>;
    fn is_key_down(&self, key: KeyCode) -> bool;
}

/// Frame clock.
pub trait Clock {
    /// Monotonic seconds since the previous frame.
    fn seconds_since_last_frame(&mut self) -> f32;
}

/// Pixel-level drawing primitives.
pub trait Renderer {
    /// Called once before any system runs in a frame.
    fn begin_frame(&mut self, _clear: Color) {}
    /// Called once after DrawUI.
    fn end_frame(&mut self) {}
    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color);
    fn measure_text_width(&self, text: &str, size: i32) -> i32;
}

/// Everything the core needs from its host.
pub trait Platform: Window + Input + Clock + Renderer {}

impl<T: Window + Input + Clock + Renderer> Platform for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_unpacks_channels() {
        let c = Color::from_hex(0x2E2E2EFF);
        assert_eq!(c, Color::new(0x2E, 0x2E, 0x2E, 0xFF));
    }
}
