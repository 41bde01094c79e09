//! Raylib-backed platform.
//!
//! Owns the raylib window. Drawing goes straight through `raylib::ffi`
//! between `BeginDrawing`/`EndDrawing`, so the draw callbacks can be plain
//! functions over `&mut dyn Platform` instead of borrowing a draw handle.

use std::ffi::CString;

use log::{info, warn};
use ::raylib::ffi;

use super::{Clock, Color, Input, KeyCode, Renderer, Window};
use crate::resources::gameconfig::GameConfig;

const WINDOW_TITLE: &str = "Mondo Snake";

impl From<Color> for ffi::Color {
    fn from(c: Color) -> Self {
        ffi::Color {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Real window, keyboard and frame clock.
pub struct RaylibPlatform {
    rl: ::raylib::RaylibHandle,
    _thread: ::raylib::RaylibThread,
}

impl RaylibPlatform {
    /// Open the window described by `config`.
    pub fn new(config: &GameConfig) -> Self {
        let (mut rl, thread) = ::raylib::init()
            .size(config.window_width as i32, config.window_height as i32)
            .title(WINDOW_TITLE)
            .build();
        rl.set_target_fps(config.target_fps);
        // ESC must not close the game
        rl.set_exit_key(None);
        info!(
            "Window opened: {}x{} @ {} fps",
            rl.get_screen_width(),
            rl.get_screen_height(),
            config.target_fps
        );
        RaylibPlatform {
            rl,
            _thread: thread,
        }
    }
}

impl Window for RaylibPlatform {
    fn screen_width(&self) -> i32 {
        self.rl.get_screen_width()
    }

    fn screen_height(&self) -> i32 {
        self.rl.get_screen_height()
    }

    fn toggle_borderless(&mut self) {
        unsafe { ffi::ToggleBorderlessWindowed() }
    }

    fn window_should_close(&self) -> bool {
        self.rl.window_should_close()
    }
}

impl Input for RaylibPlatform {
    fn poll_pressed_keys(&mut self) -> Vec<KeyCode> {
        let mut keys = Vec::new();
        loop {
            let key = unsafe { ffi::GetKeyPressed() };
            if key == 0 {
                break;
            }
            keys.push(KeyCode(key));
        }
        keys
    }

    fn is_key_down(&self, key: KeyCode) -> bool {
        unsafe { ffi::IsKeyDown(key.0) }
    }
}

impl Clock for RaylibPlatform {
    fn seconds_since_last_frame(&mut self) -> f32 {
        self.rl.get_frame_time()
    }
}

impl Renderer for RaylibPlatform {
    fn begin_frame(&mut self, clear: Color) {
        unsafe {
            ffi::BeginDrawing();
            ffi::ClearBackground(clear.into());
        }
    }

    fn end_frame(&mut self) {
        unsafe { ffi::EndDrawing() }
    }

    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        unsafe { ffi::DrawRectangle(x, y, width, height, color.into()) }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color) {
        let Ok(c_text) = CString::new(text) else {
            warn!("Skipping text with interior NUL: {:?}", text);
            return;
        };
        unsafe { ffi::DrawText(c_text.as_ptr(), x, y, size, color.into()) }
    }

    fn measure_text_width(&self, text: &str, size: i32) -> i32 {
        match CString::new(text) {
            Ok(c_text) => unsafe { ffi::MeasureText(c_text.as_ptr(), size) },
            Err(_) => 0,
        }
    }
}
