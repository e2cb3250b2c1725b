//! Spinner widget for loading states.
//!
//! A bouncing gradient bar: the snake enters from the left, crosses the
//! track, pauses, then runs back. Cells carry a shade that the renderer
//! applies to the theme's accent color.

use std::time::Duration;

/// One character of a spinner frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerCell {
    pub ch: char,
    /// How much to darken the accent color (0.0 = full brightness).
    pub darken: f32,
}

const TRACK: SpinnerCell = SpinnerCell {
    ch: '⬝',
    darken: 0.5,
};

#[derive(Clone, Debug)]
pub struct Spinner {
    /// Width of the track in characters.
    track_width: u16,
    /// Length of the snake/bar.
    snake_len: u16,
    /// Pause frames at right end.
    right_pause: usize,
    /// Pause frames at left end.
    left_pause: usize,
    frame_ms: u64,
    frames: Vec<Vec<SpinnerCell>>,
    current: usize,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new(8, 6)
    }
}

impl Spinner {
    pub fn new(track_width: u16, snake_len: u16) -> Self {
        let mut spinner = Self {
            track_width,
            snake_len: snake_len.max(2),
            right_pause: 1,
            left_pause: 20,
            frame_ms: 60,
            frames: Vec::new(),
            current: 0,
        };
        spinner.frames = spinner.generate_frames();
        spinner
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    #[cfg(test)]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Cells of the frame to draw now.
    pub fn current(&self) -> &[SpinnerCell] {
        &self.frames[self.current]
    }

    /// Step to the next frame, wrapping around.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.frames.len();
    }

    fn generate_frames(&self) -> Vec<Vec<SpinnerCell>> {
        let mut frames = Vec::new();
        let last_head = self.track_width as i32 + self.snake_len as i32 - 2;

        for head_pos in 0..=last_head {
            frames.push(self.make_snake_frame(head_pos, true));
        }
        for _ in 0..self.right_pause {
            frames.push(self.make_empty_frame());
        }
        for head_pos in (0..=last_head).rev() {
            frames.push(self.make_snake_frame(head_pos, false));
        }
        for _ in 0..self.left_pause {
            frames.push(self.make_empty_frame());
        }

        frames
    }

    fn make_empty_frame(&self) -> Vec<SpinnerCell> {
        vec![TRACK; self.track_width as usize]
    }

    fn make_snake_frame(&self, head_pos: i32, moving_right: bool) -> Vec<SpinnerCell> {
        let snake_len = self.snake_len as i32;
        let snake_start = head_pos - snake_len + 1;

        (0..self.track_width as i32)
            .map(|i| {
                if i < snake_start || i > head_pos {
                    return TRACK;
                }
                let progress = (i - snake_start) as f32 / (snake_len - 1) as f32;
                let t = if moving_right { progress } else { 1.0 - progress };
                // Tail is dim, head is bright
                SpinnerCell {
                    ch: '■',
                    darken: 0.4 * (1.0 - t),
                }
            })
            .collect()
    }
}
