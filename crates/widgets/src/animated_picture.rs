use std::time::Duration;

use egui::{Color32, Painter, Pos2, Rect, TextureId, Vec2};

/// One image of an animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub texture: TextureId,
    /// Natural size of the image.
    pub size: Vec2,
    /// How long the frame stays on screen. Zero holds the animation on it.
    pub duration: Duration,
}

/// Flip-book of textures advanced by elapsed time.
///
/// Frame indices are zero-based; indices past the end refer to the last
/// frame.
#[derive(Clone, Debug)]
pub struct AnimatedPicture {
    frames: Vec<Frame>,
    current: usize,
    elapsed: Duration,
    playing: bool,
    looping: bool,
    rect: Rect,
    tint: Color32,
}

impl Default for AnimatedPicture {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            current: 0,
            elapsed: Duration::ZERO,
            playing: false,
            looping: false,
            rect: Rect::ZERO,
            tint: Color32::WHITE,
        }
    }
}

impl AnimatedPicture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame and return its index.
    ///
    /// The first frame gives an unsized picture its size.
    pub fn add_frame(&mut self, texture: TextureId, size: Vec2, duration: Duration) -> usize {
        if self.frames.is_empty() && self.rect.size() == Vec2::ZERO {
            self.rect = Rect::from_min_size(self.rect.min, size);
        }
        self.frames.push(Frame {
            texture,
            size,
            duration,
        });
        self.frames.len() - 1
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Index of the displayed frame, `None` without frames.
    pub fn current_frame(&self) -> Option<usize> {
        (!self.frames.is_empty()).then_some(self.current)
    }

    /// Duration of the displayed frame, zero without frames.
    pub fn current_frame_duration(&self) -> Duration {
        self.frames
            .get(self.current)
            .map_or(Duration::ZERO, |frame| frame.duration)
    }

    /// Jump to a frame and restart its display time.
    pub fn set_frame(&mut self, index: usize) {
        let Some(last) = self.frames.len().checked_sub(1) else {
            return;
        };
        self.current = index.min(last);
        self.elapsed = Duration::ZERO;
    }

    pub fn set_frame_duration(&mut self, index: usize, duration: Duration) {
        let Some(last) = self.frames.len().checked_sub(1) else {
            return;
        };
        self.frames[index.min(last)].duration = duration;
    }

    pub fn remove_frame(&mut self, index: usize) {
        let Some(last) = self.frames.len().checked_sub(1) else {
            return;
        };
        let index = index.min(last);
        self.frames.remove(index);

        if self.frames.is_empty() {
            self.stop();
        } else if self.current > index || self.current >= self.frames.len() {
            self.current -= 1;
        }
    }

    pub fn remove_all_frames(&mut self) {
        self.frames.clear();
        self.stop();
    }

    /// Start, or resume after [`pause`](Self::pause).
    pub fn play(&mut self) {
        self.playing = !self.frames.is_empty();
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Stop and rewind to the first frame.
    pub fn stop(&mut self) {
        self.playing = false;
        self.current = 0;
        self.elapsed = Duration::ZERO;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Restart from the first frame after the last one instead of stopping.
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn set_tint(&mut self, tint: Color32) {
        self.tint = tint;
    }

    /// Advance by `dt`. Returns `true` when the displayed frame changed.
    pub fn update(&mut self, dt: Duration) -> bool {
        if !self.playing || self.frames.is_empty() {
            return false;
        }

        let start = self.current;
        self.elapsed += dt;

        loop {
            let duration = self.frames[self.current].duration;
            if duration.is_zero() {
                self.elapsed = Duration::ZERO;
                break;
            }
            if self.elapsed < duration {
                break;
            }
            self.elapsed -= duration;

            if self.current + 1 < self.frames.len() {
                self.current += 1;
            } else if self.looping {
                self.current = 0;
            } else {
                self.playing = false;
                self.elapsed = Duration::ZERO;
                log::trace!(target: "widgets", "animation finished on frame {}", self.current);
                break;
            }
        }

        self.current != start
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn layout(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn paint(&self, painter: &Painter) {
        let Some(frame) = self.frames.get(self.current) else {
            return;
        };
        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
        painter.image(frame.texture, self.rect, uv, self.tint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);

    fn picture(frames: usize) -> AnimatedPicture {
        let mut picture = AnimatedPicture::new();
        for i in 0..frames {
            picture.add_frame(TextureId::Managed(i as u64), Vec2::new(16.0, 8.0), MS_100);
        }
        picture
    }

    #[test]
    fn first_frame_sizes_the_picture() {
        let picture = picture(2);
        assert_eq!(picture.rect().size(), Vec2::new(16.0, 8.0));
        assert_eq!(picture.frame_count(), 2);
        assert_eq!(picture.current_frame(), Some(0));
        assert_eq!(AnimatedPicture::new().current_frame(), None);
    }

    #[test]
    fn plays_through_and_stops_on_last_frame() {
        let mut picture = picture(3);
        assert!(!picture.update(MS_100));

        picture.play();
        assert!(picture.update(MS_100));
        assert_eq!(picture.current_frame(), Some(1));

        assert!(!picture.update(Duration::from_millis(50)));
        assert!(picture.update(Duration::from_millis(50)));
        assert_eq!(picture.current_frame(), Some(2));

        picture.update(Duration::from_secs(1));
        assert_eq!(picture.current_frame(), Some(2));
        assert!(!picture.is_playing());
    }

    #[test]
    fn looping_wraps_around() {
        let mut picture = picture(3);
        picture.set_looping(true);
        picture.play();
        picture.update(Duration::from_millis(350));
        assert_eq!(picture.current_frame(), Some(0));
        assert!(picture.is_playing());
    }

    #[test]
    fn zero_duration_holds_the_frame() {
        let mut picture = picture(3);
        picture.set_frame_duration(1, Duration::ZERO);
        picture.play();
        picture.update(Duration::from_secs(10));
        assert_eq!(picture.current_frame(), Some(1));
        assert_eq!(picture.current_frame_duration(), Duration::ZERO);
        assert!(picture.is_playing());
    }

    #[test]
    fn pause_keeps_frame_and_stop_rewinds() {
        let mut picture = picture(3);
        picture.play();
        picture.update(MS_100);
        picture.pause();
        picture.update(MS_100);
        assert_eq!(picture.current_frame(), Some(1));

        picture.stop();
        assert_eq!(picture.current_frame(), Some(0));
        assert!(!picture.is_playing());
    }

    #[test]
    fn out_of_range_indices_use_last_frame() {
        let mut picture = picture(3);
        picture.set_frame(99);
        assert_eq!(picture.current_frame(), Some(2));

        picture.remove_frame(99);
        assert_eq!(picture.frame_count(), 2);
        assert_eq!(picture.current_frame(), Some(1));

        picture.remove_frame(0);
        assert_eq!(picture.current_frame(), Some(0));
        assert_eq!(picture.frames()[0].texture, TextureId::Managed(1));

        picture.remove_all_frames();
        assert_eq!(picture.current_frame(), None);
        picture.play();
        assert!(!picture.is_playing());
    }
}
