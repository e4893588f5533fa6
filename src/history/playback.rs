/*!
 * History Playback
 * Headless frame cursor over a recorded history
 *
 * The cursor index is the only mutable state. Timers belong to the caller:
 * call [`Playback::tick`] on whatever interval drives the animation.
 */

use super::snapshot::HistorySnapshot;
use crate::core::types::Ticks;
use tracing::debug;

/// Frame-by-frame cursor over an immutable history
#[derive(Debug, Clone)]
pub struct Playback<'a> {
    frames: &'a [HistorySnapshot],
    position: usize,
    playing: bool,
}

impl<'a> Playback<'a> {
    pub fn new(frames: &'a [HistorySnapshot]) -> Self {
        Self {
            frames,
            position: 0,
            playing: false,
        }
    }

    /// Snapshot at the cursor, `None` for an empty history
    pub fn current(&self) -> Option<&'a HistorySnapshot> {
        self.frames.get(self.position)
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.frames.len()
    }

    /// Move one frame forward; returns false at the last frame
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.position += 1;
        debug!(position = self.position, "Stepped forward");
        true
    }

    /// Move one frame back; returns false at the first frame
    pub fn step_backward(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        debug!(position = self.position, "Stepped backward");
        true
    }

    /// Jump to a frame index; out-of-range indices are ignored
    pub fn seek(&mut self, index: usize) -> bool {
        if index >= self.frames.len() {
            return false;
        }
        self.position = index;
        true
    }

    /// Jump to the last frame recorded at or before `time`
    ///
    /// Times before the first frame land on frame 0.
    pub fn seek_to_time(&mut self, time: Ticks) -> Option<&'a HistorySnapshot> {
        let after = self.frames.partition_point(|frame| frame.time <= time);
        self.position = after.saturating_sub(1);
        self.current()
    }

    /// Start playing; no-op when there is nothing left to show
    pub fn play(&mut self) -> bool {
        if self.frames.is_empty() || self.is_at_end() {
            return false;
        }
        self.playing = true;
        true
    }

    /// Pause without moving the cursor
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Toggle between play and pause, returns the new playing flag
    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
        self.playing
    }

    /// Rewind to the first frame and pause
    pub fn rewind(&mut self) {
        self.position = 0;
        self.playing = false;
    }

    /// Advance one frame if playing; pauses on reaching the last frame
    pub fn tick(&mut self) -> Option<&'a HistorySnapshot> {
        if !self.playing {
            return None;
        }
        if !self.step_forward() {
            self.playing = false;
            return None;
        }
        if self.is_at_end() {
            self.playing = false;
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(times: &[Ticks]) -> Vec<HistorySnapshot> {
        times
            .iter()
            .map(|&time| HistorySnapshot {
                time,
                current_process_id: None,
                ready_queue_ids: vec![],
                completed_process_ids: vec![],
                processes: vec![],
            })
            .collect()
    }

    #[test]
    fn test_steps_are_clamped() {
        let history = frames(&[0, 0, 3]);
        let mut playback = Playback::new(&history);

        assert!(!playback.step_backward());
        assert!(playback.step_forward());
        assert!(playback.step_forward());
        assert!(!playback.step_forward());
        assert_eq!(playback.position(), 2);
    }

    #[test]
    fn test_seek_to_time_picks_last_frame() {
        let history = frames(&[0, 0, 3, 3, 6]);
        let mut playback = Playback::new(&history);

        playback.seek_to_time(3);
        assert_eq!(playback.position(), 3);
        playback.seek_to_time(5);
        assert_eq!(playback.position(), 3);
        playback.seek_to_time(100);
        assert_eq!(playback.position(), 4);
        playback.seek_to_time(0);
        assert_eq!(playback.position(), 1);
    }

    #[test]
    fn test_tick_stops_at_end() {
        let history = frames(&[0, 1, 2]);
        let mut playback = Playback::new(&history);

        assert!(playback.play());
        assert_eq!(playback.tick().map(|f| f.time), Some(1));
        assert_eq!(playback.tick().map(|f| f.time), Some(2));
        assert!(!playback.is_playing());
        assert!(playback.tick().is_none());
        assert!(!playback.play());
    }

    #[test]
    fn test_pause_keeps_position() {
        let history = frames(&[0, 1, 2, 3]);
        let mut playback = Playback::new(&history);

        playback.play();
        playback.tick();
        playback.pause();
        assert!(playback.tick().is_none());
        assert_eq!(playback.position(), 1);
        assert!(playback.toggle());
        assert!(playback.tick().is_some());
    }

    #[test]
    fn test_empty_history() {
        let history = frames(&[]);
        let mut playback = Playback::new(&history);
        assert!(playback.current().is_none());
        assert!(!playback.play());
        assert!(!playback.seek(0));
        assert!(playback.seek_to_time(5).is_none());
    }
}
