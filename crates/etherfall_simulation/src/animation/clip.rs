//! Clip playback driven by simulation ticks.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::library::{Clip, ClipSpec};

/// Контракт анимационного клипа
///
/// State machine читает только `is_playing()` (completion signal);
/// combat resolver читает `current_frame_size()` для weapon hitbox.
pub trait AnimationClip {
    /// Зацикленное воспроизведение с первого кадра
    fn play(&mut self);
    /// Однократное воспроизведение, после последнего кадра `is_playing() == false`
    fn play_once(&mut self);
    fn is_playing(&self) -> bool;
    fn stop(&mut self);
    fn current_frame_size(&self) -> UVec2;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum PlayMode {
    Loop,
    Once,
}

/// Воспроизведение одного клипа
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct ClipPlayback {
    clip: Clip,
    spec: ClipSpec,
    mode: PlayMode,
    elapsed_ticks: u32,
    playing: bool,
}

impl ClipPlayback {
    /// Клип создаётся остановленным; вызывающий выбирает `play` или `play_once`.
    pub fn new(clip: Clip, spec: ClipSpec) -> Self {
        Self {
            clip,
            spec,
            mode: PlayMode::Loop,
            elapsed_ticks: 0,
            playing: false,
        }
    }

    pub fn looping(clip: Clip, spec: ClipSpec) -> Self {
        let mut playback = Self::new(clip, spec);
        playback.play();
        playback
    }

    pub fn once(clip: Clip, spec: ClipSpec) -> Self {
        let mut playback = Self::new(clip, spec);
        playback.play_once();
        playback
    }

    pub fn clip(&self) -> Clip {
        self.clip
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    /// Once-клип доиграл до конца
    pub fn is_finished(&self) -> bool {
        self.mode == PlayMode::Once && !self.playing
    }

    /// Индекс текущего кадра (0-based)
    pub fn current_frame(&self) -> u32 {
        let frames = self.spec.frames.max(1);
        let index = self.elapsed_ticks as u64 * self.spec.fps as u64 / crate::SIMULATION_HZ as u64;
        match self.mode {
            PlayMode::Loop => (index % frames as u64) as u32,
            PlayMode::Once => index.min(frames as u64 - 1) as u32,
        }
    }

    /// Один тик симуляции
    pub fn advance(&mut self) {
        if !self.playing {
            return;
        }

        let duration = self.spec.duration_ticks();
        self.elapsed_ticks += 1;

        match self.mode {
            PlayMode::Loop => {
                if self.elapsed_ticks >= duration {
                    self.elapsed_ticks = 0;
                }
            }
            PlayMode::Once => {
                if self.elapsed_ticks >= duration {
                    self.elapsed_ticks = duration;
                    self.playing = false;
                }
            }
        }
    }
}

impl AnimationClip for ClipPlayback {
    fn play(&mut self) {
        self.mode = PlayMode::Loop;
        self.elapsed_ticks = 0;
        self.playing = true;
    }

    fn play_once(&mut self) {
        self.mode = PlayMode::Once;
        self.elapsed_ticks = 0;
        self.playing = true;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn stop(&mut self) {
        self.playing = false;
    }

    fn current_frame_size(&self) -> UVec2 {
        self.spec.frame_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Facing;

    fn attack_spec() -> ClipSpec {
        // 6 кадров @ 30 fps → 12 тиков
        ClipSpec::new(6, 30, UVec2::new(96, 64))
    }

    #[test]
    fn test_play_once_finishes_after_duration() {
        let mut playback = ClipPlayback::once(Clip::Attack(Facing::Right), attack_spec());
        assert!(playback.is_playing());

        for _ in 0..11 {
            playback.advance();
        }
        assert!(playback.is_playing());
        assert_eq!(playback.current_frame(), 5);

        playback.advance();
        assert!(!playback.is_playing());
        assert!(playback.is_finished());

        // дальнейшие тики ничего не меняют
        playback.advance();
        assert_eq!(playback.elapsed_ticks(), 12);
    }

    #[test]
    fn test_loop_wraps_around() {
        let spec = ClipSpec::new(4, 10, UVec2::new(64, 64)); // 24 тика
        let mut playback = ClipPlayback::looping(Clip::Standing, spec);

        for _ in 0..24 {
            playback.advance();
        }
        assert!(playback.is_playing());
        assert_eq!(playback.elapsed_ticks(), 0);
        assert_eq!(playback.current_frame(), 0);

        for _ in 0..6 {
            playback.advance();
        }
        assert_eq!(playback.current_frame(), 1);
    }

    #[test]
    fn test_stop_and_restart() {
        let mut playback = ClipPlayback::looping(Clip::Standing, attack_spec());
        playback.advance();
        playback.stop();
        assert!(!playback.is_playing());
        assert!(!playback.is_finished()); // loop-клип остановлен, не доигран

        playback.play_once();
        assert_eq!(playback.elapsed_ticks(), 0);
        assert_eq!(playback.mode(), PlayMode::Once);
        assert_eq!(playback.current_frame_size(), UVec2::new(96, 64));
    }
}
