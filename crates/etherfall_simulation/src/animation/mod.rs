//! Анимационные клипы (tick-driven)
//!
//! Содержит:
//! - `AnimationClip` — контракт клипа (play / play_once / stop / frame size)
//! - `ClipPlayback` — реализация на счётчике тиков симуляции
//! - `ClipLibrary` — тайминги и размеры кадров для каждого вида актора
//!
//! Рендер кадров вне симуляции: хост читает `Clip` + `current_frame()`.

pub mod clip;
pub mod library;

pub use clip::*;
pub use library::*;
