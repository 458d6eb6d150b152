//! Spatial map (walls)
//!
//! Симуляция спрашивает только «стена ли тайл (x, y)». Загрузка tile-map файлов
//! и тайлсеты — на стороне хоста; `GridMap::from_rows` строит карту из ASCII.

pub mod grid;

pub use grid::*;
