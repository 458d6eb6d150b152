//! In-memory wall grid.

use bevy::prelude::*;
use thiserror::Error;

/// Контракт пространственной карты
pub trait SpatialMap {
    /// Тайлы вне карты — не стены
    fn is_wall(&self, x: i32, y: i32) -> bool;
    /// Размер тайла в пикселях карты (без combat scale)
    fn tile_size(&self) -> u32;
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,

    #[error("tile size must be positive")]
    ZeroTileSize,

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile glyph '{glyph}' at ({x}, {y})")]
    UnknownTile { glyph: char, x: usize, y: usize },
}

pub const WALL_GLYPH: char = '#';
pub const FLOOR_GLYPH: char = '.';

/// Карта стен (row-major)
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    tile_size: u32,
    width: u32,
    height: u32,
    walls: Vec<bool>,
}

impl Default for GridMap {
    /// Пустая карта: стен нет, все позиции свободны
    fn default() -> Self {
        Self {
            tile_size: 16,
            width: 0,
            height: 0,
            walls: Vec::new(),
        }
    }
}

impl GridMap {
    /// `'#'` — стена, `'.'` — пол.
    pub fn from_rows(tile_size: u32, rows: &[&str]) -> Result<Self, MapError> {
        if tile_size == 0 {
            return Err(MapError::ZeroTileSize);
        }

        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.chars().count(),
            _ => return Err(MapError::Empty),
        };

        let mut walls = Vec::with_capacity(expected * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != expected {
                return Err(MapError::RaggedRow {
                    row: y,
                    expected,
                    found,
                });
            }

            for (x, glyph) in row.chars().enumerate() {
                match glyph {
                    WALL_GLYPH => walls.push(true),
                    FLOOR_GLYPH => walls.push(false),
                    _ => return Err(MapError::UnknownTile { glyph, x, y }),
                }
            }
        }

        Ok(Self {
            tile_size,
            width: expected as u32,
            height: rows.len() as u32,
            walls,
        })
    }

    /// Кол-во стен (для логов)
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|wall| **wall).count()
    }
}

impl SpatialMap for GridMap {
    fn is_wall(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return false;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.walls.get(index).copied().unwrap_or(false)
    }

    fn tile_size(&self) -> u32 {
        self.tile_size
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_marks_walls() {
        let map = GridMap::from_rows(16, &["###", "#.#", "###"]).unwrap();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 3);
        assert_eq!(map.tile_size(), 16);
        assert!(map.is_wall(0, 0));
        assert!(!map.is_wall(1, 1));
        assert_eq!(map.wall_count(), 8);
    }

    #[test]
    fn test_out_of_bounds_is_open() {
        let map = GridMap::from_rows(16, &["##", "##"]).unwrap();
        assert!(!map.is_wall(-1, 0));
        assert!(!map.is_wall(0, -1));
        assert!(!map.is_wall(2, 0));
        assert!(!map.is_wall(0, 2));
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(GridMap::from_rows(16, &[]), Err(MapError::Empty));
        assert_eq!(GridMap::from_rows(16, &[""]), Err(MapError::Empty));
        assert_eq!(GridMap::from_rows(0, &["#"]), Err(MapError::ZeroTileSize));
        assert_eq!(
            GridMap::from_rows(16, &["###", "#."]),
            Err(MapError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            GridMap::from_rows(16, &["#.", ".x"]),
            Err(MapError::UnknownTile { glyph: 'x', x: 1, y: 1 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = MapError::UnknownTile { glyph: '?', x: 4, y: 2 };
        assert_eq!(err.to_string(), "unknown tile glyph '?' at (4, 2)");
    }

    #[test]
    fn test_default_map_is_empty() {
        let map = GridMap::default();
        assert_eq!(map.width(), 0);
        assert!(!map.is_wall(0, 0));
    }
}
