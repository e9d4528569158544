use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::array::Array2D;
use crate::core::Coord;
use crate::maze::{Cell, CellWall, Maze, MazeError};

#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid maze: {0}")]
    InvalidMaze(#[from] MazeError),
    #[error("declared {rows}x{cols} maze, but row {row} has {found} cells")]
    ColumnMismatch {
        rows: usize,
        cols: usize,
        row: usize,
        found: usize,
    },
    #[error("declared {rows}x{cols} maze, but grid has {found} rows")]
    RowMismatch {
        rows: usize,
        cols: usize,
        found: usize,
    },
    #[error("wall mask {value} at {pos} does not fit in 4 bits")]
    InvalidWallMask { pos: Coord, value: i64 },
    #[error("cells disagree on the {wall} wall of {pos}")]
    AsymmetricWall { pos: Coord, wall: CellWall },
}

/// On-disk form of a maze: dimensions plus row-major wall masks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableMaze {
    pub rows: usize,
    pub cols: usize,
    pub grid: Vec<Vec<i64>>,
}

impl From<&Maze> for SerializableMaze {
    fn from(maze: &Maze) -> Self {
        let cells = maze.get_cells();
        let grid = (0..maze.rows())
            .map(|r| {
                cells
                    .row(r)
                    .unwrap_or_default()
                    .iter()
                    .map(|cell| cell.bits() as i64)
                    .collect()
            })
            .collect();

        SerializableMaze {
            rows: maze.rows(),
            cols: maze.cols(),
            grid,
        }
    }
}

impl TryFrom<SerializableMaze> for Maze {
    type Error = SerializeError;

    fn try_from(value: SerializableMaze) -> Result<Self, Self::Error> {
        let SerializableMaze { rows, cols, grid } = value;
        if grid.len() != rows {
            return Err(SerializeError::RowMismatch {
                rows,
                cols,
                found: grid.len(),
            });
        }
        if let Some((r, row)) = grid.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(SerializeError::ColumnMismatch {
                rows,
                cols,
                row: r,
                found: row.len(),
            });
        }
        // the grid now holds exactly rows * cols values
        Maze::check_size(rows, cols)?;

        let mut buf = Vec::with_capacity(rows * cols);
        for (r, row) in grid.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                let pos = Coord(r as i32, c as i32);
                let cell = u8::try_from(value)
                    .ok()
                    .and_then(Cell::from_bits)
                    .ok_or(SerializeError::InvalidWallMask { pos, value })?;
                buf.push(cell);
            }
        }

        let cells = Array2D::from_vec(buf, rows, cols)
            .ok_or(MazeError::InvalidSize { rows, cols })?;
        let maze = Maze::from_cells(cells);

        if let Some((pos, wall)) = maze.find_asymmetric_wall() {
            return Err(SerializeError::AsymmetricWall { pos, wall });
        }

        Ok(maze)
    }
}

pub fn to_json(maze: &Maze) -> Result<String, SerializeError> {
    Ok(serde_json::to_string_pretty(&SerializableMaze::from(maze))?)
}

/// Parses a maze, rejecting dimensions that don't match the grid, masks wider
/// than 4 bits and neighbors that disagree on a shared wall.
pub fn from_json(json: &str) -> Result<Maze, SerializeError> {
    let data: SerializableMaze = serde_json::from_str(json)?;
    Maze::try_from(data)
}

pub fn save(maze: &Maze, path: impl AsRef<Path>) -> Result<(), SerializeError> {
    let path = path.as_ref();
    fs::write(path, to_json(maze)?)?;
    log::info!("saved {}x{} maze to {}", maze.rows(), maze.cols(), path.display());
    Ok(())
}

pub fn load(path: impl AsRef<Path>) -> Result<Maze, SerializeError> {
    let path = path.as_ref();
    let maze = from_json(&fs::read_to_string(path)?)?;
    log::info!("loaded {}x{} maze from {}", maze.rows(), maze.cols(), path.display());
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::algorithms::{DepthFirstSearch, MazeAlgorithm};

    #[test]
    fn roundtrip_generated() {
        for seed in 0..5 {
            let maze = DepthFirstSearch::generate(7, 4, Coord::ZERO, Some(seed))
                .unwrap()
                .maze;
            let loaded = from_json(&to_json(&maze).unwrap()).unwrap();
            assert_eq!(loaded, maze);
        }
    }

    #[test]
    fn format() {
        let mut maze = Maze::new(1, 2).unwrap();
        maze.remove_wall(Coord(0, 0), CellWall::Right).unwrap();

        let value: serde_json::Value = serde_json::from_str(&to_json(&maze).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "rows": 1, "cols": 2, "grid": [[13, 7]] })
        );
    }

    #[test]
    fn row_mismatch() {
        let json = r#"{ "rows": 2, "cols": 1, "grid": [[15]] }"#;
        assert!(matches!(
            from_json(json),
            Err(SerializeError::RowMismatch { found: 1, .. })
        ));
    }

    #[test]
    fn column_mismatch() {
        let json = r#"{ "rows": 2, "cols": 2, "grid": [[15, 15], [15]] }"#;
        assert!(matches!(
            from_json(json),
            Err(SerializeError::ColumnMismatch { row: 1, found: 1, .. })
        ));
    }

    #[test]
    fn huge_declared_size() {
        let json = format!(r#"{{ "rows": 1, "cols": {}, "grid": [[15]] }}"#, usize::MAX);
        assert!(matches!(
            from_json(&json),
            Err(SerializeError::ColumnMismatch { row: 0, found: 1, .. })
        ));

        let json = format!(
            r#"{{ "rows": 2, "cols": {}, "grid": [[15], [15]] }}"#,
            usize::MAX / 2 + 1
        );
        assert!(matches!(
            from_json(&json),
            Err(SerializeError::ColumnMismatch { row: 0, found: 1, .. })
        ));

        let json = format!(r#"{{ "rows": {}, "cols": 1, "grid": [[15]] }}"#, usize::MAX);
        assert!(matches!(
            from_json(&json),
            Err(SerializeError::RowMismatch { found: 1, .. })
        ));
    }

    #[test]
    fn mask_out_of_range() {
        let json = r#"{ "rows": 1, "cols": 2, "grid": [[15, 16]] }"#;
        assert!(matches!(
            from_json(json),
            Err(SerializeError::InvalidWallMask { pos: Coord(0, 1), value: 16 })
        ));

        let json = r#"{ "rows": 1, "cols": 1, "grid": [[-1]] }"#;
        assert!(matches!(
            from_json(json),
            Err(SerializeError::InvalidWallMask { value: -1, .. })
        ));
    }

    #[test]
    fn asymmetric_walls() {
        // left cell open to the right, right cell closed on the left
        let json = r#"{ "rows": 1, "cols": 2, "grid": [[13, 15]] }"#;
        assert!(matches!(
            from_json(json),
            Err(SerializeError::AsymmetricWall {
                pos: Coord(0, 0),
                wall: CellWall::Right
            })
        ));
    }

    #[test]
    fn empty_and_garbage() {
        assert!(matches!(
            from_json(r#"{ "rows": 0, "cols": 0, "grid": [] }"#),
            Err(SerializeError::InvalidMaze(MazeError::InvalidSize { .. }))
        ));
        assert!(matches!(from_json("not json"), Err(SerializeError::Json(_))));
        assert!(matches!(
            from_json(r#"{ "rows": 1, "cols": 1 }"#),
            Err(SerializeError::Json(_))
        ));
    }

    #[test]
    fn unconnected_state_loads() {
        let json = r#"{ "rows": 2, "cols": 2, "grid": [[15, 15], [15, 15]] }"#;
        let maze = from_json(json).unwrap();
        assert_eq!(maze, Maze::new(2, 2).unwrap());
    }

    #[test]
    fn save_and_load() {
        let maze = DepthFirstSearch::generate(3, 3, Coord(1, 1), Some(11))
            .unwrap()
            .maze;
        let path = std::env::temp_dir().join(format!("dfsmaze-ser-{}.json", std::process::id()));

        save(&maze, &path).unwrap();
        let loaded = load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, maze);
        assert!(matches!(load(&path), Err(SerializeError::Io(_))));
    }
}
