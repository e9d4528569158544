mod depth_first_search;

use rand::{thread_rng, Rng as _, SeedableRng as _};
use thiserror::Error;

use super::{Maze, MazeError};
use crate::core::*;
pub use depth_first_search::DepthFirstSearch;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    #[error("cannot generate maze: {0}")]
    InvalidMaze(#[from] MazeError),
}

/// Freshly generated maze together with the seed that produced it.
#[derive(Debug, Clone)]
pub struct GeneratedMaze {
    pub maze: Maze,
    pub seed: u64,
}

pub trait MazeAlgorithm {
    /// Carves passages into `maze`, starting at `start`.
    fn carve(maze: &mut Maze, start: Coord, rng: &mut Random) -> Result<(), GenError>;

    /// Builds a closed `rows x cols` maze and carves it.
    ///
    /// Without a seed one is drawn from the thread rng and reported back,
    /// so the layout can be reproduced later.
    fn generate(
        rows: usize,
        cols: usize,
        start: Coord,
        seed: Option<u64>,
    ) -> Result<GeneratedMaze, GenError> {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = Random::seed_from_u64(seed);

        let mut maze = Maze::new(rows, cols)?;
        Self::carve(&mut maze, start, &mut rng)?;

        Ok(GeneratedMaze { maze, seed })
    }
}
