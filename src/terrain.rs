use core::fmt;
use core::str::FromStr;
use itertools::iproduct;
use log::debug;

use crate::error::{PathError, TerrainError};
use crate::{
    Coordinate, GOAL_ELEVATION, GOAL_SYMBOL, MAX_CELLS, START_ELEVATION, START_SYMBOL,
};

/// An immutable rectangular height map. Every cell holds an elevation letter `a..=z`, except for
/// exactly one start cell `S` (elevation `a`) and exactly one goal cell `E` (elevation `z`).
///
/// A [Terrain] can only be obtained through [Terrain::from_rows] or [str::parse], both of which
/// validate the input, so every query may assume a well-formed grid of at most [MAX_CELLS]
/// cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Terrain {
    width: usize,
    height: usize,
    symbols: Vec<u8>,
    start: Coordinate,
    goal: Coordinate,
}

impl Terrain {
    /// Builds a terrain from rows of symbols, top row first.
    pub fn from_rows<I, S>(rows: I) -> Result<Terrain, TerrainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut symbols = Vec::new();
        let mut width = 0;
        let mut height = 0;
        let mut start = None;
        let mut goal = None;
        for (row, line) in rows.into_iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if row == 0 {
                width = found;
            } else if found != width {
                return Err(TerrainError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            check_size(width, row + 1)?;
            for (column, symbol) in line.chars().enumerate() {
                let coordinate = Coordinate::new(column, row);
                match symbol {
                    'a'..='z' => {}
                    START_SYMBOL => {
                        if let Some(first) = start {
                            return Err(TerrainError::DuplicateStart {
                                first,
                                second: coordinate,
                            });
                        }
                        start = Some(coordinate);
                    }
                    GOAL_SYMBOL => {
                        if let Some(first) = goal {
                            return Err(TerrainError::DuplicateGoal {
                                first,
                                second: coordinate,
                            });
                        }
                        goal = Some(coordinate);
                    }
                    _ => return Err(TerrainError::InvalidSymbol { coordinate, symbol }),
                }
                // Only ASCII survives the match above.
                symbols.push(symbol as u8);
            }
            height += 1;
        }
        if width == 0 || height == 0 {
            return Err(TerrainError::Empty);
        }
        let start = start.ok_or(TerrainError::MissingStart)?;
        let goal = goal.ok_or(TerrainError::MissingGoal)?;
        debug!("Loaded {width}x{height} terrain, start {start}, goal {goal}");
        Ok(Terrain {
            width,
            height,
            symbols,
            start,
            goal,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The designated start cell, marked `S`.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// The goal cell, marked `E`.
    pub fn goal(&self) -> Coordinate {
        self.goal
    }

    pub fn in_bounds(&self, coordinate: &Coordinate) -> bool {
        coordinate.column < self.width && coordinate.row < self.height
    }

    pub(crate) fn check_bounds(&self, coordinate: &Coordinate) -> Result<(), PathError> {
        if self.in_bounds(coordinate) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                coordinate: *coordinate,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn index(&self, coordinate: &Coordinate) -> usize {
        coordinate.row * self.width + coordinate.column
    }

    /// The raw symbol of a cell: `S`, `E` or a letter `a..=z`.
    pub fn symbol(&self, coordinate: &Coordinate) -> Result<char, PathError> {
        self.check_bounds(coordinate)?;
        Ok(self.symbols[self.index(coordinate)] as char)
    }

    /// The elevation letter of a cell, with `S` and `E` mapped to `a` and `z`.
    pub fn elevation(&self, coordinate: &Coordinate) -> Result<u8, PathError> {
        self.check_bounds(coordinate)?;
        Ok(self.elevation_unchecked(coordinate))
    }

    pub(crate) fn elevation_unchecked(&self, coordinate: &Coordinate) -> u8 {
        debug_assert!(self.in_bounds(coordinate));
        match self.symbols[self.index(coordinate)] as char {
            START_SYMBOL => START_ELEVATION,
            GOAL_SYMBOL => GOAL_ELEVATION,
            letter => letter as u8,
        }
    }

    /// Whether the cell lies as low as the start cell. These are the candidate starts of
    /// [get_path_lowest_start](crate::GridSolver::get_path_lowest_start).
    pub fn has_start_elevation(&self, coordinate: &Coordinate) -> Result<bool, PathError> {
        Ok(self.elevation(coordinate)? == START_ELEVATION)
    }

    /// Every cell of the terrain in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        iproduct!(0..self.height, 0..self.width).map(|(row, column)| Coordinate::new(column, row))
    }
}

fn check_size(width: usize, height: usize) -> Result<(), TerrainError> {
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_CELLS => Ok(()),
        _ => Err(TerrainError::TooLarge { limit: MAX_CELLS }),
    }
}

impl FromStr for Terrain {
    type Err = TerrainError;

    /// Parses one row per line. Trailing blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Terrain::from_rows(s.trim_end().lines().map(|line| line.trim_end_matches('\r')))
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.symbols.chunks(self.width) {
            let line: String = row.iter().map(|&s| s as char).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi\n";

    #[test]
    fn rejects_oversized_terrain() {
        assert_eq!(check_size(8, 5), Ok(()));
        assert_eq!(check_size(MAX_CELLS, 1), Ok(()));
        assert_eq!(
            check_size(MAX_CELLS / 2 + 1, 2),
            Err(TerrainError::TooLarge { limit: MAX_CELLS })
        );
        assert_eq!(
            check_size(usize::MAX, 2),
            Err(TerrainError::TooLarge { limit: MAX_CELLS })
        );
    }

    #[test]
    fn parses_sample() {
        let terrain: Terrain = SAMPLE.parse().unwrap();
        assert_eq!(terrain.width(), 8);
        assert_eq!(terrain.height(), 5);
        assert_eq!(terrain.start(), Coordinate::new(0, 0));
        assert_eq!(terrain.goal(), Coordinate::new(5, 2));
        assert_eq!(terrain.symbol(&Coordinate::new(3, 0)).unwrap(), 'q');
        assert_eq!(terrain.elevation(&terrain.start()).unwrap(), b'a');
        assert_eq!(terrain.elevation(&terrain.goal()).unwrap(), b'z');
        assert_eq!(terrain.to_string(), SAMPLE);
    }

    #[test]
    fn accepts_crlf_and_trailing_blank_lines() {
        let terrain: Terrain = "Sb\r\naE\r\n\r\n".parse().unwrap();
        assert_eq!((terrain.width(), terrain.height()), (2, 2));
        assert_eq!(terrain.goal(), Coordinate::new(1, 1));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<Terrain>(), Err(TerrainError::Empty));
        assert_eq!(
            Terrain::from_rows(["SaE", "ab"]),
            Err(TerrainError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Terrain::from_rows(["Sa", "#E"]),
            Err(TerrainError::InvalidSymbol {
                coordinate: Coordinate::new(0, 1),
                symbol: '#'
            })
        );
        assert_eq!(Terrain::from_rows(["ab", "aE"]), Err(TerrainError::MissingStart));
        assert_eq!(Terrain::from_rows(["Sb", "ab"]), Err(TerrainError::MissingGoal));
        assert_eq!(
            Terrain::from_rows(["SS", "aE"]),
            Err(TerrainError::DuplicateStart {
                first: Coordinate::new(0, 0),
                second: Coordinate::new(1, 0)
            })
        );
        assert_eq!(
            Terrain::from_rows(["SE", "Ea"]),
            Err(TerrainError::DuplicateGoal {
                first: Coordinate::new(1, 0),
                second: Coordinate::new(0, 1)
            })
        );
    }

    #[test]
    fn queries_outside_the_grid_fail() {
        let terrain: Terrain = SAMPLE.parse().unwrap();
        let outside = Coordinate::new(8, 0);
        assert!(!terrain.in_bounds(&outside));
        assert_eq!(
            terrain.elevation(&outside),
            Err(PathError::OutOfBounds {
                coordinate: outside,
                width: 8,
                height: 5
            })
        );
        assert!(terrain.symbol(&Coordinate::new(0, 5)).is_err());
        assert!(terrain.has_start_elevation(&outside).is_err());
    }

    #[test]
    fn coordinates_are_row_major() {
        let terrain: Terrain = "Sa\nbE".parse().unwrap();
        let all: Vec<Coordinate> = terrain.coordinates().collect();
        assert_eq!(
            all,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 1),
            ]
        );
        let low: Vec<Coordinate> = terrain
            .coordinates()
            .filter(|c| terrain.has_start_elevation(c).unwrap())
            .collect();
        assert_eq!(low, vec![Coordinate::new(0, 0), Coordinate::new(1, 0)]);
    }
}
