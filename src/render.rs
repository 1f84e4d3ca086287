use core::fmt;

use crate::{Coordinate, Route, Terrain, GOAL_SYMBOL};

const UNVISITED: char = '.';
const OFF_ROUTE_STEP: char = '?';

/// Draws a [Route] over its terrain: each cell on the route shows the direction of the step
/// taken from it, the final cell shows `E` and every other cell shows `.`.
///
/// ```text
/// v..v<<<<
/// >v.vv<<^
/// .>vv>E^^
/// ..v>>>^^
/// ..>>>>>^
/// ```
pub struct PathMap<'a> {
    terrain: &'a Terrain,
    route: &'a Route,
}

impl<'a> PathMap<'a> {
    pub fn new(terrain: &'a Terrain, route: &'a Route) -> PathMap<'a> {
        PathMap { terrain, route }
    }

    fn cells(&self) -> Vec<char> {
        let width = self.terrain.width();
        let mut cells = vec![UNVISITED; width * self.terrain.height()];
        let mut mark = |c: &Coordinate, symbol: char| {
            if self.terrain.in_bounds(c) {
                cells[c.row * width + c.column] = symbol;
            }
        };
        let walked = std::iter::once(&self.route.start).chain(self.route.path.iter());
        for (from, to) in walked.zip(self.route.path.iter()) {
            let symbol = from
                .step_direction(to)
                .map_or(OFF_ROUTE_STEP, |direction| direction.arrow());
            mark(from, symbol);
        }
        mark(&self.route.end(), GOAL_SYMBOL);
        cells
    }
}

impl fmt::Display for PathMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells().chunks(self.terrain.width()) {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
