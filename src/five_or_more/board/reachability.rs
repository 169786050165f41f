use std::collections::VecDeque;

use itertools::Itertools;

use super::*;

/// A walk across the board from a source cell to a destination cell, both included.
/// Consecutive cells are orthogonal neighbours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path(Vec<usize>);

impl Path {
    /// The cells along the path, in walking order.
    pub fn cells(&self) -> &[usize] {
        &self.0
    }

    /// The number of cells on the path, endpoints included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The number of moves needed to walk the path.
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    pub fn source(&self) -> usize {
        self.0[0]
    }

    pub fn destination(&self) -> usize {
        self.0[self.0.len() - 1]
    }

    /// Notates the path as a dash-separated list of cell indices.
    pub fn notate(&self) -> String {
        self.0.iter().join("-")
    }
}

impl Board {
    /// Finds the shortest path for the ball at `source` to reach `destination` through empty cells.
    ///
    /// The search is breadth-first, expanding neighbours in the geometry's fixed order, so the same
    /// board always yields the same path. The destination is always considered passable. Returns
    /// `None` when the ball is walled in.
    pub fn find_path(&self, source: usize, destination: usize) -> Option<Path> {
        if source == destination {
            return Some(Path(vec![source]));
        }

        let geometry = self.geometry();
        let mut previous: Vec<Option<usize>> = vec![None; geometry.cells()];
        let mut visited = CellSet::with_capacity(geometry.cells());
        let mut queue = VecDeque::from([source]);
        visited.insert(&source);

        'search: while let Some(current) = queue.pop_front() {
            for neighbour in geometry.neighbours(current) {
                if visited.contains(&neighbour) {
                    continue;
                }
                if neighbour != destination && !self.is_empty(neighbour) {
                    continue;
                }
                visited.insert(&neighbour);
                previous[neighbour] = Some(current);
                if neighbour == destination {
                    break 'search;
                }
                queue.push_back(neighbour);
            }
        }

        if !visited.contains(&destination) {
            return None;
        }

        let mut cells = vec![destination];
        let mut node = destination;
        while let Some(prior) = previous[node] {
            cells.push(prior);
            node = prior;
        }
        cells.reverse();
        Some(Path(cells))
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};

    use super::*;

    /// Shortest distances from `source` by repeated relaxation until nothing changes.
    fn relaxed_distances(board: &Board, source: usize, destination: usize) -> Vec<Option<usize>> {
        let geometry = board.geometry();
        let passable = |i: usize| i == destination || board.is_empty(i);
        let mut distance = vec![None; geometry.cells()];
        distance[source] = Some(0);
        loop {
            let mut changed = false;
            for cell in 0..geometry.cells() {
                if cell == source || !passable(cell) {
                    continue;
                }
                let best = geometry.neighbours(cell)
                    .filter(|&n| n == source || (n != destination && passable(n)))
                    .filter_map(|n| distance[n])
                    .min()
                    .map(|d| d + 1);
                if best.is_some() && (distance[cell].is_none() || best < distance[cell]) {
                    distance[cell] = best;
                    changed = true;
                }
            }
            if !changed {
                return distance;
            }
        }
    }

    /// Every cell reachable from `source` by flood fill through empty cells and the destination.
    fn flood_fill(board: &Board, source: usize, destination: usize) -> CellSet {
        let mut seen = CellSet::from_iter([source]);
        let mut stack = vec![source];
        while let Some(cell) = stack.pop() {
            if cell == destination && cell != source {
                continue;
            }
            for n in board.geometry().neighbours(cell) {
                if !seen.contains(&n) && (n == destination || board.is_empty(n)) {
                    seen.insert(&n);
                    stack.push(n);
                }
            }
        }
        seen
    }

    fn random_board(rng: &mut rand::rngs::StdRng, size: usize, density: f64) -> Board {
        let mut board = Board::new(Geometry::new(size));
        for i in 0..size * size {
            if rng.gen_bool(density) {
                board.place(i, Color::random(rng, PALETTE_SIZE));
            }
        }
        board
    }

    fn assert_sound(board: &Board, path: &Path, source: usize, destination: usize) {
        let geometry = board.geometry();
        assert_eq!(path.source(), source);
        assert_eq!(path.destination(), destination);
        for (a, b) in path.cells().iter().tuple_windows() {
            let [a, b] = [geometry.to_coord(*a), geometry.to_coord(*b)];
            assert_eq!(a.row.abs_diff(b.row) + a.col.abs_diff(b.col), 1);
        }
        for cell in &path.cells()[1..path.len() - 1] {
            assert!(board.is_empty(*cell));
        }
    }

    #[test]
    fn corner_to_corner_on_empty_board() {
        let board = Board::default();
        let path = board.find_path(0, 80).unwrap();
        assert_eq!(path.len(), 17);
        assert_eq!(path.steps(), 16);
        assert_sound(&board, &path, 0, 80);
    }

    #[test]
    fn degenerate_path() {
        let mut board = Board::default();
        board.place(40, Color::Red);
        assert_eq!(board.find_path(40, 40).unwrap().cells(), &[40]);
    }

    #[test]
    fn walled_in_ball_is_blocked() {
        let mut board = Board::default();
        board.place(40, Color::Red);
        for n in [31, 39, 41, 49] {
            board.place(n, Color::Blue);
        }
        assert!(board.find_path(40, 0).is_none());
        assert!(board.find_path(0, 40 - 9 - 9).is_some());
    }

    #[test]
    fn detours_around_walls() {
        // a vertical wall in column 4 with a single gap at the bottom
        let mut board = Board::default();
        for row in 0..8 {
            board.place(row * 9 + 4, Color::Green);
        }
        board.place(0, Color::Red);
        let path = board.find_path(0, 8).unwrap();
        assert_sound(&board, &path, 0, 8);
        assert_eq!(path.steps(), 8 + 8 + 8);
        assert!(path.cells().contains(&(8 * 9 + 4)));
    }

    #[test]
    fn paths_are_deterministic() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let board = random_board(&mut rng, 9, 0.3);
        let empties = board.empty_cells();
        let (Some(a), Some(b)) = (empties.nth(0), empties.nth(empties.len() - 1)) else {
            panic!("board unexpectedly full");
        };
        assert_eq!(board.find_path(a, b), board.find_path(a, b));
    }

    #[test]
    fn shortest_and_complete_against_references() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let board = random_board(&mut rng, 5, 0.4);
            let occupied = board.occupied_cells();
            let empties = board.empty_cells();
            if occupied.is_empty() || empties.is_empty() {
                continue;
            }
            let source = occupied.nth(rng.gen_range(0..occupied.len())).unwrap();
            let destination = empties.nth(rng.gen_range(0..empties.len())).unwrap();

            let reachable = flood_fill(&board, source, destination).contains(&destination);
            let distance = relaxed_distances(&board, source, destination)[destination];

            match board.find_path(source, destination) {
                Some(path) => {
                    assert!(reachable);
                    assert_sound(&board, &path, source, destination);
                    assert_eq!(Some(path.steps()), distance);
                },
                None => {
                    assert!(!reachable);
                    assert_eq!(distance, None);
                }
            }
        }
    }
}
