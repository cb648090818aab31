/// Cartesian point on the sampling plane.
pub type Point2 = [f64; 2];

/// Number of samples per axis served to clients.
pub const GRID_SIZE: usize = 50;
pub const GRID_MIN: f64 = -1.0;
pub const GRID_MAX: f64 = 1.0;

/// Returns `count` evenly spaced samples over `[start, end]`, endpoints included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = count - 1;
            let span = end - start;
            (0..count)
                .map(|i| {
                    if i == last {
                        end
                    } else {
                        start + span * i as f64 / last as f64
                    }
                })
                .collect()
        }
    }
}

/// Square sampling mesh over `[GRID_MIN, GRID_MAX]` on both axes.
///
/// Rows run along `y` and columns along `x`, so the point at `(row, col)` is
/// `(axis[col], axis[row])` and flattened storage is row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    axis: Vec<f64>,
}

impl Grid {
    pub fn square(size: usize) -> Self {
        Self {
            axis: linspace(GRID_MIN, GRID_MAX, size),
        }
    }

    pub fn size(&self) -> usize {
        self.axis.len()
    }

    /// Total number of points (`size * size`).
    pub fn len(&self) -> usize {
        self.size() * self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }

    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size() + col
    }

    #[inline]
    pub fn point(&self, row: usize, col: usize) -> Point2 {
        [self.axis[col], self.axis[row]]
    }

    /// Iterates all points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.axis
            .iter()
            .flat_map(move |&y| self.axis.iter().map(move |&x| [x, y]))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::square(GRID_SIZE)
    }
}
