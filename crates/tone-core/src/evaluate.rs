use crate::field::Field2;
use crate::grid::Grid;

/// Evaluates a field on every grid point, flattened row-major.
pub fn evaluate_grid<F>(field: &F, grid: &Grid) -> Vec<f64>
where
    F: Field2,
{
    grid.points().map(|point| field.evaluate(point)).collect()
}
