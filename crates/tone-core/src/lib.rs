pub mod evaluate;
pub mod field;
pub mod grid;

pub use evaluate::evaluate_grid;
pub use field::{Field2, TENSION_DAMPING, ToneField, tone_field};
pub use grid::{GRID_MAX, GRID_MIN, GRID_SIZE, Grid, Point2, linspace};
