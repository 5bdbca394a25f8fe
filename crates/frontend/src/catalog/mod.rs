pub mod grid;

pub use grid::ProductGrid;
