pub mod geometry;

pub use geometry::{ElementBounds, Orientation, Point};
