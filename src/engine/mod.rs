pub mod catalog;
pub mod format;
pub mod generator;
pub mod resolver;

pub use generator::{generate, recommend_from_catalog, recommend_from_market};
pub use resolver::{resolve, Coefficients};
