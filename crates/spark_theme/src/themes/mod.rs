//! Built-in themes

mod spark;

pub use spark::{palette, SparkTheme};
