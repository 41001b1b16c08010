// ABOUTME: Configuration constants shared by the Todoboard packages
// ABOUTME: Environment variable names and their default values

pub mod constants;

pub use constants::*;
