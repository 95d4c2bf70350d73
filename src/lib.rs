pub mod config;
pub mod constants;
pub mod errors;
pub mod game;
pub mod instance;
pub mod solver;

#[cfg(test)]
mod tests;
