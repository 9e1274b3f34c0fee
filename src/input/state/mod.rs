mod core;
mod pointer;
mod preview;

#[cfg(test)]
mod tests;

pub use self::core::{BoardState, Drag};
