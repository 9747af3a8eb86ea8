pub use crate::board::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::heuristic::*;
pub use crate::r#move::*;
pub use crate::solver::*;

#[cfg(test)]
pub use crate::test::*;

pub use std::time::Duration;
