//! Core crate contains building blocks to plan an approximate shortest visiting order
//! (a nearest-neighbor heuristic for the ***Traveling Salesman Problem***) over a set
//! of 3D geographic points.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
