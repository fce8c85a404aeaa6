//! FEN parsing and pseudo-legal move generation on a 10×12 padded board,
//! served over a small JSON API.

pub mod api;
pub mod config;
pub mod engine;
pub mod positions;
