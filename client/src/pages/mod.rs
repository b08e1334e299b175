//! Pages. The app is a single board; there is no routing.

pub mod board;
