//! ramify: an outline editor for growing nested lists in the terminal.
//!
//! The core of the crate is the outline tree and its edit engine
//! ([`outline`]): an in-place recursive structure that turns a flat sequence
//! of sibling items into an arbitrarily deep tree via insert-after,
//! add-child, indent and dedent operations. Everything around it is an
//! adapter: [`persist`] snapshots the tree as plain JSON, [`ui`] flattens it
//! into a ratatui view, and [`app_state`] is the session glue between them.

pub mod app_state;
pub mod config;
pub mod node;
pub mod outline;
pub mod persist;
pub mod ui;
