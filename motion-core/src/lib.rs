//! Mobility trace generation for point nodes moving on a 2-D field.
//!
//! Main components:
//! - [`node`] — moving nodes and their motion mode.
//! - [`graph`] — transport graph of waypoints for guided motion.
//! - [`field`] — the field that owns and advances all nodes.
//! - [`motion`] — per-tick movement rules (random walk and guided).
//! - [`proximity`] — per-tick proximity graph between nodes.
//! - [`phases`] — the phases of one generation.
//! - [`simulation`] — the generation loop producing a [`trace::Trace`].
//! - [`trace`] — per-generation records.
//! - [`xml`] — reading transport graphs, writing and reading traces.
//! - [`config`] — model constants and run parameters.
//! - [`error`] — error type shared by all fallible operations.
//! - [`rng`] — seeded random source.
//! - [`types`] — shared type aliases and IDs.

pub mod config;
pub mod error;
pub mod field;
pub mod graph;
pub mod motion;
pub mod node;
pub mod phases;
pub mod proximity;
pub mod rng;
pub mod simulation;
pub mod trace;
pub mod types;
pub mod xml;
