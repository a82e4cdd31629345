//! Error types for trace generation and document handling.

use std::io;
use std::num::ParseIntError;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Result type for simulation and document operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while loading a transport graph or running a simulation
#[derive(Error, Debug)]
pub enum SimError {
    /// Nodes were requested on a transport graph without waypoints
    #[error("transport graph has no waypoints")]
    EmptyGraph,

    /// A node had to pick a target from a waypoint with no outgoing edges
    #[error("waypoint '{0}' has no outgoing edges")]
    DeadEnd(String),

    /// Every waypoint reachable from the target stays within reach distance
    #[error("node '{node}' can never leave the reach of waypoint '{waypoint}'")]
    RoutingTrap { node: String, waypoint: String },

    /// A guided step was requested while the node sits on its target
    #[error("node '{0}' is already at its target")]
    ZeroDistance(String),

    /// The root element of a document is not the expected one
    #[error("expected <{0}> root element")]
    MissingElement(&'static str),

    /// A required attribute is absent
    #[error("<{element}> is missing attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    /// An attribute that must be an integer failed to parse
    #[error("invalid integer '{value}' in attribute '{attribute}'")]
    InvalidNumber {
        attribute: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A coordinate lies outside the supported range
    #[error("coordinate {value} in attribute '{attribute}' is out of range")]
    CoordinateOutOfRange { attribute: String, value: i64 },

    /// Malformed markup
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute syntax
    #[error("xml attribute error: {0}")]
    Attribute(#[from] AttrError),

    /// Reading or writing a document failed
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
