use std::collections::HashMap;

use crate::error::{SimError, SimResult};
use crate::types::{Position, WaypointId, within_range};
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Waypoint {
    pub id: String,
    pub pos: Position,
    pub neighbors: Vec<WaypointId>,
}

/// Fixed waypoints and the directed edges guided nodes travel along.
///
/// Adjacency is stored as indices into `waypoints`; it is filled while the
/// graph is loaded and left untouched during a run.
#[derive(Debug, Clone, Default)]
pub struct TransportGraph {
    pub width: i64,
    pub height: i64,
    pub waypoints: Vec<Waypoint>,
    index: HashMap<String, WaypointId>,
}

impl Waypoint {
    pub fn new(id: impl Into<String>, pos: Position) -> Self {
        Self {
            id: id.into(),
            pos,
            neighbors: Vec::with_capacity(4),
        }
    }
}

impl TransportGraph {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            waypoints: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn add_waypoint(&mut self, id: impl Into<String>, pos: Position) -> WaypointId {
        let wid = self.waypoints.len();
        let waypoint = Waypoint::new(id, pos);
        // Lookups by id resolve to the first waypoint carrying it.
        self.index.entry(waypoint.id.clone()).or_insert(wid);
        self.waypoints.push(waypoint);
        wid
    }

    pub fn find(&self, id: &str) -> Option<WaypointId> {
        self.index.get(id).copied()
    }

    /// Adds a directed edge between two waypoints given by their textual ids.
    ///
    /// Returns `false` and leaves the graph unchanged when either endpoint is
    /// unknown.
    pub fn connect(&mut self, from: &str, to: &str) -> bool {
        match (self.find(from), self.find(to)) {
            (Some(f), Some(t)) => {
                self.waypoints[f].neighbors.push(t);
                true
            }
            _ => false,
        }
    }

    pub fn random_waypoint(&self, rng: &mut impl Rng) -> SimResult<WaypointId> {
        if self.waypoints.is_empty() {
            return Err(SimError::EmptyGraph);
        }
        Ok(rng.random_range(0..self.waypoints.len()))
    }

    pub fn random_neighbor(&self, id: WaypointId, rng: &mut impl Rng) -> SimResult<WaypointId> {
        let waypoint = &self.waypoints[id];
        if waypoint.neighbors.is_empty() {
            return Err(SimError::DeadEnd(waypoint.id.clone()));
        }
        Ok(waypoint.neighbors[rng.random_range(0..waypoint.neighbors.len())])
    }

    /// Returns `true` if repeatedly replacing a target with a random
    /// neighbor, starting at `start`, stops with probability 1 for a node
    /// sitting at `pos`.
    ///
    /// The walk stops on a waypoint beyond `reach` of `pos`, or on a dead end
    /// (where picking the next target fails). It visits only the waypoints
    /// within reach that are connected to `start` through other waypoints
    /// within reach; it stops almost surely iff every one of them can still
    /// get to a stopping point. The check runs in two passes:
    ///
    /// 1. Forward from `start`, collect the visited waypoints and mark those
    ///    with a direct way out.
    /// 2. Backward over the collected edges, spread the mark to every
    ///    waypoint that can reach a marked one.
    pub fn reroute_terminates(&self, pos: Position, start: WaypointId, reach: i64) -> bool {
        let near = |w: WaypointId| within_range(self.waypoints[w].pos, pos, reach);

        if !near(start) {
            return true;
        }

        let len = self.waypoints.len();
        let mut visited = vec![false; len];
        let mut escapes = vec![false; len];
        let mut predecessors: Vec<Vec<WaypointId>> = vec![Vec::new(); len];
        let mut region = vec![start];
        let mut stack = vec![start];
        let mut marked = Vec::new();
        visited[start] = true;

        while let Some(w) = stack.pop() {
            let neighbors = &self.waypoints[w].neighbors;
            if neighbors.is_empty() || neighbors.iter().any(|&n| !near(n)) {
                escapes[w] = true;
                marked.push(w);
            }
            for &n in neighbors.iter().filter(|&&n| near(n)) {
                predecessors[n].push(w);
                if !visited[n] {
                    visited[n] = true;
                    region.push(n);
                    stack.push(n);
                }
            }
        }

        while let Some(w) = marked.pop() {
            for &p in &predecessors[w] {
                if !escapes[p] {
                    escapes[p] = true;
                    marked.push(p);
                }
            }
        }

        region.iter().all(|&w| escapes[w])
    }
}
