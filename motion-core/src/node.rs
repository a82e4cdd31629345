use crate::types::{Position, WaypointId};

/// How a node moves. Fixed for the lifetime of the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Random walk driven by a velocity that is occasionally redrawn.
    Free { velocity: Position },
    /// Constant-speed travel towards a waypoint of the transport graph.
    Guided {
        target: WaypointId,
        linear_speed: i64,
    },
}

#[derive(Clone, Debug)]
pub struct Node {
    pub id: String,
    pub pos: Position,
    pub motion: Motion,
}

impl Node {
    /// Label of the node at `index` in the field: `n1`, `n2`, ...
    pub fn label(index: usize) -> String {
        format!("n{}", index + 1)
    }

    pub fn free(id: impl Into<String>, pos: Position, velocity: Position) -> Self {
        Self {
            id: id.into(),
            pos,
            motion: Motion::Free { velocity },
        }
    }

    pub fn guided(
        id: impl Into<String>,
        pos: Position,
        target: WaypointId,
        linear_speed: i64,
    ) -> Self {
        Self {
            id: id.into(),
            pos,
            motion: Motion::Guided {
                target,
                linear_speed,
            },
        }
    }

    pub fn target(&self) -> Option<WaypointId> {
        match self.motion {
            Motion::Guided { target, .. } => Some(target),
            Motion::Free { .. } => None,
        }
    }
}
