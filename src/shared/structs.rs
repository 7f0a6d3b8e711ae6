/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Idle,
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Idle => write!(f, "idle"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/**
 * A single request to travel from `origin` to `destination`.
 *
 * Trips are only built by the floor validator, so both floors are inside the
 * building and never equal.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip {
    pub origin: u8,
    pub destination: u8,
}

impl Trip {
    pub(crate) fn new(origin: u8, destination: u8) -> Trip {
        Trip {
            origin,
            destination,
        }
    }

    pub fn direction(&self) -> Direction {
        if self.destination > self.origin {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorState {
    pub current_floor: u8,
    pub direction: Direction,
    pub total_floors: u8,
}

impl ElevatorState {
    pub fn new(total_floors: u8) -> ElevatorState {
        ElevatorState {
            current_floor: 0,
            direction: Direction::Idle,
            total_floors,
        }
    }
}

/**
 * Messages from the dispatcher to the renderer thread.
 *
 * The renderer is a pure sink; nothing flows back into the dispatcher.
 */
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Departing {
        from: u8,
        to: u8,
        direction: Direction,
    },
    Position {
        position: f32,
        label: String,
    },
    Arrived {
        floor: u8,
    },
    AlreadyThere {
        floor: u8,
    },
    ProcessingComplete,
}
