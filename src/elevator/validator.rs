/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fmt;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Trip;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorRole {
    User,
    Destination,
}

impl fmt::Display for FloorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FloorRole::User => write!(f, "user"),
            FloorRole::Destination => write!(f, "destination"),
        }
    }
}

/// Reasons a pickup request is rejected. Rejection never touches the queues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid {role} floor: {floor}. It must be between 0 and {top_floor}.")]
    OutOfRange {
        role: FloorRole,
        floor: i32,
        top_floor: u8,
    },

    #[error("You are already on floor {floor}. No need to move.")]
    NoOpTrip { floor: u8 },
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn validate(
    user_floor: i32,
    destination_floor: i32,
    total_floors: u8,
) -> Result<Trip, ValidationError> {
    let origin = check_floor(FloorRole::User, user_floor, total_floors)?;
    let destination = check_floor(FloorRole::Destination, destination_floor, total_floors)?;

    if origin == destination {
        return Err(ValidationError::NoOpTrip { floor: origin });
    }

    Ok(Trip::new(origin, destination))
}

fn check_floor(role: FloorRole, floor: i32, total_floors: u8) -> Result<u8, ValidationError> {
    match u8::try_from(floor) {
        Ok(f) if f < total_floors => Ok(f),
        _ => Err(ValidationError::OutOfRange {
            role,
            floor,
            top_floor: total_floors.saturating_sub(1),
        }),
    }
}
