use crate::config::ElevatorConfig;
use crate::elevator::mover::Mover;
use crate::elevator::requests::RequestQueues;
use crate::elevator::validator::{validate, ValidationError};
use crate::shared::{Direction, ElevatorState, RenderEvent, Trip};
use crossbeam_channel as cbc;
use log::{debug, info};

/**
 * Batches pickup requests and replays them as floor-to-floor moves.
 *
 * The `Dispatcher` owns the elevator state and both request queues. Requests are
 * validated and queued by `call_elevator`, and only move the car when
 * `process_all` runs. A run serves every upward trip (lowest origin first), then
 * every downward trip (highest origin first), and repeats until both queues are
 * empty. Each trip is two moves: to the origin, then to the destination.
 *
 * Both entry points take `&mut self`, so nothing can be queued while a run is
 * draining.
 *
 * # Fields
 * - `state`:       Current floor and direction of the car.
 * - `requests`:    Pending trips, split into the up and down queues.
 * - `mover`:       Moves the car and forwards positions to the renderer.
 */
#[derive(Debug)]
pub struct Dispatcher {
    state: ElevatorState,
    requests: RequestQueues,
    mover: Mover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    ServingUp,
    ServingDown,
}

impl Phase {
    fn entry(direction: Direction) -> Phase {
        match direction {
            Direction::Idle | Direction::Up => Phase::ServingUp,
            Direction::Down => Phase::ServingDown,
        }
    }
}

/// Outcome of one `process_all` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub served: Vec<Trip>,
    pub final_floor: u8,
}

impl Dispatcher {
    pub fn new(config: &ElevatorConfig, render_tx: cbc::Sender<RenderEvent>) -> Dispatcher {
        Dispatcher {
            state: ElevatorState::new(config.n_floors),
            requests: RequestQueues::new(),
            mover: Mover::new(config.sub_floor_steps, render_tx),
        }
    }

    pub fn call_elevator(
        &mut self,
        user_floor: i32,
        destination_floor: i32,
    ) -> Result<Trip, ValidationError> {
        let trip = validate(user_floor, destination_floor, self.state.total_floors)?;
        self.requests.enqueue(trip);

        info!("Request added: {}", trip);
        debug!(
            "Up queue: {:?}, Down queue: {:?}",
            self.requests.up.sorted(),
            self.requests.down.sorted()
        );
        Ok(trip)
    }

    pub fn process_all(&mut self) -> DispatchReport {
        let mut served = Vec::with_capacity(self.requests.len());
        let mut phase = Phase::entry(self.state.direction);

        while !self.requests.is_empty() {
            if phase == Phase::Idle {
                phase = Phase::ServingUp;
            }

            if phase == Phase::ServingUp {
                while let Some(trip) = self.requests.up.pop_min() {
                    self.serve(trip);
                    served.push(trip);
                }
                phase = Phase::ServingDown;
            }

            if phase == Phase::ServingDown {
                while let Some(trip) = self.requests.down.pop_min() {
                    self.serve(trip);
                    served.push(trip);
                }
                phase = Phase::Idle;
            }
        }

        info!(
            "All requests processed: {} trip(s), car at floor {}",
            served.len(),
            self.state.current_floor
        );
        self.mover.emit(RenderEvent::ProcessingComplete);

        DispatchReport {
            served,
            final_floor: self.state.current_floor,
        }
    }

    fn serve(&mut self, trip: Trip) {
        debug!("Serving trip {}", trip);
        self.mover.move_to(&mut self.state, trip.origin);
        self.mover.move_to(&mut self.state, trip.destination);
    }

    pub fn state(&self) -> &ElevatorState {
        &self.state
    }

    pub fn current_floor(&self) -> u8 {
        self.state.current_floor
    }

    pub fn pending(&self) -> &RequestQueues {
        &self.requests
    }
}
