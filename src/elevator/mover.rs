/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, trace};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, ElevatorState, RenderEvent};

/**
 * Ticks of a single floor-to-floor move.
 *
 * Yields every sub-floor position from the start floor (inclusive) toward the
 * target floor (exclusive). The sequence is finite and consumed by value.
 */
#[derive(Debug)]
pub struct Travel {
    tick: i32,
    end: i32,
    step: i32,
    steps_per_floor: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub position: f32,
    pub floor: u8,
}

impl Travel {
    pub fn new(from: u8, to: u8, steps_per_floor: u8) -> Travel {
        let steps_per_floor = i32::from(steps_per_floor.max(1));
        Travel {
            tick: i32::from(from) * steps_per_floor,
            end: i32::from(to) * steps_per_floor,
            step: if to > from { 1 } else { -1 },
            steps_per_floor,
        }
    }
}

impl Iterator for Travel {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.tick == self.end {
            return None;
        }

        let tick = self.tick;
        self.tick += self.step;

        // Ticks are never negative, so division truncates toward the floor below.
        Some(Tick {
            position: tick as f32 / self.steps_per_floor as f32,
            floor: (tick / self.steps_per_floor) as u8,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.tick).unsigned_abs() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Travel {}

/**
 * Moves the car between floors and reports every position to the renderer.
 *
 * # Fields
 * - `sub_floor_steps`: Positions emitted per floor travelled.
 * - `render_tx`:       Sink for render events. A closed renderer is ignored.
 */
#[derive(Debug)]
pub struct Mover {
    sub_floor_steps: u8,
    render_tx: cbc::Sender<RenderEvent>,
}

impl Mover {
    pub fn new(sub_floor_steps: u8, render_tx: cbc::Sender<RenderEvent>) -> Mover {
        Mover {
            sub_floor_steps,
            render_tx,
        }
    }

    pub fn move_to(&self, state: &mut ElevatorState, target_floor: u8) {
        if target_floor == state.current_floor {
            debug!("Already at floor {}", target_floor);
            self.emit(RenderEvent::AlreadyThere {
                floor: target_floor,
            });
            return;
        }

        state.direction = if target_floor > state.current_floor {
            Direction::Up
        } else {
            Direction::Down
        };
        debug!(
            "Moving {} from floor {} to floor {}",
            state.direction, state.current_floor, target_floor
        );
        self.emit(RenderEvent::Departing {
            from: state.current_floor,
            to: target_floor,
            direction: state.direction,
        });

        for tick in Travel::new(state.current_floor, target_floor, self.sub_floor_steps) {
            self.emit(RenderEvent::Position {
                position: tick.position,
                label: format!("Floor: {}", tick.floor),
            });
        }

        state.current_floor = target_floor;
        state.direction = Direction::Idle;
        self.emit(RenderEvent::Arrived {
            floor: target_floor,
        });
    }

    pub fn emit(&self, event: RenderEvent) {
        if self.render_tx.send(event).is_err() {
            trace!("Renderer disconnected, dropping render event");
        }
    }
}
