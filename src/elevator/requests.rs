/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::marker::PhantomData;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Trip};

/**
 * Service order of a trip queue.
 *
 * `compare` returns `Less` for the trip that must be served first.
 */
pub trait TripOrder {
    fn compare(a: &Trip, b: &Trip) -> Ordering;
}

/// Lowest origin first, ties on lowest destination.
#[derive(Debug, Clone, Copy)]
pub struct OriginAscending;

impl TripOrder for OriginAscending {
    fn compare(a: &Trip, b: &Trip) -> Ordering {
        (a.origin, a.destination).cmp(&(b.origin, b.destination))
    }
}

/// Highest origin first, ties on highest destination.
#[derive(Debug, Clone, Copy)]
pub struct OriginDescending;

impl TripOrder for OriginDescending {
    fn compare(a: &Trip, b: &Trip) -> Ordering {
        (b.origin, b.destination).cmp(&(a.origin, a.destination))
    }
}

// BinaryHeap is a max-heap, so the order is flipped to keep the next trip on top.
#[derive(Debug)]
struct Entry<O> {
    trip: Trip,
    order: PhantomData<O>,
}

impl<O: TripOrder> Ord for Entry<O> {
    fn cmp(&self, other: &Self) -> Ordering {
        O::compare(&other.trip, &self.trip)
    }
}

impl<O: TripOrder> PartialOrd for Entry<O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<O: TripOrder> PartialEq for Entry<O> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<O: TripOrder> Eq for Entry<O> {}

/***************************************/
/*             Public API              */
/***************************************/
#[derive(Debug)]
pub struct TripQueue<O> {
    heap: BinaryHeap<Entry<O>>,
}

pub type UpQueue = TripQueue<OriginAscending>;
pub type DownQueue = TripQueue<OriginDescending>;

impl<O: TripOrder> TripQueue<O> {
    pub fn new() -> TripQueue<O> {
        TripQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, trip: Trip) {
        self.heap.push(Entry {
            trip,
            order: PhantomData,
        });
    }

    pub fn pop_min(&mut self) -> Option<Trip> {
        self.heap.pop().map(|entry| entry.trip)
    }

    pub fn peek_min(&self) -> Option<&Trip> {
        self.heap.peek().map(|entry| &entry.trip)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Pending trips in the order they will be served.
    pub fn sorted(&self) -> Vec<Trip> {
        let mut trips: Vec<Trip> = self.heap.iter().map(|entry| entry.trip).collect();
        trips.sort_by(O::compare);
        trips
    }
}

impl<O: TripOrder> Default for TripQueue<O> {
    fn default() -> Self {
        TripQueue::new()
    }
}

/**
 * Pending trips, partitioned by direction.
 *
 * # Fields
 * - `up`:      Upward trips, served lowest origin first.
 * - `down`:    Downward trips, served highest origin first.
 */
#[derive(Debug, Default)]
pub struct RequestQueues {
    pub up: UpQueue,
    pub down: DownQueue,
}

impl RequestQueues {
    pub fn new() -> RequestQueues {
        RequestQueues::default()
    }

    pub fn enqueue(&mut self, trip: Trip) {
        match trip.direction() {
            Direction::Up => self.up.push(trip),
            _ => self.down.push(trip),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    pub fn len(&self) -> usize {
        self.up.len() + self.down.len()
    }
}
