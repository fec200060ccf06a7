//! Candidate corridor graph and Kruskal-style spanning tree selection

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rand::Rng;

use crate::algorithm::disjoint_set::DisjointSet;
use crate::io::error::{GenerationError, Result};
use crate::spatial::{Corridor, Room, TileGrid};

/// Corridor tagged with its queue insertion order
#[derive(Debug, Clone)]
struct QueuedCorridor {
    sequence: usize,
    corridor: Corridor,
}

impl QueuedCorridor {
    const fn key(&self) -> (u32, usize) {
        (self.corridor.length(), self.sequence)
    }
}

impl PartialEq for QueuedCorridor {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for QueuedCorridor {}

impl PartialOrd for QueuedCorridor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedCorridor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Min-priority queue of corridors keyed by length
///
/// Equal lengths come out in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CorridorQueue {
    heap: BinaryHeap<Reverse<QueuedCorridor>>,
    next_sequence: usize,
}

impl CorridorQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a corridor behind any others of the same length
    pub fn push(&mut self, corridor: Corridor) {
        self.heap.push(Reverse(QueuedCorridor {
            sequence: self.next_sequence,
            corridor,
        }));
        self.next_sequence += 1;
    }

    /// Remove the shortest corridor
    pub fn pop(&mut self) -> Option<Corridor> {
        self.heap.pop().map(|Reverse(queued)| queued.corridor)
    }

    /// Length of the shortest queued corridor
    pub fn peek_length(&self) -> Option<u32> {
        self.heap.peek().map(|Reverse(queued)| queued.corridor.length())
    }

    /// Number of queued corridors
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Test if no corridors are queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Build one corridor per unordered room pair
///
/// Pairs are visited as `(i, j)` with `i < j` in placement order, each
/// consuming one draw from `rng`. The order is fixed so that a seed always
/// yields the same corridor geometry.
///
/// # Errors
///
/// Returns [`GenerationError::UnopenedRoom`] if a room has no opening point.
pub fn build_candidates<R: Rng + ?Sized>(rooms: &[Room], rng: &mut R) -> Result<CorridorQueue> {
    let mut queue = CorridorQueue::new();

    for (index, first) in rooms.iter().enumerate() {
        for second in rooms.iter().skip(index + 1) {
            let corridor = Corridor::new(first, second, rng).ok_or_else(|| {
                let room_id = if first.opening_point().is_none() {
                    first.id()
                } else {
                    second.id()
                };
                GenerationError::UnopenedRoom { room_id }
            })?;
            queue.push(corridor);
        }
    }

    Ok(queue)
}

/// Pick the corridors of a minimum spanning tree and draw their floors
///
/// Corridors are popped shortest first; one joining two still-separate
/// components is accepted, its floor drawn immediately. Stops once every
/// room is connected.
///
/// # Errors
///
/// Returns [`GenerationError::SelectionExhausted`] if the queue empties before
/// `room_count - 1` corridors are accepted.
pub fn select_spanning_corridors(
    room_count: usize,
    mut queue: CorridorQueue,
    grid: &mut TileGrid,
) -> Result<Vec<Corridor>> {
    let required = room_count.saturating_sub(1);
    let mut components = DisjointSet::new(room_count);
    let mut accepted = Vec::with_capacity(required);

    while accepted.len() < required {
        let Some(corridor) = queue.pop() else {
            return Err(GenerationError::SelectionExhausted {
                accepted: accepted.len(),
                required,
            });
        };

        if components.union(corridor.room_one(), corridor.room_two()) {
            corridor.draw_floor(grid);
            accepted.push(corridor);
        }
    }

    Ok(accepted)
}
