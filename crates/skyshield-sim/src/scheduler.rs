//! Tick-keyed queue of deferred simulation events.
//!
//! Events fire in due-tick order; events due on the same tick fire in the
//! order they were scheduled. Wave-scoped events carry the epoch of the wave
//! that scheduled them so the engine can drop them once that wave is over.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use skyshield_core::enums::AircraftKind;
use skyshield_core::types::Position;

/// Something that happens later.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduledEvent {
    /// One aircraft enters the playfield.
    AircraftArrival { kind: AircraftKind },
    /// A drone squadron enters together, stacked vertically.
    DroneSquadron { count: u32 },
    /// Second detonation of a dual-warhead interceptor.
    SecondaryBlast { center: Position, radius: f32 },
    /// The campaign is won.
    Victory,
    /// The story crawl finished on its own.
    StoryEnd,
}

/// An event that came due.
#[derive(Debug, Clone, PartialEq)]
pub struct DueEvent {
    pub event: ScheduledEvent,
    /// Wave epoch for wave-scoped events, `None` for global ones.
    pub epoch: Option<u32>,
}

#[derive(Debug)]
struct Entry {
    due: u64,
    seq: u64,
    epoch: Option<u32>,
    event: ScheduledEvent,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` to fire on tick `due`.
    pub fn schedule(&mut self, due: u64, epoch: Option<u32>, event: ScheduledEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            due,
            seq,
            epoch,
            event,
        }));
    }

    /// Pop the earliest event due on or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<DueEvent> {
        match self.heap.peek() {
            Some(Reverse(entry)) if entry.due <= now => {}
            _ => return None,
        }
        self.heap.pop().map(|Reverse(entry)| DueEvent {
            event: entry.event,
            epoch: entry.epoch,
        })
    }

    pub fn contains(&self, predicate: impl Fn(&ScheduledEvent) -> bool) -> bool {
        self.heap.iter().any(|Reverse(e)| predicate(&e.event))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_order() {
        let mut s = Scheduler::new();
        s.schedule(30, None, ScheduledEvent::Victory);
        s.schedule(10, Some(1), ScheduledEvent::AircraftArrival { kind: AircraftKind::Bomber });
        s.schedule(20, None, ScheduledEvent::StoryEnd);

        assert!(s.pop_due(9).is_none());
        let first = s.pop_due(100).unwrap();
        assert_eq!(first.epoch, Some(1));
        assert_eq!(s.pop_due(100).unwrap().event, ScheduledEvent::StoryEnd);
        assert_eq!(s.pop_due(100).unwrap().event, ScheduledEvent::Victory);
        assert!(s.is_empty());
    }

    #[test]
    fn same_tick_keeps_insertion_order() {
        let mut s = Scheduler::new();
        s.schedule(5, None, ScheduledEvent::DroneSquadron { count: 4 });
        s.schedule(5, None, ScheduledEvent::AircraftArrival { kind: AircraftKind::Cargo });
        assert_eq!(
            s.pop_due(5).unwrap().event,
            ScheduledEvent::DroneSquadron { count: 4 }
        );
        assert_eq!(
            s.pop_due(5).unwrap().event,
            ScheduledEvent::AircraftArrival { kind: AircraftKind::Cargo }
        );
    }

    #[test]
    fn epoch_travels_with_the_event() {
        let mut s = Scheduler::new();
        s.schedule(50, Some(2), ScheduledEvent::AircraftArrival { kind: AircraftKind::Stealth });
        s.schedule(60, None, ScheduledEvent::SecondaryBlast {
            center: Position::new(1.0, 2.0),
            radius: 45.0,
        });
        assert!(s.contains(|e| matches!(e, ScheduledEvent::AircraftArrival { .. })));
        assert_eq!(s.pop_due(55).unwrap().epoch, Some(2));
        assert_eq!(s.pop_due(60).unwrap().epoch, None);
        assert!(s.is_empty());
    }
}
