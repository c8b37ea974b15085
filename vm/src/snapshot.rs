use serde::Serialize;

use crate::frame_allocator::{Eviction, Occupant};
use crate::scheduler::EventKind;
use crate::types::{FrameId, Pid, Time};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FrameState {
    pub frame: FrameId,
    /// `None` para frame livre.
    pub occupant: Option<Occupant>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventOutcome {
    Departure {
        /// Frames devolvidos ao pool, na ordem em que foram liberados.
        released: Vec<FrameId>,
    },
    Arrival {
        requested: usize,
        /// Frames que vieram do pool livre.
        fresh: Vec<FrameId>,
        /// Frames tomados de outros processos.
        evicted: Vec<Eviction>,
    },
}

/// Estado da memória logo depois de um evento.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub time: Time,
    pub kind: EventKind,
    pub pid: Pid,
    pub outcome: EventOutcome,
    pub frames: Vec<FrameState>,
}

impl Snapshot {
    /// Frames que o processo recebeu neste evento. Zero para saídas.
    pub fn allocated(&self) -> usize {
        match &self.outcome {
            EventOutcome::Arrival { fresh, evicted, .. } => fresh.len() + evicted.len(),
            EventOutcome::Departure { .. } => 0,
        }
    }

    pub fn is_under_allocated(&self) -> bool {
        match &self.outcome {
            EventOutcome::Arrival { requested, .. } => self.allocated() < *requested,
            EventOutcome::Departure { .. } => false,
        }
    }

    pub fn free_frames(&self) -> usize {
        self.frames.iter().filter(|state| state.occupant.is_none()).count()
    }
}

/// Consumidor dos snapshots gerados pelo simulador.
pub trait SnapshotSink {
    fn on_snapshot(&mut self, snapshot: &Snapshot);
}

impl SnapshotSink for Vec<Snapshot> {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        self.push(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrival(requested: usize, fresh: Vec<FrameId>) -> Snapshot {
        Snapshot {
            time: 0,
            kind: EventKind::Arrival,
            pid: 1,
            outcome: EventOutcome::Arrival {
                requested,
                fresh,
                evicted: Vec::new(),
            },
            frames: vec![
                FrameState { frame: 0, occupant: Some(Occupant { pid: 1, page_number: 0 }) },
                FrameState { frame: 1, occupant: None },
            ],
        }
    }

    #[test]
    fn under_allocation_compares_against_request() {
        assert!(arrival(2, vec![0]).is_under_allocated());
        assert!(!arrival(1, vec![0]).is_under_allocated());
    }

    #[test]
    fn departures_are_never_under_allocated() {
        let snapshot = Snapshot {
            kind: EventKind::Departure,
            outcome: EventOutcome::Departure { released: vec![3] },
            ..arrival(1, vec![0])
        };

        assert_eq!(snapshot.allocated(), 0);
        assert!(!snapshot.is_under_allocated());
        assert_eq!(snapshot.free_frames(), 1);
    }

    #[test]
    fn vec_sink_keeps_every_snapshot() {
        let mut sink: Vec<Snapshot> = Vec::new();

        sink.on_snapshot(&arrival(1, vec![0]));
        sink.on_snapshot(&arrival(2, vec![0]));

        assert_eq!(sink.len(), 2);
    }
}
