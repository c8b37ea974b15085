use serde::Serialize;

use crate::process::Process;
use crate::types::{Pid, Time};

/// A ordem das variantes é a ordem de processamento no mesmo instante:
/// saídas liberam memória antes que chegadas disputem frames.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EventKind {
    Departure,
    Arrival,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Event {
    pub time: Time,
    pub pid: Pid,
    pub kind: EventKind,
}

/// Gera a chegada e a saída de cada processo e ordena por `(time, kind)`.
///
/// A ordenação é estável, então empates completos seguem a ordem de
/// `processes` (pid crescente quando vem do simulador).
pub fn schedule(processes: &[Process]) -> Vec<Event> {
    let mut events: Vec<Event> = processes
        .iter()
        .flat_map(|process| {
            [
                Event {
                    time: process.arrival_time(),
                    pid: process.pid(),
                    kind: EventKind::Arrival,
                },
                Event {
                    time: process.departure_time(),
                    pid: process.pid(),
                    kind: EventKind::Departure,
                },
            ]
        })
        .collect();

    events.sort_by_key(|event| (event.time, event.kind));

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessDescriptor;

    fn processes(descriptors: &[(u32, u32, u32)]) -> Vec<Process> {
        descriptors
            .iter()
            .enumerate()
            .map(|(idx, &(arrival, size, duration))| {
                Process::new(idx as Pid + 1, ProcessDescriptor::new(arrival, size, duration), 4)
            })
            .collect()
    }

    fn summary(events: &[Event]) -> Vec<(Time, Pid, EventKind)> {
        events.iter().map(|e| (e.time, e.pid, e.kind)).collect()
    }

    #[test]
    fn two_events_per_process_sorted_by_time() {
        let events = schedule(&processes(&[(3, 4, 2), (0, 4, 1)]));

        assert_eq!(
            summary(&events),
            vec![
                (0, 2, EventKind::Arrival),
                (1, 2, EventKind::Departure),
                (3, 1, EventKind::Arrival),
                (5, 1, EventKind::Departure),
            ]
        );
    }

    #[test]
    fn departure_before_arrival_at_same_time() {
        // P1 sai em 5, P2 chega em 5
        let events = schedule(&processes(&[(0, 4, 5), (5, 4, 1)]));

        assert_eq!(events[1], Event { time: 5, pid: 1, kind: EventKind::Departure });
        assert_eq!(events[2], Event { time: 5, pid: 2, kind: EventKind::Arrival });
    }

    #[test]
    fn ties_keep_pid_order() {
        let events = schedule(&processes(&[(2, 4, 3), (2, 4, 3), (2, 4, 3)]));

        assert_eq!(
            summary(&events),
            vec![
                (2, 1, EventKind::Arrival),
                (2, 2, EventKind::Arrival),
                (2, 3, EventKind::Arrival),
                (5, 1, EventKind::Departure),
                (5, 2, EventKind::Departure),
                (5, 3, EventKind::Departure),
            ]
        );
    }

    #[test]
    fn zero_duration_departs_before_it_arrives() {
        let events = schedule(&processes(&[(4, 4, 0)]));

        assert_eq!(
            summary(&events),
            vec![(4, 1, EventKind::Departure), (4, 1, EventKind::Arrival)]
        );
    }
}
