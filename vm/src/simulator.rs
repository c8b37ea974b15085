use std::collections::VecDeque;

use log::{debug, info, warn};

use crate::config::{SimConfig, MAX_PROCESSES};
use crate::error::InputError;
use crate::frame_allocator::FrameAllocator;
use crate::page_replacer::{FIFOPageReplacer, PageReplacer};
use crate::process::{Process, ProcessDescriptor};
use crate::scheduler::{self, Event, EventKind};
use crate::snapshot::{EventOutcome, FrameState, Snapshot, SnapshotSink};
use crate::stats::{Report, StatisticsCollector};
use crate::types::Pid;

/// Laço de eventos da simulação.
///
/// Todos os eventos são calculados na construção; cada [`Simulator::step`]
/// consome o próximo e devolve o snapshot correspondente.
pub struct Simulator<R: PageReplacer = FIFOPageReplacer> {
    config: SimConfig,
    processes: Vec<Process>,
    allocator: FrameAllocator<R>,
    stats: StatisticsCollector,
    events: VecDeque<Event>,
}

impl Simulator<FIFOPageReplacer> {
    pub fn new(config: SimConfig, descriptors: &[ProcessDescriptor]) -> Result<Self, InputError> {
        Simulator::with_replacer(config, descriptors, FIFOPageReplacer::new())
    }
}

impl<R: PageReplacer> Simulator<R> {
    pub fn with_replacer(
        config: SimConfig,
        descriptors: &[ProcessDescriptor],
        replacer: R,
    ) -> Result<Self, InputError> {
        if descriptors.is_empty() {
            return Err(InputError::NoProcesses);
        }

        if descriptors.len() > MAX_PROCESSES {
            return Err(InputError::TooManyProcesses {
                count: descriptors.len(),
                max: MAX_PROCESSES,
            });
        }

        let mut stats = StatisticsCollector::new();

        let processes: Vec<Process> = descriptors
            .iter()
            .enumerate()
            .map(|(idx, descriptor)| {
                let process = Process::new(idx as Pid + 1, *descriptor, config.page_size());

                stats.record_load(process.size(), config.page_size());

                if process.num_pages() > config.num_frames() {
                    warn!(
                        "simulador: P{} precisa de {} páginas, mas só existem {} frames; usando substituição FIFO",
                        process.pid(),
                        process.num_pages(),
                        config.num_frames()
                    );
                }

                process
            })
            .collect();

        let events = scheduler::schedule(&processes);

        info!(
            "simulador: {} frames de {} KB, {} processos, {} eventos",
            config.num_frames(),
            config.page_size(),
            processes.len(),
            events.len()
        );

        Ok(Simulator {
            config,
            processes,
            allocator: FrameAllocator::with_replacer(config.num_frames(), replacer),
            stats,
            events: events.into(),
        })
    }

    /// Processa o próximo evento. `None` quando não há mais eventos.
    pub fn step(&mut self) -> Option<Snapshot> {
        let event = self.events.pop_front()?;

        let outcome = match event.kind {
            EventKind::Departure => self.handle_departure(event.pid),
            EventKind::Arrival => self.handle_arrival(event.pid),
        };

        Some(Snapshot {
            time: event.time,
            kind: event.kind,
            pid: event.pid,
            outcome,
            frames: self.frame_table(),
        })
    }

    /// Processa todos os eventos restantes, entregando cada snapshot a `sink`.
    pub fn run<S: SnapshotSink>(&mut self, sink: &mut S) -> Report {
        while let Some(snapshot) = self.step() {
            sink.on_snapshot(&snapshot);
        }

        let report = self.stats.report();

        info!(
            "simulador: fim; {} alocações, {} substituições, {} processos",
            report.total_allocs, report.total_evictions, report.total_processes_handled
        );

        report
    }

    pub fn run_collect(&mut self) -> (Vec<Snapshot>, Report) {
        let mut snapshots = Vec::with_capacity(self.events.len());
        let report = self.run(&mut snapshots);

        (snapshots, report)
    }

    fn handle_departure(&mut self, pid: Pid) -> EventOutcome {
        let idx = Self::process_index(pid);
        let frames = self.processes[idx].take_frames();

        let mut released = Vec::with_capacity(frames.len());

        for frame in frames {
            if self.allocator.owner_of(frame) == Some(pid) {
                self.allocator.release(frame);
                released.push(frame);
            }
        }

        debug!("simulador: P{} saiu, {} frames liberados", pid, released.len());

        EventOutcome::Departure { released }
    }

    fn handle_arrival(&mut self, pid: Pid) -> EventOutcome {
        let idx = Self::process_index(pid);
        let requested = self.processes[idx].num_pages();

        let mut fresh = Vec::new();
        let mut evicted = Vec::new();

        while !self.processes[idx].is_fully_allocated() {
            let Some(frame) = self.allocator.acquire_free() else {
                break;
            };

            let page_number = self.processes[idx].allocated_count();

            self.allocator.mark_active(frame, pid, page_number);
            self.processes[idx].attach(frame);
            self.stats.record_fresh_allocation();

            fresh.push(frame);
        }

        while !self.processes[idx].is_fully_allocated() {
            let Some(eviction) = self.allocator.evict_one(pid) else {
                warn!(
                    "simulador: P{} recebeu {} de {} páginas, nenhum frame disponível para substituição",
                    pid,
                    self.processes[idx].allocated_count(),
                    requested
                );
                break;
            };

            debug!(
                "simulador: P{} toma frame {:03} de P{} Pg{}",
                pid, eviction.frame, eviction.victim.pid, eviction.victim.page_number
            );

            self.processes[Self::process_index(eviction.victim.pid)].detach(eviction.frame);

            let page_number = self.processes[idx].allocated_count();

            self.allocator.mark_active(eviction.frame, pid, page_number);
            self.processes[idx].attach(eviction.frame);
            self.stats.record_eviction();

            evicted.push(eviction);
        }

        self.stats.record_process_handled();

        EventOutcome::Arrival {
            requested,
            fresh,
            evicted,
        }
    }

    fn frame_table(&self) -> Vec<FrameState> {
        self.allocator
            .frames()
            .iter()
            .enumerate()
            .map(|(frame, state)| FrameState {
                frame,
                occupant: state.occupant(),
            })
            .collect()
    }

    fn process_index(pid: Pid) -> usize {
        pid as usize - 1
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.processes.get((pid as usize).checked_sub(1)?)
    }

    pub fn allocator(&self) -> &FrameAllocator<R> {
        &self.allocator
    }

    pub fn stats(&self) -> &StatisticsCollector {
        &self.stats
    }

    pub fn pending_events(&self) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter()
    }
}
