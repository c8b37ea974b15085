use serde::Serialize;

use crate::process::internal_fragmentation;

/// Contadores da execução. Nenhum deles diminui.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatisticsCollector {
    total_allocs: u64,
    total_evictions: u64,
    total_processes_handled: u64,
    total_internal_fragmentation: u64,
}

/// Resumo final da simulação.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    /// Só alocações vindas do pool livre; substituições ficam em `total_evictions`.
    pub total_allocs: u64,
    pub total_evictions: u64,
    pub total_processes_handled: u64,
    /// Em KB.
    pub total_internal_fragmentation: u64,
    pub average_frames_per_process: f64,
}

impl StatisticsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Soma a fragmentação interna de um processo recém-carregado.
    pub fn record_load(&mut self, size: u32, page_size: u32) {
        self.total_internal_fragmentation += u64::from(internal_fragmentation(size, page_size));
    }

    pub fn record_fresh_allocation(&mut self) {
        self.total_allocs += 1;
    }

    pub fn record_eviction(&mut self) {
        self.total_evictions += 1;
    }

    pub fn record_process_handled(&mut self) {
        self.total_processes_handled += 1;
    }

    pub fn total_allocs(&self) -> u64 {
        self.total_allocs
    }

    pub fn total_evictions(&self) -> u64 {
        self.total_evictions
    }

    pub fn total_processes_handled(&self) -> u64 {
        self.total_processes_handled
    }

    pub fn total_internal_fragmentation(&self) -> u64 {
        self.total_internal_fragmentation
    }

    /// `total_allocs / total_processes_handled`, ou 0.0 sem processos.
    pub fn average_frames_per_process(&self) -> f64 {
        if self.total_processes_handled == 0 {
            return 0.0;
        }

        self.total_allocs as f64 / self.total_processes_handled as f64
    }

    pub fn report(&self) -> Report {
        Report {
            total_allocs: self.total_allocs,
            total_evictions: self.total_evictions,
            total_processes_handled: self.total_processes_handled,
            total_internal_fragmentation: self.total_internal_fragmentation,
            average_frames_per_process: self.average_frames_per_process(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_is_zero_without_processes() {
        let stats = StatisticsCollector::new();

        assert_eq!(stats.average_frames_per_process(), 0.0);
        assert_eq!(stats.report().total_allocs, 0);
    }

    #[test]
    fn evictions_do_not_count_as_allocations() {
        let mut stats = StatisticsCollector::new();

        stats.record_fresh_allocation();
        stats.record_fresh_allocation();
        stats.record_eviction();
        stats.record_eviction();
        stats.record_eviction();
        stats.record_process_handled();
        stats.record_process_handled();

        let report = stats.report();

        assert_eq!(report.total_allocs, 2);
        assert_eq!(report.total_evictions, 3);
        assert_eq!(report.average_frames_per_process, 1.0);
    }

    #[test]
    fn fragmentation_accumulates_per_load() {
        let mut stats = StatisticsCollector::new();

        stats.record_load(10, 4);
        stats.record_load(5, 4);
        stats.record_load(8, 4);

        assert_eq!(stats.total_internal_fragmentation(), 2 + 3);
    }
}
