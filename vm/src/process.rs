use serde::Serialize;

use crate::types::{FrameId, Pid, Time};

/// Registro de processo como vem da fonte de dados: `(chegada, tamanho, duração)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProcessDescriptor {
    pub arrival_time: u32,
    /// Tamanho em KB.
    pub size: u32,
    pub duration: u32,
}

impl ProcessDescriptor {
    pub fn new(arrival_time: u32, size: u32, duration: u32) -> Self {
        ProcessDescriptor {
            arrival_time,
            size,
            duration,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Process {
    pid: Pid,
    arrival_time: Time,
    duration: Time,
    size: u32,
    num_pages: usize,
    /// Frames que o processo possui agora, na ordem em que foram recebidos.
    allocated_frames: Vec<FrameId>,
}

impl Process {
    pub fn new(pid: Pid, descriptor: ProcessDescriptor, page_size: u32) -> Self {
        Process {
            pid,
            arrival_time: descriptor.arrival_time.into(),
            duration: descriptor.duration.into(),
            size: descriptor.size,
            num_pages: pages_for(descriptor.size, page_size),
            allocated_frames: Vec::new(),
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn arrival_time(&self) -> Time {
        self.arrival_time
    }

    pub fn duration(&self) -> Time {
        self.duration
    }

    pub fn departure_time(&self) -> Time {
        self.arrival_time + self.duration
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn num_pages(&self) -> usize {
        self.num_pages
    }

    pub fn allocated_frames(&self) -> &[FrameId] {
        &self.allocated_frames
    }

    pub fn allocated_count(&self) -> usize {
        self.allocated_frames.len()
    }

    pub fn is_fully_allocated(&self) -> bool {
        self.allocated_count() >= self.num_pages
    }

    pub(crate) fn attach(&mut self, frame: FrameId) {
        debug_assert!(self.allocated_count() < self.num_pages);
        debug_assert!(!self.allocated_frames.contains(&frame));

        self.allocated_frames.push(frame);
    }

    /// Remove um frame que foi tomado por outro processo via substituição.
    pub(crate) fn detach(&mut self, frame: FrameId) -> bool {
        match self.allocated_frames.iter().position(|&owned| owned == frame) {
            Some(idx) => {
                self.allocated_frames.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Esvazia a lista de frames, devolvendo o que havia nela.
    pub(crate) fn take_frames(&mut self) -> Vec<FrameId> {
        std::mem::take(&mut self.allocated_frames)
    }
}

/// Quantidade de páginas para `size` KB: `max(1, ceil(size / page_size))`.
pub fn pages_for(size: u32, page_size: u32) -> usize {
    let pages = (u64::from(size) + u64::from(page_size) - 1) / u64::from(page_size);

    pages.max(1) as usize
}

/// KB desperdiçados na última página do processo.
pub fn internal_fragmentation(size: u32, page_size: u32) -> u32 {
    let used_in_last_page = match size % page_size {
        0 => page_size,
        rem => rem,
    };

    page_size - used_in_last_page
}
