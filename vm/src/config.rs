use crate::error::ConfigError;

/// Maior quantidade de frames físicos aceita numa simulação.
pub const MAX_FRAMES: usize = 1024;

/// Maior quantidade de processos aceita numa simulação.
pub const MAX_PROCESSES: usize = 100;

/// Tamanho da memória física e das páginas, ambos em KB.
///
/// Só pode ser construída por [`SimConfig::new`], então `num_frames` sempre
/// está em `[1, MAX_FRAMES]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    total_memory: u32,
    page_size: u32,
    num_frames: usize,
}

impl SimConfig {
    pub fn new(total_memory: u32, page_size: u32) -> Result<Self, ConfigError> {
        if total_memory == 0 {
            return Err(ConfigError::NotPositive { field: "total_memory" });
        }

        if page_size == 0 {
            return Err(ConfigError::NotPositive { field: "page_size" });
        }

        let num_frames = (total_memory / page_size) as usize;

        if !(1..=MAX_FRAMES).contains(&num_frames) {
            return Err(ConfigError::FrameCountOutOfRange {
                num_frames,
                max: MAX_FRAMES,
            });
        }

        Ok(SimConfig {
            total_memory,
            page_size,
            num_frames,
        })
    }

    pub fn total_memory(&self) -> u32 {
        self.total_memory
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn num_frames(&self) -> usize {
        self.num_frames
    }
}
