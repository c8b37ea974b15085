use std::collections::VecDeque;

use crate::frame_allocator::Frame;
use crate::types::{FrameId, Pid};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PageEvent {
    /// Uma página de `pid` foi colocada em `frame`.
    Loaded { frame: FrameId, pid: Pid },
    /// `frame` voltou para o pool livre.
    Released(FrameId),
}

pub trait PageReplacer {
    fn page_event(&mut self, _event: PageEvent) {}

    /// Escolhe o frame que será tomado para uma página de `requester`.
    ///
    /// Nunca devolve um frame livre nem um frame do próprio `requester`.
    /// `None` significa que não sobrou vítima possível.
    fn pick_replacement_frame(&mut self, frames: &[Frame], requester: Pid) -> Option<FrameId>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct QueueEntry {
    frame: FrameId,
    pid: Pid,
}

/// FIFO com remoção preguiçosa.
///
/// Liberar um frame não mexe na fila: a entrada antiga fica lá e só é
/// descartada quando chega na frente e o frame já não pertence ao processo
/// que a enfileirou.
pub struct FIFOPageReplacer {
    fifo: VecDeque<QueueEntry>,
}

impl FIFOPageReplacer {
    pub fn new() -> Self {
        FIFOPageReplacer {
            fifo: VecDeque::new(),
        }
    }

    /// Entradas na fila, incluindo as obsoletas.
    pub fn queued(&self) -> usize {
        self.fifo.len()
    }
}

impl Default for FIFOPageReplacer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageReplacer for FIFOPageReplacer {
    fn page_event(&mut self, event: PageEvent) {
        if let PageEvent::Loaded { frame, pid } = event {
            self.fifo.push_back(QueueEntry { frame, pid })
        }
    }

    fn pick_replacement_frame(&mut self, frames: &[Frame], requester: Pid) -> Option<FrameId> {
        while let Some(&entry) = self.fifo.front() {
            if frames[entry.frame].owner() != Some(entry.pid) {
                log::trace!("fifo: descartando entrada obsoleta do frame {:03} (P{})", entry.frame, entry.pid);
                self.fifo.pop_front();
                continue;
            }

            // As entradas do requisitante foram todas enfileiradas na chegada
            // dele, então daqui para trás só há páginas dele mesmo.
            if entry.pid == requester {
                return None;
            }

            self.fifo.pop_front();

            return Some(entry.frame);
        }

        None
    }
}
