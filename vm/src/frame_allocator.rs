use serde::Serialize;

use crate::page_replacer::{FIFOPageReplacer, PageEvent, PageReplacer};
use crate::types::{FrameId, PageNumber, Pid};

/// Página residente num frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Occupant {
    pub pid: Pid,
    pub page_number: PageNumber,
}

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Frame {
    occupant: Option<Occupant>,
}

impl Frame {
    pub(crate) fn occupied(occupant: Occupant) -> Self {
        Frame {
            occupant: Some(occupant),
        }
    }

    pub fn occupant(&self) -> Option<Occupant> {
        self.occupant
    }

    pub fn owner(&self) -> Option<Pid> {
        self.occupant.map(|occupant| occupant.pid)
    }

    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Frame tomado de outro processo, com a página que estava nele.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Eviction {
    pub frame: FrameId,
    pub victim: Occupant,
}

/// Dono da tabela de frames físicos.
///
/// Os frames livres ficam numa pilha (o último liberado é o primeiro
/// reutilizado), enquanto a escolha de vítimas segue a ordem de carga
/// mantida pelo `PageReplacer`.
pub struct FrameAllocator<R: PageReplacer = FIFOPageReplacer> {
    frames: Vec<Frame>,
    free_frames: Vec<FrameId>,
    replacer: R,
}

impl FrameAllocator<FIFOPageReplacer> {
    pub fn new(num_frames: usize) -> Self {
        FrameAllocator::with_replacer(num_frames, FIFOPageReplacer::new())
    }
}

impl<R: PageReplacer> FrameAllocator<R> {
    pub fn with_replacer(num_frames: usize, replacer: R) -> Self {
        // invertido para que o frame 0 seja o topo da pilha
        let free_frames = (0..num_frames).rev().collect();

        FrameAllocator {
            frames: vec![Frame::default(); num_frames],
            free_frames,
            replacer,
        }
    }

    /// Retira o frame liberado mais recentemente, se houver.
    pub fn acquire_free(&mut self) -> Option<FrameId> {
        self.free_frames.pop()
    }

    /// Registra `page_number` de `pid` em `frame` e o coloca no fim da ordem de substituição.
    pub fn mark_active(&mut self, frame: FrameId, pid: Pid, page_number: PageNumber) {
        self.frames[frame] = Frame::occupied(Occupant { pid, page_number });

        self.replacer.page_event(PageEvent::Loaded { frame, pid });
    }

    /// Procura um frame de outro processo para entregar a `requester`.
    ///
    /// O frame devolvido continua com o dono antigo até o próximo `mark_active`.
    pub fn evict_one(&mut self, requester: Pid) -> Option<Eviction> {
        let frame = self.replacer.pick_replacement_frame(&self.frames, requester)?;
        let victim = self.frames[frame].occupant()?;

        log::debug!("alocador: vítima frame {:03} (P{} Pg{})", frame, victim.pid, victim.page_number);

        Some(Eviction { frame, victim })
    }

    pub fn release(&mut self, frame: FrameId) {
        debug_assert!(!self.frames[frame].is_free(), "frame {} liberado duas vezes", frame);

        self.frames[frame] = Frame::default();
        self.free_frames.push(frame);

        self.replacer.page_event(PageEvent::Released(frame));
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, frame: FrameId) -> Option<&Frame> {
        self.frames.get(frame)
    }

    pub fn owner_of(&self, frame: FrameId) -> Option<Pid> {
        self.frames.get(frame).and_then(Frame::owner)
    }

    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    /// Frames livres, do próximo a ser entregue ao último.
    pub fn free_frames(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.free_frames.iter().rev().copied()
    }

    pub fn free_count(&self) -> usize {
        self.free_frames.len()
    }

    pub fn owned_count(&self) -> usize {
        self.frames.iter().filter(|frame| !frame.is_free()).count()
    }

    pub fn replacer(&self) -> &R {
        &self.replacer
    }
}
