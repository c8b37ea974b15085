use std::collections::HashMap;

use anyhow::{bail, ensure, Result};
use vm::page_replacer::PageReplacer;
use vm::process::ProcessDescriptor;
use vm::{SimConfig, Simulator};

// Constrói um simulador FIFO a partir de triplas (chegada, tamanho, duração)
pub fn create_simulator(
    total_memory: u32,
    page_size: u32,
    processes: &[(u32, u32, u32)],
) -> Result<Simulator> {
    let config = SimConfig::new(total_memory, page_size)?;
    let descriptors: Vec<ProcessDescriptor> = processes
        .iter()
        .map(|&(arrival, size, duration)| ProcessDescriptor::new(arrival, size, duration))
        .collect();

    Ok(Simulator::new(config, &descriptors)?)
}

// Verifica a consistência entre a tabela de frames e as listas dos processos
pub fn check_invariants<R: PageReplacer>(sim: &Simulator<R>) -> Result<()> {
    let allocator = sim.allocator();

    ensure!(
        allocator.free_count() + allocator.owned_count() == allocator.num_frames(),
        "livres ({}) + ocupados ({}) != {}",
        allocator.free_count(),
        allocator.owned_count(),
        allocator.num_frames()
    );

    let mut referenced: HashMap<usize, u32> = HashMap::new();

    for process in sim.processes() {
        ensure!(
            process.allocated_count() <= process.num_pages(),
            "P{} tem {} frames para {} páginas",
            process.pid(),
            process.allocated_count(),
            process.num_pages()
        );

        for &frame in process.allocated_frames() {
            if let Some(other) = referenced.insert(frame, process.pid()) {
                bail!("frame {} listado por P{} e P{}", frame, other, process.pid());
            }

            ensure!(
                allocator.owner_of(frame) == Some(process.pid()),
                "P{} lista o frame {} mas não é o dono",
                process.pid(),
                frame
            );
        }
    }

    for (frame, state) in allocator.frames().iter().enumerate() {
        if let Some(owner) = state.owner() {
            ensure!(
                referenced.get(&frame) == Some(&owner),
                "frame {} pertence a P{} mas não está na lista dele",
                frame,
                owner
            );
        }
    }

    for frame in allocator.free_frames() {
        ensure!(allocator.frame(frame).map_or(false, |f| f.is_free()), "frame {} no pool mas ocupado", frame);
    }

    Ok(())
}
