//! Simulador de memória virtual com paginação sob demanda.
//!
//! Um conjunto fixo de frames físicos é compartilhado por processos que
//! chegam, pedem páginas e saem. Quando não há frame livre, a política FIFO
//! escolhe qual página residente perde o frame.
//!
//! O núcleo não faz I/O: cada evento processado gera um [`snapshot::Snapshot`]
//! que a camada de apresentação consome, e o resultado final é um
//! [`stats::Report`].

pub mod config;
pub mod error;
pub mod frame_allocator;
pub mod page_replacer;
pub mod process;
pub mod scheduler;
pub mod simulator;
pub mod snapshot;
pub mod stats;
pub mod types;

pub use config::SimConfig;
pub use error::{ConfigError, InputError};
pub use simulator::Simulator;
