use thiserror::Error;

/// Erros de configuração. São fatais e acontecem antes de qualquer evento.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} deve ser um inteiro positivo")]
    NotPositive { field: &'static str },
    #[error("num_frames deve estar entre 1 e {max}, mas total_memory / page_size = {num_frames}")]
    FrameCountOutOfRange { num_frames: usize, max: usize },
}

/// Erros na lista de processos. Também fatais.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("nenhum processo carregado")]
    NoProcesses,
    #[error("{count} processos recebidos, o máximo é {max}")]
    TooManyProcesses { count: usize, max: usize },
}
