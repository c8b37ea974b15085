/// Identificador de processo. Começa em 1 e segue a ordem do arquivo de entrada.
pub type Pid = u32;

/// Índice de um frame físico, em `[0, num_frames)`.
pub type FrameId = usize;

/// Página lógica dentro do espaço de endereçamento de um processo.
pub type PageNumber = usize;

/// Instante da simulação, em unidades de tempo abstratas.
pub type Time = u64;
