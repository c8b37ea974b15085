//! Carregador da lista de processos a partir de um arquivo texto.
//!
//! O formato é o mais simples possível: uma sequência de inteiros não
//! negativos separados por espaço em branco, agrupados de três em três.
//! Cada trio descreve um processo:
//!
//! | campo    | significado                     |
//! |----------|---------------------------------|
//! | arrival  | instante de chegada             |
//! | size     | tamanho do processo em KB       |
//! | duration | tempo que o processo fica vivo  |
//!
//! Quebras de linha não têm significado, então tanto
//!
//! ```text
//! 0 10 5
//! 1 8 5
//! ```
//!
//! quanto `0 10 5 1 8 5` descrevem os mesmos dois processos. O pid de cada
//! processo é a posição do trio no arquivo, começando em 1.
//!
//! A leitura para depois de `MAX_PROCESSES` trios; o que sobrar é ignorado
//! com um aviso no log.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use vm::config::MAX_PROCESSES;
use vm::process::ProcessDescriptor;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("não foi possível ler {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("linha {line}: '{token}' não é um inteiro não negativo")]
    Parse { line: usize, token: String },
    #[error("linha {line}: registro incompleto, esperava 3 valores e achou {found}")]
    Incomplete { line: usize, found: usize },
}

/// Lê e interpreta o arquivo de processos.
pub fn load_processes<P: AsRef<Path>>(path: &P) -> Result<Vec<ProcessDescriptor>, LoaderError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let descriptors = parse_processes(&content)?;

    log::info!("loader: {} processos lidos de {}", descriptors.len(), path.display());

    Ok(descriptors)
}

pub fn parse_processes(content: &str) -> Result<Vec<ProcessDescriptor>, LoaderError> {
    let mut tokens = content
        .lines()
        .enumerate()
        .flat_map(|(idx, line)| line.split_whitespace().map(move |token| (idx + 1, token)));

    let mut descriptors = Vec::new();

    while descriptors.len() < MAX_PROCESSES {
        let Some(first) = tokens.next() else {
            break;
        };

        let mut values = [0u32; 3];
        values[0] = parse_token(first)?;

        for (found, value) in values.iter_mut().enumerate().skip(1) {
            let token = tokens.next().ok_or(LoaderError::Incomplete { line: first.0, found })?;
            *value = parse_token(token)?;
        }

        descriptors.push(ProcessDescriptor::new(values[0], values[1], values[2]));
    }

    let ignored = tokens.count();

    if ignored > 0 {
        log::warn!(
            "loader: limite de {} processos atingido, {} valores restantes ignorados",
            MAX_PROCESSES,
            ignored
        );
    }

    Ok(descriptors)
}

fn parse_token((line, token): (usize, &str)) -> Result<u32, LoaderError> {
    token.parse().map_err(|_| LoaderError::Parse {
        line,
        token: token.to_string(),
    })
}
