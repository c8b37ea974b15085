mod file_process_loader;
mod report;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use report::{JsonLinesRenderer, Palette, TextRenderer};
use vm::{SimConfig, Simulator};

#[derive(Parser)]
#[command(author, version, about = "Simulador de paginação sob demanda com substituição FIFO")]
struct Cli {
    /// Memória física total em KB (perguntado se ausente)
    #[arg(short = 'm', long)]
    total_memory: Option<u32>,

    /// Tamanho da página em KB (perguntado se ausente)
    #[arg(short, long)]
    page_size: Option<u32>,

    /// Arquivo com os processos, um trio "chegada tamanho duração" por linha
    #[arg(long, default_value = "processes/process.txt")]
    processes: PathBuf,

    /// Emite snapshots e relatório como JSON, um objeto por linha
    #[arg(long)]
    json: bool,

    /// Desativa as cores ANSI
    #[arg(long)]
    no_color: bool,
}

fn prompt_kb(question: &str) -> Result<u32> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", question)?;
    stdout.flush()?;

    let mut line = String::new();

    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("entrada terminou antes de \"{}\"", question.trim_end());
    }

    line.trim()
        .parse()
        .with_context(|| format!("'{}' não é um inteiro positivo", line.trim()))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let total_memory = match cli.total_memory {
        Some(value) => value,
        None => prompt_kb("Enter total memory (KB): ").context("memória total inválida")?,
    };

    let page_size = match cli.page_size {
        Some(value) => value,
        None => prompt_kb("Enter page size   (KB): ").context("tamanho de página inválido")?,
    };

    let config = SimConfig::new(total_memory, page_size).context("configuração inválida")?;

    let descriptors = file_process_loader::load_processes(&cli.processes)
        .with_context(|| format!("falha ao carregar {}", cli.processes.display()))?;

    let mut simulator = Simulator::new(config, &descriptors).context("entrada inválida")?;

    let stdout = io::stdout().lock();

    if cli.json {
        let mut renderer = JsonLinesRenderer::new(stdout);
        let report = simulator.run(&mut renderer);
        renderer.finish(&report)?;
    } else {
        let mut renderer = TextRenderer::new(stdout, Palette::new(!cli.no_color));
        let report = simulator.run(&mut renderer);
        renderer.finish(&report)?;
    }

    Ok(())
}
