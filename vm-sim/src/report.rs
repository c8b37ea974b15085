//! Apresentação dos snapshots em texto, colorido ou não, e em JSON.

use std::fmt::Write as _;
use std::io::{self, Write};

use vm::scheduler::EventKind;
use vm::snapshot::{EventOutcome, Snapshot, SnapshotSink};
use vm::stats::Report;

const FRAMES_PER_ROW: usize = 4;
const SEPARATOR_WIDTH: usize = 80;

const C_RESET: &str = "\x1b[0m";
const C_INFO: &str = "\x1b[1;34m";
const C_OK: &str = "\x1b[1;32m";
const C_WARN: &str = "\x1b[1;33m";
const C_ERR: &str = "\x1b[1;31m";
const C_FREE: &str = "\x1b[90m";

#[derive(Copy, Clone, Debug)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color, text, C_RESET)
        } else {
            text.to_string()
        }
    }
}

fn separator(out: &mut String, c: char) {
    out.extend(std::iter::repeat(c).take(SEPARATOR_WIDTH));
    out.push('\n');
}

pub fn render_snapshot(snapshot: &Snapshot, palette: Palette) -> String {
    let mut out = String::new();

    let (title, color) = match snapshot.kind {
        EventKind::Arrival => ("Process Arrival", C_INFO),
        EventKind::Departure => ("Process Termination", C_WARN),
    };

    separator(&mut out, '=');
    out.push_str(&palette.paint(color, &format!("TIME {:3}  {}", snapshot.time, title)));
    out.push('\n');
    separator(&mut out, '=');

    match &snapshot.outcome {
        EventOutcome::Departure { released } => {
            let _ = writeln!(out, " → Freeing {} pages of P{}\n", released.len(), snapshot.pid);
        }
        EventOutcome::Arrival {
            requested, evicted, ..
        } => {
            let _ = writeln!(out, " → P{} needs {} pages\n", snapshot.pid, requested);

            for eviction in evicted {
                let line = format!(
                    "  Evicting frame {:03} (P{} Pg{})",
                    eviction.frame, eviction.victim.pid, eviction.victim.page_number
                );
                out.push_str(&palette.paint(C_ERR, &line));
                out.push('\n');
            }

            out.push('\n');

            let status = if snapshot.is_under_allocated() {
                palette.paint(
                    C_WARN,
                    &format!(
                        "Process {} partially allocated ({} of {} pages).",
                        snapshot.pid,
                        snapshot.allocated(),
                        requested
                    ),
                )
            } else {
                palette.paint(C_OK, &format!("Process {} fully allocated.", snapshot.pid))
            };

            out.push_str(&status);
            out.push_str("\n\n");
        }
    }

    for (idx, state) in snapshot.frames.iter().enumerate() {
        let cell = match state.occupant {
            None => palette.paint(C_FREE, &format!("[{:03}]: Free ", state.frame)),
            Some(occupant) => palette.paint(
                C_OK,
                &format!("[{:03}]:P{} Pg{} ", state.frame, occupant.pid, occupant.page_number),
            ),
        };

        out.push_str(&cell);

        if (idx + 1) % FRAMES_PER_ROW == 0 {
            out.push('\n');
        }
    }

    out.push('\n');

    out
}

pub fn render_summary(report: &Report) -> String {
    let mut out = String::new();

    separator(&mut out, '=');
    let _ = writeln!(out, " Total allocations: {}", report.total_allocs);
    let _ = writeln!(out, " Total evictions:   {}", report.total_evictions);
    let _ = writeln!(out, " Total processes handled: {}", report.total_processes_handled);
    let _ = writeln!(out, " Total internal fragmentation: {} KB", report.total_internal_fragmentation);
    let _ = writeln!(out, " Average frames per process: {:.2}", report.average_frames_per_process);
    separator(&mut out, '=');

    out
}

/// Escreve cada snapshot assim que ele chega.
///
/// `on_snapshot` não pode falhar, então o primeiro erro de escrita fica
/// guardado e é devolvido por `finish`.
pub struct TextRenderer<W: Write> {
    out: W,
    palette: Palette,
    error: Option<io::Error>,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        TextRenderer {
            out,
            palette,
            error: None,
        }
    }

    pub fn finish(mut self, report: &Report) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }

        self.out.write_all(render_summary(report).as_bytes())?;
        self.out.flush()?;

        Ok(self.out)
    }
}

impl<W: Write> SnapshotSink for TextRenderer<W> {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        if self.error.is_some() {
            return;
        }

        let text = render_snapshot(snapshot, self.palette);

        if let Err(error) = self.out.write_all(text.as_bytes()) {
            self.error = Some(error);
        }
    }
}

/// Uma linha JSON por snapshot, e o relatório na última linha.
pub struct JsonLinesRenderer<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        JsonLinesRenderer { out, error: None }
    }

    fn write_line<T: serde::Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        self.out.write_all(b"\n")
    }

    pub fn finish(mut self, report: &Report) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }

        self.write_line(report)?;
        self.out.flush()?;

        Ok(self.out)
    }
}

impl<W: Write> SnapshotSink for JsonLinesRenderer<W> {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        if self.error.is_some() {
            return;
        }

        if let Err(error) = self.write_line(snapshot) {
            self.error = Some(error);
        }
    }
}
