//! Terminal rendering of a chart layout.
//!
//! Thin presentation glue: the engine's `BarDescriptor`s carry rank,
//! color, value and hover text; this module just draws them as ANSI
//! truecolor bar lines. Bars print highest score first so the visual
//! stacking matches the chart (rank 1 at the top).

use alehp_core::{BarDescriptor, ChartLayout};
use std::io::Write;

/// Widest bar, in terminal cells, for a value at the axis maximum.
const BAR_CELLS: f64 = 60.0;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

pub fn print_layout(layout: &ChartLayout) {
    let mut out = std::io::stdout().lock();
    write_layout(&mut out, layout).ok();
}

fn write_layout(out: &mut impl Write, layout: &ChartLayout) -> std::io::Result<()> {
    let ChartLayout::Bars {
        height,
        axis_max,
        bars,
    } = layout
    else {
        return writeln!(out, "No data available.");
    };

    let name_width = bars.iter().map(|b| b.name.len()).max().unwrap_or(0);
    writeln!(out, "Vanguard eHP  ({} bars, height {height})", bars.len())?;

    for bar in bars.iter().rev() {
        write_bar(out, bar, name_width, *axis_max)?;
    }
    Ok(())
}

fn write_bar(
    out: &mut impl Write,
    bar: &BarDescriptor,
    name_width: usize,
    axis_max: f64,
) -> std::io::Result<()> {
    let cells = ((bar.value as f64 / axis_max) * BAR_CELLS).round().max(1.0) as usize;
    let fill = "█".repeat(cells);

    match truecolor(&bar.color) {
        Some(color) => writeln!(
            out,
            "{:>name_width$} {color}{fill}{RESET} {}  {DIM}{}{RESET}",
            bar.name, bar.value, bar.hover_text,
        ),
        None => writeln!(
            out,
            "{:>name_width$} {fill} {}  {}",
            bar.name, bar.value, bar.hover_text,
        ),
    }
}

/// ANSI truecolor escape for a `#rrggbb` string.
fn truecolor(hex: &str) -> Option<String> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(format!("\x1b[38;2;{r};{g};{b}m"))
}
