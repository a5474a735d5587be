//! Console listings of antennas and interference points.

use std::io::Write;

use anyhow::Result;
use antennamap::{AntennaSet, InterferencePoint};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Serialize)]
struct AntennaRow {
    frequency: char,
    x: i32,
    y: i32,
}

#[derive(Serialize)]
struct PointRow {
    x: i32,
    y: i32,
}

pub fn antennas(out: &mut impl Write, antennas: &AntennaSet, format: Format) -> Result<()> {
    let rows: Vec<_> = antennas
        .iter()
        .map(|a| AntennaRow {
            frequency: a.frequency,
            x: a.x(),
            y: a.y(),
        })
        .collect();

    match format {
        Format::Text => {
            if rows.is_empty() {
                writeln!(out, "Nenhuma antena registada.")?;
            }
            for a in rows {
                writeln!(
                    out,
                    "Frequencia: {} | Coordenadas: ({}, {})",
                    a.frequency, a.x, a.y
                )?;
            }
        }
        Format::Json => write_json(out, &rows)?,
        Format::Csv => write_csv(out, &["frequency", "x", "y"], &rows)?,
    }

    Ok(())
}

pub fn interference(out: &mut impl Write, points: &[InterferencePoint], format: Format) -> Result<()> {
    let rows: Vec<_> = points.iter().map(|p| PointRow { x: p.x, y: p.y }).collect();

    match format {
        Format::Text => {
            if rows.is_empty() {
                writeln!(out, "Nenhum efeito nefasto detetado.")?;
            }
            for p in rows {
                writeln!(out, "Efeito Nefasto em: ({}, {})", p.x, p.y)?;
            }
        }
        Format::Json => write_json(out, &rows)?,
        Format::Csv => write_csv(out, &["x", "y"], &rows)?,
    }

    Ok(())
}

fn write_json<T: Serialize>(out: &mut impl Write, rows: &[T]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

// header is written by hand so that an empty listing still has one
fn write_csv<T: Serialize>(out: &mut impl Write, header: &[&str], rows: &[T]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
