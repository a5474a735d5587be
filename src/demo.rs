//! Walks through loading, deduction, insertion and removal, printing each stage.

use std::io::Write;

use anyhow::{Context, Result};
use antennamap::{grid, interference, AntennaSet, Bounds, InterferencePoint};

use crate::{
    config::DemoAntenna,
    report::{self, Format},
};

pub fn run(
    out: &mut impl Write,
    antennas: &mut AntennaSet,
    bounds: Bounds,
    inserts: &[DemoAntenna],
) -> Result<()> {
    let mut points: Vec<InterferencePoint> = Vec::new();

    stage(out, "MATRIZ ORIGINAL")?;
    show(out, antennas, &points, bounds)?;

    stage(out, "LISTA DE ANTENAS")?;
    report::antennas(out, antennas, Format::Text)?;

    stage(out, "LISTA DE EFEITOS NEFASTOS")?;
    interference::deduce_into(antennas, bounds, &mut points)?;
    report::interference(out, &points, Format::Text)?;

    stage(out, "MATRIZ COM OS EFEITOS NEFASTOS")?;
    show(out, antennas, &points, bounds)?;

    stage(out, "MATRIZ APOS INSERIR NOVAS ANTENAS")?;
    for a in inserts {
        antennas.insert(a.frequency, a.x, a.y)?;
    }
    points.clear();
    show(out, antennas, &points, bounds)?;

    stage(out, "LISTA DE ANTENAS")?;
    report::antennas(out, antennas, Format::Text)?;
    stage(out, "LISTA DE EFEITOS NEFASTOS APOS INSERCAO")?;
    interference::deduce_into(antennas, bounds, &mut points)?;
    report::interference(out, &points, Format::Text)?;
    stage(out, "MATRIZ COM OS EFEITOS NEFASTOS APOS INSERCAO")?;
    show(out, antennas, &points, bounds)?;

    stage(out, "MATRIZ APOS REMOVER AS ANTENAS INSERIDAS")?;
    for a in inserts {
        antennas.remove(a.x, a.y);
    }
    points.clear();
    show(out, antennas, &points, bounds)?;

    stage(out, "MATRIZ DE EFEITOS NEFASTOS APOS REMOVER AS ANTENAS INSERIDAS")?;
    interference::deduce_into(antennas, bounds, &mut points)?;
    show(out, antennas, &points, bounds)?;

    Ok(())
}

fn stage(out: &mut impl Write, title: &str) -> Result<()> {
    writeln!(out, "\n{title}:")?;
    Ok(())
}

fn show(
    out: &mut impl Write,
    antennas: &AntennaSet,
    points: &[InterferencePoint],
    bounds: Bounds,
) -> Result<()> {
    let text = grid::render(antennas, points, bounds).context("Failed to render grid")?;
    write!(out, "{text}")?;
    Ok(())
}
