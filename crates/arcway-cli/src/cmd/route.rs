//! `aw route` — shortest paths from a source vertex.
//!
//! With a target, prints the distance and the reconstructed path; without
//! one, prints the full distance/predecessor table. When the file ends
//! with a path query (`from-to`) and no source is given on the command
//! line, the file's query supplies both endpoints.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, bail};
use arcway_core::text::import;
use arcway_core::{NO_EDGE, ShortestPaths, shortest_paths};
use clap::Args;
use serde::Serialize;

use crate::cmd::Storage;
use crate::output::{OutputMode, kv, render as render_out};

/// Arguments for `aw route`.
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Graph file to load.
    pub file: PathBuf,

    /// Source vertex. Defaults to the file's trailing path query.
    pub source: Option<String>,

    /// Target vertex. Without one, the full table is printed.
    pub target: Option<String>,
}

#[derive(Debug, Serialize)]
struct RouteRow {
    vertex: String,
    /// `null` when the vertex is unreachable from the source.
    distance: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    via: Option<String>,
}

#[derive(Debug, Serialize)]
struct TableReport {
    source: String,
    rows: Vec<RouteRow>,
}

#[derive(Debug, Serialize)]
struct PathReport {
    source: String,
    target: String,
    /// `null` when no path exists.
    distance: Option<i64>,
    path: Option<Vec<String>>,
}

/// Execute `aw route`.
pub fn run_route(args: &RouteArgs, mode: OutputMode, storage: Storage) -> anyhow::Result<()> {
    let mut graph = storage.new_graph();
    let query = import::import_path(&args.file, graph.as_mut())
        .with_context(|| format!("failed to import {}", args.file.display()))?;

    // A source on the command line wins; otherwise fall back to the
    // file's query, which then supplies the target as well.
    let (source, target) = match (&args.source, query) {
        (Some(source), _) => (source.clone(), args.target.clone()),
        (None, Some(q)) => (q.from, Some(q.to)),
        (None, None) => {
            bail!(
                "no source vertex: pass one on the command line or use a file with a trailing path query"
            )
        }
    };

    let sp = shortest_paths(graph.as_ref(), &source)
        .with_context(|| format!("cannot route from {source:?}"))?;

    match target {
        Some(target) => render_path(&sp, &source, &target, mode),
        None => render_table(&sp, &source, mode),
    }
}

fn render_path(
    sp: &ShortestPaths,
    source: &str,
    target: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let report = PathReport {
        source: source.to_string(),
        target: target.to_string(),
        distance: sp.distance(target).filter(|&d| d != NO_EDGE),
        path: sp.path_to(target),
    };
    render_out(mode, &report, |r, w| {
        match (&r.distance, &r.path) {
            (Some(distance), Some(path)) => {
                kv(w, "distance", distance.to_string())?;
                kv(w, "path", path.join(" -> "))?;
            }
            _ => {
                writeln!(w, "{} is unreachable from {}", r.target, r.source)?;
            }
        }
        Ok(())
    })
}

fn render_table(sp: &ShortestPaths, source: &str, mode: OutputMode) -> anyhow::Result<()> {
    let rows: Vec<RouteRow> = sp
        .distances()
        .iter()
        .map(|(vertex, &distance)| RouteRow {
            vertex: vertex.clone(),
            distance: (distance != NO_EDGE).then_some(distance),
            via: sp.predecessor(vertex).map(ToString::to_string),
        })
        .collect();
    let report = TableReport {
        source: source.to_string(),
        rows,
    };
    render_out(mode, &report, |r, w| {
        writeln!(w, "shortest paths from {}", r.source)?;
        writeln!(w, "{:<10} {:>10}  {}", "vertex", "distance", "via")?;
        for row in &r.rows {
            match row.distance {
                Some(d) => writeln!(
                    w,
                    "{:<10} {d:>10}  {}",
                    row.vertex,
                    row.via.as_deref().unwrap_or("-")
                )?,
                None => writeln!(w, "{:<10} {:>10}", row.vertex, "unreachable")?,
            }
        }
        Ok(())
    })
}
