//! `aw show` — import a graph file and print its canonical form.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use arcway_core::text::{import, render};
use clap::Args;
use serde::Serialize;

use crate::cmd::Storage;
use crate::output::{OutputMode, kv, render as render_out};

/// Arguments for `aw show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Graph file to load.
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
struct ShowReport {
    graph: String,
    vertices: usize,
    edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<String>,
}

/// Execute `aw show`.
pub fn run_show(args: &ShowArgs, mode: OutputMode, storage: Storage) -> anyhow::Result<()> {
    let mut graph = storage.new_graph();
    let query = import::import_path(&args.file, graph.as_mut())
        .with_context(|| format!("failed to import {}", args.file.display()))?;

    let vertices = graph.vertices();
    let edges = vertices.iter().map(|v| graph.successors(v).len()).sum();
    let report = ShowReport {
        graph: render::canonical(graph.as_ref()),
        vertices: vertices.len(),
        edges,
        query: query.map(|q| format!("{}-{}", q.from, q.to)),
    };

    render_out(mode, &report, |r, w| {
        writeln!(w, "{}", r.graph)?;
        kv(w, "vertices", r.vertices.to_string())?;
        kv(w, "edges", r.edges.to_string())?;
        if let Some(q) = &r.query {
            kv(w, "query", q)?;
        }
        Ok(())
    })
}
