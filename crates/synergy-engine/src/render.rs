use crate::graph::SynergyGraph;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// A render failure never invalidates the graph; the same value can be
/// retried against another sink.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize graph: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// The node/edge schema handed to the external force-directed renderer,
/// stamped with its generation time.
#[derive(Serialize)]
pub struct GraphExport<'a> {
    pub generated_at: String,
    #[serde(flatten)]
    pub graph: &'a SynergyGraph,
}

pub fn to_json(graph: &SynergyGraph) -> Result<String, RenderError> {
    let export = GraphExport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        graph,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

/// Write a self-contained dark-mode HTML page: the graph data embedded in
/// a vis-network canvas with barnes-hut physics. Repulsion is turned up
/// because edge lines are thick.
pub fn write_html(graph: &SynergyGraph, path: &Path) -> Result<(), RenderError> {
    let data = to_json(graph)?;
    let page = HTML_TEMPLATE.replace("__GRAPH_DATA__", &data);
    std::fs::write(path, page)?;
    Ok(())
}

const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Chromatic Synergy Graph</title>
  <script src="https://unpkg.com/vis-network/standalone/umd/vis-network.min.js"></script>
  <style>
    body { margin: 0; background: #111111; color: #e0e0e0; font-family: monospace; }
    #graph { width: 100%; height: 100vh; }
  </style>
</head>
<body>
  <div id="graph"></div>
  <script>
    const data = __GRAPH_DATA__;
    const container = document.getElementById("graph");
    const network = new vis.Network(container, {
      nodes: new vis.DataSet(data.nodes),
      edges: new vis.DataSet(data.edges),
    }, {
      nodes: {
        shape: "dot",
        font: { color: "white", size: 16, strokeWidth: 4, strokeColor: "black" },
      },
      edges: { arrows: "to", smooth: { type: "continuous" } },
      physics: {
        barnesHut: {
          gravitationalConstant: -5000,
          centralGravity: 0.1,
          springLength: 250,
        },
      },
    });
  </script>
</body>
</html>
"#;
