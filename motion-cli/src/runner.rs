//! Runs one generation mode end to end.
//!
//! Each entry point owns the random source for its run, loads the input (if
//! any), assembles the full trace in memory and only then creates the
//! output file, so a failed run leaves no partial document behind.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use motion_core::config::{BrownianConfig, TransportConfig};
use motion_core::rng::create_rng;
use motion_core::simulation::{generate_brownian, generate_transport};
use motion_core::trace::Trace;
use motion_core::xml::{read_network, write_trace};
use tracing::info;

/// Generates a random-walk trace and writes it to `output`.
pub fn brownian(cfg: &BrownianConfig, output: &Path, seed: u64) -> Result<()> {
    let mut rng = create_rng(seed);
    let trace = generate_brownian(cfg, &mut rng).context("random-walk generation failed")?;
    save(&trace, output)
}

/// Loads the transport graph from `input`, generates a trace on it and
/// writes the trace to `output`.
pub fn transport(input: &Path, output: &Path, cfg: &TransportConfig, seed: u64) -> Result<()> {
    let file =
        File::open(input).with_context(|| format!("Failed to open {}", input.display()))?;
    let network = read_network(BufReader::new(file))
        .with_context(|| format!("Failed to read transport graph {}", input.display()))?;

    let mut rng = create_rng(seed);
    let trace =
        generate_transport(network, cfg, &mut rng).context("transport generation failed")?;
    save(&trace, output)
}

fn save(trace: &Trace, output: &Path) -> Result<()> {
    let file =
        File::create(output).with_context(|| format!("Failed to create {}", output.display()))?;
    write_trace(trace, BufWriter::new(file))
        .with_context(|| format!("Failed to write trace to {}", output.display()))?;

    info!(
        path = %output.display(),
        generations = trace.generations.len(),
        "trace written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const NETWORK: &str = r#"<field width="400" height="400">
  <node id="depot" x="0" y="0"/>
  <node id="mall" x="300" y="0"/>
  <node id="park" x="300" y="300"/>
  <edge from="depot" to="mall"/>
  <edge from="mall" to="park"/>
  <edge from="park" to="depot"/>
</field>"#;

    #[test]
    fn brownian_writes_reproducible_document() {
        let dir = TempDir::new().unwrap();
        let cfg = BrownianConfig {
            width: 100,
            height: 100,
            node_count: 3,
            generation_count: 1,
        };
        let first = dir.path().join("first.xml");
        let second = dir.path().join("second.xml");

        brownian(&cfg, &first, 17).unwrap();
        brownian(&cfg, &second, 17).unwrap();

        let text = fs::read_to_string(&first).unwrap();
        assert!(text.contains(r#"<gen n="1">"#));
        assert_eq!(text.matches("<node ").count(), 3);
        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn transport_reads_graph_and_writes_trace() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("graph.xml");
        let output = dir.path().join("trace.xml");
        fs::write(&input, NETWORK).unwrap();
        let cfg = TransportConfig {
            node_count: 4,
            generation_count: 12,
        };

        transport(&input, &output, &cfg, 3).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains(r#"<field width="400" height="400" generationCount="12">"#));
        assert_eq!(text.matches("<gen ").count(), 12);
        assert_eq!(text.matches("<node ").count(), 48);
    }

    #[test]
    fn failed_transport_run_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("graph.xml");
        let output = dir.path().join("trace.xml");
        fs::write(
            &input,
            r#"<field width="10" height="10"><node id="a" x="0" y="0"/></field>"#,
        )
        .unwrap();
        let cfg = TransportConfig {
            node_count: 1,
            generation_count: 3,
        };

        let err = transport(&input, &output, &cfg, 3).unwrap_err();

        assert!(format!("{err:#}").contains("no outgoing edges"));
        assert!(!output.exists());
    }
}
