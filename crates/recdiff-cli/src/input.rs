use std::fs;
use std::io::{self, Read};

use anyhow::{bail, Context};
use recdiff_types::Value;

const STDIN: &str = "-";

/// Read and parse each input document, in order.
///
/// At most one input may be read from stdin.
pub fn load_all(inputs: &[String]) -> anyhow::Result<Vec<Value>> {
    if inputs.iter().filter(|p| p.as_str() == STDIN).count() > 1 {
        bail!("stdin (`-`) can be used for at most one input");
    }
    inputs.iter().map(|p| load(p)).collect()
}

fn load(path: &str) -> anyhow::Result<Value> {
    let text = if path == STDIN {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {path}"))?
    };
    parse(&text).with_context(|| format!("parsing {path}"))
}

fn parse(text: &str) -> anyhow::Result<Value> {
    Ok(serde_json::from_str(text)?)
}
