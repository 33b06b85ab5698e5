use crate::dispatch::read_package;
use crate::error::WorkoutError;
use crate::types::Package;
use crate::{dlog, summary};
use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Readings processed when no packages file is given.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub printed: usize,
    pub failed: usize,
}

/// Build and print one summary line per package, in order.
///
/// Without `keep_going` the first bad package aborts the run; lines already
/// written stay written.
pub fn run<W: Write>(packages: &[Package], keep_going: bool, out: &mut W) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for (i, p) in packages.iter().enumerate() {
        let training = match read_package(&p.workout_type, &p.data) {
            Ok(t) => t,
            Err(e) if keep_going => {
                tracing::error!(index = i, code = %p.workout_type, err = %e, "skipping package");
                report.failed += 1;
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("package #{} ({})", i + 1, p.workout_type));
            }
        };

        let line = summary::render_summary(training.name(), training.as_ref());
        writeln!(out, "{line}").context("writing summary line")?;
        report.printed += 1;
    }

    dlog!(
        "batch done printed={} failed={}",
        report.printed,
        report.failed
    );
    Ok(report)
}

/// Read packages from a JSON array.
///
/// Entries are either `["RUN", [15000, 1, 75]]` or
/// `{"workout_type": "RUN", "data": [15000, 1, 75]}`.
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let shown = path.display();
    let text = fs::read_to_string(path).with_context(|| format!("reading packages: {shown}"))?;
    let json: JsonValue =
        serde_json::from_str(&text).with_context(|| format!("parsing packages JSON: {shown}"))?;

    let Some(entries) = json.as_array() else {
        bail!("packages file must contain a JSON array: {shown}");
    };

    let mut out = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let pkg = parse_entry(entry).with_context(|| format!("entry #{} in {shown}", i + 1))?;
        out.push(pkg);
    }

    tracing::info!(path = %shown, packages = out.len(), "loaded packages");
    Ok(out)
}

fn parse_entry(entry: &JsonValue) -> Result<Package> {
    let (code, data) = match entry {
        JsonValue::Array(pair) if pair.len() == 2 => (&pair[0], &pair[1]),
        JsonValue::Object(obj) => {
            let Some(code) = obj.get("workout_type") else {
                bail!("missing \"workout_type\"");
            };
            let Some(data) = obj.get("data") else {
                bail!("missing \"data\"");
            };
            (code, data)
        }
        _ => bail!("expected [code, [values...]] or {{\"workout_type\", \"data\"}}"),
    };

    let Some(code) = code.as_str() else {
        bail!("workout type must be a string, got {code}");
    };
    let Some(values) = data.as_array() else {
        bail!("data must be an array, got {data}");
    };

    let data = values
        .iter()
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| WorkoutError::malformed(code, format!("нечисловое значение {v}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Package::new(code, data))
}
