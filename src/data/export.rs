use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use super::analysis::SpectrumAnalysis;
use super::model::{Archetype, FilterKind};

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct CsvRow {
    wavelength_nm: f64,
    raw: f64,
    filtered: f64,
}

/// Write one row per sample: `wavelength_nm,raw,filtered`.
pub fn write_csv<W: Write>(analysis: &SpectrumAnalysis, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let rows = analysis
        .raw
        .wavelengths
        .iter()
        .zip(&analysis.raw.intensities)
        .zip(&analysis.filtered);
    for ((&wavelength_nm, &raw), &filtered) in rows {
        csv_writer
            .serialize(CsvRow {
                wavelength_nm,
                raw,
                filtered,
            })
            .context("writing CSV row")?;
    }
    csv_writer.flush().context("flushing CSV output")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct JsonReport<'a> {
    archetype: Archetype,
    filter: FilterKind,
    wavelengths: &'a [f64],
    raw: &'a [f64],
    filtered: &'a [f64],
}

/// Write the analysis as a single pretty-printed JSON object.
///
/// ```json
/// {
///   "archetype": "emission",
///   "filter": "gaussian",
///   "wavelengths": [300.0, 307.0, ...],
///   "raw": [...],
///   "filtered": [...]
/// }
/// ```
pub fn write_json<W: Write>(analysis: &SpectrumAnalysis, mut writer: W) -> Result<()> {
    let report = JsonReport {
        archetype: analysis.archetype,
        filter: analysis.filter,
        wavelengths: &analysis.raw.wavelengths,
        raw: &analysis.raw.intensities,
        filtered: &analysis.filtered,
    };
    serde_json::to_writer_pretty(&mut writer, &report).context("serializing JSON report")?;
    writeln!(writer).context("writing JSON report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value as JsonValue;

    use super::*;
    use crate::data::model::Spectrum;

    fn sample() -> SpectrumAnalysis {
        SpectrumAnalysis {
            archetype: Archetype::Absorption,
            filter: FilterKind::Kalman,
            raw: Spectrum {
                wavelengths: vec![300.0, 307.0],
                intensities: vec![1.0, 2.0],
            },
            filtered: vec![1.0, 1.75],
        }
    }

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let mut out = Vec::new();
        write_csv(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["wavelength_nm,raw,filtered", "300.0,1.0,1.0", "307.0,2.0,1.75"]);
    }

    #[test]
    fn json_report_round_trips_through_value() {
        let mut out = Vec::new();
        write_json(&sample(), &mut out).unwrap();
        let value: JsonValue = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["archetype"], "absorption");
        assert_eq!(value["filter"], "kalman");
        assert_eq!(value["filtered"][1], 1.75);
        assert_eq!(value["wavelengths"].as_array().unwrap().len(), 2);
    }
}
