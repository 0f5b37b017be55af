use std::path::Path;

use log::info;
use serde::Serialize;

use crate::KartFinderError;
use crate::finder::{Recommendation, Selections, recommend};

/// One line of a batch output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecord {
    pub selections: Selections,
    pub recommendation: Recommendation,
}

/// Load one `Selections` object per line from a JSON-lines file.
pub fn read_selections(source_file: &Path) -> Result<Vec<Selections>, KartFinderError> {
    let path = source_file.display().to_string();
    serde_jsonlines::json_lines(source_file)
        .map_err(|e| KartFinderError::BatchReadError {
            path: path.clone(),
            source: e,
        })?
        .collect::<Result<Vec<Selections>, std::io::Error>>()
        .map_err(|e| KartFinderError::BatchReadError { path, source: e })
}

/// Evaluate every selection in `input` and write the results to `output`,
/// one JSON record per line, in input order.
pub fn run_batch(input: &Path, output: &Path) -> Result<usize, KartFinderError> {
    let records: Vec<BatchRecord> = read_selections(input)?
        .into_iter()
        .map(|selections| BatchRecord {
            recommendation: recommend(&selections),
            selections,
        })
        .collect();

    serde_jsonlines::write_json_lines(output, &records).map_err(|e| {
        KartFinderError::BatchWriteError {
            path: output.display().to_string(),
            source: e,
        }
    })?;

    info!(
        "Evaluated {} selections from {:?} into {:?}",
        records.len(),
        input,
        output
    );
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Deserialize)]
    struct RecordSummary {
        selections: Selections,
        recommendation: serde_json::Value,
    }

    #[test]
    fn test_run_batch_writes_one_record_per_line() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("selections.jsonl");
        let output = temp_dir.path().join("results.jsonl");
        std::fs::write(
            &input,
            concat!(
                "{\"age\":\"5-7\",\"engine\":\"two-stroke\"}\n",
                "{\"age\":\"15+\",\"experience\":\"rental\",\"engine\":\"not-sure\",\"budget\":\"flexible\"}\n",
                "{}\n",
            ),
        )
        .unwrap();

        let count = run_batch(&input, &output).unwrap();
        assert_eq!(count, 3);

        let lines: Vec<RecordSummary> = serde_jsonlines::json_lines(&output)
            .unwrap()
            .collect::<Result<Vec<RecordSummary>, std::io::Error>>()
            .unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].selections.engine, Some(crate::finder::EnginePreference::TwoStroke));
        assert_eq!(lines[0].recommendation["classes"].as_array().unwrap().len(), 0);
        assert_eq!(lines[1].recommendation["engines"].as_array().unwrap().len(), 5);
        assert_eq!(lines[1].recommendation["engines"][0]["highlight"], true);
        assert_eq!(lines[2].selections, Selections::default());
    }

    #[test]
    fn test_malformed_line_fails_the_batch() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("selections.jsonl");
        std::fs::write(&input, "{\"age\":\"8-12\"}\nnot json\n").unwrap();

        let result = run_batch(&input, &temp_dir.path().join("out.jsonl"));
        assert!(matches!(
            result,
            Err(KartFinderError::BatchReadError { .. })
        ));
    }

    #[test]
    fn test_missing_input_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_selections(&temp_dir.path().join("missing.jsonl"));
        assert!(matches!(
            result,
            Err(KartFinderError::BatchReadError { .. })
        ));
    }
}
