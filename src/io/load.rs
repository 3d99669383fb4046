//! Loading prediction pools and ground truth from CSV
//!
//! Every file carries a header row naming the labels. The ground-truth
//! file holds {0,1} cells; each prediction file holds probabilities in
//! [0,1] and its file stem becomes the model id. Prediction files are
//! ingested in sorted filename order so pool enumeration stays
//! deterministic across filesystems.

use crate::error::{Error, Result};
use crate::store::{GroundTruth, PredictionStore};
use csv::ReaderBuilder;
use ndarray::Array2;
use std::path::Path;

/// Read a CSV table: header names plus row cells as strings
fn read_table(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok((header, rows))
}

fn file_name(path: &Path) -> String {
    path.display().to_string()
}

/// Load the ground-truth matrix and label names
pub fn load_ground_truth(path: &Path) -> Result<GroundTruth> {
    let (labels, rows) = read_table(path)?;
    let n_rows = rows.len();
    let n_cols = labels.len();
    let mut cells = Vec::with_capacity(n_rows * n_cols);
    for (row_idx, row) in rows.iter().enumerate() {
        for cell in row {
            let value: u8 = cell.trim().parse().map_err(|_| Error::Parse {
                file: file_name(path),
                line: row_idx + 2,
                value: cell.clone(),
            })?;
            cells.push(value);
        }
    }
    let values = Array2::from_shape_vec((n_rows, n_cols), cells)
        .expect("row-major cells match table dimensions");
    GroundTruth::new(labels, values)
}

/// Load one model's score matrix, checking its header against the truth
pub fn load_prediction_matrix(path: &Path, truth: &GroundTruth) -> Result<Array2<f64>> {
    let (header, rows) = read_table(path)?;
    if header != truth.labels() {
        return Err(Error::HeaderMismatch {
            file: file_name(path),
        });
    }
    let n_rows = rows.len();
    let n_cols = header.len();
    let mut cells = Vec::with_capacity(n_rows * n_cols);
    for (row_idx, row) in rows.iter().enumerate() {
        for cell in row {
            let value: f64 = cell.trim().parse().map_err(|_| Error::Parse {
                file: file_name(path),
                line: row_idx + 2,
                value: cell.clone(),
            })?;
            cells.push(value);
        }
    }
    Ok(Array2::from_shape_vec((n_rows, n_cols), cells)
        .expect("row-major cells match table dimensions"))
}

/// Load every `*.csv` in a directory into a prediction pool
///
/// Model ids are file stems; files are visited in sorted order. Range and
/// duplicate validation happens at [`PredictionStore::insert`].
pub fn load_predictions(dir: &Path, truth: &GroundTruth) -> Result<PredictionStore> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("csv"))
        .collect();
    paths.sort();

    let mut store = PredictionStore::new();
    for path in &paths {
        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let scores = load_prediction_matrix(path, truth)?;
        store.insert(id, scores)?;
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_ground_truth() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "valid.csv", "Edema,Cardiomegaly\n0,1\n1,0\n1,1\n");
        let truth = load_ground_truth(&path).unwrap();
        assert_eq!(truth.labels(), &["Edema", "Cardiomegaly"]);
        assert_eq!(truth.shape(), (3, 2));
        assert_eq!(truth.column(1).to_vec(), vec![1, 0, 1]);
    }

    #[test]
    fn test_ground_truth_rejects_non_integer() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "valid.csv", "Edema\n0\nmaybe\n");
        let err = load_ground_truth(&path).unwrap_err();
        match err {
            Error::Parse { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "maybe");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_load_prediction_matrix() {
        let dir = TempDir::new().unwrap();
        let truth_path = write_file(&dir, "valid.csv", "Edema\n0\n1\n");
        let truth = load_ground_truth(&truth_path).unwrap();
        let pred_path = write_file(&dir, "densenet.csv", "Edema\n0.25\n0.75\n");
        let matrix = load_prediction_matrix(&pred_path, &truth).unwrap();
        assert_eq!(matrix.dim(), (2, 1));
        assert!((matrix[[1, 0]] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_header_mismatch_rejected() {
        let dir = TempDir::new().unwrap();
        let truth_path = write_file(&dir, "valid.csv", "Edema\n0\n1\n");
        let truth = load_ground_truth(&truth_path).unwrap();
        let pred_path = write_file(&dir, "densenet.csv", "Atelectasis\n0.25\n0.75\n");
        let err = load_prediction_matrix(&pred_path, &truth).unwrap_err();
        assert!(matches!(err, Error::HeaderMismatch { .. }));
    }

    #[test]
    fn test_load_predictions_sorted_by_filename() {
        let dir = TempDir::new().unwrap();
        let truth_path = write_file(&dir, "valid.csv", "Edema\n0\n1\n");
        let truth = load_ground_truth(&truth_path).unwrap();

        let models = TempDir::new().unwrap();
        write_file(&models, "resnet.csv", "Edema\n0.5\n0.6\n");
        write_file(&models, "densenet.csv", "Edema\n0.2\n0.8\n");
        write_file(&models, "notes.txt", "not a prediction file");

        let store = load_predictions(models.path(), &truth).unwrap();
        let ids: Vec<&str> = store.ids().collect();
        assert_eq!(ids, vec!["densenet", "resnet"]);
    }

    #[test]
    fn test_load_predictions_propagates_range_error() {
        let dir = TempDir::new().unwrap();
        let truth_path = write_file(&dir, "valid.csv", "Edema\n0\n1\n");
        let truth = load_ground_truth(&truth_path).unwrap();

        let models = TempDir::new().unwrap();
        write_file(&models, "bad.csv", "Edema\n1.5\n0.2\n");
        let err = load_predictions(models.path(), &truth).unwrap_err();
        assert!(matches!(err, Error::ScoreOutOfRange { .. }));
    }
}
