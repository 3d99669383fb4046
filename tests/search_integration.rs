//! End-to-end scenarios for the ensemble search pipeline

use approx::assert_relative_eq;
use ensamblar::io::{load_ground_truth, load_predictions, records_to_csv};
use ensamblar::{
    EnsembleSearch, Error, GroundTruth, PredictionStore, SearchConfig,
};
use ndarray::array;
use std::fs;
use tempfile::TempDir;

fn search(arity: usize) -> EnsembleSearch {
    EnsembleSearch::new(SearchConfig {
        arity,
        ..Default::default()
    })
}

#[test]
fn scenario_two_models_perfect_ensemble() {
    // pool = {m1: [[0.2],[0.8]], m2: [[0.4],[0.6]]}, truth = [[0],[1]], k=2
    let mut store = PredictionStore::new();
    store.insert("m1", array![[0.2], [0.8]]).unwrap();
    store.insert("m2", array![[0.4], [0.6]]).unwrap();
    let truth = GroundTruth::new(vec!["Finding".into()], array![[0], [1]]).unwrap();

    let outcome = search(2).run(&store, &truth).unwrap();
    assert_eq!(outcome.leaderboard.len(), 1);
    assert!(outcome.skips.is_empty());

    let record = &outcome.leaderboard.records()[0];
    // combined = [[0.3], [0.7]]
    assert_relative_eq!(record.auc, 1.0);
    assert!(record.threshold > 0.3 && record.threshold <= 0.7);
    assert_relative_eq!(record.accuracy, 1.0);
    assert_relative_eq!(record.f1, 1.0);
    assert_relative_eq!(record.accuracy_dummy, 0.5);
    assert_relative_eq!(record.f1_dummy, 2.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn scenario_arity_equals_pool() {
    let mut store = PredictionStore::new();
    for id in ["m1", "m2", "m3"] {
        store.insert(id, array![[0.2], [0.8]]).unwrap();
    }
    let truth = GroundTruth::new(vec!["Finding".into()], array![[0], [1]]).unwrap();

    let outcome = search(3).run(&store, &truth).unwrap();
    assert_eq!(outcome.leaderboard.len(), 1);
    assert_eq!(
        outcome.leaderboard.records()[0].members,
        vec!["m1", "m2", "m3"]
    );
}

#[test]
fn scenario_arity_exceeds_pool() {
    let mut store = PredictionStore::new();
    store.insert("m1", array![[0.2], [0.8]]).unwrap();
    store.insert("m2", array![[0.4], [0.6]]).unwrap();
    let truth = GroundTruth::new(vec!["Finding".into()], array![[0], [1]]).unwrap();

    let err = search(3).run(&store, &truth).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidArity {
            arity: 3,
            pool_size: 2
        }
    ));
}

#[test]
fn degenerate_labels_skip_without_aborting() {
    let mut store = PredictionStore::new();
    store
        .insert("m1", array![[0.2, 0.1, 0.9], [0.8, 0.2, 0.8], [0.5, 0.3, 0.7]])
        .unwrap();
    store
        .insert("m2", array![[0.3, 0.2, 0.8], [0.7, 0.1, 0.9], [0.4, 0.4, 0.6]])
        .unwrap();
    // Columns: mixed, all-zero, all-one
    let truth = GroundTruth::new(
        vec!["Edema".into(), "Fracture".into(), "Support Devices".into()],
        array![[0, 0, 1], [1, 0, 1], [1, 0, 1]],
    )
    .unwrap();

    let outcome = search(2).run(&store, &truth).unwrap();
    assert_eq!(outcome.leaderboard.len(), 1);
    assert_eq!(outcome.leaderboard.records()[0].label, "Edema");
    assert_eq!(outcome.skips.len(), 2);
    assert!(outcome
        .skips
        .iter()
        .any(|s| s.label.as_deref() == Some("Fracture")
            && matches!(s.error, Error::UndefinedMetric { class: 0 })));
    assert!(outcome
        .skips
        .iter()
        .any(|s| s.label.as_deref() == Some("Support Devices")
            && matches!(s.error, Error::UndefinedMetric { class: 1 })));
}

#[test]
fn repeated_sweeps_bit_identical() {
    let mut store = PredictionStore::new();
    let matrices = [
        array![[0.11, 0.92], [0.48, 0.27], [0.83, 0.64], [0.29, 0.55]],
        array![[0.41, 0.73], [0.52, 0.19], [0.66, 0.88], [0.14, 0.37]],
        array![[0.25, 0.58], [0.91, 0.42], [0.33, 0.76], [0.69, 0.21]],
        array![[0.57, 0.36], [0.18, 0.81], [0.74, 0.49], [0.95, 0.62]],
    ];
    for (i, m) in matrices.iter().enumerate() {
        store.insert(format!("m{i}"), m.clone()).unwrap();
    }
    let truth = GroundTruth::new(
        vec!["Edema".into(), "Cardiomegaly".into()],
        array![[0, 1], [1, 0], [1, 1], [0, 0]],
    )
    .unwrap();

    let first = search(3).run(&store, &truth).unwrap();
    let second = search(3).run(&store, &truth).unwrap();
    assert_eq!(first.leaderboard.records(), second.leaderboard.records());

    // Ranking is equally reproducible
    let mut a = first.leaderboard;
    let mut b = second.leaderboard;
    a.rank();
    b.rank();
    assert_eq!(a.records(), b.records());
}

#[test]
fn limit_preserves_emitted_rows() {
    let mut store = PredictionStore::new();
    for id in ["a", "b", "c", "d", "e"] {
        store.insert(id, array![[0.2], [0.8], [0.4]]).unwrap();
    }
    let truth = GroundTruth::new(vec!["Finding".into()], array![[0], [1], [0]]).unwrap();

    let full = search(2).run(&store, &truth).unwrap();
    let limited = EnsembleSearch::new(SearchConfig {
        arity: 2,
        limit: Some(4),
        ..Default::default()
    })
    .run(&store, &truth)
    .unwrap();

    // The limited sweep is a prefix of the full sweep, rows intact
    assert_eq!(limited.leaderboard.len(), 4);
    assert_eq!(
        limited.leaderboard.records(),
        &full.leaderboard.records()[..4]
    );
}

#[test]
fn csv_files_to_ranked_export() {
    let dir = TempDir::new().unwrap();
    let truth_path = dir.path().join("valid.csv");
    fs::write(&truth_path, "Edema,Cardiomegaly\n0,1\n1,0\n1,1\n0,0\n").unwrap();

    let models = dir.path().join("predictions");
    fs::create_dir(&models).unwrap();
    fs::write(
        models.join("densenet.csv"),
        "Edema,Cardiomegaly\n0.10,0.80\n0.75,0.20\n0.85,0.90\n0.30,0.15\n",
    )
    .unwrap();
    fs::write(
        models.join("mobilenet.csv"),
        "Edema,Cardiomegaly\n0.25,0.70\n0.60,0.35\n0.70,0.75\n0.20,0.25\n",
    )
    .unwrap();
    fs::write(
        models.join("resnet.csv"),
        "Edema,Cardiomegaly\n0.15,0.85\n0.80,0.10\n0.90,0.80\n0.10,0.30\n",
    )
    .unwrap();

    let truth = load_ground_truth(&truth_path).unwrap();
    let store = load_predictions(&models, &truth).unwrap();
    assert_eq!(store.len(), 3);

    let outcome = search(3).run(&store, &truth).unwrap();
    // One combination, two labels
    assert_eq!(outcome.leaderboard.len(), 2);

    let mut leaderboard = outcome.leaderboard;
    leaderboard.rank();
    let csv = records_to_csv(leaderboard.records()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "ensemble,label,auc,threshold,accuracy_dummy,accuracy,f1_dummy,f1"
    );
    // Ranked label-ascending: Cardiomegaly before Edema
    assert!(lines[1].starts_with("densenet+mobilenet+resnet,Cardiomegaly"));
    assert!(lines[2].starts_with("densenet+mobilenet+resnet,Edema"));
}

#[test]
fn parallel_sweep_equals_sequential() {
    let mut store = PredictionStore::new();
    for (i, base) in [0.12f64, 0.37, 0.58, 0.81, 0.29, 0.64].iter().enumerate() {
        let m = array![
            [*base, 1.0 - base],
            [base * 0.5, base * 0.9],
            [1.0 - base * 0.3, *base],
            [base * 0.7, 1.0 - base * 0.6]
        ];
        store.insert(format!("m{i}"), m).unwrap();
    }
    let truth = GroundTruth::new(
        vec!["Edema".into(), "Cardiomegaly".into()],
        array![[0, 1], [1, 0], [0, 1], [1, 1]],
    )
    .unwrap();

    let sequential = EnsembleSearch::new(SearchConfig {
        arity: 4,
        ..Default::default()
    })
    .run(&store, &truth)
    .unwrap();
    let parallel = EnsembleSearch::new(SearchConfig {
        arity: 4,
        parallel: true,
        ..Default::default()
    })
    .run(&store, &truth)
    .unwrap();

    assert_eq!(
        sequential.leaderboard.records(),
        parallel.leaderboard.records()
    );
}
