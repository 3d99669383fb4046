//! Leaderboard accumulating scored ensemble rows
//!
//! Rows are append-only: a published record is never mutated, so a sweep
//! stopped early still leaves a valid board. Ranking is an explicit,
//! deterministic sort rather than a side effect of insertion.

use super::record::EnsembleRecord;
use std::fmt;

/// Accumulated (ensemble, label) rows for reporting
#[derive(Clone, Debug, Default)]
pub struct Leaderboard {
    records: Vec<EnsembleRecord>,
}

impl Leaderboard {
    /// Create an empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fully-constructed row
    pub fn push(&mut self, record: EnsembleRecord) {
        self.records.push(record);
    }

    /// Append many rows, preserving their order
    pub fn extend(&mut self, records: impl IntoIterator<Item = EnsembleRecord>) {
        self.records.extend(records);
    }

    /// All rows in current order
    pub fn records(&self) -> &[EnsembleRecord] {
        &self.records
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no row has been published
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rank rows: label ascending, then AUC descending, then members
    ///
    /// Total and deterministic; `f64::total_cmp` keeps equal-AUC rows in a
    /// reproducible order across runs.
    pub fn rank(&mut self) {
        self.records.sort_by(|a, b| {
            a.label
                .cmp(&b.label)
                .then_with(|| b.auc.total_cmp(&a.auc))
                .then_with(|| a.members.cmp(&b.members))
        });
    }

    /// Highest-AUC row for a label, ties resolved by member order
    pub fn best_for_label(&self, label: &str) -> Option<&EnsembleRecord> {
        self.records
            .iter()
            .filter(|r| r.label == label)
            .min_by(|a, b| b.auc.total_cmp(&a.auc).then_with(|| a.members.cmp(&b.members)))
    }

    /// Distinct labels in first-appearance order
    pub fn labels(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.label.as_str()) {
                seen.push(record.label.as_str());
            }
        }
        seen
    }

    /// Keep only the `n` best rows per label (by the ranking order)
    pub fn retain_top(&mut self, n: usize) {
        self.rank();
        let mut kept = Vec::new();
        let mut current_label: Option<&str> = None;
        let mut count = 0usize;
        for record in &self.records {
            if current_label != Some(record.label.as_str()) {
                current_label = Some(record.label.as_str());
                count = 0;
            }
            if count < n {
                kept.push(record.clone());
                count += 1;
            }
        }
        self.records = kept;
    }

    /// Export as a markdown table
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("| Ensemble | Label | AUC | Threshold | Acc (dummy) | Acc | F1 (dummy) | F1 |\n");
        md.push_str("|----------|-------|-----|-----------|-------------|-----|------------|----|\n");
        for r in &self.records {
            md.push_str(&format!(
                "| {} | {} | {:.4} | {:.4} | {:.4} | {:.4} | {:.4} | {:.4} |\n",
                r.ensemble_name(),
                r.label,
                r.auc,
                r.threshold,
                r.accuracy_dummy,
                r.accuracy,
                r.f1_dummy,
                r.f1
            ));
        }
        md
    }
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return writeln!(f, "Leaderboard: (empty)");
        }

        let ensemble_width = self
            .records
            .iter()
            .map(|r| r.ensemble_name().len())
            .max()
            .unwrap_or(8)
            .max(8);
        let label_width = self
            .records
            .iter()
            .map(|r| r.label.len())
            .max()
            .unwrap_or(5)
            .max(5);

        writeln!(
            f,
            "┌{:─<ew$}┬{:─<lw$}┬────────┬───────────┬────────────┬────────┬───────────┬────────┐",
            "",
            "",
            ew = ensemble_width + 2,
            lw = label_width + 2
        )?;
        writeln!(
            f,
            "│ {:ew$} │ {:lw$} │ {:>6} │ {:>9} │ {:>10} │ {:>6} │ {:>9} │ {:>6} │",
            "Ensemble",
            "Label",
            "AUC",
            "Threshold",
            "Acc(dummy)",
            "Acc",
            "F1(dummy)",
            "F1",
            ew = ensemble_width,
            lw = label_width
        )?;
        writeln!(
            f,
            "├{:─<ew$}┼{:─<lw$}┼────────┼───────────┼────────────┼────────┼───────────┼────────┤",
            "",
            "",
            ew = ensemble_width + 2,
            lw = label_width + 2
        )?;
        for r in &self.records {
            writeln!(
                f,
                "│ {:ew$} │ {:lw$} │ {:>6.4} │ {:>9.4} │ {:>10.4} │ {:>6.4} │ {:>9.4} │ {:>6.4} │",
                r.ensemble_name(),
                r.label,
                r.auc,
                r.threshold,
                r.accuracy_dummy,
                r.accuracy,
                r.f1_dummy,
                r.f1,
                ew = ensemble_width,
                lw = label_width
            )?;
        }
        writeln!(
            f,
            "└{:─<ew$}┴{:─<lw$}┴────────┴───────────┴────────────┴────────┴───────────┴────────┘",
            "",
            "",
            ew = ensemble_width + 2,
            lw = label_width + 2
        )?;
        Ok(())
    }
}
