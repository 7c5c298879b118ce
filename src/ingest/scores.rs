use super::Sheet;
use crate::error::{Result, ShowcaseError};
use crate::types::table::ScoreTable;
use std::path::Path;

/// Builds a score table from a judging sheet.
///
/// `index_column` supplies project labels. Every other column not listed in
/// `ignored` becomes a judge when all of its filled cells are numeric; other
/// columns (comments, tracks) are dropped. A judge column with an empty cell
/// is rejected rather than guessed.
pub fn read_scores(path: &Path, index_column: &str, ignored: &[String]) -> Result<ScoreTable> {
    let sheet = Sheet::read(path)?;
    let index = sheet.column(index_column)?;

    let mut judges = Vec::new();
    let mut judge_cols = Vec::new();
    for col in sheet.remaining_columns(index, ignored) {
        let header = &sheet.headers[col];
        if is_numeric_column(&sheet, col) {
            judges.push(header.to_string());
            judge_cols.push(col);
        } else {
            tracing::debug!(column = header, "dropping non-numeric column");
        }
    }

    let mut rows = Vec::with_capacity(sheet.records.len());
    for row in 0..sheet.records.len() {
        let project = sheet.cell(row, index).to_string();
        let mut scores = Vec::with_capacity(judge_cols.len());
        for (judge, &col) in judges.iter().zip(&judge_cols) {
            let cell = sheet.cell(row, col);
            if cell.is_empty() {
                return Err(ShowcaseError::MissingScore {
                    project,
                    judge: judge.clone(),
                });
            }
            scores.push(parse_number(&sheet, cell)?);
        }
        rows.push((project, scores));
    }

    tracing::info!(
        path = %path.display(),
        projects = rows.len(),
        judges = judges.len(),
        "loaded score sheet"
    );
    ScoreTable::new(judges, rows)
}

fn is_numeric_column(sheet: &Sheet, col: usize) -> bool {
    let mut filled = 0;
    for row in 0..sheet.records.len() {
        let cell = sheet.cell(row, col);
        if cell.is_empty() {
            continue;
        }
        if cell.parse::<f64>().is_err() {
            return false;
        }
        filled += 1;
    }
    filled > 0
}

fn parse_number(sheet: &Sheet, cell: &str) -> Result<f64> {
    cell.parse::<f64>()
        .map_err(|_| ShowcaseError::InvalidNumber {
            path: sheet.path.clone(),
            value: cell.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures::write_csv;
    use tempfile::TempDir;

    fn default_ignored() -> Vec<String> {
        vec!["Project Number".to_string()]
    }

    #[test]
    fn reads_numeric_judge_columns_and_drops_others() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write_csv(
            &dir,
            "scores.csv",
            "Project Name,Project Number,Track,Judge A,Judge B\n\
             Alpha,1,web,8,6\n\
             Beta,2,ml,4,9.5\n",
        );

        let table =
            read_scores(&path, "Project Name", &default_ignored()).expect("scores should load");
        assert_eq!(table.judges(), &["Judge A".to_string(), "Judge B".to_string()]);
        assert_eq!(table.projects(), &["Alpha".to_string(), "Beta".to_string()]);
        assert_eq!(table.get("Beta", "Judge B"), Some(9.5));
    }

    #[test]
    fn project_number_becomes_a_judge_when_not_ignored() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write_csv(
            &dir,
            "scores.csv",
            "Project Name,Project Number,Judge A\nAlpha,1,8\nBeta,2,4\n",
        );
        let table = read_scores(&path, "Project Name", &[]).expect("scores should load");
        assert_eq!(table.judge_count(), 2);
    }

    #[test]
    fn empty_cell_in_judge_column_is_rejected() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write_csv(
            &dir,
            "scores.csv",
            "Project Name,Judge A,Judge B\nAlpha,8,\nBeta,4,9\n",
        );
        let err = read_scores(&path, "Project Name", &default_ignored())
            .expect_err("missing score should fail");
        assert!(matches!(
            err,
            ShowcaseError::MissingScore { ref project, ref judge }
                if project == "Alpha" && judge == "Judge B"
        ));
    }

    #[test]
    fn missing_index_column_is_reported() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write_csv(&dir, "scores.csv", "Team,Judge A\nAlpha,8\n");
        let err = read_scores(&path, "Project Name", &default_ignored())
            .expect_err("index column should be required");
        assert!(err.to_string().contains("column not found"));
        assert!(err.to_string().contains("Project Name"));
    }

    #[test]
    fn sheet_without_judges_is_empty() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write_csv(&dir, "scores.csv", "Project Name,Notes\nAlpha,great\n");
        let err = read_scores(&path, "Project Name", &default_ignored())
            .expect_err("no judges should fail");
        assert!(matches!(err, ShowcaseError::EmptyTable(_)));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = read_scores(&dir.path().join("nope.csv"), "Project Name", &[])
            .expect_err("missing file should fail");
        assert!(matches!(err, ShowcaseError::PathNotFound(_)));
    }
}
