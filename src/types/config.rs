use crate::adjust::blend::DEFAULT_ATTENDANCE_RATIO;
use crate::error::ShowcaseError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowcaseConfig {
    pub scoring: Option<ScoringConfig>,
    pub attendance: Option<AttendanceConfig>,
    pub columns: Option<ColumnsConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Kappa,
    Variance,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub method: Option<Method>,
    pub kappa: Option<f64>,
    pub normalize: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceConfig {
    pub ratio: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnsConfig {
    pub project_name: Option<String>,
    pub project_number: Option<String>,
    pub ignored: Option<Vec<String>>,
    #[serde(default)]
    pub attendance_ignored: Vec<String>,
}

/// Fully resolved settings after defaults are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub method: Method,
    pub kappa: f64,
    pub normalize: bool,
    pub attendance_ratio: f64,
    pub project_name: String,
    pub project_number: String,
    pub ignored: Vec<String>,
    pub attendance_ignored: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            method: Method::Kappa,
            kappa: 1.0,
            normalize: true,
            attendance_ratio: DEFAULT_ATTENDANCE_RATIO,
            project_name: "Project Name".to_string(),
            project_number: "Project Number".to_string(),
            ignored: vec!["Project Number".to_string()],
            attendance_ignored: Vec::new(),
        }
    }
}

impl ShowcaseConfig {
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        let scoring = self.scoring.as_ref();
        let columns = self.columns.as_ref();
        Settings {
            method: scoring
                .and_then(|scoring| scoring.method)
                .unwrap_or(defaults.method),
            kappa: scoring
                .and_then(|scoring| scoring.kappa)
                .unwrap_or(defaults.kappa),
            normalize: scoring
                .and_then(|scoring| scoring.normalize)
                .unwrap_or(defaults.normalize),
            attendance_ratio: self
                .attendance
                .as_ref()
                .and_then(|attendance| attendance.ratio)
                .unwrap_or(defaults.attendance_ratio),
            project_name: columns
                .and_then(|columns| columns.project_name.clone())
                .unwrap_or(defaults.project_name),
            project_number: columns
                .and_then(|columns| columns.project_number.clone())
                .unwrap_or(defaults.project_number),
            ignored: columns
                .and_then(|columns| columns.ignored.clone())
                .unwrap_or(defaults.ignored),
            attendance_ignored: columns
                .map(|columns| columns.attendance_ignored.clone())
                .unwrap_or(defaults.attendance_ignored),
        }
    }

    pub fn validate(&self) -> Result<(), ShowcaseError> {
        let settings = self.settings();

        if !settings.kappa.is_finite() || settings.kappa < 0.0 {
            return Err(ShowcaseError::ConfigParse(format!(
                "scoring.kappa must be a non-negative finite number (found {})",
                settings.kappa
            )));
        }
        if !(0.0..=1.0).contains(&settings.attendance_ratio) {
            return Err(ShowcaseError::ConfigParse(
                "attendance.ratio must be between 0.0 and 1.0".to_string(),
            ));
        }

        for (key, value) in [
            ("columns.project_name", &settings.project_name),
            ("columns.project_number", &settings.project_number),
        ] {
            if value.trim().is_empty() {
                return Err(ShowcaseError::ConfigParse(format!(
                    "{key} must be a non-empty column name"
                )));
            }
        }
        for (key, names) in [
            ("columns.ignored", &settings.ignored),
            ("columns.attendance_ignored", &settings.attendance_ignored),
        ] {
            if names.iter().any(|name| name.trim().is_empty()) {
                return Err(ShowcaseError::ConfigParse(format!(
                    "{key} entries must be non-empty column names"
                )));
            }
        }

        Ok(())
    }
}
