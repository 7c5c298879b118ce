use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("empty table: {0}")]
    EmptyTable(String),

    #[error("ragged row for project '{project}': expected {expected} scores, found {found}")]
    RaggedRow {
        project: String,
        expected: usize,
        found: usize,
    },

    #[error("duplicate {axis} label: {label}")]
    DuplicateLabel { axis: &'static str, label: String },

    #[error("non-finite score for project '{project}', judge '{judge}'")]
    NonFiniteScore { project: String, judge: String },

    #[error("missing identifier in attendance: {0}")]
    MissingIdentifier(String),

    #[error("missing identifier in mapping: {0}")]
    MissingMapping(String),

    #[error("mapping is not injective: '{first}' and '{second}' both map to '{target}'")]
    DuplicateMappingTarget {
        first: String,
        second: String,
        target: String,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("column not found in {path}: {column}")]
    MissingColumn { path: String, column: String },

    #[error("missing score for project '{project}', judge '{judge}'")]
    MissingScore { project: String, judge: String },

    #[error("invalid number in {path}: {value}")]
    InvalidNumber { path: String, value: String },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
