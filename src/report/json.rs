use crate::types::report::Ranking;

pub fn to_json(ranking: &Ranking) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(ranking)
}
