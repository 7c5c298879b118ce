use crate::types::report::Ranking;

pub fn to_markdown(ranking: &Ranking) -> String {
    let mut output = String::new();
    output.push_str("# Showcase Ranking\n\n");
    output.push_str(&format!("Method: {}\n", ranking.method));
    if let Some(kappa) = ranking.kappa {
        output.push_str(&format!("Kappa: {kappa}\n"));
    }
    output.push_str(&format!("Normalized: {}\n", ranking.normalized));
    if let Some(ratio) = ranking.attendance_ratio {
        output.push_str(&format!("Attendance ratio: {ratio:.2}\n"));
    }
    output.push_str(&format!("Input sha256: {}\n\n", ranking.input_sha256));

    if !ranking.warnings.is_empty() {
        output.push_str("## Warnings\n\n");
        for warning in &ranking.warnings {
            output.push_str(&format!("- {warning}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Projects\n\n");
    if ranking.entries.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    output.push_str("| Rank | Project | Score |\n");
    output.push_str("|-----:|---------|------:|\n");
    for entry in &ranking.entries {
        output.push_str(&format!(
            "| {} | {} | {:.4} |\n",
            entry.rank,
            entry.project.replace('|', "\\|"),
            entry.score
        ));
    }

    output
}
