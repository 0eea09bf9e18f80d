//! Markdown rendering of a validation report. Presentation only; every fact
//! comes from the structured report.

use crossroad_core::{Confidence, ValidationReport};
use std::fmt::Write;

fn confidence_label(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::High => "High",
        Confidence::Medium => "Medium",
        Confidence::Low => "Low",
    }
}

/// Renders the full report as a markdown document.
pub fn render_markdown(report: &ValidationReport) -> String {
    let mut out = String::new();
    let explanation = &report.explanation;

    let _ = writeln!(out, "# Career Recommendation\n");
    let _ = writeln!(out, "{}\n", explanation.summary);
    let _ = writeln!(
        out,
        "**Confidence:** {}\n",
        confidence_label(report.final_confidence)
    );

    if !explanation.pros.is_empty() {
        let _ = writeln!(out, "## Why this path\n");
        for pro in &explanation.pros {
            let _ = writeln!(out, "- {}", pro);
        }
        let _ = writeln!(out);
    }
    if !explanation.cons.is_empty() {
        let _ = writeln!(out, "## Watch out for\n");
        for con in &explanation.cons {
            let _ = writeln!(out, "- {}", con);
        }
        let _ = writeln!(out);
    }

    if !explanation.source_findings.is_empty() {
        let _ = writeln!(out, "## Expert findings\n");
        for finding in &explanation.source_findings {
            let _ = writeln!(
                out,
                "- `{}` on **{}** ({:.2}): {}",
                finding.source_id,
                finding.path.display_name(),
                finding.score,
                finding.rationale
            );
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "## Five-year outlook\n");
    for outlook in &explanation.simulation {
        match (&outlook.result, &outlook.unavailable_reason) {
            (Some(result), _) => {
                let _ = write!(
                    out,
                    "- **{}**: salary {:+.1}% over {} years, satisfaction {:.1}/10, \
                     stability {:.0}%, success probability {:.0}%",
                    outlook.path.display_name(),
                    result.salary_growth_mean_pct,
                    result.horizon_years,
                    result.satisfaction_mean,
                    result.stability_mean * 100.0,
                    result.success_probability * 100.0,
                );
                if let (Some(best), Some(worst)) = (&outlook.best_case, &outlook.worst_case) {
                    let _ = write!(
                        out,
                        " (salary range {:+.1}% to {:+.1}% across scenarios)",
                        worst.salary_growth_mean_pct, best.salary_growth_mean_pct,
                    );
                }
                let _ = writeln!(out);
            }
            (None, reason) => {
                let _ = writeln!(
                    out,
                    "- **{}**: projection unavailable ({})",
                    outlook.path.display_name(),
                    reason.as_deref().unwrap_or("unknown"),
                );
            }
        }
    }
    let _ = writeln!(out);

    if let Some(note) = &explanation.alternative_note {
        let _ = writeln!(out, "## Alternative\n\n{}\n", note);
    }

    if !explanation.next_steps.is_empty() {
        let _ = writeln!(out, "## Next steps\n");
        for (i, step) in explanation.next_steps.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, step);
        }
        let _ = writeln!(out);
    }

    if explanation.degraded {
        let _ = writeln!(
            out,
            "_Some projections were unavailable; this advice leans on expert reasoning alone._"
        );
    }

    out
}
