use std::fmt::Write;

use super::domain::DimensionGroup;
use super::ideal_range::TypePreference;
use super::{ConsolidatedResult, PairwiseFitResult, RangeFitResult};

fn marker(within_range: bool) -> &'static str {
    if within_range {
        "✅"
    } else {
        "❌"
    }
}

/// Plain-text summary of a profile-versus-profile fit.
pub fn render_pairwise(fit: &PairwiseFitResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "RELATÓRIO DE COMPATIBILIDADE COMPORTAMENTAL\n");
    let _ = writeln!(
        out,
        "Score Geral: {}/100 ({})",
        fit.overall_score,
        fit.tier.label().to_uppercase()
    );
    let _ = writeln!(out, "DISC: {}/100 | MBTI: {}/100", fit.disc_score, fit.mbti_score);

    for group in [DimensionGroup::Disc, DimensionGroup::Mbti] {
        let _ = writeln!(out, "\n--- {group} ---");
        for detail in fit
            .dimension_details
            .iter()
            .filter(|detail| detail.dimension.group() == group)
        {
            let _ = writeln!(
                out,
                "{}: {} x {} ({}%)",
                detail.dimension.label(),
                detail.value,
                detail.counterpart,
                detail.score
            );
        }
    }

    let _ = writeln!(out, "\nRECOMENDAÇÃO:\n{}", fit.recommendation);
    out
}

/// Plain-text summary of a profile-versus-role fit.
pub fn render_range(fit: &RangeFitResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "RELATÓRIO DE FIT COMPORTAMENTAL: {}\n", fit.role_name);
    let _ = writeln!(
        out,
        "Score Geral: {}/100 ({})",
        fit.overall_score,
        fit.tier.label().to_uppercase()
    );
    let _ = writeln!(out, "DISC: {}/100 | MBTI: {}/100", fit.disc_score, fit.mbti_score);

    for group in [DimensionGroup::Disc, DimensionGroup::Mbti] {
        let _ = writeln!(out, "\n--- {group} ---");
        for detail in fit
            .dimension_details
            .iter()
            .filter(|detail| detail.dimension.group() == group)
        {
            let _ = writeln!(
                out,
                "{}: {} -> Range {} {} ({}%)",
                detail.dimension.label(),
                detail.value,
                detail.range,
                marker(detail.within_range),
                detail.score
            );
        }
    }

    let type_line = match &fit.type_preference {
        TypePreference::Matched { code } => format!("✅ Match ({code})"),
        TypePreference::Mismatched { code } => format!("❌ Fora dos tipos ideais ({code})"),
        TypePreference::NotEvaluated => "não avaliado".to_string(),
    };
    let _ = writeln!(out, "Tipo ideal: {type_line}");

    let _ = writeln!(out, "\nRECOMENDAÇÃO:\n{}", fit.recommendation);
    out
}

/// One-paragraph summary of a consolidated score.
pub fn render_consolidated(result: &ConsolidatedResult) -> String {
    let leader = match result.leader_score {
        Some(score) => format!("{score}/100"),
        None => "sem líder".to_string(),
    };
    format!(
        "Score Consolidado: {}/100 ({})\nFunção: {}/100 | Líder: {}\n{}\n",
        result.consolidated_score,
        result.tier.label().to_uppercase(),
        result.role_score,
        leader,
        result.verdict
    )
}
