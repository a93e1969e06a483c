//! Output formatting for the CLI.

use colored::Colorize;
use lexcite_domain::CourtTier;
use lexcite_engine::ResearchOutcome;
use lexcite_planner::TaskPlan;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Render a task plan as a table
pub fn format_plan(plan: &TaskPlan) -> String {
    let mut builder = Builder::default();
    builder.push_record(["tier", "query", "fallbacks"]);
    for task in &plan.tasks {
        builder.push_record([
            task.tier.as_str().to_string(),
            task.query.clone(),
            task.fallback_queries.len().to_string(),
        ]);
    }

    let table = builder
        .build()
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    let counts = [CourtTier::Tier1, CourtTier::Tier2, CourtTier::Tier3]
        .iter()
        .map(|t| format!("{}: {}", t.as_str(), plan.tier_count(*t)))
        .collect::<Vec<_>>()
        .join("  ");

    format!("{}\n{} tasks ({})", table, plan.len(), counts)
}

/// Render a research outcome: citation table plus summary lines
pub fn format_outcome(outcome: &ResearchOutcome) -> String {
    let mut builder = Builder::default();
    builder.push_record(["case", "citation", "court", "authority", "relevance"]);
    for citation in &outcome.citations {
        builder.push_record([
            citation.case_name.clone(),
            citation.citation.clone(),
            citation.court.clone(),
            citation.authority.as_str().to_string(),
            format!("{:.2}", citation.relevance),
        ]);
    }

    let table = builder
        .build()
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    let mut lines = vec![table];

    lines.push(format!(
        "{} citations ({} binding, {} persuasive), {}/{} elements covered",
        outcome.counts.total,
        outcome.counts.binding,
        outcome.counts.persuasive,
        outcome.elements_covered,
        outcome.total_elements,
    ));

    if !outcome.statutory_citations.is_empty() {
        lines.push(format!("statutory: {}", outcome.statutory_citations.join("; ")));
    }

    if outcome.flagged_for_review {
        lines.push(format!("{}", "flagged for manual review".yellow().bold()));
    } else {
        lines.push(format!("{}", "clean".green().bold()));
    }

    for note in &outcome.quality_notes {
        lines.push(format!("  note: {}", note));
    }

    lines.join("\n")
}
