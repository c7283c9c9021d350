//! Console output formatter for recommendation reports

use crate::output::formatter::OutputFormatter;
use advisor_application::RecommendationReport;
use advisor_domain::{RecommendationTables, SupplementCatalog};
use colored::Colorize;
use serde::Serialize;

const EMPTY_NOTICE: &str =
    "No recommendations matched your answers. Try --list-keys to see the recognised answers.";

/// Formats recommendation reports for console display
pub struct ConsoleFormatter;

/// JSON shape of one recommendation, enriched with catalog copy
#[derive(Serialize)]
struct JsonRecommendation<'a> {
    rank: usize,
    id: &'a str,
    name: String,
    score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    dosage: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    benefit: Option<&'static str>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    limit: usize,
    recommendations: Vec<JsonRecommendation<'a>>,
    focus_categories: &'a [String],
    unmatched_labels: &'a [String],
}

impl ConsoleFormatter {
    /// Format the complete report
    pub fn format(report: &RecommendationReport, catalog: &SupplementCatalog) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Your Supplement Recommendations"));
        output.push('\n');

        if !report.focus_categories.is_empty() {
            output.push_str(&format!(
                "\n{} {}\n",
                "Focus areas:".cyan().bold(),
                report.focus_categories.join(", ")
            ));
        }

        if report.is_empty() {
            output.push_str(&format!("\n{}\n", EMPTY_NOTICE.yellow()));
        } else {
            output.push_str(&Self::section_header("Recommended"));
            for (rank, rec) in report.recommendations.iter().enumerate() {
                output.push_str(&format!(
                    "\n{} {}  {}\n",
                    format!("{:>2}.", rank + 1).bold(),
                    catalog.display_name(&rec.id).yellow().bold(),
                    format!("(score {})", rec.display_score()).dimmed()
                ));
                if let Some(info) = catalog.info(&rec.id) {
                    output.push_str(&format!("    {} {}\n", "Dosage:".cyan(), info.dosage));
                    output.push_str(&format!("    {} {}\n", "Why:".cyan(), info.benefit));
                }
            }
        }

        if !report.unmatched_labels.is_empty() {
            output.push_str(&format!(
                "\n{} {}\n",
                "Ignored answers:".dimmed(),
                report.unmatched_labels.join(", ")
            ));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(report: &RecommendationReport, catalog: &SupplementCatalog) -> String {
        let recommendations = report
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, rec)| {
                let info = catalog.info(&rec.id);
                JsonRecommendation {
                    rank: i + 1,
                    id: &rec.id,
                    name: catalog.display_name(&rec.id),
                    score: rec.score,
                    dosage: info.map(|i| i.dosage),
                    benefit: info.map(|i| i.benefit),
                }
            })
            .collect();

        let json = JsonReport {
            limit: report.limit,
            recommendations,
            focus_categories: &report.focus_categories,
            unmatched_labels: &report.unmatched_labels,
        };
        serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format one line per recommendation
    pub fn format_summary(report: &RecommendationReport, catalog: &SupplementCatalog) -> String {
        if report.is_empty() {
            return format!("{}\n", EMPTY_NOTICE);
        }

        report
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, rec)| {
                format!(
                    "{}. {} ({})\n",
                    i + 1,
                    catalog.display_name(&rec.id),
                    rec.display_score()
                )
            })
            .collect()
    }

    /// Format the recognised answer vocabulary of every table
    pub fn format_vocabulary(tables: &RecommendationTables) -> String {
        let mut output = String::new();

        let sections: [(&str, Vec<&str>); 5] = [
            ("Symptoms (--symptom)", tables.symptoms().collect()),
            ("Goals (--goal)", tables.goals().collect()),
            (
                "Lifestyle (--diet, --activity, --sleep, --stress, --lifestyle)",
                tables.lifestyle_keys().collect(),
            ),
            ("Age brackets (--age)", tables.age_brackets().collect()),
            ("Genders (--gender)", tables.genders().collect()),
        ];

        for (title, keys) in sections {
            output.push_str(&Self::section_header(title));
            for key in keys {
                output.push_str(&format!("  {}\n", key));
            }
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &RecommendationReport, catalog: &SupplementCatalog) -> String {
        Self::format(report, catalog)
    }

    fn format_json(&self, report: &RecommendationReport, catalog: &SupplementCatalog) -> String {
        Self::format_json(report, catalog)
    }

    fn format_summary(&self, report: &RecommendationReport, catalog: &SupplementCatalog) -> String {
        Self::format_summary(report, catalog)
    }
}
