//! Output formatter trait

use advisor_application::RecommendationReport;
use advisor_domain::{OutputFormat, SupplementCatalog};

/// Trait for formatting recommendation reports
pub trait OutputFormatter {
    /// Format the complete report
    fn format(&self, report: &RecommendationReport, catalog: &SupplementCatalog) -> String;

    /// Format as JSON
    fn format_json(&self, report: &RecommendationReport, catalog: &SupplementCatalog) -> String;

    /// Format one line per recommendation
    fn format_summary(&self, report: &RecommendationReport, catalog: &SupplementCatalog) -> String;

    /// Format in the requested output format
    fn render(
        &self,
        format: OutputFormat,
        report: &RecommendationReport,
        catalog: &SupplementCatalog,
    ) -> String {
        match format {
            OutputFormat::Full => self.format(report, catalog),
            OutputFormat::Summary => self.format_summary(report, catalog),
            OutputFormat::Json => self.format_json(report, catalog),
        }
    }
}
