//! CLI command definitions

use advisor_domain::QuizResponse;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for recommendation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Ranked list with dosages, focus areas and ignored answers
    Full,
    /// One line per recommendation
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for advisor_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => advisor_domain::OutputFormat::Full,
            OutputFormat::Summary => advisor_domain::OutputFormat::Summary,
            OutputFormat::Json => advisor_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for supplement-advisor
#[derive(Parser, Debug)]
#[command(name = "supplement-advisor")]
#[command(
    author,
    version,
    about = "Rank supplement recommendations from quiz answers"
)]
#[command(long_about = r#"
Supplement Advisor scores quiz answers against built-in rule tables and prints
a ranked list of supplement recommendations.

Scoring:
1. Each symptom adds a weighted increment (scaled by its priority) to its supplements
2. Each goal and lifestyle answer adds a flat increment to its supplements
3. Age bracket and gender multiply the scores of supplements they list

Answers the tables don't recognise are ignored. Use --list-keys to see the
recognised vocabulary.

Configuration files are loaded from (in priority order):
1. ADVISOR_* environment variables (e.g. ADVISOR_SCORING__DEFAULT_LIMIT=3)
2. --config <path>     Explicit config file
3. ./advisor.toml      Project-level config
4. ~/.config/supplement-advisor/config.toml   Global config

Example:
  supplement-advisor -s Fatigue -s "Poor sleep" --age 60+ --gender female
  supplement-advisor -g "Better sleep" --diet vegan -n 3 -o summary
  supplement-advisor --answers quiz.json -o json
"#)]
pub struct Cli {
    /// Reported symptom (can be specified multiple times)
    #[arg(short, long = "symptom", value_name = "SYMPTOM")]
    pub symptoms: Vec<String>,

    /// Stated goal (can be specified multiple times)
    #[arg(short, long = "goal", value_name = "GOAL")]
    pub goals: Vec<String>,

    /// Diet type (e.g. vegan, keto)
    #[arg(long, value_name = "DIET")]
    pub diet: Option<String>,

    /// Activity level (e.g. sedentary, very_active)
    #[arg(long, value_name = "LEVEL")]
    pub activity: Option<String>,

    /// Sleep quality descriptor (e.g. poor_sleep)
    #[arg(long, value_name = "QUALITY")]
    pub sleep: Option<String>,

    /// Stress level descriptor (e.g. high_stress)
    #[arg(long, value_name = "LEVEL")]
    pub stress: Option<String>,

    /// Other lifestyle tag (can be specified multiple times)
    #[arg(short, long = "lifestyle", value_name = "TAG")]
    pub lifestyle: Vec<String>,

    /// Age bracket (e.g. 18-30, 60+)
    #[arg(long, value_name = "BRACKET")]
    pub age: Option<String>,

    /// Gender (e.g. female, male)
    #[arg(long, value_name = "GENDER")]
    pub gender: Option<String>,

    /// Load answers from a .json or .toml file (flags are merged on top)
    #[arg(short, long, value_name = "PATH")]
    pub answers: Option<PathBuf>,

    /// Number of recommendations to show
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the answers recap printed before the full report
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Append quiz events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub event_log: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List the recognised symptoms, goals, lifestyle keys, ages and genders
    #[arg(long)]
    pub list_keys: bool,
}

impl Cli {
    /// Quiz answers given as flags
    pub fn quiz_response(&self) -> QuizResponse {
        let mut response = QuizResponse::new();
        for symptom in &self.symptoms {
            response = response.with_symptom(symptom.as_str());
        }
        for goal in &self.goals {
            response = response.with_goal(goal.as_str());
        }
        for tag in &self.lifestyle {
            response = response.with_lifestyle(tag.as_str());
        }
        response.diet = self.diet.clone();
        response.activity_level = self.activity.clone();
        response.sleep_quality = self.sleep.clone();
        response.stress_level = self.stress.clone();
        response.age = self.age.clone();
        response.gender = self.gender.clone();
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_answers() {
        let cli = Cli::parse_from([
            "supplement-advisor",
            "-s",
            "Fatigue",
            "--symptom",
            "Poor sleep",
            "-g",
            "Better sleep",
            "--diet",
            "vegan",
            "--sleep",
            "poor_sleep",
            "-l",
            "smoker",
            "--age",
            "60+",
            "--gender",
            "female",
            "-n",
            "3",
            "-o",
            "json",
        ]);

        assert_eq!(cli.limit, Some(3));
        assert_eq!(cli.output, Some(OutputFormat::Json));

        let response = cli.quiz_response();
        assert_eq!(response.symptoms, vec!["Fatigue", "Poor sleep"]);
        assert_eq!(response.goals, vec!["Better sleep"]);
        assert_eq!(response.diet.as_deref(), Some("vegan"));
        assert_eq!(response.sleep_quality.as_deref(), Some("poor_sleep"));
        assert_eq!(response.lifestyle, vec!["smoker"]);
        assert_eq!(response.age.as_deref(), Some("60+"));
        assert_eq!(response.gender.as_deref(), Some("female"));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["supplement-advisor"]);
        assert!(cli.quiz_response().is_empty());
        assert_eq!(cli.limit, None);
        assert_eq!(cli.output, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::parse_from(["supplement-advisor", "-vvv"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            advisor_domain::OutputFormat::from(OutputFormat::Summary),
            advisor_domain::OutputFormat::Summary
        );
    }
}
