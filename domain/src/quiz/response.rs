//! Quiz answers collected from one quiz session

use crate::core::string::push_unique;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Answers collected from a single quiz session
///
/// Every field is optional. Labels are free-form strings from the quiz form;
/// labels that match no rule table are ignored during scoring.
///
/// # Example
///
/// ```
/// use advisor_domain::quiz::QuizResponse;
///
/// let response = QuizResponse::new()
///     .with_symptom("Fatigue")
///     .with_goal("Better sleep")
///     .with_diet("vegan")
///     .with_age("31-45");
/// assert_eq!(response.symptoms, vec!["Fatigue".to_string()]);
/// assert!(!response.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizResponse {
    /// Reported symptoms (e.g. "Fatigue", "Poor sleep")
    pub symptoms: Vec<String>,
    /// Desired outcomes (e.g. "Better sleep", "More energy")
    pub goals: Vec<String>,
    /// Diet type (e.g. "vegan", "keto")
    pub diet: Option<String>,
    /// Activity level (e.g. "sedentary", "very_active")
    pub activity_level: Option<String>,
    /// Sleep quality descriptor (e.g. "poor_sleep")
    pub sleep_quality: Option<String>,
    /// Stress level descriptor (e.g. "high_stress")
    pub stress_level: Option<String>,
    /// Additional lifestyle tags (e.g. "smoker", "low_sunlight")
    pub lifestyle: Vec<String>,
    /// Age bracket (e.g. "18-30", "60+")
    pub age: Option<String>,
    /// Gender (e.g. "female", "male")
    pub gender: Option<String>,
}

impl QuizResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symptom(mut self, symptom: impl Into<String>) -> Self {
        push_unique(&mut self.symptoms, symptom);
        self
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        push_unique(&mut self.goals, goal);
        self
    }

    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = Some(diet.into());
        self
    }

    pub fn with_activity_level(mut self, level: impl Into<String>) -> Self {
        self.activity_level = Some(level.into());
        self
    }

    pub fn with_sleep_quality(mut self, quality: impl Into<String>) -> Self {
        self.sleep_quality = Some(quality.into());
        self
    }

    pub fn with_stress_level(mut self, level: impl Into<String>) -> Self {
        self.stress_level = Some(level.into());
        self
    }

    pub fn with_lifestyle(mut self, tag: impl Into<String>) -> Self {
        push_unique(&mut self.lifestyle, tag);
        self
    }

    pub fn with_age(mut self, bracket: impl Into<String>) -> Self {
        self.age = Some(bracket.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Overlay `other` on top of this response
    ///
    /// List answers are appended (skipping labels already present), single
    /// answers are replaced when `other` has one.
    pub fn merge(mut self, other: QuizResponse) -> Self {
        for symptom in other.symptoms {
            push_unique(&mut self.symptoms, symptom);
        }
        for goal in other.goals {
            push_unique(&mut self.goals, goal);
        }
        for tag in other.lifestyle {
            push_unique(&mut self.lifestyle, tag);
        }
        self.diet = other.diet.or(self.diet);
        self.activity_level = other.activity_level.or(self.activity_level);
        self.sleep_quality = other.sleep_quality.or(self.sleep_quality);
        self.stress_level = other.stress_level.or(self.stress_level);
        self.age = other.age.or(self.age);
        self.gender = other.gender.or(self.gender);
        self
    }

    /// Distinct symptoms in first-seen order
    pub fn distinct_symptoms(&self) -> IndexSet<&str> {
        self.symptoms.iter().map(String::as_str).collect()
    }

    /// Distinct goals in first-seen order
    pub fn distinct_goals(&self) -> IndexSet<&str> {
        self.goals.iter().map(String::as_str).collect()
    }

    /// Lifestyle lookup keys: diet, activity, sleep, stress, then extra tags
    pub fn lifestyle_keys(&self) -> IndexSet<&str> {
        [
            self.diet.as_deref(),
            self.activity_level.as_deref(),
            self.sleep_quality.as_deref(),
            self.stress_level.as_deref(),
        ]
        .into_iter()
        .flatten()
        .chain(self.lifestyle.iter().map(String::as_str))
        .collect()
    }

    /// True when the response carries no answers at all
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
            && self.goals.is_empty()
            && self.lifestyle_keys().is_empty()
            && self.age.is_none()
            && self.gender.is_none()
    }
}
