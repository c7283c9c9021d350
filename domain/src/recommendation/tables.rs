//! Rule tables consulted by the scoring engine
//!
//! [`RecommendationTables`] is read-only once built. The compiled-in tables
//! are available through [`RecommendationTables::builtin`]; the builder
//! methods exist for embedders and tests that need a smaller rule set.

use indexmap::IndexMap;

/// Lookup tables mapping quiz answers to supplements and multipliers
///
/// All maps keep insertion order so vocabulary listings are stable.
///
/// # Example
///
/// ```
/// use advisor_domain::recommendation::RecommendationTables;
///
/// let tables = RecommendationTables::new()
///     .with_symptom("Fatigue", &["iron", "coq10"])
///     .with_priority_factor("Fatigue", 1.2)
///     .with_age_factor("60+", "coq10", 1.3);
///
/// assert_eq!(tables.symptom_supplements("Fatigue").len(), 2);
/// assert_eq!(tables.priority_factor("Fatigue"), 1.2);
/// assert_eq!(tables.priority_factor("Headaches"), 1.0);
/// assert_eq!(tables.age_factor("60+", "coq10"), Some(1.3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecommendationTables {
    symptom_categories: IndexMap<String, Vec<String>>,
    symptom_recommendations: IndexMap<String, Vec<String>>,
    symptom_priority_factors: IndexMap<String, f64>,
    goal_recommendations: IndexMap<String, Vec<String>>,
    lifestyle_recommendations: IndexMap<String, Vec<String>>,
    age_factors: IndexMap<String, IndexMap<String, f64>>,
    gender_factors: IndexMap<String, IndexMap<String, f64>>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl RecommendationTables {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Builder Methods ====================

    pub fn with_symptom(mut self, symptom: &str, supplements: &[&str]) -> Self {
        self.symptom_recommendations
            .insert(symptom.to_string(), owned(supplements));
        self
    }

    pub fn with_symptom_categories(mut self, symptom: &str, categories: &[&str]) -> Self {
        self.symptom_categories
            .insert(symptom.to_string(), owned(categories));
        self
    }

    pub fn with_priority_factor(mut self, symptom: &str, factor: f64) -> Self {
        self.symptom_priority_factors
            .insert(symptom.to_string(), factor);
        self
    }

    pub fn with_goal(mut self, goal: &str, supplements: &[&str]) -> Self {
        self.goal_recommendations
            .insert(goal.to_string(), owned(supplements));
        self
    }

    pub fn with_lifestyle(mut self, key: &str, supplements: &[&str]) -> Self {
        self.lifestyle_recommendations
            .insert(key.to_string(), owned(supplements));
        self
    }

    pub fn with_age_factor(mut self, bracket: &str, supplement: &str, factor: f64) -> Self {
        self.age_factors
            .entry(bracket.to_string())
            .or_default()
            .insert(supplement.to_string(), factor);
        self
    }

    pub fn with_gender_factor(mut self, gender: &str, supplement: &str, factor: f64) -> Self {
        self.gender_factors
            .entry(gender.to_string())
            .or_default()
            .insert(supplement.to_string(), factor);
        self
    }

    // ==================== Lookups ====================

    /// Supplements listed for a symptom (empty when unknown)
    pub fn symptom_supplements(&self, symptom: &str) -> &[String] {
        self.symptom_recommendations
            .get(symptom)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Health categories a symptom belongs to (empty when unknown)
    pub fn symptom_categories(&self, symptom: &str) -> &[String] {
        self.symptom_categories
            .get(symptom)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Priority multiplier for a symptom, 1.0 when none is listed
    pub fn priority_factor(&self, symptom: &str) -> f64 {
        self.symptom_priority_factors
            .get(symptom)
            .copied()
            .unwrap_or(1.0)
    }

    /// Supplements listed for a goal (empty when unknown)
    pub fn goal_supplements(&self, goal: &str) -> &[String] {
        self.goal_recommendations
            .get(goal)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Supplements listed for a lifestyle key (empty when unknown)
    pub fn lifestyle_supplements(&self, key: &str) -> &[String] {
        self.lifestyle_recommendations
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Age multiplier for a supplement, if the bracket lists one
    pub fn age_factor(&self, bracket: &str, supplement: &str) -> Option<f64> {
        self.age_factors.get(bracket)?.get(supplement).copied()
    }

    /// Gender multiplier for a supplement, if the gender lists one
    pub fn gender_factor(&self, gender: &str, supplement: &str) -> Option<f64> {
        self.gender_factors.get(gender)?.get(supplement).copied()
    }

    // ==================== Vocabulary ====================

    /// Whether any symptom table has an entry for this label
    pub fn knows_symptom(&self, symptom: &str) -> bool {
        self.symptom_recommendations.contains_key(symptom)
            || self.symptom_categories.contains_key(symptom)
            || self.symptom_priority_factors.contains_key(symptom)
    }

    pub fn knows_goal(&self, goal: &str) -> bool {
        self.goal_recommendations.contains_key(goal)
    }

    pub fn knows_lifestyle(&self, key: &str) -> bool {
        self.lifestyle_recommendations.contains_key(key)
    }

    pub fn knows_age_bracket(&self, bracket: &str) -> bool {
        self.age_factors.contains_key(bracket)
    }

    pub fn knows_gender(&self, gender: &str) -> bool {
        self.gender_factors.contains_key(gender)
    }

    /// Symptom labels with supplement mappings, in table order
    pub fn symptoms(&self) -> impl Iterator<Item = &str> {
        self.symptom_recommendations.keys().map(String::as_str)
    }

    pub fn goals(&self) -> impl Iterator<Item = &str> {
        self.goal_recommendations.keys().map(String::as_str)
    }

    pub fn lifestyle_keys(&self) -> impl Iterator<Item = &str> {
        self.lifestyle_recommendations.keys().map(String::as_str)
    }

    pub fn age_brackets(&self) -> impl Iterator<Item = &str> {
        self.age_factors.keys().map(String::as_str)
    }

    pub fn genders(&self) -> impl Iterator<Item = &str> {
        self.gender_factors.keys().map(String::as_str)
    }

    /// Every multiplier in the rule set, labelled for assertions
    #[cfg(test)]
    pub(crate) fn all_factors(&self) -> Vec<(String, f64)> {
        let priorities = self
            .symptom_priority_factors
            .iter()
            .map(|(symptom, factor)| (format!("priority[{}]", symptom), *factor));
        let ages = self.age_factors.iter().flat_map(|(bracket, factors)| {
            factors
                .iter()
                .map(move |(id, factor)| (format!("age[{}][{}]", bracket, id), *factor))
        });
        let genders = self.gender_factors.iter().flat_map(|(gender, factors)| {
            factors
                .iter()
                .map(move |(id, factor)| (format!("gender[{}][{}]", gender, id), *factor))
        });
        priorities.chain(ages).chain(genders).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_lookups_are_empty() {
        let tables = RecommendationTables::new();
        assert!(tables.symptom_supplements("Fatigue").is_empty());
        assert!(tables.goal_supplements("More energy").is_empty());
        assert!(tables.lifestyle_supplements("vegan").is_empty());
        assert!(tables.symptom_categories("Fatigue").is_empty());
        assert_eq!(tables.age_factor("60+", "iron"), None);
        assert_eq!(tables.gender_factor("female", "iron"), None);
    }

    #[test]
    fn test_factor_lookup_requires_both_keys() {
        let tables = RecommendationTables::new().with_gender_factor("female", "iron", 1.3);
        assert_eq!(tables.gender_factor("female", "iron"), Some(1.3));
        assert_eq!(tables.gender_factor("female", "zinc"), None);
        assert_eq!(tables.gender_factor("male", "iron"), None);
    }

    #[test]
    fn test_knows_symptom_from_any_table() {
        let tables = RecommendationTables::new()
            .with_symptom_categories("Headaches", &["neurological"])
            .with_priority_factor("Anxiety", 1.3);
        assert!(tables.knows_symptom("Headaches"));
        assert!(tables.knows_symptom("Anxiety"));
        assert!(!tables.knows_symptom("Hair loss"));
    }

    #[test]
    fn test_vocabulary_keeps_insertion_order() {
        let tables = RecommendationTables::new()
            .with_goal("Stress relief", &["ashwagandha"])
            .with_goal("Better sleep", &["melatonin"])
            .with_goal("More energy", &["coq10"]);
        let goals: Vec<&str> = tables.goals().collect();
        assert_eq!(goals, vec!["Stress relief", "Better sleep", "More energy"]);
    }

    #[test]
    fn test_all_factors_labels() {
        let tables = RecommendationTables::new()
            .with_priority_factor("Fatigue", 1.2)
            .with_age_factor("60+", "vitamin_d3", 1.3);
        let factors = tables.all_factors();
        assert_eq!(factors.len(), 2);
        assert_eq!(factors[0], ("priority[Fatigue]".to_string(), 1.2));
        assert_eq!(factors[1], ("age[60+][vitamin_d3]".to_string(), 1.3));
    }
}
