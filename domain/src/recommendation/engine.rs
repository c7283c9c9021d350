//! Rule-based scoring of quiz answers
//!
//! The engine walks the answers once, accumulating a score per supplement,
//! then applies demographic multipliers and ranks the result.
//!
//! # Scoring
//!
//! ```text
//! symptom   → + symptom_increment × priority_factor(symptom)   per listed supplement
//! goal      → + goal_increment                                 per listed supplement
//! lifestyle → + lifestyle_increment                            per listed supplement
//! then      × age_factor(bracket, supplement)     (when listed)
//!           × gender_factor(gender, supplement)   (when listed)
//! ```
//!
//! Ranking is by score descending. Equal scores keep the order in which the
//! supplements were first scored, so the same answers always produce the
//! same list.

use super::scored::ScoredRecommendation;
use super::tables::RecommendationTables;
use super::weights::ScoringWeights;
use crate::core::string::push_unique;
use crate::quiz::QuizResponse;
use indexmap::IndexMap;

/// Scores quiz answers against a set of rule tables
///
/// The engine holds no mutable state: every call builds its own score map,
/// so one engine can serve any number of sessions.
///
/// # Example
///
/// ```
/// use advisor_domain::quiz::QuizResponse;
/// use advisor_domain::recommendation::RecommendationEngine;
///
/// let engine = RecommendationEngine::builtin();
/// let response = QuizResponse::new().with_symptom("Fatigue").with_age("60+");
///
/// let top = engine.compute(&response, 3);
/// assert_eq!(top.len(), 3);
/// assert!(top[0].score >= top[1].score);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine<'a> {
    tables: &'a RecommendationTables,
    weights: ScoringWeights,
}

impl RecommendationEngine<'static> {
    /// Engine over the compiled-in tables with default weights
    pub fn builtin() -> Self {
        Self::new(RecommendationTables::builtin())
    }
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(tables: &'a RecommendationTables) -> Self {
        Self {
            tables,
            weights: ScoringWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn tables(&self) -> &'a RecommendationTables {
        self.tables
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Ranked top-`limit` recommendations with a non-zero score
    pub fn compute(&self, response: &QuizResponse, limit: usize) -> Vec<ScoredRecommendation> {
        self.score_all(response)
            .into_iter()
            .filter(|rec| rec.score > 0.0)
            .take(limit)
            .collect()
    }

    /// Every scored candidate in ranking order, without truncation
    pub fn score_all(&self, response: &QuizResponse) -> Vec<ScoredRecommendation> {
        let mut scores = self.accumulate(response);
        self.apply_demographics(&mut scores, response);

        let mut ranked: Vec<ScoredRecommendation> = scores
            .into_iter()
            .map(|(id, score)| ScoredRecommendation::new(id, score))
            .collect();
        // sort_by is stable: ties stay in first-scored order
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Health categories touched by the reported symptoms, first seen first
    pub fn focus_categories(&self, response: &QuizResponse) -> Vec<String> {
        let mut categories = Vec::new();
        for symptom in response.distinct_symptoms() {
            for category in self.tables.symptom_categories(symptom) {
                push_unique(&mut categories, category.as_str());
            }
        }
        categories
    }

    /// Input labels that no table recognises
    pub fn unmatched_labels(&self, response: &QuizResponse) -> Vec<String> {
        let tables = self.tables;
        let symptoms = response
            .distinct_symptoms()
            .into_iter()
            .filter(|s| !tables.knows_symptom(s));
        let goals = response
            .distinct_goals()
            .into_iter()
            .filter(|g| !tables.knows_goal(g));
        let lifestyle = response
            .lifestyle_keys()
            .into_iter()
            .filter(|k| !tables.knows_lifestyle(k));
        let age = response
            .age
            .as_deref()
            .filter(|a| !tables.knows_age_bracket(a));
        let gender = response
            .gender
            .as_deref()
            .filter(|g| !tables.knows_gender(g));

        symptoms
            .chain(goals)
            .chain(lifestyle)
            .chain(age)
            .chain(gender)
            .map(str::to_string)
            .collect()
    }

    fn accumulate(&self, response: &QuizResponse) -> IndexMap<String, f64> {
        let mut scores: IndexMap<String, f64> = IndexMap::new();

        for symptom in response.distinct_symptoms() {
            let increment = self.weights.symptom_increment * self.tables.priority_factor(symptom);
            for supplement in self.tables.symptom_supplements(symptom) {
                *scores.entry(supplement.clone()).or_insert(0.0) += increment;
            }
        }

        for goal in response.distinct_goals() {
            for supplement in self.tables.goal_supplements(goal) {
                *scores.entry(supplement.clone()).or_insert(0.0) += self.weights.goal_increment;
            }
        }

        for key in response.lifestyle_keys() {
            for supplement in self.tables.lifestyle_supplements(key) {
                *scores.entry(supplement.clone()).or_insert(0.0) +=
                    self.weights.lifestyle_increment;
            }
        }

        scores
    }

    fn apply_demographics(&self, scores: &mut IndexMap<String, f64>, response: &QuizResponse) {
        let age = response.age.as_deref();
        let gender = response.gender.as_deref();

        for (supplement, score) in scores.iter_mut() {
            if let Some(factor) = age.and_then(|a| self.tables.age_factor(a, supplement)) {
                *score *= factor;
            }
            if let Some(factor) = gender.and_then(|g| self.tables.gender_factor(g, supplement)) {
                *score *= factor;
            }
        }
    }
}

/// Rank supplements for `response` using the compiled-in tables
///
/// Convenience wrapper over [`RecommendationEngine::builtin`].
pub fn compute_recommendations(response: &QuizResponse, limit: usize) -> Vec<ScoredRecommendation> {
    RecommendationEngine::builtin().compute(response, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Helpers ====================

    fn ids(recs: &[ScoredRecommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.id.as_str()).collect()
    }

    fn score_of(recs: &[ScoredRecommendation], id: &str) -> f64 {
        recs.iter()
            .find(|r| r.id == id)
            .map(|r| r.score)
            .unwrap_or_else(|| panic!("{} not scored", id))
    }

    fn flat_weights() -> ScoringWeights {
        ScoringWeights::default()
            .with_symptom_increment(1.0)
            .with_goal_increment(1.0)
            .with_lifestyle_increment(1.0)
    }

    fn everything() -> QuizResponse {
        QuizResponse::new()
            .with_symptom("Fatigue")
            .with_symptom("Poor sleep")
            .with_symptom("Joint pain")
            .with_goal("Immune support")
            .with_goal("Healthy aging")
            .with_diet("vegan")
            .with_activity_level("very_active")
            .with_stress_level("high_stress")
            .with_age("46-60")
            .with_gender("female")
    }

    // ==================== Built-in scenarios ====================

    #[test]
    fn test_fatigue_scores_every_listed_supplement() {
        let engine = RecommendationEngine::builtin();
        let response = QuizResponse::new().with_symptom("Fatigue");
        let all = engine.score_all(&response);

        let floor = engine.weights().symptom_increment * 1.2;
        for id in engine.tables().symptom_supplements("Fatigue") {
            assert!(score_of(&all, id) >= floor, "{} below {}", id, floor);
        }
    }

    #[test]
    fn test_fatigue_ties_keep_table_order() {
        let response = QuizResponse::new().with_symptom("Fatigue");
        let top = compute_recommendations(&response, 10);
        assert_eq!(
            ids(&top),
            vec![
                "vitamin_b_complex",
                "iron",
                "coq10",
                "vitamin_c",
                "vitamin_d3",
            ]
        );
    }

    #[test]
    fn test_older_bracket_boosts_vitamin_d3() {
        let engine = RecommendationEngine::builtin();
        let base = QuizResponse::new().with_symptom("Fatigue");

        let senior = engine.score_all(&base.clone().with_age("60+"));
        let young = engine.score_all(&base.with_age("18-30"));

        assert!(score_of(&senior, "vitamin_d3") > score_of(&young, "vitamin_d3"));
    }

    #[test]
    fn test_gender_factor_applies() {
        let engine = RecommendationEngine::builtin();
        let base = QuizResponse::new().with_symptom("Fatigue");

        let neutral = engine.score_all(&base);
        let female = engine.score_all(&base.with_gender("female"));

        let expected = score_of(&neutral, "iron") * 1.3;
        assert!((score_of(&female, "iron") - expected).abs() < 1e-9);
        assert_eq!(score_of(&female, "coq10"), score_of(&neutral, "coq10"));
    }

    #[test]
    fn test_contributions_accumulate_across_answer_kinds() {
        let engine = RecommendationEngine::builtin();
        let response = QuizResponse::new()
            .with_symptom("Poor sleep")
            .with_goal("Better sleep")
            .with_sleep_quality("poor_sleep");
        let all = engine.score_all(&response);

        let weights = engine.weights();
        let expected =
            weights.symptom_increment * 1.3 + weights.goal_increment + weights.lifestyle_increment;
        assert!((score_of(&all, "magnesium_glycinate") - expected).abs() < 1e-9);
        assert_eq!(all[0].id, "magnesium_glycinate");
    }

    // ==================== Properties ====================

    #[test]
    fn test_output_sorted_descending() {
        let top = compute_recommendations(&everything(), 50);
        assert!(!top.is_empty());
        for pair in top.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_no_duplicate_ids() {
        let top = compute_recommendations(&everything(), 50);
        let mut seen = std::collections::HashSet::new();
        for rec in &top {
            assert!(seen.insert(rec.id.as_str()), "{} appears twice", rec.id);
        }
    }

    #[test]
    fn test_idempotent() {
        let response = everything();
        let first = compute_recommendations(&response, 8);
        let second = compute_recommendations(&response, 8);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_response_yields_nothing() {
        assert!(compute_recommendations(&QuizResponse::new(), 5).is_empty());
    }

    #[test]
    fn test_unrecognised_labels_yield_nothing() {
        let response = QuizResponse::new()
            .with_symptom("Hiccups")
            .with_goal("Fly")
            .with_diet("carnivore")
            .with_lifestyle("night_owl")
            .with_age("60+")
            .with_gender("female");
        assert!(compute_recommendations(&response, 5).is_empty());
    }

    #[test]
    fn test_duplicate_labels_count_once() {
        let mut response = QuizResponse::new().with_symptom("Fatigue");
        response.symptoms.push("Fatigue".to_string());

        let once = compute_recommendations(&QuizResponse::new().with_symptom("Fatigue"), 10);
        let twice = compute_recommendations(&response, 10);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_limit_truncates() {
        let response = everything();
        let all = compute_recommendations(&response, usize::MAX);
        let top = compute_recommendations(&response, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top, all[..3].to_vec());
        assert!(compute_recommendations(&response, 0).is_empty());
    }

    #[test]
    fn test_fewer_candidates_than_limit() {
        let tables = RecommendationTables::new().with_goal("Focus", &["omega_3", "lions_mane"]);
        let engine = RecommendationEngine::new(&tables);
        let top = engine.compute(&QuizResponse::new().with_goal("Focus"), 5);
        assert_eq!(ids(&top), vec!["omega_3", "lions_mane"]);
    }

    #[test]
    fn test_zero_scores_are_dropped() {
        let tables = RecommendationTables::new()
            .with_symptom("Cramps", &["potassium", "calcium"])
            .with_gender_factor("male", "calcium", 0.0);
        let engine = RecommendationEngine::new(&tables);
        let response = QuizResponse::new()
            .with_symptom("Cramps")
            .with_gender("male");

        assert_eq!(engine.score_all(&response).len(), 2);
        assert_eq!(ids(&engine.compute(&response, 5)), vec!["potassium"]);
    }

    #[test]
    fn test_ties_break_by_first_insertion() {
        let tables = RecommendationTables::new()
            .with_symptom("A", &["x", "y"])
            .with_goal("G", &["z", "x"])
            .with_lifestyle("L", &["w", "y", "z"]);
        let engine = RecommendationEngine::new(&tables).with_weights(flat_weights());
        let response = QuizResponse::new()
            .with_symptom("A")
            .with_goal("G")
            .with_lifestyle("L");

        // x, y, z score 2; w scores 1
        assert_eq!(
            ids(&engine.compute(&response, 10)),
            vec!["x", "y", "z", "w"]
        );
    }

    #[test]
    fn test_goals_and_lifestyle_ignore_priority_factors() {
        let tables = RecommendationTables::new()
            .with_goal("Calm", &["l_theanine"])
            .with_lifestyle("Calm", &["ashwagandha"])
            .with_priority_factor("Calm", 5.0);
        let engine = RecommendationEngine::new(&tables).with_weights(flat_weights());
        let response = QuizResponse::new().with_goal("Calm").with_lifestyle("Calm");

        let all = engine.score_all(&response);
        assert_eq!(score_of(&all, "l_theanine"), 1.0);
        assert_eq!(score_of(&all, "ashwagandha"), 1.0);
    }

    #[test]
    fn test_demographic_passes_commute() {
        let age_then_gender = RecommendationTables::new()
            .with_symptom("S", &["coq10"])
            .with_age_factor("60+", "coq10", 1.3)
            .with_gender_factor("male", "coq10", 0.7);
        let gender_then_age = RecommendationTables::new()
            .with_symptom("S", &["coq10"])
            .with_age_factor("60+", "coq10", 0.7)
            .with_gender_factor("male", "coq10", 1.3);
        let response = QuizResponse::new()
            .with_symptom("S")
            .with_age("60+")
            .with_gender("male");

        let a = RecommendationEngine::new(&age_then_gender).score_all(&response);
        let b = RecommendationEngine::new(&gender_then_age).score_all(&response);
        assert!((a[0].score - b[0].score).abs() < 1e-12);
    }

    #[test]
    fn test_demographics_can_reorder() {
        let tables = RecommendationTables::new()
            .with_symptom("S", &["first", "second"])
            .with_age_factor("60+", "second", 2.0);
        let engine = RecommendationEngine::new(&tables);
        let response = QuizResponse::new().with_symptom("S").with_age("60+");
        assert_eq!(ids(&engine.compute(&response, 2)), vec!["second", "first"]);
    }

    // ==================== Diagnostics ====================

    #[test]
    fn test_focus_categories_deduplicated() {
        let engine = RecommendationEngine::builtin();
        let response = QuizResponse::new()
            .with_symptom("Stress")
            .with_symptom("Anxiety")
            .with_symptom("Fatigue");
        assert_eq!(
            engine.focus_categories(&response),
            vec!["stress", "mood", "energy", "metabolism"]
        );
    }

    #[test]
    fn test_unmatched_labels() {
        let engine = RecommendationEngine::builtin();
        let response = QuizResponse::new()
            .with_symptom("Fatigue")
            .with_symptom("Hiccups")
            .with_goal("Fly")
            .with_diet("vegan")
            .with_lifestyle("night_owl")
            .with_age("99+")
            .with_gender("female");
        assert_eq!(
            engine.unmatched_labels(&response),
            vec!["Hiccups", "Fly", "night_owl", "99+"]
        );
    }
}
