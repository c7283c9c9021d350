//! Compiled-in rule tables
//!
//! The tables below are the quiz funnel's scoring rules. They are turned into
//! a [`RecommendationTables`] once per process on first use.

use super::tables::RecommendationTables;
use std::sync::LazyLock;

/// Health categories each symptom belongs to
pub const SYMPTOM_CATEGORIES: &[(&str, &[&str])] = &[
    ("Fatigue", &["energy", "metabolism"]),
    ("Poor sleep", &["sleep"]),
    ("Stress", &["stress", "mood"]),
    ("Anxiety", &["stress", "mood"]),
    ("Brain fog", &["cognition", "energy"]),
    ("Joint pain", &["joints", "inflammation"]),
    ("Digestive issues", &["digestion"]),
    ("Frequent colds", &["immunity"]),
    ("Low mood", &["mood"]),
    ("Muscle cramps", &["muscle"]),
    ("Hair loss", &["beauty"]),
    ("Skin problems", &["beauty", "inflammation"]),
    ("Headaches", &["neurological"]),
];

/// Supplements suggested for each symptom
#[rustfmt::skip]
pub const SYMPTOM_RECOMMENDATIONS: &[(&str, &[&str])] = &[
    ("Fatigue", &["vitamin_b_complex", "iron", "coq10", "vitamin_c", "vitamin_d3"]),
    ("Poor sleep", &["magnesium_glycinate", "melatonin", "l_theanine", "ashwagandha"]),
    ("Stress", &["ashwagandha", "magnesium_glycinate", "rhodiola", "vitamin_b_complex"]),
    ("Anxiety", &["l_theanine", "magnesium_glycinate", "ashwagandha", "omega_3"]),
    ("Brain fog", &["omega_3", "vitamin_b12", "lions_mane", "coq10"]),
    ("Joint pain", &["omega_3", "curcumin", "glucosamine", "collagen", "vitamin_d3"]),
    ("Digestive issues", &["probiotics", "digestive_enzymes", "zinc", "fiber"]),
    ("Frequent colds", &["vitamin_c", "zinc", "vitamin_d3", "probiotics"]),
    ("Low mood", &["vitamin_d3", "omega_3", "saffron", "vitamin_b_complex"]),
    ("Muscle cramps", &["magnesium_glycinate", "potassium", "calcium"]),
    ("Hair loss", &["biotin", "iron", "zinc", "collagen"]),
    ("Skin problems", &["collagen", "zinc", "omega_3", "vitamin_c"]),
    ("Headaches", &["magnesium_glycinate", "riboflavin", "coq10"]),
];

/// Multipliers applied to symptom contributions
///
/// Symptoms missing from this table contribute with a factor of 1.0.
pub const SYMPTOM_PRIORITY_FACTORS: &[(&str, f64)] = &[
    ("Fatigue", 1.2),
    ("Poor sleep", 1.3),
    ("Stress", 1.25),
    ("Anxiety", 1.3),
    ("Brain fog", 1.1),
    ("Joint pain", 1.15),
    ("Digestive issues", 1.1),
    ("Frequent colds", 1.05),
    ("Low mood", 1.2),
];

/// Supplements suggested for each stated goal
#[rustfmt::skip]
pub const GOAL_RECOMMENDATIONS: &[(&str, &[&str])] = &[
    ("More energy", &["vitamin_b_complex", "coq10", "iron"]),
    ("Better sleep", &["magnesium_glycinate", "melatonin", "l_theanine"]),
    ("Stress relief", &["ashwagandha", "rhodiola", "l_theanine"]),
    ("Immune support", &["vitamin_c", "vitamin_d3", "zinc"]),
    ("Focus and memory", &["omega_3", "lions_mane", "vitamin_b12"]),
    ("Healthy aging", &["coq10", "omega_3", "collagen", "vitamin_d3"]),
    ("Weight management", &["fiber", "probiotics", "green_tea_extract"]),
    ("Gut health", &["probiotics", "digestive_enzymes", "fiber"]),
    ("Athletic performance", &["creatine", "magnesium_glycinate", "electrolytes"]),
    ("Heart health", &["omega_3", "coq10", "magnesium_glycinate"]),
    ("Skin, hair and nails", &["collagen", "biotin", "zinc"]),
];

/// Supplements suggested for diet, activity, sleep, stress and other tags
#[rustfmt::skip]
pub const LIFESTYLE_RECOMMENDATIONS: &[(&str, &[&str])] = &[
    ("vegan", &["vitamin_b12", "iron", "omega_3", "vitamin_d3", "zinc"]),
    ("vegetarian", &["vitamin_b12", "iron", "omega_3"]),
    ("pescatarian", &["vitamin_b12", "iron"]),
    ("keto", &["electrolytes", "magnesium_glycinate", "fiber"]),
    ("sedentary", &["vitamin_d3", "omega_3"]),
    ("moderately_active", &["magnesium_glycinate"]),
    ("very_active", &["electrolytes", "magnesium_glycinate", "creatine"]),
    ("poor_sleep", &["magnesium_glycinate", "melatonin"]),
    ("irregular_sleep", &["melatonin"]),
    ("high_stress", &["ashwagandha", "vitamin_b_complex"]),
    ("moderate_stress", &["l_theanine"]),
    ("low_sunlight", &["vitamin_d3"]),
    ("smoker", &["vitamin_c"]),
    ("regular_alcohol", &["vitamin_b_complex", "milk_thistle"]),
];

/// Per-supplement multipliers by age bracket
pub const AGE_FACTORS: &[(&str, &[(&str, f64)])] = &[
    (
        "18-30",
        &[
            ("vitamin_d3", 0.8),
            ("coq10", 0.6),
            ("collagen", 0.7),
            ("creatine", 1.2),
        ],
    ),
    (
        "31-45",
        &[("coq10", 0.9), ("iron", 1.1), ("ashwagandha", 1.1)],
    ),
    (
        "46-60",
        &[
            ("coq10", 1.2),
            ("vitamin_d3", 1.15),
            ("collagen", 1.2),
            ("omega_3", 1.1),
            ("glucosamine", 1.2),
        ],
    ),
    (
        "60+",
        &[
            ("vitamin_d3", 1.3),
            ("vitamin_b12", 1.4),
            ("coq10", 1.3),
            ("calcium", 1.3),
            ("omega_3", 1.2),
            ("glucosamine", 1.3),
            ("iron", 0.8),
        ],
    ),
];

/// Per-supplement multipliers by gender
pub const GENDER_FACTORS: &[(&str, &[(&str, f64)])] = &[
    (
        "female",
        &[
            ("iron", 1.3),
            ("calcium", 1.2),
            ("biotin", 1.1),
            ("collagen", 1.1),
        ],
    ),
    ("male", &[("zinc", 1.2), ("creatine", 1.1), ("iron", 0.7)]),
];

static BUILTIN_TABLES: LazyLock<RecommendationTables> = LazyLock::new(build);

fn build() -> RecommendationTables {
    let mut tables = RecommendationTables::new();
    for (symptom, categories) in SYMPTOM_CATEGORIES {
        tables = tables.with_symptom_categories(symptom, categories);
    }
    for (symptom, supplements) in SYMPTOM_RECOMMENDATIONS {
        tables = tables.with_symptom(symptom, supplements);
    }
    for (symptom, factor) in SYMPTOM_PRIORITY_FACTORS {
        tables = tables.with_priority_factor(symptom, *factor);
    }
    for (goal, supplements) in GOAL_RECOMMENDATIONS {
        tables = tables.with_goal(goal, supplements);
    }
    for (key, supplements) in LIFESTYLE_RECOMMENDATIONS {
        tables = tables.with_lifestyle(key, supplements);
    }
    for (bracket, factors) in AGE_FACTORS {
        for (supplement, factor) in *factors {
            tables = tables.with_age_factor(bracket, supplement, *factor);
        }
    }
    for (gender, factors) in GENDER_FACTORS {
        for (supplement, factor) in *factors {
            tables = tables.with_gender_factor(gender, supplement, *factor);
        }
    }
    tables
}

impl RecommendationTables {
    /// The compiled-in rule set, built on first access
    pub fn builtin() -> &'static RecommendationTables {
        &BUILTIN_TABLES
    }
}
