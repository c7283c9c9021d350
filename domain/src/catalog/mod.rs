//! Supplement display copy
//!
//! Scoring works on bare identifiers (`"vitamin_d3"`). The catalog maps an
//! identifier to the text shown to the user. It never influences scores.

use crate::core::string::humanize_identifier;
use serde::Serialize;

/// Display copy for one supplement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplementInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub dosage: &'static str,
    pub benefit: &'static str,
}

const fn info(
    id: &'static str,
    name: &'static str,
    dosage: &'static str,
    benefit: &'static str,
) -> SupplementInfo {
    SupplementInfo {
        id,
        name,
        dosage,
        benefit,
    }
}

#[rustfmt::skip]
const ENTRIES: &[SupplementInfo] = &[
    info("vitamin_b_complex", "Vitamin B Complex", "1 capsule daily", "Supports energy metabolism"),
    info("vitamin_b12", "Vitamin B12",
         "500-1000 mcg daily", "Supports nerve function and red blood cells"),
    info("vitamin_c", "Vitamin C", "500 mg daily", "Supports immune defence"),
    info("vitamin_d3", "Vitamin D3", "1000-2000 IU daily", "Supports bones, immunity and mood"),
    info("iron", "Iron", "14-18 mg daily", "Supports oxygen transport"),
    info("zinc", "Zinc", "10-15 mg daily", "Supports immunity, skin and hair"),
    info("calcium", "Calcium", "500 mg daily", "Supports bone density"),
    info("potassium", "Potassium", "99 mg daily", "Supports muscle contraction"),
    info("magnesium_glycinate", "Magnesium Glycinate",
         "200-400 mg before bed", "Supports relaxation, sleep and muscles"),
    info("melatonin", "Melatonin", "0.5-1 mg before bed", "Supports sleep onset"),
    info("l_theanine", "L-Theanine", "100-200 mg daily", "Supports calm focus"),
    info("ashwagandha", "Ashwagandha", "300-600 mg daily", "Supports stress resilience"),
    info("rhodiola", "Rhodiola Rosea",
         "200-400 mg in the morning", "Supports resistance to fatigue"),
    info("omega_3", "Omega-3 (EPA/DHA)", "1-2 g daily", "Supports heart, brain and joints"),
    info("coq10", "Coenzyme Q10", "100-200 mg daily", "Supports cellular energy"),
    info("lions_mane", "Lion's Mane", "500-1000 mg daily", "Supports cognitive function"),
    info("curcumin", "Curcumin",
         "500 mg daily with food", "Supports a healthy inflammatory response"),
    info("glucosamine", "Glucosamine", "1500 mg daily", "Supports joint cartilage"),
    info("collagen", "Collagen Peptides", "10 g daily", "Supports skin, hair and joints"),
    info("biotin", "Biotin", "30-100 mcg daily", "Supports hair and nails"),
    info("riboflavin", "Riboflavin (B2)",
         "400 mg daily", "Supports energy production in nerve cells"),
    info("saffron", "Saffron Extract", "30 mg daily", "Supports a balanced mood"),
    info("probiotics", "Probiotics", "10-20 billion CFU daily", "Supports gut flora"),
    info("digestive_enzymes", "Digestive Enzymes", "1 capsule with meals", "Supports digestion"),
    info("fiber", "Psyllium Fiber", "5-10 g daily", "Supports regularity and satiety"),
    info("green_tea_extract", "Green Tea Extract", "250-500 mg daily", "Supports metabolism"),
    info("creatine", "Creatine Monohydrate", "3-5 g daily", "Supports strength and power output"),
    info("electrolytes", "Electrolytes", "1 serving during activity", "Supports hydration"),
    info("milk_thistle", "Milk Thistle", "150-300 mg daily", "Supports liver function"),
];

static BUILTIN_CATALOG: SupplementCatalog = SupplementCatalog { entries: ENTRIES };

/// Lookup of display copy by supplement identifier
#[derive(Debug, Clone, Copy)]
pub struct SupplementCatalog {
    entries: &'static [SupplementInfo],
}

impl SupplementCatalog {
    /// The compiled-in catalog
    pub fn builtin() -> &'static SupplementCatalog {
        &BUILTIN_CATALOG
    }

    pub fn info(&self, id: &str) -> Option<&'static SupplementInfo> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Catalog name, or a humanized identifier when the catalog has no entry
    pub fn display_name(&self, id: &str) -> String {
        match self.info(id) {
            Some(entry) => entry.name.to_string(),
            None => humanize_identifier(id),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::builtin::{
        GOAL_RECOMMENDATIONS, LIFESTYLE_RECOMMENDATIONS, SYMPTOM_RECOMMENDATIONS,
    };

    #[test]
    fn test_known_entry() {
        let catalog = SupplementCatalog::builtin();
        let entry = catalog.info("vitamin_d3").unwrap();
        assert_eq!(entry.name, "Vitamin D3");
        assert_eq!(catalog.display_name("coq10"), "Coenzyme Q10");
    }

    #[test]
    fn test_unknown_entry_falls_back() {
        let catalog = SupplementCatalog::builtin();
        assert!(catalog.info("spirulina_powder").is_none());
        assert_eq!(catalog.display_name("spirulina_powder"), "Spirulina Powder");
    }

    #[test]
    fn test_every_table_supplement_has_copy() {
        let catalog = SupplementCatalog::builtin();
        let lists = SYMPTOM_RECOMMENDATIONS
            .iter()
            .chain(GOAL_RECOMMENDATIONS)
            .chain(LIFESTYLE_RECOMMENDATIONS);
        for (_, supplements) in lists {
            for id in *supplements {
                assert!(catalog.info(id).is_some(), "{} missing from catalog", id);
            }
        }
    }

    #[test]
    fn test_ids_unique() {
        let catalog = SupplementCatalog::builtin();
        let mut seen = std::collections::HashSet::new();
        for entry in ENTRIES {
            assert!(seen.insert(entry.id), "{} listed twice", entry.id);
        }
        assert_eq!(seen.len(), catalog.len());
    }
}
