//! Personal advisory for the dashboard's "about you" form.
//!
//! Builds interface hints and health suggestions from a person's name, age
//! and self-reported conditions. Independent of the weather scoring.

use serde::{Deserialize, Serialize};

// ---

/// Age above which "fragile bones" is assumed.
const FRAGILE_BONES_AGE: u32 = 60;

const ASTHMA: &str = "asthma";
/// Common misspelling accepted by the intake form.
const ASTHMA_ALT: &str = "asthama";
const SKIN_DISEASE: &str = "skin disease";
const FRAGILE_BONES: &str = "fragile bones";

/// Interface hints and suggestions for one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonAdvisory {
    // ---
    pub name: String,
    pub age: u32,
    /// Normalized, lowercase conditions, including inferred ones.
    pub conditions: Vec<String>,
    /// Display adaptations, joined into one sentence list.
    pub interface_hints: String,
    pub suggestions: Vec<String>,
}

/// Split raw form entries on commas and trim them, dropping empties.
pub fn parse_conditions<S: AsRef<str>>(entries: &[S]) -> Vec<String> {
    // ---
    entries
        .iter()
        .flat_map(|entry| entry.as_ref().split(','))
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

impl PersonAdvisory {
    // ---
    /// Build the advisory. An empty `name` is shown as "User".
    pub fn build<S: AsRef<str>>(name: &str, age: u32, conditions: &[S]) -> Self {
        // ---
        let name = match name.trim() {
            "" => "User".to_string(),
            trimmed => trimmed.to_string(),
        };

        let mut conditions: Vec<String> = conditions
            .iter()
            .map(|c| c.as_ref().trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        if age > FRAGILE_BONES_AGE && !conditions.iter().any(|c| c == FRAGILE_BONES) {
            conditions.push(FRAGILE_BONES.to_string());
        }

        let has = |needle: &str| conditions.iter().any(|c| c == needle);
        let asthma = has(ASTHMA) || has(ASTHMA_ALT);
        let skin = has(SKIN_DISEASE);
        let fragile = has(FRAGILE_BONES);

        let mut hints = vec![if age >= 65 {
            "Provide large, high-contrast text and simplified layouts."
        } else if age >= 50 {
            "Prefer medium-sized text and clear spacing."
        } else {
            "Use standard readable fonts and spacing."
        }];
        if asthma {
            hints.push("Avoid interfaces that require prolonged breath-holding or rapid input.");
        }
        if skin {
            hints.push("Use soft color palettes and avoid harsh flashing elements.");
        }
        if fragile {
            hints.push("Minimize the need for physical interaction; provide larger touch targets.");
        }

        let mut suggestions = vec![format!("Hello {name}, age {age}.")];
        if skin {
            suggestions.push(
                "See a dermatologist and use recommended topical treatments; protect skin from irritants."
                    .to_string(),
            );
        }
        if asthma {
            suggestions.push(
                "Keep inhaler accessible and avoid triggers; consult your pulmonologist for action plans."
                    .to_string(),
            );
        }
        if fragile {
            suggestions.push(
                "Schedule bone density testing, ensure adequate calcium and vitamin D, and fall-proof the living space."
                    .to_string(),
            );
        }
        suggestions.push(
            "Maintain a balanced diet, regular checkups, and stay physically active within comfort limits."
                .to_string(),
        );

        Self {
            name,
            age,
            conditions,
            interface_hints: hints.join(" "),
            suggestions,
        }
    }
}
