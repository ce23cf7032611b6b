//! Profile-weighted aggregation of component scores into a comfort value.

use serde::{Deserialize, Serialize};

use crate::components::ComponentScores;
use crate::error::ScoringError;
use crate::profiles::{Factor, ProfileTable, ProfileWeights};

// ---

/// Composite comfort (0–100, higher = better) for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    // ---
    /// `None` when no weighted factor had a score.
    pub value: Option<f64>,
    pub profile: String,
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Combine `scores` under `weights` into a comfort value.
///
/// Factors with a missing score or a zero weight are left out and the
/// remaining weights are renormalized. Returns `None` when nothing is left.
pub fn composite_value(scores: &ComponentScores, weights: &ProfileWeights) -> Option<f64> {
    // ---
    let (contribution, weight_sum) = Factor::ALL
        .iter()
        .filter_map(|factor| {
            let weight = weights.weight(*factor);
            let score = scores.score(*factor)?;
            (weight > 0.0).then_some((weight * score, weight))
        })
        .fold((0.0, 0.0), |(c, w), (dc, dw)| (c + dc, w + dw));

    if weight_sum > 0.0 {
        Some(round2(100.0 - contribution / weight_sum).clamp(0.0, 100.0))
    } else {
        None
    }
}

/// Composite for the named profile.
pub fn score_profile(
    table: &ProfileTable,
    profile: &str,
    scores: &ComponentScores,
) -> Result<CompositeScore, ScoringError> {
    // ---
    let weights = table.get(profile)?;
    let value = composite_value(scores, weights);
    tracing::trace!("Composite for profile '{}': {:?}", profile, value);

    Ok(CompositeScore {
        value,
        profile: profile.trim().to_lowercase(),
    })
}

/// Composite for every profile in the table, in name order.
pub fn score_all_profiles(table: &ProfileTable, scores: &ComponentScores) -> Vec<CompositeScore> {
    // ---
    table
        .iter()
        .map(|(name, weights)| CompositeScore {
            value: composite_value(scores, weights),
            profile: name.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::profiles::GENERAL;

    fn full_scores() -> ComponentScores {
        ComponentScores {
            aqi_score: Some(20.0),
            temp_score: Some(40.0),
            humidity_score: Some(60.0),
            uv_score: Some(10.0),
            wind_score: Some(30.0),
            aqi_value: Some(100.0),
        }
    }

    #[test]
    fn test_weighted_average() {
        // ---
        // 0.3*20 + 0.15*40 + 0.15*60 + 0.2*10 + 0.2*30 = 29
        assert_eq!(composite_value(&full_scores(), &GENERAL), Some(71.0));
    }

    #[test]
    fn test_zero_weight_factor_is_excluded() {
        // ---
        let weights = ProfileWeights::new(0.5, 0.5, 0.0, 0.0, 0.0);
        let mut scores = full_scores();
        let before = composite_value(&scores, &weights);

        scores.humidity_score = Some(100.0);
        scores.uv_score = Some(0.0);
        assert_eq!(composite_value(&scores, &weights), before);
        assert_eq!(before, Some(70.0));
    }

    #[test]
    fn test_missing_factor_renormalizes() {
        // ---
        let mut scores = full_scores();
        scores.aqi_score = None;
        // (0.15*40 + 0.15*60 + 0.2*10 + 0.2*30) / 0.7 = 23 / 0.7
        assert_eq!(composite_value(&scores, &GENERAL), Some(67.14));
    }

    #[test]
    fn test_no_usable_factor_is_none() {
        // ---
        assert_eq!(composite_value(&ComponentScores::default(), &GENERAL), None);

        let only_aqi = ProfileWeights::new(1.0, 0.0, 0.0, 0.0, 0.0);
        let mut scores = full_scores();
        scores.aqi_score = None;
        assert_eq!(composite_value(&scores, &only_aqi), None);
    }

    #[test]
    fn test_true_zero_is_not_none() {
        // ---
        let worst = ComponentScores {
            aqi_score: Some(100.0),
            temp_score: Some(100.0),
            humidity_score: Some(100.0),
            uv_score: Some(100.0),
            wind_score: Some(100.0),
            aqi_value: Some(500.0),
        };
        assert_eq!(composite_value(&worst, &GENERAL), Some(0.0));
    }

    #[test]
    fn test_score_profile_unknown() {
        // ---
        let table = ProfileTable::builtin();
        let err = score_profile(&table, "unknown_profile", &full_scores()).unwrap_err();
        assert_eq!(err, ScoringError::UnknownProfile("unknown_profile".into()));
    }

    #[test]
    fn test_score_all_profiles() {
        // ---
        let table = ProfileTable::builtin();
        let all = score_all_profiles(&table, &full_scores());
        let names: Vec<_> = all.iter().map(|c| c.profile.as_str()).collect();
        assert_eq!(names, vec!["asthma", "athlete", "elderly_child", "general"]);
        assert!(all.iter().all(|c| c.value.is_some()));

        let general = score_profile(&table, "General", &full_scores()).unwrap();
        assert_eq!(general.profile, "general");
        assert!(all.contains(&general));
    }
}
