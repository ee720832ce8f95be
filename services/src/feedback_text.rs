//! # Feedback Text Generator
//!
//! Turns a score (out of 20) and a list of missing points into a short French
//! comment for the student.
//!
//! ## Overview
//!
//! - The opening comment comes from [`FEEDBACK_TIERS`], scanned top-down; the
//!   first tier whose `min_score` the score reaches wins. Scores below every
//!   tier get [`FALLBACK_TIER`].
//! - A missing score counts as `0`.
//! - When missing points are given, a blank line and the
//!   [`MISSING_POINTS_LABEL`] section listing them in order are appended.
//!
//! The output is fixed text and must stay byte-for-byte stable: clients
//! compare against it.

/// One row of the commentary table: two sentences, each ending in a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTier {
    pub min_score: i32,
    pub opening: &'static str,
    pub detail: &'static str,
}

/// Ordered from the highest threshold down.
pub const FEEDBACK_TIERS: &[FeedbackTier] = &[
    FeedbackTier {
        min_score: 16,
        opening: "Excellent travail ! ",
        detail: "Vous avez démontré une très bonne compréhension du sujet. ",
    },
    FeedbackTier {
        min_score: 12,
        opening: "Bon travail ! ",
        detail: "Vous avez une bonne compréhension globale, mais quelques améliorations sont possibles. ",
    },
    FeedbackTier {
        min_score: 10,
        opening: "Travail satisfaisant. ",
        detail: "Vous avez les bases, mais il reste des points à améliorer. ",
    },
];

pub static FALLBACK_TIER: FeedbackTier = FeedbackTier {
    min_score: i32::MIN,
    opening: "Des efforts supplémentaires sont nécessaires. ",
    detail: "Il est important de revoir les concepts clés. ",
};

pub const MISSING_POINTS_LABEL: &str = "Points à améliorer : ";

/// Picks the tier for `score`.
pub fn tier_for(score: i32) -> &'static FeedbackTier {
    FEEDBACK_TIERS
        .iter()
        .find(|tier| score >= tier.min_score)
        .unwrap_or(&FALLBACK_TIER)
}

/// Builds the feedback comment. Never fails and has no side effects.
pub fn generate_feedback_text<S: AsRef<str>>(score: Option<i32>, missing_points: &[S]) -> String {
    let tier = tier_for(score.unwrap_or(0));

    let mut feedback = String::new();
    feedback.push_str(tier.opening);
    feedback.push_str(tier.detail);

    if !missing_points.is_empty() {
        feedback.push_str("\n\n");
        feedback.push_str(MISSING_POINTS_LABEL);
        let points: Vec<&str> = missing_points.iter().map(|p| p.as_ref()).collect();
        feedback.push_str(&points.join(", "));
    }

    feedback
}
