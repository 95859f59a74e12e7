//! Plan search and ranking
//!
//! This module implements the discovery filters over the in-memory plan
//! snapshot: exact category filtering and case-insensitive free-text search
//! with additive relevance scoring. Both operate only on active plans and
//! are pure functions of their inputs, so repeated invocations over the
//! same snapshot always produce the same ordered result.

use crate::models::Plan;

/// Relevance weights for free-text matching
const SCORE_TITLE_CONTAINS: u32 = 10;
const SCORE_TITLE_PREFIX: u32 = 5;
const SCORE_DESCRIPTION_CONTAINS: u32 = 3;
const SCORE_LOCATION_CONTAINS: u32 = 2;
const SCORE_CATEGORY_CONTAINS: u32 = 1;

/// Filter active plans by exact category label, preserving input order
pub fn filter_by_category<'a>(plans: &'a [Plan], category: &str) -> Vec<&'a Plan> {
    plans
        .iter()
        .filter(|plan| plan.is_active() && plan.categories.iter().any(|c| c == category))
        .collect()
}

/// Free-text search over active plans, ordered by descending relevance.
///
/// Matching is case-insensitive substring containment over title,
/// description, location and category tags. Ties keep the original
/// relative order (stable sort). An empty query matches nothing.
pub fn search_plans<'a>(plans: &'a [Plan], query: &str) -> Vec<&'a Plan> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut scored: Vec<(u32, &Plan)> = plans
        .iter()
        .filter(|plan| plan.is_active())
        .filter_map(|plan| {
            let score = relevance_score(plan, &needle);
            (score > 0).then_some((score, plan))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, plan)| plan).collect()
}

/// Additive relevance score for a plan against a lowercased query
pub fn relevance_score(plan: &Plan, needle: &str) -> u32 {
    let mut score = 0;

    let title = plan.title.to_lowercase();
    if title.contains(needle) {
        score += SCORE_TITLE_CONTAINS;
        if title.starts_with(needle) {
            score += SCORE_TITLE_PREFIX;
        }
    }

    if plan.description.to_lowercase().contains(needle) {
        score += SCORE_DESCRIPTION_CONTAINS;
    }

    if plan.location.to_lowercase().contains(needle) {
        score += SCORE_LOCATION_CONTAINS;
    }

    if plan
        .categories
        .iter()
        .any(|c| c.to_lowercase().contains(needle))
    {
        score += SCORE_CATEGORY_CONTAINS;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanStatus;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn plan(id: i64, title: &str, description: &str, location: &str, categories: &[&str]) -> Plan {
        let now = Utc::now();
        Plan {
            id,
            title: title.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            date: now + Duration::days(3),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            max_participants: 10,
            creator_id: Uuid::new_v4(),
            participants: vec![],
            status: PlanStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_plans() -> Vec<Plan> {
        vec![
            plan(
                1,
                "Concierto en el parque",
                "Música en vivo al aire libre",
                "Madrid",
                &["Música"],
            ),
            plan(
                2,
                "Cena italiana",
                "Pasta casera",
                "Barcelona",
                &["Gastronomía"],
            ),
        ]
    }

    #[test]
    fn test_category_filter_exact_match() {
        let plans = sample_plans();
        let visible = filter_by_category(&plans, "Música");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn test_category_filter_skips_inactive() {
        let mut plans = sample_plans();
        plans[0].status = PlanStatus::Cancelled;
        assert!(filter_by_category(&plans, "Música").is_empty());
    }

    #[test]
    fn test_category_filter_preserves_input_order() {
        let plans = vec![
            plan(1, "a", "", "x", &["Deporte"]),
            plan(2, "b", "", "y", &["Deporte"]),
            plan(3, "c", "", "z", &["Deporte"]),
        ];
        let ids: Vec<i64> = filter_by_category(&plans, "Deporte")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_free_text_title_prefix_match() {
        let plans = sample_plans();
        let visible = search_plans(&plans, "conc");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
        assert_eq!(relevance_score(&plans[0], "conc"), 15);
    }

    #[test]
    fn test_free_text_case_insensitive() {
        let plans = sample_plans();
        let visible = search_plans(&plans, "CENA");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let plans = sample_plans();
        assert!(search_plans(&plans, "").is_empty());
    }

    #[test]
    fn test_ranking_title_beats_description() {
        let plans = vec![
            plan(1, "Senderismo suave", "Caminata corta", "Sierra", &[]),
            plan(2, "Ruta al amanecer", "Senderismo exigente", "Sierra", &[]),
        ];
        let ids: Vec<i64> = search_plans(&plans, "senderismo")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_scores_are_additive() {
        let p = plan(
            1,
            "Yoga en el parque",
            "Sesión de yoga",
            "Parque del Retiro",
            &["Yoga"],
        );
        // title contains + prefix, description, category
        assert_eq!(relevance_score(&p, "yoga"), 10 + 5 + 3 + 1);
        // title and location both mention "parque", no prefix bonus
        assert_eq!(relevance_score(&p, "parque"), 10 + 2);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let plans = vec![
            plan(1, "Cine al aire libre", "", "Plaza", &[]),
            plan(2, "Cine clásico", "", "Centro", &[]),
            plan(3, "Cine de verano", "", "Parque", &[]),
        ];
        let ids: Vec<i64> = search_plans(&plans, "cine").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_inactive_plans_never_match() {
        let mut plans = sample_plans();
        plans[1].status = PlanStatus::Completed;
        assert!(search_plans(&plans, "cena").is_empty());
    }
}
