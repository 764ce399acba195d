use crate::types::{MatchMode, Recipe};

/// Number of candidates returned when a search matches nothing.
pub const FALLBACK_LEN: usize = 3;

/// Size of the curated subset returned by [`recommend`].
pub const CURATED_LEN: usize = 3;

/// Select the candidates that overlap the selected ingredient names.
///
/// A candidate qualifies when at least one of its ingredients and at least
/// one selected name match under `mode`. When nothing qualifies (an empty
/// selection included), the first [`FALLBACK_LEN`] candidates are returned
/// instead of an empty list, so a non-empty candidate set never produces an
/// empty result.
pub fn search(selected: &[String], candidates: &[Recipe], mode: MatchMode) -> Vec<Recipe> {
    let matched: Vec<Recipe> = candidates
        .iter()
        .filter(|candidate| matches_selection(candidate, selected, &mode))
        .cloned()
        .collect();

    if matched.is_empty() {
        tracing::debug!(
            ?selected,
            "no candidate overlaps the selection, returning the fallback prefix"
        );
        return candidates.iter().take(FALLBACK_LEN).cloned().collect();
    }

    matched
}

/// The fixed curated subset: the first [`CURATED_LEN`] of the given
/// candidates. Personalization is an upstream concern; an opaque user
/// identifier never changes what this returns.
pub fn recommend(candidates: &[Recipe]) -> Vec<Recipe> {
    candidates.iter().take(CURATED_LEN).cloned().collect()
}

fn matches_selection(candidate: &Recipe, selected: &[String], mode: &MatchMode) -> bool {
    candidate.ingredients.iter().any(|ingredient| {
        selected
            .iter()
            .any(|choice| names_match(ingredient, choice, mode))
    })
}

fn names_match(ingredient: &str, choice: &str, mode: &MatchMode) -> bool {
    match mode {
        MatchMode::Substring => {
            let ingredient = ingredient.to_lowercase();
            let choice = choice.to_lowercase();
            ingredient.contains(&choice) || choice.contains(&ingredient)
        }
        MatchMode::Token => ingredient
            .split_whitespace()
            .any(|left| {
                choice
                    .split_whitespace()
                    .any(|right| left.eq_ignore_ascii_case(right))
            }),
    }
}
