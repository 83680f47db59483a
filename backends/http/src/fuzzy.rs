//! Project-name resolution for the query source.
//!
//! Dataset directory names do not always match the names people type
//! (`MutantApeYachtClub` vs `Mutant Ape Yacht Club`, `CRYPTOPUNKS` vs
//! `CryptoPunks`). Names are compared on a normalized form first; when that
//! fails the caller gets the closest names back as suggestions.

/// Upper bound on suggestions returned for a miss.
pub const MAX_SUGGESTIONS: usize = 3;

/// Outcome of resolving a requested name against the dataset listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The name is listed verbatim.
    Exact(String),
    /// Exactly one listed name matches after normalization.
    Normalized(String),
    /// No single match; closest candidates, best first.
    Unknown(Vec<String>),
}

/// Lowercased ASCII-alphanumeric skeleton of a name.
pub fn normalize(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).map(|c| c.to_ascii_lowercase()).collect()
}

/// Resolve `query` against the listed `names`.
pub fn resolve(names: &[String], query: &str) -> Resolution {
    if names.iter().any(|name| name == query) {
        return Resolution::Exact(query.to_string());
    }

    let wanted = normalize(query);
    let matches: Vec<&String> = names.iter().filter(|name| normalize(name) == wanted).collect();
    match matches.as_slice() {
        [only] => Resolution::Normalized((*only).clone()),
        [] => Resolution::Unknown(suggest(names, query)),
        several =>
            Resolution::Unknown(several.iter().take(MAX_SUGGESTIONS).map(|n| (*n).clone()).collect()),
    }
}

/// Listed names closest to `query`, ranked by edit distance on normalized
/// names. Ties keep listing order.
pub fn suggest(names: &[String], query: &str) -> Vec<String> {
    let wanted = normalize(query);
    let threshold = (wanted.chars().count() / 3).max(3);

    let mut scored: Vec<(usize, usize, &String)> = names
        .iter()
        .enumerate()
        .filter_map(|(position, name)| {
            let candidate = normalize(name);
            let distance = levenshtein(&wanted, &candidate);
            let overlaps = !wanted.is_empty()
                && !candidate.is_empty()
                && (candidate.contains(&wanted) || wanted.contains(&candidate));
            (distance <= threshold || overlaps).then_some((distance, position, name))
        })
        .collect();

    scored.sort_by_key(|(distance, position, _)| (*distance, *position));
    scored.into_iter().take(MAX_SUGGESTIONS).map(|(_, _, name)| name.clone()).collect()
}

/// Character-level edit distance.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<String> {
        ["BoredApeYachtClub", "Mutant Ape Yacht Club", "Cool Cats", "CryptoPunks", "Azuki"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("azuki", ""), 5);
        assert_eq!(levenshtein("coolcats", "collcats"), 1);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Mutant Ape Yacht Club"), "mutantapeyachtclub");
        assert_eq!(normalize("Wizards & Dragons Game"), "wizardsdragonsgame");
        assert_eq!(normalize("Murakami.Flowers"), "murakamiflowers");
    }

    #[test]
    fn test_resolve_exact_and_normalized() {
        let names = listing();
        assert_eq!(resolve(&names, "Azuki"), Resolution::Exact("Azuki".to_string()));
        assert_eq!(
            resolve(&names, "MutantApeYachtClub"),
            Resolution::Normalized("Mutant Ape Yacht Club".to_string())
        );
        assert_eq!(resolve(&names, "CRYPTOPUNKS"), Resolution::Normalized("CryptoPunks".to_string()));
        assert_eq!(resolve(&names, "cool cats"), Resolution::Normalized("Cool Cats".to_string()));
    }

    #[test]
    fn test_resolve_suggests_near_misses() {
        let names = listing();
        match resolve(&names, "Coll Cats") {
            Resolution::Unknown(suggestions) => assert_eq!(suggestions[0], "Cool Cats"),
            other => panic!("expected suggestions, got {:?}", other),
        }
        assert_eq!(resolve(&names, "Bored Ape"), Resolution::Unknown(vec!["BoredApeYachtClub".to_string()]));
        assert_eq!(resolve(&names, "Zzyzx Qwerty Collective"), Resolution::Unknown(vec![]));
    }

    #[test]
    fn test_duplicate_normalized_names_are_ambiguous() {
        let names = vec!["Cool Cats".to_string(), "COOL-CATS".to_string()];
        assert_eq!(
            resolve(&names, "coolcats"),
            Resolution::Unknown(vec!["Cool Cats".to_string(), "COOL-CATS".to_string()])
        );
    }
}
