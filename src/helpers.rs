use strsim::levenshtein;

/// Find the closest candidate within edit distance 2, skipping exact matches.
pub fn find_similar<'a>(target: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|&candidate| (candidate, levenshtein(target, candidate)))
        .filter(|(_, distance)| (1..=2).contains(distance))
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_similar() {
        let candidates = ["true"];

        assert_eq!(find_similar("ture", &candidates), Some("true"));
        assert_eq!(find_similar("tru", &candidates), Some("true"));

        // Exact match is not a typo
        assert_eq!(find_similar("true", &candidates), None);

        // Very different values should return None
        assert_eq!(find_similar("false", &candidates), None);
        assert_eq!(find_similar("", &candidates), None);
    }
}
