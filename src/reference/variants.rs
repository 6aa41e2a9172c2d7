/// Alternative spellings and broader topics to try when a term misses.
///
/// The original term always comes first; the rest keep insertion order,
/// with duplicates and blank entries removed.
pub fn search_variations(term: &str) -> Vec<String> {
    let mut variations = vec![term.to_string()];
    let clean = term.trim().to_lowercase();

    if clean.contains("god") || clean.contains("divine") || clean.contains("holy") {
        if clean.contains("loving") {
            push_all(&mut variations, &["God", "Attributes of God", "Omnibenevolence"]);
        }
        if clean.contains("old testament") {
            push_all(&mut variations, &["God in the Hebrew Bible", "YHWH", "Theology"]);
        }
        if clean.contains("wrath") || clean.contains("anger") {
            push_all(
                &mut variations,
                &["Divine command theory", "Problem of evil", "Theodicy"],
            );
        }
    }

    if term.contains('-') {
        variations.push(term.replace('-', " "));
        variations.push(term.replace('-', ""));
    }

    if clean.contains("theodicy") {
        push_all(&mut variations, &["Theodicy", "Problem of evil"]);
    }

    if let Some(root) = clean.strip_suffix("ism") {
        variations.push(root.to_string());
    }

    if term.contains(char::is_whitespace) {
        variations.push(term.split_whitespace().collect::<String>());
    }

    let mut seen = std::collections::HashSet::new();
    variations
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

fn push_all(variations: &mut Vec<String>, extra: &[&str]) {
    variations.extend(extra.iter().map(|s| (*s).to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_term_is_first() {
        let v = search_variations("Utilitarianism");
        assert_eq!(v[0], "Utilitarianism");
        assert_eq!(v[1], "utilitarian");
    }

    #[test]
    fn hyphenated_terms_get_space_and_joined_forms() {
        assert_eq!(search_variations("free-will"), vec!["free-will", "free will", "freewill"]);
    }

    #[test]
    fn spaces_are_collapsed_for_sep_slugs() {
        assert_eq!(search_variations("moral luck"), vec!["moral luck", "moralluck"]);
    }

    #[test]
    fn theological_terms_broaden() {
        let v = search_variations("All-loving God");
        assert_eq!(
            v,
            vec![
                "All-loving God",
                "God",
                "Attributes of God",
                "Omnibenevolence",
                "All loving God",
                "Allloving God",
                "All-lovingGod",
            ]
        );
    }

    #[test]
    fn wrath_of_god_and_theodicy_deduplicate() {
        let v = search_variations("wrath of god theodicy");
        let theodicy = v.iter().filter(|s| s.as_str() == "Theodicy").count();
        let evil = v.iter().filter(|s| s.as_str() == "Problem of evil").count();
        assert_eq!(theodicy, 1);
        assert_eq!(evil, 1);
        assert_eq!(v[1], "Divine command theory");
    }

    #[test]
    fn old_testament_god() {
        let v = search_variations("God of the Old Testament");
        assert!(v.contains(&"YHWH".to_string()));
        assert!(v.contains(&"God in the Hebrew Bible".to_string()));
    }

    #[test]
    fn plain_term_has_single_variation() {
        assert_eq!(search_variations("Qualia"), vec!["Qualia"]);
    }

    #[test]
    fn bare_ism_root_is_dropped_when_blank() {
        assert_eq!(search_variations("ism"), vec!["ism"]);
    }
}
