use crate::models::{ReferenceRecord, SourceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Theology,
    Theodicy,
    Fallacy,
    Ethics,
    Mind,
    General,
}

struct Canned {
    definition: &'static str,
    philosophers: &'static [&'static str],
    reading: &'static [&'static str],
    concepts: &'static [&'static str],
}

fn classify(term: &str) -> Topic {
    let lower = term.to_lowercase();
    if lower.contains("god") || lower.contains("divine") {
        Topic::Theology
    } else if lower.contains("theodicy") {
        Topic::Theodicy
    } else if lower.contains("fallacy") {
        Topic::Fallacy
    } else if lower.contains("ethic") || lower.contains("moral") {
        Topic::Ethics
    } else if lower.contains("consciousness") || lower.contains("mind") {
        Topic::Mind
    } else {
        Topic::General
    }
}

fn canned(topic: Topic) -> Canned {
    match topic {
        Topic::Theology => Canned {
            definition: "A theological concept related to the nature, attributes, or actions of the divine. This term was discussed in the context of philosophical theology.",
            philosophers: &["Aquinas", "Augustine", "Anselm", "Maimonides"],
            reading: &[
                "Stanford Encyclopedia: Philosophy of Religion",
                "Routledge Companion to Philosophy of Religion",
                "The Cambridge Companion to Religious Studies",
            ],
            concepts: &["Theodicy", "Divine Attributes", "Problem of Evil", "Natural Theology"],
        },
        Topic::Theodicy => Canned {
            definition: "A concept in philosophical theology that addresses the problem of evil and suffering in relation to divine goodness and omnipotence.",
            philosophers: &["Leibniz", "Augustine", "Hick", "Plantinga"],
            reading: &[
                "Leibniz: Theodicy",
                "John Hick: Evil and the God of Love",
                "Alvin Plantinga: God, Freedom, and Evil",
            ],
            concepts: &["Problem of Evil", "Divine Attributes", "Free Will Defense"],
        },
        Topic::Fallacy => Canned {
            definition: "A logical fallacy or reasoning error that was identified in the philosophical discussion.",
            philosophers: &["Aristotle", "Mill", "Peirce", "Toulmin"],
            reading: &[
                "Aristotle: Sophistical Refutations",
                "Mill: System of Logic",
                "Toulmin: The Uses of Argument",
            ],
            concepts: &["Logic", "Critical Thinking", "Argumentation", "Rhetoric"],
        },
        Topic::Ethics => Canned {
            definition: "An ethical concept or principle discussed in the context of moral philosophy.",
            philosophers: &["Aristotle", "Kant", "Mill", "Rawls"],
            reading: &[
                "Aristotle: Nicomachean Ethics",
                "Kant: Groundwork for the Metaphysics of Morals",
                "Mill: Utilitarianism",
            ],
            concepts: &["Virtue Ethics", "Deontology", "Consequentialism", "Moral Responsibility"],
        },
        Topic::Mind => Canned {
            definition: "A concept in philosophy of mind concerning the nature of consciousness, mental states, or cognitive processes.",
            philosophers: &["Descartes", "Chalmers", "Dennett", "Nagel"],
            reading: &[
                "Chalmers: The Conscious Mind",
                "Dennett: Consciousness Explained",
                "Nagel: What Is It Like to Be a Bat?",
            ],
            concepts: &["Hard Problem of Consciousness", "Qualia", "Mind-Body Problem", "Intentionality"],
        },
        Topic::General => Canned {
            definition: "A philosophical concept or term discussed in the conversation.",
            philosophers: &["Plato", "Aristotle", "Kant", "Wittgenstein"],
            reading: &[
                "Stanford Encyclopedia of Philosophy",
                "Internet Encyclopedia of Philosophy",
                "Routledge Encyclopedia of Philosophy",
            ],
            concepts: &["Philosophy", "Critical Thinking", "Logic", "Argumentation"],
        },
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Locally synthesized entry used when no external source knows `term`.
pub fn fallback_record(term: &str) -> ReferenceRecord {
    let c = canned(classify(term));
    ReferenceRecord {
        title: term.to_string(),
        definition: c.definition.to_string(),
        related_concepts: owned(c.concepts),
        related_philosophers: owned(c.philosophers),
        further_reading: owned(c.reading),
        key_points: Vec::new(),
        thumbnail: None,
        source_url: None,
        source_kind: SourceKind::Fallback,
        original_term: Some(term.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_follows_keyword_priority() {
        assert_eq!(classify("Divine hiddenness"), Topic::Theology);
        assert_eq!(classify("God and theodicy"), Topic::Theology);
        assert_eq!(classify("Augustinian theodicy"), Topic::Theodicy);
        assert_eq!(classify("Genetic fallacy"), Topic::Fallacy);
        assert_eq!(classify("Metaethics"), Topic::Ethics);
        assert_eq!(classify("Moral luck"), Topic::Ethics);
        assert_eq!(classify("Extended mind"), Topic::Mind);
        assert_eq!(classify("Mereology"), Topic::General);
    }

    #[test]
    fn fallback_is_tagged_and_keeps_term() {
        let record = fallback_record("Panpsychist consciousness");
        assert_eq!(record.source_kind, SourceKind::Fallback);
        assert_eq!(record.title, "Panpsychist consciousness");
        assert_eq!(record.original_term.as_deref(), Some("Panpsychist consciousness"));
        assert!(record.related_philosophers.contains(&"Chalmers".to_string()));
        assert_eq!(record.source_url, None);
    }
}
