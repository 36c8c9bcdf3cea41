//! The Segmented → Rendered transition.
//!
//! Prose renders through [`gloss_prose::render`] into a span stream.
//! Text spans accumulate into the corpus; an inline-code span naming
//! another known entry leaves a `...` placeholder in the corpus and
//! records an outbound reference. A reference preceded by an alias cue
//! (`same as`, `version of`, `variation of`) is a same-as bound, which
//! is stronger than a plain mention.

use gloss_prose::Span;
use indexmap::IndexMap;

use crate::entry::{Reference, Rendered, Segmented};
use crate::text::TextServices;
use crate::world::World;

/// Strength of a same-as outbound reference.
const STRENGTH_SAME_AS: f64 = 1.0;
/// Strength of a plain outbound reference.
const STRENGTH_MENTION: f64 = 0.5;

/// The Segmented → Rendered transition.
pub fn advance(
    segmented: &Segmented,
    world: &World<'_>,
    text: &impl TextServices,
) -> Rendered {
    let rendered = text.render(&segmented.prose);

    let mut fragments: Vec<String> = Vec::new();
    // Name → whether any mention carried the alias cue.
    let mut outbound: IndexMap<String, bool> = IndexMap::new();
    for span in &rendered.spans {
        match span {
            Span::Text(fragment) => fragments.push(fragment.clone()),
            Span::Code(name) => {
                if !world.is_named(name) || name == &segmented.name {
                    continue;
                }
                let same_as = fragments
                    .last()
                    .is_some_and(|fragment| ends_with_alias_cue(fragment));
                fragments.push("...".to_string());
                *outbound.entry(name.clone()).or_insert(false) |= same_as;
            }
        }
    }

    let corpus = fragments
        .iter()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let outbound = outbound
        .into_iter()
        .map(|(name, same_as)| Reference {
            name,
            strength: if same_as {
                STRENGTH_SAME_AS
            } else {
                STRENGTH_MENTION
            },
            same_as,
        })
        .collect();

    let primer = if rendered.markdown.is_empty() {
        String::new()
    } else {
        text.first_sentence(&gloss_prose::collapse_whitespace(&rendered.markdown))
    };

    Rendered {
        name: segmented.name.clone(),
        effect: segmented.effect.clone(),
        takes: segmented.takes.clone(),
        leaves: segmented.leaves.clone(),
        markdown: rendered.markdown,
        corpus,
        primer,
        outbound,
    }
}

/// Whether a corpus fragment ends in an alias cue. The words may run
/// together or carry extra whitespace, matching prose as people
/// actually write it.
fn ends_with_alias_cue(fragment: &str) -> bool {
    let lower = fragment.to_lowercase();
    let trimmed = lower.trim_end();
    if let Some(head) = trimmed.strip_suffix("as") {
        return head.trim_end().ends_with("same");
    }
    if let Some(head) = trimmed.strip_suffix("of") {
        let head = head.trim_end();
        return head.ends_with("version") || head.ends_with("variation");
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Entry, RawEntry};
    use crate::text::StandardText;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn fixture(names: &[&str]) -> (Vec<Entry>, IndexMap<String, usize>) {
        let generation: Vec<Entry> = names
            .iter()
            .map(|name| {
                Entry::Raw(RawEntry {
                    name: name.to_string(),
                    description: String::new(),
                })
            })
            .collect();
        let index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), i))
            .collect();
        (generation, index)
    }

    fn segmented(name: &str, prose: &str) -> Segmented {
        Segmented {
            name: name.to_string(),
            effect: String::new(),
            takes: String::new(),
            leaves: String::new(),
            prose: prose.to_string(),
        }
    }

    #[test]
    fn known_references_leave_a_placeholder() {
        let (generation, names) = fixture(&["door", "key"]);
        let world = World::new(&generation, &names, 0);
        let rendered = advance(
            &segmented("door", "Opened with a `key` or forced."),
            &world,
            &StandardText,
        );
        assert_eq!(rendered.corpus, "Opened with a ... or forced.");
        assert_eq!(rendered.outbound.len(), 1);
        assert_eq!(rendered.outbound[0].name, "key");
        assert_eq!(rendered.outbound[0].strength, 0.5);
        assert!(!rendered.outbound[0].same_as);
    }

    #[test]
    fn unknown_and_self_references_vanish() {
        let (generation, names) = fixture(&["door", "key"]);
        let world = World::new(&generation, &names, 0);
        let rendered = advance(
            &segmented("door", "See `door` and `lockpick`."),
            &world,
            &StandardText,
        );
        assert_eq!(rendered.corpus, "See and .");
        assert!(rendered.outbound.is_empty());
    }

    #[test]
    fn alias_cue_strengthens_the_reference() {
        let (generation, names) = fixture(&["portal", "door"]);
        let world = World::new(&generation, &names, 0);
        let rendered = advance(
            &segmented("portal", "Same as `door`, but shimmering."),
            &world,
            &StandardText,
        );
        assert_eq!(rendered.outbound[0].name, "door");
        assert_eq!(rendered.outbound[0].strength, 1.0);
        assert!(rendered.outbound[0].same_as);
    }

    #[test]
    fn repeat_mentions_deduplicate_and_keep_the_cue() {
        let (generation, names) = fixture(&["portal", "door"]);
        let world = World::new(&generation, &names, 0);
        let rendered = advance(
            &segmented("portal", "Like a `door`. A variation of `door`."),
            &world,
            &StandardText,
        );
        assert_eq!(rendered.outbound.len(), 1);
        assert!(rendered.outbound[0].same_as);
    }

    #[test]
    fn primer_is_the_first_sentence() {
        let (generation, names) = fixture(&["door"]);
        let world = World::new(&generation, &names, 0);
        let rendered = advance(
            &segmented("door", "Opens. Closes too.\n\nSlams sometimes."),
            &world,
            &StandardText,
        );
        assert_eq!(rendered.primer, "Opens.");
    }

    #[test]
    fn alias_cues_match_loosely() {
        assert!(ends_with_alias_cue("this is the same as "));
        assert!(ends_with_alias_cue("a version of"));
        assert!(ends_with_alias_cue("a Variation  of "));
        assert!(!ends_with_alias_cue("made of"));
        assert!(!ends_with_alias_cue("just the same"));
    }
}
