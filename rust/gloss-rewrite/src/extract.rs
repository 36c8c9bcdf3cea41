//! The Tagged → Candidates transition.
//!
//! Groups the gap-separated token runs into scored [`Candidate`]s,
//! purges the ones whose short name never appears in the entry's
//! effect, and merges duplicates.

use indexmap::IndexMap;
use indexmap::map::Entry as Slot;

use crate::candidate::{Candidate, CandidateKey};
use crate::entry::{Candidates, Tagged};

/// The Tagged → Candidates transition.
pub fn advance(tagged: &Tagged) -> Candidates {
    let name = &tagged.base.name;

    // A gap or a capital-initial token opens a new group; the capital
    // token belongs to the group it opens.
    let mut groups: Vec<Candidate> = vec![Candidate::new(name)];
    for slot in &tagged.tokens {
        match slot {
            None => groups.push(Candidate::new(name)),
            Some(word) => {
                if word.text.chars().next().is_some_and(char::is_uppercase) {
                    groups.push(Candidate::new(name));
                }
                if let Some(top) = groups.last_mut() {
                    top.push(&word.text, word.tag);
                }
            }
        }
    }

    let mut merged: IndexMap<CandidateKey, Candidate> = IndexMap::new();
    for mut candidate in groups {
        if candidate.is_empty() {
            continue;
        }
        if candidate.purge(&tagged.base.takes, &tagged.base.leaves) {
            continue;
        }
        candidate.referenced();
        match merged.entry(candidate.key()) {
            Slot::Occupied(mut kept) => kept.get_mut().merge_score(&candidate),
            Slot::Vacant(free) => {
                free.insert(candidate);
            }
        }
    }

    // Ascending by score, so disambiguation later prefers the stronger
    // of two colliding candidates.
    let mut candidates: Vec<Candidate> = merged.into_values().collect();
    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));

    Candidates {
        base: tagged.base.clone(),
        candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Rendered, TaggedWord};
    use gloss_prose::Tag;
    use pretty_assertions::assert_eq;

    fn tagged(takes: &str, leaves: &str, tokens: Vec<Option<(&str, Tag)>>) -> Tagged {
        Tagged {
            base: Rendered {
                name: "test".into(),
                effect: String::new(),
                takes: takes.to_string(),
                leaves: leaves.to_string(),
                markdown: String::new(),
                corpus: String::new(),
                primer: String::new(),
                outbound: Vec::new(),
            },
            tokens: tokens
                .into_iter()
                .map(|slot| {
                    slot.map(|(text, tag)| TaggedWord {
                        text: text.to_string(),
                        tag,
                    })
                })
                .collect(),
        }
    }

    #[test]
    fn gaps_split_groups() {
        let input = tagged(
            "fk ",
            "",
            vec![
                Some(("front", Tag::Noun)),
                Some(("key", Tag::Noun)),
                None,
                Some(("lock", Tag::Noun)),
            ],
        );
        let out = advance(&input);
        assert_eq!(out.candidates.len(), 1);
        assert_eq!(out.candidates[0].short(), "fk");
        assert_eq!(out.candidates[0].long(), "front key");
    }

    #[test]
    fn capital_tokens_open_their_own_group() {
        let input = tagged(
            "F ",
            "",
            vec![
                Some(("some", Tag::Noun)),
                Some(("Front", Tag::ProperNoun)),
                Some(("thing", Tag::Noun)),
            ],
        );
        let out = advance(&input);
        // "some" purges away entirely; "Front thing" purges back to "F".
        assert_eq!(out.candidates.len(), 1);
        assert_eq!(out.candidates[0].short(), "F");
        assert_eq!(out.candidates[0].long(), "Front");
    }

    #[test]
    fn duplicates_merge_by_summing() {
        let input = tagged(
            "k ",
            "",
            vec![
                Some(("key", Tag::Noun)),
                None,
                Some(("key", Tag::Noun)),
            ],
        );
        let out = advance(&input);
        assert_eq!(out.candidates.len(), 1);
        // Each copy scores 1.0 from the survivor bonus; merge sums them.
        assert_eq!(out.candidates[0].score, 2.0);
    }

    #[test]
    fn candidates_sort_score_ascending() {
        let input = tagged(
            "k d ",
            "",
            vec![
                Some(("door", Tag::Noun)),
                None,
                Some(("key", Tag::Noun)),
                None,
                Some(("key", Tag::Noun)),
            ],
        );
        let out = advance(&input);
        let shorts: Vec<&str> = out.candidates.iter().map(Candidate::short).collect();
        assert_eq!(shorts, vec!["d", "k"]);
        assert!(out.candidates[0].score <= out.candidates[1].score);
    }
}
