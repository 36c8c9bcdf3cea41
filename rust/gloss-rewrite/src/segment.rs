//! Effect segmentation — separating the effect text from the prose.
//!
//! Descriptions in the recommended grammar open with a bracketed effect,
//! optionally followed by a `:` qualifier, then free prose:
//!
//! ```text
//! ( a b -- c ): consumes a and b, leaves c behind. More prose...
//! ```
//!
//! The segmenter is noise-tolerant: it does not require balanced
//! brackets, only a plausible close. Inside the effect text, every
//! parenthesized group carrying a bare `--` separator is peeled — the
//! part before the separator accumulates into `takes`, and whatever
//! text remains after all peels is `leaves`.

use std::ops::Range;

use crate::entry::{Draft, Segmented};

/// A segmented description.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    /// The recorded effect segment text, close paren and qualifier
    /// included.
    pub effect: String,
    pub takes: String,
    pub leaves: String,
    /// Everything after the effect segment.
    pub prose: String,
}

/// The Draft → Segmented transition.
pub fn advance(draft: &Draft) -> Segmented {
    let seg = segment(&draft.description);
    Segmented {
        name: draft.name.clone(),
        effect: seg.effect,
        takes: seg.takes,
        leaves: seg.leaves,
        prose: seg.prose,
    }
}

/// Split `description` into effect segment, takes, leaves and prose.
pub fn segment(description: &str) -> Segmentation {
    let no_effect = || Segmentation {
        effect: String::new(),
        takes: String::new(),
        leaves: String::new(),
        prose: description.to_string(),
    };

    if !description.starts_with('(') {
        return no_effect();
    }
    let Some(close) = find_close(description) else {
        return no_effect();
    };

    let effect_text = &description[..close.paren];
    let after = &description[close.resume..];
    let prose_offset = after
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace() && c != ':')
        .map(|(offset, _)| offset);

    let (effect, prose) = match prose_offset {
        Some(offset) => (
            description[..close.resume + offset].trim_end().to_string(),
            after[offset..].to_string(),
        ),
        None => (description[..close.paren + 1].to_string(), String::new()),
    };

    let (takes, leaves) = peel(effect_text);
    Segmentation {
        effect,
        takes,
        leaves,
        prose,
    }
}

struct Close {
    /// Byte index of the closing paren.
    paren: usize,
    /// Byte index at which the scan for prose resumes.
    resume: usize,
}

/// Find the effect's closing paren: the first `)` followed by a
/// non-paren run ending in `:` (qualifier form) or by whitespace to the
/// end; failing both, the last `)` in the description.
fn find_close(description: &str) -> Option<Close> {
    for (index, c) in description.char_indices() {
        if c != ')' {
            continue;
        }
        let rest = &description[index + 1..];
        if let Some(stop) = rest.find([':', ')']) {
            if rest.as_bytes()[stop] == b':' {
                return Some(Close {
                    paren: index,
                    resume: index + 1 + stop + 1,
                });
            }
        }
        if rest.trim().is_empty() {
            return Some(Close {
                paren: index,
                resume: description.len(),
            });
        }
    }
    description.rfind(')').map(|index| Close {
        paren: index,
        resume: index + 1,
    })
}

struct Peel {
    open: usize,
    takes: Range<usize>,
    end: usize,
}

/// Peel every parenthesized `--` group out of the effect text.
pub fn peel(effect_text: &str) -> (String, String) {
    let mut takes = String::new();
    let mut leaves = effect_text.to_string();
    while let Some(found) = find_peel(&leaves) {
        takes.push_str(&leaves[found.takes.clone()]);
        let mut rest = String::with_capacity(leaves.len());
        rest.push_str(&leaves[..found.open]);
        rest.push_str(&leaves[found.end..]);
        leaves = rest;
    }
    (takes, leaves)
}

/// The leftmost `(` followed (non-greedily) by a whitespace-preceded
/// `--` that is itself followed by whitespace or the end. The takes
/// range spans from past the `(` to the separator, trailing whitespace
/// included; `end` is past the separator and its trailing whitespace.
fn find_peel(s: &str) -> Option<Peel> {
    let mut search_from = 0;
    while let Some(rel) = s[search_from..].find('(') {
        let open = search_from + rel;
        let mut from = open + 1;
        while let Some(dash_rel) = s[from..].find("--") {
            let dash = from + dash_rel;
            let preceded = s[open + 1..dash]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace);
            let after = &s[dash + 2..];
            let followed = after.is_empty()
                || after.chars().next().is_some_and(char::is_whitespace);
            if preceded && followed {
                let ws_len = after.len() - after.trim_start().len();
                return Some(Peel {
                    open,
                    takes: (open + 1)..dash,
                    end: dash + 2 + ws_len,
                });
            }
            from = dash + 2;
        }
        search_from = open + 1;
    }
    None
}
