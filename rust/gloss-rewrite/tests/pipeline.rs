//! End-to-end pipeline runs over small entity documents.

use gloss_rewrite::{RawEntry, compile};
use pretty_assertions::assert_eq;
use serde_json::json;

fn raw(name: &str, description: &str) -> RawEntry {
    RawEntry {
        name: name.to_string(),
        description: description.to_string(),
    }
}

#[test]
fn a_document_compiles_to_pooled_json() {
    let knowledge = compile(vec![
        raw("door", "( -- D ): The Door. It is sturdy."),
        raw("open", "( D -- D ): opens a `door`."),
    ])
    .unwrap();
    let value = serde_json::to_value(&knowledge).unwrap();

    // One shared effect signature, referenced by both entities.
    assert_eq!(
        value["pool"],
        json!([{ "short": "D", "long": "Door", "entities": [0, 1] }])
    );

    let door = &value["entities"][0];
    assert_eq!(door["name"], "door");
    assert_eq!(door["effect"], "( -- D ):");
    assert_eq!(door["primer"], "The Door.");
    assert_eq!(door["takes"], json!([]));
    assert_eq!(door["leaves"], json!([[0, 0]]));
    assert_eq!(door["erefs"], json!([[0, 0]]));
    assert_eq!(door["outbound"], json!([]));

    // "open" borrows the effect through its outbound reference; its
    // eref points at pool slot 0, owned by entity 0.
    let open = &value["entities"][1];
    assert_eq!(open["takes"], json!([[0, 0]]));
    assert_eq!(open["leaves"], json!([[0, 0]]));
    assert_eq!(open["erefs"], json!([[0, 0]]));
    assert_eq!(open["outbound"], json!([0]));
}

#[test]
fn entries_without_effects_still_finish() {
    let knowledge = compile(vec![raw("note", "Just prose, nothing else.")]).unwrap();
    assert_eq!(knowledge.entities.len(), 1);
    assert_eq!(knowledge.entities[0].effect, "");
    assert_eq!(knowledge.entities[0].primer, "Just prose, nothing else.");
    assert!(knowledge.pool.is_empty());
}

#[test]
fn same_as_entries_share_their_candidates() {
    let knowledge = compile(vec![
        raw("portal", "( G -- ): The same as `gate`."),
        raw("gate", "( G -- ): The Gate closes."),
    ])
    .unwrap();
    // "portal" never capitalizes a G-word itself; the eref comes from
    // "gate" through the same-as reference.
    let portal = &knowledge.entities[0];
    match &portal.erefs[0] {
        gloss_rewrite::entry::ErefSlot::Pooled(slot) => assert_eq!(*slot, [0, 1]),
        other => panic!("expected a pooled eref, got {other:?}"),
    }
    assert_eq!(knowledge.pool[0].short, "G");
    assert_eq!(knowledge.pool[0].long, "Gate");
}

#[test]
fn reruns_serialize_byte_identically() {
    let document = vec![
        raw("door", "( -- D ): The Door. Same as `portal`."),
        raw("portal", "( -- D ): A shimmering Door."),
        raw("open", "( D -- ): opens a `door` or a `portal`."),
    ];
    let first = serde_json::to_string(&compile(document.clone()).unwrap()).unwrap();
    let second = serde_json::to_string(&compile(document).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn a_cyclic_same_as_pair_still_terminates() {
    let knowledge = compile(vec![
        raw("alpha", "( F -- ): The same as `beta`."),
        raw("beta", "( F -- ): The same as `alpha`. The Foo."),
    ])
    .unwrap();
    // Both resolve to beta's "Foo" candidate through the cycle.
    assert_eq!(knowledge.pool.len(), 1);
    assert_eq!(knowledge.pool[0].short, "F");
    assert_eq!(knowledge.pool[0].long, "Foo");
    assert_eq!(knowledge.pool[0].entities, vec![0, 1]);
}

#[test]
fn effect_segments_peel_and_references_render_as_placeholders() {
    use gloss_rewrite::entry::{Entry, Segmented};
    use gloss_rewrite::world::World;
    use gloss_rewrite::{StandardText, render, segment};
    use indexmap::IndexMap;

    let seg = segment::segment("(a take -- b leaves) The same as `X`.");
    assert_eq!(seg.takes, "a take ");
    assert_eq!(seg.leaves, "b leaves");
    assert_eq!(seg.prose, "The same as `X`.");

    let generation = vec![
        Entry::Raw(raw("A", "(a take -- b leaves) The same as `X`.")),
        Entry::Raw(raw("X", "( -- )")),
    ];
    let names: IndexMap<String, usize> = generation
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.name().to_string(), i))
        .collect();
    let world = World::new(&generation, &names, 0);
    let rendered = render::advance(
        &Segmented {
            name: "A".to_string(),
            effect: seg.effect,
            takes: seg.takes,
            leaves: seg.leaves,
            prose: seg.prose,
        },
        &world,
        &StandardText,
    );
    assert_eq!(rendered.corpus, "The same as ... .");
    assert_eq!(rendered.outbound.len(), 1);
    assert_eq!(rendered.outbound[0].name, "X");
    assert_eq!(rendered.outbound[0].strength, 1.0);
    assert!(rendered.outbound[0].same_as);
}
