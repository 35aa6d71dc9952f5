//! Variant selection stays in bounds and reaches every option.

use std::collections::BTreeSet;

use rejoinder::seed::{pick, pick_index, pick_with, Phrase, Seed};
use rejoinder::{LetterContext, NoticeFamily};

fn seeds() -> Vec<Seed> {
    ["0", "2p", "vhg8mu", "t1tlzg", "zik0zk"]
        .into_iter()
        .map(Seed::from_raw)
        .collect()
}

#[test]
fn empty_list_has_no_index() {
    for seed in seeds() {
        for offset in 0..10 {
            assert_eq!(pick_index(&seed, offset, 0), None);
        }
        assert_eq!(pick(&seed, 0, &[]), "");
    }
}

#[test]
fn single_option_is_always_chosen() {
    for seed in seeds() {
        for offset in 0..10 {
            assert_eq!(pick_index(&seed, offset, 1), Some(0));
            assert_eq!(pick(&seed, offset, &["only"]), "only");
        }
    }
}

#[test]
fn consecutive_offsets_visit_every_option() {
    let options = ["a", "b", "c", "d", "e"];
    for seed in seeds() {
        for start in [0_u32, 3, 17] {
            let visited: BTreeSet<&str> = (start..start.saturating_add(5))
                .map(|offset| pick(&seed, offset, &options))
                .collect();
            assert_eq!(visited.len(), options.len(), "seed {seed}");
        }
    }
}

#[test]
fn selection_is_repeatable() {
    let seed = Seed::from_raw("vhg8mu");
    let first: Vec<Option<usize>> = (0..20).map(|o| pick_index(&seed, o, 5)).collect();
    let second: Vec<Option<usize>> = (0..20).map(|o| pick_index(&seed, o, 5)).collect();
    assert_eq!(first, second);
    assert!(first.iter().all(|idx| idx.is_some_and(|i| i < 5)));
}

#[test]
fn phrase_builders_receive_the_context() {
    const PHRASES: [Phrase; 2] = [
        |ctx| format!("first {}", ctx.name()),
        |ctx| format!("second {}", ctx.name()),
    ];
    let ctx = LetterContext::new("CP14", NoticeFamily::Collection, " Jane Doe ");
    let text = pick_with(&Seed::from_raw("vhg8mu"), 0, &PHRASES, &ctx);
    assert!(text.ends_with(" Jane Doe"));
    assert_eq!(pick_with(&Seed::from_raw("x"), 0, &[], &ctx), "");
}
