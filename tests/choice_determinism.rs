use std::collections::BTreeSet;

use value_enum::{declare_member, Enum, Member};

declare_member! {
    pub struct Color(&'static str);
}

fn colors() -> Enum<Color> {
    Enum::new([Color::new("red"), Color::new("green"), Color::new("blue")])
}

#[test]
fn choice_returns_a_member() {
    let colors = colors();
    for seed in [0, 42, 254, 1337, u64::MAX] {
        let picked = colors.choice(seed).expect("non-empty enum must pick");
        assert!(colors.contains(picked));
    }
}

#[test]
fn same_seed_same_member() {
    let colors = colors();
    for seed in 0..64 {
        let first = colors.choice(seed).unwrap();
        let second = colors.choice(seed).unwrap();
        assert!(std::ptr::eq(first, second), "seed {seed} picked differently");
    }
}

#[test]
fn equal_enums_agree() {
    let a = colors();
    let b = colors();
    for seed in [0, 7, 42, 254, 1337] {
        assert_eq!(a.choice(seed), b.choice(seed));
    }
}

#[test]
fn seeds_reach_every_member() {
    let colors = colors();
    let picked: BTreeSet<&str> = (0..256)
        .filter_map(|seed| colors.choice(seed))
        .map(|c| c.val)
        .collect();
    assert_eq!(picked.len(), colors.len());
}

#[test]
fn empty_enum_never_picks() {
    let empty: Enum<Color> = Enum::new([]);
    for seed in [0, 1, 42, u64::MAX] {
        assert!(empty.choice(seed).is_none());
    }
}

#[test]
fn single_member_is_always_picked() {
    let only = Enum::new([Member::new(7_u8)]);
    for seed in 0..16 {
        assert_eq!(only.choice(seed), Some(&Member::new(7)));
    }
}

/// Pinned outputs of ChaCha8 seeded from the seed with one
/// `random_range(0..len)` draw. A change here breaks every stored seed.
#[test]
fn golden_choice_outputs() {
    let colors = colors();
    let cases = [(0, "green"), (42, "red"), (254, "red"), (1337, "blue")];

    for (seed, want) in cases {
        let picked = colors.choice(seed).map(|c| c.val);
        assert_eq!(picked, Some(want), "seed {seed}");
    }
}
