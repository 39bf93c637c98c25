use pretty_assertions::assert_eq;
use value_enum::{declare_member, Builder, Enum};

declare_member! {
    pub struct Country(String);
}

#[test]
fn builder_keeps_addition_order() {
    let mut b = Builder::new();
    let nl = b.add(Country::new("Netherlands".to_string()));
    let fr = b.add(Country::new("France".to_string()));
    let be = b.add(Country::new("Belgium".to_string()));
    let countries = b.build();

    assert_eq!(countries.members(), vec![nl, fr, be]);
}

#[test]
fn add_returns_the_member() {
    let mut b = Builder::new();
    let nl = b.add(Country::new("Netherlands".to_string()));
    assert_eq!(nl.val, "Netherlands");
    assert_eq!(b.len(), 1);
}

#[test]
fn build_deduplicates_like_new() {
    let mut b = Builder::default();
    let red = b.add(Country::new("red".to_string()));
    let green = b.add(Country::new("green".to_string()));
    b.add(Country::new("red".to_string()));
    assert_eq!(b.len(), 3);

    let built = b.build();
    assert_eq!(built.members(), vec![red.clone(), green.clone()]);
    assert_eq!(built, Enum::new([red, green]));
}

#[test]
fn empty_builder_builds_empty_enum() {
    let b: Builder<Country> = Builder::new();
    assert!(b.is_empty());
    assert!(b.build().is_empty());
}

#[test]
fn built_enum_contains_every_added_member() {
    let mut b = Builder::new();
    let members: Vec<Country> = ["red", "green", "blue"]
        .into_iter()
        .map(|name| b.add(Country::new(name.to_string())))
        .collect();
    let colors = b.build();

    for m in &members {
        assert!(colors.contains(m));
    }
}
