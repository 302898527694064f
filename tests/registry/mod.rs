use trace_splice::registry::BoundaryRegistry;

#[test]
fn key_is_stable_for_the_life_of_the_registry() {
    let registry = BoundaryRegistry::new();
    let first = registry.key();
    for _ in 0..100 {
        assert_eq!(registry.key(), first);
    }
}

#[test]
fn distinct_registries_never_share_a_key() {
    let registries: Vec<BoundaryRegistry> =
        (0..64).map(|_| BoundaryRegistry::new()).collect();
    let mut keys: Vec<_> = registries.iter().map(|r| r.key()).collect();

    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), registries.len());
}

#[test]
fn default_behaves_like_new() {
    let registry = BoundaryRegistry::default();
    assert_eq!(registry.key(), registry.key());
}

#[test]
fn keys_survive_registry_moves() {
    let registry = BoundaryRegistry::new();
    let key = registry.key();
    let moved = registry;
    assert_eq!(moved.key(), key);
}
