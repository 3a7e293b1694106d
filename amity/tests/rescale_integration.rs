//! End-to-end behaviour of the rescaling store through the public API

use amity::prelude::*;
use uuid::Uuid;

fn person(name: &str, value: f64) -> Person {
    Person::new(Uuid::new_v4(), name, value)
}

fn values(store: &RelationshipStore) -> Vec<f64> {
    let mut values: Vec<f64> = store.persons().map(|p| p.value()).collect();
    values.sort_by(f64::total_cmp);
    values
}

#[test]
fn test_overflowing_introduction_scenario() {
    let mut store = RelationshipStore::new(Bounds::standard());
    for (name, value) in [("steve", 1.0), ("alex", 0.0), ("herobrine", -2.0)] {
        store.add(person(name, value)).unwrap();
    }

    let multiplier = store.introduce_safe(person("notch", 4.0)).unwrap();

    assert_eq!(multiplier, Some(0.5));
    assert_eq!(values(&store), vec![-1.0, 0.0, 0.5, 2.0]);

    let mut allies: Vec<f64> = store
        .by_association(Association::Ally)
        .iter()
        .map(Person::value)
        .collect();
    allies.sort_by(f64::total_cmp);
    assert_eq!(allies, vec![0.5, 2.0]);

    let neutral = store.by_exact_value(0.0);
    assert_eq!(neutral.len(), 1);
    assert_eq!(neutral[0].name, "alex");
}

#[test]
fn test_long_sequences_stay_in_bounds() {
    let bounds = Bounds::new(-3.0, 5.0).unwrap();
    let mut store = RelationshipStore::new(bounds);

    // deterministic spread of in-range and far out-of-range values
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    for i in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        let unit = (seed % 10_000) as f64 / 10_000.0;
        let value = (unit - 0.5) * 40.0;

        store
            .introduce_safe(person(&format!("p{}", i), value))
            .unwrap();
        assert!(store.verify_invariant().is_ok(), "out of bounds after {}", i);
    }

    assert_eq!(store.len(), 500);
    assert!(
        store
            .persons()
            .all(|p| p.value() >= bounds.minimum() && p.value() <= bounds.maximum())
    );
}

#[test]
fn test_rescale_preserves_ratios_and_signs() {
    let mut store = RelationshipStore::new(Bounds::standard());
    let a = person("a", 1.5);
    let b = person("b", -0.75);
    let c = person("c", 0.0);
    let (a_id, b_id, c_id) = (a.id(), b.id(), c.id());
    for p in [a, b, c] {
        store.add(p).unwrap();
    }

    store.introduce_safe(person("d", -7.0)).unwrap();

    let a = store.get(a_id).unwrap().value();
    let b = store.get(b_id).unwrap().value();
    assert!((a / b - (1.5 / -0.75)).abs() < 1e-12);
    assert!(a > 0.0 && b < 0.0);
    assert_eq!(store.get(c_id).unwrap().value(), 0.0);
}

#[test]
fn test_in_bounds_introduction_leaves_others_untouched() {
    let mut store = RelationshipStore::new(Bounds::standard());
    let existing = person("a", 1.234_567_891_011);
    let id = existing.id();
    store.add(existing).unwrap();

    assert_eq!(store.introduce_safe(person("b", 2.0)).unwrap(), None);
    assert_eq!(store.introduce_safe(person("c", -2.0)).unwrap(), None);

    assert_eq!(
        store.get(id).unwrap().value().to_bits(),
        1.234_567_891_011_f64.to_bits()
    );
}

#[tokio::test]
async fn test_init_builds_store_from_config() {
    let config = ConfigBuilder::new()
        .with_bounds(-10.0, 4.0)
        .with_duplicate_policy(DuplicatePolicy::Overwrite)
        .build()
        .unwrap();

    let store = init(&config).unwrap();
    let bounds = store.bounds().await;
    assert_eq!((bounds.minimum(), bounds.maximum()), (-10.0, 4.0));

    let id = Uuid::new_v4();
    store.add(Person::new(id, "first", 1.0)).await.unwrap();
    store.add(Person::new(id, "second", 3.0)).await.unwrap();
    assert_eq!(store.get(id).await.unwrap().name, "second");
}

#[test]
fn test_init_rejects_invalid_bounds() {
    let mut config = AmityConfig::default();
    config.bounds.minimum = 1.0;
    config.bounds.maximum = 3.0;

    assert!(matches!(
        init(&config),
        Err(AmityError::InvalidBounds { .. })
    ));
}
