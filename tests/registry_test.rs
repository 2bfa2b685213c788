mod helpers;

use encore::error::RegistryError;
use encore::playlist::{Playlist, PlaylistRegistry};
use helpers::songs;
use std::sync::Arc;

#[test]
fn create_then_list_contains_exact_entry() {
    let registry = PlaylistRegistry::new();
    registry
        .create("party", "🎉 Party", songs(&["Song A", "Song A", "Song B"]))
        .unwrap();

    let lists = registry.list_all();
    assert_eq!(lists.len(), 1);
    // duplicates and order preserved
    assert_eq!(
        lists["party"],
        Playlist::new("🎉 Party", songs(&["Song A", "Song A", "Song B"]))
    );
}

#[test]
fn create_on_existing_id_fails_and_keeps_entry() {
    let registry = PlaylistRegistry::new();
    registry.create("gym", "💪 Gym", songs(&["Song A"])).unwrap();
    let before = registry.list_all();

    let err = registry.create("gym", "💪 Gym 2", songs(&["Song B"])).unwrap_err();
    assert_eq!(err, RegistryError::AlreadyExists("gym".into()));
    assert_eq!(registry.list_all(), before);
}

#[test]
fn edit_and_remove_on_missing_id_leave_registry_unchanged() {
    let registry = PlaylistRegistry::new();
    registry.create("study", "📚 Study", songs(&["Song A"])).unwrap();
    let before = registry.list_all();

    let err = registry.edit("sutdy", "typo", songs(&[])).unwrap_err();
    assert_eq!(err, RegistryError::NotFound("sutdy".into()));
    let err = registry.remove("sutdy").unwrap_err();
    assert_eq!(err, RegistryError::NotFound("sutdy".into()));

    assert_eq!(registry.list_all(), before);
    assert_eq!(registry.len(), 1);
}

#[test]
fn list_all_counts_distinct_creates() {
    let registry = PlaylistRegistry::new();
    assert!(registry.list_all().is_empty());

    for i in 0..7 {
        registry
            .create(&format!("list-{i}"), &format!("List {i}"), vec![])
            .unwrap();
    }
    assert_eq!(registry.list_all().len(), 7);
}

#[test]
fn road_trip_edit_scenario() {
    let registry = PlaylistRegistry::new();
    registry
        .create("road-trip", "🚗 Road Trip", songs(&["Song A", "Song B"]))
        .unwrap();
    registry
        .edit("road-trip", "🚗 Road Trip Mix", songs(&["Song A", "Song C"]))
        .unwrap();

    let json = serde_json::to_value(registry.list_all()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "road-trip": {"heading": "🚗 Road Trip Mix", "list_array": ["Song A", "Song C"]}
        })
    );
}

#[test]
fn double_remove_fails_second_time() {
    let registry = PlaylistRegistry::new();
    registry.create("road-trip", "🚗 Road Trip", vec![]).unwrap();

    registry.remove("road-trip").unwrap();
    let err = registry.remove("road-trip").unwrap_err();
    assert_eq!(err, RegistryError::NotFound("road-trip".into()));
}

#[test]
fn removed_id_can_be_created_again() {
    let registry = PlaylistRegistry::new();
    registry.create("chill", "😌 Chill", songs(&["Song A"])).unwrap();
    registry.remove("chill").unwrap();
    registry.create("chill", "😌 Chill v2", songs(&["Song B"])).unwrap();
    assert_eq!(registry.get("chill").unwrap().heading, "😌 Chill v2");
}

#[test]
fn concurrent_creates_on_one_id_yield_single_winner() {
    let registry = Arc::new(PlaylistRegistry::new());

    let results: Vec<Result<(), RegistryError>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let registry = Arc::clone(&registry);
                s.spawn(move || registry.create("shared", &format!("Owner {i}"), vec![]))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let wins = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(wins, 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| *e == RegistryError::AlreadyExists("shared".into())));
    assert_eq!(registry.len(), 1);
}

#[test]
fn concurrent_edits_never_mix_heading_and_items() {
    let registry = Arc::new(PlaylistRegistry::new());
    registry.create("mix", "v0", songs(&["v0"])).unwrap();

    std::thread::scope(|s| {
        for i in 1..=8 {
            let registry = Arc::clone(&registry);
            s.spawn(move || {
                for _ in 0..200 {
                    let tag = format!("v{i}");
                    registry.edit("mix", &tag, vec![tag.clone()]).unwrap();
                }
            });
        }

        let registry = Arc::clone(&registry);
        s.spawn(move || {
            for _ in 0..500 {
                let snapshot = registry.list_all();
                let playlist = &snapshot["mix"];
                assert_eq!(playlist.items, vec![playlist.heading.clone()]);
            }
        });
    });
}
