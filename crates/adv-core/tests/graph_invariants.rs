//! Structural invariants of generated room graphs, checked over many seeds
//! and room counts.

use adv_core::{GameConfig, GameRng, RoomKind, generate_rooms};
use proptest::prelude::*;

fn config(room_count: usize) -> GameConfig {
    GameConfig {
        room_count,
        ..GameConfig::default()
    }
}

proptest! {
    #[test]
    fn exactly_one_start_and_one_end(seed in any::<u64>(), rooms in 2usize..=10) {
        let store = generate_rooms(&config(rooms), &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(store.len(), rooms);
        prop_assert_eq!(store.count_of_kind(RoomKind::Start), 1);
        prop_assert_eq!(store.count_of_kind(RoomKind::End), 1);
        prop_assert_eq!(store.count_of_kind(RoomKind::Mid), rooms - 2);
    }

    #[test]
    fn adjacency_is_symmetric_without_self_loops(seed in any::<u64>(), rooms in 2usize..=10) {
        let store = generate_rooms(&config(rooms), &mut GameRng::new(seed)).unwrap();

        prop_assert!(store.is_symmetric());
        for (id, room) in store.iter() {
            prop_assert!(!room.is_adjacent(id), "{} is adjacent to itself", room.name);
            for other in &room.adjacent {
                prop_assert!(other.index() < rooms);
            }
        }
    }

    #[test]
    fn every_room_has_minimum_degree(seed in any::<u64>(), rooms in 2usize..=10) {
        let store = generate_rooms(&config(rooms), &mut GameRng::new(seed)).unwrap();
        let target = 3.min(rooms - 1);

        for (_, room) in store.iter() {
            prop_assert!(
                room.degree() >= target,
                "{} has {} exits, expected at least {}",
                room.name,
                room.degree(),
                target
            );
        }
    }

    #[test]
    fn names_are_unique(seed in any::<u64>(), rooms in 2usize..=10) {
        let store = generate_rooms(&config(rooms), &mut GameRng::new(seed)).unwrap();
        let mut names = store.names();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), rooms);
    }
}

#[test]
fn default_graph_has_degree_three_everywhere() {
    for seed in 0..200 {
        let store = generate_rooms(&GameConfig::default(), &mut GameRng::new(seed)).unwrap();
        assert!(store.iter().all(|(_, room)| room.degree() >= 3), "seed {seed}");
    }
}
