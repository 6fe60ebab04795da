//! Concurrent access to the synonym store.

use std::sync::Arc;
use std::thread;

use glaive::expansion::{SynonymTermExpander, TermExpander};
use glaive::synonym::{StaticSource, SynonymStore};

#[test]
fn test_concurrent_adds_are_not_lost() {
    let store = Arc::new(SynonymStore::new(StaticSource::new([("azul", vec!["blue"])])));
    let threads = 32;

    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store.add(&format!("term{i}"), [format!("synonym{i}")]);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let all = store.get_all();
    assert_eq!(all.len(), threads + 1);
    for i in 0..threads {
        assert!(all[&format!("term{i}")].contains(&format!("synonym{i}")));
    }
}

#[test]
fn test_concurrent_adds_to_one_entry() {
    let store = Arc::new(SynonymStore::empty());

    thread::scope(|scope| {
        for i in 0..16 {
            let store = &store;
            scope.spawn(move || store.add("capacete", [format!("variant{i}")]));
        }
    });

    assert_eq!(store.get_all()["capacete"].len(), 16);
}

#[test]
fn test_readers_never_observe_partial_groups() {
    let store = Arc::new(SynonymStore::empty());
    store.add("capacete", ["elmo", "casco"]);
    let expander = SynonymTermExpander::new(store.clone());

    thread::scope(|scope| {
        scope.spawn(|| {
            for round in 0..200 {
                if round % 2 == 0 {
                    store.remove("capacete", None);
                    store.add("capacete", ["elmo", "casco"]);
                } else {
                    store.remove("capacete", Some(&["elmo", "casco"]));
                    store.add("capacete", ["elmo", "casco"]);
                }
            }
        });

        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..500 {
                    let expanded = expander.expand_term("capacete");
                    // Either the group is absent or it is complete.
                    assert!(expanded.len() == 1 || expanded.len() == 3);
                }
            });
        }
    });
}
