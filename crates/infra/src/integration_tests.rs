//! Integration tests for the full review pipeline over the in-memory backend.
//!
//! Tests: ReviewService → repositories ← SyndicationGraph / ReviewResolver
//!
//! Verifies:
//! - Reviews written through the service are visible to syndicating stores
//! - Organization boundaries hold
//! - Concurrent writers and readers never observe half-applied operations
//! - Concurrent edge additions appear whole and in the order they were made

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};
    use std::thread;

    use chrono::Utc;

    use revsync_core::{DomainError, OrgToken, ProductId, StoreId};
    use revsync_reviews::{CreateReview, ReviewService, UpdateReview};
    use revsync_stores::Store;
    use revsync_syndication::{EdgeInsert, ReviewResolver, SyndicationGraph};

    use crate::memory::{InMemoryEdgeRepository, InMemoryReviewRepository, InMemoryStoreDirectory};

    type Dir = Arc<InMemoryStoreDirectory>;
    type Reviews = Arc<InMemoryReviewRepository>;
    type Edges = Arc<InMemoryEdgeRepository>;

    struct Engine {
        reviews: ReviewService<Dir, Reviews>,
        graph: SyndicationGraph<Dir, Edges>,
        resolver: ReviewResolver<Dir, Reviews, Edges>,
    }

    fn setup() -> Engine {
        let directory = Arc::new(
            InMemoryStoreDirectory::with_stores([
                Store::new(StoreId::new(1), "north", OrgToken::from("X")),
                Store::new(StoreId::new(2), "south", OrgToken::from("X")),
                Store::new(StoreId::new(3), "rival", OrgToken::from("Y")),
            ])
            .unwrap(),
        );
        let reviews = Arc::new(InMemoryReviewRepository::new());
        let edges = Arc::new(InMemoryEdgeRepository::new());

        Engine {
            reviews: ReviewService::new(directory.clone(), reviews.clone()),
            graph: SyndicationGraph::new(directory.clone(), edges.clone()),
            resolver: ReviewResolver::new(directory, reviews, edges),
        }
    }

    fn create(engine: &Engine, store_id: i64, content: &str) -> revsync_core::ReviewId {
        engine
            .reviews
            .create(CreateReview {
                content: content.to_string(),
                rating: 4,
                store_id: StoreId::new(store_id),
                product_id: ProductId::new(10),
                written_at: Utc::now(),
            })
            .unwrap()
    }

    #[test]
    fn franchise_scenario_end_to_end() {
        let engine = setup();
        create(&engine, 1, "great");
        create(&engine, 1, "ok");
        create(&engine, 2, "bad");

        assert_eq!(
            engine.graph.add_edge(StoreId::new(1), StoreId::new(2)).unwrap(),
            EdgeInsert::Created
        );
        assert_eq!(
            engine.resolver.resolve(StoreId::new(2)).unwrap(),
            vec!["bad", "great", "ok"]
        );

        let err = engine.graph.add_edge(StoreId::new(3), StoreId::new(2)).unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
        assert_eq!(
            engine.resolver.resolve(StoreId::new(2)).unwrap(),
            vec!["bad", "great", "ok"]
        );

        assert!(matches!(
            engine.resolver.resolve(StoreId::new(999)),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn updates_and_deletes_propagate_to_syndicating_stores() {
        let engine = setup();
        let keep = create(&engine, 1, "first draft");
        let stale = create(&engine, 1, "remove me");
        engine.graph.add_edge(StoreId::new(1), StoreId::new(2)).unwrap();

        engine
            .reviews
            .update(UpdateReview {
                review_id: keep,
                content: "final".to_string(),
                rating: 5,
                written_at: Utc::now(),
            })
            .unwrap();
        engine.reviews.delete(stale).unwrap();

        assert_eq!(engine.resolver.resolve(StoreId::new(2)).unwrap(), vec!["final"]);
    }

    #[test]
    fn duplicate_edge_does_not_duplicate_reviews() {
        let engine = setup();
        create(&engine, 1, "only once");
        engine.graph.add_edge(StoreId::new(1), StoreId::new(2)).unwrap();
        assert_eq!(
            engine.graph.add_edge(StoreId::new(1), StoreId::new(2)).unwrap(),
            EdgeInsert::AlreadyExists
        );

        assert_eq!(engine.resolver.resolve(StoreId::new(2)).unwrap(), vec!["only once"]);
    }

    /// What writers have done so far, recorded around each service call.
    #[derive(Default)]
    struct Ledger {
        started: Mutex<HashSet<String>>,
        created: Mutex<HashSet<String>>,
        deleting: Mutex<HashSet<String>>,
        deleted: Mutex<HashSet<String>>,
    }

    fn snapshot(set: &Mutex<HashSet<String>>) -> HashSet<String> {
        set.lock().unwrap().clone()
    }

    #[test]
    fn concurrent_readers_never_see_half_created_or_deleted_reviews() {
        let engine = Arc::new(setup());
        let ledger = Arc::new(Ledger::default());
        engine.graph.add_edge(StoreId::new(1), StoreId::new(2)).unwrap();

        let writers: Vec<_> = (0..4)
            .map(|w| {
                let engine = engine.clone();
                let ledger = ledger.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        let content = format!("w{w}-{i}");
                        ledger.started.lock().unwrap().insert(content.clone());
                        let id = create(&engine, 1, &content);
                        ledger.created.lock().unwrap().insert(content.clone());
                        if i % 2 == 0 {
                            ledger.deleting.lock().unwrap().insert(content.clone());
                            engine.reviews.delete(id).unwrap();
                            ledger.deleted.lock().unwrap().insert(content);
                        }
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..2)
            .map(|_| {
                let engine = engine.clone();
                let ledger = ledger.clone();
                thread::spawn(move || {
                    for _ in 0..200 {
                        let deleted_before = snapshot(&ledger.deleted);
                        let created_before = snapshot(&ledger.created);
                        let seen = engine.resolver.resolve(StoreId::new(2)).unwrap();
                        let deleting_after = snapshot(&ledger.deleting);
                        let started_after = snapshot(&ledger.started);

                        let unique: HashSet<&String> = seen.iter().collect();
                        assert_eq!(unique.len(), seen.len(), "duplicate review in {seen:?}");

                        for content in &seen {
                            assert!(started_after.contains(content), "unknown review {content}");
                            assert!(
                                !deleted_before.contains(content),
                                "deleted review {content} still visible"
                            );
                        }
                        // Created before the read and not yet being deleted: must be visible.
                        for content in created_before.difference(&deleting_after) {
                            assert!(unique.contains(content), "live review {content} missing");
                        }
                    }
                })
            })
            .collect();

        for w in writers {
            w.join().unwrap();
        }
        for r in readers {
            r.join().unwrap();
        }

        // Odd-numbered reviews survive: 4 writers x 25.
        assert_eq!(engine.resolver.resolve(StoreId::new(2)).unwrap().len(), 100);
        assert_eq!(engine.reviews.contents_for_store(StoreId::new(1)).unwrap().len(), 100);
    }

    #[test]
    fn concurrent_edge_additions_are_seen_whole_and_in_order() {
        const HUB: i64 = 20;

        let directory = Arc::new(
            InMemoryStoreDirectory::with_stores(
                (1..=HUB).map(|k| Store::new(StoreId::new(k), format!("s{k}"), OrgToken::from("X"))),
            )
            .unwrap(),
        );
        let reviews = Arc::new(InMemoryReviewRepository::new());
        let edges = Arc::new(InMemoryEdgeRepository::new());
        let engine = Arc::new(Engine {
            reviews: ReviewService::new(directory.clone(), reviews.clone()),
            graph: SyndicationGraph::new(directory.clone(), edges.clone()),
            resolver: ReviewResolver::new(directory, reviews, edges),
        });
        for k in 1..HUB {
            create(&engine, k, &format!("s{k}"));
        }

        let adder = {
            let engine = engine.clone();
            thread::spawn(move || {
                for k in 1..HUB {
                    engine.graph.add_edge(StoreId::new(k), StoreId::new(HUB)).unwrap();
                }
            })
        };

        let reader = {
            let engine = engine.clone();
            thread::spawn(move || {
                let mut last = 0;
                for _ in 0..500 {
                    let sources = engine.graph.sources_of(StoreId::new(HUB)).unwrap();
                    let m = sources.len() as i64;
                    let expected: Vec<StoreId> = (1..=m).map(StoreId::new).collect();
                    assert_eq!(sources.into_iter().collect::<Vec<_>>(), expected);
                    assert!(m >= last, "edge count went from {last} to {m}");
                    last = m;

                    let seen = engine.resolver.resolve(StoreId::new(HUB)).unwrap();
                    let prefix: Vec<String> = (1..=seen.len()).map(|k| format!("s{k}")).collect();
                    assert_eq!(seen, prefix);
                    assert!(seen.len() as i64 >= m);
                }
            })
        };

        adder.join().unwrap();
        reader.join().unwrap();

        assert_eq!(engine.resolver.resolve(StoreId::new(HUB)).unwrap().len(), (HUB - 1) as usize);
    }
}
