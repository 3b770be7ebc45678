pub mod actor_search_service;
pub mod casting_store;

pub use actor_search_service::{ActorSearchService, MAX_CANDIDATES, PLACEHOLDER_IMAGE};
pub use casting_store::{CastingStore, DraftCasting};

#[cfg(test)]
mod tests {
    //! End-to-end flow across both state owners: search, pick, commit.

    use std::collections::HashMap;
    use std::sync::{Arc, RwLock};

    use fancast_domain::{CastingSchema, Race};
    use fancast_ports::outbound::{
        MockActorSourcePort, MockClockPort, SearchHit, StorageProvider,
    };

    use super::{ActorSearchService, CastingStore};

    #[derive(Clone, Default)]
    struct MemoryStorage {
        data: Arc<RwLock<HashMap<String, String>>>,
    }

    impl StorageProvider for MemoryStorage {
        fn save(&self, key: &str, value: &str) {
            self.data
                .write()
                .expect("storage lock")
                .insert(key.to_string(), value.to_string());
        }

        fn load(&self, key: &str) -> Option<String> {
            self.data.read().expect("storage lock").get(key).cloned()
        }

        fn remove(&self, key: &str) {
            self.data.write().expect("storage lock").remove(key);
        }
    }

    fn wikipedia_like_source() -> MockActorSourcePort {
        let mut mock = MockActorSourcePort::new();
        mock.expect_search().returning(|_| {
            Ok((1..=5)
                .map(|i| SearchHit {
                    title: format!("Hugo Weaving {i}"),
                    snippet: format!("<b>Hugo</b> Weaving result {i}"),
                })
                .collect())
        });
        mock.expect_thumbnail()
            .returning(|title| Ok(Some(format!("https://img.example/{title}.jpg"))));
        mock
    }

    fn clock() -> Arc<MockClockPort> {
        let mut clock = MockClockPort::new();
        clock.expect_now_millis().return_const(1_000u64);
        Arc::new(clock)
    }

    #[tokio::test]
    async fn search_select_commit_flow() {
        let mut search = ActorSearchService::new(Arc::new(wikipedia_like_source()));
        let mut store = CastingStore::new(
            MemoryStorage::default(),
            clock(),
            CastingSchema::Classic,
        );

        search.search("Hugo Weaving").await;
        assert_eq!(search.results().len(), 5);

        // Picking candidate #3 closes the picker and fills the draft.
        let picked = search.select(2).expect("third candidate");
        store.set_character_name("Elrond");
        store.select_actor(picked);
        assert!(search.results().is_empty());
        assert_eq!(store.draft().actor_query, "Hugo Weaving 3");

        let id = store.commit().expect("classic schema needs no race");
        assert_eq!(store.castings().len(), 1);
        assert_eq!(store.castings()[0].id, id);
        assert_eq!(store.castings()[0].actor, "Hugo Weaving 3");
        assert_eq!(
            store.castings()[0].image,
            "https://img.example/Hugo Weaving 3.jpg"
        );
    }

    #[tokio::test]
    async fn extended_schema_blocks_commit_until_race_is_chosen() {
        let mut search = ActorSearchService::new(Arc::new(wikipedia_like_source()));
        let mut store = CastingStore::new(
            MemoryStorage::default(),
            clock(),
            CastingSchema::Extended,
        );

        search.search("Hugo Weaving").await;
        let picked = search.select(2).expect("third candidate");
        store.set_character_name("Elrond");
        store.select_actor(picked);

        assert_eq!(store.commit(), None);
        assert!(store.castings().is_empty());

        store.set_race(Some(Race::Elf));
        assert!(store.commit().is_some());
        assert_eq!(store.castings().len(), 1);
    }
}
