//! Episode card click routing.

use crate::core::http::StudioApi;
use crate::core::prefs::{KeyValueStore, Preferences};
use crate::core::store::StoreSink;
use crate::features::episodes::state::{EpisodeTarget, target_for};
use crate::features::reader::actions::{ReaderOutcome, open_reader};
use crate::models::Episode;

/// Which modal a card click opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Opened {
    /// The audio player.
    Player,
    /// The reader, with its load outcome.
    Reader(ReaderOutcome),
}

/// Open the player for audio episodes and the reader for everything else.
pub async fn open_episode<A: StudioApi, S: StoreSink, K: KeyValueStore + ?Sized>(
    api: &A,
    sink: &S,
    storage: &K,
    episode: &Episode,
) -> Opened {
    match target_for(episode) {
        EpisodeTarget::Player(playable) => {
            sink.update(|store| {
                if store.reader.is_open() {
                    store.reader.close();
                }
                store.player.open(playable);
            });
            Opened::Player
        }
        EpisodeTarget::Reader(article) => {
            let settings = Preferences::new(storage).reader_settings();
            Opened::Reader(open_reader(api, sink, article, settings).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prefs::MemoryStore;
    use crate::core::settings::ReaderSettings;
    use crate::core::store::AppStore;
    use crate::core::testing::{FakeApi, episode};
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn articles_never_open_the_player() {
        let api = FakeApi::default();
        let sink = RefCell::new(AppStore::default());
        let storage = MemoryStore::default();

        let opened = block_on(open_episode(&api, &sink, &storage, &episode(1, 1)));

        assert!(matches!(opened, Opened::Reader(_)));
        sink.read(|store| {
            assert!(!store.player.is_open());
            assert_eq!(store.reader.episode_id(), Some(1));
        });
    }

    #[test]
    fn audio_episodes_open_the_player_without_fetching() {
        let api = FakeApi::default();
        let sink = RefCell::new(AppStore::default());
        let storage = MemoryStore::default();
        let mut podcast = episode(2, 1);
        podcast.audio_url = Some("https://cdn.example.com/2.mp3".into());

        let opened = block_on(open_episode(&api, &sink, &storage, &podcast));

        assert_eq!(opened, Opened::Player);
        assert!(api.calls().is_empty());
        sink.read(|store| {
            assert!(store.player.is_open());
            assert!(!store.reader.is_open());
        });
    }

    #[test]
    fn reader_uses_persisted_settings() {
        let api = FakeApi::default();
        let sink = RefCell::new(AppStore::default());
        let storage = MemoryStore::default();
        let saved = ReaderSettings::default().larger();
        Preferences::new(&storage)
            .set_reader_settings(&saved)
            .unwrap();

        block_on(open_episode(&api, &sink, &storage, &episode(3, 1)));

        assert_eq!(sink.read(|store| store.reader.settings), saved);
    }
}
