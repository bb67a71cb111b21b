//! Collection operations on the store.

use crate::error::{Error, Result};
use crate::models::*;
use crate::seed;
use crate::store::Store;
use chrono::{DateTime, Utc};
use tod_core::{
    select_question, GameRng, NewPlayer, NewQuestion, Pack, PackId, Player, PlayerId, Question,
    QuestionId, TaskType, UserProfile, PROFILE_ID,
};

/// Current time truncated to the millisecond precision that is stored.
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

// Players

impl Store {
    /// Add a player. The store assigns the id and creation time.
    pub fn add_player(&self, player: &NewPlayer) -> Result<Player> {
        let created_at = now_millis();
        self.write(|rw| {
            let id = seed::allocate_ids(rw, PLAYER_SEQUENCE, 1)?;
            let stored = StoredPlayer::from_new(id, player, created_at);
            rw.insert(stored.clone())?;
            Ok(stored.to_player())
        })
    }

    /// All players in id order.
    pub fn all_players(&self) -> Result<Vec<Player>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredPlayer>()?;
        let iter = scan.all()?;
        let players: std::result::Result<Vec<StoredPlayer>, _> = iter.collect();
        let players = players.map_err(|e| Error::Database(e.to_string()))?;
        Ok(players.iter().map(StoredPlayer::to_player).collect())
    }

    /// Load a player by id.
    pub fn player(&self, id: PlayerId) -> Result<Option<Player>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredPlayer> = r.get().primary(id.raw())?;
        Ok(stored.map(|s| s.to_player()))
    }

    /// Players with exactly this name (names are not unique).
    pub fn players_by_name(&self, name: &str) -> Result<Vec<Player>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().secondary::<StoredPlayer>(StoredPlayerKey::name)?;
        let iter = scan.start_with(name)?;
        let players: std::result::Result<Vec<StoredPlayer>, _> = iter.collect();
        let players = players.map_err(|e| Error::Database(e.to_string()))?;
        Ok(players
            .iter()
            .filter(|p| p.name == name)
            .map(StoredPlayer::to_player)
            .collect())
    }

    /// Replace name, gender and sexuality of an existing player.
    pub fn update_player(&self, player: &Player) -> Result<()> {
        self.write(|rw| {
            let old: Option<StoredPlayer> = rw.get().primary(player.id.raw())?;
            let old = old.ok_or_else(|| Error::NotFound(player.id.to_string()))?;
            rw.update(old, StoredPlayer::from_player(player))?;
            Ok(())
        })
    }

    /// Delete a player. Returns false if there was none.
    pub fn delete_player(&self, id: PlayerId) -> Result<bool> {
        self.write(|rw| {
            let stored: Option<StoredPlayer> = rw.get().primary(id.raw())?;
            match stored {
                Some(s) => {
                    rw.remove(s)?;
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    }

    /// Delete every player. Returns how many were removed.
    pub fn delete_all_players(&self) -> Result<usize> {
        self.write(|rw| {
            let players: Vec<StoredPlayer> = {
                let scan = rw.scan().primary::<StoredPlayer>()?;
                let iter = scan.all()?;
                let players: std::result::Result<Vec<StoredPlayer>, _> = iter.collect();
                players.map_err(|e| Error::Database(e.to_string()))?
            };
            let count = players.len();
            for player in players {
                rw.remove(player)?;
            }
            Ok(count)
        })
    }
}

// Questions

impl Store {
    /// Add a single question. Fails if its target flag and text disagree.
    pub fn add_question(&self, question: &NewQuestion) -> Result<Question> {
        question.validate()?;
        self.write(|rw| {
            let id = seed::allocate_ids(rw, QUESTION_SEQUENCE, 1)?;
            rw.insert(StoredQuestion::from_new(id, question))?;
            Ok(question.clone().with_id(QuestionId::new(id)))
        })
    }

    /// All questions in id order.
    pub fn all_questions(&self) -> Result<Vec<Question>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredQuestion>()?;
        let iter = scan.all()?;
        let questions: std::result::Result<Vec<StoredQuestion>, _> = iter.collect();
        let questions = questions.map_err(|e| Error::Database(e.to_string()))?;
        questions.iter().map(StoredQuestion::to_question).collect()
    }

    /// Load a question by id.
    pub fn question(&self, id: QuestionId) -> Result<Option<Question>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredQuestion> = r.get().primary(id.raw())?;
        stored.map(|s| s.to_question()).transpose()
    }

    /// Questions of `kind` in `pack`, via the compound index. No ordering
    /// is guaranteed.
    pub fn questions_by_pack_and_type(&self, pack: &str, kind: TaskType) -> Result<Vec<Question>> {
        let key = pack_type_key(pack, kind.as_str());
        let r = self.db.r_transaction()?;
        let scan = r
            .scan()
            .secondary::<StoredQuestion>(StoredQuestionKey::pack_type)?;
        let iter = scan.start_with(key.as_str())?;
        let questions: std::result::Result<Vec<StoredQuestion>, _> = iter.collect();
        let questions = questions.map_err(|e| Error::Database(e.to_string()))?;
        questions
            .iter()
            .filter(|q| q.pack_name == pack && q.kind == kind.as_str())
            .map(StoredQuestion::to_question)
            .collect()
    }

    /// Pick a random question of `kind` from `pack`, avoiding `recent` ids
    /// while other questions remain.
    pub fn random_question(
        &self,
        pack: &str,
        kind: TaskType,
        recent: &[QuestionId],
        rng: &mut GameRng,
    ) -> Result<Question> {
        let candidates = self.questions_by_pack_and_type(pack, kind)?;
        select_question(pack, kind, candidates, recent, rng).map_err(|e| match e {
            tod_core::Error::NoQuestionsAvailable { pack, kind } => {
                Error::NoQuestionsAvailable { pack, kind }
            }
            other => Error::Core(other),
        })
    }
}

// Packs

impl Store {
    /// Add a pack. Both id and name must be new.
    pub fn add_pack(&self, pack: &Pack) -> Result<()> {
        if self.pack(&pack.id)?.is_some() {
            return Err(Error::DuplicateKey(pack.id.to_string()));
        }
        if self.pack_by_name(&pack.name)?.is_some() {
            return Err(Error::DuplicateKey(pack.name.clone()));
        }
        self.write(|rw| {
            rw.insert(StoredPack::from_pack(pack))?;
            Ok(())
        })
    }

    /// All packs, hidden ones only when `include_hidden` is set.
    pub fn all_packs(&self, include_hidden: bool) -> Result<Vec<Pack>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredPack>()?;
        let iter = scan.all()?;
        let packs: std::result::Result<Vec<StoredPack>, _> = iter.collect();
        let packs = packs.map_err(|e| Error::Database(e.to_string()))?;
        packs
            .iter()
            .filter(|p| include_hidden || !p.is_hidden)
            .map(StoredPack::to_pack)
            .collect()
    }

    /// Load a pack by slug.
    pub fn pack(&self, id: &PackId) -> Result<Option<Pack>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredPack> = r.get().primary(id.as_str().to_string())?;
        stored.map(|s| s.to_pack()).transpose()
    }

    /// Load a pack by its unique name.
    pub fn pack_by_name(&self, name: &str) -> Result<Option<Pack>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredPack> = r
            .get()
            .secondary(StoredPackKey::name, name.to_string())?;
        stored.map(|s| s.to_pack()).transpose()
    }
}

// Profile

impl Store {
    /// The user profile; the default profile if none was stored yet.
    pub fn user_profile(&self) -> Result<UserProfile> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredProfile> = r.get().primary(PROFILE_ID.to_string())?;
        Ok(stored.map(|s| s.to_profile()).unwrap_or_default())
    }

    /// Replace the user profile. The default pack stays unlocked.
    pub fn update_user_profile(&self, profile: &UserProfile) -> Result<()> {
        self.write(|rw| {
            rw.upsert(StoredProfile::from_profile(profile))?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tod_core::{Gender, PackType, Sexuality, StaticContent, DEFAULT_PACK_NAME};

    fn pack(id: &str, name: &str, is_hidden: bool) -> Pack {
        Pack {
            id: PackId::new(id),
            name: name.to_string(),
            description: format!("{} pack", name),
            is_18_plus: false,
            kind: PackType::TruthAndDare,
            is_locked: name != DEFAULT_PACK_NAME,
            is_hidden,
            cost_in_ads: 0,
        }
    }

    fn store() -> Store {
        let content = StaticContent::new(
            vec![
                pack("entspannt", DEFAULT_PACK_NAME, false),
                pack("geheim", "Geheim", true),
            ],
            vec![
                NewQuestion::new(
                    DEFAULT_PACK_NAME,
                    TaskType::Truth,
                    "{playerName}, was ist dein größter Wunsch?",
                    false,
                ),
                NewQuestion::new(
                    DEFAULT_PACK_NAME,
                    TaskType::Truth,
                    "{playerName}, was magst du an {targetPlayerName}?",
                    true,
                ),
                NewQuestion::new(
                    DEFAULT_PACK_NAME,
                    TaskType::Dare,
                    "{playerName}, singe ein Lied vor.",
                    false,
                ),
                NewQuestion::new(
                    "Geheim",
                    TaskType::Dare,
                    "{playerName}, flüstere ein Geheimnis.",
                    false,
                ),
            ],
        );
        Store::in_memory(Arc::new(content)).unwrap()
    }

    #[test]
    fn test_add_then_get_player() {
        let store = store();
        let new = NewPlayer::new("Anna", Gender::Female, Sexuality::Hetero);
        let added = store.add_player(&new).unwrap();

        let loaded = store.player(added.id).unwrap().unwrap();
        assert_eq!(loaded, added);
        assert_eq!(loaded.name, new.name);
        assert_eq!(loaded.gender, new.gender);
        assert_eq!(loaded.sexuality, new.sexuality);
    }

    fn add(store: &Store, name: &str, gender: Gender, sexuality: Sexuality) -> Player {
        store
            .add_player(&NewPlayer::new(name, gender, sexuality))
            .unwrap()
    }

    #[test]
    fn test_player_ids_are_monotonic() {
        let store = store();
        let a = add(&store, "A", Gender::Male, Sexuality::Pan);
        store.delete_player(a.id).unwrap();
        let b = add(&store, "B", Gender::Male, Sexuality::Pan);
        assert!(b.id > a.id);
    }

    #[test]
    fn test_missing_player_is_absent() {
        let store = store();
        assert_eq!(store.player(PlayerId::new(99)).unwrap(), None);
        assert!(!store.delete_player(PlayerId::new(99)).unwrap());
    }

    #[test]
    fn test_players_by_name_is_exact() {
        let store = store();
        add(&store, "Anna", Gender::Female, Sexuality::Bi);
        add(&store, "Annalena", Gender::Female, Sexuality::Bi);
        add(&store, "Anna", Gender::Diverse, Sexuality::Ace);

        let annas = store.players_by_name("Anna").unwrap();
        assert_eq!(annas.len(), 2);
        assert!(annas.iter().all(|p| p.name == "Anna"));
    }

    #[test]
    fn test_update_player() {
        let store = store();
        let mut player = store
            .add_player(&NewPlayer::new("Anna", Gender::Female, Sexuality::Bi))
            .unwrap();
        player.name = "Anne".to_string();
        player.sexuality = Sexuality::Pan;
        store.update_player(&player).unwrap();

        assert_eq!(store.player(player.id).unwrap().unwrap(), player);
        assert!(store.players_by_name("Anna").unwrap().is_empty());

        let ghost = Player {
            id: PlayerId::new(1234),
            ..player
        };
        assert!(matches!(store.update_player(&ghost), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_delete_all_players() {
        let store = store();
        for name in ["A", "B", "C"] {
            store.add_player(&NewPlayer::new(name, Gender::Male, Sexuality::Homo)).unwrap();
        }
        assert_eq!(store.delete_all_players().unwrap(), 3);
        assert!(store.all_players().unwrap().is_empty());
    }

    #[test]
    fn test_questions_by_pack_and_type() {
        let store = store();
        let truths = store
            .questions_by_pack_and_type(DEFAULT_PACK_NAME, TaskType::Truth)
            .unwrap();
        assert_eq!(truths.len(), 2);
        assert!(truths
            .iter()
            .all(|q| q.pack_name == DEFAULT_PACK_NAME && q.kind == TaskType::Truth));

        assert!(store
            .questions_by_pack_and_type("Unbekannt", TaskType::Truth)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_random_question_matches_pack_and_type() {
        let store = store();
        let mut rng = GameRng::new(17);
        for _ in 0..30 {
            let q = store
                .random_question(DEFAULT_PACK_NAME, TaskType::Dare, &[], &mut rng)
                .unwrap();
            assert_eq!(q.kind, TaskType::Dare);
            assert_eq!(q.pack_name, DEFAULT_PACK_NAME);
        }
    }

    #[test]
    fn test_random_question_empty_set() {
        let store = store();
        let mut rng = GameRng::new(17);
        let err = store
            .random_question("Geheim", TaskType::Truth, &[], &mut rng)
            .unwrap_err();
        assert!(matches!(err, Error::NoQuestionsAvailable { .. }));
    }

    #[test]
    fn test_add_question_rejects_mismatched_template() {
        let store = store();
        let bad = NewQuestion::new(DEFAULT_PACK_NAME, TaskType::Dare, "{playerName}, tanze.", true);
        assert!(matches!(store.add_question(&bad), Err(Error::Core(_))));
    }

    #[test]
    fn test_hidden_pack_filter() {
        let store = store();
        let visible = store.all_packs(false).unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, DEFAULT_PACK_NAME);
        assert_eq!(store.all_packs(true).unwrap().len(), 2);
    }

    #[test]
    fn test_pack_lookups_and_duplicates() {
        let store = store();
        let pack = store.pack_by_name("Geheim").unwrap().unwrap();
        assert_eq!(store.pack(&pack.id).unwrap(), Some(pack.clone()));

        assert!(matches!(store.add_pack(&pack), Err(Error::DuplicateKey(_))));
        let renamed_slug = Pack {
            id: PackId::new("geheim-2"),
            ..pack
        };
        assert!(matches!(store.add_pack(&renamed_slug), Err(Error::DuplicateKey(_))));
    }

    #[test]
    fn test_profile_keeps_default_pack() {
        let store = store();
        let profile = UserProfile {
            promo_code_activated: true,
            bst_code_activated: false,
            unlocked_pack_names: vec!["Geheim".to_string()],
        };
        store.update_user_profile(&profile).unwrap();

        let loaded = store.user_profile().unwrap();
        assert!(loaded.promo_code_activated);
        assert!(loaded.unlocked_pack_names.contains(&"Geheim".to_string()));
        assert!(loaded.unlocked_pack_names.contains(&DEFAULT_PACK_NAME.to_string()));
    }
}
