//! Round orchestration
//!
//! A [`Game`] owns the per-session state the store does not persist: the
//! selected pack, the RNG and the recency histories. Each task request draws
//! a question and, for targeting questions, a target. A targeting question
//! nobody can be targeted for is put aside and another is drawn, up to
//! `max_question_attempts` times or until the pack has no other question.

use crate::config::GameConfig;
use crate::error::{Error, Result};
use std::sync::Arc;
use tod_core::{
    log_targeting_table, pick_target, select_question, GameRng, Pack, Player, PlayerId, Question,
    QuestionId, RecentHistory, TaskType,
};
use tod_db::Store;

/// A rendered task for one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub question_id: QuestionId,
    pub pack_name: String,
    pub kind: TaskType,
    pub player: PlayerId,
    /// Set exactly when the question is a targeting question
    pub target: Option<PlayerId>,
    pub text: String,
}

/// One game session over a shared store
pub struct Game {
    store: Arc<Store>,
    config: GameConfig,
    rng: GameRng,
    pack: String,
    recent_questions: RecentHistory<QuestionId>,
    recent_targets: RecentHistory<PlayerId>,
}

impl Game {
    pub fn new(store: Arc<Store>, config: GameConfig) -> Self {
        let rng = config.seed.map(GameRng::new).unwrap_or_else(GameRng::from_time);
        Self {
            store,
            rng,
            pack: config.default_pack.clone(),
            recent_questions: RecentHistory::new(config.question_history),
            recent_targets: RecentHistory::new(config.target_history),
            config,
        }
    }

    /// Replace the RNG
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Name of the pack questions are drawn from
    pub fn pack(&self) -> &str {
        &self.pack
    }

    /// Question ids recently asked, newest first
    pub fn recent_questions(&self) -> Vec<QuestionId> {
        self.recent_questions.to_vec()
    }

    /// Player ids recently targeted, newest first
    pub fn recent_targets(&self) -> Vec<PlayerId> {
        self.recent_targets.to_vec()
    }

    /// Switch to a pack the profile may play
    pub fn select_pack(&mut self, name: &str) -> Result<Pack> {
        let pack = self
            .store
            .pack_by_name(name)?
            .ok_or_else(|| Error::UnknownPack(name.to_string()))?;
        let profile = self.store.user_profile()?;
        if !profile.is_pack_unlocked(&pack) {
            return Err(Error::PackLocked(pack.name));
        }
        if pack.name != self.pack {
            self.recent_questions.clear();
        }
        log::info!("Selected pack {}", pack.name);
        self.pack = pack.name.clone();
        Ok(pack)
    }

    /// The current roster
    pub fn players(&self) -> Result<Vec<Player>> {
        Ok(self.store.all_players()?)
    }

    /// Pick whose turn it is
    pub fn pick_active_player(&mut self) -> Result<Player> {
        let players = self.store.all_players()?;
        let not_enough = Error::NotEnoughPlayers {
            found: players.len(),
            required: self.config.min_players,
        };
        if players.len() < self.config.min_players {
            return Err(not_enough);
        }
        self.rng.pick(&players).cloned().ok_or(not_enough)
    }

    /// Draw a task of `kind` for `player` from the selected pack.
    ///
    /// The target picked while checking a targeting question is the one
    /// named in the rendered text.
    pub fn draw_task(&mut self, player: PlayerId, kind: TaskType) -> Result<Task> {
        let players = self.store.all_players()?;
        let actor = players
            .iter()
            .find(|p| p.id == player)
            .ok_or(Error::PlayerNotFound(player))?;
        log_targeting_table(&players);

        let mut candidates = self.store.questions_by_pack_and_type(&self.pack, kind)?;
        if candidates.is_empty() {
            return Err(tod_db::Error::NoQuestionsAvailable {
                pack: self.pack.clone(),
                kind,
            }
            .into());
        }

        let recent_questions = self.recent_questions.to_vec();
        let recent_targets = self.recent_targets.to_vec();
        let max_attempts = self.config.max_question_attempts.max(1);
        let mut attempts = 0;

        while attempts < max_attempts && !candidates.is_empty() {
            attempts += 1;
            let question = select_question(
                &self.pack,
                kind,
                candidates.clone(),
                &recent_questions,
                &mut self.rng,
            )?;

            if !question.requires_target {
                return self.finish(question, actor, None);
            }
            if let Some(target) = pick_target(actor, &players, &recent_targets, &mut self.rng) {
                return self.finish(question, actor, Some(target));
            }

            log::debug!(
                "Attempt {}/{}: no target for {} on {}",
                attempts,
                max_attempts,
                actor.describe(),
                question.id
            );
            // The roster does not change within a draw, so neither does the outcome.
            candidates.retain(|q| q.id != question.id);
        }

        Err(Error::NoSuitableQuestion {
            pack: self.pack.clone(),
            kind,
            attempts,
        })
    }

    /// Pick the active player and draw a task for them
    pub fn play_turn(&mut self, kind: TaskType) -> Result<Task> {
        let player = self.pick_active_player()?;
        self.draw_task(player.id, kind)
    }

    /// Remove every player and forget the recency histories
    pub fn new_session(&mut self) -> Result<usize> {
        let removed = self.store.delete_all_players()?;
        self.recent_questions.clear();
        self.recent_targets.clear();
        log::info!("New session: removed {} players", removed);
        Ok(removed)
    }

    fn finish(
        &mut self,
        question: Question,
        actor: &Player,
        target: Option<&Player>,
    ) -> Result<Task> {
        let text = question.render(&actor.name, target.map(|t| t.name.as_str()))?;
        self.recent_questions.push(question.id);
        if let Some(target) = target {
            self.recent_targets.push(target.id);
        }
        Ok(Task {
            question_id: question.id,
            pack_name: question.pack_name,
            kind: question.kind,
            player: actor.id,
            target: target.map(|t| t.id),
            text,
        })
    }
}
