//! Targeting engine
//!
//! Decides which other players a targeting question may name, based on the
//! acting player's declared sexuality:
//!
//! | Sexuality | Eligible target genders                                  |
//! |-----------|----------------------------------------------------------|
//! | Hetero    | Male → Female, Diverse; Female → Male, Diverse; Diverse → Male, Female |
//! | Homo      | same gender as the actor                                 |
//! | Bi        | Male, Female                                             |
//! | Pan       | everyone                                                 |
//! | Ace       | everyone                                                 |
//!
//! The actor is never its own target. Legacy or unknown stored values are
//! translated before they reach this module.

use crate::identity::PlayerId;
use crate::player::{Gender, Player, Sexuality};
use crate::rng::GameRng;
use crate::selection::pick_avoiding_recent;

/// Whether `actor` may be paired with `other` in a targeting question
pub fn is_eligible_target(actor: &Player, other: &Player) -> bool {
    if actor.id == other.id {
        return false;
    }
    match actor.sexuality {
        Sexuality::Hetero => match actor.gender {
            Gender::Male => other.gender != Gender::Male,
            Gender::Female => other.gender != Gender::Female,
            Gender::Diverse => other.gender.is_binary(),
        },
        Sexuality::Homo => other.gender == actor.gender,
        Sexuality::Bi => other.gender.is_binary(),
        Sexuality::Pan | Sexuality::Ace => true,
    }
}

/// All players `actor` may target, in roster order
pub fn eligible_targets<'a>(actor: &Player, players: &'a [Player]) -> Vec<&'a Player> {
    players
        .iter()
        .filter(|p| is_eligible_target(actor, p))
        .collect()
}

/// Pick a target for `actor`, avoiding `recent` targets while others remain.
///
/// Returns `None` when nobody is eligible. Callers treat that as "this
/// question cannot be asked of this player" and draw another question.
pub fn pick_target<'a>(
    actor: &Player,
    players: &'a [Player],
    recent: &[PlayerId],
    rng: &mut GameRng,
) -> Option<&'a Player> {
    let targets = eligible_targets(actor, players);
    let picked = pick_avoiding_recent(&targets, |p| p.id, recent, rng).copied();

    match picked {
        Some(target) => {
            log::debug!("Targeting: {} -> {}", actor.describe(), target.describe());
        }
        None => {
            log::debug!("No valid targets for {}", actor.describe());
        }
    }
    picked
}

/// One line per player naming who they can target
pub fn targeting_table(players: &[Player]) -> Vec<String> {
    players
        .iter()
        .map(|player| {
            let targets: Vec<String> = eligible_targets(player, players)
                .iter()
                .map(|t| format!("{} ({})", t.name, t.gender))
                .collect();
            let targets = if targets.is_empty() {
                "no one".to_string()
            } else {
                targets.join(", ")
            };
            format!("{} can target: {}", player.describe(), targets)
        })
        .collect()
}

/// Log who can target whom across the whole roster
pub fn log_targeting_table(players: &[Player]) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    for line in targeting_table(players) {
        log::debug!("{}", line);
    }
}
