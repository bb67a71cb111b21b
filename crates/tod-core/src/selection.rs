//! Question selection with recency avoidance
//!
//! Recently seen candidates are skipped only while something else is left:
//! if every candidate was seen recently the full set is used again, so a
//! small pack never runs dry.

use crate::error::{Error, Result};
use crate::identity::QuestionId;
use crate::question::{Question, TaskType};
use crate::rng::GameRng;

/// Uniformly pick a candidate, preferring ones whose key is not in `recent`.
///
/// Returns `None` only when `candidates` is empty.
pub fn pick_avoiding_recent<'a, T, K, F>(
    candidates: &'a [T],
    key: F,
    recent: &[K],
    rng: &mut GameRng,
) -> Option<&'a T>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    if candidates.len() > 1 && !recent.is_empty() {
        let fresh: Vec<&T> = candidates
            .iter()
            .filter(|c| !recent.contains(&key(*c)))
            .collect();
        if !fresh.is_empty() {
            return rng.pick(&fresh).copied();
        }
    }
    rng.pick(candidates)
}

/// Pick one question of `kind` from `pack` out of `candidates`.
///
/// `candidates` is normally the result of the store's `(pack, type)` lookup;
/// anything not matching exactly is ignored.
pub fn select_question(
    pack: &str,
    kind: TaskType,
    mut candidates: Vec<Question>,
    recent: &[QuestionId],
    rng: &mut GameRng,
) -> Result<Question> {
    candidates.retain(|q| q.pack_name == pack && q.kind == kind);

    pick_avoiding_recent(&candidates, |q| q.id, recent, rng)
        .cloned()
        .ok_or_else(|| Error::NoQuestionsAvailable {
            pack: pack.to_string(),
            kind,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::NewQuestion;

    fn question(id: u64, pack: &str, kind: TaskType) -> Question {
        NewQuestion::new(pack, kind, "{playerName}, los!", false).with_id(QuestionId::new(id))
    }

    #[test]
    fn test_empty_set_fails() {
        let mut rng = GameRng::new(1);
        let err = select_question("Entspannt", TaskType::Dare, vec![], &[], &mut rng).unwrap_err();
        assert_eq!(
            err,
            Error::NoQuestionsAvailable {
                pack: "Entspannt".to_string(),
                kind: TaskType::Dare
            }
        );
    }

    #[test]
    fn test_only_matching_questions_are_returned() {
        let mut rng = GameRng::new(3);
        let candidates = vec![
            question(1, "Entspannt", TaskType::Truth),
            question(2, "Entspannt", TaskType::Dare),
            question(3, "Partyyyy", TaskType::Dare),
        ];
        for _ in 0..50 {
            let q = select_question(
                "Entspannt",
                TaskType::Dare,
                candidates.clone(),
                &[],
                &mut rng,
            )
            .unwrap();
            assert_eq!(q.id, QuestionId::new(2));
        }
    }

    #[test]
    fn test_recent_questions_are_avoided() {
        let mut rng = GameRng::new(5);
        let candidates: Vec<_> = (1..=3)
            .map(|id| question(id, "Entspannt", TaskType::Truth))
            .collect();
        let recent = [QuestionId::new(1), QuestionId::new(2)];
        for _ in 0..50 {
            let q = select_question(
                "Entspannt",
                TaskType::Truth,
                candidates.clone(),
                &recent,
                &mut rng,
            )
            .unwrap();
            assert_eq!(q.id, QuestionId::new(3));
        }
    }

    #[test]
    fn test_recency_never_starves() {
        let mut rng = GameRng::new(9);
        let candidates: Vec<_> = (1..=2)
            .map(|id| question(id, "Entspannt", TaskType::Truth))
            .collect();
        let recent = [QuestionId::new(1), QuestionId::new(2)];
        let q = select_question("Entspannt", TaskType::Truth, candidates, &recent, &mut rng);
        assert!(q.is_ok());
    }

    #[test]
    fn test_single_candidate_ignores_recency() {
        let mut rng = GameRng::new(11);
        let only = [7u32];
        assert_eq!(pick_avoiding_recent(&only, |v| *v, &[7], &mut rng), Some(&7));
    }
}
