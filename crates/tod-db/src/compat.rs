//! Translation of stored gender and sexuality labels
//!
//! Early versions stored German labels ("Männlich", "Heterosexuell", ...).
//! Rows are translated once here, on the way out of the store, so the rest
//! of the code only sees the closed enums. Unknown sexualities fall back to
//! `Pan` (every other player is a valid target) and unknown genders to
//! `Diverse`; both are logged.

use tod_core::{Gender, Sexuality};

/// Map a stored gender label to a [`Gender`].
pub fn gender_from_stored(raw: &str) -> Gender {
    let raw = raw.trim();
    if let Ok(gender) = raw.parse::<Gender>() {
        return gender;
    }
    match raw {
        "Männlich" => Gender::Male,
        "Weiblich" => Gender::Female,
        "Divers" => Gender::Diverse,
        other => {
            log::warn!("Unknown gender: {}, treating as Diverse", other);
            Gender::Diverse
        }
    }
}

/// Map a stored sexuality label to a [`Sexuality`].
pub fn sexuality_from_stored(raw: &str) -> Sexuality {
    let raw = raw.trim();
    if let Ok(sexuality) = raw.parse::<Sexuality>() {
        return sexuality;
    }
    match raw {
        "Heterosexuell" => Sexuality::Hetero,
        "Homosexuell" => Sexuality::Homo,
        "Bisexuell" => Sexuality::Bi,
        "Pansexuell" => Sexuality::Pan,
        "Asexuell" => Sexuality::Ace,
        other => {
            log::warn!("Unknown sexuality: {}, defaulting to all targets", other);
            Sexuality::Pan
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_labels() {
        assert_eq!(gender_from_stored("Female"), Gender::Female);
        assert_eq!(sexuality_from_stored("Ace"), Sexuality::Ace);
    }

    #[test]
    fn test_legacy_labels() {
        assert_eq!(gender_from_stored("Männlich"), Gender::Male);
        assert_eq!(gender_from_stored("Weiblich"), Gender::Female);
        assert_eq!(gender_from_stored("Divers"), Gender::Diverse);
        assert_eq!(sexuality_from_stored("Heterosexuell"), Sexuality::Hetero);
        assert_eq!(sexuality_from_stored("Homosexuell"), Sexuality::Homo);
        assert_eq!(sexuality_from_stored("Bisexuell"), Sexuality::Bi);
        assert_eq!(sexuality_from_stored("Pansexuell"), Sexuality::Pan);
        assert_eq!(sexuality_from_stored("Asexuell"), Sexuality::Ace);
    }

    #[test]
    fn test_unknown_labels_fail_open() {
        assert_eq!(gender_from_stored(""), Gender::Diverse);
        assert_eq!(sexuality_from_stored("Demi"), Sexuality::Pan);
    }
}
