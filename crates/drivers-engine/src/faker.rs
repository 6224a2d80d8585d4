//! Synthetic driver generation
//!
//! Builds plausible drivers for seeding: names drawn from fixed pools, an
//! email derived from the name, and a North American style phone number.
//! Every generator takes the RNG as a parameter so tests can seed it.

use std::collections::{HashSet, TryReserveError};

use drivers_core::Driver;
use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Ada", "Alan", "Amara", "Anne", "Arthur", "Beatrice", "Bruno", "Carla", "Chen",
    "Dario", "Diana", "Elena", "Emeka", "Farah", "Felix", "Grace", "Hana", "Hugo", "Ines",
    "Ivan", "Jane", "John", "Kofi", "Laila", "Lucas", "Maya", "Mateo", "Nadia", "Noah",
    "Olga", "Omar", "Priya", "Quentin", "Rosa", "Sami", "Sofia", "Tomas", "Uma", "Viktor",
    "Wen", "Yara", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abara", "Bauer", "Castillo", "Doe", "Eriksen", "Fischer", "Garcia", "Haddad", "Ito",
    "Jensen", "Kowalski", "Lindqvist", "Mickel", "Novak", "Okafor", "Petrov", "Quinn",
    "Rossi", "Silva", "Tanaka", "Ueda", "Varga", "Walker", "Xu", "Yilmaz", "Zimmermann",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "mail.test"];

/// Attempts per driver before giving up on finding unused contact fields
const MAX_ATTEMPTS: usize = 1_000;

fn pick<'a, G: Rng + ?Sized>(rng: &mut G, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Email of the form `first.last<N>@domain`, lowercased
pub fn random_email<G: Rng + ?Sized>(rng: &mut G, first_name: &str, last_name: &str) -> String {
    format!(
        "{}.{}{}@{}",
        first_name,
        last_name,
        rng.gen_range(1..10_000),
        pick(rng, EMAIL_DOMAINS)
    )
    .to_lowercase()
}

/// Phone number formatted as `(NNN) NNN-NNNN`
///
/// Area code and exchange never start with 0 or 1.
pub fn random_phone<G: Rng + ?Sized>(rng: &mut G) -> String {
    format!(
        "({}) {}-{:04}",
        rng.gen_range(200..=999),
        rng.gen_range(200..=999),
        rng.gen_range(0..=9999)
    )
}

/// A single unsaved driver with independently randomized fields
pub fn random_driver<G: Rng + ?Sized>(rng: &mut G) -> Driver {
    let first_name = pick(rng, FIRST_NAMES);
    let last_name = pick(rng, LAST_NAMES);
    let email = random_email(rng, first_name, last_name);
    let phone_number = random_phone(rng);
    Driver::new(first_name, last_name, email, phone_number)
}

/// `count` unsaved drivers whose emails and phone numbers are pairwise distinct
///
/// A candidate that repeats an email or phone already in the batch is
/// regenerated.
///
/// # Errors
/// `TryReserveError` when a batch of `count` drivers cannot be allocated.
pub fn random_drivers<G: Rng + ?Sized>(
    rng: &mut G,
    count: usize,
) -> Result<Vec<Driver>, TryReserveError> {
    let mut drivers = Vec::new();
    drivers.try_reserve_exact(count)?;
    let mut emails = HashSet::new();
    emails.try_reserve(count)?;
    let mut phones = HashSet::new();
    phones.try_reserve(count)?;

    while drivers.len() < count {
        let mut candidate = random_driver(rng);
        for _ in 0..MAX_ATTEMPTS {
            if !emails.contains(&candidate.email) && !phones.contains(&candidate.phone_number) {
                break;
            }
            candidate = random_driver(rng);
        }

        emails.insert(candidate.email.clone());
        phones.insert(candidate.phone_number.clone());
        drivers.push(candidate);
    }

    Ok(drivers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivers_core::rules::validate_driver;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_driver_is_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let driver = random_driver(&mut rng);
            assert_eq!(driver.id, 0);
            assert!(validate_driver(&driver).is_ok(), "invalid: {:?}", driver);
        }
    }

    #[test]
    fn test_phone_format() {
        let mut rng = StdRng::seed_from_u64(11);
        let phone = random_phone(&mut rng);
        let bytes = phone.as_bytes();
        assert_eq!(phone.len(), 14);
        assert_eq!(bytes[0], b'(');
        assert_eq!(&phone[4..6], ") ");
        assert_eq!(bytes[9], b'-');
        assert!(matches!(bytes[1], b'2'..=b'9'));
        assert!(matches!(bytes[6], b'2'..=b'9'));
    }

    #[test]
    fn test_email_is_lowercase_name() {
        let mut rng = StdRng::seed_from_u64(3);
        let email = random_email(&mut rng, "Jane", "Mickel");
        assert!(email.starts_with("jane.mickel"));
        assert_eq!(email, email.to_lowercase());
    }

    #[test]
    fn test_batch_contact_fields_unique() {
        let mut rng = StdRng::seed_from_u64(42);
        let drivers = random_drivers(&mut rng, 500).unwrap();
        assert_eq!(drivers.len(), 500);

        let emails: HashSet<_> = drivers.iter().map(|d| d.email.as_str()).collect();
        let phones: HashSet<_> = drivers.iter().map(|d| d.phone_number.as_str()).collect();
        assert_eq!(emails.len(), 500);
        assert_eq!(phones.len(), 500);
    }

    #[test]
    fn test_unallocatable_count_is_error() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_drivers(&mut rng, usize::MAX).is_err());
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_drivers(&mut rng, 0).unwrap().is_empty());
    }
}
