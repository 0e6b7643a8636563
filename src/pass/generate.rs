//! Password generation.

use rand::Rng;
use rand::seq::SliceRandom;

use super::budget::{Budget, LEAD_LEN};
use super::charset::{CharacterClass, DIGITS, LETTERS, SYMBOLS};
use super::{Error, LengthSpec};

/// Generate a password of `length` characters.
///
/// Positions 0..3 are always a digit, a symbol and a letter, in that order.
/// The rest is drawn per class according to [`Budget::split`] and shuffled.
pub fn generate<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<String, Error> {
    let length = LengthSpec::new(length)?;
    Ok(generate_spec(length, rng))
}

/// Same as [`generate`] for a length that is already validated.
pub fn generate_spec<R: Rng + ?Sized>(length: LengthSpec, rng: &mut R) -> String {
    let budget = Budget::split(length);
    log::debug!("length {length}: budget {budget:?}");

    let mut lead = Vec::with_capacity(length.get());
    lead.push(pick(DIGITS, rng));
    lead.push(pick(SYMBOLS, rng));
    lead.push(pick(LETTERS, rng));

    let mut rest = Vec::with_capacity(budget.total());
    draw(&mut rest, CharacterClass::Lower, budget.lower, rng);
    draw(&mut rest, CharacterClass::Upper, budget.upper, rng);
    draw(&mut rest, CharacterClass::Digit, budget.digits, rng);
    draw(&mut rest, CharacterClass::Symbol, budget.symbols, rng);
    rest.shuffle(rng);

    lead.extend_from_slice(&rest);
    debug_assert_eq!(lead.len(), LEAD_LEN + budget.total());

    // Every alphabet is ASCII.
    lead.into_iter().map(char::from).collect()
}

#[inline]
fn pick<R: Rng + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.gen_range(0..chars.len())]
}

fn draw<R: Rng + ?Sized>(buf: &mut Vec<u8>, class: CharacterClass, count: usize, rng: &mut R) {
    let chars = class.alphabet();
    buf.extend((0..count).map(|_| pick(chars, rng)));
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn counts(password: &str) -> [usize; 4] {
        let mut counts = [0; 4];
        for c in password.chars() {
            let class = CharacterClass::of(c).expect("unclassified character");
            let idx = CharacterClass::ALL.iter().position(|&k| k == class).unwrap();
            counts[idx] += 1;
        }
        counts
    }

    #[test]
    fn length_is_exact_for_every_valid_length() {
        let mut rng = rng();
        for n in LengthSpec::MIN..=LengthSpec::MAX {
            let password = generate(n, &mut rng).unwrap();
            assert_eq!(password.chars().count(), n);
            assert_eq!(password.len(), n);
        }
    }

    #[test]
    fn leading_characters_follow_digit_symbol_letter() {
        let mut rng = rng();
        for n in [12, 20, 35, 52] {
            for _ in 0..50 {
                let password = generate(n, &mut rng).unwrap();
                let lead: Vec<char> = password.chars().take(3).collect();
                assert!(lead[0].is_ascii_digit(), "{password}");
                assert!(lead[1].is_ascii_punctuation(), "{password}");
                assert!(lead[2].is_ascii_alphabetic(), "{password}");
            }
        }
    }

    #[test]
    fn class_counts_match_budget() {
        let mut rng = rng();
        for n in LengthSpec::MIN..=LengthSpec::MAX {
            let password = generate(n, &mut rng).unwrap();
            let budget = Budget::split(LengthSpec::new(n).unwrap());

            // Only the shuffled part: the letter slot may be either case.
            let rest = &password[LEAD_LEN..];
            let [lower, upper, digits, symbols] = counts(rest);
            assert_eq!(lower, budget.lower, "length {n}");
            assert_eq!(upper, budget.upper, "length {n}");
            assert_eq!(digits, budget.digits, "length {n}");
            assert_eq!(symbols, budget.symbols, "length {n}");
        }
    }

    #[test]
    fn contains_all_four_classes() {
        let mut rng = rng();
        for n in [12, 17, 20, 52] {
            let password = generate(n, &mut rng).unwrap();
            assert!(counts(&password).iter().all(|&c| c > 0), "{password}");
        }
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        let mut rng = rng();
        assert_eq!(generate(11, &mut rng), Err(Error::InvalidLength { length: 11 }));
        assert_eq!(generate(53, &mut rng), Err(Error::InvalidLength { length: 53 }));
        assert_eq!(generate(0, &mut rng), Err(Error::InvalidLength { length: 0 }));
    }

    #[test]
    fn same_seed_reproduces_password() {
        let a = generate(30, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate(30, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn successive_calls_differ() {
        let mut rng = rand::thread_rng();
        let passwords: HashSet<String> =
            (0..5).map(|_| generate(20, &mut rng).unwrap()).collect();
        assert!(passwords.len() > 1);
    }

    #[test]
    fn remainder_is_shuffled() {
        // Unshuffled draws would always put lowercase first.
        let mut rng = rng();
        let shuffled = (0..20).any(|_| {
            let password = generate(52, &mut rng).unwrap();
            !password.as_bytes()[LEAD_LEN].is_ascii_lowercase()
        });
        assert!(shuffled);
    }
}
