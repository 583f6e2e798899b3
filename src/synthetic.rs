//! # Synthetic Demo Identifiers
//!
//! Generators for the throwaway input data the flow needs: unique email
//! addresses and policy/license numbers. These are demo inputs only, never
//! system identifiers; the backing services issue the real ids.

use rand::Rng;

const LOWER_ALNUM: [char; 36] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

const UPPER_ALNUM: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

fn random_chars(alphabet: &[char], len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

/// Generate an email that has never been used before (w.h.p.):
/// `user.<8 lowercase-alphanumeric>@test.local`
pub fn random_email() -> String {
    format!("user.{}@test.local", random_chars(&LOWER_ALNUM, 8))
}

/// Generate a policy or license number:
/// `<prefix>-<year in 2020..=2025>-<3 uppercase-alphanumeric>`
pub fn random_policy_number(prefix: &str) -> String {
    let year = rand::thread_rng().gen_range(2020..=2025);
    format!("{prefix}-{year}-{}", random_chars(&UPPER_ALNUM, 3))
}
