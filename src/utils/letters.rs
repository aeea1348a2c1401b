use rand::Rng;

/// Letters used to fill the board around the hidden words
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Uniformly random uppercase letter A-Z
pub fn random_letter(rng: &mut impl Rng) -> char {
    ALPHABET[rng.random_range(0..ALPHABET.len())] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_letter_is_uppercase_ascii() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(random_letter(&mut rng).is_ascii_uppercase());
        }
    }

    #[test]
    fn test_random_letter_covers_alphabet() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 26];
        for _ in 0..5000 {
            let letter = random_letter(&mut rng);
            seen[(letter as u8 - b'A') as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
