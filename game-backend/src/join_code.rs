use rand::seq::SliceRandom;
use rand::thread_rng;

pub const CODE_LENGTH: usize = 6;

// No 0/O or 1/I, since codes get read out loud across a table.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// A short human-shareable code for a game. Distinguishable is the bar, not
/// unguessable; lobby gatecrashing is not a threat this game defends against.
pub fn generate_code() -> String {
    let mut rng = thread_rng();
    (0..CODE_LENGTH)
        .map(|_| *CODE_ALPHABET.choose(&mut rng).unwrap_or(&b'A') as char)
        .collect()
}

/// Codes are matched case-insensitively wherever players type them in.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
