use game_types::Tile;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Permute tile positions deterministically for one viewer class.
///
/// Operatives all see the same non-canonical order for a given game (seeded
/// by the game id), stable across reloads and devices, while spymasters keep
/// the canonical order. The seed string is hashed with SHA-256 and the digest
/// drives a ChaCha8 stream through a Fisher-Yates shuffle, so the permutation
/// is unbiased and depends on nothing but `(tiles, seed)`.
pub fn shuffle_for_viewer(tiles: &[Tile], seed: &str) -> Vec<Tile> {
    let digest = Sha256::digest(seed.as_bytes());
    let mut rng = ChaCha8Rng::from_seed(digest.into());

    let mut shuffled = tiles.to_vec();
    shuffled.shuffle(&mut rng);
    shuffled
}
