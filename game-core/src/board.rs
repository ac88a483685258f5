use game_types::{Team, Tile, TileColor};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use tracing::warn;

use crate::words::{fallback_words, is_valid_word, FALLBACK_WORDS};

pub const BOARD_SIZE: usize = 25;

const STARTING_TEAM_TILES: usize = 9;
const OTHER_TEAM_TILES: usize = 8;
const ASSASSIN_TILES: usize = 1;
const NEUTRAL_TILES: usize = 7;

// Decorative art slots, partitioned by color category. Each category's tiles
// draw from its own pool so no two tiles of a color share art unless the pool
// is exhausted and assignment wraps.
const RED_SLOTS: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8, 9];
const BLUE_SLOTS: &[u8] = &[10, 11, 12, 13, 14, 15, 16, 17, 18];
const BLACK_SLOTS: &[u8] = &[19];
const NEUTRAL_SLOTS: &[u8] = &[20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30];

/// Build the 25-tile board for a new game.
///
/// `custom_words` are the admin's optional words; `supplied_words` is whatever
/// the external word supplier returned (possibly empty if it was unreachable).
/// The board always comes back with exactly [`BOARD_SIZE`] unrevealed tiles.
pub fn generate_board(
    starting_team: Team,
    custom_words: &[String],
    supplied_words: Vec<String>,
) -> Vec<Tile> {
    generate_board_with_rng(starting_team, custom_words, supplied_words, &mut thread_rng())
}

pub fn generate_board_with_rng<R: Rng>(
    starting_team: Team,
    custom_words: &[String],
    supplied_words: Vec<String>,
    rng: &mut R,
) -> Vec<Tile> {
    let words = choose_words(custom_words, supplied_words, rng);

    let mut colors = color_multiset(starting_team);
    colors.shuffle(rng);

    let mut slots = SlotAssigner::new(rng);

    words
        .into_iter()
        .zip(colors)
        .enumerate()
        .map(|(index, (word, color))| Tile {
            id: index as u8,
            word,
            color,
            revealed: false,
            revealed_by: None,
            tentative_by: Vec::new(),
            image_slot: slots.next_for(color),
        })
        .collect()
}

/// Merge custom and supplier words into exactly [`BOARD_SIZE`] entries.
fn choose_words<R: Rng>(
    custom_words: &[String],
    supplied_words: Vec<String>,
    rng: &mut R,
) -> Vec<String> {
    let custom: Vec<String> = custom_words
        .iter()
        .map(|w| w.trim().to_uppercase())
        .filter(|w| is_valid_word(w))
        .collect();

    let mut words = if custom.len() >= BOARD_SIZE {
        let mut pool = custom;
        pool.shuffle(rng);
        pool.truncate(BOARD_SIZE);
        pool
    } else {
        let needed = BOARD_SIZE - custom.len();
        let mut chosen = custom;
        let supplied: Vec<String> = supplied_words
            .into_iter()
            .map(|w| w.trim().to_uppercase())
            .filter(|w| is_valid_word(w) && !chosen.contains(w))
            .collect();
        let mut supplied = dedupe(supplied);
        supplied.truncate(needed);
        chosen.extend(supplied);

        if chosen.len() < BOARD_SIZE {
            let pad = fallback_words(BOARD_SIZE - chosen.len(), &chosen, rng);
            chosen.extend(pad);
        }
        chosen
    };

    // Absolute last resort: supplier and fallback together could not produce
    // 25 unique words, so uniqueness is relaxed rather than returning a short
    // board.
    if words.len() < BOARD_SIZE {
        warn!(
            unique_words = words.len(),
            "word pool exhausted, reusing fallback words to fill the board"
        );
        let mut i = 0;
        while words.len() < BOARD_SIZE {
            words.push(FALLBACK_WORDS[i % FALLBACK_WORDS.len()].to_string());
            i += 1;
        }
    }

    // Final shuffle so custom words are not clustered at the front.
    words.shuffle(rng);
    words
}

fn dedupe(words: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    words.into_iter().filter(|w| seen.insert(w.clone())).collect()
}

/// The canonical 9/8/1/7 color distribution, unshuffled.
fn color_multiset(starting_team: Team) -> Vec<TileColor> {
    let mut colors = Vec::with_capacity(BOARD_SIZE);
    colors.extend(std::iter::repeat_n(
        TileColor::from(starting_team),
        STARTING_TEAM_TILES,
    ));
    colors.extend(std::iter::repeat_n(
        TileColor::from(starting_team.other()),
        OTHER_TEAM_TILES,
    ));
    colors.extend(std::iter::repeat_n(TileColor::Black, ASSASSIN_TILES));
    colors.extend(std::iter::repeat_n(TileColor::Neutral, NEUTRAL_TILES));
    colors
}

/// Hands out image slots per color category, cycling only when a pool runs
/// out (which cannot happen with the canonical distribution).
struct SlotAssigner {
    red: Vec<u8>,
    blue: Vec<u8>,
    black: Vec<u8>,
    neutral: Vec<u8>,
    used: [usize; 4],
}

impl SlotAssigner {
    fn new<R: Rng>(rng: &mut R) -> Self {
        let mut red = RED_SLOTS.to_vec();
        let mut blue = BLUE_SLOTS.to_vec();
        let mut black = BLACK_SLOTS.to_vec();
        let mut neutral = NEUTRAL_SLOTS.to_vec();
        red.shuffle(rng);
        blue.shuffle(rng);
        black.shuffle(rng);
        neutral.shuffle(rng);
        Self {
            red,
            blue,
            black,
            neutral,
            used: [0; 4],
        }
    }

    fn next_for(&mut self, color: TileColor) -> u8 {
        let (pool, counter) = match color {
            TileColor::Red => (&self.red, &mut self.used[0]),
            TileColor::Blue => (&self.blue, &mut self.used[1]),
            TileColor::Black => (&self.black, &mut self.used[2]),
            TileColor::Neutral => (&self.neutral, &mut self.used[3]),
        };
        let slot = pool[*counter % pool.len()];
        *counter += 1;
        slot
    }
}
