//! Seeded random positions and a brute-force reference mover to check the solver against.
use crate::board::{Board, Direction};
use crate::moves::Move;
use crate::ruleset::Ruleset;
use crate::tilebag::TileBag;
use crate::tiles::{Letter, Rack, Tile};
use crate::wordlist::WordIndex;
use crate::Error;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

const WORDS: &str = include_str!("testing/words.txt");

/// A small word list, as an index for the solver and as a plain set for the reference.
pub(crate) struct Lexicon {
    pub words: Vec<&'static str>,
    pub index: WordIndex,
    pub dictionary: HashSet<String>,
}

impl Lexicon {
    pub fn new() -> Result<Lexicon, Error> {
        let words: Vec<&'static str> = WORDS.lines().filter(|w| !w.is_empty()).collect();
        let index = WordIndex::from_words(&words)?;
        let dictionary = words.iter().map(|w| w.to_ascii_uppercase()).collect();
        Ok(Lexicon {
            words,
            index,
            dictionary,
        })
    }
}

/// A board with up to `count` words, every run of tiles on it a word of `index`.
///
/// The first word crosses the center square, every later word shares a square
/// with a word already on the board. Falls back to CAT on the center row.
pub(crate) fn generate_board(
    rng: &mut StdRng,
    ruleset: &Ruleset,
    lexicon: &Lexicon,
    count: usize,
) -> Result<Board, Error> {
    let short: Vec<&str> = lexicon
        .words
        .iter()
        .copied()
        .filter(|w| (2..=7).contains(&w.len()))
        .collect();
    let (row, col) = ruleset.center();
    for _ in 0..50 {
        let mut board = Board::empty(ruleset.width(), ruleset.height());
        let mut pool = short.clone();
        pool.shuffle(rng);
        let mut pool = pool.into_iter();
        let mut placed = 0;
        for word in pool.by_ref() {
            let offset = rng.gen_range(0..word.len());
            let start = if rng.gen_bool(0.5) {
                col.checked_sub(offset)
                    .map(|c| (row, c, Direction::Horizontal))
            } else {
                row.checked_sub(offset).map(|r| (r, col, Direction::Vertical))
            };
            if let Some((r, c, direction)) = start {
                if board.place_word(word, r, c, direction).is_ok() {
                    placed = 1;
                    break;
                }
            }
        }
        for word in pool {
            if placed >= count {
                break;
            }
            if place_crossing(rng, &mut board, word, &lexicon.index) {
                placed += 1;
            }
        }
        if placed >= count {
            return Ok(board);
        }
    }
    let mut board = Board::empty(ruleset.width(), ruleset.height());
    board.place_word("cat", row, col.saturating_sub(1), Direction::Horizontal)?;
    Ok(board)
}

/// Lay `word` across a tile on the board with the same letter, if the board
/// stays valid.
fn place_crossing(rng: &mut StdRng, board: &mut Board, word: &str, index: &WordIndex) -> bool {
    let mut tiles: Vec<(usize, usize, Letter)> = board.tiles().collect();
    tiles.shuffle(rng);
    for (row, col, letter) in tiles {
        for (i, ch) in word.chars().enumerate() {
            if Letter::from_char(ch) != Some(letter) {
                continue;
            }
            for &direction in &Direction::BOTH {
                let start = match direction {
                    Direction::Horizontal => col.checked_sub(i).map(|c| (row, c)),
                    Direction::Vertical => row.checked_sub(i).map(|r| (r, col)),
                };
                let (r, c) = match start {
                    Some(start) => start,
                    None => continue,
                };
                let mut trial = board.clone();
                match trial.place_word(word, r, c, direction) {
                    Ok(placed) if placed > 0 => {}
                    _ => continue,
                }
                if trial.words().iter().all(|w| index.contains(w)) {
                    *board = trial;
                    return true;
                }
            }
        }
    }
    false
}

/// A full rack from the standard bag, minus the tiles on `board`.
pub(crate) fn draw_rack(rng: &mut StdRng, ruleset: &Ruleset, board: &Board) -> Rack {
    let mut bag = TileBag::standard();
    bag.remove_board_tiles(board);
    bag.draw(rng, ruleset.rack_size())
}

/// Tries every word at every offset over every anchor square, in both directions.
pub(crate) struct Reference<'a> {
    board: &'a Board,
    ruleset: &'a Ruleset,
    lexicon: &'a Lexicon,
}

impl<'a> Reference<'a> {
    pub fn new(board: &'a Board, ruleset: &'a Ruleset, lexicon: &'a Lexicon) -> Reference<'a> {
        Reference {
            board,
            ruleset,
            lexicon,
        }
    }

    fn square(&self, row: usize, col: usize) -> Option<char> {
        self.board.get(row, col).map(Letter::to_char)
    }

    fn value(&self, ch: char) -> u32 {
        Letter::from_char(ch).map_or(0, |letter| self.ruleset.points(letter))
    }

    /// Empty squares next to a tile, or the center square of an empty board.
    fn anchors(&self) -> Vec<(usize, usize)> {
        if self.board.is_empty() {
            return vec![self.ruleset.center()];
        }
        let mut anchors = Vec::new();
        for row in 0..self.board.height() {
            for col in 0..self.board.width() {
                if self.board.is_occupied(row, col) {
                    continue;
                }
                let near = (row > 0 && self.board.is_occupied(row - 1, col))
                    || self.board.is_occupied(row + 1, col)
                    || (col > 0 && self.board.is_occupied(row, col - 1))
                    || self.board.is_occupied(row, col + 1);
                if near {
                    anchors.push((row, col));
                }
            }
        }
        anchors
    }

    /// Could `word` be spelled with the rack, the board and the blanks at all?
    fn might_fit(&self, word: &str, available: &HashSet<char>, blanks: usize) -> bool {
        let missing: HashSet<char> = word.chars().filter(|ch| !available.contains(ch)).collect();
        missing.len() <= blanks
    }

    pub fn moves(&self, rack: &Rack) -> Vec<Move> {
        let mut available: HashSet<char> = rack
            .tiles()
            .iter()
            .filter_map(|tile| tile.letter())
            .map(Letter::to_char)
            .collect();
        available.extend(self.board.tiles().map(|(_, _, letter)| letter.to_char()));
        let anchors = self.anchors();
        let mut found = HashMap::new();
        for word in &self.lexicon.dictionary {
            if word.len() < 2 || !self.might_fit(word, &available, rack.blanks()) {
                continue;
            }
            for &(anchor_row, anchor_col) in &anchors {
                for &direction in &Direction::BOTH {
                    for offset in 0..word.len() {
                        let start = match direction {
                            Direction::Horizontal => anchor_col.checked_sub(offset).map(|c| (anchor_row, c)),
                            Direction::Vertical => anchor_row.checked_sub(offset).map(|r| (r, anchor_col)),
                        };
                        let (row, col) = match start {
                            Some(start) => start,
                            None => continue,
                        };
                        if let Some(score) = self.try_place(word, row, col, direction, rack) {
                            found.insert((word.clone(), row, col, direction), score);
                        }
                    }
                }
            }
        }
        let mut moves: Vec<Move> = found
            .into_iter()
            .map(|((word, row, col, direction), score)| Move {
                word,
                row,
                col,
                direction,
                score,
            })
            .collect();
        moves.sort_by(|a, b| b.score.cmp(&a.score));
        moves
    }

    fn try_place(
        &self,
        word: &str,
        row: usize,
        col: usize,
        direction: Direction,
        rack: &Rack,
    ) -> Option<u32> {
        let chars: Vec<char> = word.chars().collect();
        let (dr, dc) = direction.delta();
        let (last_row, last_col) = (row + dr * (chars.len() - 1), col + dc * (chars.len() - 1));
        if last_row >= self.board.height() || last_col >= self.board.width() {
            return None;
        }
        if row >= dr && col >= dc && self.square(row - dr, col - dc).is_some() {
            return None;
        }
        if self.square(last_row + dr, last_col + dc).is_some() {
            return None;
        }

        let mut tiles: Vec<Tile> = rack.tiles().to_vec();
        let (cr, cc) = direction.perpendicular().delta();
        let mut main = 0;
        let mut multiplier = 1;
        let mut cross = 0;
        let mut placed = 0;
        let mut connected = false;
        let mut center = false;
        for (i, &ch) in chars.iter().enumerate() {
            let (r, c) = (row + dr * i, col + dc * i);
            center |= (r, c) == self.ruleset.center();
            if let Some(existing) = self.square(r, c) {
                if existing != ch {
                    return None;
                }
                main += self.value(ch);
                connected = true;
                continue;
            }
            let real = tiles
                .iter()
                .position(|tile| tile.letter().map(Letter::to_char) == Some(ch));
            let value = match real {
                Some(pos) => {
                    tiles.swap_remove(pos);
                    self.value(ch)
                }
                None => {
                    let pos = tiles.iter().position(|tile| tile.is_blank())?;
                    tiles.swap_remove(pos);
                    0
                }
            };
            placed += 1;
            let bonus = self.ruleset.bonus(r, c);
            main += value * bonus.letter_multiplier();
            multiplier *= bonus.word_multiplier();

            let mut prefix = Vec::new();
            let (mut pr, mut pc) = (r, c);
            while pr >= cr && pc >= cc {
                match self.square(pr - cr, pc - cc) {
                    Some(before) => prefix.push(before),
                    None => break,
                }
                pr -= cr;
                pc -= cc;
            }
            prefix.reverse();
            let mut suffix = Vec::new();
            let (mut sr, mut sc) = (r + cr, c + cc);
            while let Some(after) = self.square(sr, sc) {
                suffix.push(after);
                sr += cr;
                sc += cc;
            }
            if prefix.is_empty() && suffix.is_empty() {
                continue;
            }
            let cross_word: String = prefix
                .iter()
                .chain(Some(&ch))
                .chain(suffix.iter())
                .collect();
            if !self.lexicon.dictionary.contains(&cross_word) {
                return None;
            }
            let others: u32 = prefix.iter().chain(suffix.iter()).map(|&ch| self.value(ch)).sum();
            cross += (others + value * bonus.letter_multiplier()) * bonus.word_multiplier();
            connected = true;
        }

        if placed == 0 {
            return None;
        }
        if self.board.is_empty() {
            if !center {
                return None;
            }
        } else if !connected {
            return None;
        }
        let bingo = if placed == self.ruleset.rack_size() {
            self.ruleset.bingo_bonus()
        } else {
            0
        };
        Some(main * multiplier + cross + bingo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Placement;
    use crate::{Game, Solver};
    use rand::SeedableRng;

    fn top(moves: &[Move]) -> HashSet<Move> {
        let best = moves.first().map_or(0, |mv| mv.score);
        moves.iter().filter(|mv| mv.score == best).cloned().collect()
    }

    fn check_against_reference(
        solver: &Solver,
        lexicon: &Lexicon,
        board: &Board,
        rack: &Rack,
    ) -> Result<(), Error> {
        let moves = solver.solve(board, rack)?;
        let expected = Reference::new(board, solver.ruleset(), lexicon).moves(rack);
        let context = format!("{}\nrack {}", board, rack);
        assert_eq!(
            moves.first().map(|mv| mv.score),
            expected.first().map(|mv| mv.score),
            "best score\n{}",
            context
        );
        assert_eq!(top(&moves), top(&expected), "best moves\n{}", context);
        let found: HashSet<Move> = moves.into_iter().collect();
        let wanted: HashSet<Move> = expected.into_iter().collect();
        assert_eq!(found, wanted, "all moves\n{}", context);
        Ok(())
    }

    #[test]
    fn test_generate_board() -> Result<(), Error> {
        let lexicon = Lexicon::new()?;
        let ruleset = Ruleset::new(Game::CrossPlay);
        for count in 1..=8 {
            let board = generate_board(&mut StdRng::seed_from_u64(7), &ruleset, &lexicon, count)?;
            let (row, col) = ruleset.center();
            assert!(board.is_occupied(row, col));
            assert!(board.words().iter().all(|w| lexicon.index.contains(w)));
            let again = generate_board(&mut StdRng::seed_from_u64(7), &ruleset, &lexicon, count)?;
            assert_eq!(board, again);
        }
        Ok(())
    }

    #[test]
    fn test_matches_reference() -> Result<(), Error> {
        let lexicon = Lexicon::new()?;
        for (i, &game) in Game::ALL.iter().enumerate() {
            let ruleset = Ruleset::new(game);
            let solver = Solver::new(&lexicon.index, &ruleset);
            for count in 2..=8 {
                let mut rng = StdRng::seed_from_u64(100 * i as u64 + count as u64);
                let board = generate_board(&mut rng, &ruleset, &lexicon, count)?;
                let rack = draw_rack(&mut rng, &ruleset, &board);
                check_against_reference(&solver, &lexicon, &board, &rack)?;
            }
        }
        Ok(())
    }

    #[test]
    fn test_matches_reference_with_blanks() -> Result<(), Error> {
        let lexicon = Lexicon::new()?;
        let ruleset = Ruleset::new(Game::Scrabble);
        let solver = Solver::new(&lexicon.index, &ruleset);
        for (seed, blanks) in [(11, 1), (12, 2)] {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = generate_board(&mut rng, &ruleset, &lexicon, 4)?;
            let mut rack: Rack = draw_rack(&mut rng, &ruleset, &board)
                .tiles()
                .iter()
                .copied()
                .filter(|tile| !tile.is_blank())
                .take(ruleset.rack_size() - blanks)
                .collect();
            for _ in 0..blanks {
                rack.push(Tile::Blank);
            }
            check_against_reference(&solver, &lexicon, &board, &rack)?;
        }
        Ok(())
    }

    #[test]
    fn test_empty_board() -> Result<(), Error> {
        let lexicon = Lexicon::new()?;
        for &game in &Game::ALL {
            let ruleset = Ruleset::new(game);
            let solver = Solver::new(&lexicon.index, &ruleset);
            let board = Board::empty(ruleset.width(), ruleset.height());
            let rack = draw_rack(&mut StdRng::seed_from_u64(5), &ruleset, &board);
            let moves = solver.solve(&board, &rack)?;
            for mv in &moves {
                let placement = Placement::new(&mv.word, mv.row, mv.col, mv.direction)?;
                assert!(placement
                    .squares()
                    .any(|(r, c, _)| (r, c) == ruleset.center()));
            }
            check_against_reference(&solver, &lexicon, &board, &rack)?;
        }
        Ok(())
    }

    #[test]
    fn test_moves_are_legal() -> Result<(), Error> {
        let lexicon = Lexicon::new()?;
        let ruleset = Ruleset::new(Game::CrossPlay);
        let solver = Solver::new(&lexicon.index, &ruleset);
        for seed in 0..4 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = generate_board(&mut rng, &ruleset, &lexicon, 6)?;
            let rack = draw_rack(&mut rng, &ruleset, &board);
            let before = board.clone();
            for mv in solver.solve(&board, &rack)? {
                let (dr, dc) = mv.direction.delta();
                let len = mv.word.len();
                // the word is not part of a longer run
                if mv.row >= dr && mv.col >= dc {
                    assert!(!board.is_occupied(mv.row - dr, mv.col - dc), "{}", mv);
                }
                assert!(!board.is_occupied(mv.row + dr * len, mv.col + dc * len), "{}", mv);
                // every word on the board afterwards is valid, cross words included
                let mut after = board.clone();
                let placed = after.place_word(&mv.word, mv.row, mv.col, mv.direction)?;
                assert!(placed > 0 && placed <= rack.len());
                assert!(after.words().iter().all(|w| lexicon.index.contains(w)), "{}", mv);
            }
            assert_eq!(board, before);
        }
        Ok(())
    }

    #[test]
    fn test_idempotent() -> Result<(), Error> {
        let lexicon = Lexicon::new()?;
        let ruleset = Ruleset::new(Game::WordsWithFriends);
        let solver = Solver::new(&lexicon.index, &ruleset);
        let mut rng = StdRng::seed_from_u64(42);
        let board = generate_board(&mut rng, &ruleset, &lexicon, 5)?;
        let rack = draw_rack(&mut rng, &ruleset, &board);
        let first: HashSet<Move> = solver.solve(&board, &rack)?.into_iter().collect();
        let second: HashSet<Move> = solver.solve(&board, &rack)?.into_iter().collect();
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_zero_score_cross_word_connects() -> Result<(), Error> {
        let lexicon = Lexicon::new()?;
        let values: Vec<(char, u32)> = ('a'..='z')
            .map(|ch| match ch {
                'a' | 'e' | 's' => (ch, 0),
                'x' => (ch, 8),
                _ => (ch, 1),
            })
            .collect();
        let ruleset = Ruleset::custom("zero", 15, 15).with_letter_values(&values)?;
        let solver = Solver::new(&lexicon.index, &ruleset);
        let mut board = Board::empty(15, 15);
        board.place_word("sea", 7, 6, Direction::Horizontal)?;
        let rack: Rack = "seatdxo".parse()?;
        // SEA below SEA forms ES and AE, all worth nothing
        let sea = Move {
            word: String::from("SEA"),
            row: 8,
            col: 7,
            direction: Direction::Horizontal,
            score: 0,
        };
        assert!(solver.solve(&board, &rack)?.contains(&sea));
        assert!(Reference::new(&board, &ruleset, &lexicon).moves(&rack).contains(&sea));
        let breakdown = solver.explain(&board, &rack, &sea)?.unwrap();
        let crossing: Vec<(&str, u32)> = breakdown
            .cross_words
            .iter()
            .map(|cross| (cross.word.as_str(), cross.score))
            .collect();
        assert_eq!(crossing, vec![("ES", 0), ("AE", 0)]);
        check_against_reference(&solver, &lexicon, &board, &rack)
    }

    #[test]
    fn test_blanks_score_nothing() -> Result<(), Error> {
        let lexicon = Lexicon::new()?;
        let ruleset = Ruleset::new(Game::Scrabble);
        let solver = Solver::new(&lexicon.index, &ruleset);
        let board = Board::empty(ruleset.width(), ruleset.height());
        let moves = solver.solve(&board, &"??".parse()?)?;
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|mv| mv.score == 0 && mv.word.len() == 2));
        Ok(())
    }
}
