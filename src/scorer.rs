use crate::board::{Board, Direction};
use crate::grid::Bonus;
use crate::moves::Placement;
use crate::ruleset::Ruleset;
use crate::tiles::{Letter, Rack, RackTally};
use crate::wordlist::WordIndex;
use std::fmt;

/// A perpendicular word formed by one newly placed tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossWord {
    pub word: String,
    /// First square of the cross word
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub score: u32,
}

/// How the score of a legal placement is made up.
///
/// `total` is `main_word * word_multiplier`, plus the score of every cross word,
/// plus `bingo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Sum of the main word letters, letter multipliers applied
    pub main_word: u32,
    /// Product of the word multipliers under the new tiles
    pub word_multiplier: u32,
    pub cross_words: Vec<CrossWord>,
    pub bingo: u32,
    pub tiles_placed: usize,
    pub total: u32,
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "main {} x {}", self.main_word, self.word_multiplier)?;
        for cross in &self.cross_words {
            write!(f, " + {} {}", cross.word, cross.score)?;
        }
        if self.bingo > 0 {
            write!(f, " + bingo {}", self.bingo)?;
        }
        write!(f, " = {}", self.total)
    }
}

enum Cross {
    /// No tile on either side
    Absent,
    Valid { score: u32, head: (usize, usize), len: usize },
    Invalid,
}

/// Checks placements against one board position and rack, and scores the legal ones.
pub struct Scorer<'a> {
    board: &'a Board,
    ruleset: &'a Ruleset,
    index: &'a WordIndex,
    rack: RackTally,
    first_move: bool,
}

impl<'a> Scorer<'a> {
    pub fn new(
        board: &'a Board,
        ruleset: &'a Ruleset,
        index: &'a WordIndex,
        rack: &Rack,
    ) -> Scorer<'a> {
        Scorer {
            board,
            ruleset,
            index,
            rack: rack.tally(),
            first_move: board.is_empty(),
        }
    }

    /// The score of `placement`, or `None` if it is not a legal move.
    ///
    /// A placement is legal if
    /// - the word fits on the board and agrees with the tiles it covers,
    /// - the rack holds the tiles for the empty squares, blanks standing in for missing letters,
    /// - at least one tile is placed,
    /// - it covers the center square on an empty board, and otherwise covers a
    ///   tile or forms a cross word,
    /// - every cross word it forms is a word,
    /// - the squares right before and after the word are empty.
    pub fn score(&self, placement: &Placement) -> Option<u32> {
        self.evaluate(placement, None)
    }

    /// Like [`score`](Scorer::score), but returns how the score is made up.
    pub fn explain(&self, placement: &Placement) -> Option<ScoreBreakdown> {
        let mut breakdown = ScoreBreakdown {
            main_word: 0,
            word_multiplier: 1,
            cross_words: Vec::new(),
            bingo: 0,
            tiles_placed: 0,
            total: 0,
        };
        let total = self.evaluate(placement, Some(&mut breakdown))?;
        breakdown.total = total;
        Some(breakdown)
    }

    fn evaluate(
        &self,
        placement: &Placement,
        mut explain: Option<&mut ScoreBreakdown>,
    ) -> Option<u32> {
        let direction = placement.direction;
        let (line, start) = direction.line_offset(placement.row, placement.col);
        let len = placement.len();
        let fits = start
            .checked_add(len)
            .map_or(false, |end| end <= self.board.line_len(direction));
        if line >= self.board.line_count(direction) || !fits {
            return None;
        }
        let mut rack = self.rack;
        let mut main_word = 0;
        let mut word_multiplier = 1;
        let mut cross_total = 0;
        let mut tiles_placed = 0;
        let mut connects = false;
        let mut covers_center = false;

        for (row, col, letter) in placement.squares() {
            covers_center |= (row, col) == self.ruleset.center();
            if let Some(existing) = self.board.get(row, col) {
                if existing != letter {
                    return None;
                }
                connects = true;
                main_word += self.ruleset.points(letter);
                continue;
            }
            tiles_placed += 1;
            let value = if rack.take(letter) {
                self.ruleset.points(letter)
            } else if rack.take_blank() {
                0
            } else {
                return None;
            };
            let bonus = self.ruleset.bonus(row, col);
            main_word += value * bonus.letter_multiplier();
            word_multiplier *= bonus.word_multiplier();

            let cross = direction.perpendicular();
            match self.cross_word(row, col, letter, value, bonus, cross) {
                Cross::Absent => {}
                Cross::Invalid => return None,
                Cross::Valid { score, head, len } => {
                    cross_total += score;
                    connects = true;
                    if let Some(breakdown) = explain.as_mut() {
                        breakdown.cross_words.push(CrossWord {
                            word: self.spell(head, len, cross, (row, col), letter),
                            row: head.0,
                            col: head.1,
                            direction: cross,
                            score,
                        });
                    }
                }
            }
        }

        if tiles_placed == 0 {
            return None;
        }
        if self.first_move {
            if !covers_center {
                return None;
            }
        } else if !connects {
            return None;
        }
        let (before, after) = (start.checked_sub(1), start + len);
        if before.map_or(false, |i| self.occupied_on_line(direction, line, i))
            || self.occupied_on_line(direction, line, after)
        {
            return None;
        }

        let bingo = if tiles_placed == self.ruleset.rack_size() {
            self.ruleset.bingo_bonus()
        } else {
            0
        };
        if let Some(breakdown) = explain {
            breakdown.main_word = main_word;
            breakdown.word_multiplier = word_multiplier;
            breakdown.bingo = bingo;
            breakdown.tiles_placed = tiles_placed;
        }
        Some(main_word * word_multiplier + cross_total + bingo)
    }

    fn occupied_on_line(&self, direction: Direction, line: usize, offset: usize) -> bool {
        let (row, col) = direction.coords(line, offset);
        self.board.is_occupied(row, col)
    }

    /// The word formed across `cross` when `letter`, worth `value`, is placed on
    /// the empty square (row, col). Only the new tile gets the square's bonus.
    fn cross_word(
        &self,
        row: usize,
        col: usize,
        letter: Letter,
        value: u32,
        bonus: Bonus,
        cross: Direction,
    ) -> Cross {
        let (dr, dc) = cross.delta();
        let mut head = (row, col);
        while head.0 >= dr && head.1 >= dc && self.board.is_occupied(head.0 - dr, head.1 - dc) {
            head = (head.0 - dr, head.1 - dc);
        }
        let mut node = Some(self.index.root());
        let mut sum = 0;
        let mut len = 0;
        let (mut r, mut c) = head;
        loop {
            let current = if (r, c) == (row, col) {
                sum += value * bonus.letter_multiplier();
                letter
            } else {
                match self.board.get(r, c) {
                    Some(tile) => {
                        sum += self.ruleset.points(tile);
                        tile
                    }
                    None => break,
                }
            };
            node = node.and_then(|node| self.index.child(node, current));
            len += 1;
            r += dr;
            c += dc;
        }
        if len < 2 {
            return Cross::Absent;
        }
        match node {
            Some(node) if self.index.is_terminal(node) => Cross::Valid {
                score: sum * bonus.word_multiplier(),
                head,
                len,
            },
            _ => Cross::Invalid,
        }
    }

    fn spell(
        &self,
        head: (usize, usize),
        len: usize,
        cross: Direction,
        square: (usize, usize),
        letter: Letter,
    ) -> String {
        let (dr, dc) = cross.delta();
        (0..len)
            .map(|i| {
                let at = (head.0 + i * dr, head.1 + i * dc);
                if at == square {
                    letter.to_char()
                } else {
                    self.board.get(at.0, at.1).map_or('.', Letter::to_char)
                }
            })
            .collect()
    }
}
