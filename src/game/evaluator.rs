#![allow(dead_code)]
//! Board evaluation: run extraction and dictionary-gated scoring
//!
//! Each row is read left to right and each column top to bottom. A run of
//! consecutive letters scores when its lowercase form is a dictionary word;
//! every letter contributes its base score times the multiplier of the cell
//! it sits on. Rows and columns are totalled independently, so a letter
//! shared by an across word and a down word counts in both.

use super::board::Board;
use super::catalog::Letter;
use super::dictionary::Dictionary;
use super::GRID_SIZE;

/// Reading direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Board coordinates of position `pos` along line `line`.
    fn cell(self, line: usize, pos: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (line, pos),
            Direction::Vertical => (pos, line),
        }
    }
}

/// Where a cell sits inside a scoring run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunMark {
    pub first: bool,
    pub last: bool,
}

/// Styling metadata for one cell, per direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellMark {
    pub horizontal: Option<RunMark>,
    pub vertical: Option<RunMark>,
}

impl CellMark {
    /// True when the cell is part of at least one scoring word.
    pub fn in_word(&self) -> bool {
        self.horizontal.is_some() || self.vertical.is_some()
    }
}

/// A run that matched the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub text: String,
    pub direction: Direction,
    /// First cell of the run
    pub start: (usize, usize),
    pub score: u32,
}

/// Result of scanning the whole board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub horizontal: u32,
    pub vertical: u32,
    pub words: Vec<ScoredWord>,
    marks: [[CellMark; GRID_SIZE]; GRID_SIZE],
}

impl Evaluation {
    pub fn total(&self) -> u32 {
        self.horizontal + self.vertical
    }

    pub fn mark(&self, row: usize, col: usize) -> CellMark {
        self.marks
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default()
    }
}

/// Score the board in both directions.
pub fn evaluate<D: Dictionary + ?Sized>(board: &Board, dictionary: &D) -> Evaluation {
    let mut evaluation = Evaluation::default();
    let horizontal = scan_direction(board, dictionary, Direction::Horizontal, &mut evaluation);
    let vertical = scan_direction(board, dictionary, Direction::Vertical, &mut evaluation);
    evaluation.horizontal = horizontal;
    evaluation.vertical = vertical;
    evaluation
}

fn scan_direction<D: Dictionary + ?Sized>(
    board: &Board,
    dictionary: &D,
    direction: Direction,
    evaluation: &mut Evaluation,
) -> u32 {
    let mut total = 0;

    for line in 0..GRID_SIZE {
        let mut run: Vec<Letter> = Vec::new();

        // GRID_SIZE acts as the past-the-end sentinel.
        for pos in 0..=GRID_SIZE {
            let letter = if pos < GRID_SIZE {
                let (row, col) = direction.cell(line, pos);
                board.cell(row, col).and_then(|c| c.letter())
            } else {
                None
            };

            match letter {
                Some(letter) => run.push(letter),
                None => {
                    total += score_run(board, dictionary, direction, line, pos, &run, evaluation);
                    run.clear();
                }
            }
        }
    }

    total
}

/// Score a run ending just before `end`, marking its cells on a hit.
fn score_run<D: Dictionary + ?Sized>(
    board: &Board,
    dictionary: &D,
    direction: Direction,
    line: usize,
    end: usize,
    run: &[Letter],
    evaluation: &mut Evaluation,
) -> u32 {
    if run.is_empty() {
        return 0;
    }

    let text: String = run.iter().map(|l| l.as_char()).collect();
    if !dictionary.is_word(&text.to_ascii_lowercase()) {
        return 0;
    }

    let len = run.len();
    let mut score = 0;

    // Walk backward from the terminal cell.
    for k in 0..len {
        let (row, col) = direction.cell(line, end - 1 - k);
        let multiplier = board.cell(row, col).map_or(1, |c| c.multiplier());
        score += run[len - 1 - k].base_score() * multiplier;

        let mark = RunMark {
            first: k == len - 1,
            last: k == 0,
        };
        let cell_mark = &mut evaluation.marks[row][col];
        match direction {
            Direction::Horizontal => cell_mark.horizontal = Some(mark),
            Direction::Vertical => cell_mark.vertical = Some(mark),
        }
    }

    evaluation.words.push(ScoredWord {
        text,
        direction,
        start: direction.cell(line, end - len),
        score,
    });

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn dictionary(words: &[&'static str]) -> HashSet<&'static str> {
        words.iter().copied().collect()
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let eval = evaluate(&Board::new(), &dictionary(&["a", "cat"]));
        assert_eq!(eval.total(), 0);
        assert!(eval.words.is_empty());
    }

    #[test]
    fn test_horizontal_word_only() {
        let mut board = Board::new();
        board.write_across(3, 0, "CAT");
        let eval = evaluate(&board, &dictionary(&["cat"]));

        assert_eq!(eval.horizontal, 5);
        assert_eq!(eval.vertical, 0);
        assert_eq!(eval.total(), 5);
        assert_eq!(eval.words.len(), 1);
        assert_eq!(eval.words[0].text, "CAT");
        assert_eq!(eval.words[0].start, (3, 0));
        assert_eq!(eval.words[0].direction, Direction::Horizontal);
    }

    #[test]
    fn test_unknown_run_scores_nothing_and_marks_nothing() {
        let mut board = Board::new();
        board.write_across(0, 0, "TAC");
        let eval = evaluate(&board, &dictionary(&["cat"]));
        assert_eq!(eval.total(), 0);
        for col in 0..3 {
            assert!(!eval.mark(0, col).in_word());
        }
    }

    #[test]
    fn test_cross_counts_shared_cell_twice() {
        let mut board = Board::new();
        board.write_across(2, 1, "CAT");
        board.write_down(1, 2, "BAG");
        let eval = evaluate(&board, &dictionary(&["cat", "bag"]));

        // CAT = 3+1+1, BAG = 3+1+2
        assert_eq!(eval.horizontal, 5);
        assert_eq!(eval.vertical, 6);
        assert_eq!(eval.total(), 11);

        let shared = eval.mark(2, 2);
        assert!(shared.horizontal.is_some());
        assert!(shared.vertical.is_some());
    }

    #[test]
    fn test_full_line_is_evaluated_at_end() {
        let mut board = Board::new();
        board.write_across(6, 0, "PLANETS");
        let eval = evaluate(&board, &dictionary(&["planets"]));
        // P3 L1 A1 N1 E1 T1 S1
        assert_eq!(eval.horizontal, 9);
        assert_eq!(eval.words[0].start, (6, 0));
    }

    #[test]
    fn test_runs_split_on_gaps() {
        let mut board = Board::new();
        board.write_across(0, 0, "CAT");
        board.write_across(0, 4, "DOG");
        let eval = evaluate(&board, &dictionary(&["cat", "dog", "catdog"]));
        assert_eq!(eval.words.len(), 2);
        // CAT = 3+1+1, DOG = 2+1+2
        assert_eq!(eval.horizontal, 5 + 5);
    }

    #[test]
    fn test_single_letter_runs_depend_on_dictionary() {
        let mut board = Board::new();
        board.write_across(4, 4, "A");

        let without = evaluate(&board, &dictionary(&["cat"]));
        assert_eq!(without.total(), 0);

        // An isolated letter is a run in both directions.
        let with = evaluate(&board, &dictionary(&["a"]));
        assert_eq!(with.horizontal, 1);
        assert_eq!(with.vertical, 1);
        let mark = with.mark(4, 4).horizontal.unwrap();
        assert!(mark.first && mark.last);
    }

    #[test]
    fn test_multiplier_strictly_increases_score() {
        let dict = dictionary(&["cat"]);
        let mut board = Board::new();
        board.write_across(3, 0, "CAT");

        let mut previous = evaluate(&board, &dict).total();
        for _ in 0..2 {
            board.raise_level(3, 0);
            let current = evaluate(&board, &dict).total();
            assert!(current > previous);
            previous = current;
        }
        // C at x3
        assert_eq!(previous, 9 + 1 + 1);
    }

    #[test]
    fn test_multiplier_belongs_to_position() {
        let dict = dictionary(&["cat"]);
        let mut board = Board::new();
        board.write_across(3, 0, "CAT");
        board.raise_level(3, 1);
        assert_eq!(evaluate(&board, &dict).total(), 3 + 2 + 1);
    }

    #[test]
    fn test_first_and_last_marks() {
        let mut board = Board::new();
        board.write_down(0, 5, "DOG");
        let eval = evaluate(&board, &dictionary(&["dog"]));

        let top = eval.mark(0, 5).vertical.unwrap();
        let middle = eval.mark(1, 5).vertical.unwrap();
        let bottom = eval.mark(2, 5).vertical.unwrap();
        assert!(top.first && !top.last);
        assert!(!middle.first && !middle.last);
        assert!(!top.last && bottom.last && !bottom.first);
        assert!(eval.mark(0, 5).horizontal.is_none());
    }
}
