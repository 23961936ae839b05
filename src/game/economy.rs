#![allow(dead_code)]
//! Game session: currency, action costs and single-step undo
//!
//! Every command validates fully before touching state, so a rejected
//! command leaves the board, shop, balance and undo record exactly as
//! they were.

use super::board::{Board, MAX_LEVEL};
use super::catalog::Letter;
use super::dictionary::Dictionary;
use super::evaluator::{evaluate, Evaluation};
use super::sampler::RandomSource;
use super::shop::{Shop, ShopGenerator};
use super::SHOP_SIZE;
use thiserror::Error;
use tracing::{debug, info};

/// Cost of placing or levelling up a letter.
pub const PLACEMENT_COST: u32 = 1;

pub const DEFAULT_STARTING_BALANCE: u32 = 50;
pub const DEFAULT_REFRESH_COST: u32 = 3;

/// Per-session economy settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EconomyRules {
    pub starting_balance: u32,
    pub refresh_cost: u32,
}

impl Default for EconomyRules {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            refresh_cost: DEFAULT_REFRESH_COST,
        }
    }
}

/// Why a command was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("shop slot {index} does not exist")]
    InvalidSlot { index: usize },
    #[error("cell ({row}, {col}) is off the board")]
    InvalidCell { row: usize, col: usize },
    #[error("shop slot {index} is empty")]
    EmptySlot { index: usize },
    #[error("cell ({row}, {col}) is already taken")]
    CellOccupied { row: usize, col: usize },
    #[error("cell ({row}, {col}) has no letter to level up")]
    CellEmpty { row: usize, col: usize },
    #[error("{dragged} does not match {on_board}")]
    LetterMismatch { dragged: Letter, on_board: Letter },
    #[error("cell ({row}, {col}) is already at x3")]
    MultiplierCapped { row: usize, col: usize },
    #[error("costs {cost}, balance is {balance}")]
    Unaffordable { cost: u32, balance: u32 },
    #[error("nothing to undo")]
    NothingToUndo,
}

impl Rejection {
    /// Short feedback line for the player.
    pub fn message(&self) -> String {
        match self {
            Rejection::InvalidSlot { .. } | Rejection::EmptySlot { .. } => "NO LETTER".to_string(),
            Rejection::InvalidCell { .. } => "OFF THE BOARD".to_string(),
            Rejection::CellOccupied { .. } => "TAKEN".to_string(),
            Rejection::CellEmpty { .. } => "EMPTY CELL".to_string(),
            Rejection::LetterMismatch { dragged, on_board } => {
                format!("{} IS NOT {}", dragged, on_board)
            }
            Rejection::MultiplierCapped { .. } => "MAXED OUT".to_string(),
            Rejection::Unaffordable { cost, balance } => {
                format!("BROKE (need {}, have {})", cost, balance)
            }
            Rejection::NothingToUndo => "NOTHING TO UNDO".to_string(),
        }
    }

    /// True for contract violations (bad indices) rather than game rules.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Rejection::InvalidSlot { .. } | Rejection::InvalidCell { .. }
        )
    }
}

/// The single most recent reversible action.
///
/// `refilled_from` holds the emptied shop when the move triggered the free
/// refill, so undo can put that shop back instead of the fresh one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoRecord {
    Placement {
        row: usize,
        col: usize,
        slot: usize,
        letter: Letter,
        refilled_from: Option<Shop>,
    },
    LevelUp {
        row: usize,
        col: usize,
        slot: usize,
        letter: Letter,
        previous_level: u8,
        refilled_from: Option<Shop>,
    },
}

impl UndoRecord {
    fn set_refilled_from(&mut self, shop: Shop) {
        match self {
            UndoRecord::Placement { refilled_from, .. }
            | UndoRecord::LevelUp { refilled_from, .. } => *refilled_from = Some(shop),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Ready,
    HasUndo,
}

/// What a board cell looks like after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDelta {
    pub row: usize,
    pub col: usize,
    pub letter: Option<Letter>,
    pub level: u8,
}

/// Result of an accepted placement or level-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub score: u32,
    pub balance: u32,
    pub delta: CellDelta,
    /// The shop ran dry and was refilled for free.
    pub refilled: bool,
}

/// Result of an accepted refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    pub shop: Shop,
    pub balance: u32,
    pub charged: u32,
}

/// Result of an accepted undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoReport {
    pub score: u32,
    pub balance: u32,
    pub delta: CellDelta,
    pub shop: Shop,
}

/// One game: board, shop, balance and the pending undo.
#[derive(Debug)]
pub struct GameSession<D, R> {
    board: Board,
    shop: Shop,
    generator: ShopGenerator<R>,
    dictionary: D,
    rules: EconomyRules,
    balance: u32,
    evaluation: Evaluation,
    undo: Option<UndoRecord>,
}

impl<D: Dictionary, R: RandomSource> GameSession<D, R> {
    /// Start a game with an empty board and a freshly drawn shop.
    pub fn new(rules: EconomyRules, dictionary: D, random: R) -> Self {
        let mut generator = ShopGenerator::new(random);
        let shop = generator.fresh_shop();
        info!(
            balance = rules.starting_balance,
            refresh_cost = rules.refresh_cost,
            shop = %shop.as_string(),
            "new game"
        );

        Self {
            board: Board::new(),
            shop,
            generator,
            dictionary,
            rules,
            balance: rules.starting_balance,
            evaluation: Evaluation::default(),
            undo: None,
        }
    }

    /// Put a shop letter on an empty cell.
    pub fn place_letter_at(
        &mut self,
        slot: usize,
        row: usize,
        col: usize,
    ) -> Result<MoveReport, Rejection> {
        let letter = self.check_move(slot, row, col)?;
        if !self.cell_is_empty(row, col) {
            return Err(Rejection::CellOccupied { row, col });
        }

        self.balance -= PLACEMENT_COST;
        self.shop.take(slot);
        self.board.set_letter(row, col, letter);
        self.undo = Some(UndoRecord::Placement {
            row,
            col,
            slot,
            letter,
            refilled_from: None,
        });
        debug!(%letter, slot, row, col, balance = self.balance, "placed letter");

        Ok(self.finish_move(row, col))
    }

    /// Drop a shop letter onto the same letter already on the board,
    /// raising that cell's multiplier.
    pub fn level_up_at(
        &mut self,
        slot: usize,
        row: usize,
        col: usize,
    ) -> Result<MoveReport, Rejection> {
        let letter = self.check_move(slot, row, col)?;
        let cell = self.board.rows()[row][col];
        let on_board = cell.letter().ok_or(Rejection::CellEmpty { row, col })?;
        if on_board != letter {
            return Err(Rejection::LetterMismatch {
                dragged: letter,
                on_board,
            });
        }
        if cell.level() >= MAX_LEVEL {
            return Err(Rejection::MultiplierCapped { row, col });
        }

        self.balance -= PLACEMENT_COST;
        self.shop.take(slot);
        self.board.raise_level(row, col);
        self.undo = Some(UndoRecord::LevelUp {
            row,
            col,
            slot,
            letter,
            previous_level: cell.level(),
            refilled_from: None,
        });
        debug!(%letter, slot, row, col, balance = self.balance, "levelled up cell");

        Ok(self.finish_move(row, col))
    }

    /// Place on an empty cell, level up an occupied one.
    pub fn drop_letter_at(
        &mut self,
        slot: usize,
        row: usize,
        col: usize,
    ) -> Result<MoveReport, Rejection> {
        match self.board.cell(row, col) {
            Some(cell) if !cell.is_empty() => self.level_up_at(slot, row, col),
            _ => self.place_letter_at(slot, row, col),
        }
    }

    /// Replace every shop letter. Free when the shop is empty, otherwise
    /// costs the refresh price. Clears any pending undo.
    pub fn refresh_shop(&mut self) -> Result<RefreshReport, Rejection> {
        if !self.can_refresh() {
            return Err(Rejection::Unaffordable {
                cost: self.rules.refresh_cost,
                balance: self.balance,
            });
        }

        let charged = if self.shop.is_empty() {
            0
        } else {
            self.rules.refresh_cost
        };
        self.balance -= charged;
        self.shop = self.generator.fresh_shop();
        self.undo = None;
        info!(charged, balance = self.balance, shop = %self.shop.as_string(), "refreshed shop");

        Ok(RefreshReport {
            shop: self.shop.clone(),
            balance: self.balance,
            charged,
        })
    }

    /// Rearrange the shop letters. Free; leaves balance and undo alone.
    /// Does nothing while the shop is unavailable.
    pub fn shuffle_shop(&mut self) -> &Shop {
        if self.can_shuffle() {
            self.generator.shuffle(&mut self.shop);
            debug!(shop = %self.shop.as_string(), "shuffled shop");
        }
        &self.shop
    }

    /// Reverse the most recent placement or level-up.
    pub fn undo_last(&mut self) -> Result<UndoReport, Rejection> {
        let record = self.undo.take().ok_or(Rejection::NothingToUndo)?;

        let (row, col, slot, letter, refilled_from) = match &record {
            UndoRecord::Placement {
                row,
                col,
                slot,
                letter,
                refilled_from,
            } => {
                self.board.clear(*row, *col);
                (*row, *col, *slot, *letter, refilled_from)
            }
            UndoRecord::LevelUp {
                row,
                col,
                slot,
                letter,
                previous_level,
                refilled_from,
            } => {
                self.board.set_level(*row, *col, *previous_level);
                (*row, *col, *slot, *letter, refilled_from)
            }
        };
        if let Some(emptied) = refilled_from {
            self.shop = emptied.clone();
        }
        self.shop.put(slot, letter);
        self.balance += PLACEMENT_COST;
        self.rescore();
        debug!(?record, balance = self.balance, "undid last move");

        Ok(UndoReport {
            score: self.score(),
            balance: self.balance,
            delta: self.delta(row, col),
            shop: self.shop.clone(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn score(&self) -> u32 {
        self.evaluation.total()
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn rules(&self) -> EconomyRules {
        self.rules
    }

    pub fn undo_record(&self) -> Option<&UndoRecord> {
        self.undo.as_ref()
    }

    pub fn state(&self) -> SessionState {
        if self.undo.is_some() {
            SessionState::HasUndo
        } else {
            SessionState::Ready
        }
    }

    /// Refresh is off only when the shop still has letters and the
    /// balance cannot cover it.
    pub fn can_refresh(&self) -> bool {
        self.shop.is_empty() || self.balance >= self.rules.refresh_cost
    }

    pub fn can_shuffle(&self) -> bool {
        !self.is_bankrupt() && !self.shop.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.undo.is_some()
    }

    /// With nothing left to spend, shop letters are inert.
    pub fn is_bankrupt(&self) -> bool {
        self.balance == 0
    }

    /// Shared precondition for placement and level-up: valid indices,
    /// an occupied slot and enough money. Returns the slot's letter.
    fn check_move(&self, slot: usize, row: usize, col: usize) -> Result<Letter, Rejection> {
        if slot >= SHOP_SIZE {
            return Err(Rejection::InvalidSlot { index: slot });
        }
        if !Board::in_bounds(row, col) {
            return Err(Rejection::InvalidCell { row, col });
        }
        let letter = self
            .shop
            .get(slot)
            .ok_or(Rejection::EmptySlot { index: slot })?;
        if self.balance < PLACEMENT_COST {
            return Err(Rejection::Unaffordable {
                cost: PLACEMENT_COST,
                balance: self.balance,
            });
        }
        Ok(letter)
    }

    fn cell_is_empty(&self, row: usize, col: usize) -> bool {
        self.board.cell(row, col).is_some_and(|c| c.is_empty())
    }

    /// Rescore and refill an exhausted shop after a move.
    fn finish_move(&mut self, row: usize, col: usize) -> MoveReport {
        self.rescore();

        let refilled = self.shop.is_empty();
        if refilled {
            let emptied = std::mem::replace(&mut self.shop, self.generator.fresh_shop());
            if let Some(record) = self.undo.as_mut() {
                record.set_refilled_from(emptied);
            }
            info!(shop = %self.shop.as_string(), "shop ran dry, restocked for free");
        }

        MoveReport {
            score: self.score(),
            balance: self.balance,
            delta: self.delta(row, col),
            refilled,
        }
    }

    fn rescore(&mut self) {
        self.evaluation = evaluate(&self.board, &self.dictionary);
    }

    fn delta(&self, row: usize, col: usize) -> CellDelta {
        let cell = self.board.rows()[row][col];
        CellDelta {
            row,
            col,
            letter: cell.letter(),
            level: cell.level(),
        }
    }

    #[cfg(test)]
    pub(crate) fn set_shop(&mut self, letters: &str) {
        let letters: Vec<Letter> = letters.chars().filter_map(Letter::from_char).collect();
        self.shop = Shop::from_letters(&letters);
    }

    #[cfg(test)]
    pub(crate) fn set_balance(&mut self, balance: u32) {
        self.balance = balance;
    }
}
