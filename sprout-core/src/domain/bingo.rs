//! Neighborhood bingo board
//!
//! A fixed 3x3 grid of small errands outside the house. Cells toggle
//! freely until the whole grid is filled; the board then locks for good.

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

pub const BINGO_SIZE: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BingoCell {
    pub id: u8,
    pub label: String,
    pub is_completed: bool,
}

/// What a toggle did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BingoToggle {
    /// Cell flipped, board still incomplete
    Toggled { completed: bool },
    /// This toggle filled the last cell. Reported exactly once.
    BoardCompleted,
    /// Board already locked, nothing changed
    Locked,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BingoBoard {
    cells: Vec<BingoCell>,
    locked: bool,
}

impl Default for BingoBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl BingoBoard {
    /// Board seeded with the errands most people already did today
    pub fn new() -> Self {
        let seed = [
            (1, "편의점 가기", true),
            (2, "공원 벤치 앉기", false),
            (3, "나무 사진 찍기", false),
            (4, "도서관 입구", false),
            (5, "카페 테이크아웃", false),
            (6, "동네 한 바퀴", true),
            (7, "문구점 구경", false),
            (8, "하늘 보기", true),
            (9, "인사 건네기", false),
        ];
        Self {
            cells: seed
                .into_iter()
                .map(|(id, label, is_completed)| BingoCell {
                    id,
                    label: label.to_string(),
                    is_completed,
                })
                .collect(),
            locked: false,
        }
    }

    pub fn cells(&self) -> &[BingoCell] {
        &self.cells
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn completed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_completed).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_completed)
    }

    pub fn progress_percent(&self) -> f64 {
        self.completed_count() as f64 / self.cells.len() as f64 * 100.0
    }

    pub fn toggle(&mut self, id: u8) -> Result<BingoToggle> {
        if self.locked {
            return Ok(BingoToggle::Locked);
        }

        let cell = self
            .cells
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::not_found(format!("bingo cell {}", id)))?;
        cell.is_completed = !cell.is_completed;
        let completed = cell.is_completed;

        if self.is_full() {
            self.locked = true;
            return Ok(BingoToggle::BoardCompleted);
        }

        Ok(BingoToggle::Toggled { completed })
    }
}
