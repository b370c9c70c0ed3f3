use serde::{Deserialize, Serialize};

/// A person owing us money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtRecord {
    pub name: String,
    pub amount: f64,
}

impl DebtRecord {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn coordinates(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// One row of a grid listing: cell indices plus the computed center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellCenter {
    pub column: usize,
    pub row: usize,
    pub x: f64,
    pub y: f64,
}

/// One row of a payday listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtorLine {
    pub name: String,
    pub amount: f64,
    pub high_debt: bool,
}
