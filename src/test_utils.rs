use serde::{Deserialize, Serialize};

use crate::element_constraint;
use alloc::string::String;

pub const RNG_SEED: u64 = 0x5432_1012_3454_3210;

/// A calendar date, ordered chronologically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Date {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Date { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn add_years(&self, years: i32) -> Self {
        Date { year: self.year + years, ..*self }
    }
}

/// A dynamically typed element.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Text(String),
    Date(Date),
}

element_constraint!(pub DatesOnly: Value = |v| matches!(v, Value::Date(_)));
