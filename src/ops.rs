//! Set algebra over date sequences.
//!
//! Inputs may hold duplicates and come in any order; outputs are always
//! ascending without duplicates. The operators on [`DateSet`] are thin
//! bindings over these functions and over [`DateSet::shift`].

use std::collections::BTreeSet;
use std::ops::{Add, BitAnd, BitOr, BitXor, Sub};

use chrono::{NaiveDate, TimeDelta};

use crate::date_set::DateSet;
use crate::error::Result;

fn to_set(dates: &[NaiveDate]) -> BTreeSet<NaiveDate> {
    dates.iter().copied().collect()
}

pub fn difference(left: &[NaiveDate], right: &[NaiveDate]) -> Vec<NaiveDate> {
    to_set(left).difference(&to_set(right)).copied().collect()
}

pub fn union(left: &[NaiveDate], right: &[NaiveDate]) -> Vec<NaiveDate> {
    to_set(left).union(&to_set(right)).copied().collect()
}

pub fn intersection(left: &[NaiveDate], right: &[NaiveDate]) -> Vec<NaiveDate> {
    to_set(left).intersection(&to_set(right)).copied().collect()
}

pub fn symmetric_difference(left: &[NaiveDate], right: &[NaiveDate]) -> Vec<NaiveDate> {
    to_set(left)
        .symmetric_difference(&to_set(right))
        .copied()
        .collect()
}

macro_rules! impl_set_operator {
    ($trait:ident, $method:ident, $function:ident) => {
        impl<'a> $trait<&'a DateSet> for &DateSet {
            type Output = Vec<NaiveDate>;

            fn $method(self, rhs: &'a DateSet) -> Self::Output {
                $function(self.dates(), rhs.dates())
            }
        }

        impl<'a> $trait<&'a [NaiveDate]> for &DateSet {
            type Output = Vec<NaiveDate>;

            fn $method(self, rhs: &'a [NaiveDate]) -> Self::Output {
                $function(self.dates(), rhs)
            }
        }

        impl<'a> $trait<&'a DateSet> for &[NaiveDate] {
            type Output = Vec<NaiveDate>;

            fn $method(self, rhs: &'a DateSet) -> Self::Output {
                $function(self, rhs.dates())
            }
        }
    };
}

impl_set_operator!(Sub, sub, difference);
impl_set_operator!(BitOr, bitor, union);
impl_set_operator!(BitAnd, bitand, intersection);
impl_set_operator!(BitXor, bitxor, symmetric_difference);

impl Add<i64> for &DateSet {
    type Output = Result<Vec<NaiveDate>>;

    fn add(self, days: i64) -> Self::Output {
        self.shift(days)
    }
}

impl<'a> Add<&'a DateSet> for i64 {
    type Output = Result<Vec<NaiveDate>>;

    fn add(self, set: &'a DateSet) -> Self::Output {
        set.shift(self)
    }
}

impl Add<TimeDelta> for &DateSet {
    type Output = Result<Vec<NaiveDate>>;

    fn add(self, delta: TimeDelta) -> Self::Output {
        self.shift_by(delta)
    }
}

impl<'a> Add<&'a DateSet> for TimeDelta {
    type Output = Result<Vec<NaiveDate>>;

    fn add(self, set: &'a DateSet) -> Self::Output {
        set.shift_by(self)
    }
}

impl Sub<TimeDelta> for &DateSet {
    type Output = Result<Vec<NaiveDate>>;

    fn sub(self, delta: TimeDelta) -> Self::Output {
        self.shift_by(-delta)
    }
}
