use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BudgetError;

/// Display currencies. The code only changes how amounts are printed.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    INR,
    NGN,
    CAD,
    AUD,
    BRL,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 9] = [
        Self::USD,
        Self::EUR,
        Self::GBP,
        Self::JPY,
        Self::INR,
        Self::NGN,
        Self::CAD,
        Self::AUD,
        Self::BRL,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::JPY => "JPY",
            Self::INR => "INR",
            Self::NGN => "NGN",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
            Self::BRL => "BRL",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::JPY => "¥",
            Self::INR => "₹",
            Self::NGN => "₦",
            Self::CAD => "CA$",
            Self::AUD => "A$",
            Self::BRL => "R$",
        }
    }

    pub fn decimals(&self) -> usize {
        match self {
            Self::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .find(|c| c.code().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| BudgetError::UnknownCurrency(wanted.to_string()))
    }
}

/// Format an amount with the currency symbol and thousands separators: $1,234.56
pub fn money(val: f64, currency: CurrencyCode) -> String {
    let negative = val < 0.0;
    let rounded = format!("{:.*}", currency.decimals(), val.abs());
    let (int_part, dec_part) = match rounded.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (rounded.as_str(), None),
    };

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    let sign = if negative && rounded.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    let symbol = currency.symbol();
    match dec_part {
        Some(dec) => format!("{sign}{symbol}{with_commas}.{dec}"),
        None => format!("{sign}{symbol}{with_commas}"),
    }
}
