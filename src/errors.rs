use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        available: Money,
        requested: Money,
    },

    #[error("invalid amount: {amount}")]
    InvalidAmount {
        amount: Decimal,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("invalid command: {message}")]
    InvalidCommand {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
