//! Menu choices for the two interactive sessions.
//!
//! # Invariants
//! - Choice `0` always exits without saving.
//! - Parsing never mutates anything; a rejected choice just re-prompts.

use crate::model::member::Section;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected menu input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    NotANumber,
    OutOfRange { max: i64 },
}

impl Display for MenuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber => write!(f, "Invalid input. Please enter a number."),
            Self::OutOfRange { max } => write!(f, "Invalid choice. Please select 0-{max}."),
        }
    }
}

impl Error for MenuError {}

/// A menu whose entries are numbered `1..=MAX` plus a trailing `0`.
pub trait MenuAction: Sized + Copy {
    /// Highest valid choice.
    const MAX: i64;
    /// Menu lines in display order.
    const LINES: &'static [&'static str];

    fn from_number(choice: i64) -> Option<Self>;

    /// Parses one line of menu input.
    fn parse(input: &str) -> Result<Self, MenuError> {
        let choice = input
            .trim()
            .parse::<i64>()
            .map_err(|_| MenuError::NotANumber)?;
        Self::from_number(choice).ok_or(MenuError::OutOfRange { max: Self::MAX })
    }
}

/// News session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsAction {
    AddItem,
    EditItem,
    RemoveItem,
    ViewItems,
    AddCategory,
    PrintData,
    SaveAndExit,
    ExitWithoutSaving,
}

impl MenuAction for NewsAction {
    const MAX: i64 = 7;
    const LINES: &'static [&'static str] = &[
        "1. Add news item",
        "2. Edit news item",
        "3. Remove news item",
        "4. View all news items",
        "5. Add category",
        "6. View current data",
        "7. Save and exit",
        "0. Exit without saving",
    ];

    fn from_number(choice: i64) -> Option<Self> {
        Some(match choice {
            1 => Self::AddItem,
            2 => Self::EditItem,
            3 => Self::RemoveItem,
            4 => Self::ViewItems,
            5 => Self::AddCategory,
            6 => Self::PrintData,
            7 => Self::SaveAndExit,
            0 => Self::ExitWithoutSaving,
            _ => return None,
        })
    }
}

/// Member session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberAction {
    Add(Section),
    Edit(Section),
    Remove(Section),
    Move,
    PrintData,
    SaveAndExit,
    ExitWithoutSaving,
}

impl MenuAction for MemberAction {
    const MAX: i64 = 9;
    const LINES: &'static [&'static str] = &[
        "1. Add current member",
        "2. Add alumni member",
        "3. Edit current member",
        "4. Edit alumni member",
        "5. Remove current member",
        "6. Remove alumni member",
        "7. Move member between sections",
        "8. View current data",
        "9. Save and exit",
        "0. Exit without saving",
    ];

    fn from_number(choice: i64) -> Option<Self> {
        Some(match choice {
            1 => Self::Add(Section::Current),
            2 => Self::Add(Section::Alumni),
            3 => Self::Edit(Section::Current),
            4 => Self::Edit(Section::Alumni),
            5 => Self::Remove(Section::Current),
            6 => Self::Remove(Section::Alumni),
            7 => Self::Move,
            8 => Self::PrintData,
            9 => Self::SaveAndExit,
            0 => Self::ExitWithoutSaving,
            _ => return None,
        })
    }
}
