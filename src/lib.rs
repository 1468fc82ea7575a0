//! Rift Tutor - an interactive tutor for modal editing motions

pub mod action;
pub mod app;
pub mod buffer;
pub mod challenge;
pub mod command;
pub mod command_line;
pub mod constants;
pub mod course;
pub mod error;
pub mod executor;
pub mod key;
pub mod keymap;
pub mod mode;
pub mod notification;
pub mod render;
pub mod session;
pub mod state;
pub mod term;

#[cfg(test)]
pub mod test_utils;
