//! # Boggle
//!
//! A word-search puzzle engine. A grid of letters is rolled from dice; a word
//! is any dictionary entry of at least three letters that can be spelled by
//! stepping between king-adjacent cells without reusing one. The engine can
//! [generate](generator) grids that hold enough words, [find](solver) every
//! word on a grid, and [track](selection) a player's path as it is dragged
//! across the grid, [scoring](scoring) the words the player [submits](round).

pub mod config;
pub mod dice;
pub mod dictionary;
pub mod generator;
pub mod grid;
pub mod highscores;
pub mod round;
pub mod scoring;
pub mod selection;
pub mod solver;
