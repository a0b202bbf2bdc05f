// Copyright (c) 2026 rezky_nightky

//! Falling binary glyphs that gather into a heart, then a caption flickers in.
//!
//! The animation core ([`shape`], [`particle`], [`field`], [`caption`]) draws
//! through the [`canvas::Canvas`] trait and knows nothing about terminals.
//! [`viewport`] and [`terminal`] put it on screen.

pub mod app;
pub mod canvas;
pub mod caption;
pub mod cell;
pub mod clock;
pub mod config;
pub mod error;
pub mod field;
pub mod frame;
pub mod logging;
pub mod palette;
pub mod particle;
pub mod runtime;
pub mod shape;
pub mod terminal;
pub mod viewport;
