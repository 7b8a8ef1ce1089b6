//! # u-toolkit
//!
//! Stateless utility functions for game scripting.
//!
//! Every function is an independent transformation from inputs to outputs.
//! Seeded helpers are deterministic for a given seed, and the few pieces
//! that touch a game engine go through small capability traits in
//! [`host`] and [`debug`].
//!
//! ## Modules
//!
//! - [`math`]: primes, powers, factorials, interpolation and rounding
//! - [`special`]: error function and normal distribution
//! - [`numerics`]: Newton root finding, Simpson integration, derivatives
//! - [`finance`]: interest, amortization, NPV/IRR, Black-Scholes
//! - [`complex`], [`vector`], [`geometry`]: small value types and shape formulas
//! - [`paradox`]: birthday, Monty Hall, Benford and Simpson
//! - [`physics`]: toy kinematics and mechanics formulas
//! - [`random`]: `rand`-backed helpers and the portable [`random::SeededRandom`]
//! - [`cipher`]: XOR, substitution, djb2 and Base64 (not secure)
//! - [`collections`], [`strings`]: array, dictionary and text helpers
//! - [`files`], [`time`], [`color`]: I/O, timestamps and colors
//!
//! ## Errors
//!
//! Hard failures return [`UtilError`] through [`Result`]. Recoverable
//! oddities are logged with `tracing` and the computed value is returned.

pub mod cipher;
pub mod collections;
pub mod color;
pub mod complex;
pub mod debug;
pub mod error;
pub mod files;
pub mod finance;
pub mod geometry;
pub mod host;
pub mod math;
pub mod numerics;
pub mod paradox;
pub mod physics;
pub mod random;
pub mod special;
pub mod strings;
pub mod time;
pub mod vector;

pub use error::{Result, UtilError};
