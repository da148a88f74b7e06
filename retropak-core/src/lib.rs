//! # RetroPak Core
//!
//! Core components for the RetroPak codec library.
//!
//! This crate provides the building blocks shared by the codec crates:
//!
//! - [`flagbits`]: Flag-bit stream primitives (literal/match decision bits)
//! - [`window`]: Fixed-size history window for LZSS back-references
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! RetroPak is a small layered stack:
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │ L3: CLI                                          │
//! │     vramwad / lznp binaries, file I/O            │
//! ├──────────────────────────────────────────────────┤
//! │ L2: Container                                    │
//! │     VRAM-WAD and LZNP header parsing/framing     │
//! ├──────────────────────────────────────────────────┤
//! │ L1: Codec                                        │
//! │     VRAM-WAD LZSS encode/decode, LZNP decode     │
//! ├──────────────────────────────────────────────────┤
//! │ L0: Primitives (this crate)                      │
//! │     FlagWriter/FlagReader/FlagRegister, window   │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use retropak_core::window::HistoryWindow;
//!
//! let mut window = HistoryWindow::new(0);
//! window.push(b'A');
//! assert_eq!(window.at(0), b'A');
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod flagbits;
pub mod window;

// Re-exports for convenience
pub use error::{Result, RetroPakError};
pub use flagbits::{FlagReader, FlagRegister, FlagWriter};
pub use window::HistoryWindow;
