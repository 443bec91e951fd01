// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropdown Options: the selection zipper behind a dropdown widget.
//!
//! A dropdown always has exactly one selected option. This crate models the option list
//! as a zipper, an immutable cursor that splits the ordered list into
//! `left` (options before the selection), `value` (the selection) and `right`
//! (options after it):
//!
//! - [`SelectOption`]: a single entry with an optional value, a label, a disabled flag,
//!   and an optional class name for renderers.
//! - [`Options`]: the zipper. It is never empty; `left ++ [value] ++ right` is always the
//!   full ordered list.
//!
//! Movement is expressed as pure transformations that consume a zipper and return a new
//! one. Raw steps ([`Options::select_prev`], [`Options::select_next`]) fail at the list
//! boundary and hand the zipper back unchanged. The disabled-aware steps
//! ([`Options::maybe_select_prev`], [`Options::maybe_select_next`]) skip runs of disabled
//! options and fall back to the original zipper when no enabled option exists in the
//! requested direction, so a disabled option is never selected by navigation.
//!
//! ## Minimal example
//!
//! ```rust
//! use dropdown_options::{Options, SelectOption};
//!
//! let options: Options<u32> = Options::from_vec_first(vec![
//!     SelectOption::new(1_u32, "One"),
//!     SelectOption::new(2_u32, "Two").with_disabled(true),
//!     SelectOption::new(3_u32, "Three"),
//! ])
//! .unwrap();
//!
//! // Arrow down skips the disabled entry…
//! let options = options.maybe_select_next();
//! assert_eq!(options.value().value, Some(3));
//!
//! // …and at the end of the list nothing moves.
//! let options = options.maybe_select_next();
//! assert_eq!(options.selected_index(), 2);
//! ```
//!
//! The generic `V` is the option's identity (compared with `PartialEq` when options are
//! re-located), and `L` is whatever the host renders as a label. [`StrOption`] and
//! [`StrOptions`] cover the common string-valued case.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod option;
mod zipper;

pub use error::OptionsError;
pub use option::{SelectOption, StrOption};
pub use zipper::{Options, StrOptions};
