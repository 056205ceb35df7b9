//! # Value Normalizer
//!
//! The backend serializes the same logical field three different ways
//! depending on which service produced it: numbers arrive as JSON numbers,
//! numeric strings, or `{ "d": [...] }` decimal wrappers; dates arrive as
//! ISO strings or nested `{ date | start | end | value }` range objects.
//! Everything in this crate folds those encodings into one canonical form.
//!
//! Every function here is total: malformed input degrades to the caller's
//! fallback (numbers) or to absence (dates), never to an error.

mod date;
mod number;

pub use crate::date::normalize_date;
pub use crate::number::{normalize_number, normalize_string, normalize_u64};
