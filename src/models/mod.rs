
//! Message definitions shared across the pipeline: filter keys and
//! requests, the wire-facing `MatchSum`, the per-play `MatchQuotient`
//! and the derived `MatchAggregate` report.

mod aggregate;
mod filters;
mod quotient;
mod sum;

pub use aggregate::*;
pub use filters::*;
pub use quotient::*;
pub use sum::*;

pub(crate) use quotient::ratio;
