//! # Training
//!
//! Dogs, the tricks they learn and the schools that teach them.
//!
//! * A [`Dog`] starts out knowing [`Talk`] and learns further tricks at runtime
//!   through [`Dog::learn_trick`].
//! * [`Dog::perform_trick`] looks the trick up and rolls against the dog's
//!   obedience before running it. Misses and refusals are spoken through the
//!   dog's [`OutputSink`], never returned as errors.
//! * A [`School`] teaches its curriculum, raises obedience by one (up to 5) and
//!   enrolls the dog under a numeric handle.
//!
//! ```rust
//! use kennel_training::{CaptureSink, CatchStick, Dog, FakeDead, FixedRoll, School, TrickArgs, TrickKind};
//!
//! let out = CaptureSink::new();
//! let dog = Dog::builder("Rex").obedience(4).sink(out.clone()).roll(FixedRoll(0.3)).build();
//!
//! let mut school = School::new([TrickKind::of::<FakeDead>(), TrickKind::of::<CatchStick>()]);
//! let handle = school.teach(&dog)?;
//! assert_eq!(handle, 1);
//! assert_eq!(dog.obedience(), 5);
//!
//! dog.perform_trick("catch_stick", &TrickArgs::new().with("stick", "a beautiful stick"));
//! assert_eq!(out.last().as_deref(), Some("look, <Rex, the dog> caught a beautiful stick"));
//! # Ok::<(), kennel_training::TrainingError>(())
//! ```

mod dog;
mod error;
pub mod roll;
mod school;
pub mod sink;
pub mod trick;

pub use crate::dog::{Dog, DogBuilder, DogRef};
pub use crate::error::{TrainingError, TrainingErrorExt};
pub use crate::roll::{FixedRoll, RollSource, SeededRoll, ThreadRoll, success_or_fail};
pub use crate::school::{School, next_handle};
pub use crate::sink::{CaptureSink, OutputSink, StdoutSink, TracingSink};
pub use crate::trick::{
    CatchStick, FakeDead, LearnableTrick, ShakeHand, Talk, Trick, TrickArgs, TrickKind,
};
