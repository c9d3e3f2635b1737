//! Tricks a dog can learn.
//!
//! A trick is bound to one dog at learn time and speaks through that dog's
//! sink. It keeps only a [`DogRef`] to its owner: the dog's trick map owns the
//! trick, never the other way round. New tricks implement [`LearnableTrick`]
//! and become teachable through [`TrickKind::of`] without touching
//! [`Dog`](crate::Dog) or [`School`](crate::School).

use crate::dog::DogRef;
use crate::error::TrainingError;
use kennel_domain::constants::{CATCH_STICK, FAKE_DEAD, SHAKE_HAND, TALK};
use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Stick fetched by `catch_stick` when none is named.
pub const DEFAULT_STICK: &str = "some stick";

/// Keyword-style arguments passed to a trick. Unknown keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrickArgs(BTreeMap<String, String>);

impl TrickArgs {
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Splits `key=value` at the first `=`.
    ///
    /// # Errors
    /// Returns [`TrainingError::InvalidArgument`] when there is no `=` or the key is blank.
    pub fn parse_pair(raw: &str) -> Result<(String, String), TrainingError> {
        match raw.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_owned(), value.to_owned()))
            },
            _ => Err(TrainingError::InvalidArgument { raw: raw.to_owned(), context: None }),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TrickArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Capability shared by every trick.
pub trait Trick: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Performs the trick unconditionally; obedience is checked by the caller.
    fn perform(&self, args: &TrickArgs);
}

/// A trick type that can be bound to a dog.
pub trait LearnableTrick: Trick + Sized + 'static {
    const NAME: &'static str;

    fn bind(owner: DogRef) -> Self;
}

/// Descriptor of a trick type, used to teach it to any number of dogs.
#[derive(Clone, Copy)]
pub struct TrickKind {
    name: &'static str,
    bind: fn(DogRef) -> Arc<dyn Trick>,
}

impl TrickKind {
    pub const fn of<T: LearnableTrick>() -> Self {
        Self { name: T::NAME, bind: bind_erased::<T> }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Creates a trick instance owned by the caller and bound to `owner`.
    pub fn bind(&self, owner: DogRef) -> Arc<dyn Trick> {
        (self.bind)(owner)
    }

    /// Every trick shipped with this crate.
    pub const fn builtins() -> [Self; 4] {
        [Self::of::<Talk>(), Self::of::<FakeDead>(), Self::of::<CatchStick>(), Self::of::<ShakeHand>()]
    }

    /// Looks up a built-in trick by name.
    pub fn builtin(name: &str) -> Option<Self> {
        Self::builtins().into_iter().find(|kind| kind.name == name)
    }
}

impl Debug for TrickKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TrickKind").field(&self.name).finish()
    }
}

impl PartialEq for TrickKind {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TrickKind {}

fn bind_erased<T: LearnableTrick>(owner: DogRef) -> Arc<dyn Trick> {
    Arc::new(T::bind(owner))
}

/// Runs `speak` against the owner if it is still alive.
fn with_owner(owner: &DogRef, trick: &'static str, speak: impl FnOnce(&crate::Dog)) {
    match owner.upgrade() {
        Some(dog) => speak(&dog),
        None => tracing::debug!(trick, "owner dropped before the trick ran"),
    }
}

/// The built-in bark every dog starts with.
#[derive(Debug, Clone)]
pub struct Talk {
    owner: DogRef,
}

impl Trick for Talk {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn perform(&self, _args: &TrickArgs) {
        with_owner(&self.owner, Self::NAME, crate::Dog::talk);
    }
}

impl LearnableTrick for Talk {
    const NAME: &'static str = TALK;

    fn bind(owner: DogRef) -> Self {
        Self { owner }
    }
}

#[derive(Debug, Clone)]
pub struct FakeDead {
    owner: DogRef,
}

impl Trick for FakeDead {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn perform(&self, _args: &TrickArgs) {
        with_owner(&self.owner, Self::NAME, |dog| dog.say(&format!("look, {dog} is dead")));
    }
}

impl LearnableTrick for FakeDead {
    const NAME: &'static str = FAKE_DEAD;

    fn bind(owner: DogRef) -> Self {
        Self { owner }
    }
}

/// Fetches the stick named by the `stick` argument.
#[derive(Debug, Clone)]
pub struct CatchStick {
    owner: DogRef,
}

impl Trick for CatchStick {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn perform(&self, args: &TrickArgs) {
        let stick = args.get("stick").unwrap_or(DEFAULT_STICK);
        with_owner(&self.owner, Self::NAME, |dog| dog.say(&format!("look, {dog} caught {stick}")));
    }
}

impl LearnableTrick for CatchStick {
    const NAME: &'static str = CATCH_STICK;

    fn bind(owner: DogRef) -> Self {
        Self { owner }
    }
}

#[derive(Debug, Clone)]
pub struct ShakeHand {
    owner: DogRef,
}

impl Trick for ShakeHand {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn perform(&self, _args: &TrickArgs) {
        with_owner(&self.owner, Self::NAME, |dog| {
            dog.say(&format!("look, {dog} has extended a paw"));
        });
    }
}

impl LearnableTrick for ShakeHand {
    const NAME: &'static str = SHAKE_HAND;

    fn bind(owner: DogRef) -> Self {
        Self { owner }
    }
}
