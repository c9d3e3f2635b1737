use crate::roll::{RollSource, ThreadRoll, success_or_fail};
use crate::sink::{OutputSink, StdoutSink};
use crate::trick::{LearnableTrick, Talk, Trick, TrickArgs, TrickKind};
use fxhash::FxHashMap;
use kennel_domain::constants::MAX_OBEDIENCE;
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::debug;

/// A dog that knows a set of tricks and obeys with probability `obedience / 5`.
///
/// `Dog` is a cheap handle: clones refer to the same animal, and equality is
/// identity. Every dog knows [`Talk`] from birth.
///
/// ```rust
/// use kennel_training::{CaptureSink, Dog, FakeDead, FixedRoll, TrickArgs, TrickKind};
///
/// let out = CaptureSink::new();
/// let dog = Dog::builder("Rex").obedience(5).sink(out.clone()).roll(FixedRoll::ALWAYS).build();
///
/// dog.learn_trick(&TrickKind::of::<FakeDead>());
/// dog.perform_trick("fake_dead", &TrickArgs::new());
/// assert_eq!(out.last().as_deref(), Some("look, <Rex, the dog> is dead"));
/// ```
#[derive(Clone)]
pub struct Dog {
    inner: Arc<DogInner>,
}

struct DogInner {
    name: String,
    sink: Arc<dyn OutputSink>,
    roll: Arc<dyn RollSource>,
    state: RwLock<DogState>,
}

struct DogState {
    obedience: u8,
    tricks: FxHashMap<String, Arc<dyn Trick>>,
}

/// Non-owning back-reference from a trick to the dog that learned it.
#[derive(Clone, Default)]
pub struct DogRef {
    inner: Weak<DogInner>,
}

impl DogRef {
    /// Returns the dog if it is still alive.
    pub fn upgrade(&self) -> Option<Dog> {
        self.inner.upgrade().map(|inner| Dog { inner })
    }
}

impl fmt::Debug for DogRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.upgrade() {
            Some(inner) => write!(f, "DogRef({})", inner.name),
            None => f.write_str("DogRef(<dropped>)"),
        }
    }
}

impl Dog {
    /// Creates a dog with the thread RNG as its roll source.
    ///
    /// `obedience` is clamped into `0..=5`.
    pub fn new(name: impl Into<String>, obedience: u8, sink: impl OutputSink + 'static) -> Self {
        Self::builder(name).obedience(obedience).sink(sink).build()
    }

    pub fn builder(name: impl Into<String>) -> DogBuilder {
        DogBuilder {
            name: name.into(),
            obedience: 0,
            sink: Arc::new(StdoutSink),
            roll: Arc::new(ThreadRoll),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn obedience(&self) -> u8 {
        self.inner.state.read().obedience
    }

    /// Raises obedience by one, never beyond 5. Returns the new level.
    pub fn improve_obedience(&self) -> u8 {
        let mut state = self.inner.state.write();
        state.obedience = state.obedience.saturating_add(1).min(MAX_OBEDIENCE);
        state.obedience
    }

    /// Sends one line through this dog's output sink.
    pub fn say(&self, line: &str) {
        self.inner.sink.emit(line);
    }

    /// Barks. Always works, whatever the obedience level.
    pub fn talk(&self) {
        self.say("woof woof");
    }

    pub fn knows(&self, trick: &str) -> bool {
        self.inner.state.read().tricks.contains_key(trick)
    }

    /// Names of every known trick, sorted.
    pub fn trick_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.state.read().tricks.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Binds a new instance of `kind` to this dog, replacing any trick with the same name.
    pub fn learn_trick(&self, kind: &TrickKind) {
        let trick = kind.bind(self.downgrade());
        debug!(dog = %self.inner.name, trick = trick.name(), "learned trick");
        self.inner.state.write().tricks.insert(trick.name().to_owned(), trick);
    }

    /// Typed shorthand for [`Dog::learn_trick`].
    pub fn learn<T: LearnableTrick>(&self) {
        self.learn_trick(&TrickKind::of::<T>());
    }

    /// Performs a known trick if the obedience roll succeeds.
    ///
    /// Unknown tricks and failed rolls are reported through the sink; neither
    /// changes the dog.
    pub fn perform_trick(&self, name: &str, args: &TrickArgs) {
        // Clone out so the lock is released before the trick speaks.
        let trick = self.inner.state.read().tricks.get(name).cloned();
        let Some(trick) = trick else {
            debug!(dog = %self.inner.name, trick = name, "unknown trick");
            self.say(&format!("{self} doesn't know how to {name}"));
            return;
        };

        if self.success_or_fail() {
            trick.perform(args);
        } else {
            debug!(dog = %self.inner.name, trick = name, "refused");
            self.say(&format!("{self} knows how to {name}, I swear. We should try again!"));
        }
    }

    /// Rolls once against the current obedience level.
    pub fn success_or_fail(&self) -> bool {
        success_or_fail(self.inner.roll.as_ref(), self.obedience())
    }

    pub fn downgrade(&self) -> DogRef {
        DogRef { inner: Arc::downgrade(&self.inner) }
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, the dog>", self.inner.name)
    }
}

impl fmt::Debug for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.read();
        let mut tricks: Vec<&str> = state.tricks.keys().map(String::as_str).collect();
        tricks.sort_unstable();
        f.debug_struct("Dog")
            .field("name", &self.inner.name)
            .field("obedience", &state.obedience)
            .field("tricks", &tricks)
            .field("roll", &self.inner.roll)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Dog {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Dog {}

/// Builder for [`Dog`]. Defaults: obedience `0`, [`StdoutSink`], [`ThreadRoll`].
pub struct DogBuilder {
    name: String,
    obedience: u8,
    sink: Arc<dyn OutputSink>,
    roll: Arc<dyn RollSource>,
}

impl DogBuilder {
    /// Starting obedience, clamped into `0..=5`.
    #[must_use]
    pub fn obedience(mut self, level: u8) -> Self {
        self.obedience = level.min(MAX_OBEDIENCE);
        self
    }

    #[must_use]
    pub fn sink(self, sink: impl OutputSink + 'static) -> Self {
        self.shared_sink(Arc::new(sink))
    }

    #[must_use]
    pub fn shared_sink(mut self, sink: Arc<dyn OutputSink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use]
    pub fn roll(self, roll: impl RollSource + 'static) -> Self {
        self.shared_roll(Arc::new(roll))
    }

    #[must_use]
    pub fn shared_roll(mut self, roll: Arc<dyn RollSource>) -> Self {
        self.roll = roll;
        self
    }

    pub fn build(self) -> Dog {
        let inner = Arc::new_cyclic(|weak: &Weak<DogInner>| {
            let talk: Arc<dyn Trick> = Arc::new(Talk::bind(DogRef { inner: weak.clone() }));
            let mut tricks = FxHashMap::default();
            tricks.insert(Talk::NAME.to_owned(), talk);

            DogInner {
                name: self.name,
                sink: self.sink,
                roll: self.roll,
                state: RwLock::new(DogState { obedience: self.obedience, tricks }),
            }
        });
        Dog { inner }
    }
}

impl fmt::Debug for DogBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DogBuilder")
            .field("name", &self.name)
            .field("obedience", &self.obedience)
            .field("roll", &self.roll)
            .finish_non_exhaustive()
    }
}
