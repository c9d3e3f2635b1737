use crate::dog::Dog;
use crate::error::TrainingError;
use crate::trick::TrickKind;
use fxhash::FxHashMap;
use tracing::{info, warn};

/// Teaches a fixed curriculum and keeps a register of enrolled dogs.
#[derive(Debug, Default)]
pub struct School {
    curriculum: Vec<TrickKind>,
    enrolled: FxHashMap<i64, Dog>,
}

impl School {
    pub fn new(curriculum: impl IntoIterator<Item = TrickKind>) -> Self {
        Self { curriculum: curriculum.into_iter().collect(), enrolled: FxHashMap::default() }
    }

    /// Builds a school from built-in trick names, keeping their order.
    ///
    /// # Errors
    /// Returns [`TrainingError::UnknownTrick`] for the first name that is not built in.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, TrainingError> {
        let curriculum = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                TrickKind::builtin(name)
                    .ok_or_else(|| TrainingError::UnknownTrick { name: name.to_owned(), context: None })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(curriculum))
    }

    pub fn curriculum(&self) -> &[TrickKind] {
        &self.curriculum
    }

    /// Teaches every curriculum trick in order, raises obedience by one and
    /// enrolls the dog under a fresh handle.
    ///
    /// Teaching the same dog twice enrolls it twice.
    ///
    /// # Errors
    /// Returns [`TrainingError::HandlesExhausted`] when no handle follows the
    /// largest one in use. The dog is left untouched in that case.
    pub fn teach(&mut self, dog: &Dog) -> Result<i64, TrainingError> {
        let handle = next_handle(self.enrolled.keys().copied())?;

        for kind in &self.curriculum {
            dog.learn_trick(kind);
        }
        let obedience = dog.improve_obedience();
        self.enrolled.insert(handle, dog.clone());

        info!(dog = dog.name(), handle, obedience, "dog enrolled");
        Ok(handle)
    }

    /// # Errors
    /// Returns [`TrainingError::NotFound`] when no dog is enrolled under `handle`.
    pub fn get_by_handle(&self, handle: i64) -> Result<Dog, TrainingError> {
        self.enrolled.get(&handle).cloned().ok_or_else(|| {
            warn!(handle, "no dog enrolled under handle");
            TrainingError::NotFound { handle, context: None }
        })
    }

    /// Enrolled dogs in handle order.
    pub fn students(&self) -> Vec<(i64, Dog)> {
        let mut students: Vec<_> =
            self.enrolled.iter().map(|(&handle, dog)| (handle, dog.clone())).collect();
        students.sort_unstable_by_key(|(handle, _)| *handle);
        students
    }

    pub fn len(&self) -> usize {
        self.enrolled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enrolled.is_empty()
    }
}

/// Next primary key after `keys`: the largest key plus one, or `1` when empty.
///
/// # Errors
/// Returns [`TrainingError::HandlesExhausted`] when the largest key is `i64::MAX`.
pub fn next_handle(keys: impl IntoIterator<Item = i64>) -> Result<i64, TrainingError> {
    let last = keys.into_iter().max().unwrap_or(0);
    last.checked_add(1).ok_or(TrainingError::HandlesExhausted { last, context: None })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_handle_starts_at_one() {
        assert_eq!(next_handle(std::iter::empty()).ok(), Some(1));
    }

    #[test]
    fn next_handle_follows_the_largest_key() {
        assert_eq!(next_handle([99, 1, -5]).ok(), Some(100));
    }

    #[test]
    fn next_handle_with_only_negative_keys() {
        assert_eq!(next_handle([-5, -9]).ok(), Some(-4));
    }

    #[test]
    fn next_handle_refuses_to_wrap_past_the_largest_key() {
        let err = next_handle([7, i64::MAX]).expect_err("no handle after i64::MAX");
        assert!(matches!(err, TrainingError::HandlesExhausted { last: i64::MAX, .. }));
        assert_eq!(err.to_string(), format!("No handle left after number {}", i64::MAX));

        assert_eq!(next_handle([i64::MAX - 1]).ok(), Some(i64::MAX));
    }

    #[test]
    fn unknown_curriculum_name_is_rejected() {
        let err = School::from_names(&["fake_dead", "roll_over"]).expect_err("unknown trick");
        assert_eq!(err.to_string(), "Unknown trick 'roll_over'");
    }

    #[test]
    fn curriculum_keeps_its_order() {
        let school = School::from_names(&["shake_hand", "fake_dead"]).expect("built-ins");
        let names: Vec<_> = school.curriculum().iter().map(TrickKind::name).collect();
        assert_eq!(names, vec!["shake_hand", "fake_dead"]);
    }
}
