use anyhow::Result;
use kennel_kernel::domain::config::KennelConfig;
use kennel_kernel::domain::constants::{FAKE_DEAD, SHAKE_HAND};
use kennel_training::{
    Dog, FakeDead, OutputSink, RollSource, School, SeededRoll, StdoutSink, ThreadRoll, TrickArgs,
};
use std::sync::Arc;
use tracing::info;

fn new_dog(config: &KennelConfig, name: &str, obedience: Option<u8>) -> Dog {
    let roll: Arc<dyn RollSource> = match config.dog.seed {
        Some(seed) => Arc::new(SeededRoll::new(seed)),
        None => Arc::new(ThreadRoll),
    };
    Dog::builder(name)
        .obedience(obedience.unwrap_or(config.dog.obedience))
        .sink(StdoutSink)
        .shared_roll(roll)
        .build()
}

/// A dog learns one trick by itself, goes to school, then shows off everything it knows.
pub(crate) fn demo(config: &KennelConfig, name: &str) -> Result<()> {
    let none = TrickArgs::new();
    let dog = new_dog(config, name, None);
    info!(dog = %dog, obedience = dog.obedience(), "demo started");

    dog.talk();
    dog.perform_trick(FAKE_DEAD, &none);
    dog.learn::<FakeDead>();
    dog.perform_trick(FAKE_DEAD, &none);
    dog.perform_trick(SHAKE_HAND, &none);

    let mut school = School::from_names(&config.school.curriculum)?;
    let handle = school.teach(&dog)?;
    dog.perform_trick(SHAKE_HAND, &none);

    for trick in dog.trick_names() {
        dog.perform_trick(&trick, &none);
    }

    let student = school.get_by_handle(handle)?;
    dog.say(&format!("{student} is enrolled as number {handle}"));
    Ok(())
}

pub(crate) fn perform(
    config: &KennelConfig,
    name: &str,
    obedience: Option<u8>,
    trick: &str,
    args: Vec<(String, String)>,
) -> Result<()> {
    let dog = new_dog(config, name, obedience);
    let mut school = School::from_names(&config.school.curriculum)?;
    school.teach(&dog)?;

    dog.perform_trick(trick, &args.into_iter().collect());
    Ok(())
}

pub(crate) fn curriculum(config: &KennelConfig) -> Result<()> {
    let school = School::from_names(&config.school.curriculum)?;
    for kind in school.curriculum() {
        StdoutSink.emit(kind.name());
    }
    Ok(())
}
