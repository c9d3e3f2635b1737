use kennel_training::{
    CaptureSink, CatchStick, Dog, FakeDead, FixedRoll, LearnableTrick, ShakeHand, Trick,
    TrickArgs, TrickKind,
};

fn setup(roll: FixedRoll) -> (Dog, CaptureSink) {
    let out = CaptureSink::new();
    let dog = Dog::builder("Rex").obedience(5).sink(out.clone()).roll(roll).build();
    (dog, out)
}

#[test]
fn talk() {
    let (dog, out) = setup(FixedRoll::NEVER);
    dog.talk();
    assert_eq!(out.lines(), vec!["woof woof"]);
}

#[test]
fn perform_existing_trick() {
    let (dog, out) = setup(FixedRoll::ALWAYS);
    dog.perform_trick("talk", &TrickArgs::new());
    assert_eq!(out.lines(), vec!["woof woof"]);
}

#[test]
fn perform_not_existing_trick() {
    let (dog, out) = setup(FixedRoll::ALWAYS);
    dog.perform_trick("fake_dead", &TrickArgs::new());
    assert_eq!(out.lines(), vec![format!("{dog} doesn't know how to fake_dead")]);
}

#[test]
fn learn_trick() {
    let (dog, out) = setup(FixedRoll::ALWAYS);
    dog.learn_trick(&TrickKind::of::<FakeDead>());
    dog.perform_trick(FakeDead::NAME, &TrickArgs::new());
    assert_eq!(out.lines(), vec![format!("look, {dog} is dead")]);
}

#[test]
fn catch_stick_uses_the_named_stick() {
    let (dog, out) = setup(FixedRoll::ALWAYS);
    dog.learn::<CatchStick>();

    dog.perform_trick(CatchStick::NAME, &TrickArgs::new().with("stick", "a beautiful stick"));
    assert_eq!(out.take(), vec!["look, <Rex, the dog> caught a beautiful stick"]);

    dog.perform_trick(CatchStick::NAME, &TrickArgs::new());
    assert_eq!(out.take(), vec!["look, <Rex, the dog> caught some stick"]);
}

#[test]
fn shake_hand_ignores_unknown_arguments() {
    let (dog, out) = setup(FixedRoll::ALWAYS);
    dog.learn::<ShakeHand>();
    dog.perform_trick(ShakeHand::NAME, &TrickArgs::new().with("paw", "left"));
    assert_eq!(out.lines(), vec!["look, <Rex, the dog> has extended a paw"]);
}

#[test]
fn refusal_is_reported() {
    let (dog, out) = setup(FixedRoll::NEVER);
    dog.learn::<FakeDead>();
    dog.perform_trick(FakeDead::NAME, &TrickArgs::new());
    assert_eq!(out.lines(), vec!["<Rex, the dog> knows how to fake_dead, I swear. We should try again!"]);
}

#[test]
fn closure_sinks_receive_output() {
    let (tx, rx) = std::sync::mpsc::channel::<String>();
    let tx = std::sync::Mutex::new(tx);
    let dog = Dog::new("Fluffy", 5, move |line: &str| {
        let _ = tx.lock().map(|tx| tx.send(line.to_owned()));
    });

    dog.talk();
    assert_eq!(rx.try_recv().as_deref(), Ok("woof woof"));
}

/// A trick defined outside the crate, to check new tricks need no changes to `Dog`.
#[derive(Debug)]
struct RollOver {
    owner: kennel_training::DogRef,
}

impl Trick for RollOver {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn perform(&self, args: &TrickArgs) {
        let times = args.get("times").unwrap_or("once");
        if let Some(dog) = self.owner.upgrade() {
            dog.say(&format!("look, {dog} rolled over {times}"));
        }
    }
}

impl LearnableTrick for RollOver {
    const NAME: &'static str = "roll_over";

    fn bind(owner: kennel_training::DogRef) -> Self {
        Self { owner }
    }
}

#[test]
fn custom_tricks_plug_in() {
    let (dog, out) = setup(FixedRoll::ALWAYS);
    dog.learn::<RollOver>();
    dog.perform_trick("roll_over", &TrickArgs::new().with("times", "twice"));

    assert!(dog.knows("roll_over"));
    assert_eq!(out.lines(), vec!["look, <Rex, the dog> rolled over twice"]);
}
