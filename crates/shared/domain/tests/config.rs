use kennel_domain::config::{DogConfig, KennelConfig, LoggingConfig, SchoolConfig};
use kennel_domain::constants::{CATCH_STICK, FAKE_DEAD, SHAKE_HAND};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let school = SchoolConfig::default();
    assert_eq!(school.curriculum, vec![FAKE_DEAD, CATCH_STICK, SHAKE_HAND]);

    let dog = DogConfig::default();
    assert_eq!(dog.obedience, 4);
    assert!(dog.seed.is_none());

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(!logging.json);
    assert!(logging.dir.is_none());
}

#[test]
fn kennel_config_deserializes() {
    let raw = json!({
        "school": { "curriculum": ["shake_hand"] },
        "dog": { "obedience": 2, "seed": 7 },
        "logging": { "level": "debug", "dir": "/tmp/kennel" }
    });

    let cfg: KennelConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.school.curriculum, vec!["shake_hand"]);
    assert_eq!(cfg.dog.obedience, 2);
    assert_eq!(cfg.dog.seed, Some(7));
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.console, "unset fields keep their defaults");
    assert_eq!(cfg.logging.dir, Some(std::path::PathBuf::from("/tmp/kennel")));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: KennelConfig = serde_json::from_value(json!({})).expect("empty config");
    assert_eq!(cfg.school.curriculum.len(), 3);
    assert_eq!(cfg.dog.obedience, 4);
}

#[test]
fn deref_mut_clones_on_write() {
    let original = KennelConfig::default();
    let mut edited = original.clone();
    edited.dog.obedience = 1;

    assert_eq!(original.dog.obedience, 4);
    assert_eq!(edited.dog.obedience, 1);
}
