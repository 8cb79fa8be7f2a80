use crate::LogLevel;

use log::LevelFilter;

#[test]
fn test_known_levels_parse_case_insensitively() {
    assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Debug));
    assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Off));
    assert_eq!(" trace ".parse::<LogLevel>().unwrap(), LogLevel(LevelFilter::Trace));
}

#[test]
fn test_unknown_level_falls_back_to_default() {
    assert_eq!(
        "verbose".parse::<LogLevel>().unwrap(),
        LogLevel(crate::DEFAULT_LOG_LEVEL)
    );
}

#[test]
fn test_toml_level_deserializes() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let wrapper: Wrapper = toml::from_str("level = \"error\"").unwrap();
    assert_eq!(*wrapper.level, LevelFilter::Error);
}
