use figment::Jail;
use lexi_config::{ConfigError, LexiConfig};

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lexicard")?;
        jail.create_file(
            ".lexicard/config.toml",
            r#"
[openai]
api_key = "sk-project"

[images]
allow_partial = true
"#,
        )?;

        let config = LexiConfig::load().expect("config loads");
        assert_eq!(config.openai.api_key, "sk-project");
        assert!(config.images.allow_partial);
        Ok(())
    });
}

#[test]
fn env_var_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lexicard")?;
        jail.create_file(
            ".lexicard/config.toml",
            r#"
[openai]
api_key = "sk-project"
"#,
        )?;
        jail.set_env("LEXICARD_OPENAI__API_KEY", "sk-from-env");

        let config = LexiConfig::load().expect("config loads");
        assert_eq!(config.openai.api_key, "sk-from-env");
        Ok(())
    });
}

#[test]
fn load_then_validate_reports_missing_key() {
    Jail::expect_with(|jail| {
        jail.set_env("LEXICARD_OPENAI__API_KEY", "");

        let config = LexiConfig::load().expect("config loads");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
        Ok(())
    });
}

#[test]
fn env_reaches_multi_word_field_tables() {
    Jail::expect_with(|jail| {
        jail.set_env("LEXICARD_FIELDS__INSPIRATIONAL_QUOTES__COUNT", "2");
        jail.set_env("LEXICARD_FIELDS__PART_OF_SPEECH__ABBREVIATE", "true");
        jail.set_env("LEXICARD_FIELDS__RHYMES__COUNT", "3");

        let config = LexiConfig::load().expect("config loads");
        assert_eq!(config.fields.inspirational_quotes.count, 2);
        assert!(config.fields.part_of_speech.abbreviate);
        assert_eq!(config.fields.rhymes.count, 3);
        assert_eq!(config.fields.synonyms.count, 8);
        Ok(())
    });
}
