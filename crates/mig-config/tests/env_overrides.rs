use figment::Jail;
use mig_config::{ConfigError, MigConfig};

#[test]
fn external_overrides_fill_config_values() {
    Jail::expect_with(|_jail| {
        let overrides = vec![(
            "MIGSCOPE_TARGET__TOKEN".to_string(),
            "token_from_external".to_string(),
        )];

        let config = MigConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.target.token, "token_from_external");
        Ok(())
    });
}

#[test]
fn numeric_and_boolean_overrides_are_typed() {
    Jail::expect_with(|_jail| {
        let overrides = vec![
            ("MIGSCOPE_FETCH__PAGE_SIZE".to_string(), "100".to_string()),
            ("MIGSCOPE_FETCH__TIMEOUT_SECS".to_string(), "45".to_string()),
            ("MIGSCOPE_REPORT__INCLUDE_ROLES".to_string(), "true".to_string()),
        ];

        let config = MigConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.fetch.page_size, 100);
        assert_eq!(config.fetch.timeout_secs, 45);
        assert!(config.report.include_roles);
        Ok(())
    });
}

#[test]
fn process_env_beats_external_overrides() {
    Jail::expect_with(|jail| {
        jail.set_env("MIGSCOPE_TARGET__TOKEN", "token_from_env");
        let overrides = vec![(
            "MIGSCOPE_TARGET__TOKEN".to_string(),
            "token_from_external".to_string(),
        )];

        let config = MigConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.target.token, "token_from_env");
        Ok(())
    });
}

#[test]
fn overrides_outside_prefix_are_ignored() {
    Jail::expect_with(|_jail| {
        let overrides = vec![("OTHER_TARGET__TOKEN".to_string(), "nope".to_string())];

        let config = MigConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert!(config.target.token.is_empty());
        Ok(())
    });
}

#[test]
fn zero_page_size_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("MIGSCOPE_FETCH__PAGE_SIZE", "0");

        let err = MigConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn log_filter_variable_does_not_leak_into_config() {
    Jail::expect_with(|jail| {
        jail.set_env("MIGSCOPE_LOG", "debug");
        assert!(MigConfig::load().is_ok());
        Ok(())
    });
}

#[test]
fn dotenv_file_is_left_to_the_caller() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "MIGSCOPE_TARGET__TOKEN=token_from_dotenv\n")?;

        let config = MigConfig::load().expect("config loads");
        assert!(config.target.token.is_empty());
        Ok(())
    });
}
