//! Layered configuration loading.

use figment::Jail;
use formsmith_schema::validate::NumberPolicy;
use formsmith_store::{StoreConfig, StoreError};

#[test]
fn defaults_without_file_or_env() {
    Jail::expect_with(|_jail| {
        let config = StoreConfig::load(None).unwrap();
        assert_eq!(config, StoreConfig::default());
        Ok(())
    });
}

#[test]
fn file_then_env_override() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "formsmith.toml",
            r#"
                max_templates = 8
                number_policy = "flat"
                templates_key = "tpl"
            "#,
        )?;
        jail.set_env("FORMSMITH_MAX_TEMPLATES", "3");

        let config = StoreConfig::load(Some("formsmith.toml".as_ref())).unwrap();
        assert_eq!(config.max_templates, 3);
        assert_eq!(config.number_policy, NumberPolicy::Flat);
        assert_eq!(config.templates_key, "tpl");
        assert_eq!(config.submissions_key, "form-builder-submissions");
        Ok(())
    });
}

#[test]
fn zero_limit_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("FORMSMITH_MAX_TEMPLATES", "0");
        let err = StoreConfig::load(None).unwrap_err();
        assert!(matches!(err, StoreError::InvalidConfig { .. }));
        Ok(())
    });
}

#[test]
fn malformed_values_are_config_errors() {
    Jail::expect_with(|jail| {
        jail.set_env("FORMSMITH_NUMBER_POLICY", "sometimes");
        let err = StoreConfig::load(None).unwrap_err();
        assert_eq!(err.code(), "STORE_CONFIG");
        Ok(())
    });
}
