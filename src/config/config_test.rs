use serial_test::serial;
use temp_env::with_vars;

use super::*;
use crate::ColorMode;

fn cleanup_all_docsite_env_vars() {
    for (key, _) in std::env::vars() {
        if key.starts_with("DOCSITE__") || key == "CONFIG_PATH" {
            std::env::remove_var(&key);
        }
    }
}

#[test]
#[serial]
fn default_config_should_initialize_with_hardcoded_values() {
    let config = DocsiteConfig::default();

    assert_eq!(config.site.theme, "docs");
    assert!(config.site.image_hosts.is_empty());
    assert_eq!(config.theme.logo.width, 140);
    assert_eq!(config.theme.logo.height, 140);
    assert_eq!(config.theme.color.default_mode, ColorMode::Light);
    assert_eq!(config.theme.color.forced_mode, None);
    assert_eq!(config.theme.project_link, None);
}

#[test]
#[serial]
fn new_should_merge_environment_overrides() {
    cleanup_all_docsite_env_vars();
    with_vars(vec![("DOCSITE__THEME__LOGO__WIDTH", Some("96"))], || {
        let config = DocsiteConfig::new().unwrap();

        assert_eq!(config.theme.logo.width, 96);
    });
}

#[test]
#[serial]
fn with_override_config_should_merge_file_settings() {
    cleanup_all_docsite_env_vars();
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("dynamic_config.toml");

    std::fs::write(
        &config_path,
        r#"
        [site]
        image_hosts = ["uploaddeimagens.com.br", "cdn.discordapp.com"]

        [theme.logo]
        path = "/cryptologo.png" # Override default value
        width = 120 # Override default value
        "#,
    )
    .unwrap();

    let empty_vars: Vec<(&str, Option<&str>)> = vec![];
    with_vars(empty_vars, || {
        let base_config = DocsiteConfig::new().expect("success");
        let result = base_config.with_override_config(config_path.to_str().unwrap());

        assert!(result.is_ok());
        let config = result.unwrap();

        assert_eq!(
            config.site.image_hosts,
            vec!["uploaddeimagens.com.br", "cdn.discordapp.com"]
        );
        assert_eq!(config.theme.logo.path, "/cryptologo.png");
        assert_eq!(config.theme.logo.width, 120);
        // Untouched fields keep their defaults
        assert_eq!(config.theme.logo.height, 140);
    });
}

#[test]
#[serial]
fn environment_variables_should_have_highest_priority() {
    cleanup_all_docsite_env_vars();
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("test_config.toml");
    std::fs::write(
        &config_path,
        r#"
        [theme.footer]
        text = "From file"
        "#,
    )
    .unwrap();

    with_vars(
        vec![
            ("CONFIG_PATH", Some(config_path.to_str().unwrap())),
            ("DOCSITE__THEME__FOOTER__TEXT", Some("From environment")),
        ],
        || {
            let config = DocsiteConfig::new().unwrap();

            assert_eq!(config.theme.footer.text, "From environment");
        },
    );
}

#[test]
#[serial]
fn config_should_handle_nested_structures_correctly() {
    cleanup_all_docsite_env_vars();
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("nested.toml");
    std::fs::write(
        &config_path,
        r#"
        [site]
        theme = "docs"
        image_hosts = ["cdn.discordapp.com"]

        [theme.color]
        default_mode = "dark"
        forced_mode = "dark"

        [theme]
        project_link = "https://github.com/example/docs"
        "#,
    )
    .unwrap();

    with_vars(
        vec![("CONFIG_PATH", Some(config_path.to_str().unwrap()))],
        || {
            let config = DocsiteConfig::new().unwrap();

            assert_eq!(config.theme.color.default_mode, ColorMode::Dark);
            assert_eq!(config.theme.color.forced_mode, Some(ColorMode::Dark));
            assert_eq!(
                config.theme.project_link.as_deref(),
                Some("https://github.com/example/docs")
            );
        },
    );
}

#[test]
#[serial]
fn reloading_same_sources_should_be_deterministic() {
    cleanup_all_docsite_env_vars();
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("repeat.toml");
    std::fs::write(
        &config_path,
        r#"
        [site]
        image_hosts = ["uploaddeimagens.com.br", "cdn.discordapp.com"]

        [theme.footer]
        text = "Crypto Use API"
        "#,
    )
    .unwrap();

    with_vars(
        vec![("CONFIG_PATH", Some(config_path.to_str().unwrap()))],
        || {
            let first = DocsiteConfig::new().unwrap().validate().unwrap();
            let second = DocsiteConfig::new().unwrap().validate().unwrap();

            assert_eq!(first, second);
        },
    );
}

#[test]
fn validation_should_fail_with_invalid_host() {
    let mut config = DocsiteConfig::default();
    config.site.image_hosts = vec!["https://postimg.cc".to_string()];

    assert!(config.validate().is_err());
}

#[test]
fn validation_should_detect_zero_dimension() {
    let mut config = DocsiteConfig::default();
    config.theme.logo.height = 0;

    assert!(config.validate().is_err());
}

#[test]
fn validation_should_pass_defaults_through_unchanged() {
    let config = DocsiteConfig::default().validate().unwrap();

    assert_eq!(config, DocsiteConfig::default());
}

#[test]
#[serial]
fn missing_config_path_file_should_return_error() {
    cleanup_all_docsite_env_vars();
    with_vars(
        vec![("CONFIG_PATH", Some("/nonexistent/docsite.toml"))],
        || {
            assert!(DocsiteConfig::new().is_err());
        },
    );
}
