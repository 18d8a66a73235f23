//! Tests for validated configuration.

use std::time::Duration;

use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, write_default_config};
use super::{ConfigError, defaults};
use crate::webhook::FailureReporting;

const ENDPOINT: &str = "https://chat.example.com/v1/im/webhook";

/// Helper to create CLI args for `send` with extra global args
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["cardhook"];
    full_args.extend(args);
    full_args.extend(["send", "--head", "Heading"]);
    Cli::parse_from_iter(full_args)
}

/// Helper to create CLI args with endpoint and auth already set
fn connected_cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["--endpoint", ENDPOINT, "--auth", "token"];
    full_args.extend(args);
    cli(&full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod required_fields {
    use super::*;

    #[test]
    fn missing_endpoint_returns_error() {
        let cli = cli(&["--auth", "token"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired {
                field: "endpoint",
                ..
            })
        ));
    }

    #[test]
    fn missing_auth_returns_error() {
        let cli = cli(&["--endpoint", ENDPOINT]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired { field: "auth", .. })
        ));
    }

    #[test]
    fn both_required_fields_from_cli() {
        let config = ValidatedConfig::from_raw(&connected_cli(&[]), None).unwrap();

        assert_eq!(config.client.endpoint(), ENDPOINT);
    }

    #[test]
    fn both_required_fields_from_toml() {
        let toml = toml(&format!(
            "[webhook]\nendpoint = \"{ENDPOINT}\"\nauth = \"token\""
        ));
        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert_eq!(config.client.endpoint(), ENDPOINT);
    }
}

mod priority {
    use super::*;

    #[test]
    fn cli_endpoint_overrides_toml() {
        let toml = toml(
            r#"
            [webhook]
            endpoint = "https://toml.example.com/hook"
            auth = "toml-token"
        "#,
        );
        let cli = cli(&["--endpoint", "https://cli.example.com/hook"]);
        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.client.endpoint(), "https://cli.example.com/hook");
    }

    #[test]
    fn cli_timeout_overrides_toml() {
        let toml = toml("[delivery]\ntimeout = 10");
        let config = ValidatedConfig::from_raw(&connected_cli(&["--timeout", "3"]), Some(&toml))
            .unwrap();

        assert_eq!(config.client.http_client().timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn toml_timeout_used_without_cli() {
        let toml = toml("[delivery]\ntimeout = 10");
        let config = ValidatedConfig::from_raw(&connected_cli(&[]), Some(&toml)).unwrap();

        assert_eq!(config.client.http_client().timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn timeout_defaults() {
        let config = ValidatedConfig::from_raw(&connected_cli(&[]), None).unwrap();

        assert_eq!(config.client.http_client().timeout(), Some(defaults::timeout()));
    }
}

mod validation {
    use super::*;

    #[test]
    fn zero_timeout_is_rejected() {
        let result = ValidatedConfig::from_raw(&connected_cli(&["--timeout", "0"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDuration {
                field: "timeout",
                ..
            })
        ));
    }

    #[test]
    fn malformed_endpoint_is_rejected() {
        let cli = cli(&["--endpoint", "not a url", "--auth", "token"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(result, Err(ConfigError::InvalidWebhook(_))));
    }

    #[test]
    fn auth_with_newline_is_rejected() {
        let cli = cli(&["--endpoint", ENDPOINT, "--auth", "bad\ntoken"]);
        let result = ValidatedConfig::from_raw(&cli, None);

        assert!(matches!(result, Err(ConfigError::InvalidWebhook(_))));
    }
}

mod flags {
    use super::*;

    #[test]
    fn failure_reporting_defaults_to_verbose() {
        let config = ValidatedConfig::from_raw(&connected_cli(&[]), None).unwrap();

        assert_eq!(config.client.failure_reporting(), FailureReporting::Verbose);
    }

    #[test]
    fn toml_can_silence_failures() {
        let toml = toml("[webhook]\nverbose_failures = false");
        let config = ValidatedConfig::from_raw(&connected_cli(&[]), Some(&toml)).unwrap();

        assert_eq!(config.client.failure_reporting(), FailureReporting::Silent);
    }

    #[test]
    fn quiet_flag_wins_over_toml() {
        let toml = toml("[webhook]\nverbose_failures = true");
        let cli = connected_cli(&["--quiet-failures"]);
        let config = ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap();

        assert_eq!(config.client.failure_reporting(), FailureReporting::Silent);
    }

    #[test]
    fn markdown_defaults_off() {
        let config = ValidatedConfig::from_raw(&connected_cli(&[]), None).unwrap();

        assert_eq!(config.markdown, defaults::MARKDOWN);
    }

    #[test]
    fn markdown_from_toml() {
        let toml = toml("[message]\nmarkdown = true");
        let config = ValidatedConfig::from_raw(&connected_cli(&[]), Some(&toml)).unwrap();

        assert!(config.markdown);
    }

    #[test]
    fn markdown_from_cli() {
        let cli = Cli::parse_from_iter([
            "cardhook",
            "--endpoint",
            ENDPOINT,
            "--auth",
            "token",
            "send",
            "--head",
            "x",
            "--markdown",
        ]);
        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        assert!(config.markdown);
    }

    #[test]
    fn dry_run_and_verbose_copied() {
        let config =
            ValidatedConfig::from_raw(&connected_cli(&["--dry-run", "--verbose"]), None).unwrap();

        assert!(config.dry_run);
        assert!(config.verbose);
    }
}

mod display {
    use super::*;

    #[test]
    fn does_not_print_auth() {
        let cli = cli(&["--endpoint", ENDPOINT, "--auth", "super-secret"]);
        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        let text = config.to_string();
        assert!(text.contains(ENDPOINT));
        assert!(text.contains("timeout: 30s"));
        assert!(!text.contains("super-secret"));
    }
}

mod loading {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn load_reads_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[webhook]\nendpoint = \"{ENDPOINT}\"\nauth = \"token\"\n\n[delivery]\ntimeout = 4"
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let cli = cli(&["--config", path]);
        let config = ValidatedConfig::load(&cli).unwrap();

        assert_eq!(config.client.endpoint(), ENDPOINT);
        assert_eq!(config.client.http_client().timeout(), Some(Duration::from_secs(4)));
    }

    #[test]
    fn load_without_config_uses_cli_only() {
        let config = ValidatedConfig::load(&connected_cli(&[])).unwrap();

        assert_eq!(config.client.endpoint(), ENDPOINT);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let cli = connected_cli(&["--config", path.to_str().unwrap()]);

        assert!(matches!(
            ValidatedConfig::load(&cli),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn write_default_config_creates_parseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cardhook.toml");

        write_default_config(&path).unwrap();

        let config = TomlConfig::load(&path).unwrap();
        assert!(config.webhook.endpoint.is_none());
    }

    #[test]
    fn write_default_config_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("cardhook.toml");

        assert!(matches!(
            write_default_config(&path),
            Err(ConfigError::FileWrite { .. })
        ));
    }
}
