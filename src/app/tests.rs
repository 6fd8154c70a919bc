use crate::config::{AccountConfig, AppConfig, CollectorConfig, Config, ReportConfig, StorageConfig};

use super::App;

fn base_config(stats_dir: &str) -> Config {
    Config {
        app: AppConfig {
            name: "fxboard".to_string(),
            env: String::new(),
            log_level: None,
        },
        accounts: vec![AccountConfig {
            name: "alpha".to_string(),
            location: "https://www.myfxbook.com/members/x/alpha/1234567".to_string(),
            currency: "USD".to_string(),
            currency_divider: 0,
            provider: "nonexistent".to_string(),
            enabled: true,
        }],
        storage: StorageConfig {
            stats_dir: stats_dir.to_string(),
        },
        collector: None,
        report: None,
    }
}

#[test]
fn test_interval_defaults_to_zero() {
    let dir = tempfile::tempdir().unwrap();
    let app = App::new(base_config(dir.path().to_str().unwrap()));
    assert!(app.interval().is_zero());
}

#[test]
fn test_interval_from_collector_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = base_config(dir.path().to_str().unwrap());
    cfg.collector = Some(CollectorConfig {
        interval: std::time::Duration::from_secs(300),
    });
    let app = App::new(cfg);
    assert_eq!(app.interval(), std::time::Duration::from_secs(300));
}

#[test]
fn test_report_enabled_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let app = App::new(base_config(dir.path().to_str().unwrap()));
    assert!(app.report_enabled());
}

#[test]
fn test_report_can_be_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = base_config(dir.path().to_str().unwrap());
    cfg.report = Some(ReportConfig {
        enabled: false,
        title: None,
    });
    let app = App::new(cfg);
    assert!(!app.report_enabled());
}

#[tokio::test]
async fn test_unknown_provider_persists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let stats_dir = dir.path().to_str().unwrap();
    let app = App::new(base_config(stats_dir));

    app.run_cycle().await;

    assert!(!dir.path().join("alpha.json").exists());
    // The report is still assembled, just without account rows.
    let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(!html.contains("alpha"));
}

#[tokio::test]
async fn test_report_only_mode_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let app = App::new(base_config(dir.path().to_str().unwrap()));

    app.assemble_report().await.unwrap();

    assert!(dir.path().join("index.html").exists());
}
