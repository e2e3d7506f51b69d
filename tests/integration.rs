// SPDX-License-Identifier: MPL-2.0
use column_wallet::application::port::{Wallet, WalletError};
use column_wallet::config::{self, Config};
use column_wallet::domain::wallet::{AccountAddress, Amount, EntryFunction};
use column_wallet::i18n::fluent::I18n;
use column_wallet::infrastructure::SimulatedWallet;
use column_wallet::ui::notifications::{Center, Severity, LIFETIME};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_ne!(i18n.tr("notification-address-copied"), "notification-address-copied");
}

#[test]
fn test_invalid_settings_fall_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[network\nname = ")
        .expect("Failed to write broken config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some(config::LOAD_ERROR_KEY));
}

#[tokio::test(start_paused = true)]
async fn test_transfer_outcome_toast_links_and_expires() {
    let wallet = SimulatedWallet::new("integration").with_latency(Duration::from_millis(10));
    let network = Config::default().network;
    let mut center = Center::new();

    wallet.connect().await.expect("connect");
    let recipient = AccountAddress::parse("0xbeef").expect("valid address");
    let hash = wallet
        .sign_and_send(EntryFunction::transfer(&recipient, Amount::from_octas(1)))
        .await
        .expect("transfer");

    center
        .notifier()
        .success_with_link("Success! Transaction submitted.", hash.clone());

    let toast = center.live().next().expect("toast");
    assert_eq!(toast.severity(), Severity::Success);
    assert_eq!(toast.link_target(&network), Some(network.explorer_link(&hash)));

    let expiries = center.take_expiries();
    assert_eq!(expiries.len(), 1);
    let expiry = expiries.into_iter().next().expect("expiry");

    let started = tokio::time::Instant::now();
    let id = expiry.wait().await;
    assert_eq!(started.elapsed(), LIFETIME);
    assert!(center.expire(id));
    assert!(center.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_failed_request_surfaces_as_error_toast() {
    let wallet = SimulatedWallet::new("integration").with_latency(Duration::ZERO);
    let mut center = Center::new();

    wallet.fail_next(WalletError::Rejected);
    let err = wallet.connect().await.expect_err("rejected");
    center
        .notifier()
        .show(format!("Connection failed: {err}"), Severity::Error, None);
    center.notifier().info("Address copied to clipboard");

    let rendered: Vec<_> = center.live().map(|n| (n.severity(), n.message().to_string())).collect();
    assert_eq!(
        rendered,
        vec![
            (
                Severity::Error,
                "Connection failed: Passkey request was cancelled".to_string()
            ),
            (Severity::Info, "Address copied to clipboard".to_string()),
        ]
    );
}
