// tests/config_tests.rs

use serial_test::serial;
use std::env;
use storefront::config::AppConfig;
use storefront::errors::AppError;

// These tests mutate process-wide environment variables, so they must not
// interleave.

fn clear_env() {
  env::remove_var("SERVER_HOST");
  env::remove_var("SERVER_PORT");
  env::remove_var("MOCK_LATENCY");
  env::remove_var("STORAGE_DIR");
}

#[test]
#[serial]
fn defaults_apply_when_nothing_is_set() {
  clear_env();
  let cfg = AppConfig::from_env().expect("config");
  assert_eq!(cfg.server_host, "127.0.0.1");
  assert_eq!(cfg.server_port, 8080);
  assert!(cfg.mock_latency);
  assert_eq!(cfg.storage_dir, std::path::PathBuf::from(".storefront"));
}

#[test]
#[serial]
fn environment_overrides_are_honored() {
  clear_env();
  env::set_var("SERVER_PORT", "9001");
  env::set_var("MOCK_LATENCY", "false");
  env::set_var("STORAGE_DIR", "/tmp/storefront-test");

  let cfg = AppConfig::from_env().expect("config");
  assert_eq!(cfg.server_port, 9001);
  assert!(!cfg.mock_latency);
  assert_eq!(cfg.storage_dir, std::path::PathBuf::from("/tmp/storefront-test"));
  clear_env();
}

#[test]
#[serial]
fn malformed_port_is_a_config_error() {
  clear_env();
  env::set_var("SERVER_PORT", "not-a-port");
  let err = AppConfig::from_env().expect_err("must fail");
  assert!(matches!(err, AppError::Config(_)));
  clear_env();
}
