use std::sync::Mutex;

use fusion_image_proxy::config::{
    Config, ALLOWED_HOST, ALLOWED_PATH_PREFIX, CACHE_CONTROL, USER_AGENT,
};

// Config::load reads process env vars, so tests touching them must not
// run concurrently.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_config_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        std::env::remove_var("PROXY_CONFIG");
        std::env::remove_var("LISTEN");
    }

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.server.handler_timeout_secs, 20);
    assert_eq!(cfg.upstream.connect_timeout_secs, 5);
    assert_eq!(cfg.upstream.request_timeout_secs, 20);
}

#[test]
fn test_config_listen_env_override() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        std::env::remove_var("PROXY_CONFIG");
        std::env::set_var("LISTEN", "0.0.0.0:3000");
    }

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");

    unsafe {
        std::env::remove_var("LISTEN");
    }
}

#[test]
fn test_config_from_yaml_file() {
    let _guard = ENV_LOCK.lock().unwrap();

    let path = std::env::temp_dir().join("fusion-image-proxy-test-config.yaml");
    std::fs::write(
        &path,
        "server:\n  listen_addr: \"0.0.0.0:9000\"\n  handler_timeout_secs: 5\nupstream:\n  request_timeout_secs: 10\n",
    )
    .unwrap();

    unsafe {
        std::env::remove_var("LISTEN");
        std::env::set_var("PROXY_CONFIG", &path);
    }

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:9000");
    assert_eq!(cfg.server.handler_timeout_secs, 5);
    assert_eq!(cfg.upstream.request_timeout_secs, 10);
    // Unspecified fields keep their defaults
    assert_eq!(cfg.upstream.connect_timeout_secs, 5);

    unsafe {
        std::env::remove_var("PROXY_CONFIG");
    }
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_config_missing_file_is_an_error() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        std::env::set_var("PROXY_CONFIG", "/nonexistent/fusion-proxy.yaml");
    }

    assert!(Config::load().is_err());

    unsafe {
        std::env::remove_var("PROXY_CONFIG");
    }
}

#[test]
fn test_allow_list_constants() {
    // These values are a compatibility contract, not tunables.
    assert_eq!(ALLOWED_HOST, "fusioncalc.com");
    assert_eq!(
        ALLOWED_PATH_PREFIX,
        "/wp-content/themes/twentytwentyone/pokemon/"
    );
    assert_eq!(USER_AGENT, "spin-a-fusion-image-proxy/1.0");
    assert_eq!(CACHE_CONTROL, "public, max-age=21600, s-maxage=86400");
}
