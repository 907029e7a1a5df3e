use super::*;

// =============================================================================
// env_or: uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_or_unset_returns_default() {
    assert_eq!(env_or("__TEST_AMC_UNSET_PORT_4411__", 3000_u16).expect("default"), 3000);
}

#[test]
fn env_or_parses_value_and_trims() {
    let key = "__TEST_AMC_PORT_TRIM_5120__";
    unsafe { std::env::set_var(key, "  8080 ") };
    assert_eq!(env_or(key, 3000_u16).expect("parse"), 8080);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_or_blank_returns_default() {
    let key = "__TEST_AMC_PORT_BLANK_6021__";
    unsafe { std::env::set_var(key, "   ") };
    assert_eq!(env_or(key, 3000_u16).expect("default"), 3000);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_or_malformed_is_error() {
    let key = "__TEST_AMC_PORT_BAD_7390__";
    unsafe { std::env::set_var(key, "eighty") };
    let err = env_or(key, 3000_u16).expect_err("should reject");
    assert_eq!(err.to_string(), format!("invalid {key}: \"eighty\""));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_or_parses_host_address() {
    let key = "__TEST_AMC_HOST_8802__";
    unsafe { std::env::set_var(key, "127.0.0.1") };
    let host = env_or(key, DEFAULT_HOST).expect("parse");
    assert_eq!(host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn default_config_listens_on_all_interfaces() {
    assert_eq!(Config::default().addr().to_string(), "0.0.0.0:8080");
}

/// Port of the `scheme://host:port/...` authority, if one is spelled out.
fn url_port(url: &str) -> Option<u16> {
    let rest = url.split_once("://")?.1;
    let authority = rest.split('/').next()?;
    authority.rsplit_once(':')?.1.parse().ok()
}

#[test]
fn default_port_differs_from_api_port() {
    let api_port = url_port(client::net::api::DEFAULT_API_BASE_URL).expect("api url names a port");
    assert_eq!(api_port, 3000);
    assert_ne!(Config::default().port, api_port);
}

// =============================================================================
// from_keys: layering of site address and HOST / PORT overrides
// =============================================================================

#[test]
fn from_keys_unset_uses_default_addr() {
    let config = Config::from_keys(
        "__TEST_AMC_SITE_UNSET_1201__",
        "__TEST_AMC_HOST_UNSET_1202__",
        "__TEST_AMC_PORT_UNSET_1203__",
    )
    .expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn from_keys_honors_site_addr() {
    let site = "__TEST_AMC_SITE_2301__";
    unsafe { std::env::set_var(site, "127.0.0.1:8090") };
    let config = Config::from_keys(site, "__TEST_AMC_HOST_2302__", "__TEST_AMC_PORT_2303__").expect("parse");
    assert_eq!(config.addr().to_string(), "127.0.0.1:8090");
    unsafe { std::env::remove_var(site) };
}

#[test]
fn from_keys_host_and_port_override_site_addr() {
    let (site, host, port) = ("__TEST_AMC_SITE_3401__", "__TEST_AMC_HOST_3402__", "__TEST_AMC_PORT_3403__");
    unsafe {
        std::env::set_var(site, "127.0.0.1:8090");
        std::env::set_var(host, "0.0.0.0");
        std::env::set_var(port, "9000");
    }
    let config = Config::from_keys(site, host, port).expect("parse");
    assert_eq!(config.addr().to_string(), "0.0.0.0:9000");
    unsafe {
        std::env::remove_var(site);
        std::env::remove_var(host);
        std::env::remove_var(port);
    }
}

#[test]
fn from_keys_malformed_site_addr_is_error() {
    let site = "__TEST_AMC_SITE_BAD_4501__";
    unsafe { std::env::set_var(site, "localhost") };
    let err = Config::from_keys(site, "__TEST_AMC_HOST_4502__", "__TEST_AMC_PORT_4503__").expect_err("should reject");
    assert_eq!(err.to_string(), format!("invalid {site}: \"localhost\""));
    unsafe { std::env::remove_var(site) };
}
