//! Server Configuration Tests

use std::net::SocketAddr;

use mcb_infrastructure::config::{
    ServerConfig, ServerCorsConfig, ServerNetworkConfig, ServerSslConfig, ServerTimeoutConfig,
};
use rstest::*;

fn config(host: &str, port: u16, https: bool) -> ServerConfig {
    ServerConfig {
        network: ServerNetworkConfig { host: host.to_owned(), port },
        ssl: ServerSslConfig { https, ssl_cert_path: None, ssl_key_path: None },
        timeouts: ServerTimeoutConfig {
            request_timeout_secs: 30,
            connection_timeout_secs: 10,
            max_request_body_size: 1024 * 1024,
        },
        cors: ServerCorsConfig { cors_enabled: false, cors_origins: Vec::new() },
    }
}

#[test]
fn test_parse_address() {
    let server_config = config("127.0.0.1", 8080, false);
    let address = server_config.parse_address().unwrap();
    assert_eq!(address, SocketAddr::from(([127, 0, 0, 1], 8080)));
}

#[rstest]
#[case("127.0.0.1", 8080, false, "http://127.0.0.1:8080")]
#[case("example.com", 8443, true, "https://example.com:8443")]
fn server_url(#[case] host: &str, #[case] port: u16, #[case] https: bool, #[case] expected: &str) {
    let server_config = config(host, port, https);
    assert_eq!(server_config.get_base_url(), expected);
}

#[test]
fn test_timeouts() {
    let server_config = config("0.0.0.0", 9000, true);
    assert_eq!(server_config.request_timeout().as_secs(), 30);
    assert_eq!(server_config.connection_timeout().as_secs(), 10);
}

#[test]
fn test_ssl_validation_requires_cert_and_key() {
    let server_config = config("0.0.0.0", 9000, true);
    let err = server_config.validate_ssl().expect_err("https without cert/key should fail");
    assert!(err.to_string().contains("certificate path is required"));
}
