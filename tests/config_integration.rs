use raindrop::config::Config;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn parse_complete_config_file() {
    let config_content = r#"
[server]
host = "127.0.0.1"
port = 9090
cache_max_age = 60

[tree]
root = "/srv/media"
base_url = "/media"
show_hidden = true
max_depth = 4

[render]
max_depth = 12

[share]
port = 2000
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.cache_max_age, 60);
    assert_eq!(config.tree.root, PathBuf::from("/srv/media"));
    assert_eq!(config.tree.base_url, "/media");
    assert!(config.tree.show_hidden);
    assert_eq!(config.tree.max_depth, 4);
    assert_eq!(config.render.max_depth, 12);
    assert_eq!(config.share.port, 2000);
}

#[test]
fn parse_partial_config_uses_defaults() {
    let config_content = r#"
[share]
port = 4000
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    // Explicit value
    assert_eq!(config.share.port, 4000);
    // Default values
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.cache_max_age, 1800);
    assert_eq!(config.tree.base_url, "/api/video");
}

#[test]
fn parse_invalid_toml_returns_error() {
    let config_content = "this is not valid toml [[[";

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let result = Config::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn parse_zero_port_returns_error() {
    let config_content = r#"
[server]
port = 0
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let result = Config::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn missing_explicit_file_returns_error() {
    let result = Config::load(Some(std::path::Path::new("/nonexistent/raindrop.toml")));
    assert!(result.is_err());
}
