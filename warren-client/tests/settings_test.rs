pub mod common;

use warren::PageNumber;
use warren_client::ClientError;

#[test]
fn default_settings_test() {
    let settings = load_settings!(Default).unwrap();
    assert_eq!(settings.api.base, "http://api.example/v1");
    assert_eq!(settings.credentials().email(), "jane@example.com");
    assert_eq!(settings.pager.page_param, "page[number]");

    let endpoint = settings.endpoint().unwrap();
    let url = endpoint.url_for("posts", PageNumber::new(4)).unwrap();
    assert_eq!(url.as_str(), "http://api.example/v1/posts?page%5Bnumber%5D=4");
}

#[test]
fn custom_pager_test() {
    let settings = load_settings!(CustomPager).unwrap();
    assert_eq!(settings.pager.page_param, "pg");
    let url = settings.endpoint().unwrap().url_for("/posts", PageNumber::new(2)).unwrap();
    assert_eq!(url.as_str(), "http://api.example/posts?pg=2");
}

#[test]
fn bad_base_test() {
    let result = load_settings!("tests/config/warren.test.bad_base.toml");
    assert!(matches!(result, Err(ClientError::InvalidBaseUrl(..))));
}

#[test]
fn missing_file_test() {
    let result = load_settings!("tests/config/warren.test.missing.toml");
    assert!(matches!(result, Err(ClientError::Settings(_))));
}
