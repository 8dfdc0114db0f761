pub mod common;

#[test]
fn environment_overrides_file_test() {
    std::env::set_var("WARREN_API__CREDENTIALS__TOKEN", "from-env");
    let settings = load_settings!("tests/config/warren.test.env.toml").unwrap();
    std::env::remove_var("WARREN_API__CREDENTIALS__TOKEN");

    assert_eq!(settings.credentials().email(), "env@example.com");
    assert_eq!(settings.credentials().token(), "from-env");
}
