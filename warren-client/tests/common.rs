use warren_client::Settings;

#[macro_export]
macro_rules! load_settings {
    (Default) => {{
        load_settings!("tests/config/warren.test.toml")
    }};
    (CustomPager) => {{
        load_settings!("tests/config/warren.test.custom_pager.toml")
    }};
    ($file_name:expr) => {{
        common::init_logger();
        warren_client::Settings::from_file($file_name)
    }};
}

pub fn init_logger() { let _ = env_logger::builder().is_test(true).try_init(); }

pub fn listing(settings: &Settings, pages: &[(&str, u32)]) -> String {
    let base = settings.api.base.trim_end_matches('/');
    let links: Vec<String> = pages
        .iter()
        .map(|(rel, n)| {
            format!(
                r#""{}": "{}/posts?{}={}&page%5Bsize%5D=25""#,
                rel, base, settings.pager.page_param, n
            )
        })
        .collect();
    format!(r#"{{"data": [], "links": {{{}}}}}"#, links.join(", "))
}
