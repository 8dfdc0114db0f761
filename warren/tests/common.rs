use warren::PageLinkSet;

pub const API: &str = "http://api.example";

pub fn init_logger() { let _ = env_logger::builder().is_test(true).try_init(); }

pub fn upstream(number: u32) -> String {
    format!("{}/posts?page%5Bnumber%5D={}&page%5Bsize%5D=25", API, number)
}

pub fn link_set(pairs: &[(&str, &str)]) -> PageLinkSet {
    PageLinkSet::from_pairs(pairs.iter().copied()).unwrap()
}

pub const LISTING: &str = r#"{
    "data": [
        {"type": "posts", "id": "26", "attributes": {"title": "Twenty six", "body": "..."}},
        {"type": "posts", "id": "27", "attributes": {"title": "Twenty seven", "body": "..."}}
    ],
    "included": [
        {"type": "users", "id": "1", "attributes": {"email": "jane@example.com"}}
    ],
    "links": {
        "self": "http://api.example/posts?page%5Bnumber%5D=2&page%5Bsize%5D=25",
        "first": "http://api.example/posts?page%5Bnumber%5D=1&page%5Bsize%5D=25",
        "prev": "http://api.example/posts?page%5Bnumber%5D=1&page%5Bsize%5D=25",
        "next": "http://api.example/posts?page%5Bnumber%5D=3&page%5Bsize%5D=25",
        "last": "http://api.example/posts?page%5Bnumber%5D=15&page%5Bsize%5D=25"
    },
    "meta": {"record-count": 370},
    "jsonapi": {"version": "1.0"}
}"#;
