#[macro_use]
extern crate lazy_static;

pub mod common;

use common::{init_logger, link_set, upstream};
use warren::error::{PageLinkFault, WarrenError};
use warren::{translate, LocalRoute, PageLinkSet, PagerRelation, Translator};

lazy_static! {
    pub static ref FULL: PageLinkSet = link_set(&[
        ("first", upstream(1).as_str()),
        ("previous", upstream(6).as_str()),
        ("next", upstream(8).as_str()),
        ("last", upstream(15).as_str()),
    ]);
}

fn posts(n: warren::PageNumber) -> String { format!("/posts?page={}", n) }

#[test]
fn next_and_last_scenario_test() {
    init_logger();
    let links = link_set(&[
        ("next", "http://api.example/posts?page[number]=2&page[size]=25"),
        ("last", "http://api.example/posts?page[number]=15&page[size]=25"),
    ]);
    let pager = translate(&links, posts).unwrap();

    assert_eq!(pager.relations(), vec![PagerRelation::Next, PagerRelation::Last]);
    assert_eq!(pager.next.as_deref(), Some("/posts?page=2"));
    assert_eq!(pager.last.as_deref(), Some("/posts?page=15"));
    assert!(pager.first.is_none());
    assert!(pager.prev.is_none());
}

#[test]
fn empty_link_set_test() {
    let pager = translate(&PageLinkSet::default(), posts).unwrap();
    assert!(pager.is_empty());
    assert!(pager.entries().is_empty());
}

#[test]
fn full_link_set_keeps_order_test() {
    init_logger();
    let pager = translate(&FULL, posts).unwrap();
    let entries: Vec<(String, String)> =
        pager.entries().into_iter().map(|e| (e.relation.to_string(), e.url)).collect();
    assert_eq!(
        entries,
        vec![
            ("first".to_string(), "/posts?page=1".to_string()),
            ("prev".to_string(), "/posts?page=6".to_string()),
            ("next".to_string(), "/posts?page=8".to_string()),
            ("last".to_string(), "/posts?page=15".to_string()),
        ]
    );
}

#[test]
fn every_subset_keeps_its_keys_test() {
    for mask in 0u8 .. 16 {
        let subset: PageLinkSet = FULL
            .iter()
            .enumerate()
            .filter(|(idx, _)| mask & (1 << idx) != 0)
            .map(|(_, (rel, link))| (rel, link.clone()))
            .collect();
        let pager = translate(&subset, posts).unwrap();
        assert_eq!(pager.relations(), subset.relations(), "mask {:04b}", mask);

        for (rel, link) in subset.iter() {
            let expected = posts(Translator::default().extract(link).unwrap());
            assert_eq!(pager.get(rel), Some(&expected));
        }
    }
}

#[test]
fn idempotent_test() {
    let route = LocalRoute::new("/posts");
    let translator = Translator::default();
    let once = translator.translate_to_route(&FULL, &route).unwrap();
    let twice = translator.translate_to_route(&FULL, &route).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn malformed_link_test() {
    let links = link_set(&[
        ("first", upstream(1).as_str()),
        ("next", "http://api.example/posts?page[number]=abc&page[size]=25"),
    ]);
    match translate(&links, posts) {
        Err(WarrenError::MalformedPageLink { link, reason }) => {
            assert_eq!(link, "http://api.example/posts?page[number]=abc&page[size]=25");
            assert_eq!(reason, PageLinkFault::NotANumber("abc".into()));
        },
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn zero_page_is_malformed_test() {
    let links = link_set(&[("first", "http://api.example/posts?page[number]=0")]);
    let err = translate(&links, posts).unwrap_err();
    assert!(err.is_malformed_page_link());
}

#[test]
fn missing_page_parameter_test() {
    let links = link_set(&[("last", "http://api.example/posts?page[size]=25")]);
    assert!(matches!(
        translate(&links, posts),
        Err(WarrenError::MalformedPageLink { reason: PageLinkFault::MissingParameter(_), .. })
    ));
}

#[test]
fn concurrent_translation_test() {
    let handles: Vec<_> = (0 .. 4)
        .map(|_| std::thread::spawn(|| translate(&FULL, posts).unwrap()))
        .collect();
    let expected = translate(&FULL, posts).unwrap();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
