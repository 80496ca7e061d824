//! Integration tests for subject pattern compilation and matching.

use std::sync::Arc;

use subject_matcher::{
    compile, compile_with, pattern_to_regex, Backend, CompiledMatcher, HandlerEntry,
    MatcherError, PatternErrorKind, Router, RouterOptions, SubscriptionRule,
};

const BACKENDS: [Backend; 2] = [Backend::Regex, Backend::Token];

fn compiled(pattern: &str) -> Vec<CompiledMatcher> {
    BACKENDS
        .iter()
        .map(|&backend| compile_with(pattern, backend).unwrap())
        .collect()
}

fn assert_match(pattern: &str, subject: &str, expected: bool) {
    for matcher in compiled(pattern) {
        assert_eq!(
            matcher.test(subject),
            expected,
            "{:?} backend: pattern {:?} subject {:?}",
            matcher.backend(),
            pattern,
            subject
        );
    }
}

#[test]
fn test_literal_patterns_match_only_themselves() {
    let cases = [
        ("a", "a", true),
        ("a", "A", true),
        ("a", "b", false),
        ("a", "a.b", false),
        ("orders.created", "orders.created", true),
        ("orders.created", "ORDERS.Created", true),
        ("orders.created", "orders.created.v2", false),
        ("orders.created", "orders", false),
        ("orders.created", "ordersxcreated", false),
        ("a+b.c", "a+b.c", true),
        ("a+b.c", "aab.c", false),
    ];

    for (pattern, subject, expected) in cases {
        assert_match(pattern, subject, expected);
    }
}

#[test]
fn test_single_wildcard_spans_exactly_one_token() {
    assert_match("a.*", "a.b", true);
    assert_match("a.*", "a.b.c", false);
    assert_match("a.*", "a", false);
    assert_match("europe-system.*", "europe-system.north", true);
    assert_match("europe-system.*", "europe-system.north.west", false);
}

#[test]
fn test_trailing_wildcard_spans_one_or_more_tokens() {
    assert_match("a.>", "a.b", true);
    assert_match("a.>", "a.b.c", true);
    assert_match("a.>", "a", false);
    assert_match("europe-system.>", "europe-system.north", true);
    assert_match("europe-system.>", "europe-system.north.west", true);
}

#[test]
fn test_case_insensitive_matching() {
    assert_match("Europe-System.*", "europe-system.NORTH", true);
    assert_match("europe-system.>", "EUROPE-SYSTEM.North.West", true);
}

#[test]
fn test_determinism() {
    let subjects = ["a.b", "a.b.c", "x", "A.B", ""];
    for pattern in ["a.*", "a.>", "a.b", "*"] {
        for backend in BACKENDS {
            let first = compile_with(pattern, backend).unwrap();
            let second = compile_with(pattern, backend).unwrap();
            for subject in subjects {
                assert_eq!(first.test(subject), second.test(subject));
            }
        }
    }
}

#[test]
fn test_empty_pattern_is_rejected() {
    for backend in BACKENDS {
        let err = compile_with("", backend).unwrap_err();
        assert!(matches!(
            err,
            MatcherError::InvalidPattern {
                kind: PatternErrorKind::Empty,
                ..
            }
        ));
    }
}

#[test]
fn test_misplaced_trailing_wildcard_is_rejected() {
    let err = compile("a.>.b").unwrap_err();
    assert!(matches!(
        err,
        MatcherError::InvalidPattern {
            kind: PatternErrorKind::MisplacedTrailingWildcard,
            ..
        }
    ));
}

#[test]
fn test_pattern_to_regex() {
    let token = pattern_to_regex("europe-system.*").unwrap();
    let full = pattern_to_regex("europe-system.>").unwrap();

    assert!(token.is_match("europe-system.north"));
    assert!(!token.is_match("europe-system.north.west"));
    assert!(full.is_match("europe-system.north.west"));
}

#[test]
fn test_compiled_matcher_shared_across_threads() {
    let matcher = Arc::new(compile("europe-system.>").unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let matcher = Arc::clone(&matcher);
            std::thread::spawn(move || {
                let subject = format!("europe-system.node-{}.west", i);
                (0..1000).all(|_| matcher.test(&subject)) && !matcher.test("asia-system.north")
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_router_shared_across_tasks() {
    let rules = [
        SubscriptionRule::new("store", "mongo-store.>"),
        SubscriptionRule::new("europe", "europe-system.*"),
    ];
    let handlers = vec![
        HandlerEntry::new("store", "STORE"),
        HandlerEntry::new("europe", "EUROPE"),
    ];
    let router = Arc::new(Router::new(&rules, handlers, RouterOptions::new().with_cache_size(8)).unwrap());

    let mut tasks = Vec::new();
    for i in 0..16 {
        let router = Arc::clone(&router);
        tasks.push(tokio::spawn(async move {
            let store = router.route_first(&format!("mongo-store.cmd-{}", i % 4));
            let europe = router.route_first(&format!("europe-system.region-{}", i));
            let nested = router.route_first(&format!("europe-system.region-{}.west", i));
            (store, europe, nested)
        }));
    }

    for task in tasks {
        let (store, europe, nested) = task.await.unwrap();
        assert_eq!(store, Some("STORE"));
        assert_eq!(europe, Some("EUROPE"));
        assert_eq!(nested, None);
    }
}

#[test]
fn test_router_cache_keeps_lookalike_subjects_apart() {
    for backend in BACKENDS {
        let router = Router::new(
            &[SubscriptionRule::new("s", "a.*")],
            vec![HandlerEntry::new("s", "S")],
            RouterOptions::new().with_backend(backend),
        )
        .unwrap();

        let kelvin = "a.\u{212A}";
        assert_eq!(router.route("a.k"), vec!["S"]);
        assert!(router.route(kelvin).is_empty());
        assert_eq!(
            router.route(kelvin).is_empty(),
            !compile_with("a.*", backend).unwrap().test(kelvin)
        );
    }
}
