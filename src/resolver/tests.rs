//! Tests for marker resolution

use super::*;
use crate::args::CallArgs;
use crate::page::Marker;

// ============================================================================
// Token Strategy Tests
// ============================================================================

#[test]
fn test_token_resolver_recomposes_args() {
    let resolver = MarkerResolver::token("startwith");
    let args = CallArgs::new().with_limit(2);

    let next = resolver.resolve(&args, &Marker::token("3")).unwrap();
    let NextCall::Args(next_args) = next else {
        panic!("expected recomposed args");
    };

    // Caller options survive; only the cursor is new.
    assert_eq!(next_args.filter("limit"), Some("2"));
    assert_eq!(next_args.cursor().unwrap().param(), "startwith");
    assert_eq!(next_args.cursor().unwrap().value(), "3");
}

#[test]
fn test_token_resolver_identity_case() {
    // No original arguments beyond pagination: the resolver synthesizes
    // arguments holding only the new marker.
    let resolver = MarkerResolver::token("marker");
    let next = resolver
        .resolve(&CallArgs::new(), &Marker::token("obj_9"))
        .unwrap();

    let NextCall::Args(next_args) = next else {
        panic!("expected recomposed args");
    };
    assert_eq!(
        next_args.to_query(),
        vec![("marker".to_string(), "obj_9".to_string())]
    );
}

#[test]
fn test_token_resolver_accepts_numeric_marker() {
    let resolver = MarkerResolver::token("startwith");
    let next = resolver
        .resolve(&CallArgs::new(), &Marker::offset(7))
        .unwrap();
    let NextCall::Args(next_args) = next else {
        panic!("expected recomposed args");
    };
    assert_eq!(next_args.cursor().unwrap().value(), "7");
}

#[test]
fn test_token_resolver_passes_url_through() {
    let resolver = MarkerResolver::token("startwith");
    let args = CallArgs::new().with_filter("has", "text");

    let next = resolver
        .resolve(&args, &Marker::url("https://api.example.com/p?cursor=x"))
        .unwrap();

    // Opaque next-link: arguments are not recomposed, the URL is the whole
    // next request descriptor.
    assert_eq!(
        next,
        NextCall::Url("https://api.example.com/p?cursor=x".to_string())
    );
}

// ============================================================================
// Offset / Page-Number Strategy Tests
// ============================================================================

#[test]
fn test_offset_resolver_from_offset_marker() {
    let resolver = MarkerResolver::offset("offset");
    let next = resolver
        .resolve(&CallArgs::new().with_limit(50), &Marker::offset(50))
        .unwrap();
    let NextCall::Args(next_args) = next else {
        panic!("expected recomposed args");
    };
    assert_eq!(next_args.cursor().unwrap().value(), "50");
    assert_eq!(next_args.filter("limit"), Some("50"));
}

#[test]
fn test_offset_resolver_parses_numeric_token() {
    let resolver = MarkerResolver::offset("offset");
    let next = resolver
        .resolve(&CallArgs::new(), &Marker::token("25"))
        .unwrap();
    let NextCall::Args(next_args) = next else {
        panic!("expected recomposed args");
    };
    assert_eq!(next_args.cursor().unwrap().value(), "25");
}

#[test]
fn test_offset_resolver_rejects_non_numeric_token() {
    let resolver = MarkerResolver::offset("offset");
    let err = resolver
        .resolve(&CallArgs::new(), &Marker::token("not-a-number"))
        .unwrap_err();
    assert!(matches!(err, crate::Error::MalformedMarker { .. }));
}

#[test]
fn test_page_number_resolver() {
    let resolver = MarkerResolver::page_number("page");
    let next = resolver
        .resolve(&CallArgs::new().with_filter("sort", "name"), &Marker::offset(2))
        .unwrap();
    let NextCall::Args(next_args) = next else {
        panic!("expected recomposed args");
    };
    assert_eq!(next_args.cursor().unwrap().param(), "page");
    assert_eq!(next_args.filter("sort"), Some("name"));
}

// ============================================================================
// Next-URL Strategy Tests
// ============================================================================

#[test]
fn test_next_url_resolver() {
    let resolver = MarkerResolver::next_url();
    let next = resolver
        .resolve(&CallArgs::new(), &Marker::url("https://x/next"))
        .unwrap();
    assert_eq!(next, NextCall::Url("https://x/next".to_string()));
}

#[test]
fn test_next_url_resolver_rejects_token() {
    let resolver = MarkerResolver::next_url();
    let err = resolver
        .resolve(&CallArgs::new(), &Marker::token("abc"))
        .unwrap_err();
    assert!(matches!(err, crate::Error::MalformedMarker { .. }));
}

// ============================================================================
// Custom Closure Tests
// ============================================================================

#[test]
fn test_custom_resolver_closure() {
    // An endpoint with a doubled-offset quirk plugs in as a closure, no
    // trait impl needed.
    let resolver = MarkerResolver::new(|args, marker| match marker {
        Marker::Offset(n) => Ok(NextCall::Args(
            args.clone().with_cursor("skip", (n * 2).to_string()),
        )),
        other => Err(crate::Error::malformed_marker(format!("{other:?}"))),
    });

    let next = resolver
        .resolve(&CallArgs::new(), &Marker::offset(10))
        .unwrap();
    let NextCall::Args(next_args) = next else {
        panic!("expected recomposed args");
    };
    assert_eq!(next_args.cursor().unwrap().value(), "20");
}
