//! Tests for the flattening concatenator

use super::*;
use crate::args::CallArgs;
use crate::error::Error;
use crate::fallback::FallbackPolicy;
use crate::fetch::FetchFn;
use crate::page::{Marker, Page};
use crate::resolver::MarkerResolver;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

fn sequence_over(
    first: Page<&'static str>,
    remaining: Vec<Page<&'static str>>,
) -> PagedSequence<FetchFn<&'static str>> {
    let queue = Arc::new(Mutex::new(VecDeque::from(remaining)));
    let fetcher = FetchFn::new(
        |_args| async move { unreachable!() },
        move |_call| {
            let queue = Arc::clone(&queue);
            async move {
                Ok(queue
                    .lock()
                    .unwrap()
                    .pop_front()
                    .expect("fetched past the scripted pages"))
            }
        },
    );
    PagedSequence::new(
        first,
        Arc::new(fetcher),
        MarkerResolver::token("startwith"),
        CallArgs::new(),
        FallbackPolicy::propagate(),
    )
}

#[tokio::test]
async fn test_concat_preserves_page_then_intra_page_order() {
    let seq = sequence_over(
        Page::new(vec!["A", "B"], Some(Marker::token("3"))),
        vec![
            Page::new(vec!["C"], Some(Marker::token("4"))),
            Page::with_items(vec!["D", "E"]),
        ],
    );

    let all = concat(seq).await.unwrap();
    assert_eq!(all, vec!["A", "B", "C", "D", "E"]);
}

#[tokio::test]
async fn test_concat_of_exhausted_sequence_is_empty() {
    let seq = sequence_over(Page::empty(), vec![]);
    let all = concat(seq).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_concat_skips_no_empty_intermediate_pages() {
    let seq = sequence_over(
        Page::new(vec![], Some(Marker::token("2"))),
        vec![
            Page::new(vec![], Some(Marker::token("3"))),
            Page::with_items(vec!["only"]),
        ],
    );

    let all = concat(seq).await.unwrap();
    assert_eq!(all, vec!["only"]);
}

#[tokio::test]
async fn test_concat_propagates_fetch_errors() {
    let fetcher: Arc<FetchFn<&'static str>> = Arc::new(FetchFn::new(
        |_args| async move { unreachable!() },
        |_call| async move { Err(Error::http_status(500, "boom")) },
    ));
    let seq = PagedSequence::new(
        Page::new(vec!["a"], Some(Marker::token("2"))),
        fetcher,
        MarkerResolver::token("startwith"),
        CallArgs::new(),
        FallbackPolicy::propagate(),
    );

    // Complete collection or an error; never a silent partial result.
    let err = concat(seq).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}
