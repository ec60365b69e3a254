//! Tests for the fetch boundary

use super::*;
use crate::page::Marker;

#[tokio::test]
async fn test_fetch_fn_first_page() {
    let fetcher = FetchFn::new(
        |args: CallArgs| async move {
            // The closure sees the original arguments.
            assert_eq!(args.filter("has"), Some("text"));
            Ok(Page::new(vec!["a", "b"], Some(Marker::token("3"))))
        },
        |_call| async move { Ok(Page::empty()) },
    );

    let args = CallArgs::new().with_filter("has", "text");
    let page = fetcher.fetch_first(&args).await.unwrap();
    assert_eq!(page.items(), &["a", "b"]);
    assert_eq!(page.marker(), Some(&Marker::token("3")));
}

#[tokio::test]
async fn test_fetch_fn_next_page_by_args() {
    let fetcher = FetchFn::new(
        |_args| async move { Ok(Page::empty()) },
        |call: NextCall| async move {
            let NextCall::Args(args) = call else {
                panic!("expected recomposed args");
            };
            assert_eq!(args.cursor().unwrap().value(), "3");
            Ok(Page::with_items(vec!["c", "d"]))
        },
    );

    let call = NextCall::Args(CallArgs::new().with_cursor("startwith", "3"));
    let page = fetcher.fetch_next(&call).await.unwrap();
    assert_eq!(page.items(), &["c", "d"]);
    assert!(page.is_terminal());
}

#[tokio::test]
async fn test_fetch_fn_next_page_by_url() {
    let fetcher = FetchFn::new(
        |_args| async move { Ok(Page::empty()) },
        |call: NextCall| async move {
            assert_eq!(call, NextCall::Url("https://x/next".to_string()));
            Ok(Page::with_items(vec![1]))
        },
    );

    let page = fetcher
        .fetch_next(&NextCall::Url("https://x/next".to_string()))
        .await
        .unwrap();
    assert_eq!(page.items(), &[1]);
}

#[tokio::test]
async fn test_fetch_fn_propagates_errors() {
    let fetcher: FetchFn<i32> = FetchFn::new(
        |_args| async move { Err(crate::Error::not_found("/servers")) },
        |_call| async move { Ok(Page::empty()) },
    );

    let err = fetcher.fetch_first(&CallArgs::new()).await.unwrap_err();
    assert!(err.is_not_found());
}
