use super::*;

fn post(content: Option<&str>) -> Post {
    Post {
        id: "P1".to_owned(),
        title: "Hello".to_owned(),
        content: content.map(str::to_owned),
        image_url: None,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        user_id: "U1".to_owned(),
    }
}

#[test]
fn post_url_joins_origin_and_id() {
    assert_eq!(post_url("https://forum.test", "P1"), "https://forum.test/post/P1");
    assert_eq!(post_url("https://forum.test/", "P1"), "https://forum.test/post/P1");
}

#[test]
fn share_text_prefers_content() {
    let data = ShareData::for_post(&post(Some("  body  ")), "https://forum.test");
    assert_eq!(
        data,
        ShareData {
            title: "Hello".to_owned(),
            text: "body".to_owned(),
            url: "https://forum.test/post/P1".to_owned(),
        }
    );
}

#[test]
fn share_text_falls_back_to_title() {
    assert_eq!(ShareData::for_post(&post(None), "o").text, "Hello");
    assert_eq!(ShareData::for_post(&post(Some("   ")), "o").text, "Hello");
}

#[test]
fn origin_is_empty_natively() {
    assert_eq!(current_origin(), "");
}

#[test]
fn native_share_is_unsupported() {
    let data = ShareData::for_post(&post(None), "o");
    assert_eq!(futures::executor::block_on(share_post(&data)), Err(ShareError::Unsupported));
}
