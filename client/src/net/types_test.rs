use super::*;

// =============================================================
// Tweet
// =============================================================

#[test]
fn tweet_deserializes_feed_field_names() {
    let json = r#"{
        "_id": "7b1c",
        "_createdAt": "2023-01-01T00:00:00Z",
        "text": "hello world",
        "username": "Ada Lovelace",
        "profileImg": "https://img.test/ada.png",
        "image": "https://img.test/post.png"
    }"#;
    let tweet: Tweet = serde_json::from_str(json).unwrap();
    assert_eq!(tweet.id, "7b1c");
    assert_eq!(tweet.created_at, "2023-01-01T00:00:00Z");
    assert_eq!(tweet.profile_img, "https://img.test/ada.png");
    assert_eq!(tweet.image.as_deref(), Some("https://img.test/post.png"));
}

#[test]
fn tweet_image_defaults_to_none_when_missing() {
    let json = r#"{"_id":"1","_createdAt":"2023-01-01T00:00:00Z","text":"t","username":"u","profileImg":"p"}"#;
    let tweet: Tweet = serde_json::from_str(json).unwrap();
    assert!(tweet.image.is_none());
}

#[test]
fn tweet_image_accepts_null() {
    let json = r#"{"_id":"1","_createdAt":"2023-01-01T00:00:00Z","text":"t","username":"u","profileImg":"p","image":null}"#;
    let tweet: Tweet = serde_json::from_str(json).unwrap();
    assert!(tweet.image.is_none());
}

// =============================================================
// Comment
// =============================================================

#[test]
fn comment_deserializes_parent_reference() {
    let json = r#"{"_id":"c1","_createdAt":"2023-01-02T10:00:00.000Z","comment":"nice","username":"Bob","profileImg":"p","tweetId":"t1"}"#;
    let comment: Comment = serde_json::from_str(json).unwrap();
    assert_eq!(comment.id, "c1");
    assert_eq!(comment.tweet_id, "t1");
    assert_eq!(comment.comment, "nice");
}

// =============================================================
// CommentBody
// =============================================================

#[test]
fn comment_body_serializes_camel_case_keys() {
    let body = CommentBody {
        comment: "hi".to_owned(),
        tweet_id: "t1".to_owned(),
        username: UNKNOWN_USERNAME.to_owned(),
        profile_img: DEFAULT_PROFILE_IMG.to_owned(),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "comment": "hi",
            "tweetId": "t1",
            "username": "Unknown User",
            "profileImg": "https://links.papareact.com/gll",
        })
    );
}

// =============================================================
// SessionUser
// =============================================================

#[test]
fn session_user_image_is_optional() {
    let user: SessionUser = serde_json::from_str(r#"{"id":"u1","name":"Ada"}"#).unwrap();
    assert_eq!(user.name, "Ada");
    assert!(user.image.is_none());
}
