use chrono::DateTime;
use pinsight_core::{Post, RawProfile};

pub(crate) fn profile(username: &str, full_name: &str, biography: &str) -> RawProfile {
    RawProfile {
        username: username.to_string(),
        full_name: full_name.to_string(),
        biography: biography.to_string(),
        followers: 0,
        following: 0,
        external_url: None,
        categories: None,
        highlights: None,
        posts: Vec::new(),
    }
}

pub(crate) fn post(id: &str, caption: &str) -> Post {
    Post {
        id: id.to_string(),
        caption: caption.to_string(),
        likes: 0,
        comments: 0,
        timestamp: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        image_urls: Vec::new(),
        dominant_colors: None,
        keywords: None,
    }
}
