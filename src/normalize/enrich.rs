use regex::Regex;
use scraper::{Html, Selector};

/// Synthesize a thumbnail URL from a YouTube watch link.
pub fn youtube_thumbnail(url: &str) -> Option<String> {
    let video_id_regex = Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([^&\s]+)").unwrap();

    video_id_regex.captures(url).map(|caps| {
        format!(
            "https://img.youtube.com/vi/{}/maxresdefault.jpg",
            &caps[1]
        )
    })
}

/// Extract the `src` of the first `<img>` embedded in content HTML.
pub fn first_image_src(content: &str) -> Option<String> {
    if content.is_empty() {
        return None;
    }

    let fragment = Html::parse_fragment(content);
    let img_selector = Selector::parse("img[src]").unwrap();

    fragment
        .select(&img_selector)
        .next()
        .and_then(|element| element.value().attr("src"))
        .map(|src| src.to_string())
}
