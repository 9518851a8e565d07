use crate::render::escape;
use crate::types::{Media, ProjectImage};

const EMBED_SUFFIX: &str = "embed/";

/// Canonical embed source for an Instagram post URL: trim, make sure
/// exactly one `/` separates the path from the suffix, append the
/// suffix.
pub fn embed_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    format!("{}/{}", trimmed, EMBED_SUFFIX)
}

pub fn instagram_embed(url: &str) -> String {
    format!(
        concat!(
            r#"<div class="media-frame">"#,
            r#"<div class="frame-9x16">"#,
            r#"<iframe title="Instagram Reel" src="{src}" scrolling="no" "#,
            r#"allow="encrypted-media; fullscreen; picture-in-picture" loading="lazy">"#,
            "</iframe></div></div>"
        ),
        src = escape(&embed_url(url))
    )
}

/// One proof screenshot in a 9:16 frame. The first image of a set is
/// fetched eagerly so it paints with the section; the rest wait.
pub fn image_frame(image: &ProjectImage, priority: bool) -> String {
    let loading = if priority {
        r#"loading="eager" fetchpriority="high""#
    } else {
        r#"loading="lazy""#
    };
    format!(
        concat!(
            r#"<div class="media-frame">"#,
            r#"<div class="frame-9x16 frame-fill">"#,
            r#"<img src="{src}" alt="{alt}" {loading}>"#,
            "</div></div>"
        ),
        src = escape(&image.src),
        alt = escape(&image.alt),
        loading = loading
    )
}

/// Renders a project's media value into its display block: one frame
/// per embed URL or image, in catalog order.
pub fn media_block(media: &Media) -> String {
    match media {
        Media::Instagram { urls } => {
            let frames: String = urls.iter().map(|url| instagram_embed(url)).collect();
            let columns = if urls.len() > 1 { "media-grid-two" } else { "media-grid-one" };
            format!(r#"<div class="media-grid {}">{}</div>"#, columns, frames)
        }
        Media::Images { images } => {
            let frames: String = images
                .iter()
                .enumerate()
                .map(|(idx, image)| image_frame(image, idx == 0))
                .collect();
            format!(r#"<div class="media-grid media-grid-two">{}</div>"#, frames)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_appends_suffix() {
        assert_eq!(
            embed_url("https://example.com/p/X"),
            "https://example.com/p/X/embed/"
        );
    }

    #[test]
    fn embed_url_does_not_double_slash() {
        assert_eq!(
            embed_url("https://example.com/p/X/"),
            "https://example.com/p/X/embed/"
        );
    }

    #[test]
    fn embed_url_trims_whitespace() {
        assert_eq!(
            embed_url("  https://example.com/p/X/ "),
            "https://example.com/p/X/embed/"
        );
    }

    #[test]
    fn one_frame_per_embed_url() {
        let media = Media::Instagram {
            urls: vec![
                "https://www.instagram.com/reel/a/".to_string(),
                "https://www.instagram.com/reel/b/".to_string(),
            ],
        };
        let html = media_block(&media);
        assert_eq!(html.matches("<iframe").count(), 2);
        assert!(html.contains("media-grid-two"));
    }

    #[test]
    fn single_url_renders_one_frame() {
        let media = Media::Instagram {
            urls: vec!["https://www.instagram.com/reel/a/".to_string()],
        };
        let html = media_block(&media);
        assert_eq!(html.matches("<iframe").count(), 1);
        assert!(html.contains("media-grid-one"));
    }

    #[test]
    fn image_set_keeps_order_and_flags_first_for_priority() {
        let media = Media::Images {
            images: vec![
                ProjectImage::new("/work/one.png", "one"),
                ProjectImage::new("/work/two.png", "two"),
                ProjectImage::new("/work/three.png", "three"),
            ],
        };
        let html = media_block(&media);
        assert_eq!(html.matches("<img").count(), 3);
        assert_eq!(html.matches("fetchpriority").count(), 1);
        assert_eq!(html.matches(r#"loading="lazy""#).count(), 2);

        let one = html.find("/work/one.png").unwrap();
        let two = html.find("/work/two.png").unwrap();
        let three = html.find("/work/three.png").unwrap();
        assert!(one < two && two < three);

        // only the first frame is eager
        let first_frame_end = html.find("</div></div>").unwrap();
        assert!(html[..first_frame_end].contains("fetchpriority"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let media = Media::Instagram {
            urls: vec!["https://www.instagram.com/reel/a".to_string()],
        };
        assert_eq!(media_block(&media), media_block(&media));
    }
}
