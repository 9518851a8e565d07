use serde::{Deserialize, Serialize};

/// One result highlight shown in a project's results row. `value` is a
/// short display string, not a number: "4M+", "78%", and "Drove" are
/// all valid values.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ResultItem {
    pub value: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectImage {
    pub src: String,
    pub alt: String,
}

/// What a project shows in its "My work" column. The tag decides the
/// shape: embedded posts carry post URLs, proof screenshots carry
/// ordered image references. One frame is rendered per URL or image,
/// in the order given here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Media {
    Instagram { urls: Vec<String> },
    Images { images: Vec<ProjectImage> },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    /// Anchor id on the work page; must be unique across the catalog
    /// since external links address `/work#slug`.
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub role: String,
    pub worked_on: String,
    pub did: Vec<String>,
    pub results: Vec<ResultItem>,
    pub media: Media,
}

impl ResultItem {
    pub fn new(value: &str, label: &str) -> Self {
        ResultItem {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

impl ProjectImage {
    pub fn new(src: &str, alt: &str) -> Self {
        ProjectImage {
            src: src.to_string(),
            alt: alt.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_serializes_with_type_tag() {
        let media = Media::Instagram {
            urls: vec!["https://www.instagram.com/reel/abc/".to_string()],
        };
        let json = serde_json::to_value(&media).unwrap();
        assert_eq!(json["type"], "instagram");
        assert_eq!(json["urls"][0], "https://www.instagram.com/reel/abc/");
    }

    #[test]
    fn media_roundtrips_images_variant() {
        let media = Media::Images {
            images: vec![ProjectImage::new("/work/image1.png", "Proof 1")],
        };
        let json = serde_json::to_string(&media).unwrap();
        let back: Media = serde_json::from_str(&json).unwrap();
        assert_eq!(back, media);
    }

    #[test]
    fn media_rejects_unknown_tag() {
        let raw = r#"{ "type": "vimeo", "urls": [] }"#;
        assert!(serde_json::from_str::<Media>(raw).is_err());
    }
}
