use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Result},
};

use crate::types::{Media, Project, ProjectImage, ResultItem};

/// The shipped catalog. `data/projects.json` is seeded from this on
/// first launch so the served content can be edited without a rebuild.
pub fn built_in_catalog() -> Vec<Project> {
    vec![
        Project {
            slug: "polymarket".to_string(),
            name: "Polymarket".to_string(),
            tagline: "Prediction market platform for real-world events.".to_string(),
            role: "UGC Creator".to_string(),
            worked_on: "Developed and executed a short-form video strategy to drive \
                        brand awareness and user acquisition."
                .to_string(),
            did: vec![
                "Created 30+ high-hook UGC videos explaining complex prediction markets"
                    .to_string(),
                "Analyzed retention metrics to iterate on hook styles".to_string(),
                "Managed community engagement across Instagram and TikTok".to_string(),
            ],
            results: vec![
                ResultItem::new("4M+", "total organic views across all platforms"),
                ResultItem::new("78%", "average watch time across 30+ videos"),
                ResultItem::new("Drove", "100+ verified new user signups"),
            ],
            media: Media::Instagram {
                urls: vec![
                    "https://www.instagram.com/reel/DS5l1PnEvRT/".to_string(),
                    "https://www.instagram.com/reel/DTqEQB3keMW/".to_string(),
                ],
            },
        },
        Project {
            slug: "wispr-flow".to_string(),
            name: "Wispr Flow".to_string(),
            tagline: "AI-powered productivity tool for modern professionals.".to_string(),
            role: "UGC Creator".to_string(),
            worked_on: "Focused on positioning Wispr Flow as the essential tool for \
                        creators and professionals who think out loud."
                .to_string(),
            did: vec![
                "Created funny, relatable short-form videos that made Wispr's product \
                 feel approachable and shareable"
                    .to_string(),
                "A/B tested captions and CTAs to optimize conversion rate".to_string(),
                "Collaborated with the product team to highlight key features based on \
                 user feedback"
                    .to_string(),
            ],
            results: vec![
                ResultItem::new("12M+", "total views within the two month campaign"),
                ResultItem::new(
                    "15%",
                    "increase in weekly active users during the peak content period",
                ),
                ResultItem::new("100+", "signups from a single high-performing video"),
            ],
            media: Media::Images {
                images: vec![
                    ProjectImage::new("/work/image1.png", "Wispr proof screenshot 1"),
                    ProjectImage::new("/work/image2.png", "Wispr proof screenshot 2"),
                ],
            },
        },
    ]
}

pub fn load_from_storage(local_projects_path: &str) -> Result<Vec<Project>> {
    match File::open(local_projects_path) {
        Ok(local_projects_file) => {
            let mut buffer: Vec<u8> = Vec::new();
            let mut reader = BufReader::new(local_projects_file);
            match reader.read_to_end(&mut buffer) {
                Ok(size) => {
                    println!("Local projects data size: {}", size);
                    match serde_json::from_slice::<Vec<Project>>(&buffer) {
                        Ok(local_projects_data) => {
                            println!("Successfully loaded local projects data.");
                            Ok(local_projects_data)
                        }
                        Err(error) => {
                            eprintln!("Local projects data structure is incorrect: {}", error);
                            Err(error.into())
                        }
                    }
                }
                Err(error) => {
                    eprintln!("Local projects data could not be read: {}", error);
                    Err(error)
                }
            }
        }
        Err(error) => {
            eprintln!("Error opening local projects data file: {}", error);
            Err(error)
        }
    }
}

pub fn write_local_db(path: &str, projects: Vec<Project>) -> Result<Vec<Project>> {
    match File::create(path) {
        Ok(file) => {
            let writer = BufWriter::new(file);
            let _ = serde_json::to_writer_pretty(writer, &projects);
            Ok(projects)
        }
        Err(error) => {
            eprintln!("Could not create local projects database: {}", error);
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let catalog = built_in_catalog();
        let slugs: HashSet<&str> = catalog.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.len(), catalog.len());
    }

    #[test]
    fn every_project_has_exactly_one_media_shape() {
        for project in built_in_catalog() {
            match &project.media {
                Media::Instagram { urls } => assert!(!urls.is_empty()),
                Media::Images { images } => assert!(!images.is_empty()),
            }
        }
    }

    #[test]
    fn polymarket_carries_both_embed_urls() {
        let catalog = built_in_catalog();
        let polymarket = catalog.iter().find(|p| p.slug == "polymarket").unwrap();
        match &polymarket.media {
            Media::Instagram { urls } => assert_eq!(urls.len(), 2),
            Media::Images { .. } => panic!("polymarket media should be instagram"),
        }
    }

    #[test]
    fn catalog_survives_json_roundtrip() {
        let catalog = built_in_catalog();
        let json = serde_json::to_string_pretty(&catalog).unwrap();
        let back: Vec<Project> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
