use crate::render::components::{
    button_ghost, button_primary, pill, soft_card, stat_card, teaser_card,
};
use crate::render::layout::document;

const TRUSTED_BY: [(&str, &str, &str); 5] = [
    ("/logos/polymarket.png", "Polymarket", "https://polymarket.com"),
    ("/logos/wispr.jpg", "Wispr Flow", "https://wispr.ai"),
    ("/logos/turbo.jpg", "Turbo AI", "https://turbo.ai"),
    ("/logos/series.png", "Series", "https://series.so"),
    ("/logos/swsh.png", "SWSH", "https://www.joinswsh.com"),
];

fn hero() -> String {
    format!(
        concat!(
            r#"<section class="container"><div class="two-col">"#,
            "<div>",
            "<h1>I turn attention into growth<br>for modern brands.</h1>",
            r#"<div style="margin-top:1.25rem">{pill}</div>"#,
            r#"<div class="block-copy" style="margin-top:2rem">"#,
            "<p>Hey, I&rsquo;m Diego.</p>",
            "<p>A globally raised, American-Peruvian marketing creator.</p>",
            "<p>I work with startups and emerging products creating short-form ",
            "content that has generated millions of views.</p>",
            "</div>",
            r#"<div class="btn-row">{view_work}{resume}{contact}</div>"#,
            "</div>",
            r#"<div class="hero-figure">"#,
            r#"<div class="hero-layer hero-layer-back"></div>"#,
            r#"<div class="hero-layer hero-layer-mid"></div>"#,
            r#"<div class="hero-layer hero-layer-front">"#,
            r#"<div class="hero-photo"><img src="/images/image1.png" alt="Profile photo" "#,
            r#"loading="eager" fetchpriority="high"></div>"#,
            "</div></div>",
            "</div></section>"
        ),
        pill = pill("MARKETING • GROWTH • UGC • ANALYTICS"),
        view_work = button_primary("/work", "View My Work"),
        resume = button_ghost("/resume/Diego_Limo_Resume.pdf", "Resume"),
        contact = button_ghost("/contact", "Contact")
    )
}

fn about() -> String {
    let profile_card = soft_card(
        "",
        concat!(
            r#"<div class="figure-5x6">"#,
            r#"<img src="/images/image2.png" alt="Profile" loading="lazy">"#,
            "</div>"
        ),
    );
    let facts_card = soft_card(
        "",
        concat!(
            r#"<div class="block-copy">"#,
            "<div><strong>Location:</strong> Based in the U.S. | Open to relocate</div>",
            "<div><strong>Languages:</strong> English, Spanish, Portuguese ",
            "(intermediate), Japanese (beginner)</div>",
            "</div>"
        ),
    );
    format!(
        concat!(
            r#"<section class="container"><div class="two-col" style="align-items:start">"#,
            "<div>",
            "<h2>About</h2>",
            r#"<div class="block-copy" style="margin-top:1.5rem">"#,
            "<p>I&rsquo;m an <strong>International Business student at Temple ",
            "University</strong> with experience across startups, sports ",
            "partnerships, and digital media.</p>",
            "<p>I&rsquo;ve lived in five countries and traveled to 45+, giving me a ",
            "<strong>global perspective</strong> and <strong>strong adaptability",
            "</strong>. I&rsquo;m driven by building and marketing ideas that connect ",
            "people across cultures.</p>",
            "</div>",
            r#"<h3 style="margin-top:2.5rem">Sports &amp; Teamwork</h3>"#,
            r#"<p class="block-copy">I&rsquo;ve played <strong>semi-pro soccer</strong>, "#,
            "which taught me discipline, communication, and composure under pressure.</p>",
            r#"<div class="figure-16x10"><img src="/images/soccer.png" alt="Soccer" loading="lazy"></div>"#,
            "</div>",
            r#"<div style="display:grid;gap:2rem">{profile}{facts}</div>"#,
            "</div></section>"
        ),
        profile = profile_card,
        facts = facts_card
    )
}

fn impact() -> String {
    let stats = [
        ("16M+", "total views across product campaigns"),
        ("4M+", "views generated in first month at Polymarket"),
        ("12M+", "views in two months for Wispr Flow"),
        ("Multiple Videos", "above 100K views"),
    ];
    let cards: String = stats
        .iter()
        .map(|(value, label)| stat_card(value, label))
        .collect();
    let logos: String = TRUSTED_BY
        .iter()
        .map(|(src, alt, href)| {
            format!(
                concat!(
                    r#"<a href="{href}" target="_blank" rel="noreferrer" aria-label="{alt}">"#,
                    r#"<img src="{src}" alt="{alt}" loading="lazy">"#,
                    "</a>"
                ),
                href = href,
                alt = alt,
                src = src
            )
        })
        .collect();
    format!(
        concat!(
            r#"<section class="container">"#,
            r#"<h2 style="font-size:32px">Impact: Numbers That Matter</h2>"#,
            r#"<div class="stat-grid">{cards}</div>"#,
            r#"<div style="margin-top:3rem"><div class="card-heading">Trusted by</div>"#,
            r#"<div class="logo-row">{logos}</div></div>"#,
            "</section>"
        ),
        cards = cards,
        logos = logos
    )
}

fn selected_work() -> String {
    format!(
        concat!(
            r#"<section class="container">"#,
            r#"<div class="kicker">SELECTED WORK</div>"#,
            r#"<h2 style="margin-top:0.75rem">Proof of work.</h2>"#,
            r#"<div class="teaser-grid">{first}{second}</div>"#,
            "</section>"
        ),
        first = teaser_card(
            "polymarket",
            "Polymarket",
            "Prediction market platform for real-world events.",
            "Generated 4M+ views in 30 days",
        ),
        second = teaser_card(
            "wispr-flow",
            "Wispr Flow",
            "AI-powered productivity tool for modern professionals.",
            "Drove 100+ signups from a single video",
        )
    )
}

pub fn render() -> String {
    let body = format!(
        concat!(
            "{hero}",
            r#"<div class="section-divider"></div>"#,
            "{about}",
            r#"<div class="section-divider"></div>"#,
            "{impact}",
            r#"<div class="section-divider"></div>"#,
            "{selected_work}"
        ),
        hero = hero(),
        about = about(),
        impact = impact(),
        selected_work = selected_work()
    );
    document("Diego Limo — Marketing & Growth", "/", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_links_to_work_resume_and_contact() {
        let html = render();
        assert!(html.contains(r#"href="/work""#));
        assert!(html.contains(r#"href="/resume/Diego_Limo_Resume.pdf""#));
        assert!(html.contains(r#"href="/contact""#));
    }

    #[test]
    fn teasers_deep_link_into_work_sections() {
        let html = render();
        assert!(html.contains(r##"href="/work#polymarket""##));
        assert!(html.contains(r##"href="/work#wispr-flow""##));
    }

    #[test]
    fn impact_grid_shows_all_four_stats() {
        let html = render();
        assert_eq!(html.matches("stat-value").count(), 4);
        assert!(html.contains("16M+"));
    }

    #[test]
    fn trusted_by_lists_every_logo() {
        let html = render();
        for (src, _, _) in TRUSTED_BY {
            assert!(html.contains(src), "missing logo {}", src);
        }
    }
}
