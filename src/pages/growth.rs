use crate::render::layout::document;

const METRICS: [(&str, &str); 4] = [
    ("Watch time", "The ultimate signal of value."),
    ("Retention", "Where are we losing people?"),
    ("Engagement", "Shares and saves over likes."),
    ("Conversions", "Real users, not just views."),
];

fn essay() -> String {
    concat!(
        "<div>",
        r#"<h2 style="font-size:30px">My growth philosophy</h2>"#,
        r#"<div class="block-copy" style="margin-top:1.25rem">"#,
        "<p>I treat content like a system. I don't believe in &quot;going viral&quot; ",
        "by accident. Every post is a test designed to gather data on what resonates ",
        "with a specific audience.</p>",
        "<p>My approach is centered on high-volume experimentation. By testing ",
        "multiple hooks, formats, and angles, I can quickly identify the ",
        "&quot;winning&quot; combination that drives the highest retention and ",
        "conversion.</p>",
        "</div>",
        r#"<h2 style="font-size:30px;margin-top:4rem">How I build content</h2>"#,
        r#"<div class="block-copy" style="margin-top:1.25rem">"#,
        "<p>Everything starts with the <strong>Hook</strong>. If you can't stop the ",
        "scroll in the first 1.5 seconds, the rest of the video doesn't matter.</p>",
        "<p>After the hook, I focus on <strong>Platform-native Storytelling</strong>. ",
        "Content shouldn't feel like an ad; it should feel like a recommendation from ",
        "a friend. This means using native fonts, trending but relevant audio, and ",
        "fast-paced editing that matches the user's attention span.</p>",
        "</div>",
        r#"<h2 style="font-size:30px;margin-top:4rem">How I test and improve</h2>"#,
        r#"<div class="block-copy" style="margin-top:1.25rem">"#,
        "<p>I iterate based on <strong>Watch Time</strong>. If a video has a sharp ",
        "drop-off at the 5-second mark, I rewrite the intro. If it has high retention ",
        "but low engagement, I test different <strong>Calls to Action (CTAs)</strong>.</p>",
        "<p>Every week, I review my content, identifying patterns in the top 10% and ",
        "bottom 10% of performers.</p>",
        "</div>",
        "</div>"
    )
    .to_string()
}

fn metrics_aside() -> String {
    let rows: String = METRICS
        .iter()
        .map(|(name, note)| {
            format!(
                concat!(
                    r#"<div class="aside-metric">"#,
                    r#"<div class="metric-name">{}</div>"#,
                    r#"<div class="metric-note">{}</div>"#,
                    "</div>"
                ),
                name, note
            )
        })
        .collect();
    format!(
        concat!(
            r#"<aside><div class="card">"#,
            r#"<div class="kicker">WHAT I LOOK AT</div>"#,
            r#"<div style="margin-top:1.5rem">{}</div>"#,
            "</div></aside>"
        ),
        rows
    )
}

pub fn render() -> String {
    let body = format!(
        concat!(
            r#"<div class="container">"#,
            "<section><h1>Growth playbook</h1>",
            r#"<p class="lede">How I think about content, experimentation, and traction.</p>"#,
            "</section>",
            r#"<section class="two-col" style="align-items:start;grid-template-columns:1.35fr 0.65fr">"#,
            "{essay}{aside}",
            "</section>",
            "</div>"
        ),
        essay = essay(),
        aside = metrics_aside()
    );
    document("Growth — Diego Limo", "/growth", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aside_lists_all_four_metrics() {
        let html = render();
        for (name, _) in METRICS {
            assert!(html.contains(name), "missing metric {}", name);
        }
    }

    #[test]
    fn essay_sections_are_present() {
        let html = render();
        assert!(html.contains("My growth philosophy"));
        assert!(html.contains("How I build content"));
        assert!(html.contains("How I test and improve"));
    }
}
