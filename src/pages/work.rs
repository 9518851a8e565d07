use crate::render::components::{checklist, results_row};
use crate::render::layout::document;
use crate::render::media::media_block;
use crate::render::escape;
use crate::types::Project;

/// One anchored section per catalog entry, in catalog order. The
/// anchor id is the project slug so `/work#slug` deep links resolve.
fn project_section(project: &Project) -> String {
    format!(
        concat!(
            r#"<section id="{slug}" class="work-section">"#,
            r#"<div class="work-header">"#,
            r#"<div><h3 class="work-name">{name}</h3>"#,
            r#"<p class="work-tagline">{tagline}</p></div>"#,
            r#"<div class="work-role"><div class="kicker">ROLE</div>"#,
            r#"<div class="block-copy">{role}</div></div>"#,
            "</div>",
            r#"<div class="work-rule"></div>"#,
            r#"<div class="work-body">"#,
            "<div>",
            r#"<div class="block-heading">What I worked on</div>"#,
            r#"<p class="block-copy">{worked_on}</p>"#,
            r#"<div class="block-heading" style="margin-top:2.5rem">What I did</div>"#,
            "{did}",
            "</div>",
            "<div>",
            r#"<div class="block-heading">My work</div>"#,
            "{media}",
            "</div>",
            "</div>",
            "{results}",
            "</section>"
        ),
        slug = escape(&project.slug),
        name = escape(&project.name),
        tagline = escape(&project.tagline),
        role = escape(&project.role),
        worked_on = escape(&project.worked_on),
        did = checklist(&project.did),
        media = media_block(&project.media),
        results = results_row(&project.results)
    )
}

pub fn render(projects: &[Project]) -> String {
    let sections: String = projects.iter().map(project_section).collect();
    let body = format!(
        concat!(
            r#"<div class="container">"#,
            "<section><h1>Work</h1>",
            r#"<p class="lede">A selection of projects where I&rsquo;ve helped products "#,
            "drive attention, engagement, and growth.</p></section>",
            "{sections}",
            "</div>"
        ),
        sections = sections
    );
    document("Work — Diego Limo", "/work", &body)
}
