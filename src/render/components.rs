use crate::render::escape;
use crate::types::ResultItem;

pub fn pill(text: &str) -> String {
    format!(r#"<span class="pill">{}</span>"#, escape(text))
}

pub fn button_primary(href: &str, label: &str) -> String {
    format!(
        r#"<a class="btn btn-primary" href="{}">{}</a>"#,
        escape(href),
        escape(label)
    )
}

/// Ghost buttons open external targets (and the resume PDF) in a new
/// tab, same-site routes in place.
pub fn button_ghost(href: &str, label: &str) -> String {
    let is_external =
        href.starts_with("http") || href.starts_with("mailto:") || href.ends_with(".pdf");
    let target = if is_external {
        r#" target="_blank" rel="noreferrer""#
    } else {
        ""
    };
    format!(
        r#"<a class="btn btn-ghost" href="{}"{}>{}</a>"#,
        escape(href),
        target,
        escape(label)
    )
}

pub fn soft_card(class: &str, inner: &str) -> String {
    if class.is_empty() {
        format!(r#"<div class="soft-card">{}</div>"#, inner)
    } else {
        format!(r#"<div class="soft-card {}">{}</div>"#, class, inner)
    }
}

pub fn check_icon() -> &'static str {
    concat!(
        r#"<svg class="check-icon" viewBox="0 0 24 24" fill="none" aria-hidden="true">"#,
        r#"<path d="M20 6L9 17l-5-5" stroke="currentColor" stroke-width="2.2" "#,
        r#"stroke-linecap="round" stroke-linejoin="round"/></svg>"#
    )
}

pub fn checklist(items: &[String]) -> String {
    let rows: String = items
        .iter()
        .map(|item| {
            format!(
                r#"<li>{}<span>{}</span></li>"#,
                check_icon(),
                escape(item)
            )
        })
        .collect();
    format!(r#"<ul class="checklist">{}</ul>"#, rows)
}

/// Full-width results card, one column per highlight.
pub fn results_row(results: &[ResultItem]) -> String {
    let cells: String = results
        .iter()
        .map(|r| {
            format!(
                concat!(
                    r#"<div class="result-cell">"#,
                    r#"<div class="result-value">{}</div>"#,
                    r#"<div class="result-label">{}</div>"#,
                    "</div>"
                ),
                escape(&r.value),
                escape(&r.label)
            )
        })
        .collect();
    format!(
        concat!(
            r#"<div class="card results-row">"#,
            r#"<div class="card-heading">Results</div>"#,
            r#"<div class="results-grid">{}</div>"#,
            "</div>"
        ),
        cells
    )
}

/// Teaser card on the home page deep-linking into a work section.
pub fn teaser_card(slug: &str, name: &str, tagline: &str, highlight: &str) -> String {
    format!(
        concat!(
            r#"<a class="card teaser-card" href="/work#{slug}">"#,
            r#"<div class="teaser-name">{name}</div>"#,
            r#"<div class="teaser-tagline">{tagline}</div>"#,
            r#"<div class="teaser-highlight">{highlight}</div>"#,
            r#"<div class="teaser-cta">View project <span class="arrow">&rarr;</span></div>"#,
            "</a>"
        ),
        slug = escape(slug),
        name = escape(name),
        tagline = escape(tagline),
        highlight = escape(highlight)
    )
}

pub fn stat_card(value: &str, label: &str) -> String {
    soft_card(
        "stat-card",
        &format!(
            r#"<div class="stat-value">{}</div><div class="stat-label">{}</div>"#,
            escape(value),
            escape(label)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_button_opens_pdf_in_new_tab() {
        let html = button_ghost("/resume/Diego_Limo_Resume.pdf", "Resume");
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noreferrer""#));
    }

    #[test]
    fn ghost_button_keeps_internal_routes_in_place() {
        let html = button_ghost("/contact", "Contact");
        assert!(!html.contains("target"));
    }

    #[test]
    fn checklist_renders_one_row_per_item() {
        let items = vec!["First".to_string(), "Second".to_string()];
        let html = checklist(&items);
        assert_eq!(html.matches("<li>").count(), 2);
        assert_eq!(html.matches("check-icon").count(), 2);
    }

    #[test]
    fn results_row_renders_all_highlights() {
        let results = vec![
            ResultItem::new("4M+", "views"),
            ResultItem::new("Drove", "signups"),
        ];
        let html = results_row(&results);
        assert_eq!(html.matches("result-cell").count(), 2);
        assert!(html.contains("4M+"));
        assert!(html.contains("Drove"));
    }

    #[test]
    fn teaser_card_links_to_work_anchor() {
        let html = teaser_card("polymarket", "Polymarket", "tagline", "highlight");
        assert!(html.contains(r##"href="/work#polymarket""##));
    }
}
