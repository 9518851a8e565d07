use crate::render::escape;
use chrono::{Datelike, Local};

const SITE_NAME: &str = "Diego Limo";

const NAV_ITEMS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Work", "/work"),
    ("Growth", "/growth"),
    ("Contact", "/contact"),
];

pub fn site_header(active_href: &str) -> String {
    let links: String = NAV_ITEMS
        .iter()
        .map(|(label, href)| {
            let class = if *href == active_href {
                r#" class="nav-active""#
            } else {
                ""
            };
            format!(r#"<a href="{}"{}>{}</a>"#, href, class, label)
        })
        .collect();
    format!(
        concat!(
            r#"<header class="site-header"><div class="container header-row">"#,
            r#"<a class="brand" href="/">{name}</a>"#,
            r#"<nav class="site-nav">{links}</nav>"#,
            "</div></header>"
        ),
        name = SITE_NAME,
        links = links
    )
}

pub fn site_footer() -> String {
    format!(
        concat!(
            r#"<footer class="site-footer"><div class="container">"#,
            "&copy; {} {}",
            "</div></footer>"
        ),
        Local::now().year(),
        SITE_NAME
    )
}

/// Wraps a page body in the full document shell: head, sticky header,
/// footer. `active_href` highlights the current nav item.
pub fn document(title: &str, active_href: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title>",
            r#"<link rel="stylesheet" href="/styles.css">"#,
            "</head><body>{header}<main>{body}</main>{footer}</body></html>"
        ),
        title = escape(title),
        header = site_header(active_href),
        body = body,
        footer = site_footer()
    )
}

pub const STYLESHEET: &str = r#":root {
  --accent: #4f46e5;
  --accent-soft: #eff6ff;
  --accent-text: #2563eb;
  --ink: #000;
  --paper: #fff;
  --card-bg: #f5f5f7;
  --hairline: rgba(0, 0, 0, 0.1);
}

* { box-sizing: border-box; }

body {
  margin: 0;
  background: var(--paper);
  color: var(--ink);
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  line-height: 1.6;
}

.container { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }

.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  border-bottom: 1px solid rgba(0, 0, 0, 0.05);
  background: rgba(255, 255, 255, 0.8);
  backdrop-filter: blur(8px);
}
.header-row { display: flex; align-items: center; justify-content: space-between; padding: 1.25rem 1.5rem; }
.brand { font-size: 18px; font-weight: 600; color: var(--ink); text-decoration: none; }
.site-nav { display: flex; gap: 2rem; font-size: 16px; }
.site-nav a { color: rgba(0, 0, 0, 0.7); text-decoration: none; transition: color 0.15s; }
.site-nav a:hover { color: var(--ink); }
.site-nav a.nav-active { color: var(--accent); }

section { padding: 4rem 0; }
.section-divider { border-top: 1px solid rgba(0, 0, 0, 0.05); }

h1 { font-size: 48px; font-weight: 600; letter-spacing: -0.02em; line-height: 1.05; margin: 0; }
h2 { font-size: 40px; font-weight: 600; letter-spacing: -0.02em; margin: 0; }
.lede { margin-top: 1rem; max-width: 42rem; font-size: 20px; color: rgba(0, 0, 0, 0.55); }
.kicker { font-size: 13px; font-weight: 600; letter-spacing: 0.22em; color: rgba(0, 0, 0, 0.4); }

.pill { font-size: 13px; letter-spacing: 0.18em; color: var(--accent); }

.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border-radius: 0.75rem;
  padding: 0.75rem 1.25rem;
  font-size: 15px;
  font-weight: 500;
  text-decoration: none;
  transition: opacity 0.15s, background 0.15s;
}
.btn-primary { background: var(--accent); color: #fff; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); }
.btn-primary:hover { opacity: 0.95; }
.btn-ghost { background: #fff; color: var(--ink); border: 1px solid var(--hairline); }
.btn-ghost:hover { background: rgba(0, 0, 0, 0.02); }
.btn-row { margin-top: 2.5rem; display: flex; flex-wrap: wrap; gap: 1rem; }

.card {
  display: block;
  border-radius: 1.5rem;
  border: 1px solid var(--hairline);
  background: #fff;
  padding: 2rem;
  box-shadow: 0 1px 0 rgba(0, 0, 0, 0.04);
  text-decoration: none;
  color: inherit;
}
.card-heading { font-size: 18px; font-weight: 600; color: rgba(0, 0, 0, 0.9); }

.soft-card {
  border-radius: 1.5rem;
  border: 1px solid var(--hairline);
  background: var(--card-bg);
  padding: 1.5rem;
  box-shadow: 0 1px 0 rgba(0, 0, 0, 0.04);
  transition: transform 0.2s ease-out, box-shadow 0.2s ease-out;
}
.soft-card:hover { transform: scale(1.04); box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08); }

.media-grid { margin-top: 1rem; display: grid; gap: 1.5rem; }
.media-grid-one { grid-template-columns: 1fr; }
.media-grid-two { grid-template-columns: repeat(2, 1fr); }
.media-frame { overflow: hidden; border-radius: 1.5rem; border: 1px solid var(--hairline); background: #fff; box-shadow: 0 1px 0 rgba(0, 0, 0, 0.04); }
.frame-9x16 { position: relative; aspect-ratio: 9 / 16; width: 100%; }
.frame-9x16 iframe { position: absolute; inset: 0; width: 100%; height: 100%; border: 0; }
.frame-fill { background: rgba(0, 0, 0, 0.03); }
.frame-fill img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: contain; }

.checklist { margin: 1.25rem 0 0; padding: 0; list-style: none; }
.checklist li { display: flex; gap: 1rem; margin-top: 1.25rem; font-size: 18px; color: rgba(0, 0, 0, 0.7); }
.check-icon { margin-top: 3px; height: 1.25rem; width: 1.25rem; flex-shrink: 0; color: var(--accent-text); }

.results-row { margin-top: 3rem; }
.results-grid { margin-top: 1.5rem; display: grid; gap: 1.75rem; grid-template-columns: repeat(3, 1fr); }
.result-value { font-size: 34px; font-weight: 600; letter-spacing: -0.02em; color: var(--accent-text); }
.result-label { margin-top: 0.5rem; font-size: 16px; color: rgba(0, 0, 0, 0.55); }

.teaser-grid { margin-top: 2.5rem; display: grid; gap: 1.5rem; grid-template-columns: repeat(2, 1fr); }
.teaser-card:hover { box-shadow: 0 6px 30px rgba(0, 0, 0, 0.06); }
.teaser-name { font-size: 26px; font-weight: 600; letter-spacing: -0.02em; }
.teaser-tagline { margin-top: 0.5rem; font-size: 18px; color: rgba(0, 0, 0, 0.6); }
.teaser-highlight { margin-top: 1.5rem; display: inline-flex; border-radius: 9999px; background: var(--accent-soft); padding: 0.5rem 1.25rem; font-size: 15px; font-weight: 500; color: var(--accent-text); }
.teaser-cta { margin-top: 2rem; font-size: 16px; font-weight: 500; color: rgba(0, 0, 0, 0.8); }
.teaser-card:hover .arrow { margin-left: 0.25rem; }

.stat-grid { margin-top: 2rem; display: grid; gap: 1.5rem; grid-template-columns: repeat(4, 1fr); }
.stat-card { background: #fff; }
.stat-value { font-size: 36px; font-weight: 600; color: var(--accent); }
.stat-label { margin-top: 0.25rem; font-size: 14px; color: rgba(0, 0, 0, 0.65); }

.logo-row { margin-top: 2rem; display: flex; flex-wrap: wrap; align-items: center; gap: 2.5rem 2.5rem; }
.logo-row img { height: 2.5rem; width: 10.5rem; object-fit: contain; transition: transform 0.2s ease-out; }
.logo-row a:hover img { transform: scale(1.1) translateY(-1px); }

.two-col { display: grid; gap: 2.5rem; grid-template-columns: repeat(2, 1fr); align-items: center; }
.work-section { padding: 4rem 0; scroll-margin-top: 7rem; border-top: 1px solid var(--hairline); }
.work-section:first-of-type { border-top: 0; }
.work-header { display: flex; align-items: flex-end; justify-content: space-between; gap: 1rem; }
.work-name { font-size: 40px; font-weight: 600; letter-spacing: -0.02em; margin: 0; }
.work-tagline { margin-top: 0.5rem; font-size: 18px; color: rgba(0, 0, 0, 0.6); }
.work-role { text-align: right; }
.work-rule { margin-top: 2rem; height: 1px; width: 100%; background: var(--hairline); }
.work-body { margin-top: 2.5rem; display: grid; gap: 3rem; grid-template-columns: 1.1fr 0.9fr; }
.block-heading { font-size: 18px; font-weight: 600; color: rgba(0, 0, 0, 0.9); }
.block-copy { margin-top: 0.75rem; font-size: 18px; color: rgba(0, 0, 0, 0.65); }

.aside-metric { margin-top: 1.75rem; }
.aside-metric:first-child { margin-top: 0; }
.metric-name { font-size: 18px; font-weight: 600; }
.metric-note { margin-top: 0.25rem; font-size: 16px; color: rgba(0, 0, 0, 0.6); }

.hero-figure { position: relative; margin: 0 auto; height: 20rem; width: 22.5rem; max-width: 100%; }
.hero-layer { position: absolute; inset: 0; border-radius: 1.5rem; }
.hero-layer-back { background: linear-gradient(140deg, rgba(79, 70, 229, 0.18), rgba(79, 70, 229, 0.05)); transform: rotate(-4deg); }
.hero-layer-mid { background: linear-gradient(140deg, rgba(79, 70, 229, 0.1), rgba(79, 70, 229, 0.04)); transform: rotate(6deg); }
.hero-layer-front { border: 1px solid var(--hairline); background: var(--card-bg); padding: 1.5rem; }
.hero-photo { height: 100%; width: 100%; overflow: hidden; border-radius: 1rem; }
.hero-photo img { height: 100%; width: 100%; object-fit: cover; }

.figure-16x10 { position: relative; margin-top: 1.5rem; aspect-ratio: 16 / 10; width: 100%; overflow: hidden; border-radius: 1rem; border: 1px solid var(--hairline); background: var(--card-bg); }
.figure-16x10 img, .figure-5x6 img { width: 100%; height: 100%; object-fit: cover; }
.figure-5x6 { position: relative; aspect-ratio: 5 / 6; width: 100%; overflow: hidden; border-radius: 1rem; }

.site-footer { border-top: 1px solid rgba(0, 0, 0, 0.05); padding: 2.5rem 0; font-size: 14px; color: rgba(0, 0, 0, 0.5); }

@media (max-width: 768px) {
  h1 { font-size: 40px; }
  .site-nav { display: none; }
  .two-col, .work-body, .teaser-grid, .results-grid, .media-grid-two { grid-template-columns: 1fr; }
  .stat-grid { grid-template-columns: repeat(2, 1fr); }
}
"#;
