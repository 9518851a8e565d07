use crate::render::layout::document;

pub fn render() -> String {
    let body = concat!(
        r#"<div class="container"><section>"#,
        "<h1>Contact</h1>",
        r#"<p class="block-copy" style="margin-top:1.5rem">"#,
        "Let&rsquo;s connect &mdash; whether it&rsquo;s work, collaboration, or ideas.</p>",
        r#"<div class="block-copy" style="margin-top:2rem">"#,
        "<p>Email: <strong>diegolimo05@gmail.com</strong></p>",
        r#"<p>LinkedIn: <a href="https://www.linkedin.com/in/diegolimo" target="_blank" "#,
        r#"rel="noreferrer">linkedin.com/in/diegolimo</a></p>"#,
        "</div>",
        r#"<a href="/" style="display:inline-block;margin-top:2.5rem;color:rgba(0,0,0,0.6)">"#,
        "&larr; Back home</a>",
        "</section></div>"
    );
    document("Contact — Diego Limo", "/contact", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_page_lists_email_and_linkedin() {
        let html = render();
        assert!(html.contains("diegolimo05@gmail.com"));
        assert!(html.contains("linkedin.com/in/diegolimo"));
    }

    #[test]
    fn back_home_link_present() {
        let html = render();
        assert!(html.contains(r#"href="/""#));
    }
}
