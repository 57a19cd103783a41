//! Print document assembly.
//!
//! Wraps a rendered HTML fragment into a complete, self-contained page
//! suitable for handing to a print surface or a PDF export target. This
//! is pure template substitution: the builder never inspects or
//! re-renders the fragment it embeds.

/// Fixed stylesheet embedded in every print document: serif body text,
/// monospace code, bordered tables, and `@media print` page rules.
const PAGE_STYLE: &str = r"
    @import url('https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;600&family=Newsreader:wght@400;600;700&display=swap');
    *, *::before, *::after { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: 'Newsreader', Georgia, serif;
      font-size: 15px;
      line-height: 1.75;
      color: #1a1a1a;
      padding: 48px 64px;
      max-width: 900px;
      margin: 0 auto;
    }
    h1 { font-size: 2.2em; font-weight: 700; margin-bottom: 8px; border-bottom: 3px solid #F59E0B; padding-bottom: 12px; }
    h2 { font-size: 1.4em; font-weight: 600; margin: 32px 0 12px; border-left: 4px solid #F59E0B; padding-left: 12px; }
    h3 { font-size: 1.1em; font-weight: 600; margin: 20px 0 8px; color: #333; }
    h4 { font-size: .88em; font-weight: 600; margin: 14px 0 6px; text-transform: uppercase; letter-spacing: .06em; color: #666; }
    p  { margin-bottom: 12px; }
    code {
      font-family: 'JetBrains Mono', monospace;
      background: #f4f4f4;
      padding: 2px 6px;
      border-radius: 3px;
      font-size: .84em;
    }
    pre {
      font-family: 'JetBrains Mono', monospace;
      background: #1a1a1a;
      color: #e2e8f0;
      padding: 20px;
      border-radius: 8px;
      overflow: auto;
      font-size: .84em;
      margin: 16px 0;
      line-height: 1.55;
    }
    pre code { background: none; padding: 0; color: inherit; }
    table { width: 100%; border-collapse: collapse; margin: 16px 0; font-size: .88em; }
    th { background: #f8f8f8; padding: 10px 14px; text-align: left; font-weight: 600; border: 1px solid #ddd; }
    td { padding: 9px 14px; border: 1px solid #ddd; vertical-align: top; }
    tr:nth-child(even) td { background: #fafafa; }
    ul, ol { margin: 12px 0 12px 24px; }
    li { margin-bottom: 4px; }
    hr { border: none; border-top: 1px solid #eee; margin: 24px 0; }
    strong { font-weight: 600; }
    @media print {
      body { padding: 24px 32px; }
      pre { break-inside: avoid; }
      h2  { break-before: auto; }
    }
  ";

/// Build a complete print-ready HTML document around `body_html`.
///
/// `title` and `version` land in the document `<title>` unescaped;
/// callers that accept untrusted values there are responsible for
/// escaping them first. The body fragment is embedded verbatim, exactly
/// once. Deterministic: identical inputs produce the identical string.
pub fn build_document(title: &str, version: &str, body_html: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n  \
         <meta charset=\"UTF-8\"/>\n  \
         <title>{title} {version} — API Docs</title>\n  \
         <style>{PAGE_STYLE}</style>\n\
         </head>\n\
         <body>{body_html}</body>\n\
         </html>"
    )
}

#[cfg(test)]
mod tests {
    use super::build_document;

    #[test]
    fn test_document_shape() {
        let doc = build_document("T", "v1", "<p>x</p>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert_eq!(doc.matches("<html").count(), 1);
        assert_eq!(doc.matches("</html>").count(), 1);
        assert!(doc.ends_with("</html>"));
    }

    #[test]
    fn test_title_and_version_interpolated() {
        let doc = build_document("T", "v1", "<p>x</p>");
        assert!(doc.contains("<title>T v1"));
    }

    #[test]
    fn test_body_embedded_verbatim_exactly_once() {
        let doc = build_document("T", "v1", "<p>x</p>");
        assert_eq!(doc.matches("<p>x</p>").count(), 1);
    }

    #[test]
    fn test_stylesheet_and_print_rules_present() {
        let doc = build_document("T", "v1", "");
        assert!(doc.contains("@media print"));
        assert!(doc.contains("JetBrains+Mono"));
        assert!(doc.contains("border-collapse: collapse"));
    }

    #[test]
    fn test_title_is_not_escaped() {
        let doc = build_document("<T>", "v&1", "");
        assert!(doc.contains("<title><T> v&1"));
    }

    #[test]
    fn test_deterministic_output() {
        let a = build_document("API", "v2.0", "<h1>Docs</h1>");
        let b = build_document("API", "v2.0", "<h1>Docs</h1>");
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_body_still_well_formed() {
        let doc = build_document("T", "v1", "");
        assert!(doc.contains("<body></body>"));
    }
}
