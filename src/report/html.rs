use crate::class::ClassSummary;

use super::text::render_text;

/// Render a single-page form embedding the original header text and its
/// textual summary into two read-only text areas
pub fn render_html(original: &str, summaries: &[ClassSummary]) -> String {
    let summary = render_text(summaries);
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Header UML Summary</title></head>\n\
         <body>\n\
         <form>\n\
         <p>Source</p>\n\
         <textarea name=\"source\" rows=\"24\" cols=\"80\" readonly>{}</textarea>\n\
         <p>Summary</p>\n\
         <textarea name=\"summary\" rows=\"24\" cols=\"80\" readonly>{}</textarea>\n\
         </form>\n\
         </body>\n\
         </html>\n",
        escape(original),
        escape(&summary)
    )
}

/// Escape text for embedding in HTML element content
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
