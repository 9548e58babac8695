use crate::class::{ClassSummary, Declaration};

/// Width of the separator lines between report sections
const SEPARATOR_WIDTH: usize = 40;

/// Render class summaries as a plain-text UML report: per class the name,
/// the fields and the methods, each group framed by separator lines, each
/// entry as `<marker><name>: <type>`
pub fn render_text(summaries: &[ClassSummary]) -> String {
    let mut out = String::new();
    for summary in summaries {
        render_class(&mut out, summary);
    }
    out
}

fn render_class(out: &mut String, summary: &ClassSummary) {
    let separator = "-".repeat(SEPARATOR_WIDTH);

    out.push_str(&separator);
    out.push('\n');
    out.push_str(&summary.name);
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for field in summary.fields() {
        out.push_str(&render_declaration(field));
        out.push('\n');
    }
    out.push_str(&separator);
    out.push('\n');
    for method in summary.methods() {
        out.push_str(&render_declaration(method));
        out.push('\n');
    }
    out.push_str(&separator);
    out.push('\n');
}

fn render_declaration(declaration: &Declaration) -> String {
    format!(
        "{}{}: {}",
        declaration.visibility.marker(),
        declaration.name,
        declaration.type_name
    )
}
