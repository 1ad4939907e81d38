//! HTML serialization of a document.
//!
//! The only place where model text meets markup. Every text node and
//! attribute value goes through `html-escape`; chart configs are embedded
//! as JSON with `<` escaped so backend data cannot break out of the script
//! element.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::dom::document::{Document, Element};
use crate::dom::table::{TableBody, TableCell};
use crate::error::DashboardError;

const PR_TABLE_HEADERS: [&str; 6] = ["Repository", "Author", "Team", "Status", "Title", "PR"];

/// Render the document as a standalone HTML page.
pub fn render_page(document: &Document, title: &str) -> Result<String, DashboardError> {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str(&format!(
        "<meta charset=\"utf-8\">\n<title>{}</title>\n",
        encode_text(title)
    ));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", encode_text(title)));

    for (id, element) in document.elements() {
        match element {
            Element::TableBody(body) => render_table(&mut out, id, body),
            Element::Canvas(surface) => {
                out.push_str(&format!(
                    "<canvas id=\"{}\"></canvas>\n",
                    encode_double_quoted_attribute(id)
                ));
                if let Some(chart) = surface.chart() {
                    let config = serde_json::to_string(chart.config())
                        .map_err(|e| DashboardError::ChartError(e.to_string()))?;
                    // '<' only occurs inside JSON strings, so this stays valid JSON.
                    let config = config.replace('<', "\\u003c");
                    out.push_str(&format!(
                        "<script type=\"application/json\" data-chart-for=\"{}\">{}</script>\n",
                        encode_double_quoted_attribute(id),
                        config
                    ));
                }
            }
            Element::Form(form) => {
                out.push_str(&format!(
                    "<form id=\"{}\"></form>\n",
                    encode_double_quoted_attribute(form.id())
                ));
            }
            Element::Input(input) => {
                out.push_str(&format!(
                    "<input id=\"{}\" value=\"{}\">\n",
                    encode_double_quoted_attribute(input.id()),
                    encode_double_quoted_attribute(input.value())
                ));
            }
        }
    }

    out.push_str("</body>\n</html>\n");
    Ok(out)
}

fn render_table(out: &mut String, id: &str, body: &TableBody) {
    out.push_str("<table>\n<thead>\n<tr>");
    for header in PR_TABLE_HEADERS {
        out.push_str(&format!("<th>{}</th>", encode_text(header)));
    }
    out.push_str(&format!(
        "</tr>\n</thead>\n<tbody id=\"{}\">\n",
        encode_double_quoted_attribute(id)
    ));

    for row in body.rows() {
        out.push_str("<tr>");
        for cell in row.cells() {
            match cell {
                TableCell::Text(value) => {
                    out.push_str(&format!("<td>{}</td>", encode_text(value)));
                }
                TableCell::Link { href, label } => {
                    out.push_str(&format!(
                        "<td><a href=\"{}\" target=\"_blank\">{}</a></td>",
                        encode_double_quoted_attribute(href),
                        encode_text(label)
                    ));
                }
            }
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n");
}
