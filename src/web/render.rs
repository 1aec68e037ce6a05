use std::fmt::Write;

use super::form::{
    FIELD_AVERAGE_INFLATION, FIELD_REAL_DISCOUNT_RATE, FIELD_SHARES, price_field, symbol_field,
};
use crate::report::{MAX_SYMBOLS, Report};

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Fair value</title>
<style>
body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; }
th, td { border: 1px solid #ccc; padding: 4px 8px; text-align: right; }
th:first-child, td:first-child { text-align: left; }
</style>
"#;

/// The input form posted to `/result`.
pub fn form_page() -> String {
    let mut html = String::from(HEAD);
    html.push_str("</head>\n<body>\n<h1>Fair value</h1>\n");
    html.push_str("<form action=\"/result\" method=\"post\">\n");
    let _ = writeln!(
        html,
        "<p><label>Number of shares <input name=\"{FIELD_SHARES}\" value=\"100\"></label></p>"
    );
    let _ = writeln!(
        html,
        "<p><label>Real discount rate <input name=\"{FIELD_REAL_DISCOUNT_RATE}\" value=\"0.05\"></label></p>"
    );
    let _ = writeln!(
        html,
        "<p><label>Average inflation <input name=\"{FIELD_AVERAGE_INFLATION}\" value=\"0.02\"></label></p>"
    );
    html.push_str("<table>\n<tr><th>Symbol</th><th>Price 5 years ago</th></tr>\n");
    for slot in 1..=MAX_SYMBOLS {
        let _ = writeln!(
            html,
            "<tr><td><input name=\"{}\"></td><td><input name=\"{}\"></td></tr>",
            symbol_field(slot),
            price_field(slot)
        );
    }
    html.push_str("</table>\n<p><button type=\"submit\">Compute</button></p>\n</form>\n");
    html.push_str("</body>\n</html>\n");
    html
}

/// The result table followed by the overpriced chart.
pub fn result_page(report: &Report) -> String {
    let mut html = String::from(HEAD);

    let data = serde_json::Value::Array(report.chart.to_rows()).to_string();
    let _ = writeln!(
        html,
        r#"<script src="https://www.gstatic.com/charts/loader.js"></script>
<script>
google.charts.load('current', {{packages: ['corechart']}});
google.charts.setOnLoadCallback(function () {{
  var data = google.visualization.arrayToDataTable({});
  var chart = new google.visualization.LineChart(document.getElementById('chart'));
  chart.draw(data, {{title: 'Overpriced %', legend: {{position: 'bottom'}}}});
}});
</script>"#,
        script_safe(&data)
    );
    html.push_str("</head>\n<body>\n<h1>Results</h1>\n<table>\n<tr>");
    for header in &report.table.headers {
        let _ = write!(html, "<th>{}</th>", escape(header));
    }
    html.push_str("</tr>\n");
    for row in &report.table.rows {
        let _ = write!(html, "<tr><td>{}</td>", escape(&row.symbol));
        for cell in &row.cells {
            let _ = write!(html, "<td>{}</td>", escape(cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n<div id=\"chart\" style=\"width: 900px; height: 400px\"></div>\n");
    html.push_str("<p><a href=\"/\">Back</a></p>\n</body>\n</html>\n");
    html
}

pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// JSON embedded in a `<script>` must not close the element.
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}
