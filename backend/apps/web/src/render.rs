//! Result rendering
//!
//! Validation runs here, in the web process, against the same schema the API
//! uses. The outcome is rendered as preformatted text inside the page.

use crate::samples::Sample;

/// Text block produced by validating one sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub is_error: bool,
    pub text: String,
}

/// Validate a sample and format the result as the page shows it
pub fn run_sample(sample: Sample) -> Result<Outcome, serde_json::Error> {
    let label = sample.label();

    match validators::validate(&sample.payload()) {
        Ok(user) => Ok(Outcome {
            is_error: false,
            text: format!(
                "✅ \"{}\" is valid!\n\n{}",
                label,
                serde_json::to_string_pretty(&user)?
            ),
        }),
        Err(errors) => Ok(Outcome {
            is_error: true,
            text: format!(
                "❌ \"{}\" has validation errors:\n\n{}",
                label,
                serde_json::to_string_pretty(errors.field_errors())?
            ),
        }),
    }
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

const PAGE_STYLE: &str = "\
body{margin:0;min-height:100vh;display:flex;align-items:center;justify-content:center;\
background:linear-gradient(135deg,#0f172a 0%,#1e293b 100%);font-family:system-ui,sans-serif;padding:2rem}\
.card{background:#fff;border-radius:16px;padding:2.5rem;max-width:600px;width:100%;\
box-shadow:0 25px 50px -12px rgba(0,0,0,.25)}\
h1{font-size:1.75rem;margin:0 0 .5rem 0;color:#0f172a}\
.subtitle{font-size:.95rem;color:#64748b;line-height:1.6;margin:0 0 1.5rem 0}\
form.buttons{display:flex;gap:1rem;margin-bottom:1.5rem}\
form.buttons button{flex:1;padding:.75rem 1rem;border-radius:8px;border:none;font-weight:600;\
font-size:.9rem;cursor:pointer;color:#fff}\
.ok{background:linear-gradient(135deg,#22c55e,#16a34a)}\
.bad{background:linear-gradient(135deg,#ef4444,#dc2626)}\
pre.result{padding:1rem;border-radius:8px;border:2px solid;font-size:.85rem;\
font-family:'Courier New',Courier,monospace;white-space:pre-wrap;word-break:break-word;\
margin-bottom:1.5rem;overflow:auto}\
pre.success{border-color:#22c55e;background:#f0fdf4}\
pre.failure{border-color:#ef4444;background:#fef2f2}\
.info{padding:1rem 1.25rem;background:#f8fafc;border-radius:8px;border:1px solid #e2e8f0;\
font-size:.9rem;color:#475569}";

/// Render the full page, with the outcome block when one is given
pub fn render_page(outcome: Option<&Outcome>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Shared Validator Demo</title>\n");
    html.push_str(&format!("<style>{PAGE_STYLE}</style>\n"));
    html.push_str("</head>\n<body>\n<main class=\"card\">\n");
    html.push_str("<h1>🔗 Shared Validator Demo</h1>\n");
    html.push_str(
        "<p class=\"subtitle\">This page uses the <strong>same schema</strong> as the API.\
         <br>Crate: <code>validators</code></p>\n",
    );

    html.push_str("<form class=\"buttons\" method=\"get\" action=\"/\">\n");
    for sample in Sample::ALL {
        let class = match sample {
            Sample::Valid => "ok",
            Sample::Invalid => "bad",
        };
        html.push_str(&format!(
            "<button type=\"submit\" name=\"sample\" value=\"{}\" class=\"{}\">{}</button>\n",
            sample.query_value(),
            class,
            escape_html(sample.button_text()),
        ));
    }
    html.push_str("</form>\n");

    if let Some(outcome) = outcome {
        let class = if outcome.is_error { "failure" } else { "success" };
        html.push_str(&format!(
            "<pre class=\"result {}\">{}</pre>\n",
            class,
            escape_html(&outcome.text)
        ));
    }

    html.push_str(
        "<div class=\"info\">\n<h3>📦 How this works</h3>\n<ul>\n\
         <li><code>validators</code> lives in <code>backend/crates/validators/</code></li>\n\
         <li>This page validates in its own process, no API call</li>\n\
         <li>The API uses the <strong>exact same schema</strong></li>\n\
         <li>One schema, two apps, zero duplication</li>\n\
         </ul>\n</div>\n",
    );
    html.push_str("</main>\n</body>\n</html>\n");

    html
}
