//! HTML rendering for the screening form
//!
//! One page: inputs in a sidebar, the result (or a prompt) in the main
//! column. Panels use `<details>` so they render as collapsible sections.

use std::fmt::Write;

use crate::explain::ExplanationPanel;
use crate::features::{FeatureBounds, FeatureVector};
use crate::model::Decision;
use crate::screening::{ScreeningError, ScreeningReport};

pub const PAGE_TITLE: &str = "Simon Bank HELOC Screening Tool";
pub const PAGE_SUBTITLE: &str = "Decision support prototype for preliminary HELOC screening. \
Final decisions are made by a loan officer.";
pub const SAMPLE_HINT: &str =
    "Tip: Try a low-risk case (90, 0, 10, 25, 120) and a high-risk case (45, 8, 85, 5, 20).";
pub const PROMPT: &str = "Enter applicant inputs in the sidebar, then click 'Check Eligibility'.";
pub const HEURISTIC_NOTE: &str = "Reasons come from fixed threshold rules, not from the \
classifier's weights, and may not match its decision.";

const STYLE: &str = r#"
  body { font-family: system-ui, sans-serif; margin: 0; display: flex; background: #0e1117; color: #fafafa; }
  aside { width: 280px; padding: 2rem 1.25rem; background: #262730; min-height: 100vh; box-sizing: border-box; }
  main { flex: 1; padding: 2rem; max-width: 860px; }
  label { display: block; margin-top: 0.9rem; font-size: 0.9rem; }
  input[type=number] { width: 100%; padding: 0.4rem; margin-top: 0.25rem; box-sizing: border-box; }
  button { width: 100%; padding: 0.6rem 1rem; border-radius: 10px; margin-top: 1.25rem; cursor: pointer; }
  .small-note { color: rgba(255,255,255,0.65); font-size: 0.9rem; }
  .metrics { display: flex; gap: 1rem; }
  .metric { flex: 1; background: rgba(255,255,255,0.04); padding: 14px 16px; border-radius: 12px; }
  .metric .value { font-size: 1.8rem; }
  .progress { background: rgba(255,255,255,0.1); border-radius: 6px; height: 10px; margin: 1rem 0; }
  .progress div { background: #ff4b4b; height: 10px; border-radius: 6px; }
  .banner { padding: 0.8rem 1rem; border-radius: 8px; margin: 1rem 0; }
  .success { background: rgba(33,195,84,0.2); }
  .error { background: rgba(255,43,43,0.2); }
  .info { background: rgba(28,131,225,0.2); }
  details { border: 1px solid rgba(255,255,255,0.15); border-radius: 8px; padding: 0.6rem 1rem; margin: 0.5rem 0; }
"#;

/// What the main column shows.
#[derive(Debug)]
pub enum PageOutcome<'a> {
    /// No submission yet
    Prompt,
    Report(&'a ScreeningReport),
    Error(&'a ScreeningError),
}

/// Render the full page with the form pre-filled from `inputs`.
pub fn render_page(inputs: &FeatureVector, outcome: PageOutcome<'_>) -> String {
    let mut html = String::with_capacity(8 * 1024);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n",
        title = PAGE_TITLE,
    );

    render_sidebar(&mut html, inputs);

    let _ = write!(
        html,
        "<main>\n<h1>{}</h1>\n<div class=\"small-note\">{}</div>\n<hr>\n<h3>Screening Result</h3>\n",
        PAGE_TITLE, PAGE_SUBTITLE
    );

    match outcome {
        PageOutcome::Prompt => {
            let _ = write!(html, "<p class=\"small-note\">{}</p>\n", PROMPT);
        }
        PageOutcome::Report(report) => render_report(&mut html, report),
        PageOutcome::Error(err) => {
            let _ = write!(
                html,
                "<div class=\"banner error\"><strong>{}</strong>: {}</div>\n",
                err.code(),
                escape(&err.to_string())
            );
        }
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_sidebar(html: &mut String, inputs: &FeatureVector) {
    html.push_str("<aside>\n<h2>Applicant Inputs</h2>\n<form method=\"post\" action=\"/\">\n");

    for (bounds, value) in FeatureBounds::ALL.iter().zip(inputs.to_array()) {
        let _ = write!(
            html,
            "<label for=\"{name}\">{label}\n\
             <input type=\"number\" id=\"{name}\" name=\"{name}\" min=\"{min}\" max=\"{max}\" \
             step=\"1\" value=\"{value}\" required></label>\n",
            name = bounds.name,
            label = bounds.label,
            min = bounds.min,
            max = bounds.max,
            value = value,
        );
    }

    let _ = write!(
        html,
        "<button type=\"submit\">Check Eligibility</button>\n</form>\n\
         <p class=\"small-note\">{}</p>\n</aside>\n",
        SAMPLE_HINT
    );
}

fn render_report(html: &mut String, report: &ScreeningReport) {
    let _ = write!(
        html,
        "<div class=\"metrics\">\n\
         <div class=\"metric\"><div>Approval Probability</div><div class=\"value\">{}</div></div>\n\
         <div class=\"metric\"><div>Decision</div><div class=\"value\">{}</div></div>\n\
         </div>\n\
         <div class=\"progress\"><div style=\"width: {}%\"></div></div>\n<hr>\n",
        report.probability_display,
        report.decision_label,
        report.progress_percent(),
    );

    let banner_class = match report.decision {
        Decision::Forward => "success",
        Decision::NotForwarded => "error",
    };
    let _ = write!(html, "<div class=\"banner {}\">{}</div>\n", banner_class, report.banner);

    for panel in &report.panels {
        render_panel(html, panel);
    }

    if report.decision == Decision::NotForwarded {
        let _ = write!(html, "<p class=\"small-note\">{}</p>\n", HEURISTIC_NOTE);
    }

    let _ = write!(html, "<div class=\"banner info\">{}</div>\n", report.note);
}

fn render_panel(html: &mut String, panel: &ExplanationPanel) {
    let _ = write!(html, "<details>\n<summary>{}</summary>\n", escape(&panel.title));
    if let Some(message) = &panel.message {
        let _ = write!(html, "<p>{}</p>\n", escape(message));
    } else {
        html.push_str("<ul>\n");
        for item in &panel.items {
            let _ = write!(html, "<li>{}</li>\n", escape(item));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</details>\n");
}

/// Minimal HTML text escaping
fn escape(s: &str) -> String {
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
