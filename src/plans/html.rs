// ABOUTME: HTML fragment builder and standalone document wrapper for rendered plans
// ABOUTME: Escapes all interpolated text and applies the shared plan stylesheet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write;

use html_escape::encode_text;

/// Stylesheet applied to exported plan documents
const PLAN_STYLESHEET: &str = "
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      margin: 0;
      padding: 16px;
      background-color: #ffffff;
      color: #333333;
      line-height: 1.6;
    }
    h3 {
      color: #4A90E2;
      font-size: 20px;
      margin-top: 24px;
      margin-bottom: 12px;
    }
    p {
      margin: 8px 0;
      font-size: 16px;
    }
    ul {
      padding-left: 20px;
      margin: 8px 0;
    }
    li {
      margin: 4px 0;
      font-size: 15px;
    }
    strong {
      color: #2c3e50;
      font-weight: 600;
    }
";

/// Append-only builder for plan fragments
///
/// Every method escapes its text arguments; only the builder emits markup.
#[derive(Debug, Default)]
pub struct HtmlFragment {
    buf: String,
}

impl HtmlFragment {
    /// Empty fragment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Section heading
    pub fn heading(&mut self, text: &str) -> &mut Self {
        let _ = writeln!(self.buf, "<h3>{}</h3>", encode_text(text));
        self
    }

    /// Paragraph of plain text
    pub fn paragraph(&mut self, text: &str) -> &mut Self {
        let _ = writeln!(self.buf, "<p>{}</p>", encode_text(text));
        self
    }

    /// Paragraph with a bold label: `<p><strong>Label:</strong> value</p>`
    pub fn labeled(&mut self, label: &str, value: &str) -> &mut Self {
        let _ = writeln!(
            self.buf,
            "<p><strong>{}:</strong> {}</p>",
            encode_text(label),
            encode_text(value)
        );
        self
    }

    /// Bulleted list; nothing is written for an empty list
    pub fn list<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return self;
        }
        self.buf.push_str("<ul>\n");
        for item in items {
            let _ = writeln!(self.buf, "  <li>{}</li>", encode_text(item.as_ref()));
        }
        self.buf.push_str("</ul>\n");
        self
    }

    /// Labeled paragraph followed by a list, skipped entirely when the list is empty
    pub fn labeled_list(&mut self, label: &str, items: &[&str]) -> &mut Self {
        if items.is_empty() {
            return self;
        }
        let _ = writeln!(self.buf, "<p><strong>{}:</strong></p>", encode_text(label));
        self.list(items.iter().copied())
    }

    /// Finish and return the markup
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Wrap a plan fragment in a standalone styled HTML page
#[must_use]
pub fn render_document(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n  \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  \
         <style>{PLAN_STYLESHEET}  </style>\n</head>\n<body>\n{fragment}</body>\n</html>\n"
    )
}
