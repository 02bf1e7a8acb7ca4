use colored::{Color, Colorize};
use std::io::IsTerminal;

use marks_core::types::Bookmark;
use marks_ops::Printer;

use crate::cli::ColorMode;
use crate::config::Palette;

/// Columns are padded to the widest cell plus this many spaces.
const COLUMN_GAP: usize = 4;

pub(crate) fn color_enabled(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Writes to stdout, coloring each field with its configured color.
pub(crate) struct TerminalPrinter {
    id: Color,
    url: Color,
    tags: Color,
    browser: Color,
    enabled: bool,
}

impl TerminalPrinter {
    pub(crate) fn new(palette: &Palette, enabled: bool) -> Self {
        // Palette names are validated at config load.
        let color = |name: &str| name.parse::<Color>().unwrap_or(Color::White);
        Self {
            id: color(&palette.id),
            url: color(&palette.url),
            tags: color(&palette.tags),
            browser: color(&palette.browser),
            enabled,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled && !text.is_empty() {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn tag_list(tags: &[String]) -> String {
        format!("[{}]", tags.join(", "))
    }

    fn fields(&self, b: &Bookmark) -> (String, Option<String>, Option<String>) {
        let url = (!b.url.is_empty()).then(|| self.paint(&b.url, self.url));
        let tags = (!b.tags.is_empty()).then(|| self.paint(&Self::tag_list(&b.tags), self.tags));
        (self.paint(&b.id, self.id), url, tags)
    }
}

impl Printer for TerminalPrinter {
    fn msg(&self, text: &str) {
        println!("{text}");
    }

    fn error(&self, text: &str) {
        println!("Error: {text}");
    }

    fn tabulate(&self, bookmarks: &[Bookmark]) -> Vec<String> {
        let cells: Vec<[String; 3]> = bookmarks
            .iter()
            .map(|b| {
                let tags = if b.tags.is_empty() {
                    String::new()
                } else {
                    Self::tag_list(&b.tags)
                };
                [b.id.clone(), b.url.clone(), tags]
            })
            .collect();

        let mut widths = [0usize; 3];
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let colors = [self.id, self.url, self.tags];
        cells
            .iter()
            .map(|row| {
                let mut line = String::new();
                for (i, cell) in row.iter().enumerate() {
                    let pad = if i + 1 < row.len() {
                        widths[i] + COLUMN_GAP - cell.chars().count()
                    } else {
                        0
                    };
                    line.push_str(&self.paint(cell, colors[i]));
                    line.push_str(&" ".repeat(pad));
                }
                line.trim_end().to_string()
            })
            .collect()
    }

    fn full(&self, b: &Bookmark) -> String {
        let (id, url, tags) = self.fields(b);
        [Some(id), url, tags]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn full_with_fields(&self, b: &Bookmark) -> String {
        let (id, url, tags) = self.fields(b);
        let mut out = vec![format!("Id: {id}")];
        out.extend(url.map(|u| format!("Url: {u}")));
        out.extend(tags.map(|t| format!("Tags: {t}")));
        out.join(", ")
    }

    fn url(&self, url: &str) -> String {
        self.paint(url, self.url)
    }

    fn browser(&self, browser: &str) -> String {
        self.paint(browser, self.browser)
    }
}
