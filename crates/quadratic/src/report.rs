//! Plain-text restatements of an analysis.
//!
//! The same lines appear in the TUI results panel and in the headless
//! report, so both surfaces word "no result" the same way.

use std::fmt;

use types::{Analysis, DisplayOptions, Point, Root};

/// `Vertex: x = 1.500, y = -0.250`, or `Vertex: none`.
pub fn vertex_line(vertex: Option<Point>) -> String {
    match vertex {
        Some(v) => format!("Vertex: x = {:.3}, y = {:.3}", v.x, v.y),
        None => "Vertex: none".to_string(),
    }
}

/// `Roots: 1.000, 2.000`, or `Roots: none`.
pub fn roots_line(roots: &[Root]) -> String {
    if roots.is_empty() {
        return "Roots: none".to_string();
    }
    let listed: Vec<String> = roots.iter().map(|r| format!("{:.3}", r.x)).collect();
    format!("Roots: {}", listed.join(", "))
}

/// Multi-line text report honoring the display toggles.
pub struct Report<'a> {
    analysis: &'a Analysis,
    display: DisplayOptions,
}

impl<'a> Report<'a> {
    pub fn new(analysis: &'a Analysis, display: DisplayOptions) -> Self {
        Self { analysis, display }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.analysis.label)?;
        if self.display.show_vertex {
            writeln!(f, "{}", vertex_line(self.analysis.vertex))?;
        }
        if self.display.show_roots {
            writeln!(f, "{}", roots_line(&self.analysis.roots))?;
        }
        Ok(())
    }
}
