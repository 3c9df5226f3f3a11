//! Results panel widget - text restatement of vertex and roots.
//!
//! When the range is invalid this panel carries the blocking error instead.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use quadratic::{AnalysisError, classify, roots_line, vertex_line};
use types::{Analysis, Coefficients, DisplayOptions};

/// Vertex/roots summary or the blocking range error.
pub struct ResultsPanel<'a> {
    analysis: &'a Result<Analysis, AnalysisError>,
    coefficients: Coefficients,
    display: DisplayOptions,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(analysis: &'a Result<Analysis, AnalysisError>, coefficients: Coefficients) -> Self {
        Self {
            analysis,
            coefficients,
            display: DisplayOptions::default(),
        }
    }

    /// Set which lines are shown.
    pub fn display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    fn lines(&self, analysis: &Analysis) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            analysis.label.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))];

        if self.display.show_vertex {
            lines.push(Line::from(Span::styled(
                vertex_line(analysis.vertex),
                Style::default().fg(Color::Red),
            )));
        }

        if self.display.show_roots {
            lines.push(Line::from(vec![
                Span::styled(roots_line(&analysis.roots), Style::default().fg(Color::Green)),
                Span::styled(
                    format!("  ({})", classify(&self.coefficients)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));

            let outside: Vec<String> = analysis
                .roots
                .iter()
                .filter(|r| !r.in_range)
                .map(|r| format!("{:.3}", r.x))
                .collect();
            if !outside.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("Outside plotted range: {}", outside.join(", ")),
                    Style::default().fg(Color::Yellow),
                )));
            }
        }

        lines
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (lines, border) = match self.analysis {
            Ok(analysis) => (self.lines(analysis), Color::White),
            Err(err) => (
                vec![Line::from(Span::styled(
                    err.to_string(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ))],
                Color::Red,
            ),
        };

        let block = Block::default()
            .title("Results")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadratic::analyze;
    use types::{Coefficients, PlotParams, SampleRange};

    fn render(params: &PlotParams) -> String {
        let analysis = analyze(params);
        let panel = ResultsPanel::new(&analysis, params.coefficients)
            .display(params.display);
        let area = Rect::new(0, 0, 80, 7);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        buf.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_results_two_roots() {
        let params = PlotParams::new(Coefficients::new(1.0, -3.0, 2.0), SampleRange::default());
        let text = render(&params);
        assert!(text.contains("Vertex: x = 1.500, y = -0.250"));
        assert!(text.contains("Roots: 1.000, 2.000"));
        assert!(text.contains("(two distinct real roots (D = 1.000))"));
    }

    #[test]
    fn test_results_case_follows_coefficients() {
        let params = PlotParams::new(Coefficients::new(1.0, 0.0, 1.0), SampleRange::default());
        assert!(render(&params).contains("(no real roots (D = -4.000))"));
    }

    #[test]
    fn test_results_none() {
        let params = PlotParams::new(Coefficients::new(0.0, 0.0, 5.0), SampleRange::default());
        let text = render(&params);
        assert!(text.contains("Vertex: none"));
        assert!(text.contains("Roots: none"));
    }

    #[test]
    fn test_results_out_of_range_root() {
        let params = PlotParams::new(Coefficients::new(0.0, 1.0, -20.0), SampleRange::default());
        let text = render(&params);
        assert!(text.contains("Outside plotted range: 20.000"));
    }

    #[test]
    fn test_results_invalid_range() {
        let params = PlotParams::new(Coefficients::default(), SampleRange::new(5.0, -5.0, 400));
        let text = render(&params);
        assert!(text.contains("x_min must be less than x_max"));
        assert!(!text.contains("Roots"));
    }
}
