//! Parameter panel widget - the editable form of coefficients and range.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use types::PlotParams;

use crate::form::ParamField;

/// Width reserved for field labels.
const LABEL_WIDTH: usize = 20;

/// Form listing every parameter with the selected row highlighted.
pub struct ParamsPanel<'a> {
    params: &'a PlotParams,
    selected: ParamField,
    /// Text being typed into the selected field, if editing.
    editing: Option<&'a str>,
}

impl<'a> ParamsPanel<'a> {
    pub fn new(params: &'a PlotParams, selected: ParamField) -> Self {
        Self {
            params,
            selected,
            editing: None,
        }
    }

    /// Show an in-progress edit for the selected field.
    pub fn editing(mut self, buffer: Option<&'a str>) -> Self {
        self.editing = buffer;
        self
    }

    fn field_line(&self, field: ParamField) -> Line<'a> {
        let is_selected = field == self.selected;
        let marker = if is_selected { "▶ " } else { "  " };

        let value = match self.editing {
            Some(buffer) if is_selected => Span::styled(
                format!("{}▏", buffer),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            _ if is_selected => Span::styled(
                field.display_value(self.params),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            _ => Span::styled(
                field.display_value(self.params),
                Style::default().fg(Color::White),
            ),
        };

        let label_style = if is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH),
                label_style,
            ),
            value,
        ])
    }
}

impl Widget for ParamsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = Vec::with_capacity(ParamField::ALL.len() + 4);

        for field in ParamField::ALL {
            // Blank line between coefficients, range and toggles
            if matches!(field, ParamField::XMin | ParamField::ShowVertex) {
                lines.push(Line::from(""));
            }
            lines.push(self.field_line(field));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Hint: a = 0 makes the function linear.",
            Style::default().fg(Color::DarkGray),
        )));

        let block = Block::default()
            .title("Parameters")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_params_panel_shows_values() {
        let params = PlotParams::default();
        let panel = ParamsPanel::new(&params, ParamField::A);
        let area = Rect::new(0, 0, 40, 16);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("1.000"));
        assert!(text.contains("-10.000"));
        assert!(text.contains("400"));
        assert!(text.contains("[x]"));
    }

    #[test]
    fn test_params_panel_shows_edit_buffer() {
        let params = PlotParams::default();
        let panel = ParamsPanel::new(&params, ParamField::B).editing(Some("-2.5"));
        let area = Rect::new(0, 0, 40, 16);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);

        assert!(buffer_text(&buf).contains("-2.5"));
    }
}
