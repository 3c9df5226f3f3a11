//! Main TUI application - composes widgets and handles the input loop.
//!
//! # Key Bindings
//!
//! - `↑`/`↓`, `Tab`/`Shift+Tab`: Select a parameter
//! - `←`/`→`, `-`/`+`: Step the selected parameter (toggles flip)
//! - `Enter`: Type a value for the selected parameter (`Enter` commits, `Esc` cancels)
//! - `v` / `r` / `g`: Toggle vertex, roots, grid
//! - `d`: Restore defaults
//! - `q`/`Esc`: Quit
//!
//! The loop blocks on terminal input. Each accepted change builds a new
//! `PlotParams` and reruns the analysis before the next frame is drawn.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{debug, warn};

use quadratic::{AnalysisError, analyze};
use types::{Analysis, PlotParams};

use crate::form::ParamField;
use crate::widgets::{FunctionChart, ParamsPanel, ResultsPanel};

/// Width of the parameter form column.
const PARAMS_WIDTH: u16 = 36;

/// Height of the results panel.
const RESULTS_HEIGHT: u16 = 6;

/// Interactive plot application state.
pub struct PlotApp {
    /// Parameters for the current cycle.
    params: PlotParams,
    /// Parameters restored by the `d` key.
    defaults: PlotParams,
    /// Outcome of the most recent analysis.
    analysis: Result<Analysis, AnalysisError>,
    /// Highlighted form field.
    selected: ParamField,
    /// Text typed into the selected field while editing.
    editing: Option<String>,
    /// Last rejected input, shown in the header until the next key.
    status: Option<String>,
}

impl PlotApp {
    /// Create the app and run the first analysis.
    pub fn new(params: PlotParams) -> Self {
        Self {
            params,
            defaults: params,
            analysis: analyze(&params),
            selected: ParamField::A,
            editing: None,
            status: None,
        }
    }

    /// Parameters of the current cycle.
    pub fn params(&self) -> &PlotParams {
        &self.params
    }

    /// Outcome of the current cycle.
    pub fn analysis(&self) -> &Result<Analysis, AnalysisError> {
        &self.analysis
    }

    /// Run the TUI event loop.
    ///
    /// Blocks until the user presses 'q' or Esc.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && self.handle_key_event(key.code, key.modifiers)
            {
                return Ok(());
            }
        }
    }

    /// Replace the parameters and recompute.
    fn set_params(&mut self, params: PlotParams) {
        if params == self.params {
            return;
        }
        debug!(field = ?self.selected, ?params, "parameters changed");
        self.params = params;
        self.analysis = analyze(&self.params);
    }

    /// Handle keyboard input. Returns true if should quit.
    fn handle_key_event(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        self.status = None;

        if self.editing.is_some() {
            self.handle_edit_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,

            // Field selection
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
                self.selected = self.selected.previous();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.selected = self.selected.previous();
            }
            KeyCode::Tab | KeyCode::Down => {
                self.selected = self.selected.next();
            }

            // Stepping
            KeyCode::Left | KeyCode::Char('-') => {
                self.set_params(self.selected.step(&self.params, -1));
            }
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.set_params(self.selected.step(&self.params, 1));
            }

            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.selected.is_toggle() {
                    self.set_params(self.selected.toggle(&self.params));
                } else if code == KeyCode::Enter {
                    self.editing = Some(self.selected.edit_value(&self.params));
                }
            }

            // Display toggles
            KeyCode::Char('v') | KeyCode::Char('V') => {
                self.set_params(ParamField::ShowVertex.toggle(&self.params));
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.set_params(ParamField::ShowRoots.toggle(&self.params));
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                self.set_params(ParamField::ShowGrid.toggle(&self.params));
            }

            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.set_params(self.defaults);
            }

            _ => {}
        }
        false
    }

    /// Keys while typing a value into the selected field.
    fn handle_edit_key(&mut self, code: KeyCode) {
        let Some(buffer) = self.editing.as_mut() else {
            return;
        };

        match code {
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E') => {
                buffer.push(c);
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Esc => {
                self.editing = None;
            }
            KeyCode::Enter => {
                let input = self.editing.take().unwrap_or_default();
                match self.selected.apply_input(&self.params, &input) {
                    Ok(params) => self.set_params(params),
                    Err(message) => {
                        warn!(field = ?self.selected, input = %input, "rejected input");
                        self.status = Some(message);
                    }
                }
            }
            _ => {}
        }
    }

    /// Draw the UI.
    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(1), // Footer
            ])
            .split(area);

        self.draw_header(frame, main_chunks[0]);

        // Content: parameter form on the left, chart + results on the right
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(PARAMS_WIDTH), Constraint::Min(0)])
            .split(main_chunks[1]);

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(RESULTS_HEIGHT)])
            .split(content_chunks[1]);

        let params_panel =
            ParamsPanel::new(&self.params, self.selected).editing(self.editing.as_deref());
        frame.render_widget(params_panel, content_chunks[0]);

        self.draw_chart(frame, right_chunks[0]);

        let results = ResultsPanel::new(&self.analysis, self.params.coefficients)
            .display(self.params.display);
        frame.render_widget(results, right_chunks[1]);

        self.draw_footer(frame, main_chunks[2]);
    }

    /// Draw the chart, or the blocking message when the range is invalid.
    fn draw_chart(&self, frame: &mut Frame, area: Rect) {
        match &self.analysis {
            Ok(analysis) => {
                let chart = FunctionChart::new(analysis, self.params.range)
                    .display(self.params.display)
                    .title("Quadratic function (x: horizontal, y: vertical)");
                frame.render_widget(chart, area);
            }
            Err(err) => {
                let message = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        err.to_string(),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        "Adjust x min / x max to draw the graph.",
                        Style::default().fg(Color::Gray),
                    )),
                ])
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title("Graph")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red)),
                );
                frame.render_widget(message, area);
            }
        }
    }

    /// Draw the header bar.
    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "Quadratic Plot",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ y = ax² + bx + c"),
        ];

        if let Some(status) = &self.status {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(
                format!(" {} ", status),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ));
        } else if self.editing.is_some() {
            spans.push(Span::raw(" │ "));
            spans.push(Span::styled(
                " EDITING ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(header, area);
    }

    /// Draw the footer bar.
    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let spans = if self.editing.is_some() {
            vec![
                Span::styled(" Enter", Style::default().fg(Color::Yellow)),
                Span::raw(" Apply  │ "),
                Span::styled("Esc", Style::default().fg(Color::Yellow)),
                Span::raw(" Cancel  │ "),
                Span::styled("Backspace", Style::default().fg(Color::Cyan)),
                Span::raw(" Delete"),
            ]
        } else {
            vec![
                Span::styled(" q", Style::default().fg(Color::Yellow)),
                Span::raw(" Quit  │ "),
                Span::styled("↑↓", Style::default().fg(Color::Cyan)),
                Span::raw(" Select  │ "),
                Span::styled("←→", Style::default().fg(Color::Cyan)),
                Span::raw(" Adjust  │ "),
                Span::styled("Enter", Style::default().fg(Color::Cyan)),
                Span::raw(" Type value  │ "),
                Span::styled("v/r/g", Style::default().fg(Color::Cyan)),
                Span::raw(" Vertex/Roots/Grid  │ "),
                Span::styled("d", Style::default().fg(Color::Cyan)),
                Span::raw(" Defaults"),
            ]
        };

        let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(footer, area);
    }
}
