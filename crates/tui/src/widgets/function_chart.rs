//! Function chart widget - plots the sampled curve with its annotations.
//!
//! Layers are drawn back to front: grid, reference axes, curve, vertex and
//! roots. Only the curve and the markers carry names, so only they appear
//! in the legend.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Widget},
};

use types::{Analysis, DisplayOptions, SampleRange};

/// Smallest vertical span shown, so flat lines are not stretched into noise.
const MIN_Y_SPAN: f64 = 2.0;

/// Number of grid divisions along each axis.
const GRID_DIVISIONS: usize = 4;

/// One dataset's worth of owned points plus styling.
struct Layer {
    data: Vec<(f64, f64)>,
    name: Option<String>,
    color: Color,
    marker: Marker,
    graph_type: GraphType,
}

impl Layer {
    fn line(data: Vec<(f64, f64)>, color: Color, marker: Marker) -> Self {
        Self {
            data,
            name: None,
            color,
            marker,
            graph_type: GraphType::Line,
        }
    }

    fn points(data: Vec<(f64, f64)>, name: String, color: Color) -> Self {
        Self {
            data,
            name: Some(name),
            color,
            marker: Marker::Block,
            graph_type: GraphType::Scatter,
        }
    }

    fn dataset(&self) -> Dataset<'_> {
        let dataset = Dataset::default()
            .marker(self.marker)
            .graph_type(self.graph_type)
            .style(Style::default().fg(self.color))
            .data(&self.data);
        match &self.name {
            Some(name) => dataset.name(name.as_str()),
            None => dataset,
        }
    }
}

/// Compute padded y bounds from the visible values.
fn y_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() || !max.is_finite() {
        return (-1.0, 1.0);
    }

    let mid = (min + max) / 2.0;
    let span = max - min;
    if span < MIN_Y_SPAN {
        let half = MIN_Y_SPAN / 2.0;
        (mid - half, mid + half)
    } else {
        let padding = span * 0.1;
        (min - padding, max + padding)
    }
}

/// Interior grid positions between `lo` and `hi`.
fn grid_positions(lo: f64, hi: f64) -> impl Iterator<Item = f64> {
    let step = (hi - lo) / GRID_DIVISIONS as f64;
    (1..GRID_DIVISIONS).map(move |k| lo + step * k as f64)
}

/// Chart of y = f(x) over the sampled range.
pub struct FunctionChart<'a> {
    analysis: &'a Analysis,
    range: SampleRange,
    display: DisplayOptions,
    title: &'a str,
}

impl<'a> FunctionChart<'a> {
    pub fn new(analysis: &'a Analysis, range: SampleRange) -> Self {
        Self {
            analysis,
            range,
            display: DisplayOptions::default(),
            title: "Graph",
        }
    }

    /// Set which annotations are drawn.
    pub fn display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    /// Set the chart title.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    fn layers(&self, y_min: f64, y_max: f64) -> Vec<Layer> {
        let (x_min, x_max) = (self.range.x_min, self.range.x_max);
        let mut layers = Vec::new();

        if self.display.show_grid {
            for x in grid_positions(x_min, x_max) {
                layers.push(Layer::line(
                    vec![(x, y_min), (x, y_max)],
                    Color::DarkGray,
                    Marker::Dot,
                ));
            }
            for y in grid_positions(y_min, y_max) {
                layers.push(Layer::line(
                    vec![(x_min, y), (x_max, y)],
                    Color::DarkGray,
                    Marker::Dot,
                ));
            }
        }

        // Reference axes at x = 0 and y = 0
        if y_min <= 0.0 && 0.0 <= y_max {
            layers.push(Layer::line(
                vec![(x_min, 0.0), (x_max, 0.0)],
                Color::Gray,
                Marker::Braille,
            ));
        }
        if x_min <= 0.0 && 0.0 <= x_max {
            layers.push(Layer::line(
                vec![(0.0, y_min), (0.0, y_max)],
                Color::Gray,
                Marker::Braille,
            ));
        }

        layers.push(Layer {
            data: self.analysis.curve_data(),
            name: Some(self.analysis.label.clone()),
            color: Color::Cyan,
            marker: Marker::Braille,
            graph_type: GraphType::Line,
        });

        if self.display.show_vertex
            && let Some(v) = self.analysis.vertex
            && self.range.contains(v.x)
        {
            layers.push(Layer::points(
                vec![(v.x, v.y)],
                format!("vertex {}", v),
                Color::Red,
            ));
        }

        if self.display.show_roots {
            for root in self.analysis.roots_in_range() {
                layers.push(Layer::points(
                    vec![(root.x, root.y)],
                    format!("root {:.3}", root.x),
                    Color::Green,
                ));
            }
        }

        layers
    }
}

impl Widget for FunctionChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.analysis.curve.is_empty() {
            let block = Block::default()
                .title(self.title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray));
            block.render(area, buf);
            return;
        }

        let vertex_y = self
            .analysis
            .vertex
            .filter(|v| self.display.show_vertex && self.range.contains(v.x))
            .map(|v| v.y);
        let (y_min, y_max) = y_bounds(self.analysis.curve.iter().map(|p| p.y).chain(vertex_y));
        let (x_min, x_max) = (self.range.x_min, self.range.x_max);

        let layers = self.layers(y_min, y_max);
        let datasets: Vec<Dataset> = layers.iter().map(Layer::dataset).collect();

        let x_labels: Vec<Line> = vec![
            Line::from(format!("{:.2}", x_min)),
            Line::from(format!("{:.2}", (x_min + x_max) / 2.0)),
            Line::from(format!("{:.2}", x_max)),
        ];
        let y_labels: Vec<Line> = vec![
            Line::from(format!("{:.2}", y_min)),
            Line::from(format!("{:.2}", (y_min + y_max) / 2.0)),
            Line::from(format!("{:.2}", y_max)),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(self.title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White)),
            )
            .x_axis(
                Axis::default()
                    .title("x")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([x_min, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title("y")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([y_min, y_max])
                    .labels(y_labels),
            )
            .legend_position(Some(LegendPosition::TopRight))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

        chart.render(area, buf);
    }
}
