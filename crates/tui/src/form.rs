//! Parameter form model - which fields exist and how they change.
//!
//! Every edit produces a fresh `PlotParams`; nothing is mutated in place.

use types::{
    COEFFICIENT_STEP, MAX_POINTS, MIN_POINTS, PlotParams, POINTS_STEP, RANGE_STEP,
};

/// Resolution numeric fields are snapped to after a step.
const STEP_RESOLUTION: f64 = 1e9;

/// One editable row of the parameter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    A,
    B,
    C,
    XMin,
    XMax,
    Points,
    ShowVertex,
    ShowRoots,
    ShowGrid,
}

impl ParamField {
    /// Fields in display order.
    pub const ALL: [ParamField; 9] = [
        ParamField::A,
        ParamField::B,
        ParamField::C,
        ParamField::XMin,
        ParamField::XMax,
        ParamField::Points,
        ParamField::ShowVertex,
        ParamField::ShowRoots,
        ParamField::ShowGrid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ParamField::A => "a (x² coefficient)",
            ParamField::B => "b (x coefficient)",
            ParamField::C => "c (constant)",
            ParamField::XMin => "x min",
            ParamField::XMax => "x max",
            ParamField::Points => "samples",
            ParamField::ShowVertex => "show vertex",
            ParamField::ShowRoots => "show real roots",
            ParamField::ShowGrid => "show grid",
        }
    }

    /// Whether the field is an on/off toggle rather than a number.
    pub fn is_toggle(&self) -> bool {
        matches!(
            self,
            ParamField::ShowVertex | ParamField::ShowRoots | ParamField::ShowGrid
        )
    }

    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }

    /// Current value rendered for the form.
    pub fn display_value(&self, params: &PlotParams) -> String {
        let k = &params.coefficients;
        let r = &params.range;
        let d = &params.display;
        match self {
            ParamField::A => format!("{:.3}", k.a),
            ParamField::B => format!("{:.3}", k.b),
            ParamField::C => format!("{:.3}", k.c),
            ParamField::XMin => format!("{:.3}", r.x_min),
            ParamField::XMax => format!("{:.3}", r.x_max),
            ParamField::Points => r.points.to_string(),
            ParamField::ShowVertex => checkbox(d.show_vertex),
            ParamField::ShowRoots => checkbox(d.show_roots),
            ParamField::ShowGrid => checkbox(d.show_grid),
        }
    }

    /// Raw value used to seed the edit buffer.
    pub fn edit_value(&self, params: &PlotParams) -> String {
        let k = &params.coefficients;
        let r = &params.range;
        match self {
            ParamField::A => k.a.to_string(),
            ParamField::B => k.b.to_string(),
            ParamField::C => k.c.to_string(),
            ParamField::XMin => r.x_min.to_string(),
            ParamField::XMax => r.x_max.to_string(),
            ParamField::Points => r.points.to_string(),
            _ => String::new(),
        }
    }

    /// Step the field up (`+1`) or down (`-1`). Toggles flip either way.
    pub fn step(&self, params: &PlotParams, direction: i32) -> PlotParams {
        let mut next = *params;
        let dir = f64::from(direction.signum());
        match self {
            ParamField::A => next.coefficients.a = snap(next.coefficients.a + dir * COEFFICIENT_STEP),
            ParamField::B => next.coefficients.b = snap(next.coefficients.b + dir * COEFFICIENT_STEP),
            ParamField::C => next.coefficients.c = snap(next.coefficients.c + dir * COEFFICIENT_STEP),
            ParamField::XMin => next.range.x_min = snap(next.range.x_min + dir * RANGE_STEP),
            ParamField::XMax => next.range.x_max = snap(next.range.x_max + dir * RANGE_STEP),
            ParamField::Points => {
                let points = if direction < 0 {
                    next.range.points.saturating_sub(POINTS_STEP)
                } else {
                    next.range.points + POINTS_STEP
                };
                next.range.points = clamp_points(points);
            }
            ParamField::ShowVertex | ParamField::ShowRoots | ParamField::ShowGrid => {
                return self.toggle(params);
            }
        }
        next
    }

    /// Flip a toggle field. Numeric fields are returned unchanged.
    pub fn toggle(&self, params: &PlotParams) -> PlotParams {
        let mut next = *params;
        match self {
            ParamField::ShowVertex => next.display.show_vertex = !next.display.show_vertex,
            ParamField::ShowRoots => next.display.show_roots = !next.display.show_roots,
            ParamField::ShowGrid => next.display.show_grid = !next.display.show_grid,
            _ => {}
        }
        next
    }

    /// Apply a typed value to a numeric field.
    pub fn apply_input(&self, params: &PlotParams, input: &str) -> Result<PlotParams, String> {
        if self.is_toggle() {
            return Err(format!("{} is a toggle", self.label()));
        }
        let value: f64 = input
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a number", input.trim()))?;
        if !value.is_finite() {
            return Err(format!("{} must be a finite number", self.label()));
        }

        let mut next = *params;
        match self {
            ParamField::A => next.coefficients.a = value,
            ParamField::B => next.coefficients.b = value,
            ParamField::C => next.coefficients.c = value,
            ParamField::XMin => next.range.x_min = value,
            ParamField::XMax => next.range.x_max = value,
            ParamField::Points => {
                // Clamp while still a float; huge inputs would overflow usize.
                let steps = (value / POINTS_STEP as f64).round().clamp(
                    (MIN_POINTS / POINTS_STEP) as f64,
                    (MAX_POINTS / POINTS_STEP) as f64,
                ) as usize;
                next.range.points = clamp_points(steps * POINTS_STEP);
            }
            _ => {}
        }
        Ok(next)
    }
}

fn checkbox(on: bool) -> String {
    if on { "[x]".to_string() } else { "[ ]".to_string() }
}

/// Round away binary drift from repeated decimal steps, so that stepping
/// back to zero lands exactly on zero.
fn snap(value: f64) -> f64 {
    (value * STEP_RESOLUTION).round() / STEP_RESOLUTION
}

/// Clamp a sample count into the accepted range.
pub fn clamp_points(points: usize) -> usize {
    points.clamp(MIN_POINTS, MAX_POINTS)
}
