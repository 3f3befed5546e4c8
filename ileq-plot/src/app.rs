use eframe::egui::{self, Color32, RichText};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, Polygon, Text};
use ileq_core::{
    Bounds, Config, Evaluation, Input, InputError, Operand, Tag, evaluate, legend,
};

use crate::scene::{self, Layer, Stroke};

const STEP: f64 = 0.5;

/// A runnable egui application for exploring `[A]x = [b]`.
///
/// Inputs are edited in the left panel; the equation is re-evaluated
/// whenever they change.
pub struct ExplorerApp {
    input: Input,
    config: Config,
    evaluated: Input,
    result: Result<Evaluation, InputError>,
}

impl ExplorerApp {
    #[must_use]
    pub fn new(input: Input, config: Config) -> Self {
        Self {
            input,
            config,
            evaluated: input,
            result: evaluate(&input, &config),
        }
    }

    /// Returns the result for the current input.
    pub fn result(&self) -> &Result<Evaluation, InputError> {
        &self.result
    }

    /// Replaces the input and re-evaluates.
    pub fn set_input(&mut self, input: Input) {
        self.input = input;
        self.refresh();
    }

    /// Re-evaluates if the input changed since the last evaluation.
    ///
    /// Returns true if the result was recomputed.
    fn refresh(&mut self) -> bool {
        if self.input == self.evaluated {
            return false;
        }
        self.evaluated = self.input;
        self.result = evaluate(&self.input, &self.config);
        if let Err(err) = &self.result {
            tracing::debug!(%err, "input rejected");
        }
        true
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }

    fn input_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Intervals");

        interval_fields(
            ui,
            Operand::A,
            &mut self.input.a.min,
            &mut self.input.a.max,
            &mut self.input.tag_a,
        );
        interval_fields(
            ui,
            Operand::B,
            &mut self.input.b.min,
            &mut self.input.b.max,
            &mut self.input.tag_b,
        );

        ui.separator();
        ui.strong("Semantics legend");
        for line in legend() {
            ui.label(line);
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("inputs").show(ctx, |ui| self.input_panel(ui));
        if self.refresh() {
            ctx.request_repaint();
        }

        let Ok(evaluation) = &self.result else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.label("Fix the highlighted interval to see the analysis.");
            });
            return;
        };

        egui::SidePanel::right("explanation")
            .min_width(260.0)
            .show(ctx, |ui| explanation_panel(ui, evaluation));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("Analysis: {}", evaluation.case));
            ui.label(RichText::new(evaluation.case.relation()).size(18.0));

            match &evaluation.outcome {
                Ok(sol) => {
                    ui.colored_label(
                        Color32::DARK_GREEN,
                        format!("Solution found: x ∈ {:.4}", sol.interval),
                    );
                    ui.monospace(sol.formula.to_string());
                }
                Err(err) => {
                    ui.colored_label(Color32::RED, format!("Result: {err}"));
                }
            }

            ui.separator();
            ui.label("Geometric view: intersection of the cone [A]x with the band [b]");
            geometry_plot(ui, evaluation);
        });
    }
}

fn interval_fields(
    ui: &mut egui::Ui,
    operand: Operand,
    min: &mut f64,
    max: &mut f64,
    tag: &mut Tag,
) {
    ui.add_space(8.0);
    ui.strong(format!("Interval {operand}"));
    ui.horizontal(|ui| {
        ui.add(egui::DragValue::new(min).speed(STEP).prefix("min "));
        ui.add(egui::DragValue::new(max).speed(STEP).prefix("max "));
    });
    if let Some(err) = field_error(operand, Bounds::new(*min, *max)) {
        ui.colored_label(Color32::RED, err.to_string());
    }
    for option in Tag::ALL {
        ui.radio_value(tag, option, option.label())
            .on_hover_text(option.help());
    }
}

/// Validates the bounds as currently entered, before the next evaluation.
fn field_error(operand: Operand, bounds: Bounds) -> Option<InputError> {
    bounds
        .to_interval()
        .err()
        .map(|source| InputError { operand, source })
}

fn explanation_panel(ui: &mut egui::Ui, evaluation: &Evaluation) {
    let explanation = evaluation.case.explanation();

    ui.heading("Explanation");
    ui.label(format!("Detected reading: {}", evaluation.case));
    ui.add_space(8.0);
    ui.strong("Context");
    ui.label(explanation.context);
    ui.add_space(4.0);
    ui.strong("Operation");
    ui.label(explanation.operation);

    ui.separator();
    ui.strong("Intervals");
    ui.label(format!("[A] = {} ({})", evaluation.a, evaluation.tag_a));
    ui.label(format!("[b] = {} ({})", evaluation.b, evaluation.tag_b));
}

fn geometry_plot(ui: &mut egui::Ui, evaluation: &Evaluation) {
    let geometry = &evaluation.geometry;
    let viewport = geometry.viewport;

    Plot::new("ileq-geometry")
        .legend(Legend::default())
        .x_axis_label("x")
        .y_axis_label("Ax and b")
        .default_x_bounds(viewport.x[0], viewport.x[1])
        .default_y_bounds(viewport.y[0], viewport.y[1])
        .show(ui, |plot_ui| {
            for layer in scene::layers(geometry) {
                match layer {
                    Layer::Fill {
                        name,
                        points,
                        color,
                    } => plot_ui.polygon(
                        Polygon::new(name, PlotPoints::from(points))
                            .fill_color(color)
                            .stroke(egui::Stroke::NONE),
                    ),
                    Layer::Line {
                        name,
                        points,
                        color,
                        width,
                        stroke,
                    } => {
                        let mut line = Line::new("", PlotPoints::from(points))
                            .color(color)
                            .width(width)
                            .style(line_style(stroke));
                        if let Some(name) = name {
                            line = line.name(name);
                        }
                        plot_ui.line(line);
                    }
                    Layer::Text {
                        position,
                        text,
                        color,
                    } => plot_ui.text(Text::new(
                        "",
                        PlotPoint::new(position[0], position[1]),
                        RichText::new(text).color(color).strong(),
                    )),
                }
            }
        });
}

fn line_style(stroke: Stroke) -> LineStyle {
    match stroke {
        Stroke::Solid => LineStyle::Solid,
        Stroke::Dashed => LineStyle::Dashed { length: 8.0 },
        Stroke::Dotted => LineStyle::Dotted { spacing: 6.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ileq_core::{Case, IntervalError};

    #[test]
    fn evaluates_initial_input() {
        let app = ExplorerApp::new(Input::default(), Config::default());
        let evaluation = app.result().as_ref().expect("valid default input");
        assert_eq!(evaluation.case, Case::Robust);
    }

    #[test]
    fn re_evaluates_on_input_change() {
        let mut app = ExplorerApp::new(Input::default(), Config::default());
        app.set_input(Input {
            tag_b: Tag::Epistemic,
            ..Input::default()
        });

        let evaluation = app.result().as_ref().expect("valid input");
        assert_eq!(evaluation.case, Case::United);
        assert!(evaluation.solution().is_some());
    }

    #[test]
    fn field_error_reflects_current_bounds() {
        let err = field_error(Operand::A, Bounds::new(3.0, 1.0)).expect("inverted bounds");
        assert_eq!(err.operand, Operand::A);
        assert!(matches!(err.source, IntervalError::Inverted { .. }));

        assert!(field_error(Operand::B, Bounds::new(4.0, 4.0)).is_none());
    }

    #[test]
    fn refresh_reports_recomputation_once() {
        let mut app = ExplorerApp::new(Input::default(), Config::default());
        assert!(!app.refresh());

        app.input.a = Bounds::new(3.0, 1.0);
        assert!(app.refresh());
        assert!(app.result().is_err());
        assert!(!app.refresh());
    }

    #[test]
    fn withholds_evaluation_for_inverted_interval() {
        let mut app = ExplorerApp::new(Input::default(), Config::default());
        app.set_input(Input {
            b: Bounds::new(6.0, 4.0),
            ..Input::default()
        });

        let err = app.result().as_ref().expect_err("inverted interval");
        assert_eq!(err.operand, Operand::B);
    }
}
