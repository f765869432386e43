//! Bar chart of received quantity per delivery date.
//!
//! Drawing goes through [`ChartBackend`], so layout and the chart lifecycle
//! do not depend on a browser canvas. A [`SupplyChart`] owns its backend for
//! as long as it is on screen; [`replace_chart`] tears the previous chart
//! down before the next one is drawn.

use contracts::dashboards::d400_supply::SupplyPoint;

pub const DATASET_LABEL: &str = "Надходження товарів";
pub const X_AXIS_TITLE: &str = "Дата поставки";
pub const Y_AXIS_TITLE: &str = "Кількість товарів";
pub const EMPTY_MESSAGE: &str = "Немає даних за обраний період";

pub const BAR_FILL: &str = "rgba(54, 162, 235, 0.5)";
pub const BAR_BORDER: &str = "rgba(54, 162, 235, 1)";
const AXIS_COLOR: &str = "#666666";
const GRID_COLOR: &str = "rgba(0, 0, 0, 0.1)";
const TEXT_COLOR: &str = "#333333";

const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 60.0;
const BAR_GAP_RATIO: f64 = 0.2;
const MIN_LABEL_WIDTH: f64 = 72.0;
const Y_TICKS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Drawing surface of a chart
pub trait ChartBackend {
    /// Current drawing size in CSS pixels
    fn size(&self) -> (f64, f64);
    /// Start a fresh frame of the given size
    fn begin_frame(&mut self, width: f64, height: f64);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn stroke_rect(&mut self, rect: Rect, color: &str, line_width: f64);
    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, line_width: f64);
    fn text(&mut self, text: &str, at: (f64, f64), align: TextAlign, color: &str);
    /// Remove everything this chart has drawn
    fn teardown(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub rect: Rect,
    pub show_label: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub plot: Rect,
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
}

/// Smallest 1, 2 or 5 times a power of ten that is >= `value`.
/// Non-positive input yields 1 so an all-zero chart still has a scale.
pub fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let fraction = value / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Labels and values of the chart, one bar per supply point
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarChartModel {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl BarChartModel {
    pub fn from_points(points: &[SupplyPoint]) -> Self {
        Self {
            labels: points.iter().map(|p| p.label().to_string()).collect(),
            values: points.iter().map(|p| p.total_quantity).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Top of the y axis; the axis always starts at zero
    pub fn axis_max(&self) -> f64 {
        nice_ceiling(self.values.iter().copied().fold(0.0, f64::max))
    }

    pub fn layout(&self, width: f64, height: f64) -> ChartLayout {
        let plot = Rect {
            x: MARGIN_LEFT,
            y: MARGIN_TOP,
            width: (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0),
            height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0),
        };
        let axis_max = self.axis_max();

        let ticks = (0..=Y_TICKS)
            .map(|k| {
                let share = k as f64 / Y_TICKS as f64;
                Tick {
                    value: axis_max * share,
                    y: plot.bottom() - plot.height * share,
                }
            })
            .collect();

        let slot = if self.is_empty() {
            0.0
        } else {
            plot.width / self.len() as f64
        };
        let label_step = if slot > 0.0 {
            (MIN_LABEL_WIDTH / slot).ceil().max(1.0) as usize
        } else {
            1
        };
        let bar_width = slot * (1.0 - BAR_GAP_RATIO);

        let bars = self
            .labels
            .iter()
            .zip(&self.values)
            .enumerate()
            .map(|(i, (label, &value))| {
                let bar_height = plot.height * (value.max(0.0) / axis_max);
                Bar {
                    label: label.clone(),
                    value,
                    rect: Rect {
                        x: plot.x + slot * i as f64 + slot * BAR_GAP_RATIO / 2.0,
                        y: plot.bottom() - bar_height,
                        width: bar_width,
                        height: bar_height,
                    },
                    show_label: i % label_step == 0,
                }
            })
            .collect();

        ChartLayout { plot, bars, ticks }
    }
}

fn draw<B: ChartBackend>(backend: &mut B, model: &BarChartModel) {
    let (width, height) = backend.size();
    backend.begin_frame(width, height);
    let layout = model.layout(width, height);
    let plot = layout.plot;

    // legend
    let swatch = Rect {
        x: plot.x,
        y: 14.0,
        width: 28.0,
        height: 12.0,
    };
    backend.fill_rect(swatch, BAR_FILL);
    backend.stroke_rect(swatch, BAR_BORDER, 1.0);
    backend.text(DATASET_LABEL, (swatch.right() + 8.0, 24.0), TextAlign::Left, TEXT_COLOR);
    backend.text(Y_AXIS_TITLE, (plot.right(), 24.0), TextAlign::Right, TEXT_COLOR);

    for tick in &layout.ticks {
        backend.line((plot.x, tick.y), (plot.right(), tick.y), GRID_COLOR, 1.0);
        backend.text(
            &format_tick(tick.value),
            (plot.x - 6.0, tick.y + 4.0),
            TextAlign::Right,
            TEXT_COLOR,
        );
    }
    backend.line((plot.x, plot.y), (plot.x, plot.bottom()), AXIS_COLOR, 1.0);
    backend.line((plot.x, plot.bottom()), (plot.right(), plot.bottom()), AXIS_COLOR, 1.0);

    for bar in &layout.bars {
        backend.fill_rect(bar.rect, BAR_FILL);
        backend.stroke_rect(bar.rect, BAR_BORDER, 1.0);
        if bar.show_label {
            backend.text(
                &bar.label,
                (bar.rect.x + bar.rect.width / 2.0, plot.bottom() + 18.0),
                TextAlign::Center,
                TEXT_COLOR,
            );
        }
    }

    if model.is_empty() {
        backend.text(
            EMPTY_MESSAGE,
            (plot.x + plot.width / 2.0, plot.y + plot.height / 2.0),
            TextAlign::Center,
            TEXT_COLOR,
        );
    }

    backend.text(
        X_AXIS_TITLE,
        (plot.x + plot.width / 2.0, height - 14.0),
        TextAlign::Center,
        TEXT_COLOR,
    );
}

/// A drawn chart. Owning the value means owning what is on the surface.
pub struct SupplyChart<B: ChartBackend> {
    backend: B,
    model: BarChartModel,
}

impl<B: ChartBackend> SupplyChart<B> {
    pub fn create(mut backend: B, model: BarChartModel) -> Self {
        draw(&mut backend, &model);
        Self { backend, model }
    }

    pub fn model(&self) -> &BarChartModel {
        &self.model
    }

    /// Clear the chart and hand the surface back
    pub fn destroy(mut self) -> B {
        self.backend.teardown();
        self.backend
    }
}

/// Destroy `previous` (if any) and draw a new chart for `model`.
/// `make_backend` is only called when there is no previous chart to take
/// the surface from.
pub fn replace_chart<B, F>(
    previous: Option<SupplyChart<B>>,
    make_backend: F,
    model: BarChartModel,
) -> Result<SupplyChart<B>, String>
where
    B: ChartBackend,
    F: FnOnce() -> Result<B, String>,
{
    let backend = match previous {
        Some(chart) => chart.destroy(),
        None => make_backend()?,
    };
    Ok(SupplyChart::create(backend, model))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        BeginFrame,
        Fill(Rect, String),
        Stroke(Rect),
        Line,
        Text(String),
        Teardown,
    }

    #[derive(Default)]
    struct RecordingBackend {
        ops: Vec<Op>,
    }

    impl ChartBackend for RecordingBackend {
        fn size(&self) -> (f64, f64) {
            (800.0, 400.0)
        }
        fn begin_frame(&mut self, _width: f64, _height: f64) {
            self.ops.push(Op::BeginFrame);
        }
        fn fill_rect(&mut self, rect: Rect, color: &str) {
            self.ops.push(Op::Fill(rect, color.to_string()));
        }
        fn stroke_rect(&mut self, rect: Rect, _color: &str, _line_width: f64) {
            self.ops.push(Op::Stroke(rect));
        }
        fn line(&mut self, _from: (f64, f64), _to: (f64, f64), _color: &str, _line_width: f64) {
            self.ops.push(Op::Line);
        }
        fn text(&mut self, text: &str, _at: (f64, f64), _align: TextAlign, _color: &str) {
            self.ops.push(Op::Text(text.to_string()));
        }
        fn teardown(&mut self) {
            self.ops.push(Op::Teardown);
        }
    }

    fn point(date: &str, quantity: f64) -> SupplyPoint {
        SupplyPoint {
            delivery_date: date.to_string(),
            total_quantity: quantity,
        }
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(5.0), 5.0);
        assert_eq!(nice_ceiling(7.0), 10.0);
        assert_eq!(nice_ceiling(12.0), 20.0);
        assert_eq!(nice_ceiling(250.0), 500.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(-3.0), 1.0);
    }

    #[test]
    fn test_single_point_renders_one_full_bar() {
        let model = BarChartModel::from_points(&[point("2024-01-01", 5.0)]);
        assert_eq!(model.labels(), ["2024-01-01".to_string()]);
        assert_eq!(model.axis_max(), 5.0);

        let chart = SupplyChart::create(RecordingBackend::default(), model);
        let layout = chart.model().layout(800.0, 400.0);
        assert_eq!(layout.bars.len(), 1);
        let bar = &layout.bars[0];
        assert_eq!(bar.value, 5.0);
        assert_eq!(bar.rect.height, layout.plot.height);
        assert_eq!(bar.rect.bottom(), layout.plot.bottom());

        let backend = chart.destroy();
        assert!(backend.ops.contains(&Op::Fill(bar.rect, BAR_FILL.to_string())));
        assert!(backend.ops.contains(&Op::Text("2024-01-01".to_string())));
        assert!(!backend.ops.contains(&Op::Text(EMPTY_MESSAGE.to_string())));
    }

    #[test]
    fn test_bars_scale_from_zero_in_input_order() {
        let model = BarChartModel::from_points(&[
            point("2024-01-02", 3.0),
            point("2024-01-01T00:00:00.000Z", 6.0),
        ]);
        assert_eq!(model.axis_max(), 10.0);
        let layout = model.layout(800.0, 400.0);
        assert_eq!(layout.bars[0].label, "2024-01-02");
        assert_eq!(layout.bars[1].label, "2024-01-01");
        assert!(layout.bars[0].rect.x < layout.bars[1].rect.x);
        assert!((layout.bars[1].rect.height - layout.plot.height * 0.6).abs() < 1e-9);
        assert_eq!(layout.ticks.first().map(|t| t.value), Some(0.0));
        assert_eq!(layout.ticks.last().map(|t| t.value), Some(10.0));
    }

    #[test]
    fn test_crowded_labels_are_thinned() {
        let points: Vec<SupplyPoint> = (1..=31)
            .map(|d| point(&format!("2024-01-{:02}", d), d as f64))
            .collect();
        let layout = BarChartModel::from_points(&points).layout(800.0, 400.0);
        assert_eq!(layout.bars.len(), 31);
        assert!(layout.bars[0].show_label);
        assert!(layout.bars.iter().filter(|b| b.show_label).count() < 31);
    }

    #[test]
    fn test_empty_data_shows_message() {
        let chart = SupplyChart::create(RecordingBackend::default(), BarChartModel::default());
        let backend = chart.destroy();
        assert!(backend.ops.contains(&Op::Text(EMPTY_MESSAGE.to_string())));
    }

    #[test]
    fn test_replace_destroys_previous_before_drawing() {
        let mut created = 0;
        let first = replace_chart(
            None,
            || {
                created += 1;
                Ok(RecordingBackend::default())
            },
            BarChartModel::from_points(&[point("2024-01-01", 5.0)]),
        )
        .unwrap();
        assert_eq!(created, 1);

        let second = replace_chart(
            Some(first),
            || {
                created += 1;
                Ok(RecordingBackend::default())
            },
            BarChartModel::from_points(&[point("2024-02-01", 8.0)]),
        )
        .unwrap();
        assert_eq!(created, 1, "the surface of the old chart is reused");
        assert_eq!(second.model().values(), [8.0]);

        let ops = second.destroy().ops;
        let teardown = ops.iter().position(|op| *op == Op::Teardown).unwrap();
        let frames: Vec<usize> = ops
            .iter()
            .enumerate()
            .filter(|(_, op)| **op == Op::BeginFrame)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(frames.len(), 2);
        assert!(frames[0] < teardown && teardown < frames[1]);
    }

    #[test]
    fn test_backend_failure_is_reported() {
        let result: Result<SupplyChart<RecordingBackend>, String> =
            replace_chart(None, || Err("no canvas".to_string()), BarChartModel::default());
        assert_eq!(result.err().as_deref(), Some("no canvas"));
    }
}
