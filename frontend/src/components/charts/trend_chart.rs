use chrono::{DateTime, Duration, FixedOffset};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::TrendPoint;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const INCOME_COLOR: RGBColor = RGBColor(57, 255, 20);
const EXPENSE_COLOR: RGBColor = RGBColor(255, 105, 180);

/// Chart-ready series derived from the per-day trend points.
struct TrendSeries {
    income: Vec<(DateTime<FixedOffset>, f64)>,
    expense: Vec<(DateTime<FixedOffset>, f64)>,
    first_date: DateTime<FixedOffset>,
    last_date: DateTime<FixedOffset>,
    max_value: f64,
}

/// Turn day keys into datetime coordinates (noon, so points sit mid-day).
/// Days that fail to parse are skipped; a single-day series gets one day of
/// padding on each side so the x range stays non-degenerate.
fn chart_series(points: &[TrendPoint]) -> Option<TrendSeries> {
    let mut income = Vec::new();
    let mut expense = Vec::new();

    for point in points {
        let timestamp = format!("{}T12:00:00+00:00", point.date);
        if let Ok(date) = DateTime::parse_from_rfc3339(&timestamp) {
            income.push((date, point.income));
            expense.push((date, point.expense));
        }
    }

    if income.is_empty() {
        return None;
    }

    let first = income.first()?.0;
    let last = income.last()?.0;
    let (first_date, last_date) = if first == last {
        (first - Duration::days(1), last + Duration::days(1))
    } else {
        (first, last)
    };

    let max_value = income
        .iter()
        .chain(expense.iter())
        .map(|(_, value)| *value)
        .fold(0.0_f64, f64::max);

    Some(TrendSeries {
        income,
        expense,
        first_date,
        last_date,
        max_value,
    })
}

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub points: Vec<TrendPoint>,
}

pub struct TrendChart {
    canvas_ref: NodeRef,
}

impl Component for TrendChart {
    type Message = ();
    type Properties = TrendChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().points != old_props.points {
            self.draw_chart(&ctx.props().points);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().points.is_empty() {
            self.draw_chart(&ctx.props().points);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let point_count = ctx.props().points.len();

        html! {
            <section class="chart-section card">
                <div class="chart-title-row">
                    <h2 class="chart-title">{"Income vs Expense Over Time"}</h2>
                    <div class="chart-legend">
                        <span class="legend-chip income">{"Income"}</span>
                        <span class="legend-chip expense">{"Expense"}</span>
                    </div>
                </div>
                {if point_count == 0 {
                    html! {
                        <div class="chart-empty">
                            <p>{"No transaction data available for chart"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="chart-content">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="trend-chart-canvas"
                                width="800"
                                height="350"
                            ></canvas>
                        </div>
                    }
                }}
            </section>
        }
    }
}

impl TrendChart {
    fn draw_chart(&self, points: &[TrendPoint]) {
        let series = match chart_series(points) {
            Some(series) => series,
            None => return,
        };

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        canvas.set_width(800);
        canvas.set_height(350);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let y_max = (series.max_value * 1.1).max(1.0);

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(70)
            .build_cartesian_2d(series.first_date..series.last_date, 0.0..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .y_desc("Amount (₹)")
            .x_desc("Date")
            .y_label_formatter(&|v| format!("{:.0}", v))
            .x_label_formatter(&|v| v.format("%m/%d").to_string())
            .label_style(("sans-serif", 12, &RGBColor(102, 126, 234)))
            .axis_style(&RGBColor(230, 230, 230))
            .bold_line_style(&RGBColor(245, 245, 245))
            .light_line_style(&RGBColor(250, 250, 250))
            .x_labels(6)
            .y_labels(8)
            .draw()
            .is_err()
        {
            return;
        }

        if chart
            .draw_series(LineSeries::new(
                series.income.iter().copied(),
                INCOME_COLOR.stroke_width(2),
            ))
            .is_err()
        {
            return;
        }

        if chart
            .draw_series(LineSeries::new(
                series.expense.iter().copied(),
                EXPENSE_COLOR.stroke_width(2),
            ))
            .is_err()
        {
            return;
        }

        for (date, value) in series.income.iter().chain(series.expense.iter()) {
            let _ = chart.draw_series(std::iter::once(Circle::new(
                (*date, *value),
                3,
                RGBColor(102, 126, 234).filled(),
            )));
        }

        let _ = root.present();
    }
}


#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_component_creation_in_wasm() {
        let chart = TrendChart {
            canvas_ref: NodeRef::default(),
        };

        chart.draw_chart(&[]);
    }
}
