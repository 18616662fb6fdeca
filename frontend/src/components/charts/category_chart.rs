use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::CategoryBreakdown;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

/// Slice palette, cycled when there are more buckets than colors
const PALETTE: [RGBColor; 8] = [
    RGBColor(57, 255, 20),
    RGBColor(0, 255, 255),
    RGBColor(191, 0, 255),
    RGBColor(255, 165, 0),
    RGBColor(255, 105, 180),
    RGBColor(255, 99, 71),
    RGBColor(255, 69, 0),
    RGBColor(0, 255, 0),
];

fn slice_colors(count: usize) -> Vec<RGBColor> {
    (0..count).map(|i| PALETTE[i % PALETTE.len()]).collect()
}

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub breakdown: CategoryBreakdown,
}

pub struct CategoryChart {
    canvas_ref: NodeRef,
}

impl Component for CategoryChart {
    type Message = ();
    type Properties = CategoryChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().breakdown != old_props.breakdown {
            self.draw_chart(&ctx.props().breakdown);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().breakdown.buckets.is_empty() {
            self.draw_chart(&ctx.props().breakdown);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let bucket_count = ctx.props().breakdown.buckets.len();

        html! {
            <section class="chart-section card">
                <h2 class="chart-title">{"Category Breakdown"}</h2>
                {if bucket_count == 0 {
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
                                class="category-chart-canvas"
                                width="420"
                                height="420"
                            ></canvas>
                        </div>
                    }
                }}
            </section>
        }
    }
}

impl CategoryChart {
    fn draw_chart(&self, breakdown: &CategoryBreakdown) {
        if breakdown.buckets.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        canvas.set_width(420);
        canvas.set_height(420);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let sizes: Vec<f64> = breakdown.buckets.iter().map(|b| b.value).collect();
        let labels: Vec<String> = breakdown.buckets.iter().map(|b| b.name.clone()).collect();
        let colors = slice_colors(sizes.len());
        let center = (210, 210);
        let radius = 150.0;

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.donut_hole(90.0);
        pie.label_style(("sans-serif", 14).into_font().color(&BLACK));
        pie.percentages(("sans-serif", 12).into_font().color(&BLACK));

        if root.draw(&pie).is_err() {
            return;
        }

        let _ = root.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CategoryBucket;

    #[test]
    fn test_palette_cycles_past_eight_buckets() {
        let colors = slice_colors(10);

        assert_eq!(colors.len(), 10);
        assert_eq!(colors[8], PALETTE[0]);
        assert_eq!(colors[9], PALETTE[1]);
    }

    #[test]
    fn test_draw_chart_with_empty_breakdown() {
        let chart = CategoryChart {
            canvas_ref: NodeRef::default(),
        };
        let breakdown = CategoryBreakdown {
            buckets: vec![],
            total_expenses: 0.0,
            balance: 0.0,
        };

        // Must not panic without a canvas or data
        chart.draw_chart(&breakdown);
    }

    #[test]
    fn test_props_carry_buckets() {
        let props = CategoryChartProps {
            breakdown: CategoryBreakdown {
                buckets: vec![CategoryBucket { name: "rent".to_string(), value: 1000.0 }],
                total_expenses: 1000.0,
                balance: -1000.0,
            },
        };

        assert_eq!(props.breakdown.buckets.len(), 1);
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_component_creation_in_wasm() {
        let chart = CategoryChart {
            canvas_ref: NodeRef::default(),
        };
        let breakdown = CategoryBreakdown {
            buckets: vec![],
            total_expenses: 0.0,
            balance: 0.0,
        };

        chart.draw_chart(&breakdown);
    }
}
