use crate::domain::chart::{CandleLayout, ScaleParams};
use crate::domain::logging::{get_logger, LogComponent};
use crate::domain::market_data::PriceSeries;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Fixed dark visual theme for the price chart
#[derive(Debug, Clone)]
pub struct ChartTheme {
    pub background: &'static str,
    pub grid: &'static str,
    pub wick: &'static str,
    pub bullish: &'static str,
    pub bearish: &'static str,
    pub volume_up: &'static str,
    pub volume_down: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: "#1a1a1a",
            grid: "#2e2e2e",
            wick: "#888888",
            bullish: "#00ff88",
            bearish: "#ff4444",
            volume_up: "rgba(0, 255, 136, 0.5)",
            volume_down: "rgba(255, 68, 68, 0.5)",
            text: "#aaaaaa",
            accent: "#00ff88",
        }
    }
}

/// Canvas 2D candlestick + volume renderer. One instance per chart mount;
/// the owning component re-renders it on data and viewport changes and drops
/// it on unmount.
pub struct PriceChartRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
    theme: ChartTheme,
}

impl PriceChartRenderer {
    pub fn new(canvas_id: String, width: u32, height: u32) -> Self {
        Self { canvas_id, width, height, theme: ChartTheme::default() }
    }

    /// Update canvas dimensions (viewport resize)
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Get canvas element and context
    fn canvas_context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("Document not available"))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| JsValue::from_str("Canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("Failed to cast canvas element"))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("Failed to get 2D context"))?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))
    }

    /// Render the full chart; the visible range always fits the series
    pub fn render(&self, ticker: &str, series: &PriceSeries) -> Result<(), JsValue> {
        let context = self.canvas_context()?;

        context.clear_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));
        context.set_fill_style(&JsValue::from(self.theme.background));
        context.fill_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));

        match ScaleParams::compute(self.width, self.height, series) {
            Some(params) => {
                get_logger().debug(
                    LogComponent::Infrastructure("PriceChart"),
                    &format!("Rendering {} daily candles for {ticker}", series.len()),
                );
                self.render_grid(&context, &params)?;
                self.render_volume(&context, series, &params);
                self.render_candles(&context, series, &params);
                self.render_price_scale(&context, series, &params)?;
                self.render_title(&context, ticker)?;
            }
            None => self.render_no_data(&context, ticker)?,
        }

        Ok(())
    }

    fn render_grid(
        &self,
        context: &CanvasRenderingContext2d,
        params: &ScaleParams,
    ) -> Result<(), JsValue> {
        context.set_stroke_style(&JsValue::from(self.theme.grid));
        context.set_line_width(1.0);
        context.set_fill_style(&JsValue::from(self.theme.text));
        context.set_font("11px monospace");

        for (y, price) in params.grid_levels(4) {
            context.begin_path();
            context.move_to(params.padding, y);
            context.line_to(params.padding + params.chart_width, y);
            context.stroke();
            context.fill_text(&format!("${price:.2}"), 6.0, y + 4.0)?;
        }
        Ok(())
    }

    fn render_volume(
        &self,
        context: &CanvasRenderingContext2d,
        series: &PriceSeries,
        params: &ScaleParams,
    ) {
        for (i, point) in series.points().iter().enumerate() {
            let layout = CandleLayout::compute(i, point, params);
            let color = if layout.is_up { self.theme.volume_up } else { self.theme.volume_down };
            context.set_fill_style(&JsValue::from(color));
            context.fill_rect(
                layout.x - layout.body_width / 2.0,
                layout.volume_top,
                layout.body_width,
                layout.volume_height,
            );
        }
    }

    fn render_candles(
        &self,
        context: &CanvasRenderingContext2d,
        series: &PriceSeries,
        params: &ScaleParams,
    ) {
        for (i, point) in series.points().iter().enumerate() {
            let layout = CandleLayout::compute(i, point, params);
            self.render_single_candle(context, &layout);
        }
    }

    fn render_single_candle(&self, context: &CanvasRenderingContext2d, layout: &CandleLayout) {
        // Wick (high-low)
        context.set_stroke_style(&JsValue::from(self.theme.wick));
        context.set_line_width(1.0);
        context.begin_path();
        context.move_to(layout.x, layout.high_y);
        context.line_to(layout.x, layout.low_y);
        context.stroke();

        let color = if layout.is_up { self.theme.bullish } else { self.theme.bearish };
        context.set_fill_style(&JsValue::from(color));
        context.set_stroke_style(&JsValue::from(color));

        let left = layout.x - layout.body_width / 2.0;
        if layout.body_height < 1.0 {
            // Doji - draw a line
            context.begin_path();
            context.move_to(left, layout.body_top);
            context.line_to(left + layout.body_width, layout.body_top);
            context.stroke();
        } else if layout.is_up {
            // Bullish candle - outline
            context.stroke_rect(left, layout.body_top, layout.body_width, layout.body_height);
        } else {
            // Bearish candle - filled
            context.fill_rect(left, layout.body_top, layout.body_width, layout.body_height);
        }
    }

    fn render_price_scale(
        &self,
        context: &CanvasRenderingContext2d,
        series: &PriceSeries,
        params: &ScaleParams,
    ) -> Result<(), JsValue> {
        if let Some(latest) = series.latest() {
            let y = params.price_y(latest.close);
            let line_end = params.padding + params.chart_width;

            context.set_stroke_style(&JsValue::from(self.theme.accent));
            context.set_line_width(1.0);
            context.begin_path();
            context.move_to(params.padding, y);
            context.line_to(line_end, y);
            context.stroke();

            context.set_fill_style(&JsValue::from(self.theme.accent));
            context.set_font("12px monospace");
            context.fill_text(&format!("${:.2}", latest.close), line_end + 10.0, y + 4.0)?;
        }
        Ok(())
    }

    fn render_title(
        &self,
        context: &CanvasRenderingContext2d,
        ticker: &str,
    ) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from("#ffffff"));
        context.set_font("16px monospace");
        context.fill_text(ticker, 50.0, 30.0)?;
        Ok(())
    }

    fn render_no_data(
        &self,
        context: &CanvasRenderingContext2d,
        ticker: &str,
    ) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from("#ffffff"));
        context.set_font("16px monospace");
        let text = format!("No price data available for {ticker}");
        context.fill_text(&text, 50.0, f64::from(self.height) / 2.0)?;

        get_logger().warn(
            LogComponent::Infrastructure("PriceChart"),
            &format!("No price points to render for {ticker}"),
        );
        Ok(())
    }
}
