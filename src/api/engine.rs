use tracing::{debug, warn};

use crate::core::{
    ChartLayout, DEFAULT_WIDTH, Margins, RESPONSIVE_MIN_WIDTH, TimeUnit, XAxisMode,
    coerce_datasets, format_count, format_date, format_timeline, x_extent, x_scale, y_extent,
    y_label_offset, y_scale,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    HoverTarget, TooltipAnchor, TooltipController, TooltipItem, TooltipState, placement_for,
};
use crate::render::{
    LegendEntry, Surface, XAxisSpec, YAxisSpec, apply_tooltip, draw_dots, draw_legend, draw_line,
    draw_title, draw_watermark, draw_x_axis, draw_x_label, draw_y_axis, draw_y_label, inject_defs,
};

use super::{ChartConfig, Environment, OptionOverrides, RenderOptions};

/// Plot geometry plus the per-render elapsed-time unit, shared by axis ticks
/// and tooltip titles so a chart never mixes units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub layout: ChartLayout,
    pub timeline_unit: Option<TimeUnit>,
}

#[derive(Debug, Clone, PartialEq)]
struct SeriesMeta {
    label: String,
    color: String,
}

/// Top-level orchestrator: resolves options, derives scales from all
/// datasets, and invokes the renderers in a fixed order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEngine {
    config: ChartConfig,
    overrides: OptionOverrides,
}

impl ChartEngine {
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            overrides: OptionOverrides::default(),
        }
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: OptionOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Renders the chart into the surface and returns the interaction handle.
    ///
    /// Rendering is deterministic and synchronous; calling it again on the
    /// same surface replaces the previous chart completely, which also
    /// invalidates any earlier [`RenderedChart`].
    pub fn render(&self, surface: &mut Surface) -> ChartResult<RenderedChart> {
        self.config.validate()?;
        let options =
            RenderOptions::merged(self.config.theme, self.config.transparent, &self.overrides);
        options.validate()?;
        let font_sizes = self.config.font_sizes;

        let margins = Margins::for_chart(self.config.title.is_some(), self.config.y_label.is_some());
        let width = surface
            .width_attr()
            .or(options.fixed_width)
            .unwrap_or(DEFAULT_WIDTH);
        let layout = ChartLayout::compute(width, margins)?;

        debug!(
            width = layout.width,
            height = layout.height,
            datasets = self.config.datasets().len(),
            environment = ?options.environment,
            "rendering chart"
        );

        surface.clear();
        let root = surface.root();
        surface.set_style(root, "stroke-width", "3");
        surface.set_style(root, "font-family", options.font_family.clone());
        surface.set_style(root, "background", options.background_color.clone());
        match options.environment {
            Environment::Browser => {
                // Stretch to the container above the threshold; below it the
                // chart keeps a readable fixed width.
                if layout.width <= RESPONSIVE_MIN_WIDTH {
                    surface.set_attr(root, "width", format!("{RESPONSIVE_MIN_WIDTH:.0}"));
                } else {
                    surface.set_attr(root, "width", "100%");
                }
                surface.set_attr(
                    root,
                    "viewBox",
                    format!(
                        "0 0 {:.0} {:.0}",
                        layout.width.max(RESPONSIVE_MIN_WIDTH),
                        layout.height
                    ),
                );
            }
            Environment::Node => {
                surface.set_attr(root, "width", format!("{:.0}", layout.width));
            }
        }
        surface.set_attr(root, "height", format!("{:.0}", layout.height));
        surface.set_attr(root, "preserveAspectRatio", "xMidYMid meet");

        inject_defs(surface, &options.font_family);

        let coerced = coerce_datasets(self.config.datasets());
        let total_points: usize = coerced.iter().map(Vec::len).sum();
        if total_points == 0 {
            warn!("no data points supplied; rendering axes only");
        }

        let x_ext = x_extent(&coerced);
        let y_ext = y_extent(&coerced);
        let timeline_unit = match options.x_axis_mode {
            XAxisMode::Number => x_ext.map(|(_, max)| TimeUnit::for_offset(max)),
            XAxisMode::Date => None,
        };

        let xs = x_scale(options.x_axis_mode, x_ext, layout.plot_width)?;
        let ys = y_scale(y_ext, layout.plot_height)?;

        let plot = surface.create_element("g");
        surface.set_attr(
            plot,
            "transform",
            format!("translate({:.2},{:.2})", margins.left, margins.top),
        );
        surface.set_attr(plot, "pointer-events", "all");
        surface.append_child(root, plot);

        draw_watermark(surface, plot, layout.plot_width, layout.plot_height);

        if let Some(title) = &self.config.title {
            let logo = self
                .config
                .datasets()
                .first()
                .and_then(|dataset| dataset.logo.as_deref());
            draw_title(
                surface,
                title,
                logo,
                &options.stroke_color,
                layout.width,
                font_sizes.title,
            );
        }
        if let Some(x_label) = &self.config.x_label {
            draw_x_label(
                surface,
                x_label,
                &options.stroke_color,
                layout.height,
                font_sizes.label,
            );
        }
        if let Some(y_label) = &self.config.y_label {
            let offset = y_label_offset(y_ext.map_or(0.0, |(_, max)| max));
            draw_y_label(
                surface,
                y_label,
                &options.stroke_color,
                layout.height,
                offset,
                font_sizes.label,
            );
        }

        draw_x_axis(
            surface,
            plot,
            &XAxisSpec {
                scale: xs,
                tick_count: options.x_tick_count,
                plot_height: layout.plot_height,
                mode: options.x_axis_mode,
                date_format: &options.date_format,
                unit: timeline_unit,
                stroke: &options.stroke_color,
                font_size: font_sizes.axis,
            },
        );
        draw_y_axis(
            surface,
            plot,
            &YAxisSpec {
                scale: ys,
                tick_count: options.y_tick_count,
                plot_height: layout.plot_height,
                stroke: &options.stroke_color,
                font_size: font_sizes.axis,
            },
        );

        let pixel_series: Vec<Vec<(f64, f64)>> = coerced
            .iter()
            .map(|points| {
                points
                    .iter()
                    .map(|point| (xs.map(point.x), ys.map(point.y)))
                    .collect()
            })
            .collect();

        if options.show_line {
            for (index, points) in pixel_series.iter().enumerate() {
                draw_line(surface, plot, points, options.palette.color(index));
            }
        }

        let mut targets = Vec::new();
        if self.config.show_dots {
            for (series_index, points) in pixel_series.iter().enumerate() {
                let dots = draw_dots(
                    surface,
                    plot,
                    series_index,
                    points,
                    options.palette.color(series_index),
                    options.dot_base_radius(),
                );
                // Hover wiring only exists in the browser strategy; the Node
                // path stays free of anything event-shaped.
                if options.environment == Environment::Browser {
                    for (point_index, node) in dots.iter().enumerate() {
                        let (cx, cy) = points[point_index];
                        let sample = coerced[series_index][point_index];
                        targets.push(HoverTarget {
                            series: series_index,
                            point: point_index,
                            node: *node,
                            cx,
                            cy,
                            x_ms: sample.x,
                            y: sample.y,
                        });
                    }
                }
            }
        }

        let entries: Vec<LegendEntry> = self
            .config
            .datasets()
            .iter()
            .enumerate()
            .map(|(index, dataset)| LegendEntry {
                color: options.palette.color(index).to_owned(),
                label: dataset.label.clone(),
                logo: dataset.logo.clone(),
            })
            .collect();
        draw_legend(surface, plot, &entries, &options.stroke_color);

        let series = entries
            .into_iter()
            .map(|entry| SeriesMeta {
                label: entry.label,
                color: entry.color,
            })
            .collect();

        Ok(RenderedChart {
            geometry: ChartGeometry {
                layout,
                timeline_unit,
            },
            surface_generation: surface.generation(),
            targets,
            tooltip: TooltipController::new(),
            mode: options.x_axis_mode,
            date_format: options.date_format.clone(),
            background_color: options.background_color.clone(),
            stroke_color: options.stroke_color.clone(),
            dot_base_radius: options.dot_base_radius(),
            dot_hover_radius: options.dot_hover_radius(),
            series,
        })
    }
}

/// Interaction handle for one rendered chart.
///
/// Owns the per-render tooltip controller and hover wiring; dropped or
/// replaced wholesale when the chart is re-rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    geometry: ChartGeometry,
    surface_generation: u64,
    targets: Vec<HoverTarget>,
    tooltip: TooltipController,
    mode: XAxisMode,
    date_format: String,
    background_color: String,
    stroke_color: String,
    dot_base_radius: f64,
    dot_hover_radius: f64,
    series: Vec<SeriesMeta>,
}

impl RenderedChart {
    #[must_use]
    pub fn geometry(&self) -> ChartGeometry {
        self.geometry
    }

    #[must_use]
    pub fn hover_targets(&self) -> &[HoverTarget] {
        &self.targets
    }

    #[must_use]
    pub fn tooltip_state(&self) -> &TooltipState {
        self.tooltip.state()
    }

    /// Pointer entered the marker at `target_index`: enlarge it, show the
    /// tooltip.
    pub fn pointer_enter(
        &mut self,
        surface: &mut Surface,
        target_index: usize,
    ) -> ChartResult<()> {
        let target = self
            .targets
            .get(target_index)
            .cloned()
            .ok_or_else(|| ChartError::InvalidData("unknown hover target".to_owned()))?;
        if surface.generation() != self.surface_generation {
            return Err(ChartError::InvalidData(
                "surface was re-rendered; hover targets are stale".to_owned(),
            ));
        }

        surface.set_attr(target.node, "r", format!("{}", self.dot_hover_radius));

        let title = match self.mode {
            XAxisMode::Date => format_date(target.x_ms, &self.date_format),
            XAxisMode::Number => {
                let unit = self
                    .geometry
                    .timeline_unit
                    .unwrap_or_else(|| TimeUnit::for_offset(target.x_ms));
                format_timeline(target.x_ms, unit)
            }
        };
        let meta = &self.series[target.series];
        let item = TooltipItem {
            color: meta.color.clone(),
            text: format!("{}: {}", meta.label, format_count(target.y)),
        };
        let margins = self.geometry.layout.margins;
        let anchor = TooltipAnchor {
            x: margins.left + target.cx + 5.0,
            y: margins.top + target.cy + 5.0,
            placement: placement_for(
                target.cx,
                target.cy,
                self.geometry.layout.plot_width,
                self.geometry.layout.plot_height,
            ),
        };

        let state = self.tooltip.on_marker_enter(title, item, anchor);
        apply_tooltip(surface, state, &self.background_color, &self.stroke_color);
        Ok(())
    }

    /// Pointer left the marker: restore its radius, hide the tooltip.
    pub fn pointer_leave(
        &mut self,
        surface: &mut Surface,
        target_index: usize,
    ) -> ChartResult<()> {
        let target = self
            .targets
            .get(target_index)
            .cloned()
            .ok_or_else(|| ChartError::InvalidData("unknown hover target".to_owned()))?;
        if surface.generation() != self.surface_generation {
            return Err(ChartError::InvalidData(
                "surface was re-rendered; hover targets are stale".to_owned(),
            ));
        }
        surface.set_attr(target.node, "r", format!("{}", self.dot_base_radius));

        let state = self.tooltip.on_marker_leave();
        apply_tooltip(surface, state, &self.background_color, &self.stroke_color);
        Ok(())
    }
}
