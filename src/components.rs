//! Yew view components for the heatmap page.
//!
//! `HeatMap` owns its drawing surface and hover label; nothing here is
//! shared between chart instances. The SVG lives in its own component so a
//! hover only re-renders the label.

use crate::hooks::PlayerGrid;
use std::rc::Rc;
use strikezone_heatmap::heatmap::{Cell, HeatmapScene, Layout, Legend, Rect};
use strikezone_heatmap::utils::fmt_px;
use strikezone_heatmap::{Grid, HeatmapCanvas, Player, Tooltip, TooltipAction};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeatMapProps {
    /// Unique per page; scopes the legend gradient id.
    pub id: AttrValue,
    pub title: AttrValue,
    pub grid: Option<Grid>,
}

/// Id of the legend gradient for the chart `chart_id`.
fn gradient_id(chart_id: &str) -> AttrValue {
    AttrValue::from(format!("legend-gradient-{}", chart_id))
}

/// Heatmap for one player's grid, with strike zone, legend and hover label.
///
/// The canvas is rebuilt exactly once per new grid value.
#[function_component(HeatMap)]
pub fn heat_map(props: &HeatMapProps) -> Html {
    let canvas = use_memo(props.grid.clone(), |grid| {
        let mut canvas = HeatmapCanvas::default();
        canvas.render(grid.as_ref());
        canvas
    });
    let tooltip = use_reducer(Tooltip::default);
    let on_hover = {
        let dispatcher = tooltip.dispatcher();
        use_callback((), move |action: TooltipAction, _| dispatcher.dispatch(action))
    };

    html! {
        <div class="heatmap-container">
            <p class="heatmap-title">{ "AVG Heatmap" }</p>
            <p class="heatmap-player">{ props.title.clone() }</p>
            <HeatmapSvg {canvas} gradient_id={gradient_id(&props.id)} {on_hover} />
            { render_tooltip(&tooltip) }
        </div>
    }
}

#[derive(Properties)]
struct HeatmapSvgProps {
    canvas: Rc<HeatmapCanvas>,
    gradient_id: AttrValue,
    on_hover: Callback<TooltipAction>,
}

/// The canvas is compared by identity: `use_memo` hands out the same `Rc`
/// until the grid changes.
impl PartialEq for HeatmapSvgProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.canvas, &other.canvas)
            && self.gradient_id == other.gradient_id
            && self.on_hover == other.on_hover
    }
}

#[function_component(HeatmapSvg)]
fn heatmap_svg(props: &HeatmapSvgProps) -> Html {
    match props.canvas.scene() {
        None => html! { <svg class="heatmap" /> },
        Some(scene) => render_scene(
            props.canvas.layout(),
            scene,
            &props.gradient_id,
            &props.on_hover,
        ),
    }
}

fn render_scene(
    layout: &Layout,
    scene: &HeatmapScene,
    gradient_id: &str,
    on_hover: &Callback<TooltipAction>,
) -> Html {
    html! {
        <svg class="heatmap"
            width={fmt_px(layout.width)}
            height={fmt_px(layout.height)}
        >
            <g class="cells">
                { for scene.cells.iter().map(|cell| render_cell(cell, on_hover)) }
            </g>
            { render_outline(&scene.overlay, "white", 2.0) }
            { render_legend(&scene.legend, gradient_id) }
            { render_outline(&scene.border, "black", 1.0) }
        </svg>
    }
}

/// Hover handlers for one cell, bound to that cell's value.
struct CellHover {
    enter: Callback<()>,
    /// Pointer position in viewport coordinates.
    moved: Callback<(f64, f64)>,
    leave: Callback<()>,
}

fn cell_hover(value: f64, on_hover: &Callback<TooltipAction>) -> CellHover {
    CellHover {
        enter: on_hover.reform(|_| TooltipAction::Enter),
        moved: on_hover.reform(move |(x, y): (f64, f64)| TooltipAction::Move { value, x, y }),
        leave: on_hover.reform(|_| TooltipAction::Leave),
    }
}

/// One filled cell wired to the chart's hover label.
fn render_cell(cell: &Cell, on_hover: &Callback<TooltipAction>) -> Html {
    let hover = cell_hover(cell.value, on_hover);
    let onmouseenter = hover.enter.reform(|_: MouseEvent| ());
    let onmousemove = hover
        .moved
        .reform(|e: MouseEvent| (e.client_x() as f64, e.client_y() as f64));
    let onmouseleave = hover.leave.reform(|_: MouseEvent| ());

    html! {
        <rect key={cell.key.clone()}
            x={fmt_px(cell.rect.x)}
            y={fmt_px(cell.rect.y)}
            width={fmt_px(cell.rect.width)}
            height={fmt_px(cell.rect.height)}
            fill={cell.fill.to_string()}
            {onmouseenter}
            {onmousemove}
            {onmouseleave}
        />
    }
}

/// Unfilled, non-interactive rectangle.
fn render_outline(rect: &Rect, stroke: &'static str, stroke_width: f64) -> Html {
    html! {
        <rect
            x={fmt_px(rect.x)}
            y={fmt_px(rect.y)}
            width={fmt_px(rect.width)}
            height={fmt_px(rect.height)}
            fill="none"
            stroke={stroke}
            stroke-width={fmt_px(stroke_width)}
            pointer-events="none"
        />
    }
}

/// The gradient-filled color bar.
fn render_legend_bar(bar: &Rect, gradient_id: &str) -> Html {
    html! {
        <rect
            x={fmt_px(bar.x)}
            y={fmt_px(bar.y)}
            width={fmt_px(bar.width)}
            height={fmt_px(bar.height)}
            fill={format!("url(#{})", gradient_id)}
        />
    }
}

fn render_legend(legend: &Legend, gradient_id: &str) -> Html {
    let bar = legend.bar;
    let axis_top = fmt_px(bar.y);
    let axis_bottom = fmt_px(bar.y + bar.height);

    html! {
        <g class="legend">
            <defs>
                <linearGradient id={gradient_id.to_string()} x1="0%" y1="100%" x2="0%" y2="0%">
                    { for legend.gradient.iter().map(|(offset, color)| html! {
                        <stop offset={format!("{}%", offset)} stop-color={color.to_string()} />
                    }) }
                </linearGradient>
            </defs>
            { render_legend_bar(&bar, gradient_id) }
            <g class="legend-axis"
                transform={format!("translate({}, 0)", fmt_px(legend.axis_x))}
                font-size="10"
            >
                <line x1="0" x2="0" y1={axis_top} y2={axis_bottom} stroke="currentColor" />
                { for legend.ticks.iter().map(|tick| html! {
                    <g class="tick" transform={format!("translate(0, {})", fmt_px(tick.y))}>
                        <line x2="6" stroke="currentColor" />
                        <text x="9" dy="0.32em" fill="currentColor">{ tick.label.clone() }</text>
                    </g>
                }) }
            </g>
            <text
                x={fmt_px(legend.title_x)}
                y={fmt_px(legend.title_y)}
                text-anchor="middle"
                font-size="12px"
                font-weight="bold"
            >
                { legend.title }
            </text>
        </g>
    }
}

/// The chart's floating label. Positioned in viewport coordinates and never
/// intercepts pointer events.
fn render_tooltip(tooltip: &Tooltip) -> Html {
    let style = format!(
        "opacity: {}; left: {}px; top: {}px;",
        if tooltip.visible { 1 } else { 0 },
        fmt_px(tooltip.left),
        fmt_px(tooltip.top),
    );
    html! {
        <div class="tooltip" {style}>{ tooltip.text.clone() }</div>
    }
}

/// Button that starts the fetch-and-render cycle for one player.
///
/// It stays clickable while a request is in flight; repeated requests are
/// allowed and the last one to resolve wins.
pub fn render_player_button(player: &Player, loading: bool, onclick: &Callback<()>) -> Html {
    let onclick = onclick.reform(|_: MouseEvent| ());
    let class = if loading {
        "player-button loading"
    } else {
        "player-button"
    };
    html! {
        <button {class} {onclick} aria-busy={loading.to_string()}>
            { player.last }
        </button>
    }
}

/// Chart plus the status line for one player.
pub fn render_player_chart(player: &Player, state: &PlayerGrid) -> Html {
    html! {
        <div class="player-chart">
            <HeatMap
                id={AttrValue::from(player.last)}
                title={player.display_name()}
                grid={state.grid.clone()}
            />
            if state.loading {
                <div class="load-status">{ "Loading…" }</div>
            }
            if let Some(err) = &state.error {
                <div class="load-error">{ err }</div>
            }
        </div>
    }
}
