use crate::config::{ClockConfig, Corner};
use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};

const ALL_EDGES: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

fn corner_edges(corner: Corner) -> [Edge; 2] {
    match corner {
        Corner::TopLeft => [Edge::Top, Edge::Left],
        Corner::TopRight => [Edge::Top, Edge::Right],
        Corner::BottomLeft => [Edge::Bottom, Edge::Left],
        Corner::BottomRight => [Edge::Bottom, Edge::Right],
    }
}

/// Puts the clock on the overlay layer: no decorations, above regular
/// windows, out of the way of panels.
pub fn init_layer_shell(window: &gtk::ApplicationWindow, clock: &ClockConfig) {
    window.init_layer_shell();
    window.set_layer(Layer::Overlay);
    window.set_namespace(Some("analog"));
    window.set_exclusive_zone(0);
    window.set_keyboard_mode(KeyboardMode::OnDemand);
    apply_placement(window, clock);
}

pub fn apply_placement(window: &gtk::ApplicationWindow, clock: &ClockConfig) {
    let anchored = corner_edges(clock.corner);
    for edge in ALL_EDGES {
        let on = anchored.contains(&edge);
        window.set_anchor(edge, on);
        window.set_margin(edge, if on { clock.margin } else { 0 });
    }
}

pub fn resize(window: &gtk::ApplicationWindow, diameter: i32) {
    window.set_default_size(diameter, diameter);
}
