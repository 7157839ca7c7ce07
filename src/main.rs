//! Main module for the strike-zone heatmap page using Yew.
//! Wires the player buttons, per-player grid state and the charts.

use strikezone_heatmap::config::{LOG_LEVEL, PLAYERS};
use yew::prelude::*;

mod components;
mod hooks;

use components::{render_player_button, render_player_chart};
use hooks::use_player_grid;

/// Primary application component: one button and one chart per player.
#[function_component]
pub fn App() -> Html {
    // One hook per player; each chart only ever sees its own grid.
    let states = [
        use_player_grid(PLAYERS[0]),
        use_player_grid(PLAYERS[1]),
        use_player_grid(PLAYERS[2]),
    ];

    html! {
        <div class="container">
            <div class="player-buttons">
                { for PLAYERS.iter().zip(states.iter()).map(|(player, state)| {
                    render_player_button(player, state.loading, &state.load)
                }) }
            </div>
            <div class="charts">
                { for PLAYERS.iter().zip(states.iter()).map(|(player, state)| {
                    render_player_chart(player, state)
                }) }
            </div>
        </div>
    }
}

/// Entry point: installs console logging, then mounts the App component.
fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).expect("Couldn't initialize logger");
    yew::Renderer::<App>::new().render();
}
