use log::error;
use strikezone_heatmap::{load_grid, Grid, Player};
use yew::prelude::*;

/// Holds the grid and load status for one player.
#[derive(Clone)]
pub struct PlayerGrid {
    /// The last grid that loaded successfully, if any.
    pub grid: Option<Grid>,
    /// True while at least one request for this player is in flight.
    pub loading: bool,
    /// Message from the most recent failed request.
    pub error: Option<String>,
    /// Callback that starts a fetch for the player.
    pub load: Callback<()>,
}

/// Custom hook owning one player's grid state.
///
/// A failed request keeps whatever grid was already shown. Requests are not
/// cancelled, so the last response to arrive wins.
#[hook]
pub fn use_player_grid(player: Player) -> PlayerGrid {
    let grid_handle: UseStateHandle<Option<Grid>> = use_state(|| None);
    let error_handle: UseStateHandle<Option<String>> = use_state(|| None::<String>);
    // Counted rather than a flag so overlapping requests don't clear it early.
    let in_flight: UseStateHandle<usize> = use_state(|| 0usize);
    let pending = use_mut_ref(|| 0usize);

    let load = {
        let grid_setter = grid_handle.clone();
        let error_setter = error_handle.clone();
        let in_flight = in_flight.clone();
        let pending = pending.clone();

        Callback::from(move |_| {
            *pending.borrow_mut() += 1;
            in_flight.set(*pending.borrow());

            let grid_setter = grid_setter.clone();
            let error_setter = error_setter.clone();
            let in_flight = in_flight.clone();
            let pending = pending.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match load_grid(player.last, player.first).await {
                    Ok(grid) => {
                        grid_setter.set(Some(grid));
                        error_setter.set(None);
                    }
                    Err(err) => {
                        error!("Loading grid for {} failed: {}", player.last, err);
                        error_setter.set(Some(err.to_string()));
                    }
                }
                *pending.borrow_mut() -= 1;
                in_flight.set(*pending.borrow());
            });
        })
    };

    PlayerGrid {
        grid: (*grid_handle).clone(),
        loading: *in_flight > 0,
        error: (*error_handle).clone(),
        load,
    }
}
