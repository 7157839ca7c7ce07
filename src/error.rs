use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeatmapError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),

    #[error("{url} responded with HTTP {status}")]
    Status { status: u16, url: String },

    #[error("malformed grid response: {0}")]
    Decode(#[from] serde_json::Error),
}
