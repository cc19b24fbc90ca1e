//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use clap::Args;

use crate::config::PricingRequest;

pub mod price;
pub mod probabilities;

/// Command-line overrides for the configured pricing request
#[derive(Args, Debug, Clone, Default)]
pub struct RequestOverrides {
    /// Initial asset price (S0)
    #[arg(long)]
    pub spot: Option<f64>,

    /// Strike price (K)
    #[arg(long)]
    pub strike: Option<f64>,

    /// Up factor (u)
    #[arg(long)]
    pub up: Option<f64>,

    /// Middle factor (m)
    #[arg(long)]
    pub mid: Option<f64>,

    /// Down factor (d)
    #[arg(long)]
    pub down: Option<f64>,

    /// Continuously compounded risk-free rate (r)
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Time step length (dt)
    #[arg(long)]
    pub dt: Option<f64>,

    /// Option type (call or put)
    #[arg(short = 't', long)]
    pub option_type: Option<String>,
}

impl RequestOverrides {
    /// Applies every supplied override on top of `request`
    pub fn apply(&self, mut request: PricingRequest) -> PricingRequest {
        if let Some(spot) = self.spot {
            request.spot = spot;
        }
        if let Some(strike) = self.strike {
            request.strike = strike;
        }
        if let Some(up) = self.up {
            request.up = up;
        }
        if let Some(mid) = self.mid {
            request.mid = mid;
        }
        if let Some(down) = self.down {
            request.down = down;
        }
        if let Some(rate) = self.rate {
            request.rate = rate;
        }
        if let Some(dt) = self.dt {
            request.dt = dt;
        }
        if let Some(option_type) = &self.option_type {
            request.option_type = option_type.clone();
        }
        request
    }
}
