//! Probabilities command implementation
//!
//! Prints the risk-neutral branching probabilities and terminal nodes.

use tracing::{info, warn};

use crate::config::PricingRequest;
use crate::Result;

/// Run the probabilities command
pub fn run(request: &PricingRequest) -> Result<()> {
    let model = request.model();
    let probabilities = model.probabilities()?;
    let nodes = model.nodes();

    info!("Discount factor: {}", model.discount_factor());
    if !probabilities.is_within_unit_interval() {
        warn!("Risk-neutral probabilities outside [0, 1]");
    }

    println!("Node   Price        Probability");
    println!("up     {:<12} {}", nodes.up, probabilities.up());
    println!("mid    {:<12} {}", nodes.mid, probabilities.mid());
    println!("down   {:<12} {}", nodes.down, probabilities.down());
    println!("sum                 {}", probabilities.sum());

    Ok(())
}
