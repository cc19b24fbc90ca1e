//! Price command implementation
//!
//! Prices a single European option on the one-step trinomial lattice.

use pricer_lattice::instruments::OptionType;
use pricer_lattice::lattice::{LatticeError, LatticeNodes, RiskNeutralProbabilities};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::PricingRequest;
use crate::{CliError, Result};

/// Pricing result with the intermediate lattice quantities
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    /// Request as priced
    pub request: PricingRequest,
    /// Parsed option type
    pub option_type: OptionType,
    /// Risk-neutral probabilities
    pub probabilities: RiskNeutralProbabilities<f64>,
    /// Terminal asset prices
    pub nodes: LatticeNodes<f64>,
    /// Present value
    pub price: f64,
}

/// Prices `request` and collects the report
pub fn evaluate(request: &PricingRequest) -> Result<PriceReport> {
    let option_type: OptionType = request
        .option_type
        .parse()
        .map_err(LatticeError::from)?;

    let model = request.model();
    let probabilities = model.probabilities()?;
    debug!(
        "Risk-neutral probabilities: up={}, mid={}, down={}",
        probabilities.up(),
        probabilities.mid(),
        probabilities.down()
    );
    if !probabilities.is_within_unit_interval() {
        warn!(
            "Risk-neutral probabilities outside [0, 1] (up={}, mid={}, down={}); price is not arbitrage-free",
            probabilities.up(),
            probabilities.mid(),
            probabilities.down()
        );
    }

    let price = model.price(request.strike, option_type)?;

    Ok(PriceReport {
        request: request.clone(),
        option_type,
        probabilities,
        nodes: model.nodes(),
        price,
    })
}

/// Human-readable label, e.g. `Call option price: 5.0`
pub fn render_text(report: &PriceReport) -> String {
    let label = match report.option_type {
        OptionType::Call => "Call",
        OptionType::Put => "Put",
    };
    format!("{} option price: {:?}", label, report.price)
}

/// Run the price command
pub fn run(request: &PricingRequest, format: &str) -> Result<()> {
    info!("Starting pricing...");
    info!("  Spot: {}", request.spot);
    info!("  Strike: {}", request.strike);
    info!(
        "  Factors: u={}, m={}, d={}",
        request.up, request.mid, request.down
    );
    info!("  Rate: {}, dt: {}", request.rate, request.dt);
    info!("  Option type: {}", request.option_type);

    let report = evaluate(request)?;

    match format {
        "text" => println!("{}", render_text(&report)),
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: text, json",
                other
            )));
        }
    }

    info!("Pricing complete");
    Ok(())
}
