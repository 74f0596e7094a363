//! Prometheus counters exposed on `/metrics`.
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

#[derive(Clone)]
pub struct ApiMetrics {
    registry: Registry,
    pub estimates: IntCounter,
    pub flight_searches: IntCounter,
    pub flight_fallbacks: IntCounter,
}

impl ApiMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let estimates = IntCounter::new("tripwise_estimates_total", "Budget estimates served")?;
        let flight_searches =
            IntCounter::new("tripwise_flight_searches_total", "Flight searches served")?;
        let flight_fallbacks = IntCounter::new(
            "tripwise_flight_fallbacks_total",
            "Flight searches answered with placeholder data",
        )?;

        registry.register(Box::new(estimates.clone()))?;
        registry.register(Box::new(flight_searches.clone()))?;
        registry.register(Box::new(flight_fallbacks.clone()))?;

        Ok(Self {
            registry,
            estimates,
            flight_searches,
            flight_fallbacks,
        })
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
