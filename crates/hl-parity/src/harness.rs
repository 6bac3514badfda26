//! Harness that runs scenarios against both backends and compares shapes

use crate::client::{InfoClient, InfoError};
use crate::config::ParityConfig;
use crate::scenario::Scenario;
use json_shape::{compare_shapes, ShapeReport};
use serde::Serialize;

/// Outcome of one scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario: String,
    pub report: ShapeReport,
}

impl ScenarioResult {
    pub fn passed(&self) -> bool {
        self.report.matches()
    }

    /// Print a summary of the comparison
    pub fn print_summary(&self) {
        if self.passed() {
            println!("✅ {} - shapes match", self.scenario);
        } else {
            println!(
                "❌ {} - {} mismatches",
                self.scenario,
                self.report.mismatches.len()
            );
            for mismatch in &self.report.mismatches {
                println!("   {}", mismatch);
            }
        }
    }
}

/// Harness owning one client per backend and the accumulated results
pub struct ParityHarness {
    pub config: ParityConfig,
    pub hyperliquid: InfoClient,
    pub ambient: InfoClient,
    pub results: Vec<ScenarioResult>,
}

impl ParityHarness {
    /// Create a new harness from config
    pub fn new(config: ParityConfig) -> Self {
        let hyperliquid = InfoClient::new("hyperliquid", &config.hyperliquid_url);
        let ambient = InfoClient::new("ambient", &config.ambient_url);

        Self {
            config,
            hyperliquid,
            ambient,
            results: Vec::new(),
        }
    }

    /// Run one scenario and record its result.
    ///
    /// The two fetches are independent and run concurrently; the comparator
    /// only runs once both responses are in. Transport and decode errors
    /// propagate and end the run.
    pub async fn run(&mut self, scenario: &Scenario) -> Result<&ScenarioResult, InfoError> {
        let hl_payload = scenario.payload(&self.config.hyperliquid_user);
        let ambient_payload = scenario.payload(&self.config.ambient_user);

        let (hl_response, ambient_response) = tokio::try_join!(
            self.hyperliquid.fetch_info(&hl_payload),
            self.ambient.fetch_info(&ambient_payload),
        )?;

        let report = compare_shapes(
            &hl_response,
            &ambient_response,
            &scenario.compare_options(),
        );
        self.results.push(ScenarioResult {
            scenario: scenario.name().to_string(),
            report,
        });
        Ok(self.results.last().unwrap())
    }

    /// Run each scenario in turn, printing per-scenario summaries.
    pub async fn run_all(&mut self, scenarios: &[Scenario]) -> Result<(), InfoError> {
        for scenario in scenarios {
            self.run(scenario).await?.print_summary();
        }
        Ok(())
    }

    /// Print summary of all results
    pub fn print_summary(&self) {
        println!("\n=== Shape Parity Summary ===");
        println!("Hyperliquid: {}", self.config.hyperliquid_url);
        println!("Ambient: {}", self.config.ambient_url);
        println!();

        let passed = self.results.iter().filter(|r| r.passed()).count();
        let total = self.results.len();

        for result in &self.results {
            result.print_summary();
        }

        println!();
        println!("Results: {}/{} passed", passed, total);

        if passed == total {
            println!("✅ All scenarios match");
        } else {
            println!("❌ {} scenarios diverged", total - passed);
        }
    }

    /// Check if every recorded scenario matched
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed())
    }
}

impl Default for ParityHarness {
    fn default() -> Self {
        Self::new(ParityConfig::default())
    }
}
