//! Simulation orchestration for the chat financing simulator
//!
//! Composes fact extraction and amortization math into a single
//! transcript-in, reply-out pipeline:
//!
//! ```
//! use chat_credit_agent::SimulationAgent;
//!
//! let agent = SimulationAgent::new();
//! let reply = agent.respond("Valor do imóvel 500 mil\nEntrada 100 mil\nRenda 8 mil\nPrazo 30 anos");
//! assert!(reply.contains("Valor financiado"));
//! ```
//!
//! Each invocation re-derives everything from the transcript; there is no
//! state across calls.

mod agent;
pub mod messages;

pub use agent::{SimulationAgent, SimulationOutcome};
