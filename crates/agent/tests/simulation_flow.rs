//! End-to-end tests for the transcript → simulation → reply pipeline
//!
//! These tests exercise the full flow over the collaborator trait seams,
//! with in-memory stand-ins for the page transcript and compose field.

use chat_credit_agent::SimulationAgent;
use chat_credit_core::{ComposeField, Result, TranscriptSource};

/// Transcript as scraped from the page, newline-joined
struct PageTranscript(String);

impl TranscriptSource for PageTranscript {
    fn transcript(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Compose field that records every inserted reply
#[derive(Default)]
struct ComposeBox {
    inserted: Vec<String>,
}

impl ComposeField for ComposeBox {
    fn insert(&mut self, text: &str) -> Result<()> {
        self.inserted.push(text.to_string());
        Ok(())
    }
}

#[test]
fn test_run_inserts_computed_reply() {
    let agent = SimulationAgent::new();
    let source = PageTranscript(
        "Valor do imóvel: R$ 500.000,00\n\
         Entrada: R$ 100.000,00\n\
         Renda: R$ 8.000,00\n\
         Prazo: 30 anos"
            .into(),
    );
    let mut compose = ComposeBox::default();

    agent.run(&source, &mut compose).unwrap();

    assert_eq!(compose.inserted.len(), 1);
    let reply = &compose.inserted[0];
    assert!(reply.contains("Valor financiado: R$ 400.000,00"));
    // No system mentioned: Price is the default
    assert!(reply.contains("▪ PRICE"));
    assert!(reply.contains("Parcela fixa"));
    assert!(reply.contains("Comprometimento de renda: 42,0%"));
    // 42% commitment, and not even 35 years brings it under 30%
    assert!(reply.contains("Mesmo com o prazo máximo"));
    assert!(reply.contains("Estimativa sujeita à análise do banco"));
}

#[test]
fn test_empty_transcript_gets_invitation() {
    let agent = SimulationAgent::new();
    let reply = agent.respond("");

    assert!(reply.contains("Vamos simular seu potencial de compra"));
    assert!(reply.contains("• Valor do imóvel"));
    assert!(reply.contains("Sistema: SAC ou PRICE"));
}

#[test]
fn test_incomplete_transcript_is_idempotent() {
    let agent = SimulationAgent::new();
    let transcript = "Valor do imóvel 500 mil";

    let first = agent.respond(transcript);
    let second = agent.respond(transcript);

    assert_eq!(first, second);
    assert!(first.contains("Ainda faltam informações"));
    assert!(first.contains("• Entrada"));
    assert!(first.contains("• Renda bruta mensal"));
    assert!(first.contains("• Prazo (anos)"));
    assert!(!first.contains("• Valor do imóvel"));
}

#[test]
fn test_down_payment_covering_property_reprompts() {
    let agent = SimulationAgent::new();
    let reply = agent.respond(
        "imóvel de 100 mil\n\
         entrada de 150 mil\n\
         renda de 5 mil\n\
         prazo de 20 anos",
    );

    assert!(reply.contains("Vamos simular seu potencial de compra"));
    assert!(!reply.contains("Valor financiado"));
}

#[test]
fn test_zero_income_reprompts_instead_of_computing() {
    let agent = SimulationAgent::new();
    let reply = agent.respond(
        "imóvel 500 mil\n\
         entrada 100 mil\n\
         renda 0\n\
         prazo 30 anos",
    );

    assert!(reply.contains("Vamos simular seu potencial de compra"));
    assert!(!reply.contains("Comprometimento de renda"));
}

#[test]
fn test_adjustment_block_when_shorter_term_requested() {
    let agent = SimulationAgent::new();
    // 10 years is too steep for the income; the search finds a longer term
    let reply = agent.respond(
        "imóvel 500 mil\n\
         entrada 100 mil\n\
         renda 12 mil\n\
         prazo 10 anos",
    );

    assert!(reply.contains("Ajuste Estratégico Automático"));
    assert!(reply.contains("o prazo ideal seria"));
    assert!(reply.contains("Nova parcela estimada"));
    assert!(!reply.contains("Mesmo com o prazo máximo"));
}

#[test]
fn test_both_systems_in_mention_order_with_fgts() {
    let agent = SimulationAgent::new();
    let reply = agent.respond(
        "Valor do imóvel 500 mil\n\
         Entrada 100 mil\n\
         FGTS de 50 mil\n\
         Renda 20 mil\n\
         Prazo 30 anos\n\
         Pode simular em SAC e PRICE?",
    );

    assert!(reply.contains("Valor financiado: R$ 350.000,00"));
    let sac = reply.find("▪ SAC").expect("SAC block present");
    let price = reply.find("▪ PRICE").expect("PRICE block present");
    assert!(sac < price, "SAC mentioned first renders first");
    assert!(reply.contains("Parcela inicial"));
    assert!(reply.contains("Parcela final"));
    assert!(reply.contains("Parcela fixa"));
}

#[test]
fn test_timestamp_lines_never_feed_fields() {
    let agent = SimulationAgent::new();
    let reply = agent.respond(
        "14:35 Valor do imóvel 500 mil\n\
         [9:05] Entrada 100 mil",
    );

    // Both lines are timestamped, so nothing was extracted
    assert!(reply.contains("Vamos simular seu potencial de compra"));
}
