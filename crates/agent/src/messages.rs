//! Reply message rendering (pt-BR)
//!
//! Pure string building: the orchestrator decides the outcome, this module
//! gives it its user-facing shape. Currency follows Brazilian formatting
//! (`R$ 1.234,56`), percentages use a comma decimal.

use chat_credit_core::{AmortizationSystem, RequiredField, SimulationResult};

/// Disclaimer appended to every computed simulation
const DISCLAIMER: &str = "⚠️ Estimativa sujeita à análise do banco. Taxas e CET podem variar.";

/// Format a value as Brazilian currency: `R$ 1.234,56`
pub fn format_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("R$ {sign}{grouped},{frac:02}")
}

/// Format a percentage with one comma-decimal: `42,0%`
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%").replace('.', ",")
}

/// Canonical data-request prompt.
///
/// Lists exactly the missing fields; when everything is missing (or the
/// derivation was invalid) it carries the full invitation checklist.
/// Deterministic for a given missing set, so repeated invocations on the
/// same transcript reproduce the same prompt.
pub fn data_request(missing: &[RequiredField]) -> String {
    if missing.len() == RequiredField::ALL.len() {
        return "💰 Vamos simular seu potencial de compra?\n\n\
                Envie:\n\n\
                • Valor do imóvel\n\
                • Entrada\n\
                • Renda bruta mensal\n\
                • Prazo (anos)\n\
                • Sistema: SAC ou PRICE"
            .to_string();
    }

    let mut message = String::from("⚠️ Ainda faltam informações para calcular. Envie:\n");
    for field in missing {
        message.push_str("\n• ");
        message.push_str(field.label());
    }
    message
}

/// Full simulation report: shared header, one block per system, disclaimer
pub fn simulation_report(results: &[SimulationResult], affordability_ratio: f64) -> String {
    let ratio_percent = format!("{:.0}%", affordability_ratio * 100.0);
    let financed = results.first().map(|r| r.financed_amount).unwrap_or(0.0);

    let mut message = String::from("💰 Simulação estimada\n\n");
    message.push_str(&format!("Valor financiado: {}\n", format_brl(financed)));

    for result in results {
        message.push('\n');
        message.push_str(&system_block(result, &ratio_percent));
    }

    message.push('\n');
    message.push_str(DISCLAIMER);
    message
}

fn system_block(result: &SimulationResult, ratio_percent: &str) -> String {
    let mut block = format!("▪ {}\n", result.system);

    match result.system {
        AmortizationSystem::Price => {
            block.push_str(&format!(
                "Parcela fixa: {}\n",
                format_brl(result.first_installment)
            ));
        }
        AmortizationSystem::Sac => {
            block.push_str(&format!(
                "Parcela inicial: {}\n",
                format_brl(result.first_installment)
            ));
            block.push_str(&format!(
                "Parcela final: {}\n",
                format_brl(result.last_installment)
            ));
        }
    }

    block.push_str(&format!(
        "Comprometimento de renda: {}\n",
        format_percent(result.income_commitment_percent)
    ));

    if result.over_ceiling {
        match result.term_adjustment {
            Some(adjustment) => {
                block.push_str(&format!(
                    "\n📌 Ajuste Estratégico Automático:\n\
                     Para manter até {ratio_percent} da renda, o prazo ideal seria {} anos.\n\
                     Nova parcela estimada: {}\n",
                    adjustment.years,
                    format_brl(adjustment.installment)
                ));
            }
            None => {
                block.push_str(&format!(
                    "\n⚠️ Mesmo com o prazo máximo, a parcela ultrapassa {ratio_percent} da renda. \
                     Pode ser necessário aumentar a entrada.\n"
                ));
            }
        }
    }

    block
}
