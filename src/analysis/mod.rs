//! AI freight analysis - advisory "is this trip worth it" assessments.
//!
//! The analysis is optional. It is requested for a draft trip, shown to the driver
//! and thrown away: nothing here is persisted or fed back into the trip log or the
//! dashboard numbers. Transport and decoding failures become "no analysis".

/// Gemini `generateContent` client
pub mod gemini;

pub use gemini::GeminiAnalyzer;

use crate::{
    core::{input::parse_money_field, trip::TripDraft},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use std::{fmt, str::FromStr};

/// Numeric fields of a draft trip sent for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Departure place name
    pub origin: String,
    /// Arrival place name
    pub destination: String,
    /// Distance in kilometres
    pub distance: Decimal,
    /// Gross freight value
    pub freight_value: Decimal,
    /// Driver commission
    pub driver_commission: Decimal,
    /// Fuel cost
    pub fuel_cost: Decimal,
    /// Toll cost
    pub toll_cost: Decimal,
    /// Other expenses
    pub other_expenses: Decimal,
    /// Advance already paid to the driver
    pub advance_amount: Decimal,
}

impl AnalysisRequest {
    /// Coerces a draft's text fields the same way trip creation does.
    #[must_use]
    pub fn from_draft(draft: &TripDraft) -> Self {
        Self {
            origin: draft.origin.trim().to_string(),
            destination: draft.destination.trim().to_string(),
            distance: parse_money_field(&draft.distance),
            freight_value: parse_money_field(&draft.freight_value),
            driver_commission: parse_money_field(&draft.driver_commission),
            fuel_cost: parse_money_field(&draft.fuel_cost),
            toll_cost: parse_money_field(&draft.toll_cost),
            other_expenses: parse_money_field(&draft.other_expenses),
            advance_amount: parse_money_field(&draft.advance_amount),
        }
    }
}

/// Overall judgement of a freight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Clearly worth taking
    Excellent,
    /// Worth taking
    Good,
    /// Thin or uncertain margin
    Risk,
    /// Loses money
    Loss,
}

impl FromStr for Verdict {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "excellent" | "excelente" => Ok(Self::Excellent),
            "good" | "bom" => Ok(Self::Good),
            "risk" | "risco" => Ok(Self::Risk),
            "loss" | "prejuízo" | "prejuizo" => Ok(Self::Loss),
            other => Err(Error::Analysis {
                message: format!("unknown verdict '{other}'"),
            }),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Risk => "Risk",
            Self::Loss => "Loss",
        };
        f.write_str(label)
    }
}

/// The model's assessment of a freight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreightAnalysis {
    /// Financial health, 0-100
    pub score: u8,
    /// Overall judgement
    pub verdict: Verdict,
    /// Short route-specific tips (three are asked for, any number is accepted)
    pub tips: Vec<String>,
    /// The model's own net profit estimate
    pub estimated_net_profit: Decimal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    score: f64,
    verdict: String,
    #[serde(default)]
    tips: Vec<String>,
    estimated_net_profit: Decimal,
}

impl TryFrom<RawAnalysis> for FreightAnalysis {
    type Error = Error;

    fn try_from(raw: RawAnalysis) -> Result<Self> {
        if !raw.score.is_finite() {
            return Err(Error::Analysis {
                message: format!("score is not a number: {}", raw.score),
            });
        }

        // Cast safety: clamped to [0, 100] first
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let score = raw.score.clamp(0.0, 100.0).round() as u8;

        Ok(Self {
            score,
            verdict: raw.verdict.parse()?,
            tips: raw.tips,
            estimated_net_profit: raw.estimated_net_profit,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Decodes a `generateContent` response body into an analysis.
///
/// The model's answer is the JSON text of the first candidate's first text part.
pub fn parse_generate_content(body: &str) -> Result<FreightAnalysis> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    let text = response
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .find_map(|part| part.text)
        .ok_or_else(|| Error::Analysis {
            message: "response has no text candidate".to_string(),
        })?;

    parse_analysis(&text)
}

/// Decodes the model's JSON answer.
pub fn parse_analysis(text: &str) -> Result<FreightAnalysis> {
    let raw: RawAnalysis = serde_json::from_str(text).map_err(|e| Error::Analysis {
        message: format!("malformed analysis JSON: {e}"),
    })?;
    raw.try_into()
}

/// Builds the analysis prompt for a draft trip.
#[must_use]
pub fn build_prompt(request: &AnalysisRequest) -> String {
    format!(
        "Analise a viabilidade deste frete para um caminhoneiro autônomo no Brasil.\n\
         Origem: {origin}\n\
         Destino: {destination}\n\
         Distância estimada: {distance} km\n\
         Valor bruto do frete: R$ {freight}\n\
         \n\
         Custos informados:\n\
         - Comissão do motorista: R$ {commission}\n\
         - Combustível: R$ {fuel}\n\
         - Pedágio: R$ {toll}\n\
         - Outras despesas: R$ {other}\n\
         - Adiantamento recebido: R$ {advance}\n\
         \n\
         Considere preços atuais de mercado e o lucro líquido real após todos os custos.\n\
         Responda em JSON com:\n\
         - score: número de 0 a 100 (saúde financeira da viagem)\n\
         - verdict: \"Excelente\", \"Bom\", \"Risco\" ou \"Prejuízo\"\n\
         - tips: lista com 3 dicas estratégicas para esta rota\n\
         - estimatedNetProfit: lucro líquido final \
         (frete - comissão - combustível - pedágio - outras despesas)",
        origin = request.origin,
        destination = request.destination,
        distance = request.distance,
        freight = request.freight_value,
        commission = request.driver_commission,
        fuel = request.fuel_cost,
        toll = request.toll_cost,
        other = request.other_expenses,
        advance = request.advance_amount,
    )
}

/// JSON schema the model must answer with.
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "NUMBER" },
            "verdict": { "type": "STRING" },
            "tips": { "type": "ARRAY", "items": { "type": "STRING" } },
            "estimatedNetProfit": { "type": "NUMBER" }
        },
        "required": ["score", "verdict", "tips", "estimatedNetProfit"]
    })
}
