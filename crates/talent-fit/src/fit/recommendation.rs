use serde::{Deserialize, Serialize};

use super::domain::TypeCode;
use super::policy::VerdictBands;
use super::tier::FitTier;

/// Optional inputs that parameterize a recommendation template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecommendationContext {
    pub role_name: Option<String>,
    pub type_mismatch: Option<TypeCode>,
}

impl RecommendationContext {
    pub fn for_role(role_name: impl Into<String>) -> Self {
        Self {
            role_name: Some(role_name.into()),
            type_mismatch: None,
        }
    }

    pub fn with_type_mismatch(mut self, code: TypeCode) -> Self {
        self.type_mismatch = Some(code);
        self
    }
}

/// Renders the tier template, appending the type caution when present.
pub fn recommend(tier: FitTier, context: &RecommendationContext) -> String {
    let mut text = base_template(tier, context.role_name.as_deref());
    if let Some(code) = &context.type_mismatch {
        text.push_str(&format!(
            " Atenção: tipo {code} não está entre os tipos mais indicados para esta função."
        ));
    }
    text
}

fn base_template(tier: FitTier, role_name: Option<&str>) -> String {
    match (tier, role_name) {
        (FitTier::High, Some(role)) => format!(
            "Excelente fit para {role}. Perfil altamente compatível com as expectativas da função."
        ),
        (FitTier::High, None) => {
            "Excelente compatibilidade comportamental. Perfis muito alinhados.".to_string()
        }
        (FitTier::Medium, Some(role)) => format!(
            "Fit moderado para {role}. Avaliar outros aspectos e competências técnicas antes de decidir."
        ),
        (FitTier::Medium, None) => {
            "Boa compatibilidade. Algumas diferenças podem ser complementares.".to_string()
        }
        (FitTier::Low, Some(role)) => format!(
            "Fit baixo para {role}. Considerar outras funções ou avaliar se há flexibilidade nos requisitos."
        ),
        (FitTier::Low, None) => {
            "Compatibilidade moderada. Diferenças significativas nos perfis.".to_string()
        }
    }
}

pub(crate) fn consolidated_verdict(score: u8, bands: &VerdictBands) -> String {
    let text = if score >= bands.excellent {
        "Fit excelente. Candidato altamente recomendado para a posição."
    } else if score >= bands.good {
        "Fit bom. Candidato apresenta bom alinhamento com os requisitos."
    } else if score >= bands.moderate {
        "Fit moderado. Avaliar outros critérios antes de decidir."
    } else {
        "Fit baixo. Candidato pode não ser ideal para esta posição."
    };
    text.to_string()
}
