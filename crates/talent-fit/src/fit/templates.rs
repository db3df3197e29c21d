use super::domain::{DimensionRange, DiscRanges, IdealProfile, MbtiRanges, TypeCode};

/// Keys of the built-in role templates, in catalog order.
pub const TEMPLATE_KEYS: [&str; 6] = [
    "vendedor",
    "analista",
    "lider",
    "atendimento",
    "desenvolvedor",
    "rh",
];

const fn band(min: f64, max: f64, weight: f64) -> DimensionRange {
    DimensionRange::new(min, max, weight)
}

fn types(codes: &[&str]) -> Vec<TypeCode> {
    codes.iter().filter_map(|code| TypeCode::parse(code)).collect()
}

fn template(
    role_name: &str,
    description: &str,
    disc: [DimensionRange; 4],
    mbti: [DimensionRange; 4],
    preferred: &[&str],
) -> IdealProfile {
    let [dominance, influence, steadiness, conformity] = disc;
    let [extraversion_introversion, sensing_intuition, thinking_feeling, judging_perceiving] = mbti;

    IdealProfile {
        role_name: role_name.to_string(),
        description: Some(description.to_string()),
        disc: DiscRanges {
            dominance,
            influence,
            steadiness,
            conformity,
        },
        mbti: MbtiRanges {
            extraversion_introversion,
            sensing_intuition,
            thinking_feeling,
            judging_perceiving,
        },
        preferred_types: Some(types(preferred)),
    }
}

/// Looks up a built-in ideal profile by key (case-insensitive).
pub fn role_template(key: &str) -> Option<IdealProfile> {
    let profile = match key.trim().to_ascii_lowercase().as_str() {
        "vendedor" => template(
            "Vendedor",
            "Perfil ideal para funções comerciais que exigem persuasão e relacionamento",
            [
                band(60.0, 90.0, 0.8),
                band(70.0, 100.0, 1.0),
                band(30.0, 60.0, 0.5),
                band(20.0, 50.0, 0.4),
            ],
            [
                band(60.0, 100.0, 1.0),
                band(40.0, 80.0, 0.6),
                band(30.0, 70.0, 0.5),
                band(40.0, 80.0, 0.6),
            ],
            &["ENFP", "ENTP", "ESFP", "ESTP"],
        ),
        "analista" => template(
            "Analista de Dados",
            "Perfil ideal para funções analíticas que exigem precisão e atenção aos detalhes",
            [
                band(30.0, 60.0, 0.5),
                band(20.0, 50.0, 0.4),
                band(60.0, 90.0, 0.8),
                band(70.0, 100.0, 1.0),
            ],
            [
                band(0.0, 40.0, 0.7),
                band(60.0, 100.0, 0.8),
                band(60.0, 100.0, 1.0),
                band(60.0, 100.0, 0.8),
            ],
            &["ISTJ", "INTJ", "ISTP", "INTP"],
        ),
        "lider" => template(
            "Líder de Equipe",
            "Perfil ideal para liderança que inspira e direciona equipes",
            [
                band(70.0, 95.0, 1.0),
                band(60.0, 90.0, 0.9),
                band(40.0, 70.0, 0.6),
                band(40.0, 70.0, 0.6),
            ],
            [
                band(60.0, 100.0, 0.9),
                band(40.0, 80.0, 0.6),
                band(50.0, 90.0, 0.7),
                band(60.0, 100.0, 0.8),
            ],
            &["ENTJ", "ESTJ", "ENFJ", "ENTP"],
        ),
        "atendimento" => template(
            "Atendimento ao Cliente",
            "Perfil ideal para funções de suporte que exigem empatia e paciência",
            [
                band(30.0, 60.0, 0.5),
                band(65.0, 95.0, 0.9),
                band(70.0, 100.0, 1.0),
                band(40.0, 70.0, 0.6),
            ],
            [
                band(55.0, 100.0, 0.8),
                band(50.0, 90.0, 0.6),
                band(0.0, 50.0, 0.9),
                band(40.0, 80.0, 0.5),
            ],
            &["ESFJ", "ENFJ", "ISFJ", "ESFP"],
        ),
        "desenvolvedor" => template(
            "Desenvolvedor de Software",
            "Perfil ideal para funções técnicas que exigem lógica e autonomia",
            [
                band(50.0, 80.0, 0.7),
                band(20.0, 50.0, 0.4),
                band(50.0, 80.0, 0.6),
                band(65.0, 95.0, 1.0),
            ],
            [
                band(0.0, 50.0, 0.6),
                band(0.0, 50.0, 0.8),
                band(60.0, 100.0, 1.0),
                band(30.0, 80.0, 0.5),
            ],
            &["INTJ", "INTP", "ISTJ", "ISTP"],
        ),
        "rh" => template(
            "Recursos Humanos",
            "Perfil ideal para RH que equilibra empatia e estrutura",
            [
                band(40.0, 70.0, 0.6),
                band(65.0, 95.0, 0.9),
                band(60.0, 90.0, 0.9),
                band(50.0, 80.0, 0.7),
            ],
            [
                band(55.0, 100.0, 0.8),
                band(40.0, 80.0, 0.6),
                band(0.0, 50.0, 0.9),
                band(55.0, 100.0, 0.7),
            ],
            &["ENFJ", "ESFJ", "INFJ", "ISFJ"],
        ),
        _ => return None,
    };
    Some(profile)
}

/// Every built-in template paired with its key.
pub fn role_templates() -> Vec<(&'static str, IdealProfile)> {
    TEMPLATE_KEYS
        .iter()
        .filter_map(|key| role_template(key).map(|profile| (*key, profile)))
        .collect()
}
