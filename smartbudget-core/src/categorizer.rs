//! Deterministic keyword rules mapping statement descriptions to a Category.
//!
//! Rules are checked in order and the first hit wins, so "UBER EATS" lands in
//! Food even though "UBER" is a Transport keyword.

use crate::finance::Category;

/// One ordered rule: a category and the keywords that select it
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Rule table in match priority order. Keywords are uppercase.
pub const RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Food,
        keywords: &[
            "IFOOD", "UBER EATS", "RESTAURANTE", "SUPERMERCADO", "PADARIA", "LANCHONETE",
            "PIZZA", "MCDONALDS", "BK", "SUBWAY",
        ],
    },
    CategoryRule {
        category: Category::Transport,
        keywords: &[
            "UBER", "99", "POSTO", "COMBUSTIVEL", "ESTACIONAMENTO", "PEDÁGIO", "ONIBUS", "METRO",
        ],
    },
    CategoryRule {
        category: Category::Entertainment,
        keywords: &[
            "NETFLIX", "SPOTIFY", "CINEMA", "SHOPPING", "TEATRO", "SHOW", "PARQUE", "INGRESSO",
        ],
    },
    CategoryRule {
        category: Category::Health,
        keywords: &[
            "FARMACIA", "DROGARIA", "CONSULTA", "HOSPITAL", "CLINICA", "PLANO", "MEDICO",
            "DENTISTA",
        ],
    },
    CategoryRule {
        category: Category::Home,
        keywords: &[
            "MERCADO", "LIMPEZA", "LUZ", "AGUA", "GAS", "INTERNET", "TELEFONE", "CONDOMINIO",
        ],
    },
    CategoryRule {
        category: Category::Education,
        keywords: &["CURSO", "LIVRO", "ESCOLA", "FACULDADE", "UNIVERSIDADE", "APOSTILA"],
    },
    CategoryRule {
        category: Category::Clothing,
        keywords: &["ROUPA", "SAPATO", "LOJA", "CALCADO", "MODA"],
    },
    CategoryRule {
        category: Category::Technology,
        keywords: &["APPLE", "SAMSUNG", "INFORMATICA", "ELETRONICOS", "CELULAR"],
    },
    CategoryRule {
        category: Category::Income,
        keywords: &["SALARIO", "PIX RECEBIDO", "TRANSFERENCIA RECEBIDA", "RENDIMENTO"],
    },
];

/// Categorize a free-text description. Total: falls back to `Other`.
pub fn categorize(description: &str) -> Category {
    let desc = description.to_uppercase();

    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| desc.contains(kw)))
        .map(|rule| rule.category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_other() {
        assert_eq!(categorize(""), Category::Other);
        assert_eq!(categorize("   "), Category::Other);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("ifood *123"), Category::Food);
        assert_eq!(categorize("Netflix.com"), Category::Entertainment);
        assert_eq!(categorize("pedágio rodovia"), Category::Transport);
    }

    #[test]
    fn test_food_beats_transport() {
        // "UBER EATS" contains the Transport keyword "UBER"
        assert_eq!(categorize("UBER EATS *9812"), Category::Food);
        assert_eq!(categorize("UBER *TRIP"), Category::Transport);
    }

    #[test]
    fn test_food_beats_home() {
        // "SUPERMERCADO" contains the Home keyword "MERCADO"
        assert_eq!(categorize("SUPERMERCADO DIA"), Category::Food);
        assert_eq!(categorize("MERCADO CENTRAL"), Category::Home);
    }

    #[test]
    fn test_earlier_rule_wins_on_incidental_match() {
        // "99" is a Transport keyword and Transport outranks Entertainment
        assert_eq!(categorize("NETFLIX *4599"), Category::Transport);
        assert_eq!(categorize("NETFLIX *4512"), Category::Entertainment);
    }

    #[test]
    fn test_each_category_reachable() {
        let samples = [
            ("PADARIA BOM PAO", Category::Food),
            ("POSTO SHELL", Category::Transport),
            ("CINEMARK", Category::Entertainment),
            ("DROGARIA SAO PAULO", Category::Health),
            ("CONTA LUZ", Category::Home),
            ("CURSO ONLINE", Category::Education),
            ("LOJA RENNER", Category::Clothing),
            ("SAMSUNG STORE", Category::Technology),
            ("PIX RECEBIDO FULANO", Category::Income),
            ("TARIFA BANCARIA", Category::Other),
        ];
        for (desc, expected) in samples {
            assert_eq!(categorize(desc), expected, "{desc}");
        }
    }

    #[test]
    fn test_rule_order_matches_category_order() {
        let order: Vec<Category> = RULES.iter().map(|r| r.category).collect();
        assert_eq!(order, Category::ALL[..9].to_vec());
        assert!(!order.contains(&Category::Other));
    }

    #[test]
    fn test_every_keyword_hits_its_rule_or_an_earlier_one() {
        for (rank, rule) in RULES.iter().enumerate() {
            for kw in rule.keywords {
                let got = categorize(kw);
                let got_rank = RULES
                    .iter()
                    .position(|r| r.category == got)
                    .unwrap_or_else(|| panic!("{kw} fell through to {got:?}"));
                assert!(got_rank <= rank, "{kw}: {got:?} ranks after {:?}", rule.category);

                // an earlier rule may only win if one of its keywords occurs in this one
                if got_rank < rank {
                    assert!(RULES[got_rank].keywords.iter().any(|k| kw.contains(k)), "{kw}");
                }

                // padding does not change the outcome
                let padded = format!("compra {} *1234", kw.to_lowercase());
                assert_eq!(categorize(&padded), got, "{kw}");
            }
        }
    }

    #[test]
    fn test_food_keywords_always_food() {
        let food = &RULES[0];
        assert_eq!(food.category, Category::Food);
        for kw in food.keywords {
            assert_eq!(categorize(kw), Category::Food, "{kw}");
            assert_eq!(categorize(&format!("PAG*{kw} 99")), Category::Food, "{kw}");
        }
    }
}
