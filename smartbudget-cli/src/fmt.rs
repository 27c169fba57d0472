/// Format an amount with a currency symbol and thousands separators:
/// `R$ 1,234.56`, `-R$ 500.00`
pub fn money(symbol: &str, val: f64) -> String {
    let negative = val < 0.0 && format!("{:.2}", val.abs()) != "0.00";
    let cents = format!("{:.2}", val.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-{symbol} {with_commas}.{dec_part}")
    } else {
        format!("{symbol} {with_commas}.{dec_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money("R$", 1234.56), "R$ 1,234.56");
        assert_eq!(money("R$", -500.00), "-R$ 500.00");
        assert_eq!(money("R$", 0.0), "R$ 0.00");
        assert_eq!(money("$", 1000000.99), "$ 1,000,000.99");
        assert_eq!(money("R$", -0.001), "R$ 0.00");
    }
}
