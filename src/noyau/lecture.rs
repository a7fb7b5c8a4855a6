// src/noyau/lecture.rs
//
// Lecture décimale tronquée d’une fraction (exacte, sans flottants).

use num_bigint::BigInt;
use num_traits::Signed;

use super::fraction::Fraction;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit une magnitude “scalée” (×10^digits, ≥ 0) en texte décimal tronqué.
/// Le signe est fourni à part : la troncature d’une valeur dans ]-1, 0[ donne 0.
pub fn scaled_to_decimal(scaled: BigInt, neg: bool, digits: usize) -> String {
    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// f -> (trunc(|f| * 10^digits), f < 0) ; None si dénominateur nul.
fn fraction_scaled(f: &Fraction, digits: usize) -> Option<(BigInt, bool)> {
    if f.est_degeneree() {
        return None;
    }
    let magnitude = (f.numer().abs() * pow10(digits)) / f.denom();
    Some((magnitude, f.numer().is_negative()))
}

/// Lecture décimale tronquée à `digits` chiffres. None si la fraction est dégénérée.
pub fn lecture_fraction(f: &Fraction, digits: usize) -> Option<String> {
    fraction_scaled(f, digits).map(|(s, neg)| scaled_to_decimal(s, neg, digits))
}
