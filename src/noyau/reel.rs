// src/noyau/reel.rs
//
// Évaluation réelle (f64). Division par zéro => ±∞ / NaN, pas de panique :
// c’est l’affichage qui transforme un résultat non fini en “opération invalide”.

use super::extraction::{OperationAnalysee, Operateur};

pub fn eval_reel(op: &OperationAnalysee<'_>) -> f64 {
    let a = reel_permissif(op.operande1);
    let b = reel_permissif(op.operande2);

    match op.operateur {
        Some(Operateur::Plus) => a + b,
        Some(Operateur::Moins) => a - b,
        Some(Operateur::Fois) => a * b,
        Some(Operateur::Divise) => a / b,
        // inatteignable : la grammaire réelle n’admet que + - * /
        autre => {
            tracing::warn!(?autre, "opérateur hors grammaire réelle");
            f64::NAN
        }
    }
}

/// Préfixe numérique "-12.5xyz" -> -12.5 ; aucun chiffre => 0.
fn reel_permissif(s: &str) -> f64 {
    let octets = s.as_bytes();
    let mut fin = 0;

    if octets.first() == Some(&b'-') {
        fin = 1;
    }
    let debut_chiffres = fin;
    while fin < octets.len() && octets[fin].is_ascii_digit() {
        fin += 1;
    }
    if fin == debut_chiffres {
        return 0.0;
    }

    // partie décimale seulement si au moins un chiffre suit le point
    if fin + 1 < octets.len() && octets[fin] == b'.' && octets[fin + 1].is_ascii_digit() {
        fin += 1;
        while fin < octets.len() && octets[fin].is_ascii_digit() {
            fin += 1;
        }
    }

    s[..fin].parse::<f64>().unwrap_or(0.0)
}
