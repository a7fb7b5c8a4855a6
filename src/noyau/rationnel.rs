// src/noyau/rationnel.rs
//
// Évaluation rationnelle : deux Fraction construites depuis les opérandes,
// puis + - * : (÷), toujours suivies de simplify().
//
// Diviser par un opérande de numérateur nul donne un dénominateur nul :
// on le propage tel quel (contrat Fraction), sans erreur levée ici.

use super::extraction::{OperationAnalysee, Operateur};
use super::fraction::Fraction;

pub fn eval_rationnel(op: &OperationAnalysee<'_>) -> Fraction {
    brut_rationnel(op).simplify()
}

/// Résultat avant simplification (utile pour la démarche).
pub fn brut_rationnel(op: &OperationAnalysee<'_>) -> Fraction {
    let a = Fraction::depuis_texte(op.operande1);
    let b = Fraction::depuis_texte(op.operande2);

    match op.operateur {
        Some(Operateur::Plus) => somme_brute(&a, &b, false),
        Some(Operateur::Moins) => somme_brute(&a, &b, true),
        Some(Operateur::Fois) => produit_brut(&a, &b),
        Some(Operateur::Ratio) => quotient_brut(&a, &b),
        // inatteignable : la grammaire rationnelle n’admet que + - * :
        autre => {
            tracing::warn!(?autre, "opérateur hors grammaire rationnelle");
            Fraction::un()
        }
    }
}

/// n1*d2 ± d1*n2 / d1*d2
fn somme_brute(a: &Fraction, b: &Fraction, moins: bool) -> Fraction {
    let gauche = a.numer() * b.denom();
    let droite = a.denom() * b.numer();
    let num = if moins { gauche - droite } else { gauche + droite };
    Fraction::new(num, a.denom() * b.denom())
}

fn produit_brut(a: &Fraction, b: &Fraction) -> Fraction {
    Fraction::new(a.numer() * b.numer(), a.denom() * b.denom())
}

/// n1*d2 / d1*n2
fn quotient_brut(a: &Fraction, b: &Fraction) -> Fraction {
    Fraction::new(a.numer() * b.denom(), a.denom() * b.numer())
}
