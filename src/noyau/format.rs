// src/noyau/format.rs
//
// Mise en forme d’un Resultat pour l’affichage.
// C’est ici (et pas dans les évaluateurs) qu’un résultat dégénéré devient une erreur :
// réel non fini, ou fraction de dénominateur nul.

use super::erreur::ErreurCalcul;
use super::fraction::Fraction;
use super::lecture::lecture_fraction;
use super::operation::Resultat;

/// Texte prêt à afficher : forme principale + lecture décimale tronquée (rationnel seulement).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    pub exact: String,
    pub lecture: Option<String>,
}

pub fn formater_resultat(r: &Resultat, digits: usize) -> Result<Affichage, ErreurCalcul> {
    match r {
        Resultat::Reel(v) => Ok(Affichage {
            exact: format_reel(*v)?,
            lecture: None,
        }),
        Resultat::Rationnel(f) => Ok(Affichage {
            exact: format_fraction(f)?,
            lecture: lecture_fraction(f, digits),
        }),
        Resultat::Erreur(e) => Err(e.clone()),
    }
}

fn format_reel(v: f64) -> Result<String, ErreurCalcul> {
    if !v.is_finite() {
        return Err(ErreurCalcul::OperationDegeneree);
    }
    Ok(format!("{v}"))
}

/// "n/d (≈ x)"
fn format_fraction(f: &Fraction) -> Result<String, ErreurCalcul> {
    let approx = f.to_f64();
    if !approx.is_finite() {
        return Err(ErreurCalcul::OperationDegeneree);
    }
    Ok(format!("{f} (≈ {approx})"))
}
