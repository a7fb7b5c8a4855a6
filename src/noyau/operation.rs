//! Noyau — orchestration
//!
//! entrée -> classement -> extraction (une seule fois) -> évaluateur du genre -> Resultat
//!
//! Trois branches seulement : réel, rationnel, erreur. Aucun état partagé entre appels.

use num_traits::One;

use super::classement::Genre;
use super::erreur::ErreurCalcul;
use super::extraction::analyser;
use super::fraction::Fraction;
use super::rationnel::brut_rationnel;
use super::reel::eval_reel;

/// Résultat d’une évaluation (propriété transférée à l’affichage).
#[derive(Clone, Debug, PartialEq)]
pub enum Resultat {
    Reel(f64),
    Rationnel(Fraction),
    Erreur(ErreurCalcul),
}

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub genre: String,
    pub operateur: String,
    pub operande1: String,
    pub operande2: String,
    pub avant: String, // fraction brute (rationnel seulement)
    pub note: String,
}

/// API publique : évalue une entrée à deux opérandes.
pub fn evaluer(entree: &str) -> Resultat {
    evaluer_avec_demarche(entree).0
}

/// Comme `evaluer`, avec la démarche (genre, opérateur, opérandes, fraction brute, note).
pub fn evaluer_avec_demarche(entree: &str) -> (Resultat, DemarcheNoyau) {
    // 1) Classement + extraction (une seule analyse, transmise telle quelle à l’évaluateur)
    let op = analyser(entree);

    let mut d = DemarcheNoyau {
        genre: op.genre.libelle().to_string(),
        operateur: op
            .operateur
            .map(|o| o.symbole().to_string())
            .unwrap_or_default(),
        operande1: op.operande1.to_string(),
        operande2: op.operande2.to_string(),
        ..DemarcheNoyau::default()
    };

    // 2) Évaluateur du genre
    let r = match op.genre {
        Genre::Invalide => {
            d.note = "aucune grammaire (réelle ou rationnelle) ne reconnaît l’entrée".into();
            Resultat::Erreur(ErreurCalcul::OperationInvalide)
        }
        Genre::Reel => {
            let v = eval_reel(&op);
            d.note = if v.is_finite() {
                "opérandes lus comme flottants".into()
            } else {
                "division réelle par zéro : résultat non fini".into()
            };
            Resultat::Reel(v)
        }
        Genre::Rationnel => {
            let brut = brut_rationnel(&op);
            d.avant = brut.to_string();
            d.note = note_rationnelle(&brut);
            Resultat::Rationnel(brut.simplify())
        }
    };

    tracing::debug!(entree, resultat = ?r, "évaluation");
    (r, d)
}

fn note_rationnelle(brut: &Fraction) -> String {
    if brut.est_degeneree() {
        return "division par un numérateur nul : dénominateur 0".into();
    }
    let g = Fraction::gcd(brut.numer(), brut.denom());
    if g.is_one() {
        "déjà irréductible".into()
    } else {
        format!("simplifiée par pgcd = {g}")
    }
}
