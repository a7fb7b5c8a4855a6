//! Noyau calculatrice réel / rationnel
//!
//! Organisation interne :
//! - fraction.rs   : Fraction big int + pgcd d’Euclide + simplify
//! - classement.rs : grammaires réelle / rationnelle (REEL, RATIONNEL, INVALIDE)
//! - extraction.rs : (opérateur, opérande1, opérande2)
//! - reel.rs       : évaluation f64
//! - rationnel.rs  : évaluation Fraction
//! - operation.rs  : pipeline complet
//! - format.rs     : affichage (résultat dégénéré => opération invalide)
//! - lecture.rs    : décimal tronqué d’une fraction
//! - erreur.rs     : taxonomie d’erreurs

pub mod classement;
pub mod erreur;
pub mod extraction;
pub mod format;
pub mod fraction;
pub mod lecture;
pub mod operation;
pub mod rationnel;
pub mod reel;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use format::{formater_resultat, Affichage};
pub use operation::{evaluer, evaluer_avec_demarche, DemarcheNoyau, Resultat};
