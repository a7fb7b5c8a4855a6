//! Calculatrice réel / rationnel — bibliothèque
//!
//! Le noyau (`noyau`) est pur : une entrée texte, un `Resultat`, aucun état partagé.
//! L’application eframe (binaire) n’en est qu’un client.

pub mod noyau;

pub use noyau::{
    evaluer, evaluer_avec_demarche, formater_resultat, DemarcheNoyau, ErreurCalcul, Resultat,
};
