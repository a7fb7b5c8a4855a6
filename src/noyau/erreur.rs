// src/noyau/erreur.rs
//
// Taxonomie d’erreurs du noyau.
// Aucune de ces erreurs ne traverse le noyau sous forme de panique :
// elles voyagent comme des données (Resultat::Erreur) ou sont détectées à l’affichage.

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// L’entrée ne respecte ni la grammaire réelle ni la grammaire rationnelle.
    #[error("opération invalide")]
    OperationInvalide,

    /// Division par zéro (réel non fini, ou fraction de dénominateur nul).
    #[error("opération invalide (division par zéro)")]
    OperationDegeneree,

    /// Jeton numérique illisible (lecture stricte uniquement).
    #[error("jeton numérique malformé : {0:?}")]
    JetonMalforme(String),

    #[error("entrée vide")]
    EntreeVide,
}
