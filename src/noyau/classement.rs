// src/noyau/classement.rs
//
// Classement lexical de l’entrée : REEL / RATIONNEL / INVALIDE.
//
// Deux grammaires ancrées (début + fin), testées dans cet ordre fixe :
//   1) réelle     : <réel><op réel><réel>           op ∈ { + - * / }
//   2) rationnelle: <rat><op rationnel><rat>        op ∈ { + - * : }
//
// Les opérateurs sont disjoints sur '/' et ':' : ':' ne peut jamais être réel,
// et '/' n’est jamais un opérateur rationnel (c’est le séparateur de fraction).

use regex::Regex;
use std::sync::OnceLock;

/// Nombre réel : signe optionnel, chiffres, partie décimale optionnelle.
const NOMBRE_REEL: &str = r"-?[0-9]+(?:\.[0-9]+)?";
const OPERATEUR_REEL: &str = r"[+\-*/]";

/// Rationnel : entier sans zéro de tête (sauf "0" seul), puis "/dénominateur" optionnel
/// (dénominateur sans zéro de tête, donc jamais nul).
const NOMBRE_RATIONNEL: &str = r"-?(?:0|[1-9][0-9]*)(?:/[1-9][0-9]*)?";
const OPERATEUR_RATIONNEL: &str = r"[+\-*:]";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Genre {
    Reel,
    Rationnel,
    Invalide,
}

impl Genre {
    /// Classe des 4 opérateurs légaux pour ce genre (vide si invalide).
    pub fn operateurs(self) -> &'static [char] {
        match self {
            Genre::Reel => &['+', '-', '*', '/'],
            Genre::Rationnel => &['+', '-', '*', ':'],
            Genre::Invalide => &[],
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            Genre::Reel => "réel",
            Genre::Rationnel => "rationnel",
            Genre::Invalide => "invalide",
        }
    }
}

fn grammaire(nombre: &str, operateur: &str) -> Regex {
    let motif = format!("^{nombre}{operateur}{nombre}$");
    Regex::new(&motif).expect("grammaire constante")
}

fn grammaire_reelle() -> &'static Regex {
    static G: OnceLock<Regex> = OnceLock::new();
    G.get_or_init(|| grammaire(NOMBRE_REEL, OPERATEUR_REEL))
}

fn grammaire_rationnelle() -> &'static Regex {
    static G: OnceLock<Regex> = OnceLock::new();
    G.get_or_init(|| grammaire(NOMBRE_RATIONNEL, OPERATEUR_RATIONNEL))
}

/// Classe l’entrée (déjà débarrassée de ses espaces). Total et déterministe.
pub fn classer(entree: &str) -> Genre {
    let genre = if grammaire_reelle().is_match(entree) {
        Genre::Reel
    } else if grammaire_rationnelle().is_match(entree) {
        Genre::Rationnel
    } else {
        Genre::Invalide
    };

    tracing::debug!(entree, genre = genre.libelle(), "classement");
    genre
}
