// src/noyau/extraction.rs
//
// Découpe (opérateur, opérande1, opérande2) d’une entrée déjà classée.
// L’opérateur est le PREMIER caractère de la classe du genre, hors signe de tête
// de l’opérande 1 (position 0). Les opérandes empruntent l’entrée (zéro copie).

use super::classement::{classer, Genre};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise, // '/' (réel)
    Ratio,  // ':' (rationnel, lu comme ÷)
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            ':' => Some(Operateur::Ratio),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Ratio => ':',
        }
    }
}

/// Opération analysée : créée une fois par entrée, consommée par l’évaluateur du genre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationAnalysee<'a> {
    pub genre: Genre,
    pub operateur: Option<Operateur>,
    pub operande1: &'a str,
    pub operande2: &'a str,
}

impl OperationAnalysee<'_> {
    /// Genre invalide : ni opérateur ni opérandes.
    pub fn invalide() -> Self {
        OperationAnalysee {
            genre: Genre::Invalide,
            operateur: None,
            operande1: "",
            operande2: "",
        }
    }
}

/// Extrait opérateur + opérandes selon la classe d’opérateurs du genre.
pub fn extraire(entree: &str, genre: Genre) -> OperationAnalysee<'_> {
    let classe = genre.operateurs();

    let trouve = entree
        .char_indices()
        .find(|&(i, c)| classe.contains(&c) && !(i == 0 && c == '-'));

    let Some((pos, c)) = trouve else {
        return OperationAnalysee::invalide();
    };

    let op = OperationAnalysee {
        genre,
        operateur: Operateur::depuis_char(c),
        operande1: &entree[..pos],
        operande2: &entree[pos + c.len_utf8()..],
    };

    tracing::debug!(
        operateur = %c,
        operande1 = op.operande1,
        operande2 = op.operande2,
        "extraction"
    );
    op
}

/// Classe puis extrait (une seule analyse de l’entrée).
pub fn analyser(entree: &str) -> OperationAnalysee<'_> {
    match classer(entree) {
        Genre::Invalide => OperationAnalysee::invalide(),
        genre => extraire(entree, genre),
    }
}
