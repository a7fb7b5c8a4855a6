//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, digits, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur la précision de la lecture décimale (digits).

/// Précision par défaut de la lecture décimale tronquée.
const DIGITS_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision.
const DIGITS_MAX: usize = 200;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub genre: String,
    pub operateur: String,
    pub operandes: String,
    pub avant: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub exact: String,       // "9.1" ou "5/6 (≈ 0.8333333333333334)"
    pub lecture: String,     // décimal tronqué (rationnel seulement)
    pub erreur: String,      // message d’erreur (invalide / dégénéré / vide)
    pub lecture_dispo: bool, // false si réel / erreur / vide

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub digits: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            exact: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            lecture_dispo: false,
            demarche: Demarche::default(),
            digits: DIGITS_DEFAUT,
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + digits par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère.
    pub fn backspace_entree(&mut self) {
        self.entree.pop();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.exact.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.lecture_dispo = false;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Place une erreur.
    ///
    /// On CONSERVE `exact` (dernier résultat) pour ne pas effacer l’écran sur une faute,
    /// mais la démarche reste visible : elle explique le classement.
    pub fn set_erreur(&mut self, msg: impl Into<String>, demarche: Demarche) {
        self.erreur = msg.into();
        self.lecture.clear();
        self.lecture_dispo = false;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Dépose un résultat complet (forme principale + lecture optionnelle + démarche).
    pub fn set_resultats(
        &mut self,
        exact: impl Into<String>,
        lecture: Option<String>,
        demarche: Demarche,
    ) {
        self.erreur.clear();
        self.exact = exact.into();
        self.demarche = demarche;

        match lecture {
            Some(v) => {
                self.lecture_dispo = true;
                self.lecture = v;
            }
            None => {
                self.lecture_dispo = false;
                self.lecture.clear();
            }
        }

        self.focus_entree = true;
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        self.focus_entree = true;
    }
}
