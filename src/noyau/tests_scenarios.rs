//! Scénarios de bout en bout : entrée brute -> Resultat -> affichage.

use super::classement::{classer, Genre};
use super::fraction::Fraction;
use super::{evaluer, formater_resultat, ErreurCalcul, Resultat};

fn reel(s: &str) -> f64 {
    match evaluer(s) {
        Resultat::Reel(v) => v,
        autre => panic!("attendu un réel pour {s:?}, obtenu {autre:?}"),
    }
}

fn rationnel(s: &str) -> Fraction {
    match evaluer(s) {
        Resultat::Rationnel(f) => f,
        autre => panic!("attendu un rationnel pour {s:?}, obtenu {autre:?}"),
    }
}

fn assert_invalide(s: &str) {
    assert_eq!(
        evaluer(s),
        Resultat::Erreur(ErreurCalcul::OperationInvalide),
        "entree={s:?}"
    );
}

#[test]
fn reel_addition_decimale() {
    assert!((reel("5.1+4") - 9.1).abs() < 1e-12);
}

#[test]
fn rationnel_division_vers_un() {
    assert_eq!(classer("6/3:2/1"), Genre::Rationnel);
    assert_eq!(rationnel("6/3:2/1").to_string(), "1/1");
}

#[test]
fn operandes_mixtes_invalides() {
    assert_invalide("5.2+5/1");
}

#[test]
fn operande_manquant_invalide() {
    assert_invalide("52214+");
}

#[test]
fn division_par_numerateur_nul() {
    let f = rationnel("5/1:0/1");
    assert_eq!(f.denom(), &num_bigint::BigInt::from(0));

    let e = formater_resultat(&evaluer("5/1:0/1"), 10).unwrap_err();
    assert_eq!(e, ErreurCalcul::OperationDegeneree);
}

#[test]
fn priorite_du_reel() {
    assert_eq!(reel("3-1"), 2.0);
}

#[test]
fn exemples_des_regles() {
    // (Réel) 5.1+4 ; (Rationnel) 5/1:2 ; (Erreur) 5.2+5/1 ; (Erreur) 52214+
    assert!(matches!(evaluer("5.1+4"), Resultat::Reel(_)));
    assert_eq!(rationnel("5/1:2").to_string(), "5/2");
    assert_invalide("5.2+5/1");
    assert_invalide("52214+");
}

#[test]
fn operande_seul_invalide() {
    // forme d’opérande rationnel, mais pas d’opérateur
    assert_invalide("5");
    assert_invalide("-5");
    assert_invalide("");
}

#[test]
fn reel_division_par_zero_non_finie() {
    assert!(!reel("7/0").is_finite());
    assert!(!reel("0/0").is_finite());
}

#[test]
fn operandes_negatifs() {
    assert_eq!(reel("-5--3"), -2.0);
    assert_eq!(rationnel("-1/2+-1/2").to_string(), "-1/1");
    assert_eq!(rationnel("-2/3:-4/9").to_string(), "3/2");
}
