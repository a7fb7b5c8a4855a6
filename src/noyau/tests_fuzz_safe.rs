//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariants : classement total/déterministe, rationnel irréductible,
//!   réel = application flottante de l’opérateur

use std::time::{Duration, Instant};

use num_bigint::BigInt;

use super::classement::{classer, Genre};
use super::fraction::Fraction;
use super::{evaluer, Resultat};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération bornée ------------------------ */

fn gen_entier(rng: &mut Rng, zero_ok: bool) -> i64 {
    let v = rng.pick(40) as i64;
    if v == 0 && !zero_ok {
        1
    } else {
        v
    }
}

fn signe(rng: &mut Rng) -> &'static str {
    if rng.pick(4) == 0 {
        "-"
    } else {
        ""
    }
}

fn gen_reel(rng: &mut Rng) -> (String, f64) {
    let s = if rng.coin() {
        format!("{}{}", signe(rng), gen_entier(rng, true))
    } else {
        format!("{}{}.{}", signe(rng), gen_entier(rng, true), rng.pick(100))
    };
    let v = s.parse::<f64>().unwrap();
    (s, v)
}

fn gen_rat(rng: &mut Rng) -> String {
    // numérateur nul fréquent : c’est lui qui produit les divisions dégénérées
    let n = if rng.pick(5) == 0 {
        0
    } else {
        gen_entier(rng, true)
    };
    if rng.coin() {
        format!("{}{n}/{}", signe(rng), gen_entier(rng, false))
    } else {
        format!("{}{n}", signe(rng))
    }
}

/// Alphabet réduit aux symboles des deux grammaires + quelques intrus.
fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '5', '9', '.', '+', '-', '*', '/', ':', ' ', 'x',
    ];
    let len = rng.pick(9) as usize;
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_reel_application_flottante() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let (sa, a) = gen_reel(&mut rng);
        let (sb, b) = gen_reel(&mut rng);
        let (op, attendu) = match rng.pick(4) {
            0 => ('+', a + b),
            1 => ('-', a - b),
            2 => ('*', a * b),
            _ => ('/', a / b),
        };
        let entree = format!("{sa}{op}{sb}");

        assert_eq!(classer(&entree), Genre::Reel, "entree={entree:?}");
        match evaluer(&entree) {
            Resultat::Reel(v) if attendu.is_finite() => {
                assert_eq!(v, attendu, "entree={entree:?}")
            }
            Resultat::Reel(v) => {
                assert!(op == '/' && b == 0.0, "entree={entree:?}");
                assert!(!v.is_finite(), "entree={entree:?}");
            }
            autre => panic!("entree={entree:?} -> {autre:?}"),
        }
    }
}

#[test]
fn fuzz_safe_rationnel_irreductible() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut vus_rationnels = 0usize;
    let mut vus_degeneres = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let a = gen_rat(&mut rng);
        let b = gen_rat(&mut rng);
        let op = ['+', '-', '*', ':'][rng.pick(4) as usize];
        let entree = format!("{a}{op}{b}");

        match evaluer(&entree) {
            Resultat::Rationnel(f) if f.est_degeneree() => {
                // seul ':' par un numérateur nul peut annuler le dénominateur
                assert_eq!(op, ':', "entree={entree:?}");
                vus_degeneres += 1;
            }
            Resultat::Rationnel(f) => {
                let g = Fraction::gcd(f.numer(), f.denom());
                assert!(
                    g == BigInt::from(0) || g == BigInt::from(1),
                    "non irréductible: {entree:?} -> {f}"
                );
                assert_eq!(f.clone().simplify(), f, "entree={entree:?}");
                vus_rationnels += 1;
            }
            // un a op b sans '/' ni ':' est lu comme réel (priorité)
            Resultat::Reel(_) => assert_eq!(classer(&entree), Genre::Reel),
            autre => panic!("entree={entree:?} -> {autre:?}"),
        }
    }

    assert!(vus_rationnels > 50, "trop peu de rationnels: {vus_rationnels}");
    assert!(vus_degeneres > 0, "aucun cas dégénéré vu");
}

#[test]
fn fuzz_safe_classement_total_et_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..2000 {
        budget(t0, max);

        let entree = gen_bruit(&mut rng);
        let g1 = classer(&entree);
        let g2 = classer(&entree);
        assert_eq!(g1, g2, "entree={entree:?}");

        // ':' n’appartient qu’à la grammaire rationnelle, '.' qu’à la réelle
        if entree.contains(':') {
            assert_ne!(g1, Genre::Reel, "entree={entree:?}");
        }
        if entree.contains('.') {
            assert_ne!(g1, Genre::Rationnel, "entree={entree:?}");
        }

        // le genre décide de la branche, jamais de panique
        match (g1, evaluer(&entree)) {
            (Genre::Reel, Resultat::Reel(_))
            | (Genre::Rationnel, Resultat::Rationnel(_))
            | (Genre::Invalide, Resultat::Erreur(_)) => {}
            (g, r) => panic!("entree={entree:?} genre={g:?} resultat={r:?}"),
        }
    }
}
