//! Fraction (numérateur / dénominateur) en big int.
//!
//! Contrat “best effort, l’appelant vérifie” :
//! - un dénominateur nul est accepté tel quel (jamais de panique) ;
//! - le signe vit dans le numérateur, le dénominateur est ≥ 0 ;
//! - toute opération produit une nouvelle valeur.
//!
//! Le signal d’erreur d’une fraction dégénérée est `to_f64()` non fini.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurCalcul;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fraction {
    numerateur: BigInt,
    denominateur: BigInt,
}

impl Fraction {
    /// Construit n/d. Dénominateur négatif => les deux signes basculent.
    /// Dénominateur nul : accepté, trace `debug` seulement.
    pub fn new(numerateur: impl Into<BigInt>, denominateur: impl Into<BigInt>) -> Self {
        let mut n = numerateur.into();
        let mut d = denominateur.into();

        if d.is_zero() {
            tracing::debug!(numerateur = %n, "fraction de dénominateur nul");
        }

        if d.is_negative() {
            n = -n;
            d = -d;
        }

        Self {
            numerateur: n,
            denominateur: d,
        }
    }

    /// n/1
    pub fn entier(n: impl Into<BigInt>) -> Self {
        Self::new(n, BigInt::one())
    }

    /// 1/1 (élément neutre, repli des branches inatteignables).
    pub fn un() -> Self {
        Self::entier(BigInt::one())
    }

    /// Lecture permissive de "a" ou "a/b".
    /// Un champ illisible vaut 0 (préfixe numérique seulement, le reste est ignoré).
    pub fn depuis_texte(s: &str) -> Self {
        match s.split_once('/') {
            Some((n, d)) => Self::new(entier_permissif(n), entier_permissif(d)),
            None => Self::entier(entier_permissif(s)),
        }
    }

    pub fn numer(&self) -> &BigInt {
        &self.numerateur
    }

    pub fn denom(&self) -> &BigInt {
        &self.denominateur
    }

    /// Dénominateur nul.
    pub fn est_degeneree(&self) -> bool {
        self.denominateur.is_zero()
    }

    /// Valeur flottante. Dénominateur nul => ±∞ ou NaN (IEEE-754), jamais de panique.
    pub fn to_f64(&self) -> f64 {
        match self.to_rational() {
            Some(r) => r.to_f64().unwrap_or(f64::NAN),
            None => self.numerateur.to_f64().unwrap_or(f64::NAN) / 0.0,
        }
    }

    /// Vue exacte `BigRational` (None si dégénérée).
    pub fn to_rational(&self) -> Option<BigRational> {
        if self.est_degeneree() {
            return None;
        }
        Some(BigRational::new(
            self.numerateur.clone(),
            self.denominateur.clone(),
        ))
    }

    /// PGCD d’Euclide sur les valeurs absolues.
    /// gcd(a, 0) = |a| ; gcd(0, 0) = 0.
    pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
        let mut a = a.abs();
        let mut b = b.abs();
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        a
    }

    /// Forme irréductible. No-op si le dénominateur est nul.
    pub fn simplify(self) -> Fraction {
        if self.est_degeneree() {
            tracing::debug!(fraction = %self, "simplification ignorée : dénominateur nul");
            return self;
        }

        let g = Self::gcd(&self.numerateur, &self.denominateur);
        if g.is_zero() || g.is_one() {
            return self;
        }

        Fraction::new(&self.numerateur / &g, &self.denominateur / &g)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerateur, self.denominateur)
    }
}

/// Lecture stricte : "a" ou "a/b" (a, b entiers signés), sinon `JetonMalforme`.
impl FromStr for Fraction {
    type Err = ErreurCalcul;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let strict = |t: &str| {
            t.parse::<BigInt>()
                .map_err(|_| ErreurCalcul::JetonMalforme(s.to_string()))
        };

        match s.split_once('/') {
            Some((n, d)) => Ok(Self::new(strict(n)?, strict(d)?)),
            None => Ok(Self::entier(strict(s)?)),
        }
    }
}

/// Préfixe entier signé ("-12abc" -> -12). Aucun chiffre => 0.
fn entier_permissif(s: &str) -> BigInt {
    let s = s.trim_start();
    let (signe, reste) = match s.strip_prefix('-') {
        Some(r) => (-1, r),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };

    let fin = reste
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(reste.len());

    match BigInt::parse_bytes(reste[..fin].as_bytes(), 10) {
        Some(n) => n * signe,
        None => BigInt::zero(),
    }
}
