// src/noyau/ratnum.rs
//
// Rationnel exact Q-pur : paire (num, den) TOUJOURS canonique.
// - den > 0 (le signe vit dans le numérateur)
// - pgcd(|num|, den) = 1
// - immuable : chaque opération rend une nouvelle valeur, aucun champ exposé
//
// Puissance : num^n et den^n calculés directement (BigInt::pow), jamais via une
// boucle de carrés successifs (qui donnerait base^(2^(n-1)) au lieu de base^n).

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::iter;
use std::num::NonZeroU64;
use std::ops;
use std::str::FromStr;

use super::erreur::{ErreurRat, Result};

/* ------------------------ pgcd ------------------------ */

/// pgcd(|a|, |b|) ; refusé pour (0, 0).
///
/// La garde zéro passe avant toute normalisation en valeur absolue.
pub fn pgcd(a: &BigInt, b: &BigInt) -> Result<BigInt> {
    if a.is_zero() && b.is_zero() {
        return Err(ErreurRat::PgcdIndefini);
    }
    Ok(a.gcd(b))
}

/* ------------------------ Type ------------------------ */

/// Rationnel exact en forme canonique.
///
/// L'égalité dérivée est structurelle : elle suffit puisque la forme canonique
/// est unique pour chaque valeur. L'ordre, lui, passe par le produit en croix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RatNum {
    num: BigInt,
    den: BigInt,
}

impl RatNum {
    /* ------------------------ Construction ------------------------ */

    /// a/b canonisé. Échoue si b = 0.
    pub fn new(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Result<Self> {
        Self::canonique(num.into(), den.into())
    }

    /// a/1
    pub fn entier(a: impl Into<BigInt>) -> Self {
        Self {
            num: a.into(),
            den: BigInt::one(),
        }
    }

    /// a/b pour un dénominateur strictement positif par construction (infaillible).
    pub fn sur(num: impl Into<BigInt>, den: NonZeroU64) -> Self {
        Self::reduit(num.into(), BigInt::from(den.get()))
    }

    fn canonique(num: BigInt, den: BigInt) -> Result<Self> {
        if den.is_zero() {
            return Err(ErreurRat::DenominateurNul);
        }
        if den.is_negative() {
            Ok(Self::reduit(-num, -den))
        } else {
            Ok(Self::reduit(num, den))
        }
    }

    /// Réduction d'une paire dont le dénominateur est déjà > 0.
    ///
    /// den ≠ 0 ici : le cas pgcd(0, 0) que garde `pgcd` ne peut pas se présenter,
    /// d'où l'appel direct à `Integer::gcd`.
    fn reduit(num: BigInt, den: BigInt) -> Self {
        debug_assert!(den.is_positive());
        let g = num.gcd(&den);
        if g.is_one() {
            return Self { num, den };
        }
        Self {
            num: num / &g,
            den: den / g,
        }
    }

    /// Lecture "a" ou "a/b" (espaces autour tolérés).
    pub fn parse(s: &str) -> Result<Self> {
        let jetons: Vec<&str> = s.trim().split('/').collect();
        match jetons.as_slice() {
            [a] => Ok(Self::entier(lire_entier(s, a)?)),
            [a, b] => Self::new(lire_entier(s, a)?, lire_entier(s, b)?),
            _ => Err(ErreurRat::lecture(s, "un seul '/' autorisé")),
        }
    }

    /* ------------------------ Accès ------------------------ */

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.num, self.den)
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /* ------------------------ Arithmétique ------------------------ */

    /// (a·d + b·c) / (b·d)
    pub fn add(&self, r: &Self) -> Self {
        Self::reduit(&self.num * &r.den + &self.den * &r.num, &self.den * &r.den)
    }

    /// (a·d − b·c) / (b·d)
    pub fn sub(&self, r: &Self) -> Self {
        Self::reduit(&self.num * &r.den - &self.den * &r.num, &self.den * &r.den)
    }

    /// (a·c) / (b·d)
    pub fn mul(&self, r: &Self) -> Self {
        Self::reduit(&self.num * &r.num, &self.den * &r.den)
    }

    /// (a·d) / (b·c) ; refusé si r = 0.
    pub fn div(&self, r: &Self) -> Result<Self> {
        if r.num.is_zero() {
            return Err(ErreurRat::DivisionParZero);
        }
        Self::canonique(&self.num * &r.den, &self.den * &r.num)
    }

    /// 1/r ; refusé si r = 0.
    pub fn recip(&self) -> Result<Self> {
        if self.num.is_zero() {
            return Err(ErreurRat::DivisionParZero);
        }
        Self::canonique(self.den.clone(), self.num.clone())
    }

    /// r^n exact, n signé.
    ///
    /// - n = 0 : 1/1 (y compris 0^0)
    /// - n > 0 : num^n / den^n
    /// - n < 0 : (1/r)^|n|, refusé si r = 0
    pub fn pow(&self, n: i32) -> Result<Self> {
        let e = n.unsigned_abs();
        match n.cmp(&0) {
            Ordering::Equal => Ok(Self::one()),
            Ordering::Greater => Ok(Self::reduit(self.num.pow(e), self.den.pow(e))),
            Ordering::Less => {
                let inv = self.recip()?;
                Ok(Self::reduit(inv.num.pow(e), inv.den.pow(e)))
            }
        }
    }

    pub fn abs(&self) -> Self {
        Self {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /* ------------------------ Comparaison / texte ------------------------ */

    /// r < s via a·d < c·b (dénominateurs positifs => signe correct).
    pub fn less_than(&self, r: &Self) -> bool {
        &self.num * &r.den < &r.num * &self.den
    }

    /// Quotient entier tronqué vers zéro.
    pub fn tronque(&self) -> BigInt {
        &self.num / &self.den
    }

    /// Partie entière (troncature vers zéro) en décimal.
    pub fn to_int_string(&self) -> String {
        self.tronque().to_string()
    }
}

fn lire_entier(entree: &str, jeton: &str) -> Result<BigInt> {
    if jeton.is_empty() {
        return Err(ErreurRat::lecture(entree, "jeton vide"));
    }
    // signe optionnel puis chiffres décimaux seulement (BigInt::from_str tolère '_')
    let chiffres = jeton.strip_prefix(&['+', '-'][..]).unwrap_or(jeton);
    if chiffres.is_empty() || !chiffres.bytes().all(|c| c.is_ascii_digit()) {
        return Err(ErreurRat::lecture(entree, format!("{jeton:?} n'est pas un entier décimal")));
    }
    BigInt::from_str(jeton)
        .map_err(|e| ErreurRat::lecture(entree, format!("{jeton:?} n'est pas un entier ({e})")))
}

/* ------------------------ Traits std ------------------------ */

impl Default for RatNum {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for RatNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RatNum {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.den.is_one() && other.den.is_one() {
            return self.num.cmp(&other.num);
        }
        (&self.num * &other.den).cmp(&(&other.num * &self.den))
    }
}

impl fmt::Display for RatNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl FromStr for RatNum {
    type Err = ErreurRat;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<i64> for RatNum {
    fn from(a: i64) -> Self {
        Self::entier(a)
    }
}

impl From<BigInt> for RatNum {
    fn from(a: BigInt) -> Self {
        Self::entier(a)
    }
}

impl From<RatNum> for BigRational {
    fn from(r: RatNum) -> Self {
        // déjà réduit, den > 0
        let (num, den) = r.into_parts();
        BigRational::new_raw(num, den)
    }
}

impl TryFrom<BigRational> for RatNum {
    type Error = ErreurRat;

    fn try_from(q: BigRational) -> Result<Self> {
        let (num, den) = q.into_raw();
        Self::canonique(num, den)
    }
}

/* ------------------------ Opérateurs ------------------------ */

macro_rules! operateur {
    ($trait_op:ident, $methode:ident) => {
        impl ops::$trait_op<&RatNum> for &RatNum {
            type Output = RatNum;

            fn $methode(self, r: &RatNum) -> RatNum {
                RatNum::$methode(self, r)
            }
        }

        impl ops::$trait_op for RatNum {
            type Output = RatNum;

            fn $methode(self, r: RatNum) -> RatNum {
                RatNum::$methode(&self, &r)
            }
        }
    };
}

operateur!(Add, add);
operateur!(Sub, sub);
operateur!(Mul, mul);

impl ops::Neg for RatNum {
    type Output = RatNum;

    fn neg(self) -> RatNum {
        RatNum {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Neg for &RatNum {
    type Output = RatNum;

    fn neg(self) -> RatNum {
        RatNum {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl Zero for RatNum {
    fn zero() -> Self {
        Self::entier(0)
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for RatNum {
    fn one() -> Self {
        Self::entier(1)
    }
}

impl iter::Sum for RatNum {
    fn sum<I: Iterator<Item = RatNum>>(it: I) -> Self {
        it.fold(Self::zero(), |acc, r| acc + r)
    }
}

impl<'a> iter::Sum<&'a RatNum> for RatNum {
    fn sum<I: Iterator<Item = &'a RatNum>>(it: I) -> Self {
        it.fold(Self::zero(), |acc, r| RatNum::add(&acc, r))
    }
}
