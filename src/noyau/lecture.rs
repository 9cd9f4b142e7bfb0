// src/noyau/lecture.rs
//
// Lecture décimale TRONQUÉE d'un rationnel exact :
//   entier   = tronque(r)
//   frac     = r − entier           (exact, |frac| < 1)
//   chiffres = tronque(|frac| · 10^digits), complété à gauche par des zéros
//
// Le résultat s'affiche suivi de "..." : c'est une lecture à précision finie,
// pas un développement décimal exact.

use std::fmt;
use tracing::debug;

use super::erreur::Result;
use super::ratnum::RatNum;
use super::serie::pi_approche;

/// Marque de troncature.
pub const ELLIPSE: &str = "...";

/// Lecture décimale : partie entière + exactement `digits` décimales.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lecture {
    pub entier: String,
    pub decimales: String,
}

impl fmt::Display for Lecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}{}", self.entier, self.decimales, ELLIPSE)
    }
}

/* ------------------------ Décimal ------------------------ */

/// 10^n par n multiplications successives par 10.
fn puissance_dix(n: usize) -> RatNum {
    let dix = RatNum::entier(10);
    (0..n).fold(RatNum::entier(1), |m, _| m.mul(&dix))
}

/// r -> lecture tronquée à `digits` décimales.
pub fn lecture_decimale(r: &RatNum, digits: usize) -> Result<Lecture> {
    let entier = r.to_int_string();
    let frac = r.sub(&RatNum::parse(&entier)?);

    let chiffres = frac.abs().mul(&puissance_dix(digits)).to_int_string();
    let decimales = format!("{chiffres:0>digits$}");

    // -0.xxx : la troncature vers zéro a perdu le signe
    let entier = if frac.is_negative() && !entier.starts_with('-') {
        format!("-{entier}")
    } else {
        entier
    };

    debug!(digits, entier = %entier, "lecture décimale");
    Ok(Lecture { entier, decimales })
}

/* ------------------------ π ------------------------ */

/// π sur `digits` décimales : `digits` termes de série, puis lecture tronquée.
pub fn pi_decimal(digits: usize) -> Result<Lecture> {
    let r = pi_approche(digits);
    lecture_decimale(&r, digits)
}
