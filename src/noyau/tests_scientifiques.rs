//! Tests scientifiques (campagne) : série π + lecture décimale, contre références.
//!
//! But : vérifier les chiffres sans faire chauffer la machine.
//! - budget temps global
//! - référence indépendante : formule de Machin en entiers scalés
//! - convergence : écarts successifs strictement décroissants (raison 1/16)

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::{pi_approche, pi_decimal, terme, RatNum, SommesPartielles};

/// π, 100 premières décimales.
const PI_100: &str = "3.\
1415926535897932384626433832795028841971693993751058209749445923078164\
062862089986280348253421170679";

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Référence Machin (entiers scalés) ------------------------ */

/// arctan(1/q) · scale, troncature terme à terme.
fn arctan_inv_q_scaled(q: i64, scale: &BigInt) -> BigInt {
    let q = BigInt::from(q);
    let q2 = &q * &q;

    let mut q_pow = q;
    let mut sum = BigInt::zero();
    let mut k: u64 = 0;

    loop {
        let term = scale / (&q_pow * BigInt::from(2 * k + 1));
        if term.is_zero() {
            break;
        }
        if k.is_even() {
            sum += term;
        } else {
            sum -= term;
        }
        q_pow *= &q2;
        k += 1;
    }
    sum
}

/// "3" + `digits` décimales de π (Machin : 16·atan(1/5) − 4·atan(1/239)).
fn pi_machin(digits: usize) -> String {
    let extra = 10u32;
    let scale = BigInt::from(10).pow(digits as u32 + extra);

    let a = arctan_inv_q_scaled(5, &scale);
    let b = arctan_inv_q_scaled(239, &scale);
    let pi = (BigInt::from(16) * a - BigInt::from(4) * b) / BigInt::from(10).pow(extra);
    pi.to_string()
}

/* ------------------------ Scénarios ------------------------ */

#[test]
fn sci_zero_terme() {
    assert_eq!(pi_approche(0), RatNum::entier(0));
    assert_eq!(pi_decimal(0).unwrap().to_string(), "0.0...");
}

#[test]
fn sci_une_decimale() {
    let l = pi_decimal(1).unwrap();
    assert!(l.to_string().starts_with("3.1"), "lecture={l}");
}

#[test]
fn sci_precision_par_defaut_70() {
    let l = pi_decimal(70).unwrap();
    assert_eq!(l.decimales.len(), 70);
    assert_eq!(l.to_string(), format!("{}...", &PI_100[..72]));
}

#[test]
fn sci_accord_avec_machin() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let digits = 100;
    let l = pi_decimal(digits).unwrap();
    budget(t0, max);

    let serie = format!("{}{}", l.entier, l.decimales);
    let machin = pi_machin(digits);

    // marge sur les derniers chiffres (troncatures des deux côtés)
    assert_eq!(&serie[..96], &machin[..96]);
    assert_eq!(&l.to_string()[..97], &PI_100[..97]);
}

/* ------------------------ Invariants de la série ------------------------ */

#[test]
fn sci_termes_positifs_et_sommes_croissantes() {
    let sommes: Vec<RatNum> = SommesPartielles::new().take(20).collect();
    for k in 0..20u64 {
        assert!(RatNum::entier(0).less_than(&terme(k)), "k={k}");
    }
    for w in sommes.windows(2) {
        assert!(w[0].less_than(&w[1]));
    }
    // sous-approximations de π
    let pi_haut = RatNum::parse("3141592653589793238462643383279503/1000000000000000000000000000000000")
        .unwrap();
    assert!(sommes.iter().all(|s| s.less_than(&pi_haut)));
}

#[test]
fn sci_convergence_monotone() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut precedent = RatNum::entier(0);
    let mut ecart_precedent: Option<RatNum> = None;

    for (k, somme) in SommesPartielles::new().take(40).enumerate() {
        let ecart = somme.sub(&precedent).abs();
        if let Some(avant) = &ecart_precedent {
            assert!(ecart.less_than(avant), "k={k}: écart non décroissant");
            // termes décroissants : au moins la raison 1/16
            assert!(ecart.mul(&RatNum::entier(16)).less_than(avant), "k={k}");
        }
        ecart_precedent = Some(ecart);
        precedent = somme;
        budget(t0, max);
    }
}

#[test]
fn sci_sommes_canoniques() {
    for s in SommesPartielles::new().take(30) {
        assert!(s.denom().is_positive());
        assert!(s.numer().gcd(s.denom()).is_one());
    }
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_precision_safe() {
    let t0 = Instant::now();
    let max = Duration::from_secs(10);

    let l = pi_decimal(200).unwrap();
    budget(t0, max);

    assert_eq!(l.entier, "3");
    assert_eq!(l.decimales.len(), 200);
    assert!(l.decimales.starts_with(&PI_100[2..]));
}
