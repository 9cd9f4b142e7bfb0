// src/noyau/serie.rs
//
// π par la série d'extraction de chiffres (Bailey–Borwein–Plouffe) :
//
//   π = Σ_k 16^-k · ( 4/(8k+1) − 2/(8k+4) − 1/(8k+5) − 1/(8k+6) )
//
// Tout reste exact (RatNum). Chaque terme apporte environ un chiffre
// hexadécimal. Pas de test de convergence : on somme exactement `termes` termes.
//
// Coût : les numérateurs/dénominateurs grossissent avec k, donc temps et
// mémoire croissent plus vite que linéairement avec le nombre de termes.
// Aucune borne n'est imposée ici ; c'est l'appelant qui choisit.

use std::num::NonZeroU64;
use tracing::{debug, trace};

use super::ratnum::RatNum;

/// 16 : raison inverse de la série.
const SEIZE: NonZeroU64 = NonZeroU64::MIN.saturating_add(15);

/// 8k + c, jamais nul pour c ≥ 1.
fn huit_k_plus(k: u64, c: u64) -> NonZeroU64 {
    NonZeroU64::MIN.saturating_add(8 * k + c - 1)
}

/// Terme k (sans le facteur 16^-k).
pub fn terme(k: u64) -> RatNum {
    let t1 = RatNum::sur(4, huit_k_plus(k, 1));
    let t2 = RatNum::sur(2, huit_k_plus(k, 4));
    let t3 = RatNum::sur(1, huit_k_plus(k, 5));
    let t4 = RatNum::sur(1, huit_k_plus(k, 6));

    t1.sub(&t2).sub(&t3).sub(&t4)
}

/// Sommes partielles successives de la série (itérateur infini).
///
/// Le n-ième élément produit (n ≥ 1) est la somme des termes 0..n.
#[derive(Clone, Debug)]
pub struct SommesPartielles {
    k: u64,
    resultat: RatNum,
    echelle: RatNum,
    un_seizieme: RatNum,
}

impl SommesPartielles {
    pub fn new() -> Self {
        Self {
            k: 0,
            resultat: RatNum::entier(0),
            echelle: RatNum::entier(1),
            un_seizieme: RatNum::sur(1, SEIZE),
        }
    }

    /// Accumulation courante (0 tant qu'aucun terme n'a été ajouté).
    pub fn courant(&self) -> &RatNum {
        &self.resultat
    }

    /// Nombre de termes déjà sommés.
    pub fn termes(&self) -> u64 {
        self.k
    }

    /// Ajoute le terme suivant.
    pub fn avance(&mut self) {
        let t = self.echelle.mul(&terme(self.k));
        self.resultat = self.resultat.add(&t);
        self.echelle = self.echelle.mul(&self.un_seizieme);
        self.k += 1;

        trace!(
            k = self.k,
            bits_den = self.resultat.denom().bits(),
            "terme ajouté"
        );
    }
}

impl Default for SommesPartielles {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SommesPartielles {
    type Item = RatNum;

    fn next(&mut self) -> Option<RatNum> {
        self.avance();
        Some(self.resultat.clone())
    }
}

/// Approximation exacte de π après exactement `termes` termes (0 => 0).
pub fn pi_approche(termes: usize) -> RatNum {
    let mut somme = SommesPartielles::new();
    for _ in 0..termes {
        somme.avance();
    }

    debug!(
        termes,
        bits_num = somme.courant().numer().bits(),
        bits_den = somme.courant().denom().bits(),
        "série π sommée"
    );

    somme.resultat
}
