//! Noyau exact Q-pur
//!
//! Organisation interne :
//! - erreur.rs   : erreurs typées (thiserror)
//! - ratnum.rs   : rationnel exact canonique (BigInt / BigInt)
//! - serie.rs    : série d'extraction de chiffres pour π (sommes partielles)
//! - lecture.rs  : lecture décimale tronquée + π sur D décimales

pub mod erreur;
pub mod lecture;
pub mod ratnum;
pub mod serie;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::{ErreurRat, Result};
pub use lecture::{lecture_decimale, pi_decimal, Lecture};
pub use ratnum::{pgcd, RatNum};
pub use serie::{pi_approche, terme, SommesPartielles};
