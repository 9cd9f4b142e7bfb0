//! src/app/etat.rs
//!
//! Réglages de la ligne de commande (sans calcul, sans affichage).
//!
//! Contrats :
//! - un seul argument positionnel optionnel : la précision D (défaut 70)
//! - précision illisible => erreur clap + code de sortie non nul
//! - pas de borne sur D : le coût (temps, mémoire) est à la charge de l'appelant
//! - pas de variable d'environnement

use clap::Parser;
use pi_qpur::ErreurRat;

/// Précision par défaut (nombre de termes = nombre de décimales).
pub const DIGITS_DEFAUT: usize = 70;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pi_qpur")]
#[command(version)]
#[command(about = "π en arithmétique rationnelle exacte (série d'extraction de chiffres)")]
pub struct Options {
    /// Nombre de termes de la série = nombre de décimales affichées
    #[arg(value_parser = parse_precision, default_value_t = DIGITS_DEFAUT)]
    pub digits: usize,

    /// Journal détaillé (debug) sur stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Aucun journal, seulement la ligne résultat
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Options {
    /// Niveau max du journal ; None => pas d'abonné installé.
    pub fn niveau_journal(&self) -> Option<tracing::Level> {
        if self.quiet {
            None
        } else if self.verbose {
            Some(tracing::Level::DEBUG)
        } else {
            Some(tracing::Level::INFO)
        }
    }
}

/// Précision : entier naturel en décimal.
pub fn parse_precision(s: &str) -> Result<usize, ErreurRat> {
    s.trim().parse::<usize>().map_err(|_| ErreurRat::precision(s))
}
