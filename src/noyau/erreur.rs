// src/noyau/erreur.rs
//
// Erreurs du noyau exact. Aucune n'est transitoire : chaque variante signale
// une violation de contrat (entrée ou argument), remontée telle quelle.

use thiserror::Error;

/// Résultat du noyau.
pub type Result<T> = std::result::Result<T, ErreurRat>;

/// Erreurs du noyau rationnel et du pilote π.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurRat {
    /// Construction a/b avec b = 0.
    #[error("dénominateur nul")]
    DenominateurNul,

    /// Texte qui ne suit pas la grammaire "a" ou "a/b".
    #[error("lecture impossible de {entree:?} : {raison}")]
    Lecture {
        /// Texte reçu.
        entree: String,
        /// Ce qui cloche.
        raison: String,
    },

    /// Division par un rationnel nul, ou puissance négative de zéro.
    #[error("division par zéro")]
    DivisionParZero,

    /// pgcd(0, 0) n'existe pas.
    #[error("pgcd(0, 0) indéfini")]
    PgcdIndefini,

    /// Précision (nombre de termes) illisible en ligne de commande.
    #[error("précision invalide {entree:?} : entier naturel attendu")]
    Precision {
        /// Argument reçu.
        entree: String,
    },
}

impl ErreurRat {
    pub fn lecture(entree: impl Into<String>, raison: impl Into<String>) -> Self {
        Self::Lecture {
            entree: entree.into(),
            raison: raison.into(),
        }
    }

    pub fn precision(entree: impl Into<String>) -> Self {
        Self::Precision {
            entree: entree.into(),
        }
    }
}
