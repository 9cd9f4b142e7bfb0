// src/main.rs
//
// π Q-pur — point d'entrée ligne de commande
// ------------------------------------------
// - stdout : exactement une ligne, "pi = <entier>.<D décimales>..."
// - stderr : journal (tracing), niveau choisi par -v / -q
// - erreur : message sur stderr + code de sortie non nul

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

mod app;

use app::Options;

fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    if let Some(niveau) = options.niveau_journal() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(niveau)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    debug!(?options, "réglages");

    let t0 = Instant::now();
    let lecture = pi_qpur::pi_decimal(options.digits)
        .with_context(|| format!("calcul de π sur {} décimales", options.digits))?;
    info!(
        digits = options.digits,
        duree_ms = t0.elapsed().as_millis() as u64,
        "π calculé"
    );

    println!("{}", app::vue::ligne_resultat(&lecture));
    Ok(())
}
