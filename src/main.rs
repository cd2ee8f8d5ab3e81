// src/main.rs
//
// Calculatrice clavier — point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------------
// But:
// - NATIF : CLI (clap) + journaux (tracing) + configuration TOML
//   - `--eval EXPR` : passe l’expression par le clavier, sans fenêtre
//   - sinon         : eframe::run_native (hôte simulé)
// - WEB (wasm32) : eframe::WebRunner + <canvas>, configuration par défaut
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

mod app;
mod clavier;
mod config;
mod noyau;

use app::AppClavier;
use config::Config;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice clavier";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;

    use anyhow::{anyhow, bail, Result};
    use clap::Parser;
    use eframe::egui;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    use super::{AppClavier, Config, TITRE_APP};
    use crate::clavier::{Calculatrice, HoteMemoire, Modificateurs, Signal, Touche};

    /// Calculatrice interceptée au clavier (hôte simulé).
    #[derive(Parser, Debug)]
    #[command(name = "calculatrice-clavier", version, about)]
    pub struct Args {
        /// Fichier de configuration TOML (défaut : dossier de config utilisateur)
        #[arg(long, short = 'c')]
        pub config: Option<PathBuf>,

        /// Évalue EXPR comme si elle était tapée, affiche la sortie, sans fenêtre
        #[arg(long, value_name = "EXPR")]
        pub eval: Option<String>,
    }

    /// Journaux sur stderr ; RUST_LOG prend le dessus.
    fn init_tracing() -> Result<()> {
        let filtre =
            EnvFilter::from_default_env().add_directive("calculatrice_clavier=info".parse()?);
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filtre)
            .init();
        Ok(())
    }

    fn charger_config(chemin: Option<&std::path::Path>) -> Result<Config> {
        match chemin {
            // Fichier explicite : une erreur est fatale
            Some(p) => Config::charger(Some(p)),
            None => Ok(Config::charger(None).unwrap_or_else(|e| {
                tracing::warn!("configuration ignorée: {e:#}");
                Config::default()
            })),
        }
    }

    /// Mode sans fenêtre : Calc, l’expression, puis « = ».
    pub fn evaluer_en_ligne(expr: &str, config: &Config) -> Result<String> {
        if let Some(c) = expr
            .chars()
            .find(|&c| Touche::depuis_caractere(c).caractere().is_none())
        {
            bail!("caractère hors grammaire: {c:?}");
        }

        let mut calc = Calculatrice::new(config);
        let mut hote = HoteMemoire::default();
        let aucun = Modificateurs::empty();

        calc.handle(Touche::Calc, true, aucun, &mut hote);
        calc.handle(Touche::Calc, false, aucun, &mut hote);
        calc.taper(expr, &mut hote);
        calc.handle(Touche::Egal, true, aucun, &mut hote);
        calc.handle(Touche::Egal, false, aucun, &mut hote);

        if hote.a_signale(Signal::Erreur) {
            bail!("évaluation impossible: {expr:?} (sortie: {:?})", hote.sortie);
        }
        Ok(hote.sortie)
    }

    pub fn main() -> Result<()> {
        let args = Args::parse();
        init_tracing()?;

        let config = charger_config(args.config.as_deref())?;
        tracing::debug!(?config, "configuration chargée");

        if let Some(expr) = args.eval {
            let sortie = evaluer_en_ligne(&expr, &config)?;
            println!("{sortie}");
            return Ok(());
        }

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([520.0, 740.0])
                .with_min_inner_size([420.0, 620.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(move |_cc| Ok(Box::new(AppClavier::new(config)))),
        )
        .map_err(|e| anyhow!("eframe: {e}"))
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    natif::main()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppClavier, Config, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus (pas de fichier de config côté web)
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let canvas: HtmlCanvasElement = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(AppClavier::new(Config::default())))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
