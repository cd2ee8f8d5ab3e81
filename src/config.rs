//! Configuration de la calculatrice.
//!
//! Chargée depuis `--config CHEMIN`, sinon `~/.config/calculatrice-clavier/config.toml`,
//! sinon valeurs par défaut.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::clavier::tampon::CAPACITE_DEFAUT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Capacité du tampon d’expression (bornée à 1..=256 à l’usage).
    pub capacite_tampon: usize,

    /// Réécrit la question avant la réponse : "\n<expression>=<résultat>".
    pub reformuler_question: bool,

    /// Émis à la place du résultat quand le calcul échoue.
    pub indicateur_erreur: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacite_tampon: CAPACITE_DEFAUT,
            reformuler_question: false,
            indicateur_erreur: "ERR".to_string(),
        }
    }
}

impl Config {
    pub fn depuis_toml(texte: &str) -> Result<Self> {
        toml::from_str(texte).context("configuration TOML invalide")
    }

    /// Chemin explicite : toute erreur remonte.
    /// Sans chemin : fichier par défaut s’il existe, sinon défauts.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger(chemin: Option<&std::path::Path>) -> Result<Self> {
        if let Some(chemin) = chemin {
            return Self::charger_depuis(chemin);
        }

        match Self::chemin_defaut() {
            Some(chemin) if chemin.exists() => Self::charger_depuis(&chemin),
            Some(chemin) => {
                tracing::debug!("pas de configuration à {}, défauts", chemin.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger_depuis(chemin: &std::path::Path) -> Result<Self> {
        let texte = std::fs::read_to_string(chemin)
            .with_context(|| format!("lecture impossible: {}", chemin.display()))?;
        Self::depuis_toml(&texte).with_context(|| format!("dans {}", chemin.display()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn chemin_defaut() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|d| d.join("calculatrice-clavier").join("config.toml"))
    }
}
