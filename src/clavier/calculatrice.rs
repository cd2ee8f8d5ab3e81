//! Machine à états des frappes : décide ce qui est saisie de calcul
//! et ce qui doit continuer vers l’hôte.
//!
//! `handle` renvoie `true` si l’hôte doit encore traiter l’événement,
//! `false` si la calculatrice le consomme.
//!
//! Contrats :
//! - Inerte hors mode calculatrice (aucun effet de bord).
//! - Seul Shift est toléré ; tout autre modificateur laisse passer (raccourcis).
//! - Sur relâchement de '=' : on sort du mode AVANT de calculer. La sortie est
//!   tapée par l’hôte et peut revenir ici comme frappes : elle ne doit jamais
//!   être capturée comme nouvelle saisie.

use tracing::{debug, trace, warn};

use super::hote::{Hote, Signal};
use super::tampon::TamponExpression;
use super::touches::{Modificateurs, Touche};
use crate::config::Config;
use crate::noyau::eval::valeur_ou_nan;
use crate::noyau::{evaluer, formater};

#[derive(Clone, Debug)]
pub struct Calculatrice {
    tampon: TamponExpression,
    actif: bool,
    /// '=' pressé (sans Shift), relâchement pas encore vu.
    engage: bool,

    reformuler: bool,
    indicateur_erreur: String,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Calculatrice {
    pub fn new(config: &Config) -> Self {
        Self {
            tampon: TamponExpression::new(config.capacite_tampon),
            actif: false,
            engage: false,
            reformuler: config.reformuler_question,
            indicateur_erreur: config.indicateur_erreur.clone(),
        }
    }

    pub fn est_actif(&self) -> bool {
        self.actif
    }

    pub fn est_engage(&self) -> bool {
        self.engage
    }

    pub fn tampon(&self) -> &TamponExpression {
        &self.tampon
    }

    pub fn expression(&self) -> &str {
        self.tampon.as_str()
    }

    /// Sortie complète du mode : tampon vidé, drapeaux baissés.
    pub fn reinitialiser(&mut self) {
        self.tampon.vider();
        self.actif = false;
        self.engage = false;
    }

    /// Point d’entrée : une transition de touche (appui ou relâchement).
    pub fn handle<H: Hote + ?Sized>(
        &mut self,
        touche: Touche,
        presse: bool,
        mods: Modificateurs,
        hote: &mut H,
    ) -> bool {
        if touche == Touche::Calc && presse {
            self.tampon.vider();
            self.actif = true;
            self.engage = false;
            hote.signal(Signal::Activation);
            debug!("mode calculatrice activé");
            return false;
        }

        if !self.actif {
            return true;
        }

        // Autre chose que Shift (Ctrl, Alt…) : ce n’est pas pour nous.
        if !mods.difference(Modificateurs::SHIFT).is_empty() {
            return true;
        }

        let touche = if mods.contains(Modificateurs::SHIFT) {
            match touche.avec_shift() {
                Some(t) => t,
                None => return true,
            }
        } else {
            touche
        };

        match touche {
            Touche::Echap => {
                self.reinitialiser();
                debug!("mode calculatrice annulé");
                true
            }

            Touche::Retour => {
                if presse {
                    self.tampon.retirer();
                }
                true
            }

            // On ne peut pas bloquer le curseur de l’hôte, mais on évite de le déplacer
            // (le tampon ne suivrait plus ce qui est à l’écran).
            t if t.est_navigation() => {
                if presse {
                    warn!(touche = ?t, "navigation bloquée en mode calculatrice");
                    hote.signal(Signal::Erreur);
                }
                false
            }

            // Ici '=' n’est jamais shifté (Shift+= a été réécrit en '+').
            Touche::Egal => self.terminer(presse, hote),

            t => match t.caractere() {
                Some(c) => self.enregistrer(c, presse, hote),
                None => true,
            },
        }
    }

    /// Saisit un texte comme une suite d’appuis/relâchements sans modificateur.
    pub fn taper<H: Hote + ?Sized>(&mut self, texte: &str, hote: &mut H) {
        for c in texte.chars() {
            let t = Touche::depuis_caractere(c);
            self.handle(t, true, Modificateurs::empty(), hote);
            self.handle(t, false, Modificateurs::empty(), hote);
        }
    }

    fn enregistrer<H: Hote + ?Sized>(&mut self, c: char, presse: bool, hote: &mut H) -> bool {
        if !presse {
            return true;
        }
        match self.tampon.pousser(c) {
            Ok(()) => {
                trace!(caractere = %c, len = self.tampon.len(), "saisie");
                true
            }
            Err(e) => {
                // Trop de touches : la frappe est perdue, le mode reste actif.
                warn!("{e}, frappe ignorée");
                hote.signal(Signal::Erreur);
                false
            }
        }
    }

    fn terminer<H: Hote + ?Sized>(&mut self, presse: bool, hote: &mut H) -> bool {
        if presse {
            self.engage = true;
            return true;
        }
        if !self.engage {
            return true;
        }

        // D’abord sortir du mode : la sortie émise peut revenir comme frappes.
        self.actif = false;
        self.engage = false;
        self.calculer(hote);
        self.reinitialiser();
        false
    }

    fn calculer<H: Hote + ?Sized>(&self, hote: &mut H) {
        let texte = self.tampon.as_str();

        if self.reformuler {
            hote.emettre('\n');
            for c in texte.chars() {
                hote.emettre(c);
            }
            hote.emettre('=');
        }

        // formater n’émet rien s’il échoue : pas de résultat partiel
        let evaluation = evaluer(texte);
        trace!(valeur = valeur_ou_nan(&evaluation), "évaluation");
        let resultat =
            evaluation.and_then(|e| formater(e.valeur, e.precision, |c| hote.emettre(c)));

        match resultat {
            Ok(()) => debug!(expression = texte, "résultat émis"),
            Err(e) => {
                debug!(expression = texte, erreur = %e, "échec du calcul");
                for c in self.indicateur_erreur.chars() {
                    hote.emettre(c);
                }
                hote.signal(Signal::Erreur);
            }
        }
    }
}
