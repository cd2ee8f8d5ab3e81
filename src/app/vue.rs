// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Un seul AppClavier (etat.rs) pour natif + wasm
// - Document de l’hôte en lecture seule (c’est le clavier qui tape)
// - Pavé cliquable : chaque bouton = appui + relâchement
// - Shift / Ctrl verrouillables (tactile, pas de vrai modificateur)
//
// Note :
// - Les frappes du vrai clavier arrivent par app.rs (événements bruts)

use eframe::egui;

use super::etat::AppClavier;
use crate::clavier::{Signal, Touche};
use crate::noyau::{evaluer, formater_texte};

impl AppClavier {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice clavier");
                ui.label("F2 (ou la touche CALC) : entrer en mode calcul, puis « = ».");
                ui.add_space(6.0);

                ui.label("Document :");
                Self::champ_monospace(ui, "document_out", &self.document, 4);

                ui.add_space(6.0);
                self.ui_etat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_journal(ui);
            });
    }

    fn ui_etat(&mut self, ui: &mut egui::Ui) {
        let tampon = self.calc.tampon();

        ui.horizontal(|ui| {
            let mode = match (self.calc.est_actif(), self.calc.est_engage()) {
                (false, _) => "inactif",
                (true, false) => "actif",
                (true, true) => "actif (saisie)",
            };
            ui.label(format!("Mode : {mode}"));
            ui.separator();
            ui.label(format!("Tampon : {}/{}", tampon.len(), tampon.capacite()));
        });

        ui.label("Expression :");
        Self::champ_monospace(ui, "expression_out", self.calc.expression(), 1);

        // Aperçu seulement : rien n’est tapé tant que « = » n’est pas relâché.
        if self.calc.est_actif() && !tampon.is_empty() {
            let apercu = evaluer(self.calc.expression())
                .and_then(|e| formater_texte(e.valeur, e.precision));
            match apercu {
                Ok(s) => ui.monospace(format!("= {s}")),
                Err(e) => ui.weak(format!("({e})")),
            };
        }

        match self.dernier_signal {
            Some(Signal::Activation) => {
                ui.colored_label(egui::Color32::from_rgb(60, 170, 90), "♪ activation");
            }
            Some(Signal::Erreur) => {
                ui.colored_label(ui.visuals().error_fg_color, "♪ erreur");
            }
            None => {}
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.toggle_value(&mut self.shift, "Shift")
                .on_hover_text("Verrouille Shift pour les prochains clics");
            ui.toggle_value(&mut self.ctrl, "Ctrl")
                .on_hover_text("Verrouille Ctrl pour les prochains clics");

            ui.separator();

            self.bouton_touche(ui, "CALC", Touche::Calc);
            self.bouton_touche(ui, "ESC", Touche::Echap);
            self.bouton_touche(ui, "⌫", Touche::Retour);

            ui.separator();

            let resp = ui
                .add_sized([56.0, 30.0], egui::Button::new("CLR"))
                .on_hover_text("Efface le document");
            if resp.clicked() {
                self.effacer_document();
            }
            let resp = ui
                .add_sized([56.0, 30.0], egui::Button::new("AC"))
                .on_hover_text("Remise à zéro totale");
            if resp.clicked() {
                self.reset_total();
            }
        });

        ui.add_space(6.0);

        egui::Grid::new("pave_clavier")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_touche(ui, "7", Touche::Chiffre(7));
                self.bouton_touche(ui, "8 *", Touche::Chiffre(8));
                self.bouton_touche(ui, "9 (", Touche::Chiffre(9));
                self.bouton_touche(ui, "/", Touche::Slash);
                self.bouton_touche(ui, "←", Touche::Gauche);
                ui.end_row();

                self.bouton_touche(ui, "4", Touche::Chiffre(4));
                self.bouton_touche(ui, "5", Touche::Chiffre(5));
                self.bouton_touche(ui, "6", Touche::Chiffre(6));
                self.bouton_touche(ui, "-", Touche::Moins);
                self.bouton_touche(ui, "→", Touche::Droite);
                ui.end_row();

                self.bouton_touche(ui, "1", Touche::Chiffre(1));
                self.bouton_touche(ui, "2", Touche::Chiffre(2));
                self.bouton_touche(ui, "3", Touche::Chiffre(3));
                self.bouton_touche(ui, "= +", Touche::Egal);
                self.bouton_touche(ui, "↑", Touche::Haut);
                ui.end_row();

                self.bouton_touche(ui, "0 )", Touche::Chiffre(0));
                self.bouton_touche(ui, ".", Touche::Point);
                self.bouton_touche(ui, "␣", Touche::Espace);
                self.bouton_touche(ui, "↵", Touche::Entree);
                self.bouton_touche(ui, "↓", Touche::Bas);
                ui.end_row();
            });
    }

    fn ui_journal(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Journal des touches")
            .default_open(false)
            .show(ui, |ui| {
                let texte = self
                    .journal
                    .iter()
                    .rev()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join("\n");
                Self::champ_monospace(ui, "journal_out", &texte, 6);
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Lecture seule : cadre + label monospace (pas de TextEdit).
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.taper_touche(touche);
        }
    }
}
