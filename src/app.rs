// src/app.rs
//
// Calculatrice clavier — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppClavier (pour main.rs: use crate::app::AppClavier;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - On lit les événements clavier BRUTS (appui ET relâchement), pas le texte.
// - Les répétitions automatiques sont ignorées (une frappe = une transition).

pub mod etat;
pub mod vue;

pub use etat::AppClavier;

use eframe::egui;

use crate::clavier::{Modificateurs, Touche};

/// Touche physique egui -> identifiant du clavier (None = ignorée).
fn touche_depuis_egui(key: egui::Key) -> Option<Touche> {
    use egui::Key;

    let t = match key {
        Key::F2 => Touche::Calc,
        Key::Num0 => Touche::Chiffre(0),
        Key::Num1 => Touche::Chiffre(1),
        Key::Num2 => Touche::Chiffre(2),
        Key::Num3 => Touche::Chiffre(3),
        Key::Num4 => Touche::Chiffre(4),
        Key::Num5 => Touche::Chiffre(5),
        Key::Num6 => Touche::Chiffre(6),
        Key::Num7 => Touche::Chiffre(7),
        Key::Num8 => Touche::Chiffre(8),
        Key::Num9 => Touche::Chiffre(9),
        Key::Equals => Touche::Egal,
        Key::Plus => Touche::Plus,
        Key::Minus => Touche::Moins,
        Key::Slash => Touche::Slash,
        Key::Period => Touche::Point,
        Key::OpenBracket => Touche::Autre('['),
        Key::CloseBracket => Touche::Autre(']'),
        Key::Escape => Touche::Echap,
        Key::Backspace => Touche::Retour,
        Key::ArrowLeft => Touche::Gauche,
        Key::ArrowDown => Touche::Bas,
        Key::ArrowUp => Touche::Haut,
        Key::ArrowRight => Touche::Droite,
        Key::Enter => Touche::Entree,
        Key::Space => Touche::Espace,
        _ => {
            // lettres : la lettre minuscule (le document reste lisible)
            let nom = key.name();
            let mut cs = nom.chars();
            match (cs.next(), cs.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => {
                    Touche::Autre(c.to_ascii_lowercase())
                }
                _ => return None,
            }
        }
    };
    Some(t)
}

fn modificateurs_depuis_egui(m: egui::Modifiers) -> Modificateurs {
    let mut out = Modificateurs::empty();
    out.set(Modificateurs::SHIFT, m.shift);
    out.set(Modificateurs::CTRL, m.ctrl);
    out.set(Modificateurs::ALT, m.alt);
    out.set(Modificateurs::GUI, m.mac_cmd);
    out
}

impl eframe::App for AppClavier {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = ctx.input(|i| i.events.clone());
        for ev in events {
            if let egui::Event::Key {
                key,
                pressed,
                repeat,
                modifiers,
                ..
            } = ev
            {
                if repeat {
                    continue;
                }
                if let Some(touche) = touche_depuis_egui(key) {
                    self.evenement(touche, pressed, modificateurs_depuis_egui(modifiers));
                }
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
